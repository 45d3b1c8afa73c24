use crate::canvas::Canvas2d;
use crate::coords::Vec2;
use crate::core::Interaction;
use crate::input::{PointerEvent, PointerEventKind};
use crate::paint::Color;
use crate::scene::shapes::Line;
use crate::scene::{Shape, ShapeKind};
use crate::surface::Surface;

/// Maximum number of trail lines kept in the stack.
pub const TRAIL_CAP: usize = 100;

/// Pointer-move demo: a FIFO-bounded fan of lines from the origin to the
/// pointer position.
#[derive(Debug)]
pub struct PointerTrail {
    color: Color,
}

impl PointerTrail {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl<C: Canvas2d> Interaction<C> for PointerTrail {
    fn on_pointer(&mut self, surface: &mut Surface<C>, event: &PointerEvent) {
        if event.kind != PointerEventKind::Moved {
            return;
        }

        let stack = surface.stack_mut();

        // Evict the oldest line before pushing so the trail never exceeds
        // the cap.
        let lines = stack.ids_of_kind(ShapeKind::Line);
        if lines.len() >= TRAIL_CAP {
            if let Some(&oldest) = lines.first() {
                stack.remove(oldest);
            }
        }

        stack.push(Shape::Line(Line::new(Vec2::zero(), event.position(), self.color)));
    }
}
