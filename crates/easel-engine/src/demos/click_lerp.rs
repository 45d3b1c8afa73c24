use crate::canvas::Canvas2d;
use crate::core::Interaction;
use crate::input::{PointerEvent, PointerEventKind};
use crate::scene::ShapeId;
use crate::surface::{LerpTask, Surface};

/// Click demo: each click starts a bounded interpolation of a circle from
/// its last completed position (`original`) to the click point.
///
/// Clicks that arrive faster than completion stack additional tasks; there
/// is intentionally no de-duplication.
#[derive(Debug)]
pub struct ClickLerp {
    target: ShapeId,
}

impl ClickLerp {
    pub fn new(target: ShapeId) -> Self {
        Self { target }
    }
}

impl<C: Canvas2d> Interaction<C> for ClickLerp {
    fn on_pointer(&mut self, surface: &mut Surface<C>, event: &PointerEvent) {
        if event.kind != PointerEventKind::Click {
            return;
        }

        let Some(from) = surface
            .stack()
            .get(self.target)
            .and_then(|shape| shape.as_circle())
            .map(|circle| circle.original)
        else {
            // The target circle is gone; nothing to animate.
            return;
        };

        surface.push_task(LerpTask::new(self.target, from, event.position()));
    }
}
