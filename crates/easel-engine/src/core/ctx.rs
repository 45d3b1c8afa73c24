use crate::canvas::Canvas2d;
use crate::demos::{ClickLerp, PointerTrail};
use crate::input::PointerEvent;
use crate::paint::Color;
use crate::scene::ShapeId;
use crate::surface::Surface;

/// Handler for pointer events dispatched by the host.
///
/// Implementations get mutable access to the surface for the duration of the
/// event, so they can grow the stack or queue interpolation tasks.
pub trait Interaction<C: Canvas2d> {
    fn on_pointer(&mut self, surface: &mut Surface<C>, event: &PointerEvent);
}

/// Application context: the surface plus its installed interactions.
pub struct Sandbox<C: Canvas2d> {
    surface: Surface<C>,
    interactions: Vec<Box<dyn Interaction<C>>>,
}

impl<C: Canvas2d> Sandbox<C> {
    pub fn new(surface: Surface<C>) -> Self {
        Self {
            surface,
            interactions: Vec::new(),
        }
    }

    #[inline]
    pub fn surface(&self) -> &Surface<C> {
        &self.surface
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut Surface<C> {
        &mut self.surface
    }

    /// Registers an interaction handler. Handlers see events in install
    /// order.
    pub fn install(&mut self, interaction: Box<dyn Interaction<C>>) {
        self.interactions.push(interaction);
    }

    /// Drops every installed interaction. In-flight interpolation tasks are
    /// unaffected; they run to completion on their own.
    pub fn clear_interactions(&mut self) {
        self.interactions.clear();
    }

    /// Named installers for the built-in interaction demos.
    pub fn experiments(&mut self) -> Experiments<'_, C> {
        Experiments { sandbox: self }
    }

    /// Routes one pointer event to every installed interaction.
    pub fn dispatch(&mut self, event: PointerEvent) {
        // Handlers are detached for the duration of the dispatch so they can
        // borrow the surface mutably.
        let mut interactions = std::mem::take(&mut self.interactions);
        for interaction in &mut interactions {
            interaction.on_pointer(&mut self.surface, &event);
        }
        // Anything installed during the dispatch lands after the existing
        // handlers.
        interactions.append(&mut self.interactions);
        self.interactions = interactions;
    }
}

/// Registry of named interaction installers.
pub struct Experiments<'a, C: Canvas2d> {
    sandbox: &'a mut Sandbox<C>,
}

impl<'a, C: Canvas2d> Experiments<'a, C> {
    /// Installs the pointer-trail demo: a capped fan of white lines from the
    /// origin to the pointer.
    pub fn mouse_move(&mut self) {
        self.sandbox.install(Box::new(PointerTrail::new(Color::WHITE)));
    }

    /// Installs the click-interpolation demo against the given circle.
    pub fn linear_interpolation(&mut self, target: ShapeId) {
        self.sandbox.install(Box::new(ClickLerp::new(target)));
    }
}
