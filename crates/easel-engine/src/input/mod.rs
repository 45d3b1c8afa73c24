//! Input boundary.
//!
//! Platform-agnostic pointer events. The host translates its native input
//! into these and dispatches them into the application context; the engine
//! never sees platform event types.

use crate::coords::Vec2;

/// Pointer event kinds the sandbox reacts to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PointerEventKind {
    Moved,
    Click,
}

/// Pointer event in canvas pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    #[inline]
    pub fn moved(x: f32, y: f32) -> Self {
        Self { kind: PointerEventKind::Moved, x, y }
    }

    #[inline]
    pub fn click(x: f32, y: f32) -> Self {
        Self { kind: PointerEventKind::Click, x, y }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}
