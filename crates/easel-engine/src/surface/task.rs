use crate::coords::Vec2;
use crate::scene::ShapeId;

/// A bounded linear interpolation of a circle's position.
///
/// The surface owns these records and advances each one step per refresh,
/// dropping completed ones. The iteration counter lives on the target circle
/// itself, so stacked tasks against the same circle share its progress.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LerpTask {
    pub target: ShapeId,
    pub from: Vec2,
    pub to: Vec2,
}

impl LerpTask {
    #[inline]
    pub fn new(target: ShapeId, from: Vec2, to: Vec2) -> Self {
        Self { target, from, to }
    }
}
