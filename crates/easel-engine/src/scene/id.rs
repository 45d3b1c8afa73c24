/// Stable handle to a shape in a [`SceneStack`](super::SceneStack).
///
/// Assigned at push time; a stack never hands out the same id twice, so
/// removal by id is idempotent even across later pushes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ShapeId(pub(crate) u64);
