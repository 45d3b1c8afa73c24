mod circle;
mod line;
mod rect;

pub use circle::{Circle, LERP_STEPS};
pub use line::Line;
pub use rect::Rectangle;

use crate::canvas::Canvas2d;

/// Discriminant tag for shape variants.
///
/// Kind lookups filter on this tag rather than on runtime type information.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Line,
}

/// A drawable shape.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here and a `kind` tag
/// - add a render arm in `run_render_path`
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
    Line(Line),
}

impl Shape {
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Line(_) => ShapeKind::Line,
        }
    }

    /// Paints the shape onto `canvas` using its own style and geometry.
    ///
    /// Degenerate geometry (zero radius, coincident corners) simply renders a
    /// degenerate shape; there are no error conditions.
    pub fn run_render_path(&self, canvas: &mut dyn Canvas2d) {
        match self {
            Shape::Circle(c) => c.run_render_path(canvas),
            Shape::Rectangle(r) => r.run_render_path(canvas),
            Shape::Line(l) => l.run_render_path(canvas),
        }
    }

    #[inline]
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Shape::Circle(c) => Some(c),
            _ => None,
        }
    }

    #[inline]
    pub fn as_circle_mut(&mut self) -> Option<&mut Circle> {
        match self {
            Shape::Circle(c) => Some(c),
            _ => None,
        }
    }

    #[inline]
    pub fn as_line(&self) -> Option<&Line> {
        match self {
            Shape::Line(l) => Some(l),
            _ => None,
        }
    }
}
