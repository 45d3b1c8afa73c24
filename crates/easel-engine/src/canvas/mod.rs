//! Drawing-context boundary.
//!
//! The engine paints through [`Canvas2d`], an immediate-mode 2D context
//! modeled on the host-surface verbs the shapes need. Backends translate the
//! calls onto a real surface; [`Recorder`] captures them as data instead,
//! which is what the tests and the headless sandbox run against.

mod recorder;

pub use recorder::{CanvasOp, Recorder};

use crate::paint::Color;

/// Immediate-mode 2D drawing context.
///
/// Width/height accessors delegate to the underlying drawable object, so a
/// resize through the surface reaches the host.
///
/// Extending the boundary: add a verb here, a matching [`CanvasOp`] variant,
/// and teach backends to honor it.
pub trait Canvas2d {
    fn width(&self) -> f32;
    fn set_width(&mut self, width: f32);
    fn height(&self) -> f32;
    fn set_height(&mut self, height: f32);

    /// Erases a rectangular region of the drawable area.
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    fn begin_path(&mut self);
    fn set_fill_style(&mut self, color: Color);
    fn set_stroke_style(&mut self, color: Color);

    /// Adds a circular arc centered at `(x, y)`; angles are in radians.
    fn arc(&mut self, x: f32, y: f32, radius: f32, start_angle: f32, end_angle: f32);
    fn fill(&mut self);

    /// Adds a rectangle outline to the current path.
    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    /// Fills a rectangle directly, bypassing the current path.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn stroke(&mut self);
}
