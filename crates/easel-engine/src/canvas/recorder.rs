use crate::paint::Color;

use super::Canvas2d;

/// One recorded drawing-context call.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CanvasOp {
    ClearRect { x: f32, y: f32, width: f32, height: f32 },
    BeginPath,
    FillStyle(Color),
    StrokeStyle(Color),
    Arc { x: f32, y: f32, radius: f32, start_angle: f32, end_angle: f32 },
    Fill,
    Rect { x: f32, y: f32, width: f32, height: f32 },
    FillRect { x: f32, y: f32, width: f32, height: f32 },
    MoveTo { x: f32, y: f32 },
    LineTo { x: f32, y: f32 },
    Stroke,
}

/// Recording [`Canvas2d`] backend.
///
/// Captures the call stream in arrival order. Other backends can replay the
/// stream; the tests assert against it directly.
#[derive(Debug, Default)]
pub struct Recorder {
    width: f32,
    height: f32,
    ops: Vec<CanvasOp>,
}

impl Recorder {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, ops: Vec::new() }
    }

    /// Recorded calls in arrival order.
    #[inline]
    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    /// Drops recorded calls. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

impl Canvas2d for Recorder {
    fn width(&self) -> f32 {
        self.width
    }

    fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn set_height(&mut self, height: f32) {
        self.height = height;
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ops.push(CanvasOp::ClearRect { x, y, width, height });
    }

    fn begin_path(&mut self) {
        self.ops.push(CanvasOp::BeginPath);
    }

    fn set_fill_style(&mut self, color: Color) {
        self.ops.push(CanvasOp::FillStyle(color));
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.ops.push(CanvasOp::StrokeStyle(color));
    }

    fn arc(&mut self, x: f32, y: f32, radius: f32, start_angle: f32, end_angle: f32) {
        self.ops.push(CanvasOp::Arc { x, y, radius, start_angle, end_angle });
    }

    fn fill(&mut self) {
        self.ops.push(CanvasOp::Fill);
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ops.push(CanvasOp::Rect { x, y, width, height });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ops.push(CanvasOp::FillRect { x, y, width, height });
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.ops.push(CanvasOp::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.ops.push(CanvasOp::LineTo { x, y });
    }

    fn stroke(&mut self) {
        self.ops.push(CanvasOp::Stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_in_arrival_order() {
        let mut rec = Recorder::new(10.0, 20.0);
        rec.begin_path();
        rec.move_to(1.0, 2.0);
        rec.line_to(3.0, 4.0);
        rec.stroke();

        assert_eq!(
            rec.ops(),
            &[
                CanvasOp::BeginPath,
                CanvasOp::MoveTo { x: 1.0, y: 2.0 },
                CanvasOp::LineTo { x: 3.0, y: 4.0 },
                CanvasOp::Stroke,
            ]
        );
    }

    #[test]
    fn dimensions_are_mutable() {
        let mut rec = Recorder::new(10.0, 20.0);
        rec.set_width(400.0);
        rec.set_height(300.0);
        assert_eq!((rec.width(), rec.height()), (400.0, 300.0));
    }
}
