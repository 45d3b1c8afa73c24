use crate::canvas::Canvas2d;
use crate::coords::Vec2;
use crate::paint::Color;

/// Axis-aligned rectangle spanning two corner points.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub from: Vec2,
    pub to: Vec2,
    pub background: Option<Color>,
    pub border: Option<Color>,
}

impl Rectangle {
    pub fn new(from: Vec2, to: Vec2, background: Option<Color>, border: Option<Color>) -> Self {
        Self { from, to, background, border }
    }

    #[inline]
    pub fn set_from(&mut self, from: Vec2) {
        self.from = from;
    }

    #[inline]
    pub fn set_to(&mut self, to: Vec2) {
        self.to = to;
    }

    pub(crate) fn run_render_path(&self, canvas: &mut dyn Canvas2d) {
        canvas.begin_path();
        if let Some(border) = self.border {
            canvas.set_stroke_style(border);
        }

        let size = self.to - self.from;
        // Fill when a background color is present, outline otherwise.
        match self.background {
            Some(background) => {
                canvas.set_fill_style(background);
                canvas.fill_rect(self.from.x, self.from.y, size.x, size.y);
            }
            None => {
                canvas.rect(self.from.x, self.from.y, size.x, size.y);
                canvas.stroke();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{CanvasOp, Recorder};

    #[test]
    fn background_takes_the_fill_path() {
        let rect = Rectangle::new(
            Vec2::new(10.0, 20.0),
            Vec2::new(110.0, 70.0),
            Some(Color::BLUE),
            None,
        );

        let mut rec = Recorder::new(200.0, 200.0);
        rect.run_render_path(&mut rec);

        assert_eq!(
            rec.ops(),
            &[
                CanvasOp::BeginPath,
                CanvasOp::FillStyle(Color::BLUE),
                CanvasOp::FillRect { x: 10.0, y: 20.0, width: 100.0, height: 50.0 },
            ]
        );
    }

    #[test]
    fn missing_background_takes_the_outline_path() {
        let rect = Rectangle::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(40.0, 40.0),
            None,
            Some(Color::WHITE),
        );

        let mut rec = Recorder::new(200.0, 200.0);
        rect.run_render_path(&mut rec);

        assert_eq!(
            rec.ops(),
            &[
                CanvasOp::BeginPath,
                CanvasOp::StrokeStyle(Color::WHITE),
                CanvasOp::Rect { x: 0.0, y: 0.0, width: 40.0, height: 40.0 },
                CanvasOp::Stroke,
            ]
        );
    }
}
