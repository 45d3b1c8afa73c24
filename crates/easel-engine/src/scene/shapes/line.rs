use crate::canvas::Canvas2d;
use crate::coords::Vec2;
use crate::paint::Color;

/// Straight stroked line segment.
///
/// `length` is computed once at construction; `Line` has no mutators, so it
/// cannot go stale.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub from: Vec2,
    pub to: Vec2,
    pub background: Color,
    length: f32,
}

impl Line {
    pub fn new(from: Vec2, to: Vec2, background: Color) -> Self {
        Self {
            from,
            to,
            background,
            length: from.distance(to),
        }
    }

    /// Euclidean length of the segment.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length
    }

    pub(crate) fn run_render_path(&self, canvas: &mut dyn Canvas2d) {
        canvas.begin_path();
        canvas.set_stroke_style(self.background);
        canvas.move_to(self.from.x, self.from.y);
        canvas.line_to(self.to.x, self.to.y);
        canvas.stroke();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_is_fixed_at_construction() {
        let line = Line::new(Vec2::zero(), Vec2::new(3.0, 4.0), Color::WHITE);
        assert_eq!(line.length(), 5.0);
    }
}
