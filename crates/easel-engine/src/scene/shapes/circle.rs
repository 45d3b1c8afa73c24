use std::f32::consts::TAU;

use crate::canvas::Canvas2d;
use crate::coords::Vec2;
use crate::paint::Color;

/// Number of steps a position interpolation takes from start to end.
pub const LERP_STEPS: u32 = 100;

/// Filled circle with an interpolatable position.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub position: Vec2,
    pub radius: f32,
    /// Position snapshot taken at creation and again after each completed
    /// interpolation; the next interpolation starts from here.
    pub original: Vec2,
    pub background: Option<Color>,
    pub border: Option<Color>,
    lerp_iterations: u32,
}

impl Circle {
    pub fn new(position: Vec2, radius: f32, background: Option<Color>, border: Option<Color>) -> Self {
        Self {
            position,
            radius,
            original: position,
            background,
            border,
            lerp_iterations: 0,
        }
    }

    #[inline]
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    #[inline]
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }

    #[inline]
    pub fn set_background(&mut self, background: Option<Color>) {
        self.background = background;
    }

    /// Re-bases `original` on the current position.
    #[inline]
    pub fn snapshot_original(&mut self) {
        self.original = self.position;
    }

    #[inline]
    pub fn lerp_iterations(&self) -> u32 {
        self.lerp_iterations
    }

    /// Advances one interpolation step from `from` towards `to`.
    ///
    /// While the iteration counter is within bounds this returns the next
    /// position and increments the counter. Past the bound it resets the
    /// counter to 0, snapshots `original` from the current position, and
    /// returns `None` — exactly once per completed run.
    pub fn lerp_step(&mut self, from: Vec2, to: Vec2) -> Option<Vec2> {
        if self.lerp_iterations <= LERP_STEPS {
            let t = self.lerp_iterations as f32 / LERP_STEPS as f32;
            self.lerp_iterations += 1;
            Some(from.lerp(to, t))
        } else {
            self.original = self.position;
            self.lerp_iterations = 0;
            None
        }
    }

    pub(crate) fn run_render_path(&self, canvas: &mut dyn Canvas2d) {
        canvas.begin_path();
        if let Some(background) = self.background {
            canvas.set_fill_style(background);
        }
        if let Some(border) = self.border {
            canvas.set_stroke_style(border);
        }
        canvas.arc(self.position.x, self.position.y, self.radius, 0.0, TAU);
        canvas.fill();
    }
}
