//! Surface: drawing context + scene stack + interpolation tasks.
//!
//! `refresh()` is the single redraw entry point: clear, repaint every shape
//! in stack order, advance interpolation tasks, finalize the stroke state.

mod task;

pub use task::LerpTask;

use crate::canvas::Canvas2d;
use crate::paint::Color;
use crate::scene::SceneStack;
use crate::time::minimum_frametime_ms;

/// Target frame rate used when none is configured.
pub const DEFAULT_FRAMERATE: f32 = 120.0;

/// Owns the drawing context, the scene stack, and in-flight interpolation
/// tasks.
///
/// Generic over the canvas backend so callers keep typed access to it (the
/// tests and the headless sandbox read a [`Recorder`](crate::canvas::Recorder)
/// back out).
pub struct Surface<C: Canvas2d> {
    canvas: C,
    stack: SceneStack,
    tasks: Vec<LerpTask>,
    framerate: f32,
    minimum_frametime: f64,
}

impl<C: Canvas2d> Surface<C> {
    pub fn new(canvas: C) -> Self {
        Self::with_framerate(canvas, DEFAULT_FRAMERATE)
    }

    pub fn with_framerate(canvas: C, framerate: f32) -> Self {
        Self {
            canvas,
            stack: SceneStack::new(),
            tasks: Vec::new(),
            framerate,
            minimum_frametime: minimum_frametime_ms(framerate),
        }
    }

    /// Configured target frame rate.
    #[inline]
    pub fn framerate(&self) -> f32 {
        self.framerate
    }

    /// Minimum accepted inter-frame interval in milliseconds, derived from
    /// the configured frame rate.
    #[inline]
    pub fn minimum_frametime(&self) -> f64 {
        self.minimum_frametime
    }

    #[inline]
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    #[inline]
    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    #[inline]
    pub fn stack(&self) -> &SceneStack {
        &self.stack
    }

    #[inline]
    pub fn stack_mut(&mut self) -> &mut SceneStack {
        &mut self.stack
    }

    // Width/height delegate to the underlying canvas object.

    #[inline]
    pub fn width(&self) -> f32 {
        self.canvas.width()
    }

    #[inline]
    pub fn set_width(&mut self, width: f32) {
        self.canvas.set_width(width);
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.canvas.height()
    }

    #[inline]
    pub fn set_height(&mut self, height: f32) {
        self.canvas.set_height(height);
    }

    /// Queues an interpolation task. Tasks stack: a new task against a
    /// circle that is already interpolating is not de-duplicated.
    #[inline]
    pub fn push_task(&mut self, task: LerpTask) {
        self.tasks.push(task);
    }

    /// In-flight interpolation tasks.
    #[inline]
    pub fn tasks(&self) -> &[LerpTask] {
        &self.tasks
    }

    /// Clears the drawable area, repaints every shape in stack order,
    /// advances interpolation tasks, and finalizes the stroke state.
    pub fn refresh(&mut self) {
        let width = self.canvas.width();
        let height = self.canvas.height();
        self.canvas.clear_rect(0.0, 0.0, width, height);

        let canvas = &mut self.canvas;
        self.stack.for_each(|shape, _| shape.run_render_path(&mut *canvas));

        self.advance_tasks();

        self.canvas.stroke();
    }

    /// Advances every interpolation task one step, removing completed ones.
    ///
    /// On completion the circle is snapped to the task end point, `original`
    /// is re-based there, and the circle gets a fresh random background.
    fn advance_tasks(&mut self) {
        let stack = &mut self.stack;
        self.tasks.retain_mut(|task| {
            let Some(circle) = stack.get_mut(task.target).and_then(|s| s.as_circle_mut()) else {
                // Target gone, or no longer a circle: drop the task.
                return false;
            };

            match circle.lerp_step(task.from, task.to) {
                Some(next) => {
                    circle.set_position(next);
                    true
                }
                None => {
                    circle.set_position(task.to);
                    circle.snapshot_original();
                    circle.set_background(Some(Color::random_opaque(&mut rand::rng())));
                    false
                }
            }
        });
    }
}
