//! Headless sandbox session.
//!
//! Wires the engine together the way a windowed host would: a surface over
//! the recording canvas, the three startup circles, both interaction demos,
//! and a loop controller fed monotonic timestamps. Pointer input is
//! scripted; the session reports its tallies through `log`.

use std::time::Instant;

use anyhow::{Context, Result};

use easel_engine::canvas::Recorder;
use easel_engine::coords::Vec2;
use easel_engine::core::{LoopController, Sandbox, TickOutcome};
use easel_engine::demos::PointerTrail;
use easel_engine::input::PointerEvent;
use easel_engine::logging::{LoggingConfig, init_logging};
use easel_engine::paint::Color;
use easel_engine::scene::shapes::Circle;
use easel_engine::scene::{Shape, ShapeKind};
use easel_engine::surface::Surface;

const CANVAS_SIZE: f32 = 400.0;
const SESSION_TICKS: u64 = 240;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut surface = Surface::new(Recorder::new(CANVAS_SIZE, CANVAS_SIZE));
    let red = surface.stack_mut().push(Shape::Circle(Circle::new(
        Vec2::new(100.0, 100.0),
        50.0,
        Some(Color::RED),
        None,
    )));
    surface.stack_mut().push(Shape::Circle(Circle::new(
        Vec2::new(240.0, 170.0),
        50.0,
        Some(Color::GREEN),
        None,
    )));
    surface.stack_mut().push(Shape::Circle(Circle::new(
        Vec2::new(370.0, 120.0),
        50.0,
        Some(Color::BLUE),
        None,
    )));

    let framerate = surface.framerate();
    let mut sandbox = Sandbox::new(surface);

    let trail_color = match std::env::var("EASEL_TRAIL_COLOR") {
        Ok(hex) => Color::from_hex(&hex).context("EASEL_TRAIL_COLOR must be #RRGGBB")?,
        Err(_) => Color::WHITE,
    };
    sandbox.install(Box::new(PointerTrail::new(trail_color)));
    sandbox.experiments().linear_interpolation(red);

    let mut controller = LoopController::new(framerate);
    let started = Instant::now();
    let mut rendered = 0u64;

    // Scripted session: sweep the pointer across the canvas, click once,
    // and let the interpolation run to completion.
    for tick in 0..SESSION_TICKS {
        let sweep = tick as f32 / SESSION_TICKS as f32;
        sandbox.dispatch(PointerEvent::moved(sweep * CANVAS_SIZE, sweep * CANVAS_SIZE * 0.5));

        if tick == 30 {
            sandbox.dispatch(PointerEvent::click(350.0, 300.0));
        }

        let frametime_ms = started.elapsed().as_secs_f64() * 1000.0;
        if let TickOutcome::Rendered { delta } = controller.on_tick(frametime_ms, &mut sandbox) {
            rendered += 1;
            log::debug!("tick {tick}: rendered with delta {delta:.3}");
        }
    }

    let circle = sandbox
        .surface()
        .stack()
        .get(red)
        .and_then(|shape| shape.as_circle())
        .context("startup circle disappeared from the stack")?;
    log::info!(
        "lerp circle now at ({:.0}, {:.0}), background {}",
        circle.position.x,
        circle.position.y,
        circle.background.map(|c| c.to_string()).unwrap_or_else(|| "none".into()),
    );

    let stack = sandbox.surface().stack();
    log::info!(
        "session done: {rendered}/{SESSION_TICKS} ticks rendered, {} shapes in the stack ({} trail lines), {} canvas ops recorded",
        stack.len(),
        stack.count_of_kind(ShapeKind::Line),
        sandbox.surface().canvas().ops().len(),
    );

    Ok(())
}
