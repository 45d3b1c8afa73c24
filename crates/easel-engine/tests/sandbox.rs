//! End-to-end coverage of the sandbox wiring: surface + stack + demos +
//! loop controller, all over the recording canvas backend.

use easel_engine::canvas::{CanvasOp, Recorder};
use easel_engine::coords::Vec2;
use easel_engine::core::{LoopController, Sandbox, TickOutcome};
use easel_engine::demos::TRAIL_CAP;
use easel_engine::input::PointerEvent;
use easel_engine::paint::Color;
use easel_engine::scene::shapes::Circle;
use easel_engine::scene::{Shape, ShapeKind};
use easel_engine::surface::Surface;

fn sandbox_400() -> Sandbox<Recorder> {
    Sandbox::new(Surface::new(Recorder::new(400.0, 400.0)))
}

#[test]
fn pointer_trail_caps_at_one_hundred_lines() {
    let mut sandbox = sandbox_400();
    sandbox.experiments().mouse_move();

    for i in 1..=101 {
        sandbox.dispatch(PointerEvent::moved(i as f32, i as f32));
    }

    let stack = sandbox.surface().stack();
    assert_eq!(stack.count_of_kind(ShapeKind::Line), TRAIL_CAP);

    // The line from the first event was evicted; the oldest survivor is the
    // one from the second event.
    let oldest_id = stack.ids_of_kind(ShapeKind::Line)[0];
    let oldest = stack.get(oldest_id).unwrap().as_line().unwrap();
    assert_eq!(oldest.to, Vec2::new(2.0, 2.0));
}

#[test]
fn trail_lines_start_at_the_origin_in_white() {
    let mut sandbox = sandbox_400();
    sandbox.experiments().mouse_move();
    sandbox.dispatch(PointerEvent::moved(120.0, 80.0));

    let stack = sandbox.surface().stack();
    let id = stack.ids_of_kind(ShapeKind::Line)[0];
    let line = stack.get(id).unwrap().as_line().unwrap();
    assert_eq!(line.from, Vec2::zero());
    assert_eq!(line.to, Vec2::new(120.0, 80.0));
    assert_eq!(line.background, Color::WHITE);
}

#[test]
fn click_interpolation_runs_to_completion() {
    let mut sandbox = sandbox_400();
    let id = sandbox
        .surface_mut()
        .stack_mut()
        .push(Shape::Circle(Circle::new(Vec2::zero(), 50.0, Some(Color::RED), None)));
    sandbox.experiments().linear_interpolation(id);

    sandbox.dispatch(PointerEvent::click(100.0, 0.0));
    assert_eq!(sandbox.surface().tasks().len(), 1);

    // 101 in-bounds steps land the circle on the click point.
    for _ in 0..101 {
        sandbox.surface_mut().refresh();
    }
    let circle = sandbox.surface().stack().get(id).unwrap().as_circle().unwrap();
    assert_eq!(circle.position, Vec2::new(100.0, 0.0));
    assert_eq!(sandbox.surface().tasks().len(), 1);

    // The next refresh completes: task dropped, original re-based, counter
    // reset, fresh background assigned.
    sandbox.surface_mut().refresh();
    let circle = sandbox.surface().stack().get(id).unwrap().as_circle().unwrap();
    assert!(sandbox.surface().tasks().is_empty());
    assert_eq!(circle.original, Vec2::new(100.0, 0.0));
    assert_eq!(circle.lerp_iterations(), 0);
    assert!(circle.background.is_some());
}

#[test]
fn stacked_clicks_are_not_deduplicated() {
    let mut sandbox = sandbox_400();
    let id = sandbox
        .surface_mut()
        .stack_mut()
        .push(Shape::Circle(Circle::new(Vec2::zero(), 50.0, Some(Color::RED), None)));
    sandbox.experiments().linear_interpolation(id);

    sandbox.dispatch(PointerEvent::click(100.0, 0.0));
    sandbox.dispatch(PointerEvent::click(0.0, 100.0));
    assert_eq!(sandbox.surface().tasks().len(), 2);
}

#[test]
fn cleared_interactions_stop_reacting_to_events() {
    let mut sandbox = sandbox_400();
    sandbox.experiments().mouse_move();
    sandbox.dispatch(PointerEvent::moved(10.0, 10.0));
    assert_eq!(sandbox.surface().stack().count_of_kind(ShapeKind::Line), 1);

    sandbox.clear_interactions();
    sandbox.dispatch(PointerEvent::moved(20.0, 20.0));
    assert_eq!(sandbox.surface().stack().count_of_kind(ShapeKind::Line), 1);
}

#[test]
fn refresh_paints_a_circle_with_its_background() {
    let mut surface = Surface::new(Recorder::new(400.0, 400.0));
    surface
        .stack_mut()
        .push(Shape::Circle(Circle::new(Vec2::new(100.0, 100.0), 50.0, Some(Color::RED), None)));

    surface.refresh();

    let ops = surface.canvas().ops();
    let fill_style = ops
        .iter()
        .position(|op| *op == CanvasOp::FillStyle(Color::RED))
        .expect("fill style set to the circle background");
    let arc = ops
        .iter()
        .position(|op| {
            matches!(op, CanvasOp::Arc { x, y, radius, .. } if *x == 100.0 && *y == 100.0 && *radius == 50.0)
        })
        .expect("arc centered on the circle");
    let fill = ops
        .iter()
        .position(|op| *op == CanvasOp::Fill)
        .expect("fill call");

    assert!(fill_style < arc && arc < fill);
}

#[test]
fn loop_controller_drives_frames_through_the_gate() {
    let mut sandbox = Sandbox::new(Surface::with_framerate(Recorder::new(400.0, 400.0), 60.0));
    let mut controller = LoopController::new(60.0);

    assert!(matches!(controller.on_tick(100.0, &mut sandbox), TickOutcome::Rendered { .. }));
    assert_eq!(controller.on_tick(104.0, &mut sandbox), TickOutcome::Skipped);
    assert!(matches!(controller.on_tick(120.0, &mut sandbox), TickOutcome::Rendered { .. }));
    assert_eq!(controller.gate().frames(), 2);
}
