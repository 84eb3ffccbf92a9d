use std::sync::Arc;
use std::time::Instant;

use hoodview_eventstream::manager::EventStreamManager;
use hoodview_eventstream::scene::{SceneGraphEvent, SceneGraphEventType};
use hoodview_eventstream::stream::{EventStreamConfig, UpdateStatus};
use hoodview_eventstream::window::{
    ElementState, MouseButton, TouchPhase, WindowCursorMoved, WindowEvent, WindowMouseInput,
    WindowTouch,
};

#[derive(Default)]
struct DragLog {
    downs: Vec<[f32; 2]>,
    drags: Vec<[f32; 2]>,
    ups: usize,
}

fn drag_manager() -> EventStreamManager<DragLog> {
    let mut manager = EventStreamManager::new(DragLog::default());
    manager.register_handler(
        EventStreamConfig::left_mouse_down(),
        Arc::new(|event: &SceneGraphEvent, state: &mut DragLog| {
            state.downs.extend(event.position());
            UpdateStatus::default()
        }),
    );
    manager.register_handler(
        EventStreamConfig::left_drag(),
        Arc::new(|event: &SceneGraphEvent, state: &mut DragLog| {
            state.drags.extend(event.position());
            UpdateStatus::rerender()
        }),
    );
    manager.register_handler(
        EventStreamConfig::left_mouse_up(),
        Arc::new(|_event: &SceneGraphEvent, state: &mut DragLog| {
            state.ups += 1;
            UpdateStatus::default()
        }),
    );
    manager
}

fn cursor(x: f32, y: f32) -> WindowEvent {
    WindowEvent::CursorMoved(WindowCursorMoved { position: [x, y] })
}

fn mouse(state: ElementState, button: MouseButton) -> WindowEvent {
    WindowEvent::MouseInput(WindowMouseInput { state, button })
}

#[test]
fn test_mouse_drag_gesture() {
    let now = Instant::now();
    let mut manager = drag_manager();

    // Moves before the press are not drags
    assert_eq!(manager.dispatch_event(&cursor(1.0, 1.0), now), UpdateStatus::default());
    manager.dispatch_event(&mouse(ElementState::Pressed, MouseButton::Left), now);
    let status = manager.dispatch_event(&cursor(5.0, 1.0), now);
    assert!(status.rerender);
    manager.dispatch_event(&cursor(9.0, 2.0), now);
    manager.dispatch_event(&mouse(ElementState::Released, MouseButton::Left), now);
    manager.dispatch_event(&cursor(20.0, 2.0), now);

    let log = manager.state();
    assert_eq!(log.downs, vec![[1.0, 1.0]]);
    assert_eq!(log.drags, vec![[5.0, 1.0], [9.0, 2.0]]);
    assert_eq!(log.ups, 1);
}

#[test]
fn test_release_outside_window_ends_drag() {
    let now = Instant::now();
    let mut manager = drag_manager();
    manager.dispatch_event(&cursor(1.0, 1.0), now);
    manager.dispatch_event(&mouse(ElementState::Pressed, MouseButton::Left), now);
    manager.dispatch_event(&cursor(6.0, 1.0), now);
    manager.dispatch_event(&WindowEvent::CursorLeft, now);
    assert_eq!(manager.cursor_position(), Some([6.0, 1.0]));

    manager.dispatch_event(&mouse(ElementState::Released, MouseButton::Left), now);
    let status = manager.dispatch_event(&cursor(3.0, 1.0), now);
    assert_eq!(status, UpdateStatus::default());

    let log = manager.state();
    assert_eq!(log.ups, 1);
    assert_eq!(log.drags, vec![[6.0, 1.0]]);
}

#[test]
fn test_mouse_input_without_cursor_is_dropped() {
    let now = Instant::now();
    let mut manager = drag_manager();
    manager.dispatch_event(&mouse(ElementState::Pressed, MouseButton::Left), now);
    assert!(manager.state().downs.is_empty());
    assert_eq!(manager.cursor_position(), None);
}

#[test]
fn test_right_button_does_not_start_drag() {
    let now = Instant::now();
    let mut manager = drag_manager();
    manager.dispatch_event(&cursor(1.0, 1.0), now);
    manager.dispatch_event(&mouse(ElementState::Pressed, MouseButton::Right), now);
    manager.dispatch_event(&cursor(5.0, 1.0), now);
    assert!(manager.state().drags.is_empty());
}

#[test]
fn test_touch_maps_to_left_button() {
    let now = Instant::now();
    let mut manager = drag_manager();
    for (phase, x) in [
        (TouchPhase::Started, 1.0),
        (TouchPhase::Moved, 4.0),
        (TouchPhase::Ended, 4.0),
    ] {
        manager.dispatch_event(
            &WindowEvent::Touch(WindowTouch {
                phase,
                position: [x, 0.0],
            }),
            now,
        );
    }
    let log = manager.state();
    assert_eq!(log.downs, vec![[1.0, 0.0]]);
    assert_eq!(log.drags, vec![[4.0, 0.0]]);
    assert_eq!(log.ups, 1);
}

#[test]
fn test_consume_stops_propagation() {
    let now = Instant::now();
    let mut manager = EventStreamManager::new(0usize);
    manager.register_handler(
        EventStreamConfig {
            types: vec![SceneGraphEventType::CursorLeft],
            consume: true,
            ..Default::default()
        },
        Arc::new(|_: &SceneGraphEvent, count: &mut usize| {
            *count += 1;
            UpdateStatus::default()
        }),
    );
    manager.register_handler(
        EventStreamConfig {
            types: vec![SceneGraphEventType::CursorLeft],
            ..Default::default()
        },
        Arc::new(|_: &SceneGraphEvent, count: &mut usize| {
            *count += 10;
            UpdateStatus::default()
        }),
    );
    manager.dispatch_event(&WindowEvent::CursorLeft, now);
    assert_eq!(*manager.state(), 1);
}
