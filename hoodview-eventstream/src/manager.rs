use crate::scene::{
    SceneCursorMovedEvent, SceneGraphEvent, SceneMouseDownEvent, SceneMouseUpEvent,
};
use crate::stream::{EventStream, EventStreamConfig, UpdateStatus};
use crate::window::{ElementState, MouseButton, TouchPhase, WindowEvent};
use std::sync::Arc;
use std::time::Instant;

/// Handler invoked with exclusive access to the app state for each event
/// that passes its stream's configuration.
pub trait EventStreamHandler<State>: Send + Sync + 'static {
    fn handle(&self, event: &SceneGraphEvent, state: &mut State) -> UpdateStatus;
}

impl<State, F> EventStreamHandler<State> for F
where
    F: Fn(&SceneGraphEvent, &mut State) -> UpdateStatus + Send + Sync + 'static,
{
    fn handle(&self, event: &SceneGraphEvent, state: &mut State) -> UpdateStatus {
        self(event, state)
    }
}

pub struct EventStreamManager<State> {
    state: State,
    streams: Vec<(EventStream, Arc<dyn EventStreamHandler<State>>)>,
    // Track current cursor position, mouse input events don't carry one
    current_cursor_position: Option<[f32; 2]>,
}

impl<State: 'static> EventStreamManager<State> {
    pub fn new(state: State) -> Self {
        Self {
            state,
            streams: Vec::new(),
            current_cursor_position: None,
        }
    }

    /// Register a new event handler with the given configuration
    pub fn register_handler(
        &mut self,
        config: EventStreamConfig,
        handler: Arc<dyn EventStreamHandler<State>>,
    ) {
        self.streams.push((EventStream::new(config), handler));
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    pub fn cursor_position(&self) -> Option<[f32; 2]> {
        self.current_cursor_position
    }

    /// Convert a window event into a scene event and run every matching
    /// handler to completion, in registration order.
    pub fn dispatch_event(&mut self, event: &WindowEvent, instant: Instant) -> UpdateStatus {
        if let Some(position) = event.position() {
            self.current_cursor_position = Some(position);
        }

        let scene_event = match event {
            WindowEvent::MouseInput(input) => {
                self.current_cursor_position
                    .map(|position| match input.state {
                        ElementState::Pressed => {
                            SceneGraphEvent::MouseDown(SceneMouseDownEvent {
                                position,
                                button: input.button,
                            })
                        }
                        ElementState::Released => SceneGraphEvent::MouseUp(SceneMouseUpEvent {
                            position,
                            button: input.button,
                        }),
                    })
            }
            WindowEvent::CursorMoved(e) => Some(SceneGraphEvent::CursorMoved(
                SceneCursorMovedEvent {
                    position: e.position,
                },
            )),
            WindowEvent::Touch(touch) => Some(match touch.phase {
                TouchPhase::Started => SceneGraphEvent::MouseDown(SceneMouseDownEvent {
                    position: touch.position,
                    button: MouseButton::Left,
                }),
                TouchPhase::Moved => SceneGraphEvent::CursorMoved(SceneCursorMovedEvent {
                    position: touch.position,
                }),
                TouchPhase::Ended | TouchPhase::Cancelled => {
                    SceneGraphEvent::MouseUp(SceneMouseUpEvent {
                        position: touch.position,
                        button: MouseButton::Left,
                    })
                }
            }),
            // Keep the last position so a release outside the window still
            // reaches the mouse-up streams
            WindowEvent::CursorLeft => Some(SceneGraphEvent::CursorLeft),
            WindowEvent::CursorEntered | WindowEvent::WindowResize(_) => None,
        };

        match scene_event {
            Some(scene_event) => self.dispatch_single_event(&scene_event, instant),
            None => UpdateStatus::default(),
        }
    }

    fn dispatch_single_event(&mut self, event: &SceneGraphEvent, instant: Instant) -> UpdateStatus {
        let mut status = UpdateStatus::default();
        for (stream, handler) in &mut self.streams {
            if stream.matches_and_update(event, instant) {
                stream.last_handled_time = Some(instant);
                tracing::trace!(event_type = ?event.event_type(), "dispatching scene event");
                status = status.merge(handler.handle(event, &mut self.state));

                if stream.config.consume {
                    break;
                }
            }
        }
        status
    }
}

impl<State: Default + 'static> Default for EventStreamManager<State> {
    fn default() -> Self {
        Self::new(State::default())
    }
}
