use crate::scene::{SceneGraphEvent, SceneGraphEventType};
use crate::window::MouseButton;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Predicate an event must satisfy to be passed to a stream's handler
#[derive(Clone)]
pub struct EventStreamFilter(pub Arc<dyn Fn(&SceneGraphEvent) -> bool + Send + Sync>);

impl EventStreamFilter {
    pub fn new(f: impl Fn(&SceneGraphEvent) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Only pass events carrying the given mouse button
    pub fn button(button: MouseButton) -> Self {
        Self::new(move |event| event.button() == Some(button))
    }

    pub fn matches(&self, event: &SceneGraphEvent) -> bool {
        (self.0)(event)
    }
}

impl Debug for EventStreamFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "EventStreamFilter")
    }
}

#[derive(Clone, Debug, Default)]
pub struct EventStreamConfig {
    /// Event types to include in the stream
    pub types: Vec<SceneGraphEventType>,

    /// If true, the event will be consumed by the event stream and
    /// not propagated to other streams
    pub consume: bool,

    /// If specified, only events matching all of the filters will be included
    pub filter: Option<Vec<EventStreamFilter>>,

    /// If specified, only events that occur after the start stream has been triggered
    /// and before the end stream has been triggered will be included
    pub between: Option<(Box<EventStreamConfig>, Box<EventStreamConfig>)>,

    /// Minimum time (in milliseconds) between events
    pub throttle: Option<u64>,
}

impl EventStreamConfig {
    /// Stream of left-button presses
    pub fn left_mouse_down() -> Self {
        Self {
            types: vec![SceneGraphEventType::MouseDown],
            filter: Some(vec![EventStreamFilter::button(MouseButton::Left)]),
            ..Default::default()
        }
    }

    /// Stream of left-button releases
    pub fn left_mouse_up() -> Self {
        Self {
            types: vec![SceneGraphEventType::MouseUp],
            filter: Some(vec![EventStreamFilter::button(MouseButton::Left)]),
            ..Default::default()
        }
    }

    /// Stream of cursor moves while the left button is held
    pub fn left_drag() -> Self {
        Self {
            types: vec![SceneGraphEventType::CursorMoved],
            between: Some((
                Box::new(Self::left_mouse_down()),
                Box::new(Self::left_mouse_up()),
            )),
            ..Default::default()
        }
    }
}

/// What a handler needs from the app after it ran
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateStatus {
    pub rerender: bool,
    pub rebuild_geometry: bool,
}

impl UpdateStatus {
    pub fn rerender() -> Self {
        Self {
            rerender: true,
            rebuild_geometry: false,
        }
    }

    pub fn merge(self, other: UpdateStatus) -> Self {
        Self {
            rerender: self.rerender || other.rerender,
            rebuild_geometry: self.rebuild_geometry || other.rebuild_geometry,
        }
    }
}

/// Internal struct representing the matching state of an event stream
#[derive(Clone, Debug)]
pub(crate) struct EventStream {
    pub(crate) config: EventStreamConfig,
    between_state: Option<BetweenState>,
    pub(crate) last_handled_time: Option<Instant>,
}

#[derive(Clone, Debug)]
struct BetweenState {
    started: bool,
    start_stream: Box<EventStream>,
    end_stream: Box<EventStream>,
}

impl EventStream {
    pub(crate) fn new(config: EventStreamConfig) -> Self {
        let between_state = config
            .between
            .as_ref()
            .map(|(start_cfg, end_cfg)| BetweenState {
                started: false,
                start_stream: Box::new(EventStream::new(start_cfg.as_ref().clone())),
                end_stream: Box::new(EventStream::new(end_cfg.as_ref().clone())),
            });

        Self {
            config,
            between_state,
            last_handled_time: None,
        }
    }

    pub(crate) fn matches_and_update(&mut self, event: &SceneGraphEvent, now: Instant) -> bool {
        if let Some(between) = &mut self.between_state {
            if !between.started {
                if between.start_stream.matches_event(event) {
                    between.started = true;
                }
                return false;
            } else if between.end_stream.matches_event(event) {
                between.started = false;
                return false;
            }
        }

        self.matches_event(event) && self.should_handle_event(now)
    }

    pub(crate) fn matches_event(&self, event: &SceneGraphEvent) -> bool {
        if !self.config.types.contains(&event.event_type()) {
            return false;
        }

        if let Some(filters) = &self.config.filter {
            if !filters.iter().all(|filter| filter.matches(event)) {
                return false;
            }
        }

        true
    }

    fn should_handle_event(&self, now: Instant) -> bool {
        if let (Some(throttle), Some(last_time)) = (self.config.throttle, self.last_handled_time) {
            if now.duration_since(last_time) < Duration::from_millis(throttle) {
                return false;
            }
        }
        true
    }
}
