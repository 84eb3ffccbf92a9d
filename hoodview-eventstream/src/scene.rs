use crate::window::MouseButton;

/// Events that can be handled by event streams
#[derive(Debug, Clone, PartialEq)]
pub enum SceneGraphEvent {
    MouseDown(SceneMouseDownEvent),
    MouseUp(SceneMouseUpEvent),
    CursorMoved(SceneCursorMovedEvent),
    CursorLeft,
}

impl SceneGraphEvent {
    pub fn position(&self) -> Option<[f32; 2]> {
        match self {
            Self::MouseDown(event) => Some(event.position),
            Self::MouseUp(event) => Some(event.position),
            Self::CursorMoved(event) => Some(event.position),
            Self::CursorLeft => None,
        }
    }

    pub fn button(&self) -> Option<MouseButton> {
        match self {
            Self::MouseDown(event) => Some(event.button),
            Self::MouseUp(event) => Some(event.button),
            _ => None,
        }
    }

    pub fn event_type(&self) -> SceneGraphEventType {
        match self {
            Self::MouseDown(..) => SceneGraphEventType::MouseDown,
            Self::MouseUp(..) => SceneGraphEventType::MouseUp,
            Self::CursorMoved(..) => SceneGraphEventType::CursorMoved,
            Self::CursorLeft => SceneGraphEventType::CursorLeft,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneGraphEventType {
    MouseDown,
    MouseUp,
    CursorMoved,
    CursorLeft,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneMouseDownEvent {
    pub position: [f32; 2],
    pub button: MouseButton,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneMouseUpEvent {
    pub position: [f32; 2],
    pub button: MouseButton,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneCursorMovedEvent {
    pub position: [f32; 2],
}
