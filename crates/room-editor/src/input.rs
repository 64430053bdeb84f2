//! Typed input events from the host surface
//!
//! The rendering surface resolves raw pointer input into world-space
//! hits; the engine only ever sees this closed event set and never
//! computes ray/geometry intersections itself.

use glam::Vec3;
use uuid::Uuid;

use crate::state::ToolMode;

/// Modifier keys held during a pointer event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Multi-select modifier (Ctrl/Cmd).
    pub multi_select: bool,
}

/// What the surface resolved under the pointer for one event.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerHit {
    /// Ground-plane intersection in world space, if the ray hit it.
    pub world_point: Option<Vec3>,
    /// Topmost scene object under the pointer, if any.
    pub object: Option<Uuid>,
    pub modifiers: Modifiers,
}

impl PointerHit {
    pub fn on_object(object: Uuid) -> Self {
        Self {
            object: Some(object),
            ..Self::default()
        }
    }

    pub fn at_point(point: Vec3) -> Self {
        Self {
            world_point: Some(point),
            ..Self::default()
        }
    }

    pub fn with_multi_select(mut self) -> Self {
        self.modifiers.multi_select = true;
        self
    }
}

/// Pointer gesture phase, as delivered by the host in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed(PointerHit),
    Moved(PointerHit),
    Released(PointerHit),
    /// A click that did not become a drag; drives selection and is
    /// delivered regardless of the active tool.
    Clicked(PointerHit),
}

/// Direction of a keyboard nudge (arrow keys).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NudgeDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Discrete keyboard commands the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Nudge(NudgeDirection),
    /// Delete/backspace: remove the selection.
    Delete,
    Undo,
    Redo,
    ToggleSnap,
    SetTool(ToolMode),
}
