//! Room Editor Interaction Engine
//!
//! Converts pointer and keyboard input, filtered through the active
//! tool mode and selection, into scene mutations with undo/redo:
//! - EditorState: tool mode, selection set, grid snapping
//! - EditHistory: capped edit log with true undo/redo replay
//! - TransformController: drag/click/nudge gesture handling
//! - EditorSession: one owned editing context, no global state
//! - SceneGenerator: optional prompt-to-scene collaborator

pub mod controller;
pub mod generate;
pub mod input;
pub mod session;
pub mod state;

pub use controller::*;
pub use generate::*;
pub use input::*;
pub use session::*;
pub use state::*;
