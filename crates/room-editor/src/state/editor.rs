//! Editor interaction state

use thiserror::Error;
use uuid::Uuid;

/// Editor tool mode. Transitions are unconditional and only triggered
/// by explicit user action; there is no automatic mode change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    #[default]
    Select,
    Move,
    Rotate,
    Scale,
    /// Labeled mode only. Selecting it does not delete anything;
    /// deletion is driven by the delete key.
    Delete,
}

impl ToolMode {
    pub fn name(&self) -> &'static str {
        match self {
            ToolMode::Select => "Select",
            ToolMode::Move => "Move",
            ToolMode::Rotate => "Rotate",
            ToolMode::Scale => "Scale",
            ToolMode::Delete => "Delete",
        }
    }
}

/// Editor configuration error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    #[error("grid size must be positive and finite, got {0}")]
    InvalidGridSize(f32),
}

/// Transient per-session interaction state: active tool, selection set
/// and grid snapping. Selection ids are never validated against the
/// scene; stale ids after a removal are tolerated and simply match
/// nothing.
#[derive(Debug, Clone)]
pub struct EditorState {
    tool: ToolMode,
    /// Selected object ids, insertion-ordered, no duplicates.
    selected: Vec<Uuid>,
    snap_to_grid: bool,
    grid_size: f32,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            tool: ToolMode::Select,
            selected: Vec::new(),
            snap_to_grid: true,
            grid_size: 1.0,
        }
    }
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tool(&self) -> ToolMode {
        self.tool
    }

    pub fn set_tool(&mut self, tool: ToolMode) {
        if self.tool != tool {
            tracing::debug!("tool: {}", tool.name());
        }
        self.tool = tool;
    }

    pub fn selected(&self) -> &[Uuid] {
        &self.selected
    }

    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn is_selected(&self, id: Uuid) -> bool {
        self.selected.contains(&id)
    }

    /// Replace the selection wholesale, deduplicating while keeping
    /// first-occurrence order.
    pub fn set_selection(&mut self, ids: Vec<Uuid>) {
        self.selected.clear();
        for id in ids {
            if !self.selected.contains(&id) {
                self.selected.push(id);
            }
        }
    }

    /// Plain click: selection becomes exactly this object.
    pub fn select_only(&mut self, id: Uuid) {
        self.selected.clear();
        self.selected.push(id);
    }

    /// Modifier click: remove the object if selected, add it otherwise.
    pub fn toggle_selected(&mut self, id: Uuid) {
        if let Some(index) = self.selected.iter().position(|s| *s == id) {
            self.selected.remove(index);
        } else {
            self.selected.push(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn snap_to_grid(&self) -> bool {
        self.snap_to_grid
    }

    pub fn toggle_snap(&mut self) {
        self.snap_to_grid = !self.snap_to_grid;
    }

    pub fn grid_size(&self) -> f32 {
        self.grid_size
    }

    /// Set the snapping grid size. Non-positive or non-finite sizes are
    /// rejected as caller error; the previous size is kept.
    pub fn set_grid_size(&mut self, size: f32) -> Result<(), EditorError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(EditorError::InvalidGridSize(size));
        }
        self.grid_size = size;
        Ok(())
    }
}
