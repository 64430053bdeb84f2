//! Edit history and undo/redo
//!
//! The history is a capped, append-only log of semantic edits with a
//! cursor. Recording while the cursor is behind the tail discards the
//! abandoned branch (linear undo). Every [`Edit`] carries enough data
//! to invert itself, so moving the cursor replays real state changes
//! against the [`SceneStore`].

use std::time::SystemTime;

use room_core::{Scene, SceneObject, SceneStore, Transform};
use uuid::Uuid;

/// Default log cap; exceeding it evicts the oldest entry.
pub const DEFAULT_HISTORY_CAP: usize = 50;

/// Transform change of one object within a single gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformChange {
    pub id: Uuid,
    pub before: Transform,
    pub after: Transform,
}

/// A removed object together with the index it occupied, so undo can
/// restore insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct RemovedObject {
    pub index: usize,
    pub object: SceneObject,
}

/// One semantic edit, self-inverting.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    /// An object was created (placement).
    AddObject { object: SceneObject },
    /// One or more objects were deleted, in removal order.
    RemoveObjects { removed: Vec<RemovedObject> },
    /// One completed transform gesture over the selection.
    TransformObjects { changes: Vec<TransformChange> },
    /// The scene was replaced wholesale (generation, load).
    ReplaceScene { before: Scene, after: Scene },
}

impl Edit {
    pub fn description(&self) -> &'static str {
        match self {
            Edit::AddObject { .. } => "Add Object",
            Edit::RemoveObjects { .. } => "Delete Objects",
            Edit::TransformObjects { .. } => "Transform Objects",
            Edit::ReplaceScene { .. } => "Replace Scene",
        }
    }

    /// Apply the edit in the forward direction (redo).
    fn apply(&self, store: &mut SceneStore) {
        match self {
            Edit::AddObject { object } => store.insert(object.clone()),
            Edit::RemoveObjects { removed } => {
                for r in removed {
                    store.remove(r.object.id);
                }
            }
            Edit::TransformObjects { changes } => {
                for c in changes {
                    store.set_transform(c.id, c.after);
                }
            }
            Edit::ReplaceScene { after, .. } => store.load(after.clone()),
        }
    }

    /// Apply the inverse of the edit (undo).
    fn revert(&self, store: &mut SceneStore) {
        match self {
            Edit::AddObject { object } => {
                store.remove(object.id);
            }
            Edit::RemoveObjects { removed } => {
                // Re-insert in reverse removal order; each recorded index
                // was taken against the list as it stood at removal time.
                for r in removed.iter().rev() {
                    store.insert_at(r.index, r.object.clone());
                }
            }
            Edit::TransformObjects { changes } => {
                for c in changes {
                    store.set_transform(c.id, c.before);
                }
            }
            Edit::ReplaceScene { before, .. } => store.load(before.clone()),
        }
    }
}

/// One logged, timestamped edit. Immutable once appended, except for
/// branch truncation and cap eviction.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub edit: Edit,
    pub timestamp: SystemTime,
}

/// Capped edit log with an undo/redo cursor.
#[derive(Debug, Clone)]
pub struct EditHistory {
    entries: Vec<HistoryEntry>,
    /// Index of the last applied entry; -1 when nothing is applied.
    cursor: isize,
    cap: usize,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAP)
    }
}

impl EditHistory {
    pub fn new(cap: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: -1,
            cap,
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> isize {
        self.cursor
    }

    /// Stamp and append an edit. Entries after the cursor are discarded
    /// first; exceeding the cap evicts the oldest entry. The cursor ends
    /// at the new tail.
    pub fn record(&mut self, edit: Edit) {
        self.entries.truncate((self.cursor + 1) as usize);
        tracing::debug!("record: {}", edit.description());
        self.entries.push(HistoryEntry {
            edit,
            timestamp: SystemTime::now(),
        });
        if self.entries.len() > self.cap {
            self.entries.remove(0);
        }
        self.cursor = self.entries.len() as isize - 1;
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.entries.len() as isize - 1
    }

    /// Revert the entry at the cursor against the store and step the
    /// cursor back. No-op at the head of the log.
    pub fn undo(&mut self, store: &mut SceneStore) -> bool {
        if !self.can_undo() {
            return false;
        }
        let entry = &self.entries[self.cursor as usize];
        entry.edit.revert(store);
        tracing::debug!("Undo: {}", entry.edit.description());
        self.cursor -= 1;
        true
    }

    /// Step the cursor forward and re-apply that entry against the
    /// store. No-op at the tail.
    pub fn redo(&mut self, store: &mut SceneStore) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        let entry = &self.entries[self.cursor as usize];
        entry.edit.apply(store);
        tracing::debug!("Redo: {}", entry.edit.description());
        true
    }

    /// Drop all history.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = -1;
    }
}
