//! Owned editing session context
//!
//! One [`EditorSession`] per editing session, constructed explicitly
//! and passed where needed; there is no ambient global state. All
//! input is dispatched synchronously in delivery order, so the session
//! itself needs no locking; multi-threaded hosts wrap it in the single
//! [`SharedSession`] lock.

use std::sync::Arc;

use parking_lot::RwLock;
use uuid::Uuid;

use room_core::{
    AssetCatalog, ObjectInit, ObjectMetadata, PersistError, Scene, SceneStore, persist,
};

use crate::controller::TransformController;
use crate::generate::{GenerateError, SceneGenerator};
use crate::input::{KeyCommand, NudgeDirection, PointerEvent};
use crate::state::{Edit, EditHistory, EditorState};

/// Shared handle for multi-threaded hosts. One lock around the whole
/// session suffices; all operations are whole-object replacements.
pub type SharedSession = Arc<RwLock<EditorSession>>;

/// Everything one editing session owns: the scene store, the transient
/// interaction state, the edit history, the gesture controller and the
/// asset catalog.
pub struct EditorSession {
    pub store: SceneStore,
    pub editor: EditorState,
    pub history: EditHistory,
    pub controller: TransformController,
    pub catalog: AssetCatalog,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// Fresh session with an empty scene and the built-in catalog.
    pub fn new() -> Self {
        Self {
            store: SceneStore::new(),
            editor: EditorState::new(),
            history: EditHistory::default(),
            controller: TransformController::new(),
            catalog: AssetCatalog::builtin(),
        }
    }

    /// Session restored from the saved scene slot, or fresh if the
    /// slot is absent or unreadable.
    pub fn restore() -> Self {
        let mut session = Self::new();
        if let Some(scene) = persist::load_scene() {
            session.store.load(scene);
        }
        session
    }

    pub fn shared(self) -> SharedSession {
        Arc::new(RwLock::new(self))
    }

    /// Dispatch one pointer event from the rendering surface.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        self.controller
            .pointer_event(event, &mut self.store, &mut self.editor, &mut self.history);
    }

    /// Dispatch one keyboard command.
    pub fn handle_key(&mut self, command: KeyCommand) {
        match command {
            KeyCommand::Nudge(direction) => self.nudge(direction),
            KeyCommand::Delete => self.delete_selection(),
            KeyCommand::Undo => {
                self.undo();
            }
            KeyCommand::Redo => {
                self.redo();
            }
            KeyCommand::ToggleSnap => self.editor.toggle_snap(),
            KeyCommand::SetTool(tool) => self.editor.set_tool(tool),
        }
    }

    pub fn nudge(&mut self, direction: NudgeDirection) {
        self.controller
            .nudge(direction, &mut self.store, &self.editor, &mut self.history);
    }

    /// Toolbar move/rotate/scale buttons; larger translation step.
    pub fn toolbar_nudge(&mut self, direction: NudgeDirection) {
        self.controller
            .toolbar_nudge(direction, &mut self.store, &self.editor, &mut self.history);
    }

    pub fn delete_selection(&mut self) {
        self.controller
            .delete_selection(&mut self.store, &mut self.editor, &mut self.history);
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.store)
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.store)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Place a catalog asset into the scene at its default transform
    /// (an unknown asset id places at identity; the reference stays
    /// dangling and inert). One history entry per placement.
    pub fn place_asset(&mut self, asset_id: &str) -> Uuid {
        let transform = self
            .catalog
            .get(asset_id)
            .map(|a| a.default_transform)
            .unwrap_or_default();
        let id = self.store.add(ObjectInit::new(asset_id, transform));
        if let Some(object) = self.store.object(id) {
            self.history.record(Edit::AddObject {
                object: object.clone(),
            });
        }
        id
    }

    /// Run the generator and, only if it fully succeeded with a
    /// non-empty proposal, replace the scene with the result. Failure
    /// or an empty proposal leaves all state untouched. Returns the
    /// number of placed objects.
    pub fn generate_scene(
        &mut self,
        generator: &dyn SceneGenerator,
        prompt: &str,
    ) -> Result<usize, GenerateError> {
        let proposal = generator.generate(prompt)?;
        if proposal.objects.is_empty() {
            tracing::info!("generator returned an empty proposal, keeping scene");
            return Ok(0);
        }

        let before = self.store.snapshot();
        self.store.clear();
        for object in &proposal.objects {
            self.store.add(ObjectInit {
                asset_id: object.asset_id.clone(),
                transform: object.transform(),
                metadata: ObjectMetadata {
                    tags: object.tags.clone(),
                },
            });
        }
        let after = self.store.snapshot();
        let count = after.objects.len();
        self.history.record(Edit::ReplaceScene { before, after });
        self.editor.clear_selection();
        tracing::info!(count, "applied generated scene");
        Ok(count)
    }

    /// Save the current scene to the single well-known slot.
    pub fn save(&self) -> Result<(), PersistError> {
        persist::save_scene(&self.store.snapshot())
    }

    /// Replace the current scene and drop history and selection, as
    /// after loading a saved scene.
    pub fn load_scene(&mut self, scene: Scene) {
        self.store.load(scene);
        self.history.clear();
        self.editor.clear_selection();
    }
}
