//! Pointer and keyboard transform controller
//!
//! Translates the typed input events into scene mutations, gated by
//! the active tool and selection. Every precondition failure (wrong
//! tool, nothing selected, no object under the pointer) is a silent
//! no-op; the controller never surfaces errors. One history entry is
//! recorded per completed gesture, never per intermediate frame.

use glam::Vec3;
use uuid::Uuid;

use room_core::{SceneStore, Transform};

use crate::input::{NudgeDirection, PointerEvent, PointerHit};
use crate::state::{Edit, EditHistory, EditorState, RemovedObject, ToolMode, TransformChange};

/// Translation step for one arrow-key nudge.
pub const NUDGE_STEP: f32 = 0.1;
/// Translation step for the toolbar nudge buttons.
pub const TOOLBAR_NUDGE_STEP: f32 = 1.0;
/// Rotation step about the vertical axis per nudge (15 degrees).
pub const ROTATE_STEP: f32 = std::f32::consts::PI / 12.0;
/// Uniform scale step per nudge.
pub const SCALE_STEP: f32 = 0.1;

/// Quantize each axis independently to the nearest grid multiple.
pub fn snap_to_grid(point: Vec3, grid_size: f32) -> Vec3 {
    (point / grid_size).round() * grid_size
}

/// Explicit pointer-gesture lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// A selected object is being dragged in move mode.
    Dragging {
        object: Uuid,
        /// Transform at press time, kept for the single history entry
        /// recorded on release.
        start: Transform,
        /// Whether any move event changed the transform yet.
        moved: bool,
    },
}

/// Converts gestures into [`SceneStore`] mutations and history entries.
#[derive(Debug, Clone, Default)]
pub struct TransformController {
    drag: DragState,
}

impl TransformController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Feed one pointer event through the gesture state machine.
    pub fn pointer_event(
        &mut self,
        event: PointerEvent,
        store: &mut SceneStore,
        editor: &mut EditorState,
        history: &mut EditHistory,
    ) {
        match event {
            PointerEvent::Pressed(hit) => self.press(hit, store, editor),
            PointerEvent::Moved(hit) => self.drag_move(hit, store, editor),
            PointerEvent::Released(_) => self.release(store, history),
            PointerEvent::Clicked(hit) => Self::click(hit, editor),
        }
    }

    /// Press on an already-selected object in move mode begins a drag.
    fn press(&mut self, hit: PointerHit, store: &SceneStore, editor: &EditorState) {
        if editor.tool() != ToolMode::Move {
            return;
        }
        let Some(id) = hit.object else {
            return;
        };
        if !editor.is_selected(id) {
            return;
        }
        let Some(object) = store.object(id) else {
            return;
        };
        self.drag = DragState::Dragging {
            object: id,
            start: object.transform,
            moved: false,
        };
        tracing::debug!(%id, "drag started");
    }

    /// Each move during a drag replaces the dragged object's position
    /// (rotation and scale untouched), snapped to the grid when enabled.
    /// Last write wins; no history is recorded here.
    fn drag_move(&mut self, hit: PointerHit, store: &mut SceneStore, editor: &EditorState) {
        let DragState::Dragging { object, moved, .. } = &mut self.drag else {
            return;
        };
        let Some(point) = hit.world_point else {
            return;
        };
        let position = if editor.snap_to_grid() {
            snap_to_grid(point, editor.grid_size())
        } else {
            point
        };
        let Some(current) = store.object(*object) else {
            // dragged object vanished mid-gesture; keep the drag inert
            return;
        };
        let transform = Transform {
            position,
            ..current.transform
        };
        store.set_transform(*object, transform);
        *moved = true;
    }

    /// Release ends the drag and records the whole gesture as one
    /// history entry. A release without any effective move (including
    /// an implicitly cancelled drag) records nothing, and whatever was
    /// last written stays in place.
    fn release(&mut self, store: &SceneStore, history: &mut EditHistory) {
        let DragState::Dragging {
            object,
            start,
            moved,
        } = std::mem::take(&mut self.drag)
        else {
            return;
        };
        if !moved {
            return;
        }
        let Some(current) = store.object(object) else {
            return;
        };
        if current.transform == start {
            return;
        }
        history.record(Edit::TransformObjects {
            changes: vec![TransformChange {
                id: object,
                before: start,
                after: current.transform,
            }],
        });
        tracing::debug!(id = %object, "drag finished");
    }

    /// Click selection, active in every tool mode.
    fn click(hit: PointerHit, editor: &mut EditorState) {
        match hit.object {
            None => editor.clear_selection(),
            Some(id) if hit.modifiers.multi_select => editor.toggle_selected(id),
            Some(id) => editor.select_only(id),
        }
    }

    /// One arrow-key nudge over the whole selection.
    pub fn nudge(
        &self,
        direction: NudgeDirection,
        store: &mut SceneStore,
        editor: &EditorState,
        history: &mut EditHistory,
    ) {
        self.nudge_with_move_step(direction, NUDGE_STEP, store, editor, history);
    }

    /// Toolbar nudge: same axis convention, larger translation step.
    /// Rotation and scale steps are fixed regardless of entry point.
    pub fn toolbar_nudge(
        &self,
        direction: NudgeDirection,
        store: &mut SceneStore,
        editor: &EditorState,
        history: &mut EditHistory,
    ) {
        self.nudge_with_move_step(direction, TOOLBAR_NUDGE_STEP, store, editor, history);
    }

    fn nudge_with_move_step(
        &self,
        direction: NudgeDirection,
        move_step: f32,
        store: &mut SceneStore,
        editor: &EditorState,
        history: &mut EditHistory,
    ) {
        if !editor.has_selection() {
            return;
        }
        type Apply = fn(Transform, Vec3) -> Transform;
        let (apply, delta): (Apply, Vec3) = match editor.tool() {
            ToolMode::Move => {
                // up/down travel on X (up is forward, -X), left/right on Z
                let delta = match direction {
                    NudgeDirection::Up => Vec3::new(-move_step, 0.0, 0.0),
                    NudgeDirection::Down => Vec3::new(move_step, 0.0, 0.0),
                    NudgeDirection::Left => Vec3::new(0.0, 0.0, move_step),
                    NudgeDirection::Right => Vec3::new(0.0, 0.0, -move_step),
                };
                (
                    |t, d| Transform {
                        position: t.position + d,
                        ..t
                    },
                    delta,
                )
            }
            ToolMode::Rotate => {
                // rotation about the vertical axis only answers to left/right
                let delta = match direction {
                    NudgeDirection::Left => Vec3::new(0.0, ROTATE_STEP, 0.0),
                    NudgeDirection::Right => Vec3::new(0.0, -ROTATE_STEP, 0.0),
                    NudgeDirection::Up | NudgeDirection::Down => return,
                };
                (
                    |t, d| Transform {
                        rotation: t.rotation + d,
                        ..t
                    },
                    delta,
                )
            }
            ToolMode::Scale => {
                let delta = match direction {
                    NudgeDirection::Up | NudgeDirection::Right => Vec3::splat(SCALE_STEP),
                    NudgeDirection::Down | NudgeDirection::Left => Vec3::splat(-SCALE_STEP),
                };
                (
                    |t, d| Transform {
                        scale: t.scale + d,
                        ..t
                    },
                    delta,
                )
            }
            ToolMode::Select | ToolMode::Delete => return,
        };

        // Batch edit: every selected object gets the same delta applied
        // to its own base transform, atomically within this event.
        let mut changes = Vec::new();
        for id in editor.selected() {
            let Some(object) = store.object(*id) else {
                // stale selection entry, tolerated
                continue;
            };
            let before = object.transform;
            let after = apply(before, delta);
            changes.push(TransformChange {
                id: *id,
                before,
                after,
            });
        }
        if changes.is_empty() {
            return;
        }
        for change in &changes {
            store.set_transform(change.id, change.after);
        }
        history.record(Edit::TransformObjects { changes });
    }

    /// Remove every selected object as one gesture. Selection is
    /// cleared afterwards; an active drag on a removed object is
    /// abandoned.
    pub fn delete_selection(
        &mut self,
        store: &mut SceneStore,
        editor: &mut EditorState,
        history: &mut EditHistory,
    ) {
        let mut removed = Vec::new();
        for id in editor.selected().to_vec() {
            if let Some((index, object)) = store.take(id) {
                if let DragState::Dragging { object: dragged, .. } = self.drag
                    && dragged == id
                {
                    self.drag = DragState::Idle;
                }
                removed.push(RemovedObject { index, object });
            }
        }
        editor.clear_selection();
        if removed.is_empty() {
            return;
        }
        tracing::debug!(count = removed.len(), "deleted selection");
        history.record(Edit::RemoveObjects { removed });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use room_core::ObjectInit;

    struct Rig {
        store: SceneStore,
        editor: EditorState,
        history: EditHistory,
        controller: TransformController,
    }

    impl Rig {
        fn new() -> Self {
            Self {
                store: SceneStore::new(),
                editor: EditorState::new(),
                history: EditHistory::default(),
                controller: TransformController::new(),
            }
        }

        fn spawn(&mut self, asset: &str, position: Vec3) -> Uuid {
            self.store
                .add(ObjectInit::new(asset, Transform::from_position(position)))
        }

        fn pointer(&mut self, event: PointerEvent) {
            self.controller.pointer_event(
                event,
                &mut self.store,
                &mut self.editor,
                &mut self.history,
            );
        }

        fn nudge(&mut self, direction: NudgeDirection) {
            self.controller.nudge(
                direction,
                &mut self.store,
                &self.editor,
                &mut self.history,
            );
        }

        fn position(&self, id: Uuid) -> Vec3 {
            self.store.object(id).unwrap().transform.position
        }
    }

    #[test]
    fn test_snap_rounds_per_axis() {
        assert_eq!(
            snap_to_grid(Vec3::new(0.74, 0.0, 0.76), 0.5),
            Vec3::new(0.5, 0.0, 1.0)
        );
        assert_eq!(
            snap_to_grid(Vec3::new(-0.26, 1.4, 0.0), 1.0),
            Vec3::new(0.0, 1.0, 0.0)
        );
    }

    #[test]
    fn test_click_selection_semantics() {
        let mut rig = Rig::new();
        let a = rig.spawn("bed_01", Vec3::ZERO);
        let b = rig.spawn("lamp_01", Vec3::ZERO);
        let c = rig.spawn("rug_01", Vec3::ZERO);

        rig.pointer(PointerEvent::Clicked(PointerHit::on_object(a)));
        assert_eq!(rig.editor.selected(), &[a]);

        rig.pointer(PointerEvent::Clicked(
            PointerHit::on_object(b).with_multi_select(),
        ));
        rig.pointer(PointerEvent::Clicked(
            PointerHit::on_object(c).with_multi_select(),
        ));
        assert_eq!(rig.editor.selected(), &[a, b, c]);

        // modifier click on a selected object removes it
        rig.pointer(PointerEvent::Clicked(
            PointerHit::on_object(b).with_multi_select(),
        ));
        assert_eq!(rig.editor.selected(), &[a, c]);

        // empty space clears everything
        rig.pointer(PointerEvent::Clicked(PointerHit::default()));
        assert!(!rig.editor.has_selection());

        rig.pointer(PointerEvent::Clicked(
            PointerHit::on_object(a).with_multi_select(),
        ));
        assert_eq!(rig.editor.selected().len(), 1);
    }

    #[test]
    fn test_drag_moves_with_snapping() {
        let mut rig = Rig::new();
        let id = rig.spawn("table_01", Vec3::ZERO);
        rig.editor.set_tool(ToolMode::Move);
        rig.editor.select_only(id);
        rig.editor.set_grid_size(0.5).unwrap();

        rig.pointer(PointerEvent::Pressed(PointerHit::on_object(id)));
        assert!(rig.controller.is_dragging());

        rig.pointer(PointerEvent::Moved(PointerHit::at_point(Vec3::new(
            0.74, 0.0, 0.0,
        ))));
        assert_eq!(rig.position(id), Vec3::new(0.5, 0.0, 0.0));

        rig.pointer(PointerEvent::Moved(PointerHit::at_point(Vec3::new(
            0.76, 0.0, 0.0,
        ))));
        assert_eq!(rig.position(id), Vec3::new(1.0, 0.0, 0.0));

        // no entries until release, then exactly one for the gesture
        assert!(rig.history.is_empty());
        rig.pointer(PointerEvent::Released(PointerHit::default()));
        assert!(!rig.controller.is_dragging());
        assert_eq!(rig.history.len(), 1);
    }

    #[test]
    fn test_drag_without_snap_uses_raw_point() {
        let mut rig = Rig::new();
        let id = rig.spawn("chair_01", Vec3::ZERO);
        rig.editor.set_tool(ToolMode::Move);
        rig.editor.select_only(id);
        rig.editor.toggle_snap();

        rig.pointer(PointerEvent::Pressed(PointerHit::on_object(id)));
        rig.pointer(PointerEvent::Moved(PointerHit::at_point(Vec3::new(
            0.74, 0.0, 0.33,
        ))));
        assert_eq!(rig.position(id), Vec3::new(0.74, 0.0, 0.33));
    }

    #[test]
    fn test_drag_preserves_rotation_and_scale() {
        let mut rig = Rig::new();
        let id = rig.store.add(ObjectInit::new(
            "frame_01",
            Transform::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0), Vec3::splat(2.0)),
        ));
        rig.editor.set_tool(ToolMode::Move);
        rig.editor.select_only(id);

        rig.pointer(PointerEvent::Pressed(PointerHit::on_object(id)));
        rig.pointer(PointerEvent::Moved(PointerHit::at_point(Vec3::new(
            3.0, 0.0, 0.0,
        ))));

        let t = rig.store.object(id).unwrap().transform;
        assert_eq!(t.position, Vec3::new(3.0, 0.0, 0.0));
        assert_eq!(t.rotation, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(t.scale, Vec3::splat(2.0));
    }

    #[test]
    fn test_drag_preconditions() {
        let mut rig = Rig::new();
        let id = rig.spawn("bed_01", Vec3::ZERO);

        // wrong tool
        rig.editor.select_only(id);
        rig.pointer(PointerEvent::Pressed(PointerHit::on_object(id)));
        assert!(!rig.controller.is_dragging());

        // unselected object
        rig.editor.set_tool(ToolMode::Move);
        rig.editor.clear_selection();
        rig.pointer(PointerEvent::Pressed(PointerHit::on_object(id)));
        assert!(!rig.controller.is_dragging());

        // empty space
        rig.editor.select_only(id);
        rig.pointer(PointerEvent::Pressed(PointerHit::default()));
        assert!(!rig.controller.is_dragging());

        // moves outside a drag do nothing
        rig.pointer(PointerEvent::Moved(PointerHit::at_point(Vec3::ONE)));
        assert_eq!(rig.position(id), Vec3::ZERO);
    }

    #[test]
    fn test_release_without_move_records_nothing() {
        let mut rig = Rig::new();
        let id = rig.spawn("lamp_01", Vec3::ZERO);
        rig.editor.set_tool(ToolMode::Move);
        rig.editor.select_only(id);

        rig.pointer(PointerEvent::Pressed(PointerHit::on_object(id)));
        rig.pointer(PointerEvent::Released(PointerHit::default()));
        assert!(rig.history.is_empty());
    }

    #[test]
    fn test_cancelled_drag_keeps_last_position() {
        let mut rig = Rig::new();
        let id = rig.spawn("plant_01", Vec3::ZERO);
        rig.editor.set_tool(ToolMode::Move);
        rig.editor.select_only(id);

        rig.pointer(PointerEvent::Pressed(PointerHit::on_object(id)));
        rig.pointer(PointerEvent::Moved(PointerHit::at_point(Vec3::new(
            2.0, 0.0, 0.0,
        ))));
        // release carries no intersection point: last write stays
        rig.pointer(PointerEvent::Released(PointerHit::default()));
        assert_eq!(rig.position(id), Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_move_nudge_batches_selection() {
        let mut rig = Rig::new();
        let a = rig.spawn("bed_01", Vec3::ZERO);
        let b = rig.spawn("table_01", Vec3::new(1.0, 0.0, 0.0));
        rig.editor.set_tool(ToolMode::Move);
        rig.editor.set_selection(vec![a, b]);

        rig.nudge(NudgeDirection::Up);
        assert_eq!(rig.position(a), Vec3::new(-0.1, 0.0, 0.0));
        assert_eq!(rig.position(b), Vec3::new(0.9, 0.0, 0.0));
        // the whole batch is one history entry
        assert_eq!(rig.history.len(), 1);

        rig.nudge(NudgeDirection::Left);
        assert_eq!(rig.position(a), Vec3::new(-0.1, 0.0, 0.1));
        rig.nudge(NudgeDirection::Right);
        rig.nudge(NudgeDirection::Down);
        assert_eq!(rig.position(a), Vec3::ZERO);
    }

    #[test]
    fn test_toolbar_nudge_uses_large_step() {
        let mut rig = Rig::new();
        let id = rig.spawn("rug_01", Vec3::ZERO);
        rig.editor.set_tool(ToolMode::Move);
        rig.editor.select_only(id);

        rig.controller.toolbar_nudge(
            NudgeDirection::Up,
            &mut rig.store,
            &rig.editor,
            &mut rig.history,
        );
        assert_eq!(rig.position(id), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_rotate_nudge() {
        let mut rig = Rig::new();
        let id = rig.spawn("chair_01", Vec3::ZERO);
        rig.editor.set_tool(ToolMode::Rotate);
        rig.editor.select_only(id);

        rig.nudge(NudgeDirection::Left);
        let rotation = rig.store.object(id).unwrap().transform.rotation;
        assert!((rotation.y - ROTATE_STEP).abs() < 1e-6);
        assert_eq!(rotation.x, 0.0);
        assert_eq!(rotation.z, 0.0);

        rig.nudge(NudgeDirection::Right);
        assert!(rig.store.object(id).unwrap().transform.rotation.y.abs() < 1e-6);

        // up/down are inert in rotate mode
        let entries = rig.history.len();
        rig.nudge(NudgeDirection::Up);
        assert_eq!(rig.history.len(), entries);
    }

    #[test]
    fn test_scale_nudge_is_uniform() {
        let mut rig = Rig::new();
        let id = rig.spawn("plant_01", Vec3::ZERO);
        rig.editor.set_tool(ToolMode::Scale);
        rig.editor.select_only(id);

        rig.nudge(NudgeDirection::Up);
        let scale = rig.store.object(id).unwrap().transform.scale;
        assert!((scale - Vec3::splat(1.1)).abs().max_element() < 1e-6);

        rig.nudge(NudgeDirection::Left);
        let scale = rig.store.object(id).unwrap().transform.scale;
        assert!((scale - Vec3::ONE).abs().max_element() < 1e-6);
    }

    #[test]
    fn test_nudge_needs_selection_and_tool() {
        let mut rig = Rig::new();
        let id = rig.spawn("bed_01", Vec3::ZERO);

        // empty selection
        rig.editor.set_tool(ToolMode::Move);
        rig.nudge(NudgeDirection::Up);
        assert_eq!(rig.position(id), Vec3::ZERO);

        // select/delete modes don't nudge
        rig.editor.select_only(id);
        rig.editor.set_tool(ToolMode::Select);
        rig.nudge(NudgeDirection::Up);
        rig.editor.set_tool(ToolMode::Delete);
        rig.nudge(NudgeDirection::Up);
        assert_eq!(rig.position(id), Vec3::ZERO);
        assert!(rig.history.is_empty());
    }

    #[test]
    fn test_nudge_skips_stale_selection_ids() {
        let mut rig = Rig::new();
        let a = rig.spawn("bed_01", Vec3::ZERO);
        rig.editor.set_tool(ToolMode::Move);
        rig.editor.set_selection(vec![a, Uuid::new_v4()]);

        rig.nudge(NudgeDirection::Down);
        assert_eq!(rig.position(a), Vec3::new(0.1, 0.0, 0.0));
    }

    #[test]
    fn test_delete_removes_exactly_selection() {
        let mut rig = Rig::new();
        let a = rig.spawn("bed_01", Vec3::ZERO);
        let b = rig.spawn("lamp_01", Vec3::ZERO);
        let c = rig.spawn("rug_01", Vec3::ZERO);
        rig.editor.set_selection(vec![a, c]);

        rig.controller
            .delete_selection(&mut rig.store, &mut rig.editor, &mut rig.history);

        assert_eq!(rig.store.len(), 1);
        assert!(rig.store.object(b).is_some());
        assert!(!rig.editor.has_selection());
        assert_eq!(rig.history.len(), 1);

        // deleting with a stale selection is a silent no-op
        rig.editor.set_selection(vec![a]);
        rig.controller
            .delete_selection(&mut rig.store, &mut rig.editor, &mut rig.history);
        assert_eq!(rig.history.len(), 1);
    }
}
