//! Canonical scene object store
//!
//! Owns the single current [`Scene`] and applies every structural
//! mutation. All operations are total: a missing id makes the call a
//! no-op rather than an error, and `updated_at` is stamped only when a
//! mutation actually occurred.

use std::time::SystemTime;

use uuid::Uuid;

use crate::{ObjectInit, ObjectPatch, Scene, SceneObject, Transform};

/// Owner of the current scene. One instance per editing session; the
/// host serializes access (single mutex if the host is multi-threaded).
#[derive(Debug, Clone, Default)]
pub struct SceneStore {
    current: Scene,
}

impl SceneStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scene(scene: Scene) -> Self {
        Self { current: scene }
    }

    pub fn scene(&self) -> &Scene {
        &self.current
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.current.objects
    }

    pub fn object(&self, id: Uuid) -> Option<&SceneObject> {
        self.current.object(id)
    }

    pub fn len(&self) -> usize {
        self.current.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.objects.is_empty()
    }

    /// Create a new object from the given fields, generating a fresh id.
    /// Returns the id. Never fails.
    pub fn add(&mut self, init: ObjectInit) -> Uuid {
        let object = SceneObject {
            id: Uuid::new_v4(),
            asset_id: init.asset_id,
            transform: init.transform,
            metadata: init.metadata,
        };
        let id = object.id;
        self.current.objects.push(object);
        self.touch();
        tracing::debug!(%id, "added object");
        id
    }

    /// Append an existing object, keeping its id. Used when replaying
    /// history or bulk-loading generated scenes.
    pub fn insert(&mut self, object: SceneObject) {
        self.current.objects.push(object);
        self.touch();
    }

    /// Insert an existing object at a specific position in the sequence,
    /// restoring its original insertion order. Index is clamped to the
    /// current length.
    pub fn insert_at(&mut self, index: usize, object: SceneObject) {
        let index = index.min(self.current.objects.len());
        self.current.objects.insert(index, object);
        self.touch();
    }

    /// Remove the object with the given id. Returns whether a removal
    /// occurred; an absent id is a silent no-op.
    pub fn remove(&mut self, id: Uuid) -> bool {
        self.take(id).is_some()
    }

    /// Remove and return the object with the given id along with its
    /// position in the sequence.
    pub fn take(&mut self, id: Uuid) -> Option<(usize, SceneObject)> {
        let index = self.current.objects.iter().position(|o| o.id == id)?;
        let object = self.current.objects.remove(index);
        self.touch();
        tracing::debug!(%id, "removed object");
        Some((index, object))
    }

    /// Shallow-merge the patch into the object with the given id. A
    /// patched transform replaces the whole transform. Returns whether
    /// the object existed.
    pub fn update(&mut self, id: Uuid, patch: ObjectPatch) -> bool {
        let Some(object) = self.current.objects.iter_mut().find(|o| o.id == id) else {
            return false;
        };
        if let Some(asset_id) = patch.asset_id {
            object.asset_id = asset_id;
        }
        if let Some(transform) = patch.transform {
            object.transform = transform;
        }
        if let Some(metadata) = patch.metadata {
            object.metadata = metadata;
        }
        self.touch();
        true
    }

    /// Replace the whole transform of an object. Shorthand for the
    /// transform-only patch, used on every drag frame.
    pub fn set_transform(&mut self, id: Uuid, transform: Transform) -> bool {
        self.update(id, ObjectPatch::transform(transform))
    }

    /// Replace the current scene with a fresh empty one (new id).
    pub fn clear(&mut self) {
        self.current = Scene::empty();
        tracing::debug!("cleared scene");
    }

    /// Replace the current scene wholesale. No validation is performed;
    /// the caller owns the integrity of the loaded value.
    pub fn load(&mut self, scene: Scene) {
        self.current = scene;
    }

    /// Current scene value, for export and persistence.
    pub fn snapshot(&self) -> Scene {
        self.current.clone()
    }

    fn touch(&mut self) {
        // max() keeps updated_at monotonic even if the wall clock steps
        // backwards between mutations.
        self.current.updated_at = self.current.updated_at.max(SystemTime::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ObjectMetadata;
    use glam::Vec3;

    fn init(asset: &str) -> ObjectInit {
        ObjectInit::new(asset, Transform::default())
    }

    #[test]
    fn test_add_generates_unique_ids() {
        let mut store = SceneStore::new();
        let a = store.add(init("bed_01"));
        let b = store.add(init("bed_01"));
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);

        let mut seen: Vec<Uuid> = store.objects().iter().map(|o| o.id).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_updated_at_monotonic() {
        let mut store = SceneStore::new();
        let mut last = store.scene().updated_at;
        for _ in 0..10 {
            let id = store.add(init("lamp_01"));
            assert!(store.scene().updated_at >= last);
            last = store.scene().updated_at;
            store.remove(id);
            assert!(store.scene().updated_at >= last);
            last = store.scene().updated_at;
        }
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut store = SceneStore::new();
        let id = store.add(init("chair_01"));
        assert!(store.remove(id));

        let stamp = store.scene().updated_at;
        assert!(!store.remove(id));
        assert_eq!(store.scene().updated_at, stamp);
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let mut store = SceneStore::new();
        store.add(init("table_01"));
        let stamp = store.scene().updated_at;

        assert!(!store.update(Uuid::new_v4(), ObjectPatch::default()));
        assert_eq!(store.scene().updated_at, stamp);
    }

    #[test]
    fn test_update_replaces_whole_transform() {
        let mut store = SceneStore::new();
        let id = store.add(ObjectInit::new(
            "rug_01",
            Transform::new(Vec3::ONE, Vec3::new(0.0, 1.0, 0.0), Vec3::splat(2.0)),
        ));

        let replacement = Transform::from_position(Vec3::new(5.0, 0.0, 5.0));
        assert!(store.set_transform(id, replacement));

        let object = store.object(id).unwrap();
        assert_eq!(object.transform, replacement);
        // rotation/scale come from the replacement, not the old value
        assert_eq!(object.transform.rotation, Vec3::ZERO);
        assert_eq!(object.transform.scale, Vec3::ONE);
    }

    #[test]
    fn test_update_merges_fields_independently() {
        let mut store = SceneStore::new();
        let id = store.add(init("plant_01"));

        let patch = ObjectPatch {
            metadata: Some(ObjectMetadata {
                tags: vec!["corner".into()],
            }),
            ..Default::default()
        };
        assert!(store.update(id, patch));

        let object = store.object(id).unwrap();
        assert_eq!(object.asset_id, "plant_01");
        assert_eq!(object.metadata.tags, vec!["corner".to_string()]);
    }

    #[test]
    fn test_clear_starts_fresh_scene() {
        let mut store = SceneStore::new();
        store.add(init("bed_01"));
        let old_id = store.scene().id;

        store.clear();
        assert!(store.is_empty());
        assert_ne!(store.scene().id, old_id);
    }

    #[test]
    fn test_snapshot_load_round_trip() {
        let mut store = SceneStore::new();
        store.add(init("bed_01"));
        store.add(init("lamp_01"));
        let snapshot = store.snapshot();

        let mut other = SceneStore::new();
        other.load(snapshot.clone());
        assert_eq!(other.snapshot(), snapshot);
    }

    #[test]
    fn test_insert_at_restores_order() {
        let mut store = SceneStore::new();
        let a = store.add(init("bed_01"));
        let b = store.add(init("table_01"));
        let c = store.add(init("lamp_01"));

        let (index, object) = store.take(b).unwrap();
        assert_eq!(index, 1);
        store.insert_at(index, object);

        let order: Vec<Uuid> = store.objects().iter().map(|o| o.id).collect();
        assert_eq!(order, vec![a, b, c]);
    }
}
