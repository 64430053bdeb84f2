//! Single-slot scene persistence
//!
//! The editor keeps exactly one saved scene, stored as RON under the
//! OS config directory. Storage medium and timing are a host concern;
//! this module only round-trips the [`Scene`] value.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::Scene;

/// The well-known single scene slot.
pub const SCENE_SLOT: &str = "room-editor-scene.ron";

/// Persistence error types
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] ron::Error),

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] ron::de::SpannedError),
}

/// OS-standard directory for the scene slot.
pub fn data_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("room-editor")
}

/// Path of the single scene slot.
pub fn scene_slot_path() -> PathBuf {
    data_dir().join(SCENE_SLOT)
}

/// Save a scene to an explicit path, creating parent directories.
pub fn save_scene_to(scene: &Scene, path: &Path) -> Result<(), PersistError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = ron::ser::to_string_pretty(scene, ron::ser::PrettyConfig::default())?;
    std::fs::write(path, content)?;
    tracing::info!("Saved scene to {:?}", path);
    Ok(())
}

/// Load a scene from an explicit path.
pub fn load_scene_from(path: &Path) -> Result<Scene, PersistError> {
    let content = std::fs::read_to_string(path)?;
    let scene = ron::from_str(&content)?;
    tracing::info!("Loaded scene from {:?}", path);
    Ok(scene)
}

/// Save a scene to the well-known slot.
pub fn save_scene(scene: &Scene) -> Result<(), PersistError> {
    save_scene_to(scene, &scene_slot_path())
}

/// Load the scene in the well-known slot, if one was saved and parses.
/// A corrupt slot is logged and treated as absent.
pub fn load_scene() -> Option<Scene> {
    let path = scene_slot_path();
    if !path.exists() {
        return None;
    }
    match load_scene_from(&path) {
        Ok(scene) => Some(scene),
        Err(e) => {
            tracing::warn!("Failed to load scene slot: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ObjectInit, SceneStore, Transform};
    use glam::Vec3;

    #[test]
    fn test_scene_round_trip() {
        let mut store = SceneStore::new();
        store.add(ObjectInit::new(
            "bed_01",
            Transform::from_position(Vec3::new(2.0, 0.0, -3.0)),
        ));
        store.add(ObjectInit::new("lamp_01", Transform::default()));
        let scene = store.snapshot();

        let dir = std::env::temp_dir().join(format!("room-editor-test-{}", scene.id));
        let path = dir.join(SCENE_SLOT);
        save_scene_to(&scene, &path).unwrap();
        let loaded = load_scene_from(&path).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        assert_eq!(loaded, scene);
    }

    #[test]
    fn test_load_missing_slot_is_error() {
        let path = std::env::temp_dir().join("room-editor-test-missing.ron");
        assert!(load_scene_from(&path).is_err());
    }
}
