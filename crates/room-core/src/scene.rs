//! Scene value type

use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::SceneObject;

/// The complete collection of placed objects plus metadata, the unit of
/// persistence. Exactly one scene is current per editing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub id: Uuid,
    pub name: String,
    /// Insertion order is array order.
    pub objects: Vec<SceneObject>,
    pub created_at: SystemTime,
    pub updated_at: SystemTime,
}

impl Default for Scene {
    fn default() -> Self {
        Self::empty()
    }
}

impl Scene {
    /// Fresh empty scene with a new id.
    pub fn empty() -> Self {
        Self::named("Untitled Scene")
    }

    pub fn named(name: impl Into<String>) -> Self {
        let now = SystemTime::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            objects: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn object(&self, id: Uuid) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.object(id).is_some()
    }
}
