//! Scene object definitions

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Transform;

/// Free-form metadata attached to a placed object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectMetadata {
    pub tags: Vec<String>,
}

/// A placed instance of a catalog asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub id: Uuid,
    /// Catalog entry this object instantiates. The reference is not
    /// validated here; a dangling id is rendered as a placeholder by
    /// the viewport and is otherwise inert.
    pub asset_id: String,
    pub transform: Transform,
    pub metadata: ObjectMetadata,
}

impl SceneObject {
    /// Create a new object with a fresh unique id.
    pub fn new(asset_id: impl Into<String>, transform: Transform) -> Self {
        Self {
            id: Uuid::new_v4(),
            asset_id: asset_id.into(),
            transform,
            metadata: ObjectMetadata::default(),
        }
    }
}

/// Fields supplied by the caller when creating an object. The id is
/// always generated by the store.
#[derive(Debug, Clone, Default)]
pub struct ObjectInit {
    pub asset_id: String,
    pub transform: Transform,
    pub metadata: ObjectMetadata,
}

impl ObjectInit {
    pub fn new(asset_id: impl Into<String>, transform: Transform) -> Self {
        Self {
            asset_id: asset_id.into(),
            transform,
            metadata: ObjectMetadata::default(),
        }
    }
}

/// Partial update shallow-merged into an existing object. A `Some`
/// transform replaces the whole transform, not individual fields.
#[derive(Debug, Clone, Default)]
pub struct ObjectPatch {
    pub asset_id: Option<String>,
    pub transform: Option<Transform>,
    pub metadata: Option<ObjectMetadata>,
}

impl ObjectPatch {
    pub fn transform(transform: Transform) -> Self {
        Self {
            transform: Some(transform),
            ..Self::default()
        }
    }
}
