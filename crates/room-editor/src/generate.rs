//! Generative-scene collaborator interface
//!
//! An optional external service turns a free-text prompt into a list
//! of placeable objects. The engine only defines the contract and
//! applies results; it must keep working with the collaborator absent
//! or erroring.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use room_core::Transform;

/// Generation error types
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("generation service unavailable: {0}")]
    Unavailable(String),

    #[error("malformed generation payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// One proposed object, matching the service's JSON wire contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedObject {
    #[serde(rename = "assetId")]
    pub asset_id: String,
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub scale: [f32; 3],
    #[serde(default)]
    pub tags: Vec<String>,
}

impl GeneratedObject {
    pub fn transform(&self) -> Transform {
        Transform::new(
            Vec3::from(self.position),
            Vec3::from(self.rotation),
            Vec3::from(self.scale),
        )
    }
}

/// A full scene proposal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedScene {
    pub objects: Vec<GeneratedObject>,
}

impl GeneratedScene {
    /// Parse the service's JSON response body.
    pub fn from_json(body: &str) -> Result<Self, GenerateError> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Prompt-to-scene generator boundary.
pub trait SceneGenerator {
    fn generate(&self, prompt: &str) -> Result<GeneratedScene, GenerateError>;
}

/// Stand-in used when no service is configured; every prompt yields an
/// empty proposal, which the session treats as "leave the scene alone".
#[derive(Debug, Clone, Copy, Default)]
pub struct NullGenerator;

impl SceneGenerator for NullGenerator {
    fn generate(&self, _prompt: &str) -> Result<GeneratedScene, GenerateError> {
        Ok(GeneratedScene::default())
    }
}
