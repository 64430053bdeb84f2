//! Room Editor Core Data Structures
//!
//! This crate contains the data model for the room scene editor:
//! - Transform: position/rotation/scale of a placed object
//! - SceneObject: a placed instance of a catalog asset
//! - Scene: the named collection of objects, the unit of persistence
//! - SceneStore: owner of the current scene, applies all mutations
//! - AssetCatalog: the built-in placeable asset library

pub mod asset;
pub mod object;
pub mod persist;
pub mod scene;
pub mod store;
pub mod transform;

pub use asset::*;
pub use object::*;
pub use persist::*;
pub use scene::*;
pub use store::*;
pub use transform::*;
