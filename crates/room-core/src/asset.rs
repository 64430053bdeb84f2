//! Built-in asset catalog and filtering

use serde::{Deserialize, Serialize};

use crate::Transform;

/// Categories shown as filter chips in the library panel.
pub const ASSET_CATEGORIES: &[&str] = &[
    "room", "bed", "table", "lamp", "rug", "frames", "plant", "window", "chair",
];

/// A placeable entry in the asset library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub url: String,
    pub category: String,
    pub default_transform: Transform,
}

impl Asset {
    fn builtin(id: &str, name: &str, category: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            thumbnail: format!("/assets/thumbnails/{id}.png"),
            url: format!("/assets/models/{id}.glb"),
            category: category.to_string(),
            default_transform: Transform::default(),
        }
    }
}

/// Read-only list of placeable assets plus the current library filter.
///
/// The editing engine never validates object references against this
/// catalog; it exists for the surrounding UI and for default transforms
/// at placement time.
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    assets: Vec<Asset>,
    search_query: String,
    selected_category: Option<String>,
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AssetCatalog {
    /// The default furniture set.
    pub fn builtin() -> Self {
        Self::with_assets(vec![
            Asset::builtin("bed_01", "Modern Bed", "bed"),
            Asset::builtin("table_01", "Coffee Table", "table"),
            Asset::builtin("lamp_01", "Table Lamp", "lamp"),
            Asset::builtin("chair_01", "Office Chair", "chair"),
            Asset::builtin("rug_01", "Area Rug", "rug"),
            Asset::builtin("plant_01", "Potted Plant", "plant"),
            Asset::builtin("window_01", "Window Frame", "window"),
            Asset::builtin("frame_01", "Picture Frame", "frames"),
        ])
    }

    pub fn with_assets(assets: Vec<Asset>) -> Self {
        Self {
            assets,
            search_query: String::new(),
            selected_category: None,
        }
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn get(&self, id: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id == id)
    }

    /// Register an uploaded or user-provided asset.
    pub fn add(&mut self, asset: Asset) {
        self.assets.push(asset);
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn set_selected_category(&mut self, category: Option<String>) {
        self.selected_category = category;
    }

    /// Assets matching both the text query (against name and category,
    /// case-insensitive) and the selected category chip.
    pub fn filtered(&self) -> Vec<&Asset> {
        let query = self.search_query.to_lowercase();
        self.assets
            .iter()
            .filter(|asset| {
                let matches_search = query.is_empty()
                    || asset.name.to_lowercase().contains(&query)
                    || asset.category.to_lowercase().contains(&query);
                let matches_category = self
                    .selected_category
                    .as_deref()
                    .is_none_or(|c| asset.category == c);
                matches_search && matches_category
            })
            .collect()
    }
}
