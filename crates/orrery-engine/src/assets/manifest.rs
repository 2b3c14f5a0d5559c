use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::error::EngineResult;

/// Asset manifest describing the textures a scene wants the host to fetch.
/// Loaded from a JSON file at runtime, or built in code by the game.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Texture lookup: node name → descriptor.
    #[serde(default)]
    pub textures: HashMap<String, TextureDescriptor>,
}

/// Describes a single texture image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureDescriptor {
    /// Relative path or URL of the image (e.g., "assets/earth.jpg").
    pub path: String,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> EngineResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn with_texture(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.textures.insert(name.into(), TextureDescriptor { path: path.into() });
        self
    }
}
