use crate::assets::manifest::AssetManifest;
use crate::error::EngineError;

/// Texture slot index shared with the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Load state of one texture. Loading is one-shot: once a texture has
/// loaded or failed, later reports for it are ignored and nothing is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureStatus {
    Pending,
    Loaded,
    /// The material keeps its flat base color.
    Failed,
}

#[derive(Debug, Clone)]
struct TextureEntry {
    name: String,
    path: String,
    status: TextureStatus,
}

/// Registry of named textures, built from an AssetManifest.
/// The host fetches each pending path asynchronously and reports the
/// outcome back by name.
pub struct TextureRegistry {
    entries: Vec<TextureEntry>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register every texture of a parsed AssetManifest, in name order so
    /// slots are stable across runs. Returns the number of entries.
    pub fn register_manifest(&mut self, manifest: &AssetManifest) -> usize {
        let mut names: Vec<&String> = manifest.textures.keys().collect();
        names.sort();
        for name in &names {
            self.register(name.as_str(), manifest.textures[*name].path.as_str());
        }
        names.len()
    }

    /// Add a texture (or replace the path of a pending one) and return its slot.
    pub fn register(&mut self, name: impl Into<String>, path: impl Into<String>) -> TextureId {
        let name = name.into();
        let path = path.into();
        if let Some(idx) = self.index_of(&name) {
            let entry = &mut self.entries[idx];
            if entry.status == TextureStatus::Pending {
                entry.path = path;
            }
            return TextureId(idx as u32);
        }
        self.entries.push(TextureEntry {
            name,
            path,
            status: TextureStatus::Pending,
        });
        TextureId(self.entries.len() as u32 - 1)
    }

    /// Look up a texture slot by name. Returns None if not found.
    pub fn get(&self, name: &str) -> Option<TextureId> {
        self.index_of(name).map(|i| TextureId(i as u32))
    }

    pub fn status(&self, name: &str) -> Option<TextureStatus> {
        self.index_of(name).map(|i| self.entries[i].status)
    }

    /// Paths the host still has to fetch, as (name, path) pairs.
    pub fn pending(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter(|e| e.status == TextureStatus::Pending)
            .map(|e| (e.name.as_str(), e.path.as_str()))
    }

    /// Record a successful load. Returns the slot to attach to the material,
    /// or None if the name is unknown or was already resolved.
    pub fn on_loaded(&mut self, name: &str) -> Option<TextureId> {
        let idx = self.index_of(name)?;
        let entry = &mut self.entries[idx];
        if entry.status != TextureStatus::Pending {
            return None;
        }
        entry.status = TextureStatus::Loaded;
        Some(TextureId(idx as u32))
    }

    /// Record a failed load. Returns the error for the caller to log, or None
    /// if the name is unknown or was already resolved.
    pub fn on_failed(&mut self, name: &str, reason: &str) -> Option<EngineError> {
        let idx = self.index_of(name)?;
        let entry = &mut self.entries[idx];
        if entry.status != TextureStatus::Pending {
            return None;
        }
        entry.status = TextureStatus::Failed;
        Some(EngineError::AssetLoad {
            name: entry.name.clone(),
            reason: reason.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}
