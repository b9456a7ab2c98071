//! Resource Store
//!
//! Lookup of already-loaded textures and text files by URL. The real
//! loader lives outside this crate; `MemoryResourceStore` is the
//! in-process table used by tools and tests.

use super::texture_data::{TextResource, TextureHandle};
use crate::error::{AtlasError, AtlasResult};
use rustc_hash::FxHashMap;

/// What an atlas needs from the asset loader
pub trait ResourceStore {
    /// Texture previously loaded under `url`
    fn texture(&self, url: &str) -> AtlasResult<TextureHandle>;

    /// Text file previously loaded under `url`
    fn text(&self, url: &str) -> AtlasResult<TextResource>;
}

/// In-memory resource table keyed by URL
#[derive(Debug, Default)]
pub struct MemoryResourceStore {
    textures: FxHashMap<String, TextureHandle>,
    texts: FxHashMap<String, TextResource>,
}

impl MemoryResourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a loaded texture, replacing any previous entry
    pub fn register_texture(&mut self, url: &str, texture: TextureHandle) {
        log::debug!(
            "[MemoryResourceStore::register_texture] '{}' -> {:?} ({}x{})",
            url,
            texture.id,
            texture.width,
            texture.height
        );
        self.textures.insert(url.to_string(), texture);
    }

    /// Register a loaded text file under its own URL
    pub fn register_text(&mut self, resource: TextResource) {
        log::debug!(
            "[MemoryResourceStore::register_text] '{}' ({} bytes)",
            resource.url,
            resource.text.len()
        );
        self.texts.insert(resource.url.clone(), resource);
    }

    /// Forget everything stored under `url`
    pub fn unload(&mut self, url: &str) {
        self.textures.remove(url);
        self.texts.remove(url);
    }
}

impl ResourceStore for MemoryResourceStore {
    fn texture(&self, url: &str) -> AtlasResult<TextureHandle> {
        self.textures
            .get(url)
            .copied()
            .ok_or_else(|| AtlasError::ResourceNotFound {
                resource_type: "texture",
                url: url.to_string(),
            })
    }

    fn text(&self, url: &str) -> AtlasResult<TextResource> {
        self.texts
            .get(url)
            .cloned()
            .ok_or_else(|| AtlasError::ResourceNotFound {
                resource_type: "text",
                url: url.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_roundtrip() {
        let mut store = MemoryResourceStore::new();
        store.register_texture("hero.png", TextureHandle::new(7, 64.0, 32.0));
        store.register_text(TextResource::new("hero.json", "{}"));

        assert_eq!(store.texture("hero.png").map(|t| t.width), Ok(64.0));
        assert_eq!(
            store.text("hero.json").map(|t| t.text),
            Ok("{}".to_string())
        );
    }

    #[test]
    fn test_missing_and_unloaded() {
        let mut store = MemoryResourceStore::new();
        store.register_texture("hero.png", TextureHandle::new(7, 64.0, 32.0));
        store.unload("hero.png");

        assert!(matches!(
            store.texture("hero.png"),
            Err(AtlasError::ResourceNotFound {
                resource_type: "texture",
                ..
            })
        ));
        assert!(matches!(
            store.text("missing.json"),
            Err(AtlasError::ResourceNotFound {
                resource_type: "text",
                ..
            })
        ));
    }
}
