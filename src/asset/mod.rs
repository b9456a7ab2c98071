//! Asset Module - interface to the asset-loading collaborator
//!
//! Textures and text files are read by the loader. This module only names
//! what an atlas needs from them.

pub mod resource_store;
pub mod texture_data;

pub use resource_store::{MemoryResourceStore, ResourceStore};
pub use texture_data::{TextResource, TextureHandle, TextureId};
