// Hearth Atlas - texture atlas indexing and caching
//
// Given one texture and a description of how it is subdivided, resolve
// each addressable cell to a normalized UV viewport, cache it, and hand
// it to the renderer as a drawable region.
//
// Data lives in *_data modules, transformations in *_operations modules.
// Renderers should only depend on `AtlasSource` / `Atlas`.

pub mod asset;
pub mod atlas;
pub mod config;
pub mod error;

pub use asset::{MemoryResourceStore, ResourceStore, TextResource, TextureHandle, TextureId};
pub use atlas::{
    Atlas, AtlasSource, CellKey, GridAtlasData, GridDescriptor, MultiSheetData, PackedAtlasData,
    PackedRect, Region, SharedAtlas, SubSheetDeclaration, Viewport,
};
pub use config::{build_atlas, parse_atlas_config, AtlasConfig, LayoutConfig, SheetConfig};
pub use error::{AtlasError, AtlasResult};
