//! Atlas Loading Operations
//!
//! Build atlases from resources the loader already holds, looked up by
//! URL. Missing resources fail with `ResourceNotFound`.

use super::drawable::Atlas;
use super::grid_data::GridAtlasData;
use super::grid_operations::create_grid_atlas;
use super::multi_sheet_data::{MultiSheetData, SubSheetDeclaration};
use super::multi_sheet_operations::create_multi_sheet;
use super::packed_data::PackedAtlasData;
use super::packed_operations::create_packed_atlas_from_metadata;
use crate::asset::ResourceStore;
use crate::config::{build_atlas, parse_atlas_config};
use crate::error::AtlasResult;

/// Grid atlas over the texture stored at `texture_url`
pub fn load_grid_atlas<S: ResourceStore + ?Sized>(
    store: &S,
    texture_url: &str,
    cell_width: u32,
    cell_height: u32,
) -> AtlasResult<GridAtlasData> {
    let texture = store.texture(texture_url)?;
    create_grid_atlas(texture, cell_width, cell_height)
}

/// Multi-sheet over the texture stored at `texture_url`
pub fn load_multi_sheet<S: ResourceStore + ?Sized>(
    store: &S,
    texture_url: &str,
    sheets: Vec<SubSheetDeclaration>,
) -> AtlasResult<MultiSheetData> {
    let texture = store.texture(texture_url)?;
    create_multi_sheet(texture, sheets)
}

/// Packed atlas from a texture and its sprite metadata file
pub fn load_packed_atlas<S: ResourceStore + ?Sized>(
    store: &S,
    texture_url: &str,
    metadata_url: &str,
) -> AtlasResult<PackedAtlasData> {
    let texture = store.texture(texture_url)?;
    let metadata = store.text(metadata_url)?;
    create_packed_atlas_from_metadata(texture, &metadata)
}

/// Atlas described by a TOML layout file
pub fn load_configured_atlas<S: ResourceStore + ?Sized>(
    store: &S,
    texture_url: &str,
    config_url: &str,
) -> AtlasResult<Atlas> {
    let texture = store.texture(texture_url)?;
    let config_text = store.text(config_url)?;
    let config = parse_atlas_config(&config_text.text)?;

    log::debug!(
        "[loading_operations::load_configured_atlas] '{}' with layout '{}'",
        texture_url,
        config_url
    );

    build_atlas(texture, &config)
}
