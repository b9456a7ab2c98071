//! Atlas Module - texture atlas indexing and caching
//!
//! Three addressing schemes share one cache and one projection:
//! - grid: a texture cut into equal cells
//! - multi-sheet: named grids sharing a texture
//! - packed: externally packed rectangles from sprite metadata

// Data modules
pub mod cell_cache_data;
pub mod grid_data;
pub mod multi_sheet_data;
pub mod packed_data;
pub mod region_data;

// Operations modules
pub mod cell_cache_operations;
pub mod grid_operations;
pub mod loading_operations;
pub mod multi_sheet_operations;
pub mod packed_operations;

// Shared pieces
pub mod drawable;
pub mod geometry;
pub mod shared_atlas;

// Re-export data structures
pub use cell_cache_data::{CellCacheData, CellKey};
pub use grid_data::{CellBounds, GridAtlasData, GridDescriptor};
pub use multi_sheet_data::{MultiSheetData, SubSheetDeclaration};
pub use packed_data::{PackedAtlasData, PackedRect, SpriteMetadata};
pub use region_data::Region;

// Re-export operations
pub use grid_operations::{
    create_grid_atlas, create_grid_atlas_with_offset, grid_cell, grid_cell_count, grid_cells,
};
pub use loading_operations::{
    load_configured_atlas, load_grid_atlas, load_multi_sheet, load_packed_atlas,
};
pub use multi_sheet_operations::{
    create_multi_sheet, declare_sub_sheet, global_index, locate_global_index, multi_sheet_cell,
    multi_sheet_cell_count, multi_sheet_drawables, multi_sheet_global_cell, sub_sheet_cell_count,
    sub_sheet_cells, sub_sheet_names,
};
pub use packed_operations::{
    create_packed_atlas, create_packed_atlas_from_metadata, packed_cell, packed_cell_count,
    packed_cells, packed_rect, parse_sprite_metadata,
};

pub use drawable::{prewarm, Atlas, AtlasSource};
pub use geometry::{normalize, transform_uv, Viewport};
pub use shared_atlas::SharedAtlas;

// Compile-time validation
static_assertions::assert_impl_all!(Region: Send, Sync, Copy);
static_assertions::assert_impl_all!(CellKey: Send, Sync);
static_assertions::assert_impl_all!(Atlas: Send, Sync);
static_assertions::assert_impl_all!(SharedAtlas<Atlas>: Send, Sync, Clone);
