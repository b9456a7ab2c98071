//! Grid Atlas Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in grid_operations.rs

use super::cell_cache_data::CellCacheData;
use crate::asset::TextureHandle;

/// Uniform grid inside a texture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridDescriptor {
    /// Pixel extent covered by the grid
    pub width: f32,
    pub height: f32,
    /// Cell size in pixels
    pub cell_width: u32,
    pub cell_height: u32,
    /// Where the grid starts, relative to the texture's top-left corner
    pub offset_x: u32,
    pub offset_y: u32,
}

/// Pixel bounds of one grid cell.
/// Wider than the cell size so huge textures cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellBounds {
    pub x0: u64,
    pub y0: u64,
    pub x1: u64,
    pub y1: u64,
}

/// Texture cut into equal-size cells
#[derive(Debug)]
pub struct GridAtlasData {
    pub texture: TextureHandle,
    pub descriptor: GridDescriptor,
    pub cache: CellCacheData,
}
