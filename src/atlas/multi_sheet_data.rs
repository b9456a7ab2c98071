//! Multi-Sheet Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in multi_sheet_operations.rs

use super::cell_cache_data::CellCacheData;
use super::grid_data::GridDescriptor;
use crate::asset::TextureHandle;
use rustc_hash::FxHashMap;

/// One named grid inside a shared texture
#[derive(Debug, Clone, PartialEq)]
pub struct SubSheetDeclaration {
    pub name: String,
    pub descriptor: GridDescriptor,
}

/// Several named grids sharing one texture.
///
/// `sheets` is the canonical order: global indices and drawables follow
/// it. `name_to_sheet` is only an index into `sheets`.
#[derive(Debug)]
pub struct MultiSheetData {
    pub texture: TextureHandle,
    /// Declarations in the order they were given
    pub sheets: Vec<SubSheetDeclaration>,
    /// Map from sheet name to position in `sheets`
    pub name_to_sheet: FxHashMap<String, usize>,
    /// Global index of each sheet's first cell
    pub first_cell: Vec<usize>,
    /// Cells across all sheets
    pub cell_count: usize,
    pub cache: CellCacheData,
}
