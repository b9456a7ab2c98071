//! Drawable Projection
//!
//! The one surface renderers depend on. Every atlas variant resolves
//! cells through `AtlasSource`, and `Atlas` carries any of them as a
//! single value.

use super::cell_cache_data::CellKey;
use super::cell_cache_operations::cached_region;
use super::grid_data::GridAtlasData;
use super::grid_operations::{grid_cell, grid_cell_count};
use super::multi_sheet_data::MultiSheetData;
use super::multi_sheet_operations::{
    locate_global_index, multi_sheet_cell, multi_sheet_cell_count, sub_sheet_cell_count,
};
use super::packed_data::PackedAtlasData;
use super::packed_operations::{packed_cell, packed_cell_count};
use super::region_data::Region;
use crate::asset::TextureHandle;
use crate::error::{require_index, AtlasError, AtlasResult};

/// Read-only view of an atlas as an ordered list of drawables.
///
/// `resolve`, `drawable` and `drawables` memoize: the first lookup of a
/// cell computes and stores its region, which is why they take
/// `&mut self`.
pub trait AtlasSource {
    /// Texture every region of this atlas points into
    fn texture(&self) -> TextureHandle;

    /// Number of addressable cells
    fn cell_count(&self) -> usize;

    /// Key of the cell at position `index` of the canonical order
    fn key_for(&self, index: usize) -> AtlasResult<CellKey>;

    /// Region for `key` if it was already resolved
    fn cached(&self, key: &CellKey) -> Option<Region>;

    /// Resolve `key` to a region, computing and caching on first use
    fn resolve(&mut self, key: &CellKey) -> AtlasResult<Region>;

    /// Every key once, in canonical order
    fn canonical_order(&self) -> AtlasResult<Vec<CellKey>> {
        (0..self.cell_count()).map(|index| self.key_for(index)).collect()
    }

    /// Region at position `index` of the canonical order
    fn drawable(&mut self, index: usize) -> AtlasResult<Region> {
        let key = self.key_for(index)?;
        self.resolve(&key)
    }

    /// Every region in canonical order
    fn drawables(&mut self) -> AtlasResult<Vec<Region>> {
        let keys = self.canonical_order()?;
        keys.iter().map(|key| self.resolve(key)).collect()
    }
}

fn unsupported(scheme: &'static str, key: &CellKey) -> AtlasError {
    AtlasError::UnsupportedKey {
        scheme,
        key: key.to_string(),
    }
}

impl AtlasSource for GridAtlasData {
    fn texture(&self) -> TextureHandle {
        self.texture
    }

    fn cell_count(&self) -> usize {
        grid_cell_count(self)
    }

    fn key_for(&self, index: usize) -> AtlasResult<CellKey> {
        require_index(index, grid_cell_count(self))?;
        Ok(CellKey::Simple(index))
    }

    fn cached(&self, key: &CellKey) -> Option<Region> {
        cached_region(&self.cache, key)
    }

    fn resolve(&mut self, key: &CellKey) -> AtlasResult<Region> {
        match key {
            CellKey::Simple(index) => grid_cell(self, *index),
            CellKey::Named(..) => Err(unsupported("grid", key)),
        }
    }
}

impl AtlasSource for PackedAtlasData {
    fn texture(&self) -> TextureHandle {
        self.texture
    }

    fn cell_count(&self) -> usize {
        packed_cell_count(self)
    }

    fn key_for(&self, index: usize) -> AtlasResult<CellKey> {
        require_index(index, packed_cell_count(self))?;
        Ok(CellKey::Simple(index))
    }

    fn cached(&self, key: &CellKey) -> Option<Region> {
        cached_region(&self.cache, key)
    }

    fn resolve(&mut self, key: &CellKey) -> AtlasResult<Region> {
        match key {
            CellKey::Simple(index) => packed_cell(self, *index),
            CellKey::Named(..) => Err(unsupported("packed", key)),
        }
    }
}

impl AtlasSource for MultiSheetData {
    fn texture(&self) -> TextureHandle {
        self.texture
    }

    fn cell_count(&self) -> usize {
        multi_sheet_cell_count(self)
    }

    fn key_for(&self, index: usize) -> AtlasResult<CellKey> {
        let (name, local) = locate_global_index(self, index)?;
        Ok(CellKey::Named(name.to_string(), local))
    }

    fn cached(&self, key: &CellKey) -> Option<Region> {
        cached_region(&self.cache, key)
    }

    fn resolve(&mut self, key: &CellKey) -> AtlasResult<Region> {
        match key {
            CellKey::Named(name, local) => multi_sheet_cell(self, name, *local),
            CellKey::Simple(..) => Err(unsupported("multi-sheet", key)),
        }
    }

    fn canonical_order(&self) -> AtlasResult<Vec<CellKey>> {
        let mut keys = Vec::with_capacity(multi_sheet_cell_count(self));
        for sheet in &self.sheets {
            let count = sub_sheet_cell_count(self, &sheet.name)?;
            keys.extend((0..count).map(|local| CellKey::Named(sheet.name.clone(), local)));
        }
        Ok(keys)
    }
}

/// Any atlas variant as one value
#[derive(Debug)]
pub enum Atlas {
    Grid(GridAtlasData),
    MultiSheet(MultiSheetData),
    Packed(PackedAtlasData),
}

impl Atlas {
    fn source(&self) -> &dyn AtlasSource {
        match self {
            Atlas::Grid(data) => data,
            Atlas::MultiSheet(data) => data,
            Atlas::Packed(data) => data,
        }
    }

    fn source_mut(&mut self) -> &mut dyn AtlasSource {
        match self {
            Atlas::Grid(data) => data,
            Atlas::MultiSheet(data) => data,
            Atlas::Packed(data) => data,
        }
    }

    /// Region of `local` in sub-sheet `name`.
    ///
    /// Only multi-sheets have names; other variants fail with
    /// `UnknownSubAtlas`.
    pub fn drawable_named(&mut self, name: &str, local: usize) -> AtlasResult<Region> {
        match self {
            Atlas::MultiSheet(data) => multi_sheet_cell(data, name, local),
            _ => Err(AtlasError::UnknownSubAtlas {
                name: name.to_string(),
            }),
        }
    }
}

impl From<GridAtlasData> for Atlas {
    fn from(data: GridAtlasData) -> Self {
        Atlas::Grid(data)
    }
}

impl From<MultiSheetData> for Atlas {
    fn from(data: MultiSheetData) -> Self {
        Atlas::MultiSheet(data)
    }
}

impl From<PackedAtlasData> for Atlas {
    fn from(data: PackedAtlasData) -> Self {
        Atlas::Packed(data)
    }
}

impl AtlasSource for Atlas {
    fn texture(&self) -> TextureHandle {
        self.source().texture()
    }

    fn cell_count(&self) -> usize {
        self.source().cell_count()
    }

    fn key_for(&self, index: usize) -> AtlasResult<CellKey> {
        self.source().key_for(index)
    }

    fn cached(&self, key: &CellKey) -> Option<Region> {
        self.source().cached(key)
    }

    fn resolve(&mut self, key: &CellKey) -> AtlasResult<Region> {
        self.source_mut().resolve(key)
    }

    fn canonical_order(&self) -> AtlasResult<Vec<CellKey>> {
        self.source().canonical_order()
    }
}

/// Warm every cell of `atlas` so later lookups never compute
pub fn prewarm<A: AtlasSource + ?Sized>(atlas: &mut A) -> AtlasResult<usize> {
    let regions = atlas.drawables()?;
    log::debug!(
        "[drawable::prewarm] {:?}: {} regions ready",
        atlas.texture().id,
        regions.len()
    );
    Ok(regions.len())
}
