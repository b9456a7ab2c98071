//! Cell Cache Operations - Pure DOP Functions
//!
//! `get_or_compute` is the single memoization path for every atlas
//! variant: at most one successful computation per key.

use super::cell_cache_data::{CellCacheData, CellKey};
use super::region_data::Region;
use crate::error::AtlasResult;

/// Create new empty cell cache
pub fn create_cell_cache() -> CellCacheData {
    CellCacheData::default()
}

/// Peek at a cached region without computing
pub fn cached_region(cache: &CellCacheData, key: &CellKey) -> Option<Region> {
    cache.entries.get(key).copied()
}

/// Number of cached regions
pub fn cached_len(cache: &CellCacheData) -> usize {
    cache.entries.len()
}

/// Return the cached region for `key`, computing and storing it on a miss.
///
/// A failed computation stores nothing.
pub fn get_or_compute<F>(cache: &mut CellCacheData, key: CellKey, compute: F) -> AtlasResult<Region>
where
    F: FnOnce(&CellKey) -> AtlasResult<Region>,
{
    if let Some(region) = cache.entries.get(&key) {
        return Ok(*region);
    }

    log::trace!("[cell_cache_operations::get_or_compute] miss for {}", key);
    let region = compute(&key)?;
    cache.entries.insert(key, region);
    cache.computed += 1;

    Ok(region)
}
