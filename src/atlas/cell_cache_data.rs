//! Cell Cache Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in cell_cache_operations.rs

use super::region_data::Region;
use rustc_hash::FxHashMap;
use std::fmt;

/// Address of one cell, shared by every addressing scheme
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CellKey {
    /// Plain index into a grid or packed atlas
    Simple(usize),
    /// Local index inside a named sub-sheet
    Named(String, usize),
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellKey::Simple(index) => write!(f, "#{}", index),
            CellKey::Named(name, index) => write!(f, "{}#{}", name, index),
        }
    }
}

/// Memoization table for resolved regions.
///
/// Entries are only ever added. Size is bounded by the owning atlas's
/// cell count, so there is no eviction.
#[derive(Debug, Default)]
pub struct CellCacheData {
    pub entries: FxHashMap<CellKey, Region>,
    /// Number of regions computed and stored
    pub computed: usize,
}
