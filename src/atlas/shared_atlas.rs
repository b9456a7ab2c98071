//! Shared Atlas
//!
//! Lock-guarded atlas handle for lookups from several threads. Warm
//! lookups only take the read lock; a miss takes the write lock, and
//! `resolve` re-checks the cache under it, so each cell is still computed
//! at most once.

use super::cell_cache_data::CellKey;
use super::drawable::{prewarm, AtlasSource};
use super::region_data::Region;
use crate::asset::TextureHandle;
use crate::error::AtlasResult;
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable, thread-safe handle to one atlas
pub struct SharedAtlas<A> {
    inner: Arc<RwLock<A>>,
}

impl<A> Clone for SharedAtlas<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: AtlasSource> SharedAtlas<A> {
    pub fn new(atlas: A) -> Self {
        Self {
            inner: Arc::new(RwLock::new(atlas)),
        }
    }

    pub fn texture(&self) -> TextureHandle {
        self.inner.read().texture()
    }

    pub fn cell_count(&self) -> usize {
        self.inner.read().cell_count()
    }

    /// Resolve `key`, computing under the write lock on a miss
    pub fn resolve(&self, key: &CellKey) -> AtlasResult<Region> {
        if let Some(region) = self.inner.read().cached(key) {
            return Ok(region);
        }
        self.inner.write().resolve(key)
    }

    /// Region at position `index` of the canonical order
    pub fn drawable(&self, index: usize) -> AtlasResult<Region> {
        let key = {
            let atlas = self.inner.read();
            let key = atlas.key_for(index)?;
            if let Some(region) = atlas.cached(&key) {
                return Ok(region);
            }
            key
        };
        self.inner.write().resolve(&key)
    }

    /// Every region in canonical order
    pub fn drawables(&self) -> AtlasResult<Vec<Region>> {
        self.inner.write().drawables()
    }

    /// Resolve every cell so later lookups stay on the read lock
    pub fn prewarm(&self) -> AtlasResult<usize> {
        prewarm(&mut *self.inner.write())
    }

    /// Run `f` with exclusive access to the atlas
    pub fn with_atlas<R>(&self, f: impl FnOnce(&mut A) -> R) -> R {
        let mut atlas = self.inner.write();
        f(&mut *atlas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas::grid_data::GridAtlasData;
    use crate::atlas::grid_operations::create_grid_atlas;
    use std::thread;

    fn shared_grid() -> SharedAtlas<GridAtlasData> {
        let grid = create_grid_atlas(TextureHandle::new(21, 256.0, 256.0), 16, 16).expect("grid");
        SharedAtlas::new(grid)
    }

    #[test]
    fn test_concurrent_lookups_compute_once() {
        let atlas = shared_grid();
        let count = atlas.cell_count();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let atlas = atlas.clone();
                thread::spawn(move || {
                    (0..count)
                        .map(|index| atlas.drawable(index))
                        .collect::<AtlasResult<Vec<Region>>>()
                })
            })
            .collect();

        let mut results = Vec::new();
        for handle in handles {
            results.push(
                handle
                    .join()
                    .expect("lookup thread panicked")
                    .expect("lookups succeed"),
            );
        }

        assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
        assert_eq!(atlas.with_atlas(|grid| grid.cache.computed), count);
    }

    #[test]
    fn test_prewarm_then_read() {
        let atlas = shared_grid();
        assert_eq!(atlas.prewarm(), Ok(256));
        let computed = atlas.with_atlas(|grid| grid.cache.computed);

        assert!(atlas.drawable(100).is_ok());
        assert!(atlas.resolve(&CellKey::Simple(7)).is_ok());
        assert_eq!(atlas.drawables().map(|all| all.len()), Ok(256));
        assert_eq!(atlas.with_atlas(|grid| grid.cache.computed), computed);
    }

    #[test]
    fn test_out_of_range() {
        let atlas = shared_grid();
        assert!(atlas.drawable(256).is_err());
        assert_eq!(atlas.with_atlas(|grid| grid.cache.computed), 0);
    }
}
