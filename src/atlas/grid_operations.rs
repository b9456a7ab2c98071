//! Grid Atlas Operations - Pure DOP Functions
//!
//! Descriptor math is shared with multi-sheets: a sub-sheet is a grid
//! descriptor plus a name.

use super::cell_cache_data::CellKey;
use super::cell_cache_operations::{create_cell_cache, get_or_compute};
use super::geometry::normalize;
use super::grid_data::{CellBounds, GridAtlasData, GridDescriptor};
use super::region_data::Region;
use crate::asset::TextureHandle;
use crate::error::{require_index, require_positive, AtlasError, AtlasResult};

/// Number of whole cells per row
pub fn grid_columns(descriptor: &GridDescriptor) -> usize {
    if descriptor.cell_width == 0 {
        return 0;
    }
    (descriptor.width / descriptor.cell_width as f32).floor() as usize
}

/// Number of whole cells per column
pub fn grid_rows(descriptor: &GridDescriptor) -> usize {
    if descriptor.cell_height == 0 {
        return 0;
    }
    (descriptor.height / descriptor.cell_height as f32).floor() as usize
}

/// Total cells in the grid
pub fn descriptor_cell_count(descriptor: &GridDescriptor) -> usize {
    grid_columns(descriptor) * grid_rows(descriptor)
}

/// Pixels left over past the last whole column and row
pub fn unused_extent(descriptor: &GridDescriptor) -> (f64, f64) {
    let used_width = grid_columns(descriptor) as f64 * f64::from(descriptor.cell_width);
    let used_height = grid_rows(descriptor) as f64 * f64::from(descriptor.cell_height);
    (
        f64::from(descriptor.width) - used_width,
        f64::from(descriptor.height) - used_height,
    )
}

/// Check a descriptor against the texture it will cut.
///
/// Zero cell sizes fail with `DivideByZero`; grids reaching past the
/// texture edge fail with `RegionOutOfBounds`.
pub fn validate_descriptor(
    descriptor: &GridDescriptor,
    texture: &TextureHandle,
    context: &str,
) -> AtlasResult<()> {
    require_positive(texture.width, "texture width")?;
    require_positive(texture.height, "texture height")?;
    require_positive(descriptor.cell_width as f32, &format!("{} cell width", context))?;
    require_positive(descriptor.cell_height as f32, &format!("{} cell height", context))?;

    if !(descriptor.width >= 0.0 && descriptor.height >= 0.0) {
        return Err(AtlasError::RegionOutOfBounds {
            context: format!("{} extent", context),
            extent: descriptor.width.min(descriptor.height),
            limit: 0.0,
        });
    }

    let right = descriptor.offset_x as f32 + descriptor.width;
    if right > texture.width {
        return Err(AtlasError::RegionOutOfBounds {
            context: format!("{} right edge", context),
            extent: right,
            limit: texture.width,
        });
    }

    let bottom = descriptor.offset_y as f32 + descriptor.height;
    if bottom > texture.height {
        return Err(AtlasError::RegionOutOfBounds {
            context: format!("{} bottom edge", context),
            extent: bottom,
            limit: texture.height,
        });
    }

    Ok(())
}

/// Pixel bounds of cell `index`, row-major from the top-left
pub fn grid_cell_bounds(descriptor: &GridDescriptor, index: usize) -> AtlasResult<CellBounds> {
    require_index(index, descriptor_cell_count(descriptor))?;

    let columns = grid_columns(descriptor);
    let column = (index % columns) as u64;
    let row = (index / columns) as u64;
    let cell_width = u64::from(descriptor.cell_width);
    let cell_height = u64::from(descriptor.cell_height);

    let x0 = column * cell_width + u64::from(descriptor.offset_x);
    let y0 = row * cell_height + u64::from(descriptor.offset_y);

    Ok(CellBounds {
        x0,
        y0,
        x1: x0 + cell_width,
        y1: y0 + cell_height,
    })
}

/// Compute the region of one grid cell without caching
pub fn compute_grid_region(
    texture: &TextureHandle,
    descriptor: &GridDescriptor,
    index: usize,
) -> AtlasResult<Region> {
    let bounds = grid_cell_bounds(descriptor, index)?;
    let viewport = normalize(
        bounds.x0 as f32,
        bounds.y0 as f32,
        bounds.x1 as f32,
        bounds.y1 as f32,
        texture.width,
        texture.height,
    )?;

    Ok(Region {
        texture: *texture,
        width: descriptor.cell_width as f32,
        height: descriptor.cell_height as f32,
        viewport,
    })
}

/// Create a grid atlas covering the whole texture
pub fn create_grid_atlas(
    texture: TextureHandle,
    cell_width: u32,
    cell_height: u32,
) -> AtlasResult<GridAtlasData> {
    create_grid_atlas_with_offset(texture, cell_width, cell_height, 0, 0)
}

/// Create a grid atlas starting at a pixel offset.
///
/// The grid covers the texture from the offset to its bottom-right corner.
pub fn create_grid_atlas_with_offset(
    texture: TextureHandle,
    cell_width: u32,
    cell_height: u32,
    offset_x: u32,
    offset_y: u32,
) -> AtlasResult<GridAtlasData> {
    require_positive(texture.width, "texture width")?;
    require_positive(texture.height, "texture height")?;

    let width = texture.width - offset_x as f32;
    let height = texture.height - offset_y as f32;
    if width < 0.0 || height < 0.0 {
        return Err(AtlasError::RegionOutOfBounds {
            context: "grid offset".to_string(),
            extent: (offset_x as f32).max(offset_y as f32),
            limit: texture.width.min(texture.height),
        });
    }

    let descriptor = GridDescriptor {
        width,
        height,
        cell_width,
        cell_height,
        offset_x,
        offset_y,
    };
    validate_descriptor(&descriptor, &texture, "grid")?;

    let (unused_width, unused_height) = unused_extent(&descriptor);
    if unused_width > 0.0 || unused_height > 0.0 {
        log::warn!(
            "[grid_operations::create_grid_atlas] {}x{} cells leave {}x{} of {:?} unused",
            cell_width,
            cell_height,
            unused_width,
            unused_height,
            texture.id
        );
    }

    log::debug!(
        "[grid_operations::create_grid_atlas] {:?}: {} columns x {} rows",
        texture.id,
        grid_columns(&descriptor),
        grid_rows(&descriptor)
    );

    Ok(GridAtlasData {
        texture,
        descriptor,
        cache: create_cell_cache(),
    })
}

/// Number of cells in the atlas
pub fn grid_cell_count(data: &GridAtlasData) -> usize {
    descriptor_cell_count(&data.descriptor)
}

/// Region of cell `index`, computed on first access and cached
pub fn grid_cell(data: &mut GridAtlasData, index: usize) -> AtlasResult<Region> {
    require_index(index, grid_cell_count(data))?;

    let texture = data.texture;
    let descriptor = data.descriptor;
    get_or_compute(&mut data.cache, CellKey::Simple(index), |_| {
        compute_grid_region(&texture, &descriptor, index)
    })
}

/// Every cell in index order
pub fn grid_cells(data: &mut GridAtlasData) -> AtlasResult<Vec<Region>> {
    (0..grid_cell_count(data))
        .map(|index| grid_cell(data, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas::cell_cache_operations::cached_len;
    use cgmath::Point2;

    fn sheet() -> GridAtlasData {
        create_grid_atlas(TextureHandle::new(1, 64.0, 32.0), 16, 16).expect("valid grid")
    }

    #[test]
    fn test_partition() {
        let mut atlas = sheet();
        assert_eq!(grid_cell_count(&atlas), 8);
        assert_eq!(grid_columns(&atlas.descriptor), 4);
        assert_eq!(grid_rows(&atlas.descriptor), 2);

        let bounds = grid_cell_bounds(&atlas.descriptor, 5).expect("in range");
        assert_eq!(
            bounds,
            CellBounds {
                x0: 16,
                y0: 16,
                x1: 32,
                y1: 32
            }
        );

        let region = grid_cell(&mut atlas, 5).expect("in range");
        assert_eq!(region.viewport.min, Point2::new(0.25, 0.5));
        assert_eq!(region.viewport.max, Point2::new(0.5, 1.0));
        assert_eq!(region.width, 16.0);
        assert_eq!(region.height, 16.0);
    }

    #[test]
    fn test_idempotent_lookup() {
        let mut atlas = sheet();
        let first = grid_cell(&mut atlas, 3).expect("in range");
        let second = grid_cell(&mut atlas, 3).expect("in range");

        assert_eq!(first, second);
        assert_eq!(first.texture.id, second.texture.id);
        assert_eq!(atlas.cache.computed, 1);
    }

    #[test]
    fn test_error_isolation() {
        let mut atlas = sheet();
        let before = grid_cell(&mut atlas, 0).expect("in range");

        assert_eq!(
            grid_cell(&mut atlas, 8),
            Err(AtlasError::IndexOutOfRange {
                index: 8,
                cell_count: 8
            })
        );
        assert!(grid_cell(&mut atlas, usize::MAX).is_err());
        assert_eq!(cached_len(&atlas.cache), 1);
        assert_eq!(grid_cell(&mut atlas, 0), Ok(before));
        assert!(grid_cell(&mut atlas, 7).is_ok());
    }

    #[test]
    fn test_cells_in_order() {
        let mut atlas = sheet();
        let cells = grid_cells(&mut atlas).expect("all cells");

        assert_eq!(cells.len(), 8);
        assert_eq!(atlas.cache.computed, 8);
        assert_eq!(cells[1].viewport.min, Point2::new(0.25, 0.0));
        assert_eq!(cells[4].viewport.min, Point2::new(0.0, 0.5));
        assert_eq!(cells[7].viewport.max, Point2::new(1.0, 1.0));
    }

    #[test]
    fn test_zero_cell_size() {
        let texture = TextureHandle::new(1, 64.0, 32.0);
        assert!(matches!(
            create_grid_atlas(texture, 0, 16),
            Err(AtlasError::DivideByZero { .. })
        ));
        assert!(matches!(
            create_grid_atlas(texture, 16, 0),
            Err(AtlasError::DivideByZero { .. })
        ));
    }

    #[test]
    fn test_zero_texture() {
        let texture = TextureHandle::new(1, 0.0, 32.0);
        assert!(matches!(
            create_grid_atlas(texture, 16, 16),
            Err(AtlasError::DivideByZero { .. })
        ));
    }

    #[test]
    fn test_offset_grid() {
        let texture = TextureHandle::new(1, 64.0, 32.0);
        let mut atlas = create_grid_atlas_with_offset(texture, 16, 16, 16, 0).expect("valid grid");

        assert_eq!(grid_cell_count(&atlas), 6);
        let region = grid_cell(&mut atlas, 0).expect("in range");
        assert_eq!(region.viewport.min, Point2::new(0.25, 0.0));
        let last = grid_cell(&mut atlas, 5).expect("in range");
        assert_eq!(last.viewport.max, Point2::new(1.0, 1.0));

        assert!(matches!(
            create_grid_atlas_with_offset(texture, 16, 16, 80, 0),
            Err(AtlasError::RegionOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_partial_cells_dropped() {
        let texture = TextureHandle::new(1, 70.0, 40.0);
        let atlas = create_grid_atlas(texture, 16, 16).expect("valid grid");
        assert_eq!(grid_cell_count(&atlas), 8);
    }

    #[test]
    fn test_unused_extent_on_huge_texture() {
        let texture = TextureHandle::new(1, 1e10, 16.0);
        let mut atlas = create_grid_atlas(texture, 16, 16).expect("valid grid");

        let (unused_width, unused_height) = unused_extent(&atlas.descriptor);
        assert!(unused_width < 16.0);
        assert_eq!(unused_height, 0.0);

        let last = grid_cell_count(&atlas) - 1;
        let bounds = grid_cell_bounds(&atlas.descriptor, last).expect("in range");
        assert!(bounds.x1 > u64::from(u32::MAX));
        let region = grid_cell(&mut atlas, last).expect("in range");
        assert!(region.viewport.max.x <= 1.0);
    }

    #[test]
    fn test_negative_or_nan_extent() {
        let texture = TextureHandle::new(1, 64.0, 32.0);
        for width in [-5.0, f32::NAN] {
            let descriptor = GridDescriptor {
                width,
                height: 16.0,
                cell_width: 16,
                cell_height: 16,
                offset_x: 0,
                offset_y: 0,
            };
            assert!(matches!(
                validate_descriptor(&descriptor, &texture, "walk"),
                Err(AtlasError::RegionOutOfBounds { .. })
            ));
        }
    }

    #[test]
    fn test_descriptor_out_of_bounds() {
        let texture = TextureHandle::new(1, 64.0, 32.0);
        let descriptor = GridDescriptor {
            width: 64.0,
            height: 16.0,
            cell_width: 16,
            cell_height: 16,
            offset_x: 0,
            offset_y: 24,
        };
        assert!(matches!(
            validate_descriptor(&descriptor, &texture, "walk"),
            Err(AtlasError::RegionOutOfBounds { .. })
        ));
    }
}
