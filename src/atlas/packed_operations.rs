//! Packed Atlas Operations - Pure DOP Functions
//!
//! Rectangles are validated and put into reading order once, at
//! construction. Lookups index the sorted list directly.

use super::cell_cache_data::CellKey;
use super::cell_cache_operations::{create_cell_cache, get_or_compute};
use super::geometry::{normalize, rect_center_doubled};
use super::packed_data::{PackedAtlasData, PackedRect, SpriteMetadata};
use super::region_data::Region;
use crate::asset::{TextResource, TextureHandle};
use crate::error::{require_index, require_positive, AtlasError, AtlasResult};
use cgmath::Point2;

/// Parse sprite packing metadata into rectangles, in file order
pub fn parse_sprite_metadata(resource: &TextResource) -> AtlasResult<Vec<PackedRect>> {
    let metadata: SpriteMetadata =
        serde_json::from_str(&resource.text).map_err(|e| AtlasError::MetadataParseError {
            url: resource.url.clone(),
            error: e.to_string(),
        })?;

    Ok(metadata
        .sprites
        .unwrap_or_default()
        .iter()
        .map(|sprite| PackedRect {
            min: Point2::new(sprite.min.x, sprite.min.y),
            max: Point2::new(sprite.max.x, sprite.max.y),
        })
        .collect())
}

/// Check every rectangle is well-formed and inside the texture
pub fn validate_rects(rects: &[PackedRect], texture: &TextureHandle) -> AtlasResult<()> {
    for (index, rect) in rects.iter().enumerate() {
        if rect.min.x >= rect.max.x || rect.min.y >= rect.max.y {
            return Err(AtlasError::InvalidRectangle {
                index,
                reason: format!("min {:?} is not above-left of max {:?}", rect.min, rect.max),
            });
        }

        if rect.min.x < 0 || rect.min.y < 0 {
            return Err(AtlasError::RegionOutOfBounds {
                context: format!("sprite {} origin", index),
                extent: rect.min.x.min(rect.min.y) as f32,
                limit: 0.0,
            });
        }

        if rect.max.x as f32 > texture.width {
            return Err(AtlasError::RegionOutOfBounds {
                context: format!("sprite {} right edge", index),
                extent: rect.max.x as f32,
                limit: texture.width,
            });
        }

        if rect.max.y as f32 > texture.height {
            return Err(AtlasError::RegionOutOfBounds {
                context: format!("sprite {} bottom edge", index),
                extent: rect.max.y as f32,
                limit: texture.height,
            });
        }
    }

    Ok(())
}

/// Reading-order sort key: vertical center, then horizontal center, then
/// the corners so that distinct rectangles never compare equal
fn reading_order_key(rect: &PackedRect) -> (i64, i64, i32, i32, i32, i32) {
    let center = rect_center_doubled(rect.min, rect.max);
    (
        center.y,
        center.x,
        rect.min.y,
        rect.min.x,
        rect.max.y,
        rect.max.x,
    )
}

/// Sort rectangles top-to-bottom, left-to-right by center.
///
/// Best effort for loosely aligned packings: sprites are not grouped into
/// strict rows, so a short sprite may land before a taller one beside it.
pub fn sort_reading_order(rects: &mut [PackedRect]) {
    rects.sort_by_key(reading_order_key);
}

/// Create a packed atlas from rectangles in any order
pub fn create_packed_atlas(
    texture: TextureHandle,
    mut rects: Vec<PackedRect>,
) -> AtlasResult<PackedAtlasData> {
    require_positive(texture.width, "texture width")?;
    require_positive(texture.height, "texture height")?;

    if rects.is_empty() {
        return Err(AtlasError::EmptyAtlas);
    }

    validate_rects(&rects, &texture)?;
    sort_reading_order(&mut rects);

    log::debug!(
        "[packed_operations::create_packed_atlas] {:?}: {} sprites",
        texture.id,
        rects.len()
    );

    Ok(PackedAtlasData {
        texture,
        rects,
        cache: create_cell_cache(),
    })
}

/// Create a packed atlas from sprite packing metadata
pub fn create_packed_atlas_from_metadata(
    texture: TextureHandle,
    metadata: &TextResource,
) -> AtlasResult<PackedAtlasData> {
    let rects = parse_sprite_metadata(metadata)?;
    create_packed_atlas(texture, rects)
}

/// Number of sprites in the atlas
pub fn packed_cell_count(data: &PackedAtlasData) -> usize {
    data.rects.len()
}

/// Sorted rectangle at `index`
pub fn packed_rect(data: &PackedAtlasData, index: usize) -> Option<&PackedRect> {
    data.rects.get(index)
}

/// Region of sprite `index` in reading order, cached
pub fn packed_cell(data: &mut PackedAtlasData, index: usize) -> AtlasResult<Region> {
    require_index(index, packed_cell_count(data))?;

    let texture = data.texture;
    let rect = data.rects[index];
    get_or_compute(&mut data.cache, CellKey::Simple(index), |_| {
        let viewport = normalize(
            rect.min.x as f32,
            rect.min.y as f32,
            rect.max.x as f32,
            rect.max.y as f32,
            texture.width,
            texture.height,
        )?;

        Ok(Region {
            texture,
            width: (rect.max.x - rect.min.x) as f32,
            height: (rect.max.y - rect.min.y) as f32,
            viewport,
        })
    })
}

/// Every sprite in reading order
pub fn packed_cells(data: &mut PackedAtlasData) -> AtlasResult<Vec<Region>> {
    (0..packed_cell_count(data))
        .map(|index| packed_cell(data, index))
        .collect()
}
