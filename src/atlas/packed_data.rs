//! Packed Atlas Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in packed_operations.rs

use super::cell_cache_data::CellCacheData;
use crate::asset::TextureHandle;
use cgmath::Point2;
use serde::Deserialize;

/// Pixel rectangle of one packed sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedRect {
    pub min: Point2<i32>,
    pub max: Point2<i32>,
}

/// Texture whose cells are externally packed rectangles.
///
/// `rects` is sorted into reading order at construction; cell `i` is
/// `rects[i]`.
#[derive(Debug)]
pub struct PackedAtlasData {
    pub texture: TextureHandle,
    pub rects: Vec<PackedRect>,
    pub cache: CellCacheData,
}

// Wire format of the sprite packing metadata.
// Lower-case keys, with capitalized and upper-case aliases for packers
// that emit Go-style names.

/// Top-level metadata document.
/// A missing or null sprite list reads as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpriteMetadata {
    #[serde(default, alias = "Sprites", alias = "SPRITES")]
    pub sprites: Option<Vec<SpriteEntry>>,
}

/// One packed sprite
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SpriteEntry {
    #[serde(alias = "Min", alias = "MIN")]
    pub min: SpritePoint,
    #[serde(alias = "Max", alias = "MAX")]
    pub max: SpritePoint,
}

/// Integer pixel corner
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SpritePoint {
    #[serde(alias = "X")]
    pub x: i32,
    #[serde(alias = "Y")]
    pub y: i32,
}
