//! Region Data - Pure DOP
//!
//! NO METHODS. Just data.
//! Regions are produced by the atlas operations modules.

use super::geometry::Viewport;
use crate::asset::TextureHandle;

/// One resolved atlas cell: what a renderer needs to draw it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    /// Backing texture (non-owning)
    pub texture: TextureHandle,
    /// Cell width in pixels
    pub width: f32,
    /// Cell height in pixels
    pub height: f32,
    /// Normalized sub-rectangle of the texture
    pub viewport: Viewport,
}
