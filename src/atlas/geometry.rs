//! Data-Oriented Atlas Geometry
//!
//! Pure functions turning pixel bounds into normalized texture viewports.
//! Every atlas variant goes through `normalize` so the same pixel bounds
//! always produce the same viewport.

use crate::error::{require_positive, AtlasResult};
use cgmath::{Point2, Vector2};

/// Normalized texture viewport, corners in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub min: Point2<f32>,
    pub max: Point2<f32>,
}

/// Normalize pixel bounds against texture dimensions
/// Pure function - fails with `DivideByZero` on a zero-sized texture
pub fn normalize(
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
    texture_width: f32,
    texture_height: f32,
) -> AtlasResult<Viewport> {
    require_positive(texture_width, "texture width")?;
    require_positive(texture_height, "texture height")?;

    Ok(Viewport {
        min: Point2::new(min_x / texture_width, min_y / texture_height),
        max: Point2::new(max_x / texture_width, max_y / texture_height),
    })
}

/// Size of the viewport in normalized units
pub fn viewport_size(viewport: &Viewport) -> Vector2<f32> {
    viewport.max - viewport.min
}

/// Center point of the viewport
pub fn viewport_center(viewport: &Viewport) -> Point2<f32> {
    Point2::new(
        (viewport.min.x + viewport.max.x) * 0.5,
        (viewport.min.y + viewport.max.y) * 0.5,
    )
}

/// Transform local UV (0-1) to atlas UV
/// Pure function - maps a UV inside one cell to the whole texture
pub fn transform_uv(viewport: &Viewport, local_uv: Vector2<f32>) -> Point2<f32> {
    Point2::new(
        viewport.min.x + (viewport.max.x - viewport.min.x) * local_uv.x,
        viewport.min.y + (viewport.max.y - viewport.min.y) * local_uv.y,
    )
}

/// Twice the center of integer pixel bounds.
/// Kept doubled so the result stays exact.
pub fn rect_center_doubled(min: Point2<i32>, max: Point2<i32>) -> Point2<i64> {
    Point2::new(
        i64::from(min.x) + i64::from(max.x),
        i64::from(min.y) + i64::from(max.y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        let viewport = normalize(16.0, 16.0, 32.0, 32.0, 64.0, 32.0).expect("valid texture");
        assert_eq!(viewport.min, Point2::new(0.25, 0.5));
        assert_eq!(viewport.max, Point2::new(0.5, 1.0));
    }

    #[test]
    fn test_normalize_zero_texture() {
        assert!(normalize(0.0, 0.0, 1.0, 1.0, 0.0, 32.0).is_err());
        assert!(normalize(0.0, 0.0, 1.0, 1.0, 32.0, 0.0).is_err());
    }

    #[test]
    fn test_transform_uv() {
        let viewport = normalize(16.0, 0.0, 32.0, 16.0, 64.0, 32.0).expect("valid texture");
        let uv = transform_uv(&viewport, Vector2::new(0.5, 0.5));
        assert_eq!(uv, Point2::new(0.375, 0.25));
        assert_eq!(viewport_center(&viewport), uv);
        assert_eq!(viewport_size(&viewport), Vector2::new(0.25, 0.5));
    }

    #[test]
    fn test_rect_center_doubled() {
        let center = rect_center_doubled(Point2::new(1, 2), Point2::new(4, 8));
        assert_eq!(center, Point2::new(5, 10));
    }
}
