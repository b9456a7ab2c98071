//! Texture Data - Pure DOP
//!
//! NO METHODS beyond construction. Just data handed over by the loader.

/// Opaque identity of a loaded texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u64);

/// Non-owning reference to a loaded texture plus its pixel dimensions.
///
/// Atlases copy the handle once at construction and never query the
/// loader again; dropping an atlas leaves the texture alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureHandle {
    pub id: TextureId,
    pub width: f32,
    pub height: f32,
}

impl TextureHandle {
    pub fn new(id: u64, width: f32, height: f32) -> Self {
        Self {
            id: TextureId(id),
            width,
            height,
        }
    }
}

/// A UTF-8 text file already read from storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextResource {
    /// Where the text came from, used in error messages
    pub url: String,
    /// File contents
    pub text: String,
}

impl TextResource {
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            text: text.into(),
        }
    }
}
