//! Host-owned texture handles.
//!
//! The engine never loads, frees or mutates textures. It only reads their
//! pixel dimensions and passes borrowed handles back to the host's
//! [`Renderer`](crate::renderer::Renderer), which maps a [`TextureId`] to
//! whatever GPU resource it keeps.

use std::fmt;

/// Identifies a texture owned by the host. Equality is handle identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureId(pub u32);

/// A texture as seen by the engine: an identity plus pixel dimensions.
pub trait Texture {
    fn id(&self) -> TextureId;
    fn width(&self) -> u32;
    fn height(&self) -> u32;
}

impl fmt::Debug for dyn Texture + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Texture")
            .field("id", &self.id())
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

/// Plain-value texture handle for hosts that track GPU textures by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureInfo {
    pub id: TextureId,
    pub width: u32,
    pub height: u32,
}

impl TextureInfo {
    pub fn new(id: u32, width: u32, height: u32) -> Self {
        Self {
            id: TextureId(id),
            width,
            height,
        }
    }
}

impl Texture for TextureInfo {
    fn id(&self) -> TextureId {
        self.id
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn texture_info_reports_dimensions() {
        let tex = TextureInfo::new(3, 64, 32);
        let handle: &dyn Texture = &tex;
        assert_eq!(handle.id(), TextureId(3));
        assert_eq!(handle.width(), 64);
        assert_eq!(handle.height(), 32);
    }

    #[test]
    fn trait_object_debug_shows_id() {
        let tex = TextureInfo::new(7, 8, 8);
        let handle: &dyn Texture = &tex;
        assert!(format!("{:?}", handle).contains("TextureId(7)"));
    }
}
