//! Sprite-sheet animation.
//!
//! An [`AnimatedSprite`] steps through the frames of a grid atlas, row by
//! row, one frame per [`update`](AnimatedSprite::update) call. Playback is
//! tied to the host's tick rate, not to elapsed time.

use glam::Vec2;

use crate::assets::manifest::AtlasDescriptor;
use crate::assets::texture::Texture;
use crate::core::color::Color;
use crate::core::math::Rect;
use crate::error::{EngineError, Result};
use crate::renderer::traits::{Destination, DrawCommand, Renderer};

/// A sprite that cycles through the cells of a `rows x columns` atlas.
#[derive(Debug, Clone)]
pub struct AnimatedSprite<'t> {
    atlas: &'t dyn Texture,
    /// Top-left of the destination rectangle.
    pub position: Vec2,
    pub tint: Color,
    rows: u32,
    columns: u32,
    current_frame: u32,
    total_frames: u32,
}

impl<'t> AnimatedSprite<'t> {
    /// Fails with [`EngineError::InvalidAtlasLayout`] if `rows` or `columns`
    /// is zero (or the frame count overflows).
    pub fn new(atlas: &'t dyn Texture, position: Vec2, rows: u32, columns: u32) -> Result<Self> {
        let total_frames = rows
            .checked_mul(columns)
            .filter(|&n| n > 0)
            .ok_or(EngineError::InvalidAtlasLayout { rows, columns })?;
        Ok(Self {
            atlas,
            position,
            tint: Color::WHITE,
            rows,
            columns,
            current_frame: 0,
            total_frames,
        })
    }

    /// Build from a manifest atlas entry.
    pub fn from_descriptor(atlas: &'t dyn Texture, desc: &AtlasDescriptor, position: Vec2) -> Result<Self> {
        Self::new(atlas, position, desc.rows, desc.columns)
    }

    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }

    /// Advance one frame, wrapping to 0 after the last.
    pub fn update(&mut self) {
        self.current_frame = (self.current_frame + 1) % self.total_frames;
    }

    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    /// Jump to a frame; out-of-range values wrap.
    pub fn set_frame(&mut self, frame: u32) {
        self.current_frame = frame % self.total_frames;
    }

    pub fn total_frames(&self) -> u32 {
        self.total_frames
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn atlas(&self) -> &'t dyn Texture {
        self.atlas
    }

    /// Size of one cell. Integer division: leftover pixels on the right and
    /// bottom edges of the atlas are never sampled.
    pub fn frame_size(&self) -> (i32, i32) {
        (
            (self.atlas.width() / self.columns) as i32,
            (self.atlas.height() / self.rows) as i32,
        )
    }

    /// Atlas region of the current frame.
    pub fn source_rect(&self) -> Rect {
        let (width, height) = self.frame_size();
        let row = (self.current_frame / self.columns) as i32;
        let column = (self.current_frame % self.columns) as i32;
        Rect::new(column * width, row * height, width, height)
    }

    /// Screen region: position truncated to whole pixels, one frame in size.
    pub fn destination_rect(&self) -> Rect {
        let (width, height) = self.frame_size();
        Rect::new(self.position.x as i32, self.position.y as i32, width, height)
    }

    /// Emit the current frame. Call inside a batch opened by the host.
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.draw(&DrawCommand {
            texture: self.atlas,
            destination: Destination::Rect(self.destination_rect()),
            source: self.source_rect(),
            tint: self.tint,
            rotation: 0.0,
            origin: Vec2::ZERO,
            scale: 1.0,
            depth: 0.0,
        });
    }
}
