use bytemuck::{Pod, Zeroable};

use super::traits::{BlendMode, Destination, DrawCommand, Renderer};
use crate::assets::texture::TextureId;

/// Flattened draw command, laid out for direct upload as per-instance data.
/// 16 floats = 64 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    /// Destination anchor (or top-left for rect destinations).
    pub x: f32,
    pub y: f32,
    /// Rendered size in world units (source size times scale).
    pub width: f32,
    pub height: f32,
    /// Source region in texture pixels.
    pub src_x: f32,
    pub src_y: f32,
    pub src_width: f32,
    pub src_height: f32,
    /// Pivot in source-pixel space.
    pub origin_x: f32,
    pub origin_y: f32,
    /// Rotation in radians.
    pub rotation: f32,
    pub depth: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl SpriteInstance {
    pub const FLOATS: usize = 16;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn from_command(command: &DrawCommand<'_>) -> Self {
        let src = command.source;
        let (x, y, width, height) = match command.destination {
            Destination::Position(pos) => (
                pos.x,
                pos.y,
                src.width as f32 * command.scale,
                src.height as f32 * command.scale,
            ),
            Destination::Rect(rect) => (
                rect.x as f32,
                rect.y as f32,
                rect.width as f32,
                rect.height as f32,
            ),
        };
        let [r, g, b, a] = command.tint.to_array();
        Self {
            x,
            y,
            width,
            height,
            src_x: src.x as f32,
            src_y: src.y as f32,
            src_width: src.width as f32,
            src_height: src.height as f32,
            origin_x: command.origin.x,
            origin_y: command.origin.y,
            rotation: command.rotation,
            depth: command.depth,
            r,
            g,
            b,
            a,
        }
    }
}

/// A contiguous run of instances sharing one texture and blend mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawBatch {
    pub texture: TextureId,
    pub blend: BlendMode,
    /// Start index in the instance array.
    pub start: u32,
    /// End index (exclusive) in the instance array.
    pub end: u32,
}

impl DrawBatch {
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Recording renderer: collects a frame's draw commands as instance data
/// plus batch ranges, for hosts that submit everything in one go.
pub struct DrawBuffer {
    instances: Vec<SpriteInstance>,
    batches: Vec<DrawBatch>,
    /// Blend mode of the open batch, if any.
    open: Option<BlendMode>,
    /// First batch index belonging to the open batch.
    segment_start: usize,
}

impl DrawBuffer {
    pub fn new() -> Self {
        Self::with_capacity(512)
    }

    pub fn with_capacity(instances: usize) -> Self {
        Self {
            instances: Vec::with_capacity(instances),
            batches: Vec::new(),
            open: None,
            segment_start: 0,
        }
    }

    /// Drop the recorded frame. Call once per frame before drawing.
    pub fn clear(&mut self) {
        self.instances.clear();
        self.batches.clear();
        self.open = None;
        self.segment_start = 0;
    }

    pub fn instances(&self) -> &[SpriteInstance] {
        &self.instances
    }

    pub fn batches(&self) -> &[DrawBatch] {
        &self.batches
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn is_batch_open(&self) -> bool {
        self.open.is_some()
    }

    /// Instance data as raw bytes for a vertex/instance buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }

    fn push(&mut self, texture: TextureId, blend: BlendMode, instance: SpriteInstance) {
        let index = self.instances.len() as u32;
        self.instances.push(instance);

        if self.open.is_some() && self.batches.len() > self.segment_start {
            if let Some(last) = self.batches.last_mut() {
                if last.texture == texture && last.blend == blend && last.end == index {
                    last.end += 1;
                    return;
                }
            }
        }
        self.batches.push(DrawBatch {
            texture,
            blend,
            start: index,
            end: index + 1,
        });
    }
}

impl Default for DrawBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for DrawBuffer {
    fn begin_batch(&mut self, blend: BlendMode) {
        if self.open.is_some() {
            log::warn!("begin_batch called while a batch is open; closing it");
        }
        self.open = Some(blend);
        self.segment_start = self.batches.len();
    }

    fn draw(&mut self, command: &DrawCommand<'_>) {
        let blend = match self.open {
            Some(blend) => blend,
            None => {
                log::warn!("draw called outside a batch; recording with alpha blending");
                BlendMode::Alpha
            }
        };
        self.push(command.texture.id(), blend, SpriteInstance::from_command(command));
    }

    fn end_batch(&mut self) {
        if self.open.take().is_none() {
            log::warn!("end_batch called without an open batch");
        }
        self.segment_start = self.batches.len();
    }
}
