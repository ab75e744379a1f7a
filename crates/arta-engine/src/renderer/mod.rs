pub mod instance;
pub mod traits;

// Re-export key types for convenient access
pub use instance::{DrawBatch, DrawBuffer, SpriteInstance};
pub use traits::{BlendMode, Destination, DrawCommand, Renderer};
