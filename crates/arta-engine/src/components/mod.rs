pub mod animation;
pub mod emitter;
pub mod sprite;
