pub mod particles;
