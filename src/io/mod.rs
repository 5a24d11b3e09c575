//! I/O layer: decoding source images and encoding the RGBA result.
//! Both sides delegate the actual codecs to the `image` crate.
pub mod loader;
pub use loader::{open_image, open_rgb};

pub mod writers;
pub use writers::rgba::{supports_alpha, write_rgba};
