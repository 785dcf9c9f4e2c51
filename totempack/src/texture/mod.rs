//! Totem texture generation.
//!
//! The skin texture goes through a fixed decode, draw, transform, encode
//! sequence. The transform step is the extension point: implement
//! [`PixelTransform`] (or pass a closure) to crop or mask the skin without
//! touching fetching, archiving or delivery.
//!
//! ```text
//! raw PNG ──► decode ──► RGBA surface ──► PixelTransform ──► PNG
//! ```
//!
//! # Example
//!
//! ```
//! use totempack::texture::{PassThrough, TextureProcessor};
//!
//! let processor = TextureProcessor::new(PassThrough);
//! assert!(processor.process(b"not an image").is_err());
//! ```

mod processor;
mod transform;

pub use processor::TextureProcessor;
pub use transform::{PassThrough, PixelTransform};
