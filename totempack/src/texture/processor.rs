//! Skin to totem texture processing.
//!
//! Decodes the raw skin, copies it onto an RGBA surface of the same size,
//! runs the configured [`PixelTransform`] and re-encodes the surface as PNG.

use std::io::Cursor;
use std::sync::Arc;

use image::{ImageFormat, RgbaImage};
use tracing::{debug, instrument};

use super::transform::{PassThrough, PixelTransform};
use crate::error::{PackError, PackResult};

/// Bytes per RGBA8 pixel.
const BYTES_PER_PIXEL: usize = 4;

/// Turns a raw skin texture into a totem texture.
///
/// Cheap to clone; the transform is shared.
#[derive(Clone)]
pub struct TextureProcessor {
    transform: Arc<dyn PixelTransform>,
}

impl Default for TextureProcessor {
    fn default() -> Self {
        Self::new(PassThrough)
    }
}

impl std::fmt::Debug for TextureProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextureProcessor")
            .field("transform", &self.transform.name())
            .finish()
    }
}

impl TextureProcessor {
    /// Create a processor with the given pixel transform.
    pub fn new(transform: impl PixelTransform + 'static) -> Self {
        Self {
            transform: Arc::new(transform),
        }
    }

    /// Transform a skin on the blocking pool.
    ///
    /// The caller suspends once and resumes with either the encoded PNG or
    /// the first error of the decode/draw/encode sequence.
    pub async fn transform(&self, raw: Vec<u8>) -> PackResult<Vec<u8>> {
        let processor = self.clone();
        tokio::task::spawn_blocking(move || processor.process(&raw)).await?
    }

    /// Transform a skin on the current thread.
    #[instrument(level = "debug", skip_all, fields(bytes = raw.len(), transform = self.transform.name()))]
    pub fn process(&self, raw: &[u8]) -> PackResult<Vec<u8>> {
        let decoded =
            image::load_from_memory(raw).map_err(|e| PackError::ImageDecode(e.to_string()))?;

        let surface = draw_surface(decoded)?;
        let (width, height) = surface.dimensions();
        debug!(width, height, "skin decoded");

        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        let pixels = self.transform.apply(surface.into_raw(), width, height);
        if pixels.len() != expected {
            return Err(PackError::RenderContext(format!(
                "pixel transform returned {} bytes, expected {} for {}x{}",
                pixels.len(),
                expected,
                width,
                height
            )));
        }
        let surface = RgbaImage::from_raw(width, height, pixels).ok_or_else(|| {
            PackError::RenderContext(format!("cannot build {}x{} surface", width, height))
        })?;

        encode_png(&surface)
    }
}

/// Copy the decoded image onto an RGBA surface at its native size.
fn draw_surface(decoded: image::DynamicImage) -> PackResult<RgbaImage> {
    if decoded.width() == 0 || decoded.height() == 0 {
        return Err(PackError::RenderContext(format!(
            "image has no drawable area ({}x{})",
            decoded.width(),
            decoded.height()
        )));
    }
    Ok(decoded.into_rgba8())
}

fn encode_png(surface: &RgbaImage) -> PackResult<Vec<u8>> {
    let mut buf = Vec::new();
    surface
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| PackError::ImageEncode(e.to_string()))?;

    if buf.is_empty() {
        return Err(PackError::ImageEncode("encoder produced no output".to_string()));
    }
    Ok(buf)
}
