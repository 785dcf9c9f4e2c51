//! Pluggable per-pixel edits applied to the skin surface.

/// A pixel transform applied between decode and re-encode.
///
/// `pixels` is tightly packed RGBA8 in row-major order, `width * height * 4`
/// bytes long. The returned buffer must have the same length.
pub trait PixelTransform: Send + Sync {
    /// Transform the surface contents.
    fn apply(&self, pixels: Vec<u8>, width: u32, height: u32) -> Vec<u8>;

    /// Name used in log output.
    fn name(&self) -> &str {
        "custom"
    }
}

/// Copies the surface unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl PixelTransform for PassThrough {
    fn apply(&self, pixels: Vec<u8>, _width: u32, _height: u32) -> Vec<u8> {
        pixels
    }

    fn name(&self) -> &str {
        "pass-through"
    }
}

impl<F> PixelTransform for F
where
    F: Fn(Vec<u8>, u32, u32) -> Vec<u8> + Send + Sync,
{
    fn apply(&self, pixels: Vec<u8>, width: u32, height: u32) -> Vec<u8> {
        self(pixels, width, height)
    }
}
