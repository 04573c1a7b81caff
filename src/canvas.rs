use crate::color::RgbaColor;

/// Fully transparent background pixel.
pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

// ============================================================================
// CANVAS – flat row-major RGBA buffer produced by one rasterization call
// ============================================================================

/// A `width`×`height` grid of RGBA pixels, row-major, origin at the top-left.
///
/// The buffer is always exactly `width * height * 4` bytes. Pixels are either
/// fully transparent or an opaque shape colour; nothing in between is ever
/// written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    // ---- construction -------------------------------------------------------

    /// Create an empty (fully transparent) canvas.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * 4;
        Self {
            width,
            height,
            pixels: vec![0u8; len],
        }
    }

    // ---- accessors ----------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes.
    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * 4
    }

    /// Read a pixel. Out-of-bounds reads return [`TRANSPARENT`].
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        if x >= self.width || y >= self.height {
            return TRANSPARENT;
        }
        let idx = y as usize * self.stride() + x as usize * 4;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    /// Number of pixels with non-zero alpha.
    pub fn opaque_pixel_count(&self) -> usize {
        self.pixels.chunks_exact(4).filter(|px| px[3] != 0).count()
    }

    // ---- writing ------------------------------------------------------------

    /// Mutable rows, top to bottom. Each row is `stride()` bytes.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = (usize, &mut [u8])> {
        let stride = self.stride();
        self.pixels.chunks_exact_mut(stride.max(4)).enumerate()
    }

    /// Fill every pixel with `color`.
    pub fn fill(&mut self, color: [u8; 4]) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&color);
        }
    }
}

/// Write one opaque pixel at column `x` of a row slice.
#[inline]
pub(crate) fn put(row: &mut [u8], x: usize, rgba: [u8; 4]) {
    let idx = x * 4;
    row[idx..idx + 4].copy_from_slice(&rgba);
}

/// The bytes written for a filled pixel: the colour at full opacity.
#[inline]
pub(crate) fn opaque(color: RgbaColor) -> [u8; 4] {
    [color.r, color.g, color.b, 255]
}
