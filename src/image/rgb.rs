//! Interleaved 8-bit RGB buffers: a borrowed view plus an owned variant.
//!
//! Pixels are `[u8; 3]` triples; the stride counts pixels, not bytes. The
//! borrowed [`ImageRgb8`] is what the pipeline entry points accept, so callers
//! can hand over decoded frames without copying. Grayscale conversion uses the
//! BT.601 luma weights and keeps the 0..255 intensity scale, which is what the
//! default edge thresholds are calibrated against.
use super::f32::ImageF32;
use super::traits::{ImageView, ImageViewMut};
use super::u8::GrayImageU8;

const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Borrowed RGB view.
#[derive(Clone, Debug)]
pub struct ImageRgb8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // pixels between rows
    pub data: &'a [[u8; 3]],
}

impl<'a> ImageRgb8<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        self.data[y * self.stride + x]
    }

    /// Single-channel float intensity in [0, 255].
    pub fn to_luma_f32(&self) -> ImageF32 {
        let mut out = ImageF32::new(self.w, self.h);
        for y in 0..self.h {
            let src = self.row(y);
            let dst = out.row_mut(y);
            for (d, px) in dst.iter_mut().zip(src.iter()) {
                *d = LUMA_R * px[0] as f32 + LUMA_G * px[1] as f32 + LUMA_B * px[2] as f32;
            }
        }
        out
    }

    /// Single-channel 8-bit intensity (rounded BT.601 luma).
    pub fn to_luma_u8(&self) -> GrayImageU8 {
        let mut data = Vec::with_capacity(self.w * self.h);
        for row in self.rows() {
            for px in row {
                let luma =
                    LUMA_R * px[0] as f32 + LUMA_G * px[1] as f32 + LUMA_B * px[2] as f32;
                data.push(luma.round().clamp(0.0, 255.0) as u8);
            }
        }
        GrayImageU8::new(self.w, self.h, data)
    }
}

impl<'a> ImageView for ImageRgb8<'a> {
    type Pixel = [u8; 3];

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[[u8; 3]] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[[u8; 3]]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}

/// Owned RGB buffer (stride == width).
#[derive(Clone, Debug)]
pub struct RgbImageU8 {
    width: usize,
    height: usize,
    data: Vec<[u8; 3]>,
}

impl RgbImageU8 {
    /// Wrap pixel triples; `data` must hold `width * height` entries.
    pub fn new(width: usize, height: usize, data: Vec<[u8; 3]>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            width,
            height,
            data,
        }
    }

    /// Uniform buffer of a single color.
    pub fn filled(width: usize, height: usize, color: [u8; 3]) -> Self {
        Self::new(width, height, vec![color; width * height])
    }

    /// All-black buffer.
    pub fn zeros(width: usize, height: usize) -> Self {
        Self::filled(width, height, [0, 0, 0])
    }

    /// Reinterpret a tightly packed interleaved byte buffer (length `3*w*h`).
    pub fn from_interleaved(width: usize, height: usize, bytes: &[u8]) -> Self {
        debug_assert_eq!(bytes.len(), 3 * width * height);
        let data = bytes
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();
        Self::new(width, height, data)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, px: [u8; 3]) {
        self.data[y * self.width + x] = px;
    }

    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.data
    }

    /// Borrow as a read-only `ImageRgb8` view.
    pub fn as_view(&self) -> ImageRgb8<'_> {
        ImageRgb8 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }
}

impl ImageView for RgbImageU8 {
    type Pixel = [u8; 3];

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn stride(&self) -> usize {
        self.width
    }
    #[inline]
    fn row(&self, y: usize) -> &[[u8; 3]] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[[u8; 3]]> {
        Some(&self.data)
    }
}

impl ImageViewMut for RgbImageU8 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [[u8; 3]] {
        let start = y * self.width;
        let end = start + self.width;
        &mut self.data[start..end]
    }

    #[inline]
    fn as_mut_slice(&mut self) -> Option<&mut [[u8; 3]]> {
        Some(&mut self.data)
    }
}
