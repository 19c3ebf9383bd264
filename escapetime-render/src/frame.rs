use escapetime_core::RasterSize;

use crate::color::Rgb;

/// The render target: a width×height grid of RGB colors, row-major.
///
/// Written once per render pass by disjoint per-row writes, then handed to
/// the display collaborator through [`FrameSink`](crate::sink::FrameSink).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pub width: u32,
    pub height: u32,
    /// One `Rgb` per pixel, row-major order.
    pub pixels: Vec<Rgb>,
}

impl FrameBuffer {
    /// Create a new buffer filled with black.
    pub fn new(raster: RasterSize) -> Self {
        Self {
            width: raster.width(),
            height: raster.height(),
            pixels: vec![[0, 0, 0]; raster.pixel_count()],
        }
    }

    /// Read the color at pixel `(px, py)`.
    ///
    /// # Panics
    /// Panics if the coordinate lies outside the raster.
    #[inline]
    pub fn pixel(&self, px: u32, py: u32) -> Rgb {
        assert!(px < self.width && py < self.height);
        self.pixels[(py * self.width + px) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_black() {
        let raster = RasterSize::new(4, 3).unwrap();
        let buf = FrameBuffer::new(raster);
        assert_eq!(buf.pixels.len(), 12);
        assert!(buf.pixels.iter().all(|&p| p == [0, 0, 0]));
    }

    #[test]
    fn pixel_indexing_is_row_major() {
        let raster = RasterSize::new(4, 3).unwrap();
        let mut buf = FrameBuffer::new(raster);
        buf.pixels[1 * 4 + 2] = [9, 9, 9];
        assert_eq!(buf.pixel(2, 1), [9, 9, 9]);
        assert_eq!(buf.pixel(1, 2), [0, 0, 0]);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_pixel_panics() {
        let raster = RasterSize::new(4, 3).unwrap();
        let buf = FrameBuffer::new(raster);
        let _ = buf.pixel(4, 0);
    }
}
