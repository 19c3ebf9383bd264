use crate::error::CoreError;

/// Pixel dimensions of the render target.
///
/// Validated at construction so the coordinate mapper never divides by zero:
/// a zero dimension is a configuration error caught before any pixel work
/// starts, not a runtime fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RasterSize {
    width: u32,
    height: u32,
}

impl RasterSize {
    pub fn new(width: u32, height: u32) -> crate::Result<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidRaster { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels in the raster.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_dimensions() {
        let r = RasterSize::new(640, 480).unwrap();
        assert_eq!(r.width(), 640);
        assert_eq!(r.height(), 480);
        assert_eq!(r.pixel_count(), 640 * 480);
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert!(RasterSize::new(0, 480).is_err());
        assert!(RasterSize::new(640, 0).is_err());
        assert!(RasterSize::new(0, 0).is_err());
    }

    #[test]
    fn serde_round_trip() {
        let r = RasterSize::new(1280, 720).unwrap();
        let json = serde_json::to_string(&r).unwrap();
        let back: RasterSize = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
