use crate::error::CoreError;
use crate::raster::RasterSize;

/// Defines the visible rectangle of the complex plane.
///
/// Pixel coordinates are mapped onto this rectangle by linear interpolation:
/// pixel (0, 0) lands on `(re_min, im_min)` and increasing pixel-x / pixel-y
/// walk toward `re_max` / `im_max`. The whole pipeline is single-precision
/// over a fixed viewport.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Left edge on the real axis.
    pub re_min: f32,
    /// Right edge on the real axis.
    pub re_max: f32,
    /// Lower edge on the imaginary axis.
    pub im_min: f32,
    /// Upper edge on the imaginary axis.
    pub im_max: f32,
}

impl Viewport {
    /// Wide view: the full set with margin, re ∈ [-2, 1], im ∈ [-1, 1].
    pub fn wide() -> Self {
        Self {
            re_min: -2.0,
            re_max: 1.0,
            im_min: -1.0,
            im_max: 1.0,
        }
    }

    /// Boundary-detail view: tight bounding box of the set,
    /// re ∈ [-2, 0.47], im ∈ [-1.12, 1.12].
    pub fn boundary_detail() -> Self {
        Self {
            re_min: -2.0,
            re_max: 0.47,
            im_min: -1.12,
            im_max: 1.12,
        }
    }

    /// Create a viewport with explicit bounds.
    pub fn new(re_min: f32, re_max: f32, im_min: f32, im_max: f32) -> crate::Result<Self> {
        let bounds = [re_min, re_max, im_min, im_max];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(CoreError::InvalidViewport {
                reason: format!("bounds must be finite, got {bounds:?}"),
            });
        }
        if re_min >= re_max {
            return Err(CoreError::InvalidViewport {
                reason: format!("real bounds inverted: {re_min} >= {re_max}"),
            });
        }
        if im_min >= im_max {
            return Err(CoreError::InvalidViewport {
                reason: format!("imaginary bounds inverted: {im_min} >= {im_max}"),
            });
        }
        Ok(Self {
            re_min,
            re_max,
            im_min,
            im_max,
        })
    }

    /// Map a pixel coordinate to a point on the complex plane.
    ///
    /// Pure linear interpolation over the raster. Pixel (0, 0) maps exactly
    /// to `(re_min, im_min)`; the last pixel column/row stops one pixel step
    /// short of the upper bounds. `RasterSize` guarantees nonzero divisors.
    #[inline]
    pub fn pixel_to_point(&self, px: u32, py: u32, raster: RasterSize) -> (f32, f32) {
        let x0 = self.re_min + (px as f32 / raster.width() as f32) * self.re_span();
        let y0 = self.im_min + (py as f32 / raster.height() as f32) * self.im_span();
        (x0, y0)
    }

    /// Extent of the viewport along the real axis.
    #[inline]
    pub fn re_span(&self) -> f32 {
        self.re_max - self.re_min
    }

    /// Extent of the viewport along the imaginary axis.
    #[inline]
    pub fn im_span(&self) -> f32 {
        self.im_max - self.im_min
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::wide()
    }
}
