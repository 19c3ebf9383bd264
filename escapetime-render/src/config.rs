use escapetime_core::{EscapeParams, RasterSize, Viewport};

use crate::color::ColorPolicy;

/// The full configuration surface for one render pass.
///
/// Assembled once before a pass begins and read-only for its duration.
/// Every numeric constraint (positive raster dimensions, ordered viewport
/// bounds, cap ≥ 1, positive finite escape bound) is enforced when the
/// constituent types are built, so a `RenderConfig` in hand is always valid.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct RenderConfig {
    pub viewport: Viewport,
    pub raster: RasterSize,
    pub params: EscapeParams,
    pub policy: ColorPolicy,
}

impl RenderConfig {
    pub fn new(
        viewport: Viewport,
        raster: RasterSize,
        params: EscapeParams,
        policy: ColorPolicy,
    ) -> Self {
        Self {
            viewport,
            raster,
            params,
            policy,
        }
    }

    /// Build a configuration from unvalidated values, failing fast on the
    /// first bad one. This is the entry point for anything driven by
    /// external settings rather than the typed presets.
    pub fn from_raw(
        bounds: (f32, f32, f32, f32),
        width: u32,
        height: u32,
        iteration_cap: u32,
        escape_bound: f32,
        policy: ColorPolicy,
    ) -> crate::Result<Self> {
        let (re_min, re_max, im_min, im_max) = bounds;
        Ok(Self {
            viewport: Viewport::new(re_min, re_max, im_min, im_max)?,
            raster: RasterSize::new(width, height)?,
            params: EscapeParams::new(iteration_cap, escape_bound)?,
            policy,
        })
    }

    /// Wide-view preset with default iteration parameters.
    pub fn wide(raster: RasterSize, policy: ColorPolicy) -> Self {
        Self::new(Viewport::wide(), raster, EscapeParams::default(), policy)
    }

    /// Boundary-detail preset: tight viewport and the 5000-iteration cap.
    pub fn boundary_detail(raster: RasterSize, policy: ColorPolicy) -> Self {
        Self::new(
            Viewport::boundary_detail(),
            raster,
            EscapeParams::detail(),
            policy,
        )
    }
}
