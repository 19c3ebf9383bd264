use escapetime_core::EscapeResult;

/// An RGB color, 8 bits per channel, no alpha.
pub type Rgb = [u8; 3];

/// Strategy mapping an escape-time result to a display color.
///
/// Both policies are pure functions of the result (and the iteration cap) —
/// no dependency on pixel position — and are total over every iteration
/// count in `[0, cap]` for either value of `escaped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ColorPolicy {
    /// Smooth hue bands via HSV, with in-set points rendered solid black.
    HsvBanding,
    /// Classic 16-iteration stripes, banding inside the set as well.
    Mod16Banding,
}

impl ColorPolicy {
    /// Map a single escape-time result to a color.
    pub fn color(&self, result: EscapeResult, iteration_cap: u32) -> Rgb {
        match self {
            Self::HsvBanding => hsv_banding(result, iteration_cap),
            Self::Mod16Banding => mod16_banding(result.iterations),
        }
    }
}

impl Default for ColorPolicy {
    fn default() -> Self {
        Self::HsvBanding
    }
}

/// Hue sweeps `(n / cap · 20)^1.5`, saturation stays full, and value drops
/// to zero for capped points so the set itself comes out black.
fn hsv_banding(result: EscapeResult, iteration_cap: u32) -> Rgb {
    let t = result.iterations as f32 / iteration_cap as f32;
    let hue = (t * 20.0).powf(1.5).rem_euclid(360.0);
    let value = if result.escaped { 1.0 } else { 0.0 };
    hsv_to_rgb(hue, 1.0, value)
}

/// Channel ramps on `n mod 16`, clamped per channel. Capped points get no
/// special treatment, which produces the striped look inside the set.
fn mod16_banding(iterations: u32) -> Rgb {
    let m = (iterations % 16) as i32;
    [
        (255 - m * 16).clamp(0, 255) as u8,
        ((16 - m) * 16).clamp(0, 255) as u8,
        (m * 16).clamp(0, 255) as u8,
    ]
}

/// Standard HSV→RGB transform.
///
/// Hue is normalized into `[0, 360)` before sector selection, so callers may
/// pass any finite degree value; saturation and value are expected in `[0, 1]`.
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> Rgb {
    let h = hue.rem_euclid(360.0) / 60.0;
    let c = value * saturation;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = value - c;
    [
        ((r1 + m) * 255.0).round() as u8,
        ((g1 + m) * 255.0).round() as u8,
        ((b1 + m) * 255.0).round() as u8,
    ]
}
