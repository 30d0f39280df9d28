//! Named colours and the viridis colormap.

use plotters::style::RGBColor;

pub const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
pub const LIGHT_CORAL: RGBColor = RGBColor(240, 128, 128);
pub const BAR_BLUE: RGBColor = RGBColor(0, 0, 255);
pub const BAR_GREEN: RGBColor = RGBColor(0, 128, 0);
pub const BAR_RED: RGBColor = RGBColor(255, 0, 0);
pub const BAR_PURPLE: RGBColor = RGBColor(128, 0, 128);

/// Edge colours by vote sign.
pub const SUPPORT_EDGE: RGBColor = RGBColor(0, 128, 0);
pub const OPPOSE_EDGE: RGBColor = RGBColor(255, 0, 0);

/// Cycle used for the position chart.
pub const POSITION_CYCLE: [RGBColor; 4] = [BAR_RED, BAR_BLUE, BAR_GREEN, BAR_PURPLE];

/// Viridis sampled at nine evenly spaced stops.
const VIRIDIS: [(u8, u8, u8); 9] = [
    (68, 1, 84),
    (71, 44, 122),
    (59, 81, 139),
    (44, 113, 142),
    (33, 144, 141),
    (39, 173, 129),
    (92, 200, 99),
    (170, 220, 50),
    (253, 231, 37),
];

/// Viridis colour at `t` in `[0, 1]` (clamped), linearly interpolated.
pub fn viridis(t: f64) -> RGBColor {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let scaled = t * (VIRIDIS.len() - 1) as f64;
    let lo = scaled.floor() as usize;
    let hi = (lo + 1).min(VIRIDIS.len() - 1);
    let frac = scaled - lo as f64;

    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    let (a, b) = (VIRIDIS[lo], VIRIDIS[hi]);
    RGBColor(lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
}

/// Map `value` onto `[0, 1]` within `[min, max]`; a flat range maps to 0.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if max > min { (value - min) / (max - min) } else { 0.0 }
}
