//! Conversions across shape families.
//!
//! The parser does not do any color space math of its own; it hands
//! off to `csscolorparser`.
use crate::color::{Hsl, Rgb8};
use csscolorparser::Color;

fn normalize_angle(t: f64) -> f64 {
    let t = t.rem_euclid(360.0);
    if t.is_finite() {
        t
    } else {
        0.
    }
}

fn unit(v: f32) -> f64 {
    v.max(0.).min(1.).into()
}

/// Convert HSL to RGB.  Hue wraps around the color wheel and
/// saturation/lightness are clamped, as the conversion requires.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb8 {
    let Color { r, g, b, .. } = Color::from_hsla(
        normalize_angle(hsl.h),
        unit(hsl.s),
        unit(hsl.l),
        1.0,
    );
    Rgb8::new(r as f32, g as f32, b as f32)
}

/// Convert RGB to HSL.  Achromatic colors report a hue of zero.
pub fn rgb_to_hsl(rgb: Rgb8) -> Hsl {
    let (h, s, l, _a) = Color::new(
        rgb.red().into(),
        rgb.green().into(),
        rgb.blue().into(),
        1.0,
    )
    .to_hsla();
    let h = if h.is_nan() { 0. } else { h };
    let s = if s.is_nan() { 0. } else { s };
    Hsl::new(h, s as f32, l as f32)
}
