//! The four shape families produced by the parser.
use crate::error::{Error, Result};
use crate::target::TargetType;
#[cfg(feature = "use_serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quantize a channel in the range 0.0-1.0 to 8 bits.
/// Out of range values are clamped.
fn quantize(value: f32) -> u8 {
    (value.max(0.).min(1.) * 255.).round() as u8
}

fn unit(value: u8) -> f32 {
    value as f32 / 255.
}

/// An opaque sRGB color with 8 bits per channel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Construct from components in the range 0.0-1.0, clamping
    /// anything outside that range.
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self::from_u8(quantize(r), quantize(g), quantize(b))
    }

    pub fn red(self) -> f32 {
        unit(self.r)
    }

    pub fn green(self) -> f32 {
        unit(self.g)
    }

    pub fn blue(self) -> f32 {
        unit(self.b)
    }

    /// Returns a string of the form `#rrggbb`
    pub fn to_hex_string(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn with_alpha(self, alpha: f32) -> Result<Rgba8> {
        Rgba8::try_new(self.red(), self.green(), self.blue(), alpha)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

/// An sRGB color with alpha, 8 bits per channel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Self = Self::from_u8(0, 0, 0, 0);

    pub const fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Construct from components in the range 0.0-1.0.
    /// All four channels are clamped into that range.
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::from_u8(quantize(r), quantize(g), quantize(b), quantize(a))
    }

    /// Like `new`, but an alpha value that 8-bit storage cannot
    /// represent is rejected instead of clamped.
    pub fn try_new(r: f32, g: f32, b: f32, a: f32) -> Result<Self> {
        if !(0. ..=1.).contains(&a) {
            return Err(Error::InvalidNumber(a.to_string()));
        }
        Ok(Self::new(r, g, b, a))
    }

    pub fn red(self) -> f32 {
        unit(self.r)
    }

    pub fn green(self) -> f32 {
        unit(self.g)
    }

    pub fn blue(self) -> f32 {
        unit(self.b)
    }

    pub fn alpha(self) -> f32 {
        unit(self.a)
    }

    /// Returns the color channels, discarding alpha
    pub fn rgb(self) -> Rgb8 {
        Rgb8::from_u8(self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.alpha())
    }
}

/// A color expressed as hue (degrees), saturation and lightness.
/// Saturation and lightness are nominally 0.0-1.0; none of the
/// components are range checked.
///
/// Hue is held as `f64` so that any integer hue up to 2^53 is exact;
/// it is not wrapped into 0-360 until the color is converted.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub struct Hsl {
    pub h: f64,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    pub const fn new(h: f64, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    pub const fn with_alpha(self, a: f32) -> Hsla {
        Hsla::new(self.h, self.s, self.l, a)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "hsl({},{}%,{}%)",
            self.h.round(),
            (self.s * 100.).round(),
            (self.l * 100.).round()
        )
    }
}

/// `Hsl` plus an alpha channel, which is also left unclamped.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub struct Hsla {
    pub h: f64,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

impl Hsla {
    pub const fn new(h: f64, s: f32, l: f32, a: f32) -> Self {
        Self { h, s, l, a }
    }

    /// Returns the color channels, discarding alpha
    pub const fn hsl(self) -> Hsl {
        Hsl::new(self.h, self.s, self.l)
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "hsla({},{}%,{}%,{})",
            self.h.round(),
            (self.s * 100.).round(),
            (self.l * 100.).round(),
            self.a
        )
    }
}

/// The result of parsing a color description.
/// Exactly one shape family is populated.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub enum ParsedColor {
    Rgb(Rgb8),
    Rgba(Rgba8),
    Hsl(Hsl),
    Hsla(Hsla),
}

impl ParsedColor {
    /// Returns the shape family of this color
    pub fn kind(&self) -> TargetType {
        match self {
            Self::Rgb(_) => TargetType::Rgb,
            Self::Rgba(_) => TargetType::Rgba,
            Self::Hsl(_) => TargetType::Hsl,
            Self::Hsla(_) => TargetType::Hsla,
        }
    }

    /// Returns the alpha channel; opaque shapes report 1.0
    pub fn alpha(&self) -> f32 {
        match self {
            Self::Rgb(_) | Self::Hsl(_) => 1.0,
            Self::Rgba(c) => c.alpha(),
            Self::Hsla(c) => c.a,
        }
    }

    pub fn has_alpha(&self) -> bool {
        matches!(self, Self::Rgba(_) | Self::Hsla(_))
    }
}

impl fmt::Display for ParsedColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Rgb(c) => fmt::Display::fmt(c, f),
            Self::Rgba(c) => fmt::Display::fmt(c, f),
            Self::Hsl(c) => fmt::Display::fmt(c, f),
            Self::Hsla(c) => fmt::Display::fmt(c, f),
        }
    }
}

impl From<Rgb8> for ParsedColor {
    fn from(c: Rgb8) -> Self {
        Self::Rgb(c)
    }
}

impl From<Rgba8> for ParsedColor {
    fn from(c: Rgba8) -> Self {
        Self::Rgba(c)
    }
}

impl From<Hsl> for ParsedColor {
    fn from(c: Hsl) -> Self {
        Self::Hsl(c)
    }
}

impl From<Hsla> for ParsedColor {
    fn from(c: Hsla) -> Self {
        Self::Hsla(c)
    }
}
