use crate::color::{Hsl, Hsla, ParsedColor, Rgb8, Rgba8};
use crate::convert::{hsl_to_rgb, rgb_to_hsl};
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Selects the shape that `parse` should return.
/// `Any` keeps whatever shape the syntax naturally produces.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TargetType {
    #[default]
    Any,
    Rgb,
    Rgba,
    Hsl,
    Hsla,
}

impl TargetType {
    pub fn name(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
            Self::Hsl => "hsl",
            Self::Hsla => "hsla",
        }
    }

    /// Returns true for the shapes that carry an alpha channel
    pub fn has_alpha(self) -> bool {
        matches!(self, Self::Rgba | Self::Hsla)
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TargetType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any" => Ok(Self::Any),
            "rgb" => Ok(Self::Rgb),
            "rgba" => Ok(Self::Rgba),
            "hsl" => Ok(Self::Hsl),
            "hsla" => Ok(Self::Hsla),
            _ => Err(Error::UnsupportedTargetType {
                target: s.to_string(),
                color: "any color".to_string(),
            }),
        }
    }
}

fn unsupported(target: TargetType, color: &ParsedColor) -> Error {
    Error::UnsupportedTargetType {
        target: target.to_string(),
        color: color.to_string(),
    }
}

/// Convert a parsed color into the requested shape.
///
/// Opaque colors gain an alpha of 1.0 when an alpha-bearing shape is
/// requested.  Going the other way is only permitted when the color
/// is fully opaque; otherwise the alpha would be silently lost.
pub fn coerce(color: ParsedColor, target: TargetType) -> Result<ParsedColor> {
    if target == TargetType::Any || target == color.kind() {
        return Ok(color);
    }
    if color.has_alpha() && !target.has_alpha() && color.alpha() != 1.0 {
        return Err(unsupported(target, &color));
    }

    let alpha = color.alpha();
    let (rgb, source_hsl) = match color {
        ParsedColor::Rgb(c) => (c, None),
        ParsedColor::Rgba(c) => (c.rgb(), None),
        ParsedColor::Hsl(c) => (hsl_to_rgb(c), Some(c)),
        ParsedColor::Hsla(c) => (hsl_to_rgb(c.hsl()), Some(c.hsl())),
    };
    // Keep the original components when staying within HSL
    let hsl = source_hsl.unwrap_or_else(|| rgb_to_hsl(rgb));

    Ok(match target {
        TargetType::Any => color,
        TargetType::Rgb => ParsedColor::Rgb(rgb),
        TargetType::Rgba => ParsedColor::Rgba(rgb.with_alpha(alpha)?),
        TargetType::Hsl => ParsedColor::Hsl(hsl),
        TargetType::Hsla => ParsedColor::Hsla(hsl.with_alpha(alpha)),
    })
}

impl ParsedColor {
    /// Equivalent to `coerce(self, target)`
    pub fn coerce(self, target: TargetType) -> Result<Self> {
        coerce(self, target)
    }

    pub fn to_rgb(self) -> Result<Rgb8> {
        match coerce(self, TargetType::Rgb)? {
            ParsedColor::Rgb(c) => Ok(c),
            other => Err(unsupported(TargetType::Rgb, &other)),
        }
    }

    pub fn to_rgba(self) -> Result<Rgba8> {
        match coerce(self, TargetType::Rgba)? {
            ParsedColor::Rgba(c) => Ok(c),
            other => Err(unsupported(TargetType::Rgba, &other)),
        }
    }

    pub fn to_hsl(self) -> Result<Hsl> {
        match coerce(self, TargetType::Hsl)? {
            ParsedColor::Hsl(c) => Ok(c),
            other => Err(unsupported(TargetType::Hsl, &other)),
        }
    }

    pub fn to_hsla(self) -> Result<Hsla> {
        match coerce(self, TargetType::Hsla)? {
            ParsedColor::Hsla(c) => Ok(c),
            other => Err(unsupported(TargetType::Hsla, &other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k9::assert_equal as assert_eq;

    #[test]
    fn any_is_identity() {
        let c = ParsedColor::Hsl(Hsl::new(400., 2., -1.));
        assert_eq!(coerce(c, TargetType::Any).unwrap(), c);
        assert_eq!(coerce(c, TargetType::Hsl).unwrap(), c);
    }

    #[test]
    fn opaque_gains_alpha() {
        let c = ParsedColor::Rgb(Rgb8::from_u8(1, 2, 3));
        assert_eq!(
            coerce(c, TargetType::Rgba).unwrap(),
            ParsedColor::Rgba(Rgba8::from_u8(1, 2, 3, 255))
        );
    }

    #[test]
    fn hsl_to_rgb_target() {
        let c = ParsedColor::Hsl(Hsl::new(120., 1., 0.5));
        assert_eq!(c.to_rgb().unwrap(), Rgb8::from_u8(0, 255, 0));

        let c = ParsedColor::Hsla(Hsla::new(0., 1., 0.5, 0.5));
        assert_eq!(c.to_rgba().unwrap(), Rgba8::from_u8(255, 0, 0, 128));
    }

    #[test]
    fn rgb_to_hsla_target() {
        let c = ParsedColor::Rgb(Rgb8::from_u8(255, 0, 0));
        assert_eq!(c.to_hsla().unwrap(), Hsla::new(0., 1., 0.5, 1.));
    }

    #[test]
    fn refuses_to_drop_alpha() {
        let c = ParsedColor::Rgba(Rgba8::TRANSPARENT);
        assert!(matches!(
            coerce(c, TargetType::Rgb),
            Err(Error::UnsupportedTargetType { .. })
        ));
        assert!(matches!(
            c.to_hsl(),
            Err(Error::UnsupportedTargetType { .. })
        ));

        let opaque = ParsedColor::Rgba(Rgba8::from_u8(1, 2, 3, 255));
        assert_eq!(opaque.to_rgb().unwrap(), Rgb8::from_u8(1, 2, 3));
    }

    #[test]
    fn unrepresentable_alpha() {
        let c = ParsedColor::Hsla(Hsla::new(0., 0., 0., 1.5));
        assert!(matches!(c.to_rgba(), Err(Error::InvalidNumber(_))));
    }

    #[test]
    fn target_names() {
        assert_eq!("RGBA".parse::<TargetType>().unwrap(), TargetType::Rgba);
        assert_eq!(" any ".parse::<TargetType>().unwrap(), TargetType::Any);
        assert_eq!(TargetType::Hsla.to_string(), "hsla");
        assert!(matches!(
            "string".parse::<TargetType>(),
            Err(Error::UnsupportedTargetType { .. })
        ));
    }
}
