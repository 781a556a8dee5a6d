//! Parse textual color descriptions such as `#ff8000`, `rgb(255,128,0)`,
//! `hsla(30,100%,50%,0.5)` or `orange` into typed color values.
//!
//! The accepted syntaxes are tried in this order, and the first that
//! matches determines the natural shape of the result:
//!
//! * `#RRGGBB` / `0xRRGGBB` and `#RGB` / `0xRGB` produce `Rgb8`
//! * `rgb(r,g,b)` produces `Rgb8`; fields are `0-255` or percentages
//! * `hsl(h,s%,l%)` produces `Hsl`
//! * `rgba(r,g,b,a)` produces `Rgba8`
//! * `hsla(h,s%,l%,a)` produces `Hsla`
//! * `transparent` produces a fully transparent black `Rgba8`
//! * anything else that looks like a word is looked up in the name table
//!
//! Whitespace is ignored and matching is not case sensitive.
//!
//! `parse` accepts a `TargetType` to convert the result into a
//! particular shape; use `TargetType::Any` to keep the natural shape.
use crate::decode::*;
use crate::matcher::{match_syntax, Syntax};
use std::str::FromStr;

mod color;
mod convert;
mod decode;
mod dynamic;
mod error;
mod matcher;
mod names;
mod target;

pub use color::{Hsl, Hsla, ParsedColor, Rgb8, Rgba8};
pub use error::{Error, Result};
pub use names::{lookup_name, names};
pub use target::{coerce, TargetType};

fn normalize(description: &str) -> String {
    description
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Parse into whatever shape the syntax of `description` implies
fn parse_natural(description: &str) -> Result<ParsedColor> {
    let normalized = normalize(description);
    let m = match_syntax(&normalized)
        .ok_or_else(|| Error::UnknownColorFormat(description.to_string()))?;

    Ok(match m.syntax {
        Syntax::HexLong => ParsedColor::Rgb(Rgb8::from_u8(
            hex_pair(m.field(0))?,
            hex_pair(m.field(1))?,
            hex_pair(m.field(2))?,
        )),
        Syntax::HexShort => ParsedColor::Rgb(Rgb8::from_u8(
            hex_nibble(m.field(0))?,
            hex_nibble(m.field(1))?,
            hex_nibble(m.field(2))?,
        )),
        Syntax::Rgb => ParsedColor::Rgb(Rgb8::new(
            rgb_field(m.field(0))?,
            rgb_field(m.field(1))?,
            rgb_field(m.field(2))?,
        )),
        Syntax::Hsl => ParsedColor::Hsl(Hsl::new(
            hue_field(m.field(0))?,
            saturation_lightness_field(m.field(1))?,
            saturation_lightness_field(m.field(2))?,
        )),
        Syntax::Rgba => ParsedColor::Rgba(Rgba8::try_new(
            rgb_field(m.field(0))?,
            rgb_field(m.field(1))?,
            rgb_field(m.field(2))?,
            alpha_field(m.field(3))?,
        )?),
        Syntax::Hsla => ParsedColor::Hsla(Hsla::new(
            hue_field(m.field(0))?,
            saturation_lightness_field(m.field(1))?,
            saturation_lightness_field(m.field(2))?,
            alpha_field(m.field(3))?,
        )),
        Syntax::Transparent => ParsedColor::Rgba(Rgba8::TRANSPARENT),
        Syntax::Name => ParsedColor::Rgb(
            lookup_name(&normalized)
                .ok_or_else(|| Error::UnknownColorName(description.to_string()))?,
        ),
    })
}

/// Parse `description` and convert the result to `target`.
///
/// ```
/// use wezterm_color_parse::{parse, Rgb8, ParsedColor, TargetType};
/// let red = parse(TargetType::Rgb, "hsl(0, 100%, 50%)").unwrap();
/// assert_eq!(red, ParsedColor::Rgb(Rgb8::from_u8(255, 0, 0)));
/// ```
pub fn parse(target: TargetType, description: &str) -> Result<ParsedColor> {
    coerce(parse_natural(description)?, target)
}

/// Parse `description`, keeping the shape implied by its syntax
pub fn parse_any(description: &str) -> Result<ParsedColor> {
    parse(TargetType::Any, description)
}

/// Legacy entry point; identical to `parse_any`.
#[deprecated(note = "use parse_any or parse(TargetType::Any, ...) instead")]
pub fn parse_color(description: &str) -> Result<ParsedColor> {
    static WARN: std::sync::Once = std::sync::Once::new();
    WARN.call_once(|| {
        log::warn!("parse_color is deprecated; use parse_any or parse instead");
    });
    parse_any(description)
}

impl FromStr for ParsedColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_any(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k9::assert_equal as assert_eq;

    fn init_logging() {
        let _ = env_logger::Builder::new()
            .is_test(true)
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    }

    #[test]
    fn normalizes() {
        assert_eq!(normalize(" RGB( 1 ,\t2, 3 )\n"), "rgb(1,2,3)");
    }

    #[test]
    fn hex() {
        init_logging();
        assert_eq!(
            parse_any("#FF8000").unwrap(),
            ParsedColor::Rgb(Rgb8::from_u8(255, 128, 0))
        );
        assert_eq!(
            parse_any("0x0a0b0c").unwrap(),
            ParsedColor::Rgb(Rgb8::from_u8(10, 11, 12))
        );
        assert_eq!(
            parse_any("#fff").unwrap(),
            ParsedColor::Rgb(Rgb8::from_u8(255, 255, 255))
        );
        assert_eq!(
            parse_any("#123").unwrap(),
            ParsedColor::Rgb(Rgb8::from_u8(0x11, 0x22, 0x33))
        );
    }

    #[test]
    fn unknown_format_keeps_raw_input() {
        assert_eq!(
            parse_any(" #12 "),
            Err(Error::UnknownColorFormat(" #12 ".to_string()))
        );
        assert_eq!(parse_any(""), Err(Error::UnknownColorFormat("".to_string())));
        assert_eq!(
            parse_any("cmyk(1,2,3,4)"),
            Err(Error::UnknownColorFormat("cmyk(1,2,3,4)".to_string()))
        );
    }

    #[test]
    fn unknown_name_keeps_raw_input() {
        assert_eq!(
            parse_any("NotAColor"),
            Err(Error::UnknownColorName("NotAColor".to_string()))
        );
    }

    #[test]
    fn rgba_alpha_out_of_range() {
        assert_eq!(
            parse_any("rgba(0,0,0,1.5)"),
            Err(Error::InvalidNumber("1.5".to_string()))
        );
        // Unclamped for hsla
        assert_eq!(
            parse_any("hsla(0,0%,0%,1.5)").unwrap(),
            ParsedColor::Hsla(Hsla::new(0., 0., 0., 1.5))
        );
    }

    #[test]
    fn field_errors() {
        assert_eq!(
            parse_any("rgb(a,0,0)"),
            Err(Error::InvalidNumber("a".to_string()))
        );
        assert_eq!(
            parse_any("hsla(10%,0%,0%,1)"),
            Err(Error::InvalidHueFormat("10%".to_string()))
        );
        assert_eq!(
            parse_any("hsla(10,0%,0,1)"),
            Err(Error::InvalidSaturationLightnessFormat("0".to_string()))
        );
    }

    #[test]
    fn from_str() {
        let c: ParsedColor = "red".parse().unwrap();
        assert_eq!(c, ParsedColor::Rgb(Rgb8::from_u8(255, 0, 0)));
    }

    #[test]
    #[allow(deprecated)]
    fn legacy_entry_point() {
        init_logging();
        assert_eq!(parse_color("hsl(1,2%,3%)"), parse_any("hsl(1,2%,3%)"));
        assert_eq!(parse_color("bogus!"), parse_any("bogus!"));
    }
}
