//! Decoders for the individual fields captured by the format matcher.
//!
//! RGB fields are clamped into 0.0-1.0.  Hue, saturation, lightness
//! and alpha are passed through unclamped; their legal range depends
//! on what the caller does with them next.
use crate::error::{Error, Result};

fn invalid(field: &str) -> Error {
    Error::InvalidNumber(field.to_string())
}

fn parse_unsigned(field: &str, digits: &str) -> Result<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(field));
    }
    digits.parse().map_err(|_| invalid(field))
}

fn is_hex(digits: &str) -> bool {
    digits.bytes().all(|b| b.is_ascii_hexdigit())
}

fn parse_signed(field: &str, digits: &str) -> Result<i32> {
    let unsigned = digits.strip_prefix('-').unwrap_or(digits);
    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(field));
    }
    digits.parse().map_err(|_| invalid(field))
}

/// Two hex digits, normalized by 255
pub fn hex_pair(pair: &str) -> Result<u8> {
    if pair.len() != 2 || !is_hex(pair) {
        return Err(invalid(pair));
    }
    u8::from_str_radix(pair, 16).map_err(|_| invalid(pair))
}

/// A single hex digit, normalized by 15 rather than 255.
/// The result is returned as the equivalent 8-bit value.
pub fn hex_nibble(nibble: &str) -> Result<u8> {
    if nibble.len() != 1 || !is_hex(nibble) {
        return Err(invalid(nibble));
    }
    let value = u8::from_str_radix(nibble, 16).map_err(|_| invalid(nibble))?;
    // n/15 == (n*17)/255
    Ok(value * 17)
}

/// An `rgb()` channel: either `N%` or a plain `N` in 0-255
pub fn rgb_field(field: &str) -> Result<f32> {
    let value = match field.strip_suffix('%') {
        Some(digits) => parse_unsigned(field, digits)? as f32 / 100.,
        None => parse_unsigned(field, field)? as f32 / 255.,
    };
    Ok(value.min(1.))
}

/// Hue in degrees.  Must not be a percentage; any integer is accepted,
/// with no bound on its magnitude.
pub fn hue_field(field: &str) -> Result<f64> {
    if field.ends_with('%') {
        return Err(Error::InvalidHueFormat(field.to_string()));
    }
    let unsigned = field.strip_prefix('-').unwrap_or(field);
    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(field));
    }
    field
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid(field))
}

/// Saturation or lightness: must be a percentage
pub fn saturation_lightness_field(field: &str) -> Result<f32> {
    let digits = field
        .strip_suffix('%')
        .ok_or_else(|| Error::InvalidSaturationLightnessFormat(field.to_string()))?;
    Ok(parse_signed(field, digits)? as f32 / 100.)
}

/// Alpha: either `N%` or a decimal such as `0.5`
pub fn alpha_field(field: &str) -> Result<f32> {
    if let Some(digits) = field.strip_suffix('%') {
        return Ok(parse_signed(field, digits)? as f32 / 100.);
    }

    let unsigned = field.strip_prefix('-').unwrap_or(field);
    let mut dots = 0;
    let mut digits = 0;
    for b in unsigned.bytes() {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' => dots += 1,
            _ => return Err(invalid(field)),
        }
    }
    if digits == 0 || dots > 1 {
        return Err(invalid(field));
    }
    field
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid(field))
}
