//! Error types.
use thiserror::Error;

/// Convenient return type for functions.
pub type Result<T> = std::result::Result<T, Error>;

/// The reasons a color description can be rejected.
///
/// Every variant carries the text that caused the failure so that
/// callers can surface it verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input matched no known syntax and does not look like a name.
    #[error("`{0}` is not a recognized color format")]
    UnknownColorFormat(String),

    /// A numeric field could not be decoded.
    #[error("`{0}` is not a valid number for this color field")]
    InvalidNumber(String),

    /// The hue field of `hsl()`/`hsla()` carried a `%` suffix.
    #[error("hue `{0}` must be given in degrees, not as a percentage")]
    InvalidHueFormat(String),

    /// A saturation or lightness field lacked its `%` suffix.
    #[error("saturation/lightness `{0}` must be a percentage")]
    InvalidSaturationLightnessFormat(String),

    /// The name is not present in the color name table.
    #[error("unknown color name: {0}")]
    UnknownColorName(String),

    /// The requested output type cannot hold the parsed color.
    #[error("cannot produce `{target}` from `{color}`")]
    UnsupportedTargetType { target: String, color: String },
}
