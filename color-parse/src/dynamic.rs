use crate::color::ParsedColor;
use crate::target::TargetType;
use std::str::FromStr;
use wezterm_dynamic::{FromDynamic, FromDynamicOptions, ToDynamic, Value};

impl ToDynamic for ParsedColor {
    fn to_dynamic(&self) -> Value {
        self.to_string().to_dynamic()
    }
}

impl FromDynamic for ParsedColor {
    fn from_dynamic(
        value: &Value,
        options: FromDynamicOptions,
    ) -> Result<Self, wezterm_dynamic::Error> {
        let s = String::from_dynamic(value, options)?;
        Ok(ParsedColor::from_str(&s).map_err(|err| format!("{:#}", err))?)
    }
}

impl ToDynamic for TargetType {
    fn to_dynamic(&self) -> Value {
        self.name().to_dynamic()
    }
}

impl FromDynamic for TargetType {
    fn from_dynamic(
        value: &Value,
        options: FromDynamicOptions,
    ) -> Result<Self, wezterm_dynamic::Error> {
        let s = String::from_dynamic(value, options)?;
        Ok(TargetType::from_str(&s).map_err(|err| format!("{:#}", err))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Hsl, Rgb8};
    use k9::assert_equal as assert_eq;

    #[test]
    fn color_from_config_string() {
        let value = Value::String("rgb(255, 0, 0)".to_string());
        let color = ParsedColor::from_dynamic(&value, Default::default()).unwrap();
        assert_eq!(color, ParsedColor::Rgb(Rgb8::from_u8(255, 0, 0)));
    }

    #[test]
    fn color_to_config_string() {
        let color = ParsedColor::Hsl(Hsl::new(120., 0.5, 0.5));
        assert_eq!(color.to_dynamic(), Value::String("hsl(120,50%,50%)".to_string()));

        let round_trip = ParsedColor::from_dynamic(&color.to_dynamic(), Default::default());
        assert_eq!(round_trip.unwrap(), color);
    }

    #[test]
    fn bad_color_reports_reason() {
        let value = Value::String("hsl(1,2,3)".to_string());
        let err = ParsedColor::from_dynamic(&value, Default::default()).unwrap_err();
        assert!(err.to_string().contains("must be a percentage"));
    }

    #[test]
    fn target_type() {
        let value = Value::String("HSLA".to_string());
        assert_eq!(
            TargetType::from_dynamic(&value, Default::default()).unwrap(),
            TargetType::Hsla
        );
        assert_eq!(TargetType::Rgb.to_dynamic(), Value::String("rgb".to_string()));
    }
}
