use k9::assert_equal as assert_eq;
use wezterm_color_parse::{parse, parse_any, Hsl, ParsedColor, Rgb8, Rgba8, TargetType};
use wezterm_color_parse_macros::color;

const ACCENT: ParsedColor = color!("#ff8000");

#[test]
fn constant() {
    assert_eq!(ACCENT, ParsedColor::Rgb(Rgb8::from_u8(255, 128, 0)));
}

#[test]
fn matches_runtime_parse() {
    for (literal, text) in [
        (color!("rgb( 10, 50%, 300 )"), "rgb( 10, 50%, 300 )"),
        (color!("#abc"), "#abc"),
        (color!("hsl(120,50%,50%)"), "hsl(120,50%,50%)"),
        (color!("rgba(0,0,0,0.5)"), "rgba(0,0,0,0.5)"),
        (color!("hsla(-30,50%,50%,2)"), "hsla(-30,50%,50%,2)"),
        (color!("Transparent"), "Transparent"),
        (color!("DarkGreen"), "DarkGreen"),
    ] {
        assert_eq!(literal, parse_any(text).unwrap());
    }
}

#[test]
fn with_target() {
    assert_eq!(
        color!(rgb, "hsl(0,100%,50%)"),
        parse(TargetType::Rgb, "hsl(0,100%,50%)").unwrap()
    );
    assert_eq!(
        color!(rgba, "navy"),
        ParsedColor::Rgba(Rgba8::from_u8(0, 0, 128, 255))
    );
    assert_eq!(color!(hsl, "hsl(1,2%,3%)"), ParsedColor::Hsl(Hsl::new(1., 0.02, 0.03)));
    assert_eq!(color!(any, "red",), parse_any("red").unwrap());
}
