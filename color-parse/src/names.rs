//! The named color table.
//!
//! The table is loaded from `colors.txt`, which uses the layout of the
//! X11 `rgb.txt` file: three decimal components followed by the name.
//! Regenerating the table only requires replacing that file.
use crate::color::Rgb8;
use std::collections::HashMap;

lazy_static::lazy_static! {
    static ref NAMED_COLORS: HashMap<String, Rgb8> = build_colors();
}

fn parse_line(line: &str) -> Option<(String, Rgb8)> {
    let mut fields = line.split_ascii_whitespace();
    let red = fields.next()?.parse().ok()?;
    let green = fields.next()?.parse().ok()?;
    let blue = fields.next()?.parse().ok()?;
    // Names in rgb.txt may contain spaces; descriptions are matched
    // with all whitespace removed, so drop it here too.
    let name = fields.collect::<String>().to_ascii_lowercase();
    if name.is_empty() {
        return None;
    }
    Some((name, Rgb8::from_u8(red, green, blue)))
}

fn build_colors() -> HashMap<String, Rgb8> {
    let mut map = HashMap::new();
    let rgb_txt = include_str!("colors.txt");

    for line in rgb_txt.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('!') {
            continue;
        }
        match parse_line(line) {
            Some((name, color)) => {
                map.insert(name, color);
            }
            None => log::error!("ignoring malformed color table entry: {}", line),
        }
    }

    map
}

/// Look up a color by name.  Case is not significant.
/// Returns None if the name is not in the table.
pub fn lookup_name(name: &str) -> Option<Rgb8> {
    NAMED_COLORS.get(&name.to_ascii_lowercase()).copied()
}

/// Returns all known color names in sorted order
pub fn names() -> impl Iterator<Item = &'static str> {
    let map: &'static HashMap<String, Rgb8> = &NAMED_COLORS;
    let mut names: Vec<&'static str> = map.keys().map(|s| s.as_str()).collect();
    names.sort_unstable();
    names.into_iter()
}
