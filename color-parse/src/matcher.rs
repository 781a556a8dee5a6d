//! Syntactic recognition of color descriptions.
//!
//! The patterns are tried in a fixed order and the first match wins.
//! Only the shape of the input is checked here; the captured fields
//! are validated by the decoders.
use regex::Regex;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Syntax {
    /// `#RRGGBB` or `0xRRGGBB`
    HexLong,
    /// `#RGB` or `0xRGB`
    HexShort,
    Rgb,
    Hsl,
    Rgba,
    Hsla,
    Transparent,
    /// Something that can only be a color name
    Name,
}

const FIELD: &str = "([^,()]*)";

fn function(name: &str, arity: usize) -> String {
    format!("^{}\\({}\\)$", name, vec![FIELD; arity].join(","))
}

fn patterns() -> Vec<(Syntax, String)> {
    vec![
        (
            Syntax::HexLong,
            "^(?:#|0x)([0-9a-f]{2})([0-9a-f]{2})([0-9a-f]{2})$".to_string(),
        ),
        (
            Syntax::HexShort,
            "^(?:#|0x)([0-9a-f])([0-9a-f])([0-9a-f])$".to_string(),
        ),
        (Syntax::Rgb, function("rgb", 3)),
        (Syntax::Hsl, function("hsl", 3)),
        (Syntax::Rgba, function("rgba", 4)),
        (Syntax::Hsla, function("hsla", 4)),
        (Syntax::Transparent, "^transparent$".to_string()),
        (Syntax::Name, "^[a-z0-9]+$".to_string()),
    ]
}

lazy_static::lazy_static! {
    static ref PATTERNS: Vec<(Syntax, Regex)> = compile_patterns();
}

fn compile_patterns() -> Vec<(Syntax, Regex)> {
    patterns()
        .into_iter()
        .map(|(syntax, pattern)| match Regex::new(&pattern) {
            Ok(re) => (syntax, re),
            Err(err) => panic!("color pattern for {:?} is invalid: {:#}", syntax, err),
        })
        .collect()
}

/// The outcome of a successful match: which syntax was recognized
/// and the text captured for each of its fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match<'a> {
    pub syntax: Syntax,
    fields: [&'a str; 4],
}

impl<'a> Match<'a> {
    /// Returns the captured text for the field at `idx`, or an empty
    /// string if the syntax has no such field.
    pub fn field(&self, idx: usize) -> &'a str {
        self.fields.get(idx).copied().unwrap_or("")
    }
}

/// Returns the first syntax that matches `normalized`, which is
/// expected to already be lowercase with whitespace removed.
pub fn match_syntax(normalized: &str) -> Option<Match<'_>> {
    for (syntax, re) in PATTERNS.iter() {
        if let Some(caps) = re.captures(normalized) {
            let mut fields = [""; 4];
            for (field, m) in fields.iter_mut().zip(caps.iter().skip(1)) {
                *field = m.map(|m| m.as_str()).unwrap_or("");
            }
            log::trace!("{:?} matched `{}`", syntax, normalized);
            return Some(Match {
                syntax: *syntax,
                fields,
            });
        }
    }
    None
}
