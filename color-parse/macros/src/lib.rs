use proc_macro::TokenStream;
use syn::parse_macro_input;

mod literal;

/// Parse a color description while compiling.
///
/// `color!("#ff8000")` expands to the `ParsedColor` that
/// `wezterm_color_parse::parse_any` would return for the same text;
/// `color!(rgb, "hsl(0,100%,50%)")` converts it to the named target
/// type first.  The expansion is a constant expression.
///
/// An invalid description is reported as a compile error on the literal.
#[proc_macro]
pub fn color(input: TokenStream) -> TokenStream {
    literal::expand(parse_macro_input!(input as literal::ColorLiteral))
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
