use proc_macro2::TokenStream;
use quote::quote;
use std::str::FromStr;
use syn::parse::{Parse, ParseStream};
use syn::{Error, Ident, LitStr, Result, Token};
use wezterm_color_parse::{parse, Hsl, Hsla, ParsedColor, Rgb8, Rgba8, TargetType};

/// `[target,] "description"`
pub struct ColorLiteral {
    target: Option<Ident>,
    description: LitStr,
}

impl Parse for ColorLiteral {
    fn parse(input: ParseStream) -> Result<Self> {
        let target = if input.peek(Ident) {
            let target: Ident = input.parse()?;
            input.parse::<Token![,]>()?;
            Some(target)
        } else {
            None
        };
        let description: LitStr = input.parse()?;
        input.parse::<Option<Token![,]>>()?;
        Ok(Self {
            target,
            description,
        })
    }
}

pub fn expand(literal: ColorLiteral) -> Result<TokenStream> {
    let target = match &literal.target {
        Some(ident) => TargetType::from_str(&ident.to_string())
            .map_err(|err| Error::new(ident.span(), err))?,
        None => TargetType::Any,
    };
    let color = parse(target, &literal.description.value())
        .map_err(|err| Error::new(literal.description.span(), err))?;

    let krate = quote!(::wezterm_color_parse);
    Ok(match color {
        ParsedColor::Rgb(Rgb8 { r, g, b }) => quote! {
            #krate::ParsedColor::Rgb(#krate::Rgb8::from_u8(#r, #g, #b))
        },
        ParsedColor::Rgba(Rgba8 { r, g, b, a }) => quote! {
            #krate::ParsedColor::Rgba(#krate::Rgba8::from_u8(#r, #g, #b, #a))
        },
        ParsedColor::Hsl(Hsl { h, s, l }) => quote! {
            #krate::ParsedColor::Hsl(#krate::Hsl::new(#h, #s, #l))
        },
        ParsedColor::Hsla(Hsla { h, s, l, a }) => quote! {
            #krate::ParsedColor::Hsla(#krate::Hsla::new(#h, #s, #l, #a))
        },
    })
}
