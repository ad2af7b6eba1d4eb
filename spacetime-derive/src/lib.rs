//! Derive macro implementation used by `spacetime-core`.
//!
//! `spacetime-derive` is an implementation detail of this workspace. The `Dimension` derive expands in terms of
//! `crate::Dimension`, `crate::Differentiate`, `crate::Integrate` and `crate::Planar`, so it is intended to be used
//! by `spacetime-core` (or by crates that expose an identical crate-root API).
//!
//! Most users should depend on `spacetime` instead and use the predefined dimensions.
//!
//! # Generated impls
//!
//! For a dimension marker type `MyDim`, the derive implements:
//!
//! - `crate::Dimension for MyDim`
//! - `crate::Differentiate for MyDim` when `rate` is given
//! - `crate::Integrate for MyDim` when `integral` is given
//! - `crate::Planar for MyDim` when the `planar` flag is present
//!
//! # Attributes
//!
//! The derive reads a required `#[dimension(...)]` attribute:
//!
//! - `symbol = "m/s"`: displayed unit symbol
//! - `rate = OtherDim`: dimension obtained by dividing by a duration (optional)
//! - `integral = OtherDim`: dimension obtained by multiplying by a duration (optional)
//! - `planar`: the dimension has a 2D vector counterpart (optional flag)

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Ident, LitStr, Token, Type,
};

/// Derive `crate::Dimension` plus the derivative-lattice traits requested by `#[dimension(...)]`.
///
/// This macro is intended for use by `spacetime-core`.
#[proc_macro_derive(Dimension, attributes(dimension))]
pub fn derive_dimension(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_dimension_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_dimension_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let attr = parse_dimension_attribute(&input.attrs)?;

    let symbol = &attr.symbol;

    let differentiate = attr.rate.as_ref().map(|rate| {
        quote! {
            impl crate::Differentiate for #name {
                type Rate = #rate;
            }
        }
    });

    let integrate = attr.integral.as_ref().map(|integral| {
        quote! {
            impl crate::Integrate for #name {
                type Integral = #integral;
            }
        }
    });

    let planar = attr.planar.then(|| {
        quote! {
            impl crate::Planar for #name {}
        }
    });

    Ok(quote! {
        impl crate::Dimension for #name {
            const SYMBOL: &'static str = #symbol;
        }

        #differentiate
        #integrate
        #planar
    })
}

/// Parsed contents of the `#[dimension(...)]` attribute.
struct DimensionAttribute {
    symbol: LitStr,
    rate: Option<Type>,
    integral: Option<Type>,
    planar: bool,
}

impl Parse for DimensionAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut rate: Option<Type> = None;
        let mut integral: Option<Type> = None;
        let mut planar = false;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;

            match ident.to_string().as_str() {
                "planar" => {
                    planar = true;
                }
                "symbol" => {
                    input.parse::<Token![=]>()?;
                    symbol = Some(input.parse()?);
                }
                "rate" => {
                    input.parse::<Token![=]>()?;
                    rate = Some(input.parse()?);
                }
                "integral" => {
                    input.parse::<Token![=]>()?;
                    integral = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;

        Ok(DimensionAttribute {
            symbol,
            rate,
            integral,
            planar,
        })
    }
}

fn parse_dimension_attribute(attrs: &[Attribute]) -> syn::Result<DimensionAttribute> {
    for attr in attrs {
        if attr.path().is_ident("dimension") {
            return attr.parse_args::<DimensionAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[dimension(...)] attribute",
    ))
}
