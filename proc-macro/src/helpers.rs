//! Helpers shared by the macros.

use lazy_static::lazy_static;
use proc_macro2::{Span, TokenStream};
use proc_macro_error::abort_call_site;
use quote::quote;
use std::env;
use syn::{
    parenthesized,
    parse::{Parse, ParseStream},
    token::Paren,
    Ident,
};

lazy_static! {
    /// The name under which the main `code-contracts` crate is imported.
    pub(crate) static ref CRATE_NAME: String = {
        match proc_macro_crate::crate_name("code-contracts") {
            Ok(name) => name.replace('-', "_"),
            Err(err) => match env::var("CARGO_PKG_NAME") {
                // This allows for writing documentation tests on the macros themselves.
                //
                // This *may* lead to false positives, if someone also names their crate
                // `code-contracts`, however it will very likely fail to compile at a later stage
                // then.
                Ok(val) if val == "code-contracts" => "code_contracts".into(),
                _ => abort_call_site!("crate `code-contracts` must be imported: {}", err),
            },
        }
    };
}

/// Renders the path to the main crate.
pub(crate) fn crate_path() -> TokenStream {
    let name = Ident::new(&CRATE_NAME, Span::call_site());

    quote! { ::#name }
}

/// A parsable thing surrounded by parentheses.
pub(crate) struct Parenthesized<T> {
    /// The parentheses surrounding the object.
    _parentheses: Paren,
    /// The content that was surrounded by the parentheses.
    pub(crate) content: T,
}

impl<T: Parse> Parse for Parenthesized<T> {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let content;
        let parentheses = parenthesized!(content in input);
        let content = content.parse()?;

        Ok(Parenthesized {
            _parentheses: parentheses,
            content,
        })
    }
}
