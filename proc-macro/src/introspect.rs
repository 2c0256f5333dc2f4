//! Implements `#[derive(Introspect)]`.

use proc_macro2::TokenStream;
use proc_macro_error::{abort, emit_error};
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Data, DeriveInput, Fields, GenericArgument, Ident, PathArguments, Token, Type, TypeParamBound,
};

use crate::helpers::Parenthesized;

/// The custom keywords used in `introspect` attributes.
mod custom_keywords {
    use syn::custom_keyword;

    custom_keyword!(methods);
    custom_keyword!(callable);
}

/// A single option of an `introspect` attribute.
enum IntrospectOption {
    /// Declares inherent methods of the type.
    Methods {
        /// The `methods` keyword.
        _methods_keyword: custom_keywords::methods,
        /// The names of the methods.
        names: Parenthesized<MethodNames>,
    },
    /// Marks the type as invocable.
    Callable(custom_keywords::callable),
}

impl Parse for IntrospectOption {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lookahead = input.lookahead1();

        if lookahead.peek(custom_keywords::methods) {
            Ok(IntrospectOption::Methods {
                _methods_keyword: input.parse()?,
                names: input.parse()?,
            })
        } else if lookahead.peek(custom_keywords::callable) {
            Ok(IntrospectOption::Callable(input.parse()?))
        } else {
            Err(lookahead.error())
        }
    }
}

/// The comma separated names in `methods(..)`.
struct MethodNames {
    names: Punctuated<Ident, Token![,]>,
}

impl Parse for MethodNames {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        Ok(MethodNames {
            names: Punctuated::parse_terminated(input)?,
        })
    }
}

/// The content of an `introspect` attribute.
struct IntrospectAttr {
    options: Punctuated<IntrospectOption, Token![,]>,
}

impl Parse for IntrospectAttr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        Ok(IntrospectAttr {
            options: Punctuated::parse_terminated(input)?,
        })
    }
}

/// What is known about the members of the type.
#[derive(Default)]
struct Members {
    attributes: Vec<String>,
    methods: Vec<String>,
    callable: bool,
}

impl Members {
    fn add_attribute(&mut self, name: String) {
        if !self.attributes.contains(&name) {
            self.attributes.push(name);
        }
    }

    fn add_method(&mut self, name: String) {
        self.add_attribute(name.clone());

        if !self.methods.contains(&name) {
            self.methods.push(name);
        }
    }
}

/// Generates the `Introspect` implementation for a struct.
pub(crate) fn render_introspect(input: DeriveInput, krate: &TokenStream) -> TokenStream {
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(data) => abort!(
            data.enum_token,
            "`Introspect` can only be derived for structs";
            help = "implement `Introspect` for the enum manually"
        ),
        Data::Union(data) => abort!(
            data.union_token,
            "`Introspect` can only be derived for structs"
        ),
    };

    let mut members = Members::default();

    match fields {
        Fields::Named(fields) => {
            for field in fields.named.iter() {
                if let Some(ident) = &field.ident {
                    if is_invocable(&field.ty) {
                        members.add_method(ident.to_string());
                    } else {
                        members.add_attribute(ident.to_string());
                    }
                }
            }
        }
        Fields::Unnamed(fields) => {
            for (index, field) in fields.unnamed.iter().enumerate() {
                if is_invocable(&field.ty) {
                    members.add_method(index.to_string());
                } else {
                    members.add_attribute(index.to_string());
                }
            }
        }
        Fields::Unit => (),
    }

    for attr in input.attrs.iter().filter(|attr| attr.path.is_ident("introspect")) {
        match syn::parse2::<Parenthesized<IntrospectAttr>>(attr.tokens.clone()) {
            Ok(attr) => {
                for option in attr.content.options {
                    match option {
                        IntrospectOption::Methods { names, .. } => {
                            for name in names.content.names {
                                members.add_method(name.to_string());
                            }
                        }
                        IntrospectOption::Callable(_) => members.callable = true,
                    }
                }
            }
            Err(err) => emit_error!(err),
        }
    }

    if members.callable {
        members.add_method("call".into());
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let attributes = &members.attributes;
    let methods = &members.methods;
    let callable = members.callable;

    quote! {
        impl #impl_generics #krate::Introspect for #ident #ty_generics #where_clause {
            fn has_attribute(&self, name: &str) -> bool {
                const ATTRIBUTES: &[&str] = &[#(#attributes),*];

                ATTRIBUTES.contains(&name)
            }

            fn has_method(&self, name: &str) -> bool {
                const METHODS: &[&str] = &[#(#methods),*];

                METHODS.contains(&name)
            }

            fn is_callable(&self) -> bool {
                #callable
            }
        }
    }
}

/// Checks if a field of the given type can be invoked.
fn is_invocable(ty: &Type) -> bool {
    match ty {
        Type::BareFn(_) => true,
        Type::Paren(paren) => is_invocable(&paren.elem),
        Type::Group(group) => is_invocable(&group.elem),
        Type::Reference(reference) => is_fn_trait_object(&reference.elem),
        Type::Path(path) if path.qself.is_none() => {
            let segment = match path.path.segments.last() {
                Some(segment) => segment,
                None => return false,
            };

            if segment.ident != "Box" && segment.ident != "Rc" && segment.ident != "Arc" {
                return false;
            }

            match &segment.arguments {
                PathArguments::AngleBracketed(arguments) => {
                    arguments.args.iter().any(|argument| match argument {
                        GenericArgument::Type(ty) => is_fn_trait_object(ty),
                        _ => false,
                    })
                }
                _ => false,
            }
        }
        _ => false,
    }
}

/// Checks if the type is a `dyn Fn`, `dyn FnMut` or `dyn FnOnce` trait object.
fn is_fn_trait_object(ty: &Type) -> bool {
    match ty {
        Type::TraitObject(object) => object.bounds.iter().any(|bound| match bound {
            TypeParamBound::Trait(bound) => bound.path.segments.last().map_or(false, |segment| {
                segment.ident == "Fn" || segment.ident == "FnMut" || segment.ident == "FnOnce"
            }),
            _ => false,
        }),
        Type::Paren(paren) => is_fn_trait_object(&paren.elem),
        Type::Group(group) => is_fn_trait_object(&group.elem),
        _ => false,
    }
}
