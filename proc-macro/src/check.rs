//! Renders check macros into calls of the check functions.
//!
//! # What the generated code looks like
//!
//! ```rust,ignore
//! is_equal!(order.total, 10)
//! ```
//!
//! turns into
//!
//! ```rust,ignore
//! ::code_contracts::contract::is_equal(&(order.total), &(10), "order.total")
//! ```
//!
//! and a labeled check such as
//!
//! ```rust,ignore
//! is_true!(a > 0, "a > 0")
//! ```
//!
//! turns into
//!
//! ```rust,ignore
//! ::code_contracts::contract::is_true(a > 0, ::code_contracts::subject::resolve("a > 0", ""))
//! ```

use proc_macro2::{Span, TokenStream};
use proc_macro_error::abort;
use quote::quote;
use syn::Ident;

pub(crate) use self::{input::CheckInput, kind::CheckKind};
use self::input::OperandInput;
use crate::subject::subject_name;

mod input;
mod kind;

/// Generates the call to the check function.
///
/// Aborts if the subject has no name and no label was given.
pub(crate) fn render_check(kind: CheckKind, input: CheckInput, krate: &TokenStream) -> TokenStream {
    let name = match subject_name(&input.subject) {
        Some(name) => name,
        // The label is only known at runtime, an empty name makes the check report a format
        // error if the label turns out to be `None`.
        None if input.label.is_some() => String::new(),
        None => {
            let help = if kind.accepts_label() {
                format!("add a label naming the expression: `{}(.., \"label\")`", kind)
            } else {
                "bind the expression to a variable and check the variable".into()
            };

            abort!(
                input.subject,
                "the call to the code contract had an unexpected format";
                note = "the subject must be a variable, a field access or a literal";
                help = help
            )
        }
    };

    let name = match &input.label {
        Some(label) => quote! { #krate::subject::resolve(#label, #name) },
        None => quote! { #name },
    };

    let function = Ident::new(kind.function_name(), Span::call_site());
    let subject = &input.subject;
    let subject = if kind.takes_subject_by_value() {
        quote! { #subject }
    } else {
        quote! { &(#subject) }
    };

    match &input.operand {
        None => quote! {
            #krate::contract::#function(#subject, #name)
        },
        Some(OperandInput::Value(operand)) => quote! {
            #krate::contract::#function(#subject, &(#operand), #name)
        },
        Some(OperandInput::Type(ty)) => quote! {
            #krate::contract::#function::<#ty, _>(#subject, #name)
        },
    }
}
