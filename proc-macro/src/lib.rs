//! Procedural macros for `code-contracts`.
//!
//! Every check macro names its subject by the source text of the expression it was given, so
//! that `is_not_none!(self.config)` reports `self.config was equal to None.` without the
//! caller repeating the name.

use proc_macro::TokenStream;
use proc_macro_error::proc_macro_error;
use syn::{parse::ParseStream, parse_macro_input, DeriveInput};

use crate::{
    check::{render_check, CheckInput, CheckKind},
    helpers::crate_path,
    introspect::render_introspect,
};

mod check;
mod helpers;
mod introspect;
mod subject;

/// Parses the arguments of a check macro and renders the call to the check.
fn expand_check(kind: CheckKind, input: TokenStream) -> TokenStream {
    let parser = |input: ParseStream| CheckInput::parse_for(kind, input);
    let input = parse_macro_input!(input with parser);

    render_check(kind, input, &crate_path()).into()
}

macro_rules! check_macros {
    ($($(#[$attr:meta])* $name:ident => $kind:ident,)*) => {
        $(
            $(#[$attr])*
            #[proc_macro]
            #[proc_macro_error]
            pub fn $name(input: TokenStream) -> TokenStream {
                expand_check(CheckKind::$kind, input)
            }
        )*
    };
}

check_macros! {
    /// Checks that an `Option` is not `None`.
    ///
    /// Usage: `is_not_none!(subject)`.
    is_not_none => IsNotNone,
    /// Checks that a value is not empty.
    ///
    /// Usage: `is_not_empty!(subject)`.
    is_not_empty => IsNotEmpty,
    /// Checks that a value is equal to one of the expected values.
    ///
    /// Usage: `is_equal_to_any!(subject, expected_values)` or
    /// `is_equal_to_any!(subject, expected_values, label)`.
    is_equal_to_any => IsEqualToAny,
    /// Checks that a boolean is `true`.
    ///
    /// Usage: `is_true!(subject)` or `is_true!(expression, label)`.
    is_true => IsTrue,
    /// Checks that a boolean is `false`.
    ///
    /// Usage: `is_false!(subject)` or `is_false!(expression, label)`.
    is_false => IsFalse,
    /// Checks that a value is equal to the expected value.
    ///
    /// Usage: `is_equal!(subject, expected)` or `is_equal!(expression, expected, label)`.
    is_equal => IsEqual,
    /// Checks that a value is greater than the expected value.
    ///
    /// Usage: `is_greater_than!(subject, expected)`.
    is_greater_than => IsGreaterThan,
    /// Checks that a value is greater than or equal to the expected value.
    ///
    /// Usage: `is_greater_than_or_equal!(subject, expected)`.
    is_greater_than_or_equal => IsGreaterThanOrEqual,
    /// Checks that a value, or every item of a sequence, has an attribute.
    ///
    /// Usage: `all_have_attribute!(subject, "attribute")`.
    all_have_attribute => AllHaveAttribute,
    /// Checks that a value, or every item of a sequence, has a method.
    ///
    /// Usage: `all_have_method!(subject, "method")`.
    all_have_method => AllHaveMethod,
    /// Checks that a value can be invoked.
    ///
    /// Usage: `is_callable!(subject)`.
    is_callable => IsCallable,
    /// Checks that a value is of the given type.
    ///
    /// Usage: `is_instance!(subject, Type)`.
    is_instance => IsInstance,
}

/// Implements `Introspect` for a struct.
#[proc_macro_derive(Introspect, attributes(introspect))]
#[proc_macro_error]
pub fn derive_introspect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    render_introspect(input, &crate_path()).into()
}
