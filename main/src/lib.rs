//! Code contracts: checks that name what they check.
//!
//! A contract is a check written inline in the code it protects. When the rule it states does
//! not hold, it returns a [`ContractError`] whose message refers to the checked expression by
//! its source text:
//!
//! ```rust
//! use code_contracts::{is_greater_than, ContractError};
//!
//! struct Order {
//!     total: u32,
//! }
//!
//! fn ship(order: &Order) -> Result<(), ContractError> {
//!     is_greater_than!(order.total, 0)?;
//!     Ok(())
//! }
//!
//! let err = ship(&Order { total: 0 }).unwrap_err();
//! assert_eq!(err.to_string(), "order.total with value 0 was not greater than 0.");
//! ```
//!
//! The [`assertion`] module turns the errors returned by a callable into pass or fail outcomes
//! for tests.
//!
//! Every check is also available as a function in the [`contract`] module, taking the name to
//! use in messages explicitly. The macros are enabled by the default `macros` feature.

// Allows the macros to refer to this crate by name from its own tests.
extern crate self as code_contracts;

pub mod assertion;
pub mod call_log;
pub mod container;
pub mod contract;
pub mod error;
pub mod introspect;
pub mod invoke;
pub mod subject;
pub mod type_name;

pub use crate::{
    call_log::{Call, CallLog},
    container::MaybeEmpty,
    error::{ContractError, ErrorKind, Raised},
    introspect::Introspect,
    invoke::Invoke,
};

cfg_if::cfg_if! {
    if #[cfg(feature = "macros")] {
        /// Checks that an `Option` is not `None`.
        ///
        /// ```rust
        /// use code_contracts::is_not_none;
        ///
        /// fn greet(name: Option<&str>) -> Result<(), code_contracts::ContractError> {
        ///     is_not_none!(name)?;
        ///     Ok(())
        /// }
        ///
        /// assert_eq!(greet(None).unwrap_err().to_string(), "name was equal to None.");
        /// ```
        ///
        /// The subject must be something that has a name: a variable, a field access such as
        /// `self.config.name`, or a literal. Anything else is rejected at compile time:
        ///
        /// ```rust,compile_fail
        /// use code_contracts::is_not_none;
        ///
        /// fn first(values: &[Option<u8>]) -> Result<(), code_contracts::ContractError> {
        ///     is_not_none!(values[0])
        /// }
        /// ```
        pub use code_contracts_proc_macro::is_not_none;

        /// Checks that a value is not empty.
        ///
        /// `None`, empty strings and containers of length `0` are empty, see [`MaybeEmpty`].
        ///
        /// ```rust
        /// use code_contracts::is_not_empty;
        ///
        /// let tags: Vec<String> = Vec::new();
        ///
        /// assert_eq!(is_not_empty!(tags).unwrap_err().to_string(), "tags was empty.");
        /// ```
        pub use code_contracts_proc_macro::is_not_empty;

        /// Checks that a value is equal to one of the expected values.
        ///
        /// An optional third argument labels the subject.
        ///
        /// ```rust
        /// use code_contracts::is_equal_to_any;
        ///
        /// let a = 4;
        ///
        /// assert_eq!(
        ///     is_equal_to_any!(a, [1, 2, 3]).unwrap_err().to_string(),
        ///     "a with value 4 and type i32 was not equal to any of the expected values."
        /// );
        /// assert_eq!(
        ///     is_equal_to_any!(a, [1, 2, 3], "something.abc").unwrap_err().to_string(),
        ///     "something.abc with value 4 and type i32 was not equal to any of the expected values."
        /// );
        /// ```
        pub use code_contracts_proc_macro::is_equal_to_any;

        /// Checks that a boolean is `true`.
        ///
        /// Boolean expressions have no name of their own, so they need a label:
        ///
        /// ```rust
        /// use code_contracts::is_true;
        ///
        /// let a = -1;
        ///
        /// assert_eq!(is_true!(a > 0, "a > 0").unwrap_err().to_string(), "a > 0 was not True.");
        /// ```
        ///
        /// Without one, the call does not compile:
        ///
        /// ```rust,compile_fail
        /// use code_contracts::is_true;
        ///
        /// let a = -1;
        /// let _ = is_true!(a > 0);
        /// ```
        ///
        /// Only booleans are accepted:
        ///
        /// ```rust,compile_fail
        /// use code_contracts::is_true;
        ///
        /// let a = 1;
        /// let _ = is_true!(a);
        /// ```
        pub use code_contracts_proc_macro::is_true;

        /// Checks that a boolean is `false`.
        ///
        /// ```rust
        /// use code_contracts::is_false;
        ///
        /// let ready = true;
        ///
        /// assert_eq!(is_false!(ready).unwrap_err().to_string(), "ready was not False.");
        /// ```
        pub use code_contracts_proc_macro::is_false;

        /// Checks that a value is equal to the expected value.
        ///
        /// ```rust
        /// use code_contracts::is_equal;
        ///
        /// let values = (1, 2);
        ///
        /// assert!(is_equal!(values.0, 1).is_ok());
        /// assert_eq!(
        ///     is_equal!(values.1, 1).unwrap_err().to_string(),
        ///     "values.1 with value 2 was not equal to 1."
        /// );
        /// ```
        pub use code_contracts_proc_macro::is_equal;

        /// Checks that a value is greater than the expected value.
        pub use code_contracts_proc_macro::is_greater_than;

        /// Checks that a value is greater than or equal to the expected value.
        pub use code_contracts_proc_macro::is_greater_than_or_equal;

        /// Checks that a value, or every item of a sequence, has an attribute.
        pub use code_contracts_proc_macro::all_have_attribute;

        /// Checks that a value, or every item of a sequence, has a method.
        pub use code_contracts_proc_macro::all_have_method;

        /// Checks that a value can be invoked.
        pub use code_contracts_proc_macro::is_callable;

        /// Checks that a value is of the given type.
        ///
        /// ```rust
        /// use code_contracts::is_instance;
        /// use std::any::Any;
        ///
        /// let value: Box<dyn Any> = Box::new(true);
        ///
        /// assert!(is_instance!(value, bool).is_ok());
        /// assert_eq!(
        ///     is_instance!(value, String).unwrap_err().to_string(),
        ///     "value was not an instance of String."
        /// );
        /// ```
        pub use code_contracts_proc_macro::is_instance;

        /// Implements [`Introspect`] for a struct.
        ///
        /// Fields are attributes. Fields holding a function pointer or a boxed closure are also
        /// methods. Inherent methods are declared with `#[introspect(methods(...))]`, and
        /// `#[introspect(callable)]` marks the type as invocable.
        pub use code_contracts_proc_macro::Introspect;
    }
}
