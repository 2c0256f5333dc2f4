//! Assertions for use in tests.
//!
//! The generic assertions invoke a callable with a tuple of arguments and turn the error it
//! returns, or the lack of one, into a pass or a failure:
//!
//! ```rust
//! use code_contracts::{assertion, contract, ContractError, ErrorKind};
//!
//! fn halve(value: i32) -> Result<i32, ContractError> {
//!     contract::is_greater_than(&value, &0, "value")?;
//!     Ok(value / 2)
//! }
//!
//! assertion::raises_with_msg(ErrorKind::Value, halve, "was not greater than 0", (-2,)).unwrap();
//! assertion::does_not_raise(ErrorKind::Value, halve, (4,)).unwrap();
//! ```
//!
//! Errors that are not of the kind being asserted about are never swallowed: they are returned
//! unchanged as [`AssertionError::Propagated`]. Errors of kind
//! [`InternalFormat`](ErrorKind::InternalFormat) are always propagated.

use std::{any::Any, fmt::Display};
use thiserror::Error;

use crate::{
    call_log::{Call, CallLog},
    error::{ErrorKind, Raised},
    invoke::Invoke,
    type_name::{callable_name, concrete, short_type_name},
};

/// The failure of an assertion.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AssertionFailure {
    /// What was expected and did not happen.
    message: String,
}

impl AssertionFailure {
    /// Creates a new assertion failure.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        log::trace!("assertion failed: {}", message);

        AssertionFailure { message }
    }

    /// The message of the failure.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Raised for AssertionFailure {
    fn kind(&self) -> ErrorKind {
        ErrorKind::AssertionFailure
    }
}

/// The error of an assertion about a callable.
#[derive(Debug, Error)]
pub enum AssertionError<E>
where
    E: Raised,
{
    /// The callable did not behave as expected.
    #[error(transparent)]
    Failed(#[from] AssertionFailure),
    /// The callable returned an error the assertion does not handle.
    #[error(transparent)]
    Propagated(E),
}

impl<E: Raised> AssertionError<E> {
    /// Returns the assertion failure, if this is one.
    pub fn failure(&self) -> Option<&AssertionFailure> {
        match self {
            AssertionError::Failed(failure) => Some(failure),
            AssertionError::Propagated(_) => None,
        }
    }
}

impl<E: Raised> Raised for AssertionError<E> {
    fn kind(&self) -> ErrorKind {
        match self {
            AssertionError::Failed(failure) => failure.kind(),
            AssertionError::Propagated(err) => err.kind(),
        }
    }

    fn is_kind(&self, kind: ErrorKind) -> bool {
        match self {
            AssertionError::Failed(failure) => failure.is_kind(kind),
            AssertionError::Propagated(err) => err.is_kind(kind),
        }
    }
}

/// Asserts that the callable does not return an error of the given kind.
///
/// Errors of other kinds are propagated.
pub fn does_not_raise<F, Args>(
    kind: ErrorKind,
    callable: F,
    args: Args,
) -> Result<(), AssertionError<F::Error>>
where
    F: Invoke<Args>,
    F::Error: Raised,
{
    let name = callable_name::<F>();

    match callable.invoke(args) {
        Ok(_) => Ok(()),
        Err(err) if is_handled(&err, kind) => {
            Err(AssertionFailure::new(format!("{} raised by {}().", kind, name)).into())
        }
        Err(err) => {
            log::trace!("propagating {} raised by {}()", err.kind(), name);
            Err(AssertionError::Propagated(err))
        }
    }
}

/// Asserts that the callable returns an error of the given kind.
pub fn raises<F, Args>(
    kind: ErrorKind,
    callable: F,
    args: Args,
) -> Result<(), AssertionError<F::Error>>
where
    F: Invoke<Args>,
    F::Error: Raised,
{
    raises_with_msg(kind, callable, None, args)
}

/// Asserts that the callable returns an error of the given kind whose message contains the
/// expected message.
///
/// Without an expected message (or with an empty one), this is the same as [`raises`].
pub fn raises_with_msg<'a, F, Args>(
    kind: ErrorKind,
    callable: F,
    expected_message: impl Into<Option<&'a str>>,
    args: Args,
) -> Result<(), AssertionError<F::Error>>
where
    F: Invoke<Args>,
    F::Error: Raised,
{
    let name = callable_name::<F>();
    let expected_message = expected_message
        .into()
        .filter(|message| !message.is_empty());

    let raised = match callable.invoke(args) {
        Ok(_) => false,
        Err(err) if err.kind() == ErrorKind::InternalFormat => {
            log::trace!("propagating {} raised by {}()", err.kind(), name);
            return Err(AssertionError::Propagated(err));
        }
        Err(err) if err.is_kind(kind) => match expected_message {
            Some(message) => err.to_string().contains(message),
            None => true,
        },
        Err(_) => false,
    };

    if raised {
        return Ok(());
    }

    let description = match expected_message {
        Some(message) => format!("{} with message '{}'", kind, message),
        None => kind.to_string(),
    };

    Err(AssertionFailure::new(format!("{} was not raised by {}().", description, name)).into())
}

/// Asserts that no call with exactly the given arguments was recorded.
pub fn not_called_with<A>(log: &CallLog<A>, call: &Call<A>) -> Result<(), AssertionFailure>
where
    A: PartialEq + Display,
{
    if log.was_called_with(call) {
        return Err(AssertionFailure::new(format!(
            "Function was unexpectedly called with {}.",
            call
        )));
    }

    Ok(())
}

/// Asserts that the sequence contains exactly one element, and that it is of type `T`.
///
/// Boxed `dyn Any` elements are checked by the type of the value they contain.
pub fn contains_one_element_of_class<T, V>(items: &[V]) -> Result<(), AssertionFailure>
where
    T: Any,
    V: Any,
{
    match items {
        [item] if concrete(item).is::<T>() => Ok(()),
        _ => Err(AssertionFailure::new(format!(
            "Iterable should contain one and only one object of class '{}'.",
            short_type_name::<T>()
        ))),
    }
}

/// Returns `true` if an assertion about `kind` handles the error.
fn is_handled<E: Raised>(err: &E, kind: ErrorKind) -> bool {
    err.kind() != ErrorKind::InternalFormat && err.is_kind(kind)
}
