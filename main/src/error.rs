//! The error taxonomy shared by checks and assertions.

use std::fmt;
use thiserror::Error;

/// The kind of a raised error.
///
/// The set of kinds is part of the public contract and does not change between versions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The subject's type or nullness violates a structural expectation.
    TypeMismatch,
    /// The subject's value violates a value-level rule.
    Value,
    /// The subject lacks a required attribute or method.
    Attribute,
    /// The subject of a check could not be named.
    ///
    /// This signals a misuse of the library rather than bad data and is never caught by the
    /// assertion wrappers.
    InternalFormat,
    /// The behavior of a callable did not match the expectation of an assertion.
    AssertionFailure,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::TypeMismatch => "type-mismatch",
            ErrorKind::Value => "value-error",
            ErrorKind::Attribute => "attribute-error",
            ErrorKind::InternalFormat => "internal-format-error",
            ErrorKind::AssertionFailure => "assertion-failure",
        })
    }
}

/// The error returned by a check whose rule was violated.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ContractError {
    /// The kind of the violation.
    kind: ErrorKind,
    /// The human readable description of the violation.
    message: String,
}

impl ContractError {
    /// Creates a new error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();
        log::debug!("contract violated ({}): {}", kind, message);

        ContractError { kind, message }
    }

    /// The kind of the error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The message of the error.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn type_mismatch(message: impl Into<String>) -> Self {
        ContractError::new(ErrorKind::TypeMismatch, message)
    }

    pub(crate) fn value(message: impl Into<String>) -> Self {
        ContractError::new(ErrorKind::Value, message)
    }

    pub(crate) fn attribute(message: impl Into<String>) -> Self {
        ContractError::new(ErrorKind::Attribute, message)
    }

    pub(crate) fn internal_format(message: impl Into<String>) -> Self {
        ContractError::new(ErrorKind::InternalFormat, message)
    }
}

/// An error that an assertion wrapper can inspect.
///
/// Implement this for your own error types to use them with
/// [`raises`](crate::assertion::raises) and friends.
pub trait Raised: std::error::Error + 'static {
    /// The kind of the error.
    fn kind(&self) -> ErrorKind;

    /// Checks whether the error is of the given kind.
    ///
    /// Override this if a finer grained error should also be reported as one of the coarser
    /// kinds it specializes.
    fn is_kind(&self, kind: ErrorKind) -> bool {
        self.kind() == kind
    }
}

impl Raised for ContractError {
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}
