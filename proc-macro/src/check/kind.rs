//! Defines the different kinds of checks.

use std::fmt;

/// The second argument a check takes after its subject.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Operand {
    /// The check only takes a subject.
    None,
    /// The check compares the subject to a value.
    Value,
    /// The check compares the subject to a type.
    Type,
}

/// The different kinds of checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CheckKind {
    IsNotNone,
    IsNotEmpty,
    IsEqualToAny,
    IsTrue,
    IsFalse,
    IsEqual,
    IsGreaterThan,
    IsGreaterThanOrEqual,
    AllHaveAttribute,
    AllHaveMethod,
    IsCallable,
    IsInstance,
}

impl CheckKind {
    /// The name of the function implementing the check in the `contract` module.
    pub(crate) fn function_name(self) -> &'static str {
        match self {
            CheckKind::IsNotNone => "is_not_none",
            CheckKind::IsNotEmpty => "is_not_empty",
            CheckKind::IsEqualToAny => "is_equal_to_any",
            CheckKind::IsTrue => "is_true",
            CheckKind::IsFalse => "is_false",
            CheckKind::IsEqual => "is_equal",
            CheckKind::IsGreaterThan => "is_greater_than",
            CheckKind::IsGreaterThanOrEqual => "is_greater_than_or_equal",
            CheckKind::AllHaveAttribute => "all_have_attribute",
            CheckKind::AllHaveMethod => "all_have_method",
            CheckKind::IsCallable => "is_callable",
            CheckKind::IsInstance => "is_instance",
        }
    }

    /// The operand the check takes after its subject.
    pub(crate) fn operand(self) -> Operand {
        match self {
            CheckKind::IsNotNone
            | CheckKind::IsNotEmpty
            | CheckKind::IsTrue
            | CheckKind::IsFalse
            | CheckKind::IsCallable => Operand::None,
            CheckKind::IsEqualToAny
            | CheckKind::IsEqual
            | CheckKind::IsGreaterThan
            | CheckKind::IsGreaterThanOrEqual
            | CheckKind::AllHaveAttribute
            | CheckKind::AllHaveMethod => Operand::Value,
            CheckKind::IsInstance => Operand::Type,
        }
    }

    /// Whether the subject may be named by a label as the last argument.
    pub(crate) fn accepts_label(self) -> bool {
        match self {
            CheckKind::IsEqualToAny
            | CheckKind::IsTrue
            | CheckKind::IsFalse
            | CheckKind::IsEqual => true,
            _ => false,
        }
    }

    /// Whether the subject is passed by value instead of by reference.
    pub(crate) fn takes_subject_by_value(self) -> bool {
        match self {
            CheckKind::IsTrue | CheckKind::IsFalse => true,
            _ => false,
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}!", self.function_name())
    }
}
