//! The catalog of checks.
//!
//! Every check evaluates a single rule and returns a [`ContractError`] describing the violation
//! if the rule does not hold. The `name` parameter is how the subject is referred to in the
//! message; the macros of the same name fill it in with the source text of the subject
//! expression.

use std::{any::Any, fmt::Display};

use crate::{
    container::MaybeEmpty,
    error::ContractError,
    introspect::Introspect,
    subject::checked,
    type_name::{concrete, short_type_name},
};

/// Checks that the value is not `None`.
///
/// Fails with a type mismatch.
pub fn is_not_none<T>(value: &Option<T>, name: &str) -> Result<(), ContractError> {
    if value.is_none() {
        return Err(ContractError::type_mismatch(format!("{} was equal to None.", checked(name)?)));
    }

    Ok(())
}

/// Checks that the value is not empty.
///
/// To be considered empty, a value must be `None`, an empty string or a container of length
/// `0`. See [`MaybeEmpty`] for the recognized shapes.
pub fn is_not_empty<T>(value: &T, name: &str) -> Result<(), ContractError>
where
    T: ?Sized + MaybeEmpty,
{
    if value.is_empty_value() {
        return Err(ContractError::value(format!("{} was empty.", checked(name)?)));
    }

    Ok(())
}

/// Checks that the value is equal to at least one of the expected values.
pub fn is_equal_to_any<'a, T, U, I>(value: &T, expected: I, name: &str) -> Result<(), ContractError>
where
    T: PartialEq<U> + Display,
    U: 'a,
    I: IntoIterator<Item = &'a U>,
{
    if !expected.into_iter().any(|candidate| value == candidate) {
        return Err(ContractError::value(format!(
            "{} with value {} and type {} was not equal to any of the expected values.",
            checked(name)?,
            value,
            short_type_name::<T>()
        )));
    }

    Ok(())
}

/// Checks that the value is `true`.
///
/// Only a `bool` is accepted, so the argument is usually a boolean expression such as
/// `a > 0`, which then needs a label naming it.
pub fn is_true(value: bool, name: &str) -> Result<(), ContractError> {
    if !value {
        return Err(ContractError::value(format!("{} was not True.", checked(name)?)));
    }

    Ok(())
}

/// Checks that the value is `false`.
pub fn is_false(value: bool, name: &str) -> Result<(), ContractError> {
    if value {
        return Err(ContractError::value(format!("{} was not False.", checked(name)?)));
    }

    Ok(())
}

/// Checks that the value is equal to the expected value.
pub fn is_equal<T, U>(value: &T, expected: &U, name: &str) -> Result<(), ContractError>
where
    T: PartialEq<U> + Display,
    U: Display,
{
    if value != expected {
        return Err(ContractError::value(format!(
            "{} with value {} was not equal to {}.",
            checked(name)?,
            value,
            expected
        )));
    }

    Ok(())
}

/// Checks that the value is greater than the expected value.
pub fn is_greater_than<T, U>(value: &T, expected: &U, name: &str) -> Result<(), ContractError>
where
    T: PartialOrd<U> + Display,
    U: Display,
{
    if value <= expected {
        return Err(ContractError::value(format!(
            "{} with value {} was not greater than {}.",
            checked(name)?,
            value,
            expected
        )));
    }

    Ok(())
}

/// Checks that the value is greater than or equal to the expected value.
pub fn is_greater_than_or_equal<T, U>(
    value: &T,
    expected: &U,
    name: &str,
) -> Result<(), ContractError>
where
    T: PartialOrd<U> + Display,
    U: Display,
{
    if value < expected {
        return Err(ContractError::value(format!(
            "{} with value {} was not greater than or equal to {}.",
            checked(name)?,
            value,
            expected
        )));
    }

    Ok(())
}

/// Checks that the value, or every item of it if it is a sequence, has the given attribute.
pub fn all_have_attribute<T>(value: &T, attribute: &str, name: &str) -> Result<(), ContractError>
where
    T: ?Sized + Introspect,
{
    all_have(value, name, Member::Attribute(attribute))
}

/// Checks that the value, or every item of it if it is a sequence, has the given method.
pub fn all_have_method<T>(value: &T, method: &str, name: &str) -> Result<(), ContractError>
where
    T: ?Sized + Introspect,
{
    all_have(value, name, Member::Method(method))
}

/// Checks that the value can be invoked.
pub fn is_callable<T>(value: &T, name: &str) -> Result<(), ContractError>
where
    T: ?Sized + Introspect,
{
    if !value.is_callable() {
        return Err(ContractError::type_mismatch(format!(
            "{} with type {} was not callable.",
            checked(name)?,
            value.type_name()
        )));
    }

    Ok(())
}

/// Checks that the value is of type `T`.
///
/// Boxed `dyn Any` values are checked by the type of the value they contain.
pub fn is_instance<T, V>(value: &V, name: &str) -> Result<(), ContractError>
where
    T: Any,
    V: Any,
{
    if !concrete(value).is::<T>() {
        return Err(ContractError::type_mismatch(format!(
            "{} was not an instance of {}.",
            checked(name)?,
            short_type_name::<T>()
        )));
    }

    Ok(())
}

/// A member the subject of `all_have_*` checks must have.
#[derive(Clone, Copy)]
enum Member<'a> {
    Attribute(&'a str),
    Method(&'a str),
}

impl Member<'_> {
    fn is_present<T>(&self, value: &T) -> bool
    where
        T: ?Sized + Introspect,
    {
        match *self {
            Member::Attribute(attribute) => value.has_attribute(attribute),
            Member::Method(method) => value.has_method(method),
        }
    }

    fn describe(&self) -> (&'static str, &str) {
        match *self {
            Member::Attribute(attribute) => ("attribute", attribute),
            Member::Method(method) => ("method", method),
        }
    }
}

fn all_have<T>(value: &T, name: &str, member: Member) -> Result<(), ContractError>
where
    T: ?Sized + Introspect,
{
    let (what, member_name) = member.describe();

    match value.items() {
        Some(items) => {
            if let Some(item) = items.into_iter().find(|item| !member.is_present(*item)) {
                return Err(ContractError::attribute(format!(
                    "{} contains an item of type {} not having the expected {} '{}'.",
                    checked(name)?,
                    item.type_name(),
                    what,
                    member_name
                )));
            }
        }
        None => {
            if !member.is_present(value) {
                return Err(ContractError::attribute(format!(
                    "{} with type {} does not have the expected {} '{}'.",
                    checked(name)?,
                    value.type_name(),
                    what,
                    member_name
                )));
            }
        }
    }

    Ok(())
}
