//! Resolves how the subject of a check is referred to in messages.
//!
//! The check macros capture the source text of the checked expression at compile time and pass
//! it here together with the optional label the caller supplied. The plain check functions take
//! the resolved name directly.

use crate::error::ContractError;

/// Picks the name to use for the subject of a check.
///
/// A `label` that is not blank wins, otherwise `name` (the source text of the subject
/// expression) is used.
///
/// ```rust
/// use code_contracts::subject::resolve;
///
/// assert_eq!(resolve("a > 0", "a"), "a > 0");
/// assert_eq!(resolve(None, "a"), "a");
/// assert_eq!(resolve("", "a"), "a");
/// assert_eq!(resolve("  ", "a"), "a");
/// ```
pub fn resolve<'a>(label: impl Into<Option<&'a str>>, name: &'a str) -> &'a str {
    match label.into() {
        Some(label) if !label.trim().is_empty() => label,
        _ => name,
    }
}

/// Makes sure a resolved name can be used in a message.
pub(crate) fn checked(name: &str) -> Result<&str, ContractError> {
    if name.trim().is_empty() {
        Err(ContractError::internal_format(
            "The call to the code contract had an unexpected format.",
        ))
    } else {
        Ok(name)
    }
}
