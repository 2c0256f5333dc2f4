//! An append-only record of the calls made to a test double.
//!
//! Test doubles own a [`CallLog`] and record every invocation in it. Assertions such as
//! [`not_called_with`](crate::assertion::not_called_with) only ever read it.

use std::fmt;

/// The arguments of a single recorded call.
#[derive(Clone, Debug)]
pub struct Call<A> {
    /// The positional arguments, in order.
    positional: Vec<A>,
    /// The keyword arguments, in the order they were given.
    keyword: Vec<(String, A)>,
}

impl<A> Call<A> {
    /// A call without arguments.
    pub fn new() -> Self {
        Call {
            positional: Vec::new(),
            keyword: Vec::new(),
        }
    }

    /// Adds a positional argument.
    pub fn arg(mut self, value: A) -> Self {
        self.positional.push(value);
        self
    }

    /// Adds a keyword argument.
    ///
    /// Giving a key twice replaces the earlier value, keys are unique within a call.
    pub fn kwarg(mut self, key: impl Into<String>, value: A) -> Self {
        let key = key.into();

        match self.keyword.iter().position(|(existing, _)| *existing == key) {
            Some(index) => self.keyword[index].1 = value,
            None => self.keyword.push((key, value)),
        }
        self
    }

    /// The positional arguments.
    pub fn positional(&self) -> &[A] {
        &self.positional
    }

    /// The keyword arguments.
    pub fn keyword(&self) -> &[(String, A)] {
        &self.keyword
    }
}

impl<A> Default for Call<A> {
    fn default() -> Self {
        Call::new()
    }
}

impl<A: PartialEq> Call<A> {
    /// Returns `true` if both calls have the same arguments.
    ///
    /// Positional arguments must match in order, keyword arguments in any order.
    pub fn matches(&self, other: &Call<A>) -> bool {
        self.positional == other.positional
            && self.keyword.len() == other.keyword.len()
            && self.keyword.iter().all(|(key, value)| {
                other
                    .keyword
                    .iter()
                    .any(|(other_key, other_value)| key == other_key && value == other_value)
            })
    }
}

impl<A: PartialEq> PartialEq for Call<A> {
    fn eq(&self, other: &Self) -> bool {
        self.matches(other)
    }
}

impl<A: fmt::Display> fmt::Display for Call<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let positional = self.positional.iter().map(|value| value.to_string());
        let keyword = self
            .keyword
            .iter()
            .map(|(key, value)| format!("{}={}", key, value));

        write!(
            f,
            "({})",
            positional.chain(keyword).collect::<Vec<_>>().join(", ")
        )
    }
}

/// The calls recorded for one callable, oldest first.
#[derive(Clone, Debug)]
pub struct CallLog<A> {
    /// The recorded calls.
    calls: Vec<Call<A>>,
}

impl<A> CallLog<A> {
    /// An empty log.
    pub fn new() -> Self {
        CallLog { calls: Vec::new() }
    }

    /// Appends a call to the log.
    pub fn record(&mut self, call: Call<A>) {
        self.calls.push(call);
    }

    /// All recorded calls.
    pub fn calls(&self) -> &[Call<A>] {
        &self.calls
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}

impl<A> Default for CallLog<A> {
    fn default() -> Self {
        CallLog::new()
    }
}

impl<A: PartialEq> CallLog<A> {
    /// Returns `true` if any recorded call has exactly the given arguments.
    pub fn was_called_with(&self, call: &Call<A>) -> bool {
        self.calls.iter().any(|recorded| recorded.matches(call))
    }
}
