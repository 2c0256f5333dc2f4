//! This crate defines most tests for the `code-contracts` crate.
//!
//! These are defined in a different crate, because otherwise `proc-macro-crate` does not work
//! properly.

#[cfg(test)]
mod contracts;

#[cfg(test)]
mod tests {
    #[test]
    fn pass() {
        let t = trybuild::TestCases::new();
        t.pass("pass/*.rs");
    }
}
