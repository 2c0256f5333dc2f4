//! Readable names for types and callables.

use std::any::{self, Any};

/// Returns the name of `T` with all module paths removed.
///
/// ```rust
/// use code_contracts::type_name::short_type_name;
///
/// assert_eq!(short_type_name::<i32>(), "i32");
/// assert_eq!(short_type_name::<Vec<String>>(), "Vec<String>");
/// assert_eq!(short_type_name::<Option<&str>>(), "Option<&str>");
/// ```
pub fn short_type_name<T: ?Sized>() -> String {
    shorten(any::type_name::<T>())
}

/// Returns the name used to refer to a callable in assertion messages.
///
/// Function items are referred to by their own name, closures as `closure`.
pub(crate) fn callable_name<F>() -> String {
    let full = any::type_name::<F>();

    if full.ends_with("{{closure}}") {
        "closure".into()
    } else {
        shorten(full)
    }
}

/// Strips the module path from every path in a type name.
fn shorten(full: &str) -> String {
    let mut output = String::with_capacity(full.len());
    let mut path = String::new();

    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            path.push(c);
        } else {
            output.push_str(last_segment(&path));
            path.clear();
            output.push(c);
        }
    }
    output.push_str(last_segment(&path));

    output
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

/// Looks through boxed trait objects to the value they contain.
pub(crate) fn concrete(value: &dyn Any) -> &dyn Any {
    if let Some(boxed) = value.downcast_ref::<Box<dyn Any>>() {
        concrete(&**boxed)
    } else if let Some(boxed) = value.downcast_ref::<Box<dyn Any + Send>>() {
        concrete(&**boxed)
    } else {
        value
    }
}
