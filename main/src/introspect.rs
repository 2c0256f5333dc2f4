//! Runtime knowledge about the shape of a value.
//!
//! Rust has no runtime attribute lookup, so the attribute and method checks work on values
//! describing themselves through [`Introspect`]. Structs usually derive it:
//!
//! ```rust
//! use code_contracts::Introspect;
//!
//! #[derive(Introspect)]
//! #[introspect(methods(area))]
//! struct Square {
//!     side: u32,
//! }
//!
//! impl Square {
//!     fn area(&self) -> u32 {
//!         self.side * self.side
//!     }
//! }
//!
//! let square = Square { side: 2 };
//!
//! assert!(square.has_attribute("side"));
//! assert!(square.has_method("area"));
//! assert!(!square.has_method("side"));
//! # assert_eq!(square.area(), 4);
//! ```

use std::collections::VecDeque;

use crate::type_name::short_type_name;

/// A value that can describe its attributes and methods.
pub trait Introspect {
    /// The name of the value's type as shown in messages.
    fn type_name(&self) -> String {
        short_type_name::<Self>()
    }

    /// Returns `true` if the value has an attribute of the given name.
    ///
    /// Methods count as attributes.
    fn has_attribute(&self, _name: &str) -> bool {
        false
    }

    /// Returns `true` if the value has an invocable attribute of the given name.
    fn has_method(&self, _name: &str) -> bool {
        false
    }

    /// Returns `true` if the value itself can be invoked.
    fn is_callable(&self) -> bool {
        false
    }

    /// The items of the value, if it is a sequence.
    ///
    /// Returns `None` for single objects. Strings are single objects.
    fn items(&self) -> Option<Vec<&dyn Introspect>> {
        None
    }
}

impl Introspect for str {}

impl Introspect for String {}

impl<T: Introspect> Introspect for [T] {
    fn items(&self) -> Option<Vec<&dyn Introspect>> {
        Some(self.iter().map(|item| item as &dyn Introspect).collect())
    }
}

impl<T: Introspect, const N: usize> Introspect for [T; N] {
    fn items(&self) -> Option<Vec<&dyn Introspect>> {
        self[..].items()
    }
}

impl<T: Introspect> Introspect for Vec<T> {
    fn items(&self) -> Option<Vec<&dyn Introspect>> {
        self[..].items()
    }
}

impl<T: Introspect> Introspect for VecDeque<T> {
    fn items(&self) -> Option<Vec<&dyn Introspect>> {
        Some(self.iter().map(|item| item as &dyn Introspect).collect())
    }
}

macro_rules! forward_introspect {
    ($($pointer:ty),*) => {
        $(
            impl<T: ?Sized + Introspect> Introspect for $pointer {
                fn type_name(&self) -> String {
                    (**self).type_name()
                }

                fn has_attribute(&self, name: &str) -> bool {
                    (**self).has_attribute(name)
                }

                fn has_method(&self, name: &str) -> bool {
                    (**self).has_method(name)
                }

                fn is_callable(&self) -> bool {
                    (**self).is_callable()
                }

                fn items(&self) -> Option<Vec<&dyn Introspect>> {
                    (**self).items()
                }
            }
        )*
    };
}

forward_introspect!(&T, &mut T, Box<T>);

/// The name of the method every callable has.
const CALL: &str = "call";

macro_rules! impl_callable {
    ($($ty:ident),*) => {
        impl<R, $($ty,)*> Introspect for fn($($ty),*) -> R {
            fn has_attribute(&self, name: &str) -> bool {
                name == CALL
            }

            fn has_method(&self, name: &str) -> bool {
                name == CALL
            }

            fn is_callable(&self) -> bool {
                true
            }
        }

        impl<R, $($ty,)*> Introspect for dyn Fn($($ty),*) -> R {
            fn has_attribute(&self, name: &str) -> bool {
                name == CALL
            }

            fn has_method(&self, name: &str) -> bool {
                name == CALL
            }

            fn is_callable(&self) -> bool {
                true
            }
        }
    };
}

impl_callable!();
impl_callable!(A1);
impl_callable!(A1, A2);
impl_callable!(A1, A2, A3);
impl_callable!(A1, A2, A3, A4);
impl_callable!(A1, A2, A3, A4, A5);
impl_callable!(A1, A2, A3, A4, A5, A6);
