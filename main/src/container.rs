//! The container shapes that can be empty.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// A value that may be considered empty by [`is_not_empty`](crate::contract::is_not_empty).
///
/// A value is empty if it is absent (`None`), an empty string or a sized container of length
/// `0`. Any other value is never empty.
pub trait MaybeEmpty {
    /// Returns `true` if the value is considered empty.
    fn is_empty_value(&self) -> bool;
}

impl MaybeEmpty for str {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl MaybeEmpty for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> MaybeEmpty for [T] {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T, const N: usize> MaybeEmpty for [T; N] {
    fn is_empty_value(&self) -> bool {
        N == 0
    }
}

impl<T> MaybeEmpty for Option<T>
where
    T: MaybeEmpty,
{
    fn is_empty_value(&self) -> bool {
        match self {
            Some(value) => value.is_empty_value(),
            None => true,
        }
    }
}

impl<T> MaybeEmpty for &T
where
    T: ?Sized + MaybeEmpty,
{
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl<T> MaybeEmpty for Box<T>
where
    T: ?Sized + MaybeEmpty,
{
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

macro_rules! impl_sized_containers {
    ($($container:ident<$($param:ident),*>),* $(,)?) => {
        $(
            impl<$($param),*> MaybeEmpty for $container<$($param),*> {
                fn is_empty_value(&self) -> bool {
                    self.is_empty()
                }
            }
        )*
    };
}

impl_sized_containers! {
    Vec<T>,
    VecDeque<T>,
    HashMap<K, V, S>,
    HashSet<T, S>,
    BTreeMap<K, V>,
    BTreeSet<T>,
}

macro_rules! impl_never_empty {
    ($($ty:ty),* $(,)?) => {
        $(
            impl MaybeEmpty for $ty {
                fn is_empty_value(&self) -> bool {
                    false
                }
            }
        )*
    };
}

impl_never_empty! {
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
}
