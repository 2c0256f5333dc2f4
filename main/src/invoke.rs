//! Calling a callable with a tuple of arguments.

/// A callable that can be invoked with the arguments in `Args`.
///
/// This is implemented for every `FnOnce` returning a `Result` and taking up to six arguments,
/// with `Args` being the tuple of those arguments.
pub trait Invoke<Args> {
    /// The value returned on success.
    type Output;
    /// The error returned on failure.
    type Error;

    /// Invokes the callable.
    fn invoke(self, args: Args) -> Result<Self::Output, Self::Error>;
}

macro_rules! impl_invoke {
    ($($ty:ident $var:ident),*) => {
        impl<Func, T, E, $($ty,)*> Invoke<($($ty,)*)> for Func
        where
            Func: FnOnce($($ty),*) -> Result<T, E>,
        {
            type Output = T;
            type Error = E;

            fn invoke(self, ($($var,)*): ($($ty,)*)) -> Result<T, E> {
                self($($var),*)
            }
        }
    };
}

impl_invoke!();
impl_invoke!(A1 a1);
impl_invoke!(A1 a1, A2 a2);
impl_invoke!(A1 a1, A2 a2, A3 a3);
impl_invoke!(A1 a1, A2 a2, A3 a3, A4 a4);
impl_invoke!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5);
impl_invoke!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6);
