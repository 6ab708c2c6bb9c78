use crate::maybe::Maybe;
use crate::try_type::Try;

/// A trait for lifting a value into a monadic/applicative context.
///
/// Equivalent to Haskell's `pure` / `return` or Scala's `Some`, `Success`.
///
/// # Examples
/// ```
/// use trywrap_core::maybe::Maybe;
/// use trywrap_core::pure::Pure;
///
/// let maybe: Maybe<i32> = Pure::pure(42);
/// assert_eq!(maybe, Maybe::of(42));
/// ```
pub trait Pure<A> {
    fn pure(a: A) -> Self;
}

impl<A> Pure<A> for Maybe<A> {
    fn pure(a: A) -> Self {
        Maybe::Present(a)
    }
}

impl<A> Pure<A> for Try<A> {
    fn pure(a: A) -> Self {
        Try::Success(a)
    }
}
