use std::any::Any;
use std::fmt;
use std::panic::{catch_unwind, resume_unwind, AssertUnwindSafe, UnwindSafe};
use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::maybe::Maybe;

/// Error type representing a captured panic.
///
/// Clones share identity: equality compares the captured error object itself,
/// not its message, so a single captured error cloned (or re-raised and
/// re-caught) is equal to itself, while two independently captured panics
/// with identical messages are not equal.
#[derive(Clone, Error)]
#[error("Panicked: {}", .inner.message)]
pub struct TryError {
    inner: Arc<ErrorInner>,
}

struct ErrorInner {
    message: String,
    payload: Mutex<Option<Box<dyn Any + Send>>>,
}

impl TryError {
    /// Creates a new `TryError` from a panic payload.
    ///
    /// A payload that is itself a re-raised `TryError` is captured intact,
    /// so identity survives a second catch.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<TryError>() {
            Ok(captured) => return *captured,
            Err(other) => other,
        };
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic".to_string()
        };
        TryError {
            inner: Arc::new(ErrorInner {
                message,
                payload: Mutex::new(Some(payload)),
            }),
        }
    }

    /// Returns the panic message.
    pub fn message(&self) -> &str {
        &self.inner.message
    }

    /// Takes the raw panic payload, if still available.
    pub fn take_payload(&self) -> Option<Box<dyn Any + Send>> {
        let mut guard = match self.inner.payload.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.take()
    }

    /// Re-raises this error, preserving its identity through any later catch.
    fn raise(&self) -> ! {
        resume_unwind(Box::new(self.clone()))
    }
}

impl PartialEq for TryError {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for TryError {}

impl fmt::Debug for TryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryError")
            .field("message", &self.inner.message)
            .finish_non_exhaustive()
    }
}

/// The outcome of a single eager evaluation of a fallible computation.
///
/// `Try<T>` is either `Success(T)` or `Failure(TryError)`. The body passed to
/// [`Try::of`] is evaluated immediately and exactly once; a panic is caught at
/// that boundary and stored as data instead of unwinding past the wrapper.
///
/// # Examples
/// ```
/// use trywrap_core::try_type::Try;
///
/// let squared = Try::of(|| 5).map(|x| x * x);
/// assert_eq!(squared.get(), 25);
///
/// let failed: Try<i32> = Try::of(|| -> i32 { panic!("oops") });
/// assert!(failed.is_failure());
/// assert_eq!(failed.get_or_else(|| 0), 0);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub enum Try<T> {
    Success(T),
    Failure(TryError),
}

impl<T> Try<T> {
    /// Evaluates `body` immediately and exactly once, capturing any panic.
    ///
    /// The body must be `UnwindSafe`. For closures that are not, use
    /// [`Try::of_unchecked`].
    pub fn of(body: impl FnOnce() -> T + UnwindSafe) -> Self {
        match catch_unwind(body) {
            Ok(value) => Try::Success(value),
            Err(payload) => Try::Failure(TryError::from_panic(payload)),
        }
    }

    /// Like [`Try::of`], wrapping the body in `AssertUnwindSafe`.
    ///
    /// Useful for closures that capture mutable references or other
    /// non-`UnwindSafe` state.
    pub fn of_unchecked(body: impl FnOnce() -> T) -> Self {
        match catch_unwind(AssertUnwindSafe(body)) {
            Ok(value) => Try::Success(value),
            Err(payload) => Try::Failure(TryError::from_panic(payload)),
        }
    }

    /// Creates a `Success` directly.
    pub fn success(value: T) -> Self {
        Try::Success(value)
    }

    /// Creates a `Failure` directly.
    pub fn failure(error: TryError) -> Self {
        Try::Failure(error)
    }

    /// Creates a `Try` from a `Result` over `TryError`.
    pub fn from_result(result: Result<T, TryError>) -> Self {
        match result {
            Ok(value) => Try::Success(value),
            Err(error) => Try::Failure(error),
        }
    }

    /// Returns `true` if the computation succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Try::Success(_))
    }

    /// Returns `true` if the computation failed (panicked).
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the success value, if present.
    pub fn value(&self) -> Option<&T> {
        match self {
            Try::Success(value) => Some(value),
            Try::Failure(_) => None,
        }
    }

    /// Returns the captured error, if present.
    pub fn error(&self) -> Option<&TryError> {
        match self {
            Try::Success(_) => None,
            Try::Failure(error) => Some(error),
        }
    }

    /// Returns the success value; for a `Failure`, re-raises the originally
    /// captured error with its identity intact.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        match self {
            Try::Success(value) => value.clone(),
            Try::Failure(error) => error.raise(),
        }
    }

    /// Returns the success value, or computes a fallback.
    ///
    /// The fallback runs only on `Failure`; the captured error is discarded.
    pub fn get_or_else<F: FnOnce() -> T>(&self, f: F) -> T
    where
        T: Clone,
    {
        match self {
            Try::Success(value) => value.clone(),
            Try::Failure(_) => f(),
        }
    }

    /// Recovers from a failure by applying a function to the error.
    pub fn recover<F: FnOnce(&TryError) -> T>(&self, f: F) -> T
    where
        T: Clone,
    {
        match self {
            Try::Success(value) => value.clone(),
            Try::Failure(error) => f(error),
        }
    }

    /// Recovers from a failure by applying a function that returns a `Try<T>`.
    pub fn recover_with<F: FnOnce(&TryError) -> Try<T>>(&self, f: F) -> Try<T>
    where
        T: Clone,
    {
        match self {
            Try::Success(value) => Try::Success(value.clone()),
            Try::Failure(error) => f(error),
        }
    }

    /// Folds the `Try` into a single value.
    pub fn fold<U, FE: FnOnce(&TryError) -> U, FS: FnOnce(&T) -> U>(&self, on_failure: FE, on_success: FS) -> U {
        match self {
            Try::Success(value) => on_success(value),
            Try::Failure(error) => on_failure(error),
        }
    }

    /// Maps over the success value.
    ///
    /// The transform runs inside the capture boundary: a panic in `f` becomes
    /// a `Failure` wrapping the new error. A `Failure` short-circuits without
    /// invoking `f` and carries the original error untouched.
    pub fn map<V, F: FnOnce(&T) -> V>(&self, f: F) -> Try<V> {
        match self {
            Try::Success(value) => match catch_unwind(AssertUnwindSafe(|| f(value))) {
                Ok(mapped) => Try::Success(mapped),
                Err(payload) => Try::Failure(TryError::from_panic(payload)),
            },
            Try::Failure(error) => Try::Failure(error.clone()),
        }
    }

    /// Chains a computation over the success value.
    ///
    /// A `Failure` short-circuits as in [`Try::map`]. On `Success`, `f` is
    /// invoked and its result returned directly: a panic raised by `f`
    /// itself, before it returns a `Try`, is NOT re-caught here — only the
    /// inner `Try`'s own construction catches.
    pub fn flat_map<V, F: FnOnce(&T) -> Try<V>>(&self, f: F) -> Try<V> {
        match self {
            Try::Success(value) => f(value),
            Try::Failure(error) => Try::Failure(error.clone()),
        }
    }

    /// Applies a side-effect to the success value, then returns self.
    pub fn on_success<F: FnOnce(&T)>(&self, f: F) -> &Self {
        if let Try::Success(value) = self {
            f(value);
        }
        self
    }

    /// Applies a side-effect to the captured error, then returns self.
    pub fn on_failure<F: FnOnce(&TryError)>(&self, f: F) -> &Self {
        if let Try::Failure(error) = self {
            f(error);
        }
        self
    }

    /// Converts to a `Maybe`, discarding any captured error.
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Try::Success(value) => Maybe::Present(value),
            Try::Failure(_) => Maybe::Absent,
        }
    }

    /// Converts to an `Option`, discarding any captured error.
    pub fn to_option(self) -> Option<T> {
        match self {
            Try::Success(value) => Some(value),
            Try::Failure(_) => None,
        }
    }

    /// Converts to a `Result` over `TryError`.
    pub fn to_result(self) -> Result<T, TryError> {
        match self {
            Try::Success(value) => Ok(value),
            Try::Failure(error) => Err(error),
        }
    }
}

impl<T> From<Result<T, TryError>> for Try<T> {
    fn from(result: Result<T, TryError>) -> Self {
        Try::from_result(result)
    }
}

impl<T> From<Try<T>> for Result<T, TryError> {
    fn from(tried: Try<T>) -> Self {
        tried.to_result()
    }
}

impl<T: fmt::Debug> fmt::Debug for Try<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Try::Success(value) => f.debug_tuple("Success").field(value).finish(),
            Try::Failure(error) => f.debug_tuple("Failure").field(error).finish(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Try<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Try::Success(value) => write!(f, "Success({})", value),
            Try::Failure(error) => write!(f, "Failure({})", error),
        }
    }
}
