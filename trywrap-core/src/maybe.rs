use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An explicit optional container with two variants: `Present` and `Absent`.
///
/// `Maybe<T>` makes the presence or absence of a value part of the type,
/// mirroring Scala's `Option`. Unlike `Option`, `Maybe::of` never coalesces:
/// wrapping a `None`-like sentinel still produces a `Present`.
///
/// # Examples
/// ```
/// use trywrap_core::maybe::Maybe;
///
/// let present = Maybe::of(42);
/// assert!(present.is_present());
/// assert_eq!(present.map(|x| x * 2), Maybe::of(84));
///
/// let absent: Maybe<i32> = Maybe::empty();
/// assert!(absent.is_empty());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Maybe<T> {
    Absent,
    Present(T),
}

impl<T> Maybe<T> {
    /// Creates an `Absent` value.
    pub fn empty() -> Self {
        Maybe::Absent
    }

    /// Creates a `Present` value.
    ///
    /// Always `Present`, even when `value` is itself a `None`-like sentinel:
    /// `Maybe::of(None::<i32>)` is `Present(None)`.
    pub fn of(value: T) -> Self {
        Maybe::Present(value)
    }

    /// Creates a `Maybe` from an `Option`, one-to-one.
    pub fn from_option(option: Option<T>) -> Self {
        match option {
            Some(v) => Maybe::Present(v),
            None => Maybe::Absent,
        }
    }

    /// Returns `true` if this is `Absent`.
    pub fn is_empty(&self) -> bool {
        matches!(self, Maybe::Absent)
    }

    /// Returns `true` if this is `Present`.
    pub fn is_present(&self) -> bool {
        !self.is_empty()
    }

    /// Returns the contained value.
    ///
    /// # Panics
    /// Panics when called on `Absent`. This is the programmer-error channel:
    /// check `is_present` first, or use [`Maybe::value`] for a non-panicking
    /// accessor.
    pub fn get(&self) -> &T {
        match self {
            Maybe::Present(v) => v,
            Maybe::Absent => panic!("Maybe::get called on Absent"),
        }
    }

    /// Returns the contained value, or `None` when `Absent`. Never panics.
    pub fn value(&self) -> Option<&T> {
        match self {
            Maybe::Present(v) => Some(v),
            Maybe::Absent => None,
        }
    }

    /// Converts to an `Option`, losslessly.
    pub fn to_option(self) -> Option<T> {
        match self {
            Maybe::Present(v) => Some(v),
            Maybe::Absent => None,
        }
    }

    /// Returns the contained value, or computes one from a closure.
    pub fn get_or_else<F: FnOnce() -> T>(&self, f: F) -> T
    where
        T: Clone,
    {
        match self {
            Maybe::Present(v) => v.clone(),
            Maybe::Absent => f(),
        }
    }

    /// Folds the `Maybe` into a single value.
    pub fn fold<U, FA: FnOnce() -> U, FP: FnOnce(&T) -> U>(&self, on_absent: FA, on_present: FP) -> U {
        match self {
            Maybe::Present(v) => on_present(v),
            Maybe::Absent => on_absent(),
        }
    }

    /// Maps over the contained value.
    ///
    /// `f` is invoked at most once, synchronously, only on `Present`;
    /// `Absent` short-circuits.
    pub fn map<V, F: FnOnce(&T) -> V>(&self, f: F) -> Maybe<V> {
        match self {
            Maybe::Present(v) => Maybe::Present(f(v)),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Chains a computation over the contained value.
    ///
    /// Same short-circuit rule as [`Maybe::map`], but `f` itself returns a
    /// `Maybe`, so no re-wrapping occurs: the result is exactly what `f`
    /// produced.
    pub fn flat_map<V, F: FnOnce(&T) -> Maybe<V>>(&self, f: F) -> Maybe<V> {
        match self {
            Maybe::Present(v) => f(v),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Applies a side-effect if `Present`.
    pub fn tap_present<F: FnOnce(&T)>(&self, f: F) -> &Self {
        if let Maybe::Present(v) = self {
            f(v);
        }
        self
    }

    /// Applies a side-effect if `Absent`.
    pub fn tap_absent<F: FnOnce()>(&self, f: F) -> &Self {
        if self.is_empty() {
            f();
        }
        self
    }

    /// Returns an iterator over the contained value (0 or 1 elements).
    pub fn iter(&self) -> MaybeIter<'_, T> {
        MaybeIter { value: self.value() }
    }
}

/// Iterator over the contained value of a `Maybe` (0 or 1 elements).
pub struct MaybeIter<'a, T> {
    value: Option<&'a T>,
}

impl<'a, T> Iterator for MaybeIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.value.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = if self.value.is_some() { 1 } else { 0 };
        (n, Some(n))
    }
}

impl<'a, T> ExactSizeIterator for MaybeIter<'a, T> {}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_option().into_iter()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        Maybe::from_option(option)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.to_option()
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Present(v) => f.debug_tuple("Present").field(v).finish(),
            Maybe::Absent => f.write_str("Absent"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Present(v) => write!(f, "Present({})", v),
            Maybe::Absent => f.write_str("Absent"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn of_is_present() {
        let m = Maybe::of(42);
        assert!(m.is_present());
        assert!(!m.is_empty());
        assert_eq!(*m.get(), 42);
    }

    #[test]
    fn empty_is_absent() {
        let m: Maybe<i32> = Maybe::empty();
        assert!(m.is_empty());
        assert!(!m.is_present());
    }

    #[test]
    #[should_panic(expected = "Maybe::get called on Absent")]
    fn get_on_absent_panics() {
        let m: Maybe<i32> = Maybe::empty();
        m.get();
    }

    #[test]
    fn of_does_not_coalesce_sentinels() {
        let m = Maybe::of(None::<i32>);
        assert!(m.is_present());
        assert_eq!(*m.get(), None);
    }

    #[test]
    fn value_on_present() {
        let m = Maybe::of(42);
        assert_eq!(m.value(), Some(&42));
    }

    #[test]
    fn value_on_absent() {
        let m: Maybe<i32> = Maybe::empty();
        assert_eq!(m.value(), None);
    }

    #[test]
    fn map_applies_on_present() {
        let m = Maybe::of(5);
        assert_eq!(m.map(|x| x * x), Maybe::of(25));
    }

    #[test]
    fn map_short_circuits_on_absent() {
        let m: Maybe<i32> = Maybe::empty();
        let mut invoked = false;
        let mapped = m.map(|_| {
            invoked = true;
            0
        });
        assert!(mapped.is_empty());
        assert!(!invoked);
    }

    #[test]
    fn flat_map_on_present() {
        let m = Maybe::of(5);
        assert_eq!(m.flat_map(|x| Maybe::of(x * x)), Maybe::of(25));
    }

    #[test]
    fn flat_map_returns_exactly_what_f_produced() {
        let m = Maybe::of(5);
        let out: Maybe<i32> = m.flat_map(|_| Maybe::empty());
        assert!(out.is_empty());
    }

    #[test]
    fn flat_map_short_circuits_on_absent() {
        let m: Maybe<i32> = Maybe::empty();
        let mut invoked = false;
        let out = m.flat_map(|_| {
            invoked = true;
            Maybe::of(0)
        });
        assert!(out.is_empty());
        assert!(!invoked);
    }

    #[test]
    fn option_round_trip_present() {
        let m = Maybe::from_option(Maybe::of(42).to_option());
        assert_eq!(*m.get(), 42);
    }

    #[test]
    fn option_round_trip_absent() {
        let m = Maybe::from_option(Maybe::<i32>::empty().to_option());
        assert!(m.is_empty());
    }

    #[test]
    fn from_option_maps_one_to_one() {
        assert_eq!(Maybe::from_option(Some(1)), Maybe::of(1));
        assert_eq!(Maybe::from_option(None::<i32>), Maybe::empty());
    }

    #[test]
    fn from_impls_convert_both_ways() {
        let m: Maybe<i32> = Some(7).into();
        assert_eq!(m, Maybe::of(7));
        let o: Option<i32> = Maybe::of(7).into();
        assert_eq!(o, Some(7));
        let o: Option<i32> = Maybe::empty().into();
        assert_eq!(o, None);
    }

    #[test]
    fn get_or_else_present() {
        assert_eq!(Maybe::of(42).get_or_else(|| 0), 42);
    }

    #[test]
    fn get_or_else_absent() {
        assert_eq!(Maybe::<i32>::empty().get_or_else(|| 0), 0);
    }

    #[test]
    fn fold_both_sides() {
        assert_eq!(Maybe::of(42).fold(|| "absent".to_string(), |v| format!("present: {}", v)), "present: 42");
        assert_eq!(Maybe::<i32>::empty().fold(|| "absent".to_string(), |v| format!("present: {}", v)), "absent");
    }

    #[test]
    fn tap_present_runs_side_effect() {
        let mut seen = 0;
        Maybe::of(42).tap_present(|v| seen = *v);
        assert_eq!(seen, 42);
    }

    #[test]
    fn tap_absent_runs_side_effect() {
        let mut called = false;
        Maybe::<i32>::empty().tap_absent(|| called = true);
        assert!(called);
    }

    #[test]
    fn equality_delegates_to_value() {
        assert_eq!(Maybe::of(5), Maybe::of(5));
        assert_ne!(Maybe::of(5), Maybe::of(6));
        assert_eq!(Maybe::<i32>::empty(), Maybe::empty());
        assert_ne!(Maybe::of(5), Maybe::empty());
    }

    #[test]
    fn iter_yields_present_value() {
        let m = Maybe::of(42);
        let collected: Vec<&i32> = m.iter().collect();
        assert_eq!(collected, vec![&42]);
    }

    #[test]
    fn iter_yields_nothing_for_absent() {
        let m: Maybe<i32> = Maybe::empty();
        assert_eq!(m.iter().count(), 0);
    }

    #[test]
    fn into_iterator_consumes() {
        let collected: Vec<i32> = Maybe::of(42).into_iter().collect();
        assert_eq!(collected, vec![42]);
    }

    #[test]
    fn debug_and_display_formatting() {
        assert_eq!(format!("{:?}", Maybe::of(5)), "Present(5)");
        assert_eq!(format!("{:?}", Maybe::<i32>::empty()), "Absent");
        assert_eq!(format!("{}", Maybe::of(5)), "Present(5)");
        assert_eq!(format!("{}", Maybe::<i32>::empty()), "Absent");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let present = Maybe::of(5);
        let json = serde_json::to_string(&present).unwrap();
        let back: Maybe<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, present);

        let absent: Maybe<i32> = Maybe::empty();
        let json = serde_json::to_string(&absent).unwrap();
        let back: Maybe<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, absent);
    }
}
