//! trywrap-core: Functional value wrappers for Rust.
//!
//! This crate provides two small composable containers: `Maybe<T>`, an
//! explicit optional value, and `Try<T>`, the eagerly captured outcome of a
//! fallible computation.

pub mod maybe;
pub mod prelude;
pub mod pure;
pub mod try_type;
