//! trywrap: Functional value wrappers for Rust.
//!
//! This is the umbrella crate that re-exports all trywrap functionality.
//!
//! # Quick Start
//! ```
//! use trywrap::prelude::*;
//!
//! let squared = Try::of(|| 5).map(|x| x * x);
//! assert_eq!(squared.get(), 25);
//!
//! let maybe = squared.to_maybe();
//! assert!(maybe.is_present());
//! ```

pub use trywrap_core::prelude;
pub use trywrap_core::*;
