pub use crate::maybe::Maybe;
pub use crate::pure::Pure;
pub use crate::try_type::{Try, TryError};
