//! Aliases for the general CLI support module, so command-side code can use
//! `utils::Example` and friends without importing `general` directly. Plain
//! re-exports, nothing added.

pub use crate::exit_with_errorf;
pub use crate::general::example::{create_example, create_multi_example, Example};
pub use crate::general::exit::exit_with_error;
