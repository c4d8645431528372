pub mod general;
pub mod utils;

#[cfg(feature = "cli")]
pub use general::flags::GlobalFlags;

pub use general::error::{CmdError, Result};
pub use utils::{create_example, create_multi_example, exit_with_error, Example};
