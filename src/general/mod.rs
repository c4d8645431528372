pub mod error;
pub mod example;
pub mod exit;
#[cfg(feature = "cli")]
pub mod flags;
pub mod logger;
