use std::fmt::Display;

/// Reports the error on stderr and terminates the process with status 1.
pub fn exit_with_error(err: impl Display) -> ! {
    tracing::error!("{}", err);
    eprintln!("Error: {}", err);
    std::process::exit(1);
}

/// Formatted variant of [`exit_with_error`].
#[macro_export]
macro_rules! exit_with_errorf {
    ($($arg:tt)*) => {
        $crate::general::exit::exit_with_error(format!($($arg)*))
    };
}
