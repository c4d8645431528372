use thiserror::Error;

#[derive(Error, Debug)]
pub enum CmdError {
    #[error("Invalid example {field}: {reason}")]
    InvalidExample { field: String, reason: String },

    #[error("Invalid example spec '{spec}': {reason}")]
    InvalidExampleSpec { spec: String, reason: String },
}

pub type Result<T> = std::result::Result<T, CmdError>;
