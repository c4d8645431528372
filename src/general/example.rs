use crate::general::error::{CmdError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One usage example for a command's help text: a human description plus
/// the command line it describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub desc: String,
    pub command: String,
}

pub fn create_example(desc: &str, command: &str) -> Result<Example> {
    validate_non_empty("desc", desc)?;
    validate_non_empty("command", command)?;

    Ok(Example {
        desc: desc.to_string(),
        command: command.to_string(),
    })
}

pub fn create_multi_example(pairs: &[(&str, &str)]) -> Result<Vec<Example>> {
    pairs
        .iter()
        .map(|(desc, command)| create_example(desc, command))
        .collect()
}

fn validate_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CmdError::InvalidExample {
            field: field.to_string(),
            reason: "value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

impl FromStr for Example {
    type Err = CmdError;

    // "desc=command", split on the first '='
    fn from_str(spec: &str) -> Result<Example> {
        match spec.split_once('=') {
            Some((desc, command)) => {
                create_example(desc, command).map_err(|e| CmdError::InvalidExampleSpec {
                    spec: spec.to_string(),
                    reason: e.to_string(),
                })
            }
            None => Err(CmdError::InvalidExampleSpec {
                spec: spec.to_string(),
                reason: "expected DESC=COMMAND".to_string(),
            }),
        }
    }
}

impl fmt::Display for Example {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  # {}\n  {}", self.desc, self.command)
    }
}
