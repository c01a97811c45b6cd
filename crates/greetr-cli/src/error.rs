//! Error types and exit codes for the CLI.

use thiserror::Error;

/// Process exit codes returned by the binary.
pub mod exit_codes {
    /// The run completed normally.
    pub const SUCCESS: i32 = 0;
    /// A runtime failure, e.g. standard output went away.
    pub const FAILURE: i32 = 1;
    /// An operation rejected its input.
    pub const INVALID_INPUT: i32 = 2;
}

/// Errors surfaced by the CLI layer.
#[derive(Debug, Error)]
pub enum CliError {
    /// A greeter operation rejected its input.
    #[error(transparent)]
    Greeter(#[from] greetr_core::Error),

    /// Writing output failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Maps the error to its process exit code.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Greeter(_) => exit_codes::INVALID_INPUT,
            CliError::Io(_) => exit_codes::FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeter_errors_exit_with_invalid_input() {
        let err = CliError::from(greetr_core::Error::InvalidArgument {
            value: 1_000_001,
            min: greetr_core::OPERAND_MIN,
            max: greetr_core::OPERAND_MAX,
        });
        assert_eq!(err.exit_code(), exit_codes::INVALID_INPUT);
    }

    #[test]
    fn io_errors_exit_with_failure() {
        let err = CliError::from(std::io::Error::other("stdout closed"));
        assert_eq!(err.exit_code(), exit_codes::FAILURE);
    }

    #[test]
    fn greeter_errors_keep_the_core_message() {
        let core = greetr_core::Error::InvalidArgument {
            value: 7,
            min: 0,
            max: 1,
        };
        let message = core.to_string();
        assert_eq!(CliError::from(core).to_string(), message);
    }
}
