//! Error type shared by the greeter operations.

use thiserror::Error;

/// Convenience alias for greeter results.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by greeter operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An operand fell outside the accepted range.
    #[error("operand {value} is outside the allowed range [{min}, {max}]")]
    InvalidArgument {
        /// The offending operand.
        value: i32,
        /// Smallest accepted operand.
        min: i32,
        /// Largest accepted operand.
        max: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_message_names_value_and_bounds() {
        let err = Error::InvalidArgument {
            value: 1_000_001,
            min: -1_000_000,
            max: 1_000_000,
        };
        let message = err.to_string();
        assert!(message.contains("1000001"));
        assert!(message.contains("-1000000"));
        assert!(message.contains("1000000"));
    }
}
