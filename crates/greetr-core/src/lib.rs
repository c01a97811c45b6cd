//! Pure greeting demo logic for greetr - no IO, no UI.
//!
//! This crate owns the demo's operations and their validation rules;
//! binaries layer argument handling, logging, and output on top.

pub mod error;
pub mod greeter;
pub mod summary;

pub use error::{Error, Result};
pub use greeter::{bounded_sum, greeting, reverse, GREETING, OPERAND_MAX, OPERAND_MIN};
pub use summary::RunSummary;
