//! Outcome summary for one demo run.

use serde::{Deserialize, Serialize};

/// Results of the fixed demo sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// The greeting message that was produced.
    pub greeting: String,
    /// The bounded sum of the demo operands.
    pub sum: i32,
    /// The reversed demo string, `None` when the input was absent.
    pub reversed: Option<String>,
}
