//! Command-line argument definitions.

use std::ffi::OsString;

use clap::Parser;

/// Command-line arguments for the greetr binary.
///
/// The demo takes no meaningful arguments; anything passed on the command
/// line is captured here and ignored.
#[derive(Debug, Parser)]
#[command(name = "greetr", version, about = "Runs a fixed greeting demo")]
pub struct Cli {
    /// Extra arguments, accepted and ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub ignored: Vec<OsString>,
}
