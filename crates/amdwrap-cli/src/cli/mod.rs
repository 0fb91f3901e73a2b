//! Command-line interface definition.
//!
//! - `amdwrap transform` - rewrite modules and write the result
//! - `amdwrap check` - dry run reporting what would happen to each module

mod commands;
mod validation;

use clap::Parser;

pub use commands::{CheckArgs, Command, LoaderArgs, TransformArgs};
pub use validation::{parse_dotted_path, parse_extension};

/// amdwrap - rewrite ES modules into AMD loader define calls
#[derive(Parser, Debug)]
#[command(
    name = "amdwrap",
    version,
    about = "Rewrite ES module import/export syntax into AMD loader define calls",
    long_about = "amdwrap rewrites modules authored with import/export into a single\n\
                  loader define call (sap.ui.define by default) with the dependencies\n\
                  injected as factory parameters. Modules that are already wrapped,\n\
                  plain scripts and modules opting out are left untouched."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
