//! amdwrap CLI library.
//!
//! The `amdwrap` binary is a thin wrapper around these modules; they are
//! exposed so commands can be driven from tests.
//!
//! - [`cli`] - argument definitions
//! - [`config`] - layered configuration (defaults, file, env, flags)
//! - [`commands`] - `transform` and `check`
//! - [`ui`] - stderr status output
//! - [`logger`] - tracing subscriber setup
//! - [`error`] - error types and miette conversion

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result, ResultExt};
