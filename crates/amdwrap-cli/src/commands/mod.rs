//! Command implementations for the amdwrap CLI.
//!
//! - [`transform`] - rewrite modules and write the result
//! - [`check`] - dry run over the same inputs
//!
//! Each command provides an `execute` function that takes the parsed
//! arguments and returns a Result.

pub mod check;
pub mod discover;
pub mod transform;

pub use check::execute as check_execute;
pub use discover::{InputFile, discover};
pub use transform::execute as transform_execute;
