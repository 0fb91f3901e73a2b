use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::validation::{parse_dotted_path, parse_extension};

/// Available amdwrap subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rewrite modules into loader define calls
    ///
    /// Inputs may be files or directories. Directories are searched
    /// recursively for files with a matching extension.
    Transform(TransformArgs),

    /// Report what would happen to each module without writing anything
    Check(CheckArgs),
}

/// Options shared by every command that runs the transformation
#[derive(Args, Debug, Clone, Default)]
pub struct LoaderArgs {
    /// Path to the config file (default: ./amdwrap.config.json if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Loader define function, as a dotted path
    #[arg(long, value_name = "PATH", value_parser = parse_dotted_path)]
    pub define: Option<String>,

    /// Loader require function used for import(), as a dotted path
    #[arg(long, value_name = "PATH", value_parser = parse_dotted_path)]
    pub require: Option<String>,

    /// Do not report advisory warnings
    #[arg(long)]
    pub no_warnings: bool,

    /// File extensions searched in directories (repeatable)
    #[arg(short = 'e', long = "ext", value_name = "EXT", value_parser = parse_extension)]
    pub extensions: Vec<String>,
}

/// Arguments for the transform command
#[derive(Args, Debug, Clone)]
pub struct TransformArgs {
    /// Files or directories to transform
    ///
    /// Examples:
    ///   amdwrap transform src/Component.js
    ///   amdwrap transform src -o dist
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Output directory mirroring the input tree
    ///
    /// Without it a single input file is written to stdout.
    #[arg(short = 'o', long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Print string literals with single quotes
    #[arg(long)]
    pub single_quote: bool,

    /// Minify the printed output
    #[arg(long)]
    pub minify: bool,

    #[command(flatten)]
    pub loader: LoaderArgs,
}

/// Arguments for the check command
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Files or directories to check
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    #[command(flatten)]
    pub loader: LoaderArgs,
}
