//! Error handling for the amdwrap CLI.
//!
//! - **Top-level errors** (`CliError`) represent broad categories of failures
//! - **Domain-specific errors** (`ConfigError`) carry detailed context
//! - **Error conversion** is automatic via `#[from]` attributes
//! - **Context helpers** ([`ResultExt`]) attach paths and hints
//!
//! # Example
//!
//! ```rust,no_run
//! use amdwrap_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_module(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path).with_path(path)
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (file not found, invalid values, ...)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Input file or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Walking an input directory failed
    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// A single module could not be transformed
    #[error("Transform error in {}: {source}", .file.display())]
    Transform {
        /// Module that failed
        file: PathBuf,
        /// Underlying transformation error
        #[source]
        source: amdwrap::TransformError,
    },

    /// One or more modules failed; details were already reported
    #[error("{failed} of {total} module(s) failed to transform")]
    ModulesFailed {
        /// Failed module count
        failed: usize,
        /// Total module count
        total: usize,
    },

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file doesn't exist at the given location
    #[error("Config file not found: {}\n\nHint: Create an amdwrap.config.json file or check the --config path", .0.display())]
    NotFound(PathBuf),

    /// Config sources could not be merged into a valid configuration
    #[error("Invalid configuration: {0}\n\nHint: Check amdwrap.config.json syntax and field types")]
    Extract(#[from] Box<figment::Error>),

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Append a hint to the error message.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;

    /// Prefix the error message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}

/// Convert a CLI error into a miette report for display at exit.
///
/// Transformation errors keep their diagnostic code and help text.
pub fn cli_error_to_miette(err: CliError) -> miette::Report {
    match err {
        CliError::Transform { file, source } => {
            miette::Report::new(source).wrap_err(format!("Failed to transform {}", file.display()))
        }
        other => miette::miette!("{}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_not_found() {
        let err = ConfigError::NotFound(PathBuf::from("amdwrap.config.json"));
        let msg = err.to_string();
        assert!(msg.contains("Config file not found"));
        assert!(msg.contains("amdwrap.config.json"));
        assert!(msg.contains("Hint:"));
    }

    #[test]
    fn test_config_error_invalid_value() {
        let err = ConfigError::InvalidValue {
            field: "loader.define".to_string(),
            value: "sap..define".to_string(),
            hint: "Use a dotted path like sap.ui.define".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Invalid value for 'loader.define'"));
        assert!(msg.contains("sap..define"));
    }

    #[test]
    fn test_cli_error_from_config_error() {
        let cli_err: CliError = ConfigError::NotFound(PathBuf::from("x.json")).into();
        assert!(matches!(cli_err, CliError::Config(_)));
    }

    #[test]
    fn test_modules_failed_message() {
        let err = CliError::ModulesFailed { failed: 2, total: 5 };
        assert_eq!(err.to_string(), "2 of 5 module(s) failed to transform");
    }

    #[test]
    fn test_result_ext_with_path() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));
        let err = result.with_path("/test/Main.js").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_result_ext_with_hint() {
        let result: std::result::Result<(), ConfigError> =
            Err(ConfigError::NotFound(PathBuf::from("test.json")));
        let err = result.with_hint("Try creating the file").unwrap_err();
        assert!(err.to_string().contains("Hint: Try creating the file"));
    }

    #[test]
    fn test_result_ext_context() {
        let result: std::result::Result<(), ConfigError> =
            Err(ConfigError::NotFound(PathBuf::from("test.json")));
        let err = result.context("Failed to load").unwrap_err();
        assert!(err.to_string().starts_with("Failed to load: "));
    }

    #[test]
    fn test_transform_error_report_keeps_file() {
        let err = CliError::Transform {
            file: PathBuf::from("src/Broken.js"),
            source: amdwrap::TransformError::Parse(amdwrap_gen::GenError::ParseFailed {
                filename: "src/Broken.js".to_string(),
                messages: vec!["Unexpected token".to_string()],
            }),
        };
        let report = cli_error_to_miette(err);
        assert!(report.to_string().contains("src/Broken.js"));
    }
}
