//! Error and advisory types for module transformation.

use amdwrap_gen::GenError;
use miette::Diagnostic;
use thiserror::Error;

/// Errors that abort the transformation of a single module.
///
/// Nothing here aborts a whole run: the driver reports the failing module and
/// moves on to the next one.
#[derive(Error, Debug, Diagnostic)]
pub enum TransformError {
    /// The source could not be parsed into a tree
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(GenError),

    /// Host options are unusable (bad loader path, ...)
    #[error("Invalid transform options: {0}")]
    #[diagnostic(code(amdwrap::invalid_options))]
    InvalidOptions(#[source] GenError),

    /// Building or printing output failed
    #[error(transparent)]
    #[diagnostic(transparent)]
    Gen(GenError),
}

/// Non-fatal advisories raised while transforming a module.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum TransformWarning {
    /// Default and named exports in the same module
    #[error("Using named and default exports at the same time may lead to unexpected behaviour")]
    #[diagnostic(
        code(amdwrap::mixed_exports),
        severity(Warning),
        help("Consumers reading the module through the loader see an object with a `default` property instead of the default value")
    )]
    MixedExports,

    /// `export * from "..."` cannot be expanded without the target module
    #[error("`export * from \"{specifier}\"` cannot be forwarded; the dependency is loaded but none of its bindings are re-exported")]
    #[diagnostic(
        code(amdwrap::star_reexport),
        severity(Warning),
        help("List the forwarded names explicitly: export {{ a, b }} from \"{specifier}\"")
    )]
    StarReExport { specifier: String },
}

/// Result type for transformation operations
pub type Result<T> = std::result::Result<T, TransformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_exports_message() {
        let msg = TransformWarning::MixedExports.to_string();
        assert!(msg.contains("named and default exports"));
    }

    #[test]
    fn test_star_reexport_names_source() {
        let warning = TransformWarning::StarReExport {
            specifier: "./util".to_string(),
        };
        assert!(warning.to_string().contains("./util"));
        assert_eq!(warning.severity(), Some(miette::Severity::Warning));
    }

    #[test]
    fn test_parse_error_is_transparent() {
        let err = TransformError::Parse(GenError::ParseFailed {
            filename: "x.js".to_string(),
            messages: vec!["Unexpected token".to_string()],
        });
        assert_eq!(err.to_string(), "Parse failed for x.js: Unexpected token");
    }
}
