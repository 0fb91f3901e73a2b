//! Error types for JavaScript construction and printing

use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur while building, parsing or printing JavaScript
#[derive(Error, Debug, Diagnostic)]
pub enum GenError {
    /// Invalid identifier name
    #[error("Invalid identifier: '{identifier}'{}", suggestion.as_ref().map(|s| format!(" - {}", s)).unwrap_or_default())]
    #[diagnostic(code(amdwrap::gen::invalid_identifier))]
    InvalidIdentifier {
        identifier: String,
        suggestion: Option<String>,
    },

    /// Source text could not be parsed
    #[error("Parse failed for {filename}: {}", messages.join(", "))]
    #[diagnostic(
        code(amdwrap::gen::parse_failed),
        help("The input must be syntactically valid before it can be rewritten")
    )]
    ParseFailed {
        filename: String,
        messages: Vec<String>,
    },

    /// Code generation failed
    #[error("Code generation failed: {context}{}", reason.as_ref().map(|r| format!(" - {}", r)).unwrap_or_default())]
    #[diagnostic(code(amdwrap::gen::codegen_failed))]
    CodegenFailed {
        context: String,
        reason: Option<String>,
    },
}

impl GenError {
    /// Create an InvalidIdentifier error
    pub fn invalid_identifier(identifier: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            identifier: identifier.into(),
            suggestion: None,
        }
    }

    /// Create an InvalidIdentifier error with a suggestion
    pub fn invalid_identifier_with_suggestion(
        identifier: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::InvalidIdentifier {
            identifier: identifier.into(),
            suggestion: Some(suggestion.into()),
        }
    }

    /// Create a CodegenFailed error with reason
    pub fn codegen_failed_with_reason(
        context: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::CodegenFailed {
            context: context.into(),
            reason: Some(reason.into()),
        }
    }
}

/// Result type for construction and printing operations
pub type Result<T> = std::result::Result<T, GenError>;
