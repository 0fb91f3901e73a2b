//! Code formatting options for printed JavaScript

use oxc_codegen::CodegenOptions;
use serde::{Deserialize, Serialize};

/// Quote style for string literals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    /// Single quotes: `'hello'`
    Single,
    /// Double quotes: `"hello"`
    #[default]
    Double,
}

/// Formatting options for code generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOptions {
    /// Quote style for string literals
    pub quote_style: QuoteStyle,
    /// Strip whitespace and comments
    pub minify: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            quote_style: QuoteStyle::default(),
            minify: false,
        }
    }
}

impl FormatOptions {
    /// Translate into the printer's own option set
    pub fn to_codegen_options(&self) -> CodegenOptions {
        CodegenOptions {
            single_quote: self.quote_style == QuoteStyle::Single,
            minify: self.minify,
            ..CodegenOptions::default()
        }
    }
}
