//! In-source configuration directive.
//!
//! A module can steer its own rewrite with a comment whose body is JSON:
//!
//! ```js
//! /* {"isModule": true, "globalExport": true} */
//! ```
//!
//! The first comment that parses as JSON wins, even if it is not an object.
//! Comments that fail to parse are not config comments and are skipped
//! silently.

use oxc_ast::ast::Program;
use serde_json::Value;
use tracing::trace;

/// Per-module configuration read from the leading JSON comment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleConfig {
    /// `Some(true)` forces wrapping, `Some(false)` forbids it
    pub is_module: Option<bool>,
    /// Trailing flag argument of the define call
    pub global_export: Option<Value>,
    /// Leave the module exactly as written
    pub dont_change: bool,
}

impl ModuleConfig {
    fn merge(mut self, directive: Value) -> Self {
        let Value::Object(mut fields) = directive else {
            return self;
        };
        if let Some(is_module) = fields.get("isModule").and_then(Value::as_bool) {
            self.is_module = Some(is_module);
        }
        if let Some(global_export) = fields.remove("globalExport") {
            self.global_export = Some(global_export);
        }
        if let Some(dont_change) = fields.get("dontChange").and_then(Value::as_bool) {
            self.dont_change = dont_change;
        }
        self
    }
}

/// Scan comment bodies in order and return the configuration of the first
/// one that is valid JSON.
pub fn extract<'s>(comments: impl IntoIterator<Item = &'s str>) -> ModuleConfig {
    for text in comments {
        match serde_json::from_str::<Value>(text.trim()) {
            Ok(directive) => {
                trace!(directive = %directive, "found config comment");
                return ModuleConfig::default().merge(directive);
            }
            Err(_) => continue,
        }
    }
    ModuleConfig::default()
}

/// Configuration from the comments of a parsed program.
pub fn from_program(program: &Program<'_>) -> ModuleConfig {
    let source = program.source_text;
    extract(
        program
            .comments
            .iter()
            .map(|comment| comment.content_span().source_text(source)),
    )
}
