//! Parser façade for reading existing JavaScript/TypeScript code
//!
//! Produces the arena-allocated OXC program that the rewriting passes mutate
//! in place and [`crate::JsBuilder`] extends with new nodes.

use crate::error::{GenError, Result};
use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_parser::Parser;
use oxc_span::SourceType;

/// Parse options for reading source code
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Source type (JavaScript, TypeScript, JSX, TSX)
    pub source_type: SourceType,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            source_type: SourceType::mjs(),
        }
    }
}

impl ParseOptions {
    /// Create parse options from file path (auto-detects source type)
    ///
    /// Plain `.js` files are read as ES modules: the whole point of the
    /// rewrite is that they contain `import`/`export`.
    pub fn from_path(path: &str) -> Self {
        let source_type = SourceType::from_path(path)
            .map(|ty| if ty.is_javascript() { ty.with_module(true) } else { ty })
            .unwrap_or(SourceType::mjs());
        Self { source_type }
    }
}

/// A successfully parsed program
pub struct ParsedProgram<'a> {
    /// The parsed AST program
    pub program: Program<'a>,
}

impl<'a> ParsedProgram<'a> {
    /// Get the program AST
    pub fn ast(&self) -> &Program<'a> {
        &self.program
    }

    /// Get mutable access to the program AST
    pub fn ast_mut(&mut self) -> &mut Program<'a> {
        &mut self.program
    }
}

/// Parse source code into an AST
///
/// Any syntax error fails the parse; no partial tree is returned.
///
/// # Arguments
///
/// * `allocator` - Allocator for AST nodes (must outlive the returned program)
/// * `source` - Source code to parse
/// * `filename` - Used for error reporting only
/// * `options` - Parse options
pub fn parse<'a>(
    allocator: &'a Allocator,
    source: &'a str,
    filename: &str,
    options: ParseOptions,
) -> Result<ParsedProgram<'a>> {
    let result = Parser::new(allocator, source, options.source_type).parse();

    if result.panicked || !result.errors.is_empty() {
        return Err(GenError::ParseFailed {
            filename: filename.to_string(),
            messages: result.errors.iter().map(|err| err.to_string()).collect(),
        });
    }

    Ok(ParsedProgram {
        program: result.program,
    })
}
