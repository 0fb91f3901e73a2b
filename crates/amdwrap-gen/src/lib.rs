//! Structured JavaScript construction using OXC AST builders
//!
//! This crate is the node factory for the amdwrap rewriter. Instead of
//! substituting text into code templates, every piece of generated code is
//! built as an OXC AST node and printed with `oxc_codegen`.
//!
//! # Features
//!
//! - **Parser façade** - [`parse`] turns source text into an arena-allocated [`Program`](oxc_ast::ast::Program)
//! - **Node builders** - [`JsBuilder`] mirrors JavaScript syntax (`ident`, `member`, `call`, `var_decl`, ...)
//! - **Printing** - [`print`] and [`FormatOptions`] control the emitted text
//!
//! # Examples
//!
//! ```rust
//! use amdwrap_gen::{Allocator, JsBuilder};
//!
//! let allocator = Allocator::default();
//! let js = JsBuilder::new(&allocator);
//!
//! // Build: sap.ui.require(["a"]);
//! let call = js.call(
//!     js.dotted("sap.ui.require"),
//!     vec![js.arg(js.array(vec![js.string("a")]))],
//! );
//! let code = js.program(vec![js.expr_stmt(call)])?;
//! assert!(code.contains("sap.ui.require"));
//! # Ok::<(), amdwrap_gen::GenError>(())
//! ```

mod builder;
mod error;
mod format;
mod parser;

pub use builder::{JsBuilder, is_identifier_name, print, validate_dotted_path};
pub use error::{GenError, Result};
pub use format::{FormatOptions, QuoteStyle};
pub use parser::{ParseOptions, ParsedProgram, parse};

// Re-export commonly used OXC types for convenience
pub use oxc_allocator::Allocator;
pub use oxc_ast::ast::{BinaryOperator, LogicalOperator};
