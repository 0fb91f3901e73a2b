//! ES module to AMD loader rewriting
//!
//! Rewrites modules written with `import`/`export` into a single loader
//! define call with injected dependencies:
//!
//! ```js
//! import foo from "a";
//! export default foo;
//! ```
//!
//! becomes
//!
//! ```js
//! sap.ui.define(["module", "exports", "require", "a"], function(module, exports, require, __defaultImport0) {
//!     var foo = typeof __defaultImport0 === "object" && __defaultImport0.__esModule ? __defaultImport0.default : __defaultImport0;
//!     module.exports = foo;
//! });
//! ```
//!
//! Modules that already call the define, plain scripts and modules opting
//! out with a `/* {"dontChange": true} */` comment are returned unchanged.
//!
//! # Examples
//!
//! ```rust
//! use amdwrap::{ModuleStatus, TransformOptions, transform};
//!
//! let out = transform(
//!     "import { a } from \"x\"; export { a };",
//!     "Main.js",
//!     &TransformOptions::default(),
//! )?;
//! assert_eq!(out.status, ModuleStatus::Wrapped);
//! assert!(out.code.starts_with("sap.ui.define("));
//! # Ok::<(), amdwrap::TransformError>(())
//! ```

pub mod assemble;
pub mod config;
mod context;
pub mod detect;
mod dynamic_import;
mod error;
pub mod exports;
pub mod imports;
mod options;
pub mod records;
mod transform;

#[cfg(test)]
mod tests;

pub use config::ModuleConfig;
pub use context::{ModuleContext, ModuleStatus, SkipReason};
pub use dynamic_import::DynamicImportRewriter;
pub use error::{Result, TransformError, TransformWarning};
pub use options::{DEFAULT_DEFINE, DEFAULT_REQUIRE, LoaderNames, TransformOptions};
pub use records::{ExportRecord, ImportRecord, ImportSpecifier, LocalRef, SpecifierKind};
pub use transform::{ModuleReport, ModuleTransformer, TransformOutput, transform};
