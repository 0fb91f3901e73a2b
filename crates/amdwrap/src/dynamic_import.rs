//! `import(...)` → loader require call.

use amdwrap_gen::JsBuilder;
use oxc_ast::ast::Expression;
use oxc_ast_visit::{VisitMut, walk_mut};

/// Rewrites every `import(source[, options])` into `require(source[, options])`
/// with `require` being the loader's dotted path. Arguments are moved over
/// untouched.
pub struct DynamicImportRewriter<'a> {
    js: JsBuilder<'a>,
    require: String,
    rewritten: usize,
}

impl<'a> DynamicImportRewriter<'a> {
    pub fn new(js: JsBuilder<'a>, require: impl Into<String>) -> Self {
        Self {
            js,
            require: require.into(),
            rewritten: 0,
        }
    }

    /// Number of call sites rewritten so far
    pub fn rewritten(&self) -> usize {
        self.rewritten
    }
}

impl<'a> VisitMut<'a> for DynamicImportRewriter<'a> {
    fn visit_expression(&mut self, expr: &mut Expression<'a>) {
        // Arguments first, so `import(import("a"))` rewrites both.
        walk_mut::walk_expression(self, expr);

        if let Expression::ImportExpression(import) = expr {
            let source = std::mem::replace(&mut import.source, self.js.null());
            let mut args = vec![self.js.arg(source)];
            if let Some(options) = import.options.take() {
                args.push(self.js.arg(options));
            }
            *expr = self.js.call(self.js.dotted(&self.require), args);
            self.rewritten += 1;
        }
    }
}
