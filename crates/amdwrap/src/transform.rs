//! Per-module pipeline: configure, detect, collect, assemble.

use amdwrap_gen::{Allocator, JsBuilder, ParseOptions, parse, print};
use oxc_ast::ast::{Program, Statement};
use oxc_ast_visit::VisitMut;
use tracing::{debug, warn};

use crate::assemble;
use crate::config;
use crate::context::{ModuleContext, ModuleStatus, SkipReason};
use crate::detect;
use crate::dynamic_import::DynamicImportRewriter;
use crate::error::{Result, TransformError, TransformWarning};
use crate::exports::{self, ExportShape};
use crate::imports;
use crate::options::TransformOptions;

/// Outcome of processing one module tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleReport {
    pub status: ModuleStatus,
    /// Define dependency list; empty unless wrapped
    pub dependencies: Vec<String>,
    /// Factory parameter names; empty unless wrapped
    pub parameters: Vec<String>,
    pub warnings: Vec<TransformWarning>,
    /// Number of `import()` call sites rewritten
    pub dynamic_imports: usize,
}

impl ModuleReport {
    fn from_context(ctx: ModuleContext<'_>, status: ModuleStatus) -> Self {
        Self {
            status,
            dependencies: Vec::new(),
            parameters: Vec::new(),
            warnings: ctx.warnings,
            dynamic_imports: ctx.dynamic_imports,
        }
    }

    /// The printed tree differs from the source text.
    pub fn is_modified(&self) -> bool {
        self.status.is_wrapped() || self.dynamic_imports > 0
    }
}

/// Rewrites module trees in place.
///
/// One transformer can process any number of programs that share its
/// allocator; no state is carried from one module to the next.
pub struct ModuleTransformer<'a, 'o> {
    js: JsBuilder<'a>,
    options: &'o TransformOptions,
}

impl<'a, 'o> ModuleTransformer<'a, 'o> {
    /// Fails when the loader paths are not dotted identifiers.
    pub fn new(js: JsBuilder<'a>, options: &'o TransformOptions) -> Result<Self> {
        options
            .loader
            .validate()
            .map_err(TransformError::InvalidOptions)?;
        Ok(Self { js, options })
    }

    /// Run the pipeline on `program`.
    ///
    /// Skipped modules are left untouched apart from rewritten `import()`
    /// calls when the module was only found to lack module syntax.
    pub fn process(&self, program: &mut Program<'a>) -> Result<ModuleReport> {
        let mut ctx = ModuleContext::new(config::from_program(program));

        if let Some(reason) = self.skip_at_entry(&ctx, program) {
            let status = ModuleStatus::Skipped(reason);
            ctx.settle(status);
            debug!(?reason, "module left untouched");
            return Ok(ModuleReport::from_context(ctx, status));
        }

        let global_export = ctx
            .config
            .global_export
            .as_ref()
            .map(|value| self.js.parse_expression(&value.to_string()))
            .transpose()
            .map_err(TransformError::Gen)?;

        let mut body = self.collect(&mut ctx, program);

        let mut rewriter = DynamicImportRewriter::new(self.js, self.options.loader.require.as_str());
        for statement in body.iter_mut() {
            rewriter.visit_statement(statement);
        }
        if let Some(default_export) = ctx.default_export.as_mut() {
            rewriter.visit_expression(default_export);
        }
        ctx.dynamic_imports = rewriter.rewritten();

        let status = assemble::decide(&ctx.config, !ctx.has_no_module_syntax());
        if !status.is_wrapped() {
            // Only type-only declarations can have been dropped here.
            program.body = self.js.ast().vec_from_iter(body);
            ctx.settle(status);
            debug!(?status, dynamic_imports = ctx.dynamic_imports, "module not wrapped");
            return Ok(ModuleReport::from_context(ctx, status));
        }

        let plan = assemble::plan_imports(self.js, &ctx.imports);
        ctx.exports.extend(plan.forwarded);

        if ctx.default_export.is_some() && !ctx.exports.is_empty() {
            ctx.warn(TransformWarning::MixedExports);
        }
        if !self.options.no_warnings {
            for warning in &ctx.warnings {
                warn!("{}", warning);
            }
        }

        debug!(
            imports = ctx.imports.len(),
            exports = ctx.exports.len(),
            has_default = ctx.default_export.is_some(),
            "wrapping module"
        );

        let default_export = ctx.default_export.take();
        let mut wrapped = plan.prelude;
        wrapped.append(&mut body);
        wrapped.extend(assemble::export_statements(self.js, default_export, &ctx.exports));

        let directives = std::mem::replace(&mut program.directives, self.js.ast().vec());
        let define = assemble::define_call(
            self.js,
            &self.options.loader.define,
            &plan.dependencies,
            &plan.parameters,
            directives,
            wrapped,
            global_export,
        );
        program.body = self.js.ast().vec1(define);

        ctx.settle(ModuleStatus::Wrapped);
        let mut report = ModuleReport::from_context(ctx, ModuleStatus::Wrapped);
        report.dependencies = plan.dependencies;
        report.parameters = plan.parameters;
        if self.options.no_warnings {
            report.warnings.clear();
        }
        Ok(report)
    }

    fn skip_at_entry(&self, ctx: &ModuleContext<'a>, program: &Program<'a>) -> Option<SkipReason> {
        if ctx.config.dont_change {
            Some(SkipReason::DontChange)
        } else if ctx.config.is_module == Some(false) {
            Some(SkipReason::NotAModule)
        } else if detect::calls_define(program, &self.options.loader.define) {
            Some(SkipReason::AlreadyWrapped)
        } else {
            None
        }
    }

    /// Strip import/export statements into `ctx`, returning what remains of
    /// the body in order.
    fn collect(&self, ctx: &mut ModuleContext<'a>, program: &mut Program<'a>) -> Vec<Statement<'a>> {
        let statements = std::mem::replace(&mut program.body, self.js.ast().vec());
        let mut body = Vec::with_capacity(statements.len());

        for statement in statements {
            match statement {
                Statement::ImportDeclaration(decl) => {
                    if let Some(record) = imports::collect_import(&decl) {
                        ctx.imports.push(record);
                    }
                }
                Statement::ExportNamedDeclaration(decl) => {
                    self.apply(ctx, &mut body, exports::collect_named(decl.unbox()));
                }
                Statement::ExportDefaultDeclaration(decl) => {
                    self.apply(ctx, &mut body, exports::collect_default(self.js, decl.unbox()));
                }
                Statement::ExportAllDeclaration(decl) => {
                    self.apply(ctx, &mut body, exports::collect_all(&decl));
                }
                other => body.push(other),
            }
        }

        body
    }

    fn apply(&self, ctx: &mut ModuleContext<'a>, body: &mut Vec<Statement<'a>>, shape: ExportShape<'a>) {
        match shape {
            ExportShape::ReExport(record) => ctx.imports.push(record),
            ExportShape::StarReExport(record) => {
                ctx.warn(TransformWarning::StarReExport {
                    specifier: record.import_path.clone(),
                });
                ctx.imports.push(record);
            }
            ExportShape::Local(records) => ctx.exports.extend(records),
            ExportShape::Declaration {
                declaration,
                exports,
            } => {
                body.push(Statement::from(declaration));
                ctx.exports.extend(exports);
            }
            ExportShape::Default {
                expression,
                declaration,
            } => {
                if let Some(declaration) = declaration {
                    body.push(Statement::from(declaration));
                }
                ctx.default_export = Some(expression);
            }
            ExportShape::TypeOnly => {}
        }
    }
}

/// Result of [`transform`].
#[derive(Debug, Clone, PartialEq)]
pub struct TransformOutput {
    /// Rewritten code, or the input verbatim when nothing changed
    pub code: String,
    pub status: ModuleStatus,
    pub dependencies: Vec<String>,
    pub warnings: Vec<TransformWarning>,
}

/// Transform one module's source text.
///
/// The source type is taken from `filename`'s extension; anything not
/// recognised is read as an ES module.
///
/// Skipped modules come back byte for byte, with one exception. A script
/// without module syntax that contains `import()` still has those calls
/// rewritten, so it is printed again from the tree. Its formatting is then
/// normalised and comments are not carried over.
pub fn transform(source: &str, filename: &str, options: &TransformOptions) -> Result<TransformOutput> {
    let allocator = Allocator::default();
    let js = JsBuilder::new(&allocator);
    let transformer = ModuleTransformer::new(js, options)?;

    let mut parsed = parse(&allocator, source, filename, ParseOptions::from_path(filename))
        .map_err(TransformError::Parse)?;
    let report = transformer.process(parsed.ast_mut())?;

    let code = if report.is_modified() {
        print(parsed.ast(), &options.format)
    } else {
        source.to_string()
    };
    debug!(file = filename, status = ?report.status, "transformed");

    Ok(TransformOutput {
        code,
        status: report.status,
        dependencies: report.dependencies,
        warnings: report.warnings,
    })
}
