//! Assembly of the wrapped module.
//!
//! Turns the collected records into the pieces of
//!
//! ```js
//! sap.ui.define(["module", "exports", "require", ...paths], function (module, exports, require, ...params) {
//!     ...prelude;
//!     ...body;
//!     ...exportAssembly;
//! }, globalExport);
//! ```

use amdwrap_gen::{BinaryOperator, JsBuilder, LogicalOperator};
use oxc_ast::ast::{Directive, Expression, Statement};
use tracing::trace;

use crate::config::ModuleConfig;
use crate::context::{ModuleStatus, SkipReason};
use crate::records::{ExportRecord, ImportRecord, LocalRef, SpecifierKind, WHOLE_MODULE};

/// Dependencies every wrapped module receives first
pub const LOADER_DEPENDENCIES: [&str; 3] = ["module", "exports", "require"];

/// Parameter prefix for side-effect-only imports
pub const UNNAMED_IMPORT: &str = "__unnamedImport";
/// Parameter prefix for default-only imports
pub const DEFAULT_IMPORT: &str = "__defaultImport";
/// Parameter prefix for every other import shape
pub const DESTRUCTURE_IMPORT: &str = "__destructureImport";

/// Final wrap decision once collection is complete.
pub fn decide(config: &ModuleConfig, has_module_syntax: bool) -> ModuleStatus {
    if config.dont_change {
        ModuleStatus::Skipped(SkipReason::DontChange)
    } else if config.is_module == Some(false) {
        ModuleStatus::Skipped(SkipReason::NotAModule)
    } else if !has_module_syntax && config.is_module != Some(true) {
        ModuleStatus::Skipped(SkipReason::NoModuleSyntax)
    } else {
        ModuleStatus::Wrapped
    }
}

/// Dependency list, parameters and prelude derived from the import records.
pub struct ImportPlan<'a> {
    pub dependencies: Vec<String>,
    pub parameters: Vec<String>,
    pub prelude: Vec<Statement<'a>>,
    /// Export records for re-exported bindings, read off the parameters
    pub forwarded: Vec<ExportRecord>,
}

/// Build the import plan; `imports` must be in source order.
pub fn plan_imports<'a>(js: JsBuilder<'a>, imports: &[ImportRecord]) -> ImportPlan<'a> {
    let mut plan = ImportPlan {
        dependencies: LOADER_DEPENDENCIES.iter().map(|s| s.to_string()).collect(),
        parameters: LOADER_DEPENDENCIES.iter().map(|s| s.to_string()).collect(),
        prelude: Vec::new(),
        forwarded: Vec::new(),
    };

    for (index, record) in imports.iter().enumerate() {
        plan.dependencies.push(record.import_path.clone());

        if record.is_bare() {
            plan.parameters.push(format!("{UNNAMED_IMPORT}{index}"));
            continue;
        }

        if record.is_default_only() {
            let param = format!("{DEFAULT_IMPORT}{index}");
            for specifier in record.of_kind(SpecifierKind::Default) {
                plan.prelude
                    .push(interop_default(js, &specifier.local_name, &param));
            }
            plan.parameters.push(param);
            continue;
        }

        let param = format!("{DESTRUCTURE_IMPORT}{index}");
        for specifier in record.of_kind(SpecifierKind::Default) {
            plan.prelude
                .push(interop_default(js, &specifier.local_name, &param));
        }
        for specifier in record.of_kind(SpecifierKind::Named) {
            plan.prelude.push(js.var_decl(
                &specifier.local_name,
                js.member(js.ident(&param), &specifier.imported_name),
            ));
        }
        for specifier in record.of_kind(SpecifierKind::Namespace) {
            plan.prelude
                .push(js.var_decl(&specifier.local_name, js.ident(&param)));
        }
        for specifier in record.of_kind(SpecifierKind::ReExport) {
            let local = if specifier.imported_name == WHOLE_MODULE {
                LocalRef::Binding(param.clone())
            } else {
                LocalRef::Member {
                    object: param.clone(),
                    property: specifier.imported_name.clone(),
                }
            };
            trace!(out = %specifier.local_name, local = %local, "forwarding re-export");
            plan.forwarded.push(ExportRecord::Aliased {
                out: specifier.local_name.clone(),
                local,
            });
        }
        plan.parameters.push(param);
    }

    plan
}

/// `var local = typeof param === "object" && param.__esModule ? param.default : param;`
pub fn interop_default<'a>(js: JsBuilder<'a>, local: &str, param: &str) -> Statement<'a> {
    let is_object = js.binary(
        js.type_of(js.ident(param)),
        BinaryOperator::StrictEquality,
        js.string("object"),
    );
    let test = js.logical(
        is_object,
        LogicalOperator::And,
        js.member(js.ident(param), "__esModule"),
    );
    js.var_decl(
        local,
        js.conditional(test, js.member(js.ident(param), "default"), js.ident(param)),
    )
}

fn local_expression<'a>(js: JsBuilder<'a>, local: &LocalRef) -> Expression<'a> {
    match local {
        LocalRef::Binding(name) => js.ident(name),
        LocalRef::Member { object, property } => js.member(js.ident(object), property),
    }
}

/// Statements publishing the module's exports.
///
/// A lone default export replaces `module.exports`; anything else is merged
/// onto it with `Object.assign`, `default` first and `__esModule` last.
pub fn export_statements<'a>(
    js: JsBuilder<'a>,
    default_export: Option<Expression<'a>>,
    exports: &[ExportRecord],
) -> Vec<Statement<'a>> {
    if exports.is_empty() {
        return match default_export {
            Some(value) => vec![js.expr_stmt(js.assign_member(
                js.ident("module"),
                "exports",
                value,
            ))],
            None => Vec::new(),
        };
    }

    let mut properties = Vec::with_capacity(exports.len() + 2);
    if let Some(value) = default_export {
        properties.push(js.prop("default", value));
    }
    for record in exports {
        let value = match record {
            ExportRecord::Simple(name) => js.ident(name),
            ExportRecord::Aliased { local, .. } => local_expression(js, local),
        };
        properties.push(js.prop(record.exported_name(), value));
    }
    properties.push(js.prop("__esModule", js.bool(true)));

    let assign = js.call(
        js.dotted("Object.assign"),
        vec![
            js.arg(js.member(js.ident("module"), "exports")),
            js.arg(js.object(properties)),
        ],
    );
    vec![js.expr_stmt(assign)]
}

/// The loader define call wrapping the whole module.
pub fn define_call<'a>(
    js: JsBuilder<'a>,
    define: &str,
    plan_dependencies: &[String],
    parameters: &[String],
    directives: oxc_allocator::Vec<'a, Directive<'a>>,
    body: Vec<Statement<'a>>,
    global_export: Option<Expression<'a>>,
) -> Statement<'a> {
    let dependencies = js.array(plan_dependencies.iter().map(|path| js.string(path)).collect());
    let factory = js.function_expr(parameters, directives, body);

    let mut args = vec![js.arg(dependencies), js.arg(factory)];
    if let Some(flag) = global_export {
        args.push(js.arg(flag));
    }
    js.expr_stmt(js.call(js.dotted(define), args))
}
