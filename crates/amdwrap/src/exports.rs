//! Export declarations.
//!
//! Each export statement maps to exactly one [`ExportShape`]. The caller
//! removes the statement from the body and acts on the shape: merge a
//! re-export into the import list, append export records, or put an
//! unwrapped declaration back where the statement was.

use amdwrap_gen::JsBuilder;
use oxc_ast::ast::{
    BindingPattern, BindingPatternKind, ClassType, Declaration, ExportAllDeclaration,
    ExportDefaultDeclaration, ExportDefaultDeclarationKind, ExportNamedDeclaration, Expression,
    FunctionType,
};

use crate::records::{ExportRecord, ImportRecord, ImportSpecifier, SpecifierKind, WHOLE_MODULE};

/// What an export statement contributes to the module.
pub enum ExportShape<'a> {
    /// `export { x as y } from "m"`, `export * as ns from "m"`
    ReExport(ImportRecord),
    /// `export * from "m"`: dependency kept, names unknown
    StarReExport(ImportRecord),
    /// `export { a, b as c }`
    Local(Vec<ExportRecord>),
    /// `export const a = 1`: the declaration stays in the body
    Declaration {
        declaration: Declaration<'a>,
        exports: Vec<ExportRecord>,
    },
    /// `export default ...`
    Default {
        expression: Expression<'a>,
        /// Named function or class declaration that must keep its binding
        declaration: Option<Declaration<'a>>,
    },
    /// Type-only export; dropped without a trace
    TypeOnly,
}

/// Classify `export { ... }`, `export { ... } from` and `export <declaration>`.
pub fn collect_named<'a>(decl: ExportNamedDeclaration<'a>) -> ExportShape<'a> {
    if let Some(declaration) = decl.declaration {
        let exports = declared_names(&declaration)
            .into_iter()
            .map(ExportRecord::Simple)
            .collect();
        return ExportShape::Declaration {
            declaration,
            exports,
        };
    }
    if decl.export_kind.is_type() {
        return ExportShape::TypeOnly;
    }

    let values: Vec<_> = decl
        .specifiers
        .iter()
        .filter(|specifier| !specifier.export_kind.is_type())
        .collect();
    if values.is_empty() && !decl.specifiers.is_empty() {
        return ExportShape::TypeOnly;
    }

    match &decl.source {
        Some(source) => {
            let specifiers = values
                .iter()
                .map(|specifier| {
                    ImportSpecifier::new(
                        SpecifierKind::ReExport,
                        specifier.local.name().as_str(),
                        specifier.exported.name().as_str(),
                    )
                })
                .collect();
            ExportShape::ReExport(ImportRecord::new(source.value.as_str(), specifiers))
        }
        None => ExportShape::Local(
            values
                .iter()
                .map(|specifier| {
                    ExportRecord::local(
                        specifier.local.name().as_str(),
                        specifier.exported.name().as_str(),
                    )
                })
                .collect(),
        ),
    }
}

/// Classify `export * from "m"` and `export * as ns from "m"`.
pub fn collect_all<'a>(decl: &ExportAllDeclaration<'_>) -> ExportShape<'a> {
    if decl.export_kind.is_type() {
        return ExportShape::TypeOnly;
    }
    let path = decl.source.value.as_str();
    match &decl.exported {
        Some(exported) => ExportShape::ReExport(ImportRecord::new(
            path,
            vec![ImportSpecifier::new(
                SpecifierKind::ReExport,
                WHOLE_MODULE,
                exported.name().as_str(),
            )],
        )),
        None => ExportShape::StarReExport(ImportRecord::new(path, Vec::new())),
    }
}

/// Turn `export default ...` into the module's default value.
///
/// Anonymous function and class declarations become expressions. Named ones
/// stay declarations so the rest of the module can still refer to them; the
/// default value is then their identifier.
pub fn collect_default<'a>(js: JsBuilder<'a>, decl: ExportDefaultDeclaration<'a>) -> ExportShape<'a> {
    match decl.declaration {
        ExportDefaultDeclarationKind::FunctionDeclaration(mut function) => {
            match function.id.as_ref().map(|id| id.name) {
                Some(name) => ExportShape::Default {
                    expression: js.ident(name.as_str()),
                    declaration: Some(Declaration::FunctionDeclaration(function)),
                },
                None => {
                    function.r#type = FunctionType::FunctionExpression;
                    ExportShape::Default {
                        expression: Expression::FunctionExpression(function),
                        declaration: None,
                    }
                }
            }
        }
        ExportDefaultDeclarationKind::ClassDeclaration(mut class) => {
            match class.id.as_ref().map(|id| id.name) {
                Some(name) => ExportShape::Default {
                    expression: js.ident(name.as_str()),
                    declaration: Some(Declaration::ClassDeclaration(class)),
                },
                None => {
                    class.r#type = ClassType::ClassExpression;
                    ExportShape::Default {
                        expression: Expression::ClassExpression(class),
                        declaration: None,
                    }
                }
            }
        }
        ExportDefaultDeclarationKind::TSInterfaceDeclaration(_) => ExportShape::TypeOnly,
        other => ExportShape::Default {
            expression: other.into_expression(),
            declaration: None,
        },
    }
}

/// Runtime names introduced by a declaration. Type declarations bind none.
fn declared_names(declaration: &Declaration<'_>) -> Vec<String> {
    let mut names = Vec::new();
    match declaration {
        Declaration::VariableDeclaration(variables) => {
            for declarator in &variables.declarations {
                binding_names(&declarator.id, &mut names);
            }
        }
        Declaration::FunctionDeclaration(function) => {
            names.extend(function.id.iter().map(|id| id.name.to_string()));
        }
        Declaration::ClassDeclaration(class) => {
            names.extend(class.id.iter().map(|id| id.name.to_string()));
        }
        Declaration::TSEnumDeclaration(enumeration) => {
            names.push(enumeration.id.name.to_string());
        }
        _ => {}
    }
    names
}

fn binding_names(pattern: &BindingPattern<'_>, names: &mut Vec<String>) {
    match &pattern.kind {
        BindingPatternKind::BindingIdentifier(id) => names.push(id.name.to_string()),
        BindingPatternKind::ObjectPattern(object) => {
            for property in &object.properties {
                binding_names(&property.value, names);
            }
            if let Some(rest) = &object.rest {
                binding_names(&rest.argument, names);
            }
        }
        BindingPatternKind::ArrayPattern(array) => {
            for element in array.elements.iter().flatten() {
                binding_names(element, names);
            }
            if let Some(rest) = &array.rest {
                binding_names(&rest.argument, names);
            }
        }
        BindingPatternKind::AssignmentPattern(assignment) => {
            binding_names(&assignment.left, names);
        }
    }
}
