//! Static import declarations.

use oxc_ast::ast::{ImportDeclaration, ImportDeclarationSpecifier};
use tracing::trace;

use crate::records::{ImportRecord, ImportSpecifier, SpecifierKind};

/// Convert an import declaration into a record.
///
/// Returns `None` for type-only imports (`import type ...`, or a list made
/// up entirely of `type` specifiers): they have no runtime dependency.
pub fn collect_import(decl: &ImportDeclaration<'_>) -> Option<ImportRecord> {
    if decl.import_kind.is_type() {
        return None;
    }

    let mut specifiers = Vec::new();
    let mut declared = 0usize;
    for specifier in decl.specifiers.iter().flatten() {
        declared += 1;
        if let Some(specifier) = convert(specifier) {
            specifiers.push(specifier);
        }
    }
    if declared > 0 && specifiers.is_empty() {
        return None;
    }

    let record = ImportRecord::new(decl.source.value.as_str(), specifiers);
    trace!(
        path = %record.import_path,
        specifiers = record.specifiers.len(),
        "collected import"
    );
    Some(record)
}

fn convert(specifier: &ImportDeclarationSpecifier<'_>) -> Option<ImportSpecifier> {
    match specifier {
        ImportDeclarationSpecifier::ImportSpecifier(named) => {
            if named.import_kind.is_type() {
                return None;
            }
            Some(ImportSpecifier::new(
                SpecifierKind::Named,
                named.imported.name().as_str(),
                named.local.name.as_str(),
            ))
        }
        ImportDeclarationSpecifier::ImportDefaultSpecifier(default) => Some(ImportSpecifier::new(
            SpecifierKind::Default,
            default.local.name.as_str(),
            default.local.name.as_str(),
        )),
        ImportDeclarationSpecifier::ImportNamespaceSpecifier(namespace) => {
            Some(ImportSpecifier::new(
                SpecifierKind::Namespace,
                namespace.local.name.as_str(),
                namespace.local.name.as_str(),
            ))
        }
    }
}
