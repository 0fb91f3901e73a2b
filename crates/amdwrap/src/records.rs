//! Import and export records collected from a module.

use std::fmt;

/// How a binding is taken from a dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecifierKind {
    /// `import foo from "m"`
    Default,
    /// `import { foo } from "m"`
    Named,
    /// `import * as foo from "m"`
    Namespace,
    /// `export { foo } from "m"`: forwarded, never bound locally
    ReExport,
}

/// Name used by a [`SpecifierKind::ReExport`] that forwards the whole
/// dependency (`export * as ns from "m"`).
pub const WHOLE_MODULE: &str = "*";

/// One binding of an import (or re-export) declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpecifier {
    pub kind: SpecifierKind,
    /// Name exposed by the dependency
    pub imported_name: String,
    /// Name used in this module (for re-exports: the name exposed again)
    pub local_name: String,
}

impl ImportSpecifier {
    pub fn new(kind: SpecifierKind, imported_name: impl Into<String>, local_name: impl Into<String>) -> Self {
        Self {
            kind,
            imported_name: imported_name.into(),
            local_name: local_name.into(),
        }
    }
}

/// One dependency of the module, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRecord {
    pub import_path: String,
    pub specifiers: Vec<ImportSpecifier>,
}

impl ImportRecord {
    pub fn new(import_path: impl Into<String>, specifiers: Vec<ImportSpecifier>) -> Self {
        Self {
            import_path: import_path.into(),
            specifiers,
        }
    }

    /// Import kept only for its side effects
    pub fn is_bare(&self) -> bool {
        self.specifiers.is_empty()
    }

    /// Exactly one specifier and it is a default binding
    pub fn is_default_only(&self) -> bool {
        matches!(self.specifiers.as_slice(), [only] if only.kind == SpecifierKind::Default)
    }

    /// Specifiers of one kind, in declaration order
    pub fn of_kind(&self, kind: SpecifierKind) -> impl Iterator<Item = &ImportSpecifier> {
        self.specifiers.iter().filter(move |s| s.kind == kind)
    }
}

/// What an exported name reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalRef {
    /// A binding in module scope
    Binding(String),
    /// A property of a dependency parameter: `param.property`
    Member { object: String, property: String },
}

impl fmt::Display for LocalRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalRef::Binding(name) => f.write_str(name),
            LocalRef::Member { object, property } => write!(f, "{}.{}", object, property),
        }
    }
}

/// One named export of the module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportRecord {
    /// `export { name }`
    Simple(String),
    /// `export { local as out }`, or a forwarded re-export
    Aliased { out: String, local: LocalRef },
}

impl ExportRecord {
    /// Name the consumer sees
    pub fn exported_name(&self) -> &str {
        match self {
            ExportRecord::Simple(name) => name,
            ExportRecord::Aliased { out, .. } => out,
        }
    }

    /// Record for `export { local as exported }`, collapsing to `Simple` when
    /// the names agree.
    pub fn local(local: &str, exported: &str) -> Self {
        if local == exported {
            ExportRecord::Simple(local.to_string())
        } else {
            ExportRecord::Aliased {
                out: exported.to_string(),
                local: LocalRef::Binding(local.to_string()),
            }
        }
    }
}
