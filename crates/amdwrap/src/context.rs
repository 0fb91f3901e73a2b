//! Per-module processing state.
//!
//! A fresh [`ModuleContext`] is created for every module. Collectors append
//! to it while the module body is walked; the assembler consumes it once at
//! the end. Nothing in here outlives the module.

use std::fmt;

use oxc_ast::ast::Expression;

use crate::config::ModuleConfig;
use crate::error::TransformWarning;
use crate::records::{ExportRecord, ImportRecord};

/// Why a module was left unwrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// `{"dontChange": true}` directive
    DontChange,
    /// The module already calls the loader's define
    AlreadyWrapped,
    /// `{"isModule": false}` directive
    NotAModule,
    /// No imports, no exports and no `{"isModule": true}` directive
    NoModuleSyntax,
}

/// Final decision for a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleStatus {
    Wrapped,
    Skipped(SkipReason),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SkipReason::DontChange => "dontChange directive",
            SkipReason::AlreadyWrapped => "already wrapped",
            SkipReason::NotAModule => "isModule: false directive",
            SkipReason::NoModuleSyntax => "no import or export",
        })
    }
}

impl ModuleStatus {
    pub fn is_wrapped(self) -> bool {
        matches!(self, ModuleStatus::Wrapped)
    }
}

impl fmt::Display for ModuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleStatus::Wrapped => f.write_str("wrapped"),
            ModuleStatus::Skipped(reason) => write!(f, "skipped ({reason})"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModuleState {
    Pending,
    Settled(ModuleStatus),
}

/// Everything collected for one module.
pub struct ModuleContext<'a> {
    pub config: ModuleConfig,
    pub imports: Vec<ImportRecord>,
    pub exports: Vec<ExportRecord>,
    pub default_export: Option<Expression<'a>>,
    pub warnings: Vec<TransformWarning>,
    pub dynamic_imports: usize,
    state: ModuleState,
}

impl<'a> ModuleContext<'a> {
    pub fn new(config: ModuleConfig) -> Self {
        Self {
            config,
            imports: Vec::new(),
            exports: Vec::new(),
            default_export: None,
            warnings: Vec::new(),
            dynamic_imports: 0,
            state: ModuleState::Pending,
        }
    }

    /// Collection and assembly only act while pending.
    pub fn is_pending(&self) -> bool {
        self.state == ModuleState::Pending
    }

    pub fn status(&self) -> Option<ModuleStatus> {
        match self.state {
            ModuleState::Pending => None,
            ModuleState::Settled(status) => Some(status),
        }
    }

    /// Record the wrap/skip decision. Only the first call has an effect.
    pub fn settle(&mut self, status: ModuleStatus) -> bool {
        if !self.is_pending() {
            debug_assert!(false, "module settled twice");
            return false;
        }
        self.state = ModuleState::Settled(status);
        true
    }

    /// True when nothing marks this file as a module.
    pub fn has_no_module_syntax(&self) -> bool {
        self.imports.is_empty() && self.exports.is_empty() && self.default_export.is_none()
    }

    pub fn warn(&mut self, warning: TransformWarning) {
        self.warnings.push(warning);
    }
}
