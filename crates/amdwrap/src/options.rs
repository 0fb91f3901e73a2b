//! Host-side options shared by every module of a run.

use amdwrap_gen::{FormatOptions, GenError, validate_dotted_path};
use serde::{Deserialize, Serialize};

/// Default define entry point of the UI5 loader
pub const DEFAULT_DEFINE: &str = "sap.ui.define";
/// Default require entry point of the UI5 loader
pub const DEFAULT_REQUIRE: &str = "sap.ui.require";

/// Dotted callee paths of the target loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoaderNames {
    /// Module definition call, e.g. `sap.ui.define`
    pub define: String,
    /// Asynchronous require call used for `import()`, e.g. `sap.ui.require`
    pub require: String,
}

impl Default for LoaderNames {
    fn default() -> Self {
        Self {
            define: DEFAULT_DEFINE.to_string(),
            require: DEFAULT_REQUIRE.to_string(),
        }
    }
}

impl LoaderNames {
    /// Both paths must be dotted identifier chains.
    pub fn validate(&self) -> Result<(), GenError> {
        validate_dotted_path(&self.define)?;
        validate_dotted_path(&self.require)
    }
}

/// Options for [`crate::transform`] and [`crate::ModuleTransformer`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransformOptions {
    /// Loader entry points
    pub loader: LoaderNames,
    /// Suppress advisory warnings
    pub no_warnings: bool,
    /// Output formatting
    pub format: FormatOptions,
}
