//! Run configuration for the amdwrap CLI.
//!
//! Values are layered with figment, later sources winning:
//!
//! 1. Built-in defaults
//! 2. `amdwrap.config.json` in the working directory, or the `--config` file
//! 3. `AMDWRAP_*` environment variables (`AMDWRAP_LOADER__DEFINE=define`)
//! 4. Command-line flags
//!
//! ```json
//! {
//!   "loader": { "define": "sap.ui.define", "require": "sap.ui.require" },
//!   "noWarnings": false,
//!   "outDir": "dist",
//!   "extensions": ["js", "mjs", "ts"],
//!   "quote": "double",
//!   "minify": false
//! }
//! ```


use amdwrap::{LoaderNames, TransformOptions};
use amdwrap_gen::{FormatOptions, QuoteStyle};
use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
    value::{Uncased, UncasedStr},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::{LoaderArgs, TransformArgs, parse_extension};
use crate::error::{ConfigError, Result};

/// Config file looked up in the working directory when `--config` is absent
pub const CONFIG_FILE: &str = "amdwrap.config.json";

/// Environment variable prefix; `__` separates nested keys
pub const ENV_PREFIX: &str = "AMDWRAP_";

/// Merged CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CliConfig {
    /// Loader entry points written into the output
    pub loader: LoaderNames,

    /// Suppress advisory warnings
    pub no_warnings: bool,

    /// Output directory; single files go to stdout without one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<PathBuf>,

    /// Extensions picked up when walking input directories
    pub extensions: Vec<String>,

    /// Quote style of printed string literals
    pub quote: QuoteStyle,

    /// Minify printed output
    pub minify: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            loader: LoaderNames::default(),
            no_warnings: false,
            out_dir: None,
            extensions: default_extensions(),
            quote: QuoteStyle::Double,
            minify: false,
        }
    }
}

/// `NO_WARNINGS` -> `noWarnings`, `LOADER.DEFINE` -> `loader.define`
fn camel_case_key(key: &UncasedStr) -> Uncased<'_> {
    let mut out = String::with_capacity(key.as_str().len());
    let mut upper = false;
    for c in key.as_str().chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            out.push(c.to_ascii_lowercase());
        }
    }
    Uncased::from(out)
}

fn default_extensions() -> Vec<String> {
    ["js", "mjs", "ts"].iter().map(|s| s.to_string()).collect()
}

impl CliConfig {
    /// Load configuration for a transform run, resolving the default config
    /// file against the current directory.
    pub fn for_transform(args: &TransformArgs) -> Result<Self> {
        Self::load(Path::new("."), &args.loader, Some(args))
    }

    /// Load configuration for a check run.
    pub fn for_check(loader: &LoaderArgs) -> Result<Self> {
        Self::load(Path::new("."), loader, None)
    }

    /// Load configuration from every source.
    ///
    /// Priority: CLI args > environment variables > config file > defaults
    pub fn load(base: &Path, loader: &LoaderArgs, transform: Option<&TransformArgs>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = Self::config_file(base, loader)? {
            tracing::debug!(path = %path.display(), "loading config file");
            figment = figment.merge(Json::file(path));
        }

        figment = figment.merge(
            Env::prefixed(ENV_PREFIX)
                .split("__")
                .map(camel_case_key)
                .lowercase(false),
        );
        figment = Self::merge_cli(figment, loader, transform);

        let config: Self = figment
            .extract()
            .map_err(|e| ConfigError::Extract(Box::new(e)))?;
        config.validate()?;
        Ok(config)
    }

    /// An explicit `--config` must exist; the default file is optional.
    fn config_file(base: &Path, loader: &LoaderArgs) -> Result<Option<PathBuf>> {
        match &loader.config {
            Some(path) => {
                let path = if path.is_absolute() {
                    path.clone()
                } else {
                    base.join(path)
                };
                if !path.is_file() {
                    return Err(ConfigError::NotFound(path).into());
                }
                Ok(Some(path))
            }
            None => {
                let path = base.join(CONFIG_FILE);
                Ok(path.is_file().then_some(path))
            }
        }
    }

    /// Only flags that were actually given override lower layers.
    fn merge_cli(mut figment: Figment, loader: &LoaderArgs, transform: Option<&TransformArgs>) -> Figment {
        if let Some(define) = &loader.define {
            figment = figment.merge(Serialized::default("loader.define", define));
        }
        if let Some(require) = &loader.require {
            figment = figment.merge(Serialized::default("loader.require", require));
        }
        if loader.no_warnings {
            figment = figment.merge(Serialized::default("noWarnings", true));
        }
        if !loader.extensions.is_empty() {
            figment = figment.merge(Serialized::default("extensions", &loader.extensions));
        }

        if let Some(args) = transform {
            if let Some(out_dir) = &args.out_dir {
                figment = figment.merge(Serialized::default("outDir", out_dir));
            }
            if args.single_quote {
                figment = figment.merge(Serialized::default("quote", QuoteStyle::Single));
            }
            if args.minify {
                figment = figment.merge(Serialized::default("minify", true));
            }
        }

        figment
    }

    /// Validate merged values.
    pub fn validate(&self) -> Result<()> {
        for (field, path) in [
            ("loader.define", &self.loader.define),
            ("loader.require", &self.loader.require),
        ] {
            if let Err(err) = amdwrap_gen::validate_dotted_path(path) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    value: path.clone(),
                    hint: format!("{err}. Use a dotted path like sap.ui.define"),
                }
                .into());
            }
        }

        if self.extensions.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "extensions".to_string(),
                value: "[]".to_string(),
                hint: "List at least one extension, e.g. [\"js\"]".to_string(),
            }
            .into());
        }
        for ext in &self.extensions {
            if let Err(hint) = parse_extension(ext) {
                return Err(ConfigError::InvalidValue {
                    field: "extensions".to_string(),
                    value: ext.clone(),
                    hint,
                }
                .into());
            }
        }

        Ok(())
    }

    /// Whether `path` has one of the configured extensions.
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(ext))
            })
    }

    /// Options handed to the transformer.
    pub fn transform_options(&self) -> TransformOptions {
        TransformOptions {
            loader: self.loader.clone(),
            no_warnings: self.no_warnings,
            format: FormatOptions {
                quote_style: self.quote,
                minify: self.minify,
            },
        }
    }
}
