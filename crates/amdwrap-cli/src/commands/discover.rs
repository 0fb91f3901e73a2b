//! Input discovery: expand files and directories into a sorted module list.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::CliConfig;
use crate::error::{CliError, Result};

/// A module to process.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct InputFile {
    /// Path as found on disk
    pub path: PathBuf,
    /// Path below the input it was found in; used to mirror the tree
    pub relative: PathBuf,
}

/// Expand `inputs` into module files.
///
/// Files named directly are always taken, whatever their extension.
/// Directories are walked recursively and filtered by the configured
/// extensions. The result is sorted and free of duplicates.
pub fn discover(inputs: &[PathBuf], config: &CliConfig) -> Result<Vec<InputFile>> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_file() {
            let relative = input
                .file_name()
                .map(PathBuf::from)
                .unwrap_or_else(|| input.clone());
            files.push(InputFile {
                path: input.clone(),
                relative,
            });
        } else if input.is_dir() {
            walk_directory(input, config, &mut files)?;
        } else {
            return Err(CliError::FileNotFound(input.clone()));
        }
    }

    files.sort();
    files.dedup_by(|a, b| a.path == b.path);
    tracing::debug!(count = files.len(), "discovered modules");
    Ok(files)
}

/// Fail when two modules would be written to the same place below the
/// output directory.
pub fn ensure_distinct_targets(files: &[InputFile]) -> Result<()> {
    let mut targets: HashMap<&Path, &Path> = HashMap::with_capacity(files.len());
    for file in files {
        if let Some(first) = targets.insert(&file.relative, &file.path) {
            return Err(CliError::InvalidArgument(format!(
                "{} and {} both map to {}",
                first.display(),
                file.path.display(),
                file.relative.display()
            )));
        }
    }
    Ok(())
}

fn walk_directory(root: &Path, config: &CliConfig, files: &mut Vec<InputFile>) -> Result<()> {
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry?;
        if !entry.file_type().is_file() || !config.matches_extension(entry.path()) {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| entry.path().to_path_buf());
        files.push(InputFile {
            path: entry.path().to_path_buf(),
            relative,
        });
    }
    Ok(())
}
