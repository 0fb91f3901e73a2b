//! Transform command implementation.

use amdwrap::{ModuleStatus, TransformOptions, TransformOutput};
use rayon::prelude::*;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use crate::cli::TransformArgs;
use crate::commands::discover::{InputFile, discover, ensure_distinct_targets};
use crate::config::CliConfig;
use crate::error::{CliError, Result, ResultExt};
use crate::ui::{self, RunSummary};

/// Execute the transform command.
///
/// 1. Load and validate configuration
/// 2. Discover input modules
/// 3. Transform them in parallel, writing into the output directory
/// 4. Report warnings, failures and a summary
///
/// A single input file without `--out-dir` is printed to stdout.
///
/// # Errors
///
/// Returns an error when configuration or discovery fails, or when any
/// module fails to transform. A lone failing module surfaces its own
/// diagnostic.
pub fn execute(args: TransformArgs) -> Result<()> {
    let started = Instant::now();
    let config = CliConfig::for_transform(&args)?;
    let files = discover(&args.inputs, &config)?;

    let to_stdout = config.out_dir.is_none();
    if to_stdout && !(args.inputs.len() == 1 && args.inputs[0].is_file()) {
        return Err(CliError::InvalidArgument(
            "--out-dir is required unless a single file is given".to_string(),
        ));
    }
    if !to_stdout {
        ensure_distinct_targets(&files)?;
    }

    if files.is_empty() {
        ui::warning("No modules found");
        return Ok(());
    }

    let options = config.transform_options();
    let out_dir = config.out_dir.as_deref();
    tracing::debug!(modules = files.len(), out_dir = ?out_dir, "transforming");

    let results: Vec<(InputFile, Result<TransformOutput>)> = files
        .into_par_iter()
        .map(|file| {
            let result = transform_file(&file, &options).and_then(|output| {
                if let Some(dir) = out_dir {
                    write_output(dir, &file, &output.code)?;
                }
                Ok(output)
            });
            (file, result)
        })
        .collect();

    let mut summary = RunSummary::default();
    let mut last_error = None;

    for (file, result) in results {
        match result {
            Ok(output) => {
                tally(&mut summary, output.status);
                report_warnings(&file, &output, options.no_warnings, &mut summary);
                tracing::debug!(file = %file.path.display(), status = %output.status, "done");
                if to_stdout {
                    print_code(&output.code)?;
                }
            }
            Err(err) => {
                summary.failed += 1;
                ui::error(&describe_failure(&file, &err));
                last_error = Some(err);
            }
        }
    }

    if !to_stdout || summary.failed > 0 {
        ui::print_summary(&summary, started.elapsed());
    }

    match last_error {
        Some(err) if summary.total() == 1 => Err(err),
        Some(_) => Err(CliError::ModulesFailed {
            failed: summary.failed,
            total: summary.total(),
        }),
        None => Ok(()),
    }
}

/// Read and transform one module.
pub(crate) fn transform_file(file: &InputFile, options: &TransformOptions) -> Result<TransformOutput> {
    let source = std::fs::read_to_string(&file.path).with_path(&file.path)?;
    amdwrap::transform(&source, &file.path.to_string_lossy(), options).map_err(|source| {
        CliError::Transform {
            file: file.path.clone(),
            source,
        }
    })
}

pub(crate) fn tally(summary: &mut RunSummary, status: ModuleStatus) {
    if status.is_wrapped() {
        summary.wrapped += 1;
    } else {
        summary.skipped += 1;
    }
}

pub(crate) fn report_warnings(file: &InputFile, output: &TransformOutput, quiet: bool, summary: &mut RunSummary) {
    summary.warnings += output.warnings.len();
    if quiet {
        return;
    }
    for warning in &output.warnings {
        ui::warning(&format!("{}: {}", file.path.display(), warning));
    }
}

pub(crate) fn describe_failure(file: &InputFile, err: &CliError) -> String {
    match err {
        CliError::Transform { source, .. } => format!("{}: {}", file.path.display(), source),
        other => format!("{}: {}", file.path.display(), other),
    }
}

fn write_output(out_dir: &Path, file: &InputFile, code: &str) -> Result<()> {
    let target = out_dir.join(&file.relative);
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&target, code)?;
    Ok(())
}

fn print_code(code: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(code.as_bytes())?;
    if !code.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}
