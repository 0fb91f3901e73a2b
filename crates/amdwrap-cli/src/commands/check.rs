//! Check command implementation.
//!
//! Runs the transformation without writing anything and reports what
//! would happen to each module.

use amdwrap::assemble::LOADER_DEPENDENCIES;
use rayon::prelude::*;
use std::time::Instant;

use crate::cli::CheckArgs;
use crate::commands::discover::discover;
use crate::commands::transform::{describe_failure, report_warnings, tally, transform_file};
use crate::config::CliConfig;
use crate::error::{CliError, Result};
use crate::ui::{self, RunSummary};

/// Execute the check command.
///
/// # Errors
///
/// Returns [`CliError::ModulesFailed`] when any module fails to parse.
pub fn execute(args: CheckArgs) -> Result<()> {
    let started = Instant::now();
    let config = CliConfig::for_check(&args.loader)?;
    let files = discover(&args.inputs, &config)?;

    if files.is_empty() {
        ui::warning("No modules found");
        return Ok(());
    }

    ui::info(&format!(
        "Checking {} module(s) against {}",
        files.len(),
        config.loader.define
    ));

    let options = config.transform_options();
    let results: Vec<_> = files
        .into_par_iter()
        .map(|file| {
            let result = transform_file(&file, &options);
            (file, result)
        })
        .collect();

    let mut summary = RunSummary::default();
    for (file, result) in results {
        match result {
            Ok(output) => {
                tally(&mut summary, output.status);
                let imports: Vec<&str> = output
                    .dependencies
                    .iter()
                    .skip(LOADER_DEPENDENCIES.len())
                    .map(String::as_str)
                    .collect();
                let line = if imports.is_empty() {
                    format!("{}: {}", file.path.display(), output.status)
                } else {
                    format!("{}: {} [{}]", file.path.display(), output.status, imports.join(", "))
                };
                ui::success(&line);
                report_warnings(&file, &output, options.no_warnings, &mut summary);
            }
            Err(err) => {
                summary.failed += 1;
                ui::error(&describe_failure(&file, &err));
            }
        }
    }

    ui::print_summary(&summary, started.elapsed());

    if summary.failed > 0 {
        return Err(CliError::ModulesFailed {
            failed: summary.failed,
            total: summary.total(),
        });
    }
    Ok(())
}
