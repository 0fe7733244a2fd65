//! Sequential batch driver for formatter and linter runs.

use crate::output;
use crate::tool::{FileResult, ToolRunner};
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Running totals of a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchCounters {
    pub changed: usize,
    pub errors: usize,
    pub total_elapsed: Duration,
}

impl BatchCounters {
    /// Folds one file result into the totals. Errors take precedence over
    /// changes.
    pub fn record(&mut self, result: &FileResult) {
        self.total_elapsed += result.elapsed;
        if result.error.is_some() {
            self.errors += 1;
        } else if result.changed {
            self.changed += 1;
        }
    }

    /// Process exit code for these totals.
    ///
    /// Any error fails the run. Pending changes fail a check run, while
    /// applied changes in fix mode are a success.
    pub fn exit_code(&self, fix: bool) -> i32 {
        if self.errors > 0 || (!fix && self.changed > 0) {
            1
        } else {
            0
        }
    }
}

/// Applies `runner` to every file in order, reporting each result as soon as
/// it is known, and returns the process exit code.
///
/// # Arguments
/// * `runner` - Tool to apply
/// * `files` - Files in processing order
/// * `fix` - Allow the tool to modify files
/// * `color` - Emit ANSI styling
/// * `out` / `err` - Destinations for regular and error output
pub fn run_batch(
    runner: &dyn ToolRunner,
    files: &[PathBuf],
    fix: bool,
    color: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> std::io::Result<i32> {
    let profile = runner.profile();

    if files.is_empty() {
        writeln!(out, "{}", profile.empty_message)?;
        return Ok(0);
    }

    let mode = profile.mode(fix);
    writeln!(out, "{}", output::header(mode, files.len(), color))?;

    let mut counters = BatchCounters::default();
    for file in files {
        let start = Instant::now();
        let outcome = runner.run(file, fix);
        let result = FileResult::from_outcome(file, start.elapsed(), outcome);

        counters.record(&result);
        report_file(&result, runner, fix, color, out, err)?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "{}",
        output::summary_header(mode, counters.total_elapsed.as_millis(), color)
    )?;

    if counters.errors > 0 {
        writeln!(err, "{}", output::error_count(counters.errors, color))?;
    } else if !fix && counters.changed > 0 {
        let (count, hint) = output::needs_fixing(counters.changed, profile.fix_hint, color);
        writeln!(out, "{count}")?;
        writeln!(out, "{hint}")?;
    } else if fix && counters.changed > 0 {
        writeln!(
            out,
            "{}",
            output::fixed_count(counters.changed, profile.fixed_action, color)
        )?;
    }

    Ok(counters.exit_code(fix))
}

fn report_file(
    result: &FileResult,
    runner: &dyn ToolRunner,
    fix: bool,
    color: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> std::io::Result<()> {
    let time = output::time_str(result.elapsed.as_millis());
    let profile = runner.profile();

    if let Some(error) = &result.error {
        let (line, detail) = output::file_error(&result.path, &time, error, color);
        writeln!(out, "{line}")?;
        writeln!(err, "{detail}")?;
    } else if result.changed {
        writeln!(out, "{}", output::file_changed(&result.path, &time, fix, color))?;
        if let Some(text) = result.output.as_deref().filter(|_| profile.echo_output && !fix) {
            writeln!(out, "{}", output::tool_output(text, color))?;
        }
    } else {
        let suffix = if fix { profile.clean_suffix } else { "" };
        writeln!(out, "{}", output::file_unchanged(&result.path, &time, suffix, color))?;
    }
    Ok(())
}
