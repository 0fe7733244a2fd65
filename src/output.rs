//! Status-line formatting for the formatter and linter batches.
//!
//! Every function is pure: it receives the color decision as a flag and
//! returns the text to print, so the batch driver owns all I/O.

use colored::Colorize;
use std::io::IsTerminal;
use std::path::Path;

/// Decides once per run whether ANSI styling should be emitted.
pub fn supports_color() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

/// Formats an elapsed duration in whole milliseconds.
pub fn time_str(elapsed_ms: u128) -> String {
    format!("{elapsed_ms}ms")
}

/// Lines for a file that failed. The second line belongs on stderr.
pub fn file_error(file: &Path, time: &str, error: &str, color: bool) -> (String, String) {
    let file = file.display();
    if color {
        (
            format!("{} {} {}", "✖".red(), file, time.bright_white()),
            format!("  {}", format!("Error: {error}").red()),
        )
    } else {
        (format!("✖ {file} {time}"), format!("  Error: {error}"))
    }
}

/// Line for a file that was changed (fix mode) or needs changes (check mode).
pub fn file_changed(file: &Path, time: &str, fix: bool, color: bool) -> String {
    let file = file.display().to_string();
    if color {
        let symbol = if fix { "✓".green() } else { "⚠".yellow() };
        format!("{} {} {}", symbol, file.bright_white(), time.bright_white())
    } else {
        let symbol = if fix { "✓" } else { "!" };
        format!("{symbol} {file} {time}")
    }
}

/// Line for a file the tool left alone.
pub fn file_unchanged(file: &Path, time: &str, suffix: &str, color: bool) -> String {
    if color {
        format!(
            "{} {}",
            format!("  {}", file.display()).bright_black(),
            format!("{time}{suffix}").bright_white()
        )
    } else {
        format!("  {} {time}{suffix}", file.display())
    }
}

/// Tool diagnostics echoed under a file line.
pub fn tool_output(output: &str, color: bool) -> String {
    if color {
        output.dimmed().to_string()
    } else {
        output.to_string()
    }
}

pub fn header(mode: &str, count: usize, color: bool) -> String {
    let text = format!("{mode} {count} file(s)...");
    if color {
        text.bold().to_string()
    } else {
        text
    }
}

pub fn summary_header(mode: &str, total_ms: u128, color: bool) -> String {
    let text = format!("{mode} completed in {total_ms}ms!");
    if color {
        text.bold().to_string()
    } else {
        text
    }
}

/// Error tally. Belongs on stderr.
pub fn error_count(count: usize, color: bool) -> String {
    let text = format!("✖ {count} file(s) had errors");
    if color {
        text.red().to_string()
    } else {
        text
    }
}

/// Two lines telling the user how many files need work and how to fix them.
pub fn needs_fixing(count: usize, hint: &str, color: bool) -> (String, String) {
    if color {
        (
            format!("⚠ {count} file(s) need {hint}").yellow().to_string(),
            "Use '--fix' to fix them.".dimmed().to_string(),
        )
    } else {
        (format!("! {count} file(s) need {hint}"), "Use '--fix' to fix them.".to_string())
    }
}

pub fn fixed_count(count: usize, action: &str, color: bool) -> String {
    let text = format!("✓ {action} {count} file(s)");
    if color {
        text.green().to_string()
    } else {
        text
    }
}
