//! External formatter and linter runners.
//!
//! Each runner turns one invocation of its tool into a [`ToolOutcome`]. A
//! missing binary or a crashing tool is an outcome like any other, so the
//! batch loop never has to unwind on a per-file problem.

use crate::constants::COMPILE_COMMANDS;
use crate::process::{run_capture, Captured};
use log::debug;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Result of running a tool against a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutcome {
    /// Nothing to change
    Clean,
    /// The file was changed (fix mode) or needs changes (check mode)
    Changed { output: Option<String> },
    /// The tool binary could not be found
    Unavailable { tool: String },
    /// The tool ran but reported a hard error
    Failed { message: String },
}

/// Wording and reporting options of one batch task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskProfile {
    pub check_mode: &'static str,
    pub fix_mode: &'static str,
    pub empty_message: &'static str,
    pub fix_hint: &'static str,
    pub fixed_action: &'static str,
    pub clean_suffix: &'static str,
    /// Echo tool diagnostics for files with issues in check mode
    pub echo_output: bool,
}

impl TaskProfile {
    pub fn mode(&self, fix: bool) -> &'static str {
        if fix {
            self.fix_mode
        } else {
            self.check_mode
        }
    }
}

pub const FORMAT_PROFILE: TaskProfile = TaskProfile {
    check_mode: "Checking",
    fix_mode: "Formatting",
    empty_message: "No files to format",
    fix_hint: "formatting",
    fixed_action: "Formatted",
    clean_suffix: " (unchanged)",
    echo_output: false,
};

pub const LINT_PROFILE: TaskProfile = TaskProfile {
    check_mode: "Linting",
    fix_mode: "Linting and fixing",
    empty_message: "No files to lint",
    fix_hint: "linting issues",
    fixed_action: "Fixed issues in",
    clean_suffix: " (clean)",
    echo_output: true,
};

/// Trait for tools the batch driver can apply to files.
pub trait ToolRunner {
    /// Wording used when reporting this tool's batch.
    fn profile(&self) -> &TaskProfile;

    /// Runs the tool on `file`. Check mode (`fix == false`) never mutates.
    fn run(&self, file: &Path, fix: bool) -> ToolOutcome;
}

/// Per-file record produced by the batch driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResult {
    pub path: PathBuf,
    pub elapsed: Duration,
    pub error: Option<String>,
    pub changed: bool,
    pub has_issues: bool,
    pub output: Option<String>,
}

impl FileResult {
    pub fn from_outcome(path: &Path, elapsed: Duration, outcome: ToolOutcome) -> Self {
        let mut result = Self {
            path: path.to_path_buf(),
            elapsed,
            error: None,
            changed: false,
            has_issues: false,
            output: None,
        };
        match outcome {
            ToolOutcome::Clean => {}
            ToolOutcome::Changed { output } => {
                result.changed = true;
                result.has_issues = true;
                result.output = output;
            }
            ToolOutcome::Unavailable { tool } => result.error = Some(format!("{tool} not found")),
            ToolOutcome::Failed { message } => result.error = Some(message),
        }
        result
    }
}

fn spawn_failure(tool: &str, err: io::Error) -> ToolOutcome {
    if err.kind() == io::ErrorKind::NotFound {
        ToolOutcome::Unavailable { tool: tool.to_string() }
    } else {
        ToolOutcome::Failed { message: err.to_string() }
    }
}

/// `clang-format` runner.
pub struct ClangFormat {
    program: String,
    style: String,
    root: PathBuf,
}

impl ClangFormat {
    pub const DEFAULT_STYLE: &'static str = "Google";

    pub fn new<P: Into<PathBuf>>(root: P, style: &str) -> Self {
        Self { program: "clang-format".to_string(), style: style.to_string(), root: root.into() }
    }

    /// Uses a different executable, e.g. a versioned `clang-format-18`.
    pub fn with_program<S: Into<String>>(mut self, program: S) -> Self {
        self.program = program.into();
        self
    }

    fn needs_formatting(&self, file: &Path) -> io::Result<bool> {
        let args = [
            "--dry-run".to_string(),
            "--Werror".to_string(),
            format!("--style={}", self.style),
            file.to_string_lossy().into_owned(),
        ];
        let captured = run_capture(&self.program, &args, &self.root)?;
        Ok(!captured.success())
    }
}

impl ToolRunner for ClangFormat {
    fn profile(&self) -> &TaskProfile {
        &FORMAT_PROFILE
    }

    fn run(&self, file: &Path, fix: bool) -> ToolOutcome {
        let needs_formatting = match self.needs_formatting(file) {
            Ok(needs) => needs,
            Err(e) => return spawn_failure(&self.program, e),
        };
        if !needs_formatting {
            return ToolOutcome::Clean;
        }
        if !fix {
            return ToolOutcome::Changed { output: None };
        }

        let args = [
            "-i".to_string(),
            format!("--style={}", self.style),
            file.to_string_lossy().into_owned(),
        ];
        match run_capture(&self.program, &args, &self.root) {
            Ok(captured) if captured.success() => ToolOutcome::Changed { output: None },
            Ok(captured) => {
                let stderr = captured.stderr.trim();
                let message = if stderr.is_empty() { "Unknown error" } else { stderr };
                ToolOutcome::Failed { message: message.to_string() }
            }
            Err(e) => spawn_failure(&self.program, e),
        }
    }
}

/// `clang-tidy` runner.
pub struct ClangTidy {
    program: String,
    build_dir: PathBuf,
    root: PathBuf,
}

impl ClangTidy {
    pub const DEFAULT_BUILD_DIR: &'static str = "build";

    pub fn new<P: Into<PathBuf>, B: Into<PathBuf>>(root: P, build_dir: B) -> Self {
        Self { program: "clang-tidy".to_string(), build_dir: build_dir.into(), root: root.into() }
    }

    pub fn with_program<S: Into<String>>(mut self, program: S) -> Self {
        self.program = program.into();
        self
    }

    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    /// Whether a compilation database exists in the build directory or the
    /// project root. clang-tidy cannot resolve includes without one.
    pub fn has_compile_database(&self) -> bool {
        self.root.join(&self.build_dir).join(COMPILE_COMMANDS).exists()
            || self.root.join(COMPILE_COMMANDS).exists()
    }

    pub fn args(&self, file: &Path, fix: bool) -> Vec<String> {
        let mut args = vec![
            "-p".to_string(),
            self.build_dir.to_string_lossy().into_owned(),
            "--config-file=.clang-tidy".to_string(),
            "--quiet".to_string(),
        ];
        // MSVC headers trip these diagnostics on every file
        if cfg!(windows) {
            args.push(
                "--checks=-clang-diagnostic-builtin-macro-redefined,\
                 -clang-diagnostic-unused-command-line-argument"
                    .to_string(),
            );
        }
        if fix {
            args.push("--fix".to_string());
        }
        args.push(file.to_string_lossy().into_owned());
        args
    }

    /// Classifies a finished clang-tidy run.
    pub fn classify(captured: &Captured) -> ToolOutcome {
        let stdout = captured.stdout.trim();
        let stderr = captured.stderr.trim();
        let failed = !captured.success();

        let has_issues = failed || !stdout.is_empty();
        let output = if failed && !stderr.is_empty() { stderr } else { stdout };

        if failed && output.to_lowercase().contains("error:") {
            ToolOutcome::Failed { message: output.to_string() }
        } else if has_issues {
            let output = (!output.is_empty()).then(|| output.to_string());
            ToolOutcome::Changed { output }
        } else {
            ToolOutcome::Clean
        }
    }
}

impl ToolRunner for ClangTidy {
    fn profile(&self) -> &TaskProfile {
        &LINT_PROFILE
    }

    fn run(&self, file: &Path, fix: bool) -> ToolOutcome {
        match run_capture(&self.program, &self.args(file, fix), &self.root) {
            Ok(captured) => {
                debug!("{} exited with {:?} for '{}'", self.program, captured.code, file.display());
                Self::classify(&captured)
            }
            Err(e) => spawn_failure(&self.program, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captured(code: i32, stdout: &str, stderr: &str) -> Captured {
        Captured { code: Some(code), stdout: stdout.to_string(), stderr: stderr.to_string() }
    }

    #[test]
    fn test_tidy_clean_run() {
        assert_eq!(ClangTidy::classify(&captured(0, "  \n", "")), ToolOutcome::Clean);
    }

    #[test]
    fn test_tidy_findings_on_stdout() {
        let outcome = ClangTidy::classify(&captured(0, "a.cpp:1:1: warning: x\n", ""));
        assert_eq!(
            outcome,
            ToolOutcome::Changed { output: Some("a.cpp:1:1: warning: x".to_string()) }
        );
    }

    #[test]
    fn test_tidy_error_marker_with_failure_is_hard_error() {
        let outcome = ClangTidy::classify(&captured(1, "", "a.cpp:3:1: Error: unknown type"));
        assert_eq!(
            outcome,
            ToolOutcome::Failed { message: "a.cpp:3:1: Error: unknown type".to_string() }
        );
    }

    #[test]
    fn test_tidy_error_marker_without_failure_is_finding() {
        let outcome = ClangTidy::classify(&captured(0, "a.cpp:3:1: error: x", ""));
        assert!(matches!(outcome, ToolOutcome::Changed { .. }));
    }

    #[test]
    fn test_tidy_failure_without_marker_is_finding() {
        let outcome = ClangTidy::classify(&captured(1, "", "3 warnings generated."));
        assert_eq!(
            outcome,
            ToolOutcome::Changed { output: Some("3 warnings generated.".to_string()) }
        );
    }

    #[test]
    fn test_tidy_args() {
        let tidy = ClangTidy::new(".", "out");
        let args = tidy.args(Path::new("src/a.cpp"), true);
        assert_eq!(&args[..4], ["-p", "out", "--config-file=.clang-tidy", "--quiet"]);
        assert_eq!(args[args.len() - 2], "--fix");
        assert_eq!(args[args.len() - 1], "src/a.cpp");
        assert!(!tidy.args(Path::new("src/a.cpp"), false).contains(&"--fix".to_string()));
    }

    #[test]
    fn test_missing_binary_is_synthetic_error() {
        let format = ClangFormat::new(".", "Google").with_program("cpp-scaffold-missing-format");
        let outcome = format.run(Path::new("src/a.cpp"), false);
        assert_eq!(
            outcome,
            ToolOutcome::Unavailable { tool: "cpp-scaffold-missing-format".to_string() }
        );

        let result = FileResult::from_outcome(Path::new("src/a.cpp"), Duration::ZERO, outcome);
        assert_eq!(result.error.as_deref(), Some("cpp-scaffold-missing-format not found"));
        assert!(!result.changed);
    }

    #[test]
    fn test_file_result_from_changed() {
        let result = FileResult::from_outcome(
            Path::new("a.cpp"),
            Duration::from_millis(5),
            ToolOutcome::Changed { output: Some("warning".to_string()) },
        );
        assert!(result.changed);
        assert!(result.has_issues);
        assert_eq!(result.error, None);
        assert_eq!(result.output.as_deref(), Some("warning"));
    }
}
