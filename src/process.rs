//! Blocking execution of external tools with captured output.

use log::debug;
use std::io;
use std::path::Path;
use std::process::Command;

/// Exit status and decoded streams of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captured {
    /// Exit code, `None` when the process was terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl Captured {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs `program` with `args` inside `cwd` and waits for it to exit.
///
/// A program that cannot be found surfaces as [`io::ErrorKind::NotFound`].
pub fn run_capture<S: AsRef<str>>(program: &str, args: &[S], cwd: &Path) -> io::Result<Captured> {
    let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
    debug!("Running '{} {}' in '{}'", program, args.join(" "), cwd.display());

    let output = Command::new(program).args(&args).current_dir(cwd).output()?;

    Ok(Captured {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_not_found() {
        let err = run_capture("cpp-scaffold-no-such-tool", &["--version"], Path::new("."))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_success_requires_zero_exit() {
        let ok = Captured { code: Some(0), ..Default::default() };
        let failed = Captured { code: Some(1), ..Default::default() };
        let killed = Captured { code: None, ..Default::default() };
        assert!(ok.success());
        assert!(!failed.success());
        assert!(!killed.success());
    }
}
