//! Command-line interfaces of the cpp-scaffold tools.
//! Provides argument parsing and help text formatting using clap.

use crate::constants::TEMPLATE_REPO_URL;
use crate::context::{Arch, BuildSystem, ContextOverrides};
use crate::tool::{ClangFormat, ClangTidy};
use clap::{error::ErrorKind, Args, CommandFactory, Parser, ValueEnum};
use std::path::PathBuf;

/// Positional mode token accepted by the formatter and linter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Report files that need changes without touching them
    Check,
    /// Modify files in place
    Fix,
}

/// Options shared by the formatter and the linter.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Run mode; `fix` is the same as `--fix`
    #[arg(value_name = "MODE", value_enum)]
    pub mode: Option<Mode>,

    /// Modify files in place
    #[arg(short = 'i', long)]
    pub fix: bool,

    /// Only process files staged in git
    #[arg(long)]
    pub staged: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl BatchArgs {
    pub fn fix(&self) -> bool {
        self.fix || self.mode == Some(Mode::Fix)
    }
}

/// Command-line arguments of `cpp-format`.
#[derive(Parser, Debug)]
#[command(name = "cpp-format", author, version, about = "Check or fix C++ formatting with clang-format", long_about = None)]
pub struct FormatArgs {
    #[command(flatten)]
    pub batch: BatchArgs,

    /// clang-format style
    #[arg(long, default_value = ClangFormat::DEFAULT_STYLE)]
    pub style: String,
}

/// Command-line arguments of `cpp-lint`.
#[derive(Parser, Debug)]
#[command(name = "cpp-lint", author, version, about = "Check or fix C++ lint findings with clang-tidy", long_about = None)]
pub struct LintArgs {
    #[command(flatten)]
    pub batch: BatchArgs,

    /// Build directory containing compile_commands.json
    #[arg(short = 'p', long, value_name = "DIR", default_value = ClangTidy::DEFAULT_BUILD_DIR)]
    pub build_dir: PathBuf,
}

/// Command-line arguments of `cpp-templates`.
#[derive(Parser, Debug)]
#[command(name = "cpp-templates", author, version, about = "Compile Jinja templates for build system configuration", long_about = None)]
pub struct TemplatesArgs {
    /// Build system to generate configuration for
    #[arg(long, value_enum)]
    pub build_system: BuildSystem,

    /// C++ compiler path (overrides CPP_COMPILER)
    #[arg(long)]
    pub compiler: Option<String>,

    /// Target architecture (overrides CPP_TARGET_ARCH)
    #[arg(long, value_enum)]
    pub arch: Option<Arch>,

    /// Project root containing the templates directory
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl TemplatesArgs {
    pub fn overrides(&self) -> ContextOverrides {
        ContextOverrides {
            build_system: Some(self.build_system),
            compiler: self.compiler.clone(),
            arch: self.arch,
        }
    }
}

/// Command-line arguments of `cpp-bootstrap`.
#[derive(Parser, Debug)]
#[command(
    name = "cpp-bootstrap",
    author,
    version,
    about = "Bootstrap a new C++ project from the template repository",
    long_about = None,
    after_help = "Examples:
  cpp-bootstrap .
  cpp-bootstrap ./my-cpp-project
  cpp-bootstrap --project-name awesome-lib ./my-project"
)]
pub struct BootstrapArgs {
    /// Target directory
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Project name (default: derived from the target directory name)
    #[arg(long)]
    pub project_name: Option<String>,

    /// Template repository to clone
    #[arg(long, value_name = "URL", default_value = TEMPLATE_REPO_URL)]
    pub template_url: String,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Command-line arguments of `cpp-which`.
#[derive(Parser, Debug)]
#[command(name = "cpp-which", author, version, about = "Check that all given commands are available on PATH", long_about = None)]
pub struct WhichArgs {
    /// Commands that must all be found
    #[arg(value_name = "COMMAND", required = true)]
    pub commands: Vec<String>,
}

/// Exit status for a failed parse: 0 for `--help`/`--version`, 1 otherwise.
pub fn parse_error_exit_code(e: &clap::Error) -> i32 {
    if e.use_stderr() {
        1
    } else {
        0
    }
}

/// Parses command line arguments for `T`.
///
/// # Exits
/// * With status code 1 if required arguments are missing, after printing help
/// * With status code 1 after clap's message for any other argument error
/// * With status code 0 after printing help or version information
pub fn get_args<T: Parser + CommandFactory>() -> T {
    match T::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = T::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            }
            let _ = e.print();
            std::process::exit(parse_error_exit_code(&e));
        }
    }
}
