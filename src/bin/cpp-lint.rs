//! `cpp-lint`: checks or fixes clang-tidy findings in the project's C++ sources.

use std::io;
use std::path::Path;

use cpp_scaffold::{
    batch::run_batch,
    cli::{get_args, LintArgs},
    constants::LINT_DIRS,
    discover::find_cpp_files,
    error::{default_error_handler, Result},
    logger::init_logger,
    output::supports_color,
    tool::ClangTidy,
};

fn main() {
    let args: LintArgs = get_args();
    init_logger(args.batch.verbose);

    match run(args) {
        Ok(code) => std::process::exit(code),
        Err(err) => default_error_handler(err),
    }
}

fn run(args: LintArgs) -> Result<i32> {
    let root = Path::new(".");
    let files = find_cpp_files(root, &LINT_DIRS, args.batch.staged)?;
    let runner = ClangTidy::new(root, &args.build_dir);

    if !files.is_empty() && !runner.has_compile_database() {
        println!(
            "⚠ Skipping clang-tidy: no compile_commands.json found in {}/ or project root",
            runner.build_dir().display()
        );
        println!("  Configure the project first so the build generates a compilation database");
        return Ok(0);
    }

    let code = run_batch(
        &runner,
        &files,
        args.batch.fix(),
        supports_color(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;
    Ok(code)
}
