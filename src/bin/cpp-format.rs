//! `cpp-format`: checks or fixes the formatting of the project's C++ sources.

use std::io;
use std::path::Path;

use cpp_scaffold::{
    batch::run_batch,
    cli::{get_args, FormatArgs},
    constants::FORMAT_DIRS,
    discover::find_cpp_files,
    error::{default_error_handler, Result},
    logger::init_logger,
    output::supports_color,
    tool::ClangFormat,
};

fn main() {
    let args: FormatArgs = get_args();
    init_logger(args.batch.verbose);

    match run(args) {
        Ok(code) => std::process::exit(code),
        Err(err) => default_error_handler(err),
    }
}

fn run(args: FormatArgs) -> Result<i32> {
    let root = Path::new(".");
    let files = find_cpp_files(root, &FORMAT_DIRS, args.batch.staged)?;
    let runner = ClangFormat::new(root, &args.style);

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
