//! `cpp-bootstrap`: creates a new project from the C++ template repository.

use std::io;

use cpp_scaffold::{
    bootstrap::{bootstrap, GitCloner, NEXT_STEPS},
    cli::{get_args, BootstrapArgs},
    error::{default_error_handler, Result},
    logger::init_logger,
};

fn main() {
    let args: BootstrapArgs = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: BootstrapArgs) -> Result<()> {
    println!("\n🚀 C++ Template Bootstrap\n");

    bootstrap(
        &GitCloner::new(),
        &args.template_url,
        &args.path,
        args.project_name.as_deref(),
        &mut io::stdout().lock(),
    )?;

    println!("\n✨ Bootstrap complete!\n");
    println!("{NEXT_STEPS}");
    Ok(())
}
