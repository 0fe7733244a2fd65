//! `cpp-templates`: renders build-system configuration files from the
//! project's templates directory.

use std::io;

use cpp_scaffold::{
    cli::{get_args, TemplatesArgs},
    compile::{compile_templates, context_banner},
    constants::TEMPLATES_DIR,
    context::TemplateContext,
    error::{default_error_handler, Result},
    logger::init_logger,
    renderer::MiniJinjaRenderer,
};

fn main() {
    let args: TemplatesArgs = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: TemplatesArgs) -> Result<()> {
    let mut context = TemplateContext::from_env();
    context.apply(&args.overrides());
    context.validate()?;

    println!("{}", context_banner(args.build_system, &context));

    let renderer = MiniJinjaRenderer::new(args.root.join(TEMPLATES_DIR))?;
    compile_templates(
        &renderer,
        &args.root,
        args.build_system,
        &context,
        &mut io::stdout().lock(),
    )?;

    println!();
    println!("✓ Template compilation complete for {}", args.build_system);
    Ok(())
}
