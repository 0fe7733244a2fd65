//! Rendering of the build-system configuration files of a project.

use crate::context::{BuildSystem, TemplateContext};
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use log::debug;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// A template and the project file it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateTarget {
    pub template: &'static str,
    /// Output path relative to the project root
    pub output: &'static str,
}

const fn target(template: &'static str, output: &'static str) -> TemplateTarget {
    TemplateTarget { template, output }
}

const CMAKE_TARGETS: [TemplateTarget; 2] = [
    target("CMakeLists.txt.j2", "CMakeLists.txt"),
    target("src_CMakeLists.txt.j2", "src/CMakeLists.txt"),
];

const XMAKE_TARGETS: [TemplateTarget; 1] = [target("xmake.lua.j2", "xmake.lua")];

const BAZEL_TARGETS: [TemplateTarget; 5] = [
    target("BUILD.bazel.j2", "BUILD.bazel"),
    target("tests_BUILD.bazel.j2", "tests/BUILD.bazel"),
    target(".bazelrc.j2", ".bazelrc"),
    target("MODULE.bazel.j2", "MODULE.bazel"),
    target("WORKSPACE.j2", "WORKSPACE"),
];

/// Files generated for a build system.
pub fn targets_for(build_system: BuildSystem) -> &'static [TemplateTarget] {
    match build_system {
        BuildSystem::Cmake => &CMAKE_TARGETS,
        BuildSystem::Xmake => &XMAKE_TARGETS,
        BuildSystem::Bazel => &BAZEL_TARGETS,
    }
}

/// Trims trailing whitespace and terminates the text with a single newline.
pub fn with_trailing_newline(rendered: &str) -> String {
    let mut text = rendered.trim_end().to_string();
    text.push('\n');
    text
}

/// Renders `template` and writes it to `output_path`.
///
/// Rendering completes before anything touches the filesystem, so a failing
/// template never leaves a partial file behind.
pub fn compile_template(
    renderer: &dyn TemplateRenderer,
    template: &str,
    output_path: &Path,
    context: &TemplateContext,
) -> Result<()> {
    let rendered = renderer.render(template, context)?;
    let content = with_trailing_newline(&rendered);

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|source| Error::WriteError { path: parent.to_path_buf(), source })?;
    }
    fs::write(output_path, content)
        .map_err(|source| Error::WriteError { path: output_path.to_path_buf(), source })?;

    debug!("Rendered '{}' into '{}'", template, output_path.display());
    Ok(())
}

/// Renders every file of `build_system` under `root`, reporting each
/// generated file to `out`. Stops at the first failure.
pub fn compile_templates(
    renderer: &dyn TemplateRenderer,
    root: &Path,
    build_system: BuildSystem,
    context: &TemplateContext,
    out: &mut dyn Write,
) -> Result<Vec<PathBuf>> {
    let mut generated = Vec::new();
    for target in targets_for(build_system) {
        let output_path = root.join(target.output);
        compile_template(renderer, target.template, &output_path, context)?;
        writeln!(out, "✓ Generated: {}", target.output)?;
        generated.push(output_path);
    }
    Ok(generated)
}

/// Human-readable summary of the resolved context.
pub fn context_banner(build_system: BuildSystem, context: &TemplateContext) -> String {
    let mut banner = format!(
        "📝 Compiling templates for {build_system}...\n   Project: {}\n   Build Type: {}\n   Build Dir: {}\n   Compiler: {}\n",
        context.project_name, context.build_type, context.build_dir, context.compiler
    );
    if !context.target_arch.is_empty() {
        banner.push_str(&format!("   Target Arch: {}\n", context.target_arch));
    }
    banner
}
