//! Bootstrapping of a new project from the C++ template repository.
//! Clones the template into an empty directory, strips template-only files
//! and renames the project in its metadata files.

use crate::constants::{DEFAULT_PROJECT_NAME, TEMPLATE_ARTIFACTS};
use crate::error::{Error, Result};
use cruet::Inflector;
use log::debug;
use regex::Regex;
use std::fs;
use std::io::{self, Write};
use std::path::{Component, Path};
use std::sync::LazyLock;

static INVALID_NAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9-]").expect("valid project name pattern"));

/// Trait for fetching the template into a directory.
pub trait RepositoryCloner {
    /// Clones `url` into the existing, empty directory `target`.
    fn clone_into(&self, url: &str, target: &Path) -> Result<()>;
}

/// Shallow clone through libgit2.
pub struct GitCloner {
    depth: i32,
}

impl GitCloner {
    pub fn new() -> Self {
        Self { depth: 1 }
    }
}

impl Default for GitCloner {
    fn default() -> Self {
        GitCloner::new()
    }
}

impl RepositoryCloner for GitCloner {
    fn clone_into(&self, url: &str, target: &Path) -> Result<()> {
        debug!("Cloning '{}' to '{}'.", url, target.display());

        let mut fetch_opts = git2::FetchOptions::new();
        fetch_opts.depth(self.depth);

        let mut builder = git2::build::RepoBuilder::new();
        builder.fetch_options(fetch_opts);

        match builder.clone(url, target) {
            Ok(_) => Ok(()),
            Err(source) => Err(Error::CloneError { url: url.to_string(), source }),
        }
    }
}

/// Derives a package-style project name from a target directory.
///
/// `target` is resolved lexically against `cwd` (so `.` and `..` name the
/// directory they point at) and its last component is used. The name is
/// lower-cased, spaces and underscores become hyphens, anything outside
/// `[a-z0-9-]` is dropped and surrounding hyphens are trimmed.
pub fn extract_project_name(target: &Path, cwd: &Path) -> String {
    let mut resolved = cwd.to_path_buf();
    for component in target.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    let dir_name =
        resolved.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    normalize_project_name(&dir_name)
}

pub fn normalize_project_name(name: &str) -> String {
    let name = name.replace([' ', '_'], "-").to_lowercase();
    let name = INVALID_NAME_CHARS.replace_all(&name, "");
    let name = name.trim_matches('-');

    if name.is_empty() {
        DEFAULT_PROJECT_NAME.to_string()
    } else {
        name.to_string()
    }
}

/// `my-cool-lib` → `My Cool Lib`.
pub fn project_title(project_name: &str) -> String {
    project_name.replace(['-', '_'], " ").to_title_case()
}

/// Creates `target` if needed and checks that it is empty.
///
/// # Errors
/// * `Error::TargetNotEmpty` if the directory already has entries
pub fn prepare_target(target: &Path) -> Result<()> {
    fs::create_dir_all(target)?;
    if fs::read_dir(target)?.next().is_some() {
        return Err(Error::TargetNotEmpty { target_dir: target.display().to_string() });
    }
    Ok(())
}

/// Removes a file or directory. Returns whether anything was removed.
pub fn remove_if_exists(path: &Path) -> io::Result<bool> {
    let result = match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    match result {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// Removes the template-only entries from a fresh clone.
pub fn remove_template_artifacts(target: &Path, out: &mut dyn Write) -> Result<()> {
    for artifact in TEMPLATE_ARTIFACTS {
        if remove_if_exists(&target.join(artifact))? {
            writeln!(out, "  ✓ Removed: {artifact}")?;
        }
    }
    Ok(())
}

/// A metadata file and how to rewrite it for a new project name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataEdit {
    /// Literal find/replace pairs applied in order
    Replace { file: &'static str, pairs: Vec<(String, String)> },
    /// `vcpkg.json` manifest fields
    VcpkgManifest { file: &'static str },
}

impl MetadataEdit {
    pub fn file(&self) -> &'static str {
        match self {
            MetadataEdit::Replace { file, .. } | MetadataEdit::VcpkgManifest { file } => file,
        }
    }
}

const TEMPLATE_DESCRIPTION: &str =
    "A C++ Bootstrap/Template project using modern tools and best practices";

/// The fixed list of edits renaming the template to `project_name`.
pub fn metadata_edits(project_name: &str) -> Vec<MetadataEdit> {
    let title = project_title(project_name);
    let pair = |from: &str, to: String| (from.to_string(), to);

    vec![
        MetadataEdit::Replace {
            file: "CMakeLists.txt",
            pairs: vec![
                pair("project(\n    cpp-template", format!("project(\n    {project_name}")),
                pair(
                    &format!("DESCRIPTION \"{TEMPLATE_DESCRIPTION}\""),
                    format!("DESCRIPTION \"{title} project\""),
                ),
            ],
        },
        MetadataEdit::VcpkgManifest { file: "vcpkg.json" },
        MetadataEdit::Replace {
            file: "xmake.lua",
            pairs: vec![
                pair("set_project(\"cpp-template\")", format!("set_project(\"{project_name}\")")),
                pair(
                    &format!("set_description(\"{TEMPLATE_DESCRIPTION}\")"),
                    format!("set_description(\"{title} project\")"),
                ),
                pair("target(\"cpp-template\")", format!("target(\"{project_name}\")")),
                pair(
                    "target(\"cpp-template-tests\")",
                    format!("target(\"{project_name}-tests\")"),
                ),
            ],
        },
        MetadataEdit::Replace {
            file: "Taskfile.yml",
            pairs: vec![pair(
                "PROJECT_NAME: '{{default .PROJECT_NAME \"cpp-template\"}}'",
                format!("PROJECT_NAME: '{{{{default .PROJECT_NAME \"{project_name}\"}}}}'"),
            )],
        },
        MetadataEdit::Replace {
            file: "README.md",
            pairs: vec![
                pair("# C++ Bootstrap Template", format!("# {title}")),
                pair(
                    "> A comprehensive C++ Bootstrap/Template project using modern tools and best practices",
                    format!("> {title} - A C++ project"),
                ),
                pair(
                    "uvx --from git+https://github.com/templ-project/cpp.git bootstrap ./my-cpp-project",
                    format!("uvx --from git+https://your-repo-url.git bootstrap ./{project_name}"),
                ),
                pair(
                    "git clone https://github.com/templ-project/cpp.git my-cpp-project",
                    format!("git clone <your-repo-url> {project_name}"),
                ),
            ],
        },
    ]
}

fn rewrite_vcpkg_manifest(content: &str, project_name: &str) -> Result<String> {
    let mut manifest: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(content)?;
    manifest.insert("name".to_string(), project_name.into());
    manifest.insert("version".to_string(), "0.1.0".into());
    manifest
        .insert("description".to_string(), format!("{} project", project_title(project_name)).into());

    let mut text = serde_json::to_string_pretty(&manifest)?;
    text.push('\n');
    Ok(text)
}

/// Applies one edit inside `target`. Returns `false` when the file is absent.
pub fn apply_metadata_edit(target: &Path, edit: &MetadataEdit, project_name: &str) -> Result<bool> {
    let path = target.join(edit.file());
    if !path.is_file() {
        debug!("Skipping missing '{}'", path.display());
        return Ok(false);
    }

    let content = fs::read_to_string(&path)?;
    let updated = match edit {
        MetadataEdit::Replace { pairs, .. } => pairs
            .iter()
            .fold(content, |text, (from, to)| text.replace(from.as_str(), to)),
        MetadataEdit::VcpkgManifest { .. } => rewrite_vcpkg_manifest(&content, project_name)?,
    };

    fs::write(&path, updated).map_err(|source| Error::WriteError { path, source })?;
    Ok(true)
}

/// Renames the template project inside `target`.
pub fn update_metadata(target: &Path, project_name: &str, out: &mut dyn Write) -> Result<()> {
    for edit in metadata_edits(project_name) {
        if apply_metadata_edit(target, &edit, project_name)? {
            writeln!(out, "  ✓ Updated {} metadata", edit.file())?;
        }
    }
    Ok(())
}

/// Runs the whole bootstrap: check the target, clone, clean up, rename.
///
/// # Arguments
/// * `cloner` - How the template repository is fetched
/// * `url` - Template repository URL
/// * `target` - Directory to create the project in; must be empty
/// * `project_name` - Explicit name, derived from `target` when `None`
/// * `out` - Progress output
///
/// # Returns
/// * `Result<String>` - The project name that was applied
pub fn bootstrap(
    cloner: &dyn RepositoryCloner,
    url: &str,
    target: &Path,
    project_name: Option<&str>,
    out: &mut dyn Write,
) -> Result<String> {
    let cwd = std::env::current_dir()?;
    let project_name = match project_name {
        Some(name) => name.to_string(),
        None => extract_project_name(target, &cwd),
    };
    writeln!(out, "Project name: {project_name}")?;

    writeln!(out, "📁 Cloning template repository...\n")?;
    prepare_target(target)?;
    writeln!(out, "  Cloning from {url}...")?;
    cloner.clone_into(url, target)?;
    writeln!(out, "  ✓ Template cloned to {}", target.display())?;

    writeln!(out, "\n📦 Cleaning up template artifacts...\n")?;
    remove_template_artifacts(target, out)?;

    writeln!(out, "\n📝 Updating project metadata for '{project_name}'...\n")?;
    update_metadata(target, &project_name, out)?;

    Ok(project_name)
}

/// Instructions printed after a successful bootstrap.
pub const NEXT_STEPS: &str = "Next steps:
  1. Install dependencies:
     # Using Conan
     conan install . --build=missing
     # OR using vcpkg
     vcpkg install
  2. Build the project:
     cmake -B build -DCMAKE_CXX_COMPILER=clang++
     cmake --build build --parallel
  3. Run tests:
     cd build && ctest
  4. Start coding!
";
