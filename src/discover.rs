//! C++ source discovery.
//!
//! Files come either from walking project directories or from the git index
//! when only staged changes should be processed. Results are always relative
//! to the project root, unique, and sorted by their string form.

use crate::constants::CPP_PATTERNS;
use crate::error::{Error, Result};
use git2::{Repository, Status, StatusOptions};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Builds the set of file name patterns recognised as C++ sources.
pub fn cpp_globset() -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in CPP_PATTERNS {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}

fn is_cpp_file(globset: &GlobSet, path: &Path) -> bool {
    path.file_name().is_some_and(|name| globset.is_match(name))
}

/// Finds C++ files under `directories` of `root`.
///
/// # Arguments
/// * `root` - Project root every directory name is resolved against
/// * `directories` - Directory names to search (e.g. `["src", "include"]`)
/// * `staged_only` - Take file names from the git index instead of the filesystem
///
/// # Notes
/// - Missing directories are skipped silently
/// - Staged entries that were deleted from disk are excluded
/// - A failure to read the git status only logs a warning
pub fn find_cpp_files<P: AsRef<Path>>(
    root: P,
    directories: &[&str],
    staged_only: bool,
) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    let globset = cpp_globset()?;

    let mut files = if staged_only {
        match staged_files(root) {
            Ok(staged) => staged
                .into_iter()
                .filter(|path| is_cpp_file(&globset, path))
                .filter(|path| directories.iter().any(|dir| path.starts_with(dir)))
                .filter(|path| root.join(path).is_file())
                .collect(),
            Err(e) => {
                warn!("Could not get staged files from git: {e}");
                Vec::new()
            }
        }
    } else {
        walk_directories(root, directories, &globset)
    };

    sort_unique(&mut files);
    debug!("Discovered {} file(s)", files.len());
    Ok(files)
}

fn walk_directories(root: &Path, directories: &[&str], globset: &GlobSet) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for directory in directories {
        let dir_path = root.join(directory);
        if !dir_path.is_dir() {
            debug!("Skipping missing directory '{}'", dir_path.display());
            continue;
        }
        for entry in WalkDir::new(&dir_path).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() || !is_cpp_file(globset, entry.path()) {
                continue;
            }
            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            files.push(relative.to_path_buf());
        }
    }
    files
}

/// Returns the paths staged in the index of the repository containing `root`,
/// relative to `root`.
pub fn staged_files(root: &Path) -> Result<Vec<PathBuf>> {
    let repo = Repository::discover(root)?;
    let workdir = repo
        .workdir()
        .ok_or_else(|| Error::ConfigError("repository has no working directory".to_string()))?
        .canonicalize()?;
    let root = root.canonicalize()?;

    let mut options = StatusOptions::new();
    options.include_untracked(false).include_ignored(false);
    let staged = Status::INDEX_NEW
        | Status::INDEX_MODIFIED
        | Status::INDEX_RENAMED
        | Status::INDEX_TYPECHANGE;

    let mut files = Vec::new();
    for entry in repo.statuses(Some(&mut options))?.iter() {
        if !entry.status().intersects(staged) {
            continue;
        }
        let Some(path) = entry.path() else {
            continue;
        };
        if let Ok(relative) = workdir.join(path).strip_prefix(&root) {
            files.push(relative.to_path_buf());
        }
    }
    Ok(files)
}

/// Sorts paths by their string form and drops duplicates.
pub fn sort_unique(files: &mut Vec<PathBuf>) {
    files.sort_by(|a, b| a.to_string_lossy().cmp(&b.to_string_lossy()));
    files.dedup();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpp_globset_matches_file_names() {
        let globset = cpp_globset().unwrap();
        assert!(is_cpp_file(&globset, Path::new("src/main.cpp")));
        assert!(is_cpp_file(&globset, Path::new("include/greeter.hpp")));
        assert!(is_cpp_file(&globset, Path::new("include/legacy.h")));
        assert!(!is_cpp_file(&globset, Path::new("src/main.cc")));
        assert!(!is_cpp_file(&globset, Path::new("README.md")));
    }

    #[test]
    fn test_sort_unique_uses_string_order() {
        let mut files = vec![
            PathBuf::from("src/a/x.cpp"),
            PathBuf::from("src/a-b.cpp"),
            PathBuf::from("src/a/x.cpp"),
        ];
        sort_unique(&mut files);
        assert_eq!(files, vec![PathBuf::from("src/a-b.cpp"), PathBuf::from("src/a/x.cpp")]);
    }
}
