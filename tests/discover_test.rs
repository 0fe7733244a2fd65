use cpp_scaffold::discover::find_cpp_files;
use git2::Repository;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "int main() {}\n").unwrap();
}

fn paths(values: &[&str]) -> Vec<PathBuf> {
    values.iter().map(PathBuf::from).collect()
}

#[test]
fn test_walks_directory_recursively() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "src/sub/b.h");
    touch(temp_dir.path(), "src/a.cpp");

    let files = find_cpp_files(temp_dir.path(), &["src"], false).unwrap();
    assert_eq!(files, paths(&["src/a.cpp", "src/sub/b.h"]));
}

#[test]
fn test_filters_extensions_and_skips_missing_directories() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "include/greeter.hpp");
    touch(temp_dir.path(), "src/main.cpp");
    touch(temp_dir.path(), "src/notes.txt");
    touch(temp_dir.path(), "src/main.cc");
    touch(temp_dir.path(), "docs/example.cpp");

    let files = find_cpp_files(temp_dir.path(), &["src", "include", "tests"], false).unwrap();
    assert_eq!(files, paths(&["include/greeter.hpp", "src/main.cpp"]));
}

#[test]
fn test_results_are_sorted_and_unique() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "src/z.cpp");
    touch(temp_dir.path(), "src/m/n.h");
    touch(temp_dir.path(), "src/b.hpp");

    // Listing the same directory twice must not duplicate files
    let files = find_cpp_files(temp_dir.path(), &["src", "src"], false).unwrap();
    let mut expected = files.clone();
    expected.sort_by(|a, b| a.to_string_lossy().cmp(&b.to_string_lossy()));
    expected.dedup();

    assert_eq!(files, expected);
    assert_eq!(files.len(), 3);
}

#[test]
fn test_no_directories_found() {
    let temp_dir = TempDir::new().unwrap();
    let files = find_cpp_files(temp_dir.path(), &["src", "include"], false).unwrap();
    assert!(files.is_empty());
}

fn stage(repo: &Repository, relative: &[&str]) {
    let mut index = repo.index().unwrap();
    for path in relative {
        index.add_path(Path::new(path)).unwrap();
    }
    index.write().unwrap();
}

#[test_log::test]
fn test_staged_only_reads_git_index() {
    let temp_dir = TempDir::new().unwrap();
    let repo = Repository::init(temp_dir.path()).unwrap();

    touch(temp_dir.path(), "src/staged.cpp");
    touch(temp_dir.path(), "src/unstaged.cpp");
    touch(temp_dir.path(), "include/api.hpp");
    touch(temp_dir.path(), "tests/test_api.cpp");
    touch(temp_dir.path(), "src/readme.md");
    stage(&repo, &["src/staged.cpp", "include/api.hpp", "tests/test_api.cpp", "src/readme.md"]);

    let files = find_cpp_files(temp_dir.path(), &["src", "include"], true).unwrap();
    assert_eq!(files, paths(&["include/api.hpp", "src/staged.cpp"]));
}

#[test_log::test]
fn test_staged_file_deleted_from_disk_is_excluded() {
    let temp_dir = TempDir::new().unwrap();
    let repo = Repository::init(temp_dir.path()).unwrap();

    touch(temp_dir.path(), "src/kept.cpp");
    touch(temp_dir.path(), "src/gone.cpp");
    stage(&repo, &["src/kept.cpp", "src/gone.cpp"]);
    fs::remove_file(temp_dir.path().join("src/gone.cpp")).unwrap();

    let files = find_cpp_files(temp_dir.path(), &["src"], true).unwrap();
    assert_eq!(files, paths(&["src/kept.cpp"]));
}

#[test_log::test]
fn test_staged_outside_repository_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "src/a.cpp");

    // Not a git repository: only a warning, no error
    let files = find_cpp_files(temp_dir.path(), &["src"], true).unwrap();
    assert!(files.is_empty());
}
