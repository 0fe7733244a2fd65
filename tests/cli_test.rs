use clap::Parser;
use cpp_scaffold::cli::{
    parse_error_exit_code, BootstrapArgs, FormatArgs, LintArgs, Mode, TemplatesArgs, WhichArgs,
};
use cpp_scaffold::constants::TEMPLATE_REPO_URL;
use cpp_scaffold::context::{Arch, BuildSystem};
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(bin: &str, args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from(bin)];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_format_defaults() {
    let parsed = FormatArgs::try_parse_from(make_args("cpp-format", &[])).unwrap();
    assert!(!parsed.batch.fix());
    assert!(!parsed.batch.staged);
    assert!(!parsed.batch.verbose);
    assert_eq!(parsed.style, "Google");
}

#[test]
fn test_format_fix_spellings() {
    for spelling in [&["fix"][..], &["-i"], &["--fix"]] {
        let parsed = FormatArgs::try_parse_from(make_args("cpp-format", spelling)).unwrap();
        assert!(parsed.batch.fix(), "{spelling:?} should enable fix mode");
    }
}

#[test]
fn test_format_staged_then_fix() {
    let parsed = FormatArgs::try_parse_from(make_args("cpp-format", &["--staged", "fix"])).unwrap();
    assert!(parsed.batch.staged);
    assert_eq!(parsed.batch.mode, Some(Mode::Fix));
    assert!(parsed.batch.fix());
}

#[test]
fn test_format_rejects_unknown_mode() {
    assert!(FormatArgs::try_parse_from(make_args("cpp-format", &["reformat"])).is_err());
}

#[test]
fn test_lint_build_dir() {
    let parsed = LintArgs::try_parse_from(make_args("cpp-lint", &[])).unwrap();
    assert_eq!(parsed.build_dir, PathBuf::from("build"));

    let parsed =
        LintArgs::try_parse_from(make_args("cpp-lint", &["-p", "out", "--fix"])).unwrap();
    assert_eq!(parsed.build_dir, PathBuf::from("out"));
    assert!(parsed.batch.fix());

    let parsed =
        LintArgs::try_parse_from(make_args("cpp-lint", &["--build-dir", "cmake-build"])).unwrap();
    assert_eq!(parsed.build_dir, PathBuf::from("cmake-build"));
}

#[test]
fn test_templates_requires_build_system() {
    assert!(TemplatesArgs::try_parse_from(make_args("cpp-templates", &[])).is_err());
    assert!(TemplatesArgs::try_parse_from(make_args(
        "cpp-templates",
        &["--build-system", "make"]
    ))
    .is_err());
}

#[test]
fn test_templates_overrides() {
    let parsed = TemplatesArgs::try_parse_from(make_args(
        "cpp-templates",
        &["--build-system", "bazel", "--compiler", "g++", "--arch", "arm64"],
    ))
    .unwrap();
    assert_eq!(parsed.build_system, BuildSystem::Bazel);
    assert_eq!(parsed.arch, Some(Arch::Arm64));
    assert_eq!(parsed.root, PathBuf::from("."));

    let overrides = parsed.overrides();
    assert_eq!(overrides.build_system, Some(BuildSystem::Bazel));
    assert_eq!(overrides.compiler.as_deref(), Some("g++"));
    assert_eq!(overrides.arch.map(Arch::normalized), Some("aarch64"));
}

#[test]
fn test_templates_arch_values() {
    let parsed = TemplatesArgs::try_parse_from(make_args(
        "cpp-templates",
        &["--build-system", "cmake", "--arch", "x86_64"],
    ))
    .unwrap();
    assert_eq!(parsed.arch, Some(Arch::X86_64));
}

#[test]
fn test_bootstrap_defaults() {
    let parsed = BootstrapArgs::try_parse_from(make_args("cpp-bootstrap", &[])).unwrap();
    assert_eq!(parsed.path, PathBuf::from("."));
    assert_eq!(parsed.project_name, None);
    assert_eq!(parsed.template_url, TEMPLATE_REPO_URL);
}

#[test]
fn test_bootstrap_project_name() {
    let parsed = BootstrapArgs::try_parse_from(make_args(
        "cpp-bootstrap",
        &["--project-name", "awesome-lib", "./my-project"],
    ))
    .unwrap();
    assert_eq!(parsed.path, PathBuf::from("./my-project"));
    assert_eq!(parsed.project_name.as_deref(), Some("awesome-lib"));
}

#[test]
fn test_bootstrap_too_many_args() {
    assert!(BootstrapArgs::try_parse_from(make_args("cpp-bootstrap", &["a", "b"])).is_err());
}

#[test]
fn test_which_requires_command() {
    assert!(WhichArgs::try_parse_from(make_args("cpp-which", &[])).is_err());

    let parsed =
        WhichArgs::try_parse_from(make_args("cpp-which", &["clang-format", "clang-tidy"])).unwrap();
    assert_eq!(parsed.commands, ["clang-format", "clang-tidy"]);
}

#[test]
fn test_invalid_arguments_exit_with_one() {
    let err = TemplatesArgs::try_parse_from(make_args("cpp-templates", &["--build-system", "make"]))
        .unwrap_err();
    assert_eq!(parse_error_exit_code(&err), 1);

    let err = FormatArgs::try_parse_from(make_args("cpp-format", &["reformat"])).unwrap_err();
    assert_eq!(parse_error_exit_code(&err), 1);

    let err = LintArgs::try_parse_from(make_args("cpp-lint", &["--unknown"])).unwrap_err();
    assert_eq!(parse_error_exit_code(&err), 1);
}

#[test]
fn test_help_and_version_exit_with_zero() {
    let err = FormatArgs::try_parse_from(make_args("cpp-format", &["--help"])).unwrap_err();
    assert_eq!(parse_error_exit_code(&err), 0);

    let err = WhichArgs::try_parse_from(make_args("cpp-which", &["--version"])).unwrap_err();
    assert_eq!(parse_error_exit_code(&err), 0);
}
