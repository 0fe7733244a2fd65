//! Common constants used throughout cpp-scaffold.

/// File name patterns treated as C++ sources
pub const CPP_PATTERNS: [&str; 3] = ["*.cpp", "*.hpp", "*.h"];

/// Directories checked by the formatter
pub const FORMAT_DIRS: [&str; 3] = ["src", "include", "tests"];

/// Directories checked by the linter (tests are excluded)
pub const LINT_DIRS: [&str; 2] = ["src", "include"];

/// Directory, relative to the project root, holding the build-system templates
pub const TEMPLATES_DIR: &str = "templates";

/// Compilation database consumed by clang-tidy
pub const COMPILE_COMMANDS: &str = "compile_commands.json";

/// Repository cloned by the bootstrap tool
pub const TEMPLATE_REPO_URL: &str = "https://github.com/templ-project/cpp.git";

/// Project name used when none can be derived
pub const DEFAULT_PROJECT_NAME: &str = "cpp-template";

/// Template-only entries removed from a freshly cloned project
pub const TEMPLATE_ARTIFACTS: [&str; 4] = [".git", "bootstrap.py", "_install", "pyproject.toml"];
