//! cpp-scaffold is the developer tooling of a C++ template project.
//! It checks and fixes sources with clang-format and clang-tidy, renders
//! build-system configuration from templates, and bootstraps new projects
//! from the template repository.

/// Batch driver shared by the formatter and the linter
pub mod batch;

/// Project creation from the template repository
pub mod bootstrap;

/// Command-line interface definitions for every tool
pub mod cli;

/// Build-system template targets and file generation
pub mod compile;

/// Common constants
pub mod constants;

/// Template context from environment variables and CLI overrides
pub mod context;

/// C++ source discovery from directories or the git index
pub mod discover;

/// Error types and handling
pub mod error;

/// Logger initialization
pub mod logger;

/// Terminal status lines
pub mod output;

/// External process execution
pub mod process;

/// MiniJinja template rendering
pub mod renderer;

/// clang-format and clang-tidy runners
pub mod tool;

/// Command availability checks
pub mod which;
