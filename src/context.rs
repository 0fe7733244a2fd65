//! Template context resolved from the environment and command-line overrides.

use crate::constants::DEFAULT_PROJECT_NAME;
use crate::error::{Error, Result};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

pub const ENV_BUILD_SYSTEM: &str = "CPP_BUILD_SYSTEM";
pub const ENV_BUILD_TYPE: &str = "CPP_BUILD_TYPE";
pub const ENV_BUILD_DIR: &str = "CPP_BUILD_DIR";
pub const ENV_COMPILER: &str = "CPP_COMPILER";
pub const ENV_PROJECT_NAME: &str = "CPP_PROJECT_NAME";
pub const ENV_TARGET_ARCH: &str = "CPP_TARGET_ARCH";

/// Build systems configuration can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildSystem {
    Cmake,
    Xmake,
    Bazel,
}

impl BuildSystem {
    pub fn as_str(self) -> &'static str {
        match self {
            BuildSystem::Cmake => "cmake",
            BuildSystem::Xmake => "xmake",
            BuildSystem::Bazel => "bazel",
        }
    }
}

impl fmt::Display for BuildSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target architectures accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Arch {
    #[value(name = "x86_64")]
    X86_64,
    Aarch64,
    /// Alias of `aarch64`
    Arm64,
}

impl Arch {
    /// Canonical architecture name used in templates.
    pub fn normalized(self) -> &'static str {
        match self {
            Arch::X86_64 => "x86_64",
            Arch::Aarch64 | Arch::Arm64 => "aarch64",
        }
    }
}

fn normalize_arch(arch: &str) -> String {
    match Arch::from_str(arch, true) {
        Ok(arch) => arch.normalized().to_string(),
        Err(_) => arch.to_string(),
    }
}

/// Values available to build-system templates.
///
/// `target_arch` is empty when no architecture was requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateContext {
    pub build_system: String,
    pub build_type: String,
    pub build_dir: String,
    pub compiler: String,
    pub project_name: String,
    pub target_arch: String,
}

/// Command-line values layered on top of the environment.
#[derive(Debug, Clone, Default)]
pub struct ContextOverrides {
    pub build_system: Option<BuildSystem>,
    pub compiler: Option<String>,
    pub arch: Option<Arch>,
}

impl TemplateContext {
    /// Reads the context from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the context from an arbitrary variable lookup. Unset and empty
    /// variables fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key).filter(|value| !value.is_empty()).unwrap_or_else(|| default.to_string())
        };

        Self {
            build_system: get(ENV_BUILD_SYSTEM, "cmake"),
            build_type: get(ENV_BUILD_TYPE, "Release"),
            build_dir: get(ENV_BUILD_DIR, "build"),
            compiler: get(ENV_COMPILER, "clang++"),
            project_name: get(ENV_PROJECT_NAME, DEFAULT_PROJECT_NAME),
            target_arch: normalize_arch(&get(ENV_TARGET_ARCH, "")),
        }
    }

    /// Applies command-line overrides.
    pub fn apply(&mut self, overrides: &ContextOverrides) {
        if let Some(build_system) = overrides.build_system {
            self.build_system = build_system.to_string();
        }
        if let Some(compiler) = &overrides.compiler {
            self.compiler = compiler.clone();
        }
        if let Some(arch) = overrides.arch {
            self.target_arch = arch.normalized().to_string();
        }
    }

    /// Rejects values no template could use.
    pub fn validate(&self) -> Result<()> {
        if BuildSystem::from_str(&self.build_system, true).is_err() {
            return Err(Error::ConfigError(format!(
                "unsupported build system '{}' (expected cmake, xmake or bazel)",
                self.build_system
            )));
        }
        for (name, value) in [
            ("build type", &self.build_type),
            ("build directory", &self.build_dir),
            ("compiler", &self.compiler),
            ("project name", &self.project_name),
        ] {
            if value.trim().is_empty() {
                return Err(Error::ConfigError(format!("{name} must not be empty")));
            }
        }
        if !["", "x86_64", "aarch64"].contains(&self.target_arch.as_str()) {
            return Err(Error::ConfigError(format!(
                "unsupported target architecture '{}'",
                self.target_arch
            )));
        }
        Ok(())
    }
}
