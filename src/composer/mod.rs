//! Build command composition
//!
//! Composes the `go build` invocation as a discrete argument vector. The
//! command is a plain value; running it is the [`crate::runner`]'s job, so
//! composition stays pure and testable.

use std::fmt;

use crate::config::{AppConfig, BuildMode};

/// Compiler program name
pub const COMPILER: &str = "go";

/// Platform extension of the built executable
pub const PLATFORM_EXTENSION: &str = "exe";

/// A composed compiler invocation: program plus ordered argument tokens
///
/// Tokens are kept discrete and handed to the process spawn API as-is;
/// the command is never flattened into a shell string for execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
    program: String,
    args: Vec<String>,
}

impl BuildCommand {
    pub fn new(
        program: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Path of the executable the command produces (the `-o` value)
    pub fn output_path(&self) -> Option<&str> {
        self.args
            .iter()
            .position(|a| a == "-o")
            .and_then(|i| self.args.get(i + 1))
            .map(String::as_str)
    }
}

impl fmt::Display for BuildCommand {
    /// Display form for logging only; execution uses the token vector
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.contains(' ') {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Compose the build command for a config and mode
///
/// Development injects the `debug` build tag and skips path trimming and the
/// forced dependency rebuild; production enables both. The linker flags
/// suppress the console window and, when the config carries an icon path,
/// embed the icon resource reference.
pub fn compose(
    config: &AppConfig,
    mode: BuildMode,
    build_dir: &str,
    package: &str,
) -> BuildCommand {
    let mut args = vec!["build".to_string(), "-v".to_string()];

    if mode.is_development() {
        args.push("-tags".to_string());
        args.push("debug".to_string());
    } else {
        args.push("-trimpath".to_string());
        args.push("-a".to_string());
    }

    args.push("-ldflags".to_string());
    args.push(ldflags(config));

    args.push("-o".to_string());
    args.push(format!(
        "{}/{}_{}.{}",
        build_dir, config.name, config.version, PLATFORM_EXTENSION
    ));

    args.push(package.to_string());

    BuildCommand {
        program: COMPILER.to_string(),
        args,
    }
}

/// Linker flag string: console suppression plus the optional icon reference
fn ldflags(config: &AppConfig) -> String {
    match &config.icon_path {
        Some(icon) => format!("-H windowsgui -X main.iconPath={}", icon),
        None => "-H windowsgui".to_string(),
    }
}
