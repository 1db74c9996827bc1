// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 The Frontier Framework Authors

// Command-line surface: `build-with-config <config-name> <platform> <arch>`.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::builder::NonEmptyStringValueParser;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ArgAction, CommandFactory, Parser, ValueHint};

use crate::error::BuildError;

const CONFIGS_DIR: &str = "build-configs";
const CLI_ENTRY: &str = "dist/cli.js";

/// Build a Pake desktop app from a named build configuration.
#[derive(Debug, Parser)]
#[command(
    name = "build-with-config",
    version,
    about = "Build a Pake desktop app from a named build configuration",
    after_help = "Example: build-with-config vinted macos universal"
)]
pub struct Cli {
    /// Configuration name, resolved to <configs-dir>/<name>.json
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub config_name: String,

    /// Target platform (macos, windows, linux, ...)
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub platform: String,

    /// Target architecture passed to --targets (universal, x64, arm64, ...)
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub arch: String,

    /// Project root holding build-configs/ and dist/ [default: current directory]
    #[arg(long, env = "PAKE_ROOT", value_hint = ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Directory with the JSON build configurations [default: <root>/build-configs]
    #[arg(long = "configs-dir", env = "PAKE_CONFIGS_DIR", value_hint = ValueHint::DirPath)]
    pub configs_dir: Option<PathBuf>,

    /// Pake CLI entry script [default: <root>/dist/cli.js]
    #[arg(long, env = "PAKE_CLI_ENTRY", value_hint = ValueHint::FilePath)]
    pub entry: Option<PathBuf>,

    /// Program that runs the entry script
    #[arg(long, env = "PAKE_RUNTIME", default_value = "node", value_hint = ValueHint::CommandName)]
    pub runtime: String,

    /// Print the packaging command without running it
    #[arg(long = "dry-run", action = ArgAction::SetTrue)]
    pub dry_run: bool,
}

/// Where configs are read from and which script the runtime executes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub configs_dir: PathBuf,
    pub entry: PathBuf,
}

impl Cli {
    pub fn paths(&self) -> Result<Paths> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => env::current_dir().context("cannot determine the current directory")?,
        };
        Ok(self.paths_under(&root))
    }

    fn paths_under(&self, root: &Path) -> Paths {
        Paths {
            configs_dir: self
                .configs_dir
                .clone()
                .unwrap_or_else(|| root.join(CONFIGS_DIR)),
            entry: self.entry.clone().unwrap_or_else(|| root.join(CLI_ENTRY)),
        }
    }
}

/// Parse the process arguments.
pub fn parse() -> Result<Cli, BuildError> {
    parse_from(env::args_os())
}

/// `--help` and `--version` print and exit 0; every other parse failure is
/// returned so the caller exits with 1. An empty positional counts as missing.
pub fn parse_from<I, T>(args: I) -> Result<Cli, BuildError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).or_else(|err| {
        let kind = err.kind();
        if matches!(kind, ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
            err.exit();
        }

        let rendered = err.render().to_string();
        let mut message = rendered
            .trim_end()
            .strip_prefix("error: ")
            .unwrap_or(rendered.trim_end())
            .to_string();

        let missing = match kind {
            ErrorKind::MissingRequiredArgument => true,
            ErrorKind::InvalidValue => is_empty_positional(&err),
            _ => false,
        };
        if !missing {
            return Err(BuildError::InvalidArgument { message });
        }

        if !message.contains("Usage:") {
            message.push_str(&format!("\n\n{}", Cli::command().render_usage()));
        }
        Err(BuildError::MissingArgument { message })
    })
}

// Only the non-empty parser on the positionals yields `InvalidValue` for an
// argument rendered as `<NAME>`; options render as `--name <NAME>`.
fn is_empty_positional(err: &clap::Error) -> bool {
    matches!(
        err.get(ContextKind::InvalidArg),
        Some(ContextValue::String(arg)) if arg.starts_with('<')
    )
}
