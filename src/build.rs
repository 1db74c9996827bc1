// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 The Frontier Framework Authors

// Build Management Module
//
// This module spawns the packaging tool with the translated arguments and
// reports its exit code back to the caller.

use std::fmt;
use std::process::{Command, ExitStatus, Stdio};

use crate::error::BuildError;

/// Tells Pake to produce a macOS `.app` bundle.
pub const CREATE_APP_ENV: &str = "PAKE_CREATE_APP";

/// Target platform tag. Anything other than the known tags is kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
    Other(String),
}

impl Platform {
    pub fn is_macos(&self) -> bool {
        matches!(self, Platform::MacOs)
    }
}

impl From<&str> for Platform {
    fn from(tag: &str) -> Self {
        match tag {
            "macos" => Platform::MacOs,
            "windows" => Platform::Windows,
            "linux" => Platform::Linux,
            other => Platform::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::MacOs => f.write_str("macos"),
            Platform::Windows => f.write_str("windows"),
            Platform::Linux => f.write_str("linux"),
            Platform::Other(tag) => f.write_str(tag),
        }
    }
}

/// A fully resolved packaging command.
#[derive(Clone, Debug)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub create_app: bool,
}

impl Invocation {
    pub fn new(program: impl Into<String>, args: Vec<String>, platform: &Platform) -> Self {
        Self {
            program: program.into(),
            args,
            create_app: platform.is_macos(),
        }
    }

    /// The child inherits stdio and the caller's environment, with
    /// `PAKE_CREATE_APP` set only for macOS builds.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if self.create_app {
            cmd.env(CREATE_APP_ENV, "1");
        } else {
            cmd.env_remove(CREATE_APP_ENV);
        }

        cmd
    }

    /// Shell-style rendering for logs and dry runs.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .map(shell_quote)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn shell_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=+,@%".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

/// Run the packaging tool to completion and return the code to exit with.
pub fn run(invocation: &Invocation) -> Result<i32, BuildError> {
    let mut child = invocation
        .command()
        .spawn()
        .map_err(|source| BuildError::Spawn {
            program: invocation.program.clone(),
            source,
        })?;

    let status = child.wait().map_err(|source| BuildError::Wait { source })?;
    Ok(exit_code(status))
}

pub fn exit_code(status: ExitStatus) -> i32 {
    match status.code() {
        Some(code) => code,
        None => signal_exit_code(status),
    }
}

#[cfg(unix)]
fn signal_exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status.signal().map_or(1, |signal| 128 + signal)
}

#[cfg(not(unix))]
fn signal_exit_code(_status: ExitStatus) -> i32 {
    1
}
