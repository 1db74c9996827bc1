// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 The Frontier Framework Authors

//! Pake Builder - Build Configuration Runner
//!
//! The Builder is responsible for:
//! - Loading a named build configuration (build-configs/<name>.json)
//! - Translating it into Pake CLI arguments
//! - Running the Pake CLI for the requested platform and architecture
//! - Exiting with the Pake CLI's own exit code

mod args;
mod build;
mod cli;
mod config;
mod error;
mod telemetry;

use std::process;

use anyhow::Result;
use tracing::{debug, info};

use build::{Invocation, Platform};

fn main() {
    telemetry::init_tracing();

    match run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            process::exit(error::exit_code_for(&err));
        }
    }
}

fn run() -> Result<i32> {
    let cli = cli::parse()?;
    let paths = cli.paths()?;
    let platform = Platform::from(cli.platform.as_str());

    let config = config::load_config(&paths.configs_dir, &cli.config_name)?;
    info!("Building {} for {} {}", config.name, platform, cli.arch);

    let args = args::translate(&config, &paths.entry, &cli.arch);
    let invocation = Invocation::new(cli.runtime.clone(), args, &platform);
    info!("CLI command: {}", invocation.display());

    if cli.dry_run {
        println!("{}", invocation.display());
        return Ok(0);
    }

    let code = build::run(&invocation)?;
    debug!(code, "packaging tool exited");
    Ok(code)
}
