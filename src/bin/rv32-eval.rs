// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{error, info};
use rv32_eval::core::config::Config;
use rv32_eval::core::driver::Driver;
use rv32_eval::core::error::Result;
use rv32_eval::core::evaluator::{evaluate, Selector};
use rv32_eval::core::trap::LoggingTrapHandler;

/// RV32 fixture evaluator
#[derive(Parser)]
#[command(name = "rv32-eval")]
#[command(about = "RV32 fixture evaluator and driver", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the fixture driver; the exit status is the low byte of its result
    Run {
        /// Path to a TOML config file
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        /// Print the run report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate a single call
    #[command(allow_negative_numbers = true)]
    Eval {
        /// First operand
        a: i32,

        /// Second operand (shift amount for '<' and '>')
        b: i32,

        /// Selector character: '+', '-', '<', '>' (anything else yields 0x13371337)
        selector: String,
    },
}

fn main() -> Result<ExitCode> {
    // Load .env file if present (for development configuration)
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    // Parse command line arguments
    let args = Args::parse();

    let loaded = match &args.command {
        Command::Run {
            config: Some(path), ..
        } => Config::load(path),
        _ => Ok(Config::default()),
    };

    // Initialize logger with default level INFO; the config file may override it
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    let level = loaded
        .as_ref()
        .ok()
        .and_then(|config| config.log_level().ok().flatten());
    if let Some(level) = level {
        logger.filter_level(level);
    }
    logger.init();

    let config = loaded.inspect_err(|e| error!("Failed to load config: {}", e))?;
    config
        .log_level()
        .inspect_err(|e| error!("Invalid config: {}", e))?;

    info!("rv32-eval v{}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::Run { json, .. } => run(&config, json),
        Command::Eval { a, b, selector } => eval(a, b, &selector),
    }
}

fn run(config: &Config, json: bool) -> Result<ExitCode> {
    let driver_config = config.driver_config()?;
    info!(
        "Driver calls: ({}, {}, '{}') then ({}, {}, '{}')",
        driver_config.first.a,
        driver_config.first.b,
        driver_config.first.selector,
        driver_config.second.a,
        driver_config.second.b,
        driver_config.second.selector
    );

    let mut driver = Driver::new(driver_config);
    let report = driver
        .run_report(&mut LoggingTrapHandler)
        .inspect_err(|e| error!("Run failed: {}", e))?;

    if json {
        println!("{}", report.to_json()?);
    } else {
        println!(
            "first  = {} (0x{:08X})",
            report.first.result, report.first_unsigned
        );
        println!(
            "second = {} (0x{:08X})",
            report.second.result, report.second_unsigned
        );
        if let Some(trap) = report.trap {
            println!("trap   = {}", trap);
        }
        println!("result = {}", report.exit_code);
    }

    Ok(ExitCode::from(report.outcome.exit_status()))
}

fn eval(a: i32, b: i32, selector: &str) -> Result<ExitCode> {
    let selector = selector
        .parse::<Selector>()
        .inspect_err(|e| error!("{}", e))?;

    let result = evaluate(a, b, selector);
    println!("{} (0x{:08X})", result, result as u32);

    Ok(ExitCode::SUCCESS)
}
