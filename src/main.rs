// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use clap::Parser;
use textutils::{app, args::Args, config::build_config, logging};
use textutils_shared_kernel::TextUtilsError;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(config.log_level);

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<TextUtilsError>() {
                Some(err) if err.is_empty_input() => eprintln!("warning: No text to export"),
                _ => eprintln!("Error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
