use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use okto_core::constants::{DEFAULT_CYCLE_RATE, MAX_CYCLE_RATE, MIN_CYCLE_RATE};

mod keymap;
mod run;

/// A CHIP-8 interpreter.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// ROM image to load
    rom: PathBuf,

    /// Instruction clock rate in Hz
    #[arg(long, default_value_t = DEFAULT_CYCLE_RATE, value_parser = parse_cycle_rate)]
    cycle_rate: u32,
}

fn parse_cycle_rate(value: &str) -> Result<u32, String> {
    let rate: u32 = value.parse().map_err(|_| "not a number".to_string())?;
    if (MIN_CYCLE_RATE..=MAX_CYCLE_RATE).contains(&rate) {
        Ok(rate)
    } else {
        Err(format!(
            "cycle rate must be between {} and {} Hz",
            MIN_CYCLE_RATE, MAX_CYCLE_RATE
        ))
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let rom = match std::fs::read(&args.rom) {
        Ok(rom) => rom,
        Err(e) => {
            error!("unable to read {}: {}", args.rom.display(), e);
            return ExitCode::FAILURE;
        }
    };

    match run::run(&rom, args.cycle_rate) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
