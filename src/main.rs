use bevy::app::AppExit;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tileworld::{StartupError, WorldConfig};

mod frontend;

#[derive(Parser, Debug)]
#[command(name = "tileworld", about = "Walk around a procedurally generated tile world")]
struct Args {
    /// JSON world configuration; compiled-in defaults when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Generation seed, overrides the config
    #[arg(long)]
    seed: Option<u64>,

    /// Run this many scripted ticks without a window
    #[arg(long, value_name = "TICKS")]
    headless: Option<usize>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("tileworld: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode, StartupError> {
    let mut config = match &args.config {
        Some(path) => WorldConfig::load(path)?,
        None => WorldConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    let seed = config.seed_or_random();

    if let Some(ticks) = args.headless {
        frontend::headless::run(&config, seed, ticks)?;
        return Ok(ExitCode::SUCCESS);
    }

    frontend::preflight(&config)?;
    Ok(match frontend::run_windowed(config, seed) {
        AppExit::Success => ExitCode::SUCCESS,
        AppExit::Error(code) => ExitCode::from(code.get()),
    })
}
