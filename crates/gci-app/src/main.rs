//! gci: play Ground-Controlled Intercept in the terminal.
//!
//! Usage:
//!   gci [--seed <u64>] [--config <game.json>] [--verbose]

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use std::{env, fs};

use anyhow::{anyhow, Context, Result};
use tracing::debug;
use tracing_subscriber::filter::EnvFilter;

use gci_core::config::GameConfig;
use gci_sim::{SimConfig, SimulationEngine};

mod render;

#[derive(Debug)]
struct Cli {
    seed: Option<u64>,
    config_path: Option<PathBuf>,
    verbose: bool,
}

impl Cli {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);

        let mut seed = None;
        let mut config_path = None;
        let mut verbose = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow!("--seed requires a number"))?;
                    seed = Some(
                        value
                            .parse::<u64>()
                            .with_context(|| format!("invalid --seed value: {value}"))?,
                    );
                }
                "--config" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow!("--config requires a file path"))?;
                    config_path = Some(PathBuf::from(value));
                }
                "-v" | "--verbose" => {
                    verbose = true;
                }
                "-h" | "--help" => {
                    println!(
                        "Usage: gci [--seed <u64>] [--config <game.json>] [--verbose]\n\
                         \n\
                         --seed <u64>     Seed for bomber spawns (default: clock-derived)\n\
                         --config <path>  JSON game configuration; missing fields keep their defaults\n\
                         --verbose        Log turn details to stderr (RUST_LOG overrides)"
                    );
                    std::process::exit(0);
                }
                other => return Err(anyhow!("unknown argument: {other}. Use --help for usage.")),
            }
        }

        Ok(Self {
            seed,
            config_path,
            verbose,
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse()?;

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let game = match &cli.config_path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            GameConfig::from_json(&json)
                .with_context(|| format!("invalid config: {}", path.display()))?
        }
        None => GameConfig::default(),
    };

    let seed = cli.seed.unwrap_or_else(clock_seed);
    debug!(seed, "Starting game");
    let mut engine = SimulationEngine::new(SimConfig { seed, game })?;

    println!("{}", render::title_card(engine.config()));

    let clear_screen = io::stdout().is_terminal();
    let mut lines = io::stdin().lock().lines();
    let mut stdout = io::stdout();

    loop {
        let snapshot = engine.tick();
        if clear_screen {
            print!("\x1b[2J\x1b[H");
        }
        print!("{}", render::render(&snapshot));

        if snapshot.outcome.is_terminal() {
            break;
        }

        print!("Enter your orders:\n>>> ");
        stdout.flush().context("failed to write prompt")?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line.context("failed to read orders")?;
        // Rejected pairs come back as alerts in the next turn's report.
        engine.submit_orders(&line);
    }

    match engine.outcome().message() {
        Some(message) => println!("{message}"),
        None => println!("Signing off after turn {}.", engine.turn()),
    }
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
