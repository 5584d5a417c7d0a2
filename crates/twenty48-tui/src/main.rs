mod app;
mod config;
mod input;
mod palette;
mod render;

use std::fs::File;
use std::io::{self, Stdout};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use env_logger::Env;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use twenty48_engine::engine::Game;

use app::App;
use config::Config;
use input::KeyMap;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play 2048 in the terminal")]
struct Args {
    /// Path to configuration file
    #[arg(long, value_name = "FILE", value_parser = clap::value_parser!(PathBuf))]
    config: Option<PathBuf>,
    /// Seed for tile spawns; overrides the config file.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
    /// Log filter, e.g. "info", "debug". Only used when `log_file` is configured.
    #[arg(long, default_value = "info")]
    log: String,
}

/// Raw mode and the alternate screen for as long as this lives.
struct TerminalGuard;

impl TerminalGuard {
    fn enter(out: &mut Stdout) -> Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        let guard = TerminalGuard;
        execute!(out, EnterAlternateScreen, Hide).context("failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => Config::from_toml(path)?,
        None => Config::default(),
    };
    init_logging(&config, &args.log)?;

    let bindings = config.key_bindings()?;
    if bindings.iter().any(|(c, _)| c.eq_ignore_ascii_case(&'q')) {
        warn!("key 'q' is reserved for quitting; its binding is ignored");
    }
    let keys = KeyMap::new(bindings);
    let seed = args.seed.or(config.seed);
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!("starting game (seed: {seed:?})");

    let mut app = App::new(Game::new(rng), keys);
    let mut stdout = io::stdout();
    {
        let _guard = TerminalGuard::enter(&mut stdout)?;
        app.run(&mut stdout)?;
    }

    println!(
        "Final score: {} (highest tile {})",
        app.score(),
        app.board().highest_tile()
    );
    Ok(())
}

fn init_logging(config: &Config, filter: &str) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(Env::default().default_filter_or(filter))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
