use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use summit_app::game_loop::spawn_game_loop;
use summit_app::headless::{self, Script, Walk};
use summit_core::commands::PlayerCommand;
use summit_core::config::GameConfig;
use summit_core::level::Level;
use summit_sim::world_setup::default_level;

#[derive(Parser, Debug)]
#[command(name = "summit", about = "Headless SUMMIT climbing game")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON file overriding config fields
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON level file (defaults to the built-in level)
    #[arg(long, global = true)]
    level: Option<PathBuf>,

    /// RNG seed, overriding the config
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run an unpaced scripted session and print the final snapshot
    Simulate {
        /// Number of ticks to simulate
        #[arg(short, long, default_value = "600")]
        ticks: u64,
        /// Direction held for the whole run
        #[arg(long, value_enum, default_value_t = Walk::None)]
        walk: Walk,
        /// Tap jump every K ticks (0 never jumps)
        #[arg(long, default_value = "0")]
        jump_every: u64,
    },
    /// Run the paced game loop: JSON commands on stdin, snapshots on stdout
    Serve {
        /// Write every K-th snapshot
        #[arg(long, default_value = "1")]
        emit_every: u64,
    },
    /// Print the level as JSON
    Level,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_deref(), cli.seed)?;
    let level = load_level(cli.level.as_deref(), &config)?;

    match cli.command {
        Commands::Simulate {
            ticks,
            walk,
            jump_every,
        } => {
            tracing::info!(ticks, ?walk, jump_every, seed = config.seed, "simulating");
            let script = Script { walk, jump_every };
            match headless::run(config, level, ticks, script) {
                Some(snapshot) => println!("{}", serde_json::to_string(&snapshot)?),
                None => tracing::warn!("zero ticks requested, nothing to print"),
            }
        }
        Commands::Serve { emit_every } => serve(config, level, emit_every.max(1))?,
        Commands::Level => println!("{}", serde_json::to_string_pretty(&level)?),
    }

    Ok(())
}

fn load_config(path: Option<&Path>, seed: Option<u64>) -> anyhow::Result<GameConfig> {
    let mut config = match path {
        Some(path) => GameConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(seed) = seed {
        config.seed = seed;
    }
    Ok(config)
}

fn load_level(path: Option<&Path>, config: &GameConfig) -> anyhow::Result<Level> {
    match path {
        Some(path) => Level::from_json_file(path)
            .with_context(|| format!("loading level {}", path.display())),
        None => Ok(default_level(config)),
    }
}

/// Drive the paced loop from stdin until it closes.
fn serve(config: GameConfig, level: Level, emit_every: u64) -> anyhow::Result<()> {
    let (sink_tx, sink_rx) = mpsc::channel();
    let handle = spawn_game_loop(config, level, sink_tx).context("spawning game loop")?;

    let writer = std::thread::Builder::new()
        .name("summit-writer".into())
        .spawn(move || -> anyhow::Result<()> {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            for (n, snapshot) in sink_rx.iter().enumerate() {
                if n as u64 % emit_every != 0 {
                    continue;
                }
                serde_json::to_writer(&mut out, &snapshot)?;
                out.write_all(b"\n")?;
                out.flush()?;
            }
            Ok(())
        })
        .context("spawning writer")?;

    for line in std::io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<PlayerCommand>(line) {
            Ok(command) => handle.send(command)?,
            Err(err) => tracing::warn!(%err, line, "ignoring malformed command"),
        }
    }

    tracing::info!("stdin closed, shutting down");
    handle.shutdown()?;
    writer
        .join()
        .map_err(|_| anyhow::anyhow!("writer thread panicked"))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "summit", "simulate", "--verbose", "--seed", "7", "--ticks", "10",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.seed, Some(7));
        assert!(matches!(cli.command, Commands::Simulate { ticks: 10, .. }));
    }

    #[test]
    fn test_serve_defaults_to_every_tick() {
        let cli = Cli::try_parse_from(["summit", "-v", "serve"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Serve { emit_every: 1 }));
    }
}
