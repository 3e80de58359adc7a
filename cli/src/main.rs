use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use sweep_core::{CellCount, Coord, Difficulty, GameSession, GridOptions};

use crate::command::Command;
use crate::config::{Config, override_options};
use crate::render::{render_grid, render_status};

mod command;
mod config;
mod render;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    Easy,
    Medium,
    Hard,
}

impl Preset {
    pub fn options(self) -> GridOptions {
        Difficulty::from(self).options()
    }
}

impl From<Preset> for Difficulty {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Easy => Difficulty::Easy,
            Preset::Medium => Difficulty::Medium,
            Preset::Hard => Difficulty::Hard,
        }
    }
}

/// Play hazard sweeping in the terminal, one command per line.
///
/// Commands: `r <index>` or `r <col> <row>` reveals, `m ...` cycles flag/question marks, `reset`,
/// `difficulty <easy|medium|hard>`, `options <width> <height> <hazards>`, `show`, `quit`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Settings file, flags take precedence over it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid preset
    #[arg(short, long, value_enum)]
    difficulty: Option<Preset>,

    #[arg(long)]
    width: Option<Coord>,

    #[arg(long)]
    height: Option<Coord>,

    #[arg(long)]
    hazards: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

/// The `--seed` flag wins over the settings file; without either, a fresh seed comes from the thread RNG.
fn pick_seed(flag: Option<u64>, config: Option<u64>) -> u64 {
    flag.or(config).unwrap_or_else(rand::random)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let base = match args.difficulty {
        Some(preset) => preset.options(),
        None => config.base_options(),
    };
    let options = override_options(base, args.width, args.height, args.hazards)?;
    let seed = pick_seed(args.seed, config.seed);
    log::debug!("seed: {}", seed);

    let mut session = GameSession::with_seed(options, seed);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();

    writeln!(stdout, "{}", render_grid(&session.grid(), session.is_finished()))?;
    for line in stdin.lock().lines() {
        let line = line.context("Could not read command")?;

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(stdout, "error: {err:#}")?;
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }

        let action = match command.to_action(&session.grid()) {
            Ok(action) => action,
            Err(err) => {
                writeln!(stdout, "error: {err:#}")?;
                continue;
            }
        };

        if let Some(action) = action {
            match session.apply(action) {
                Ok(transition) => log::debug!("{:?} -> {:?}", action, transition),
                Err(err) => {
                    writeln!(stdout, "error: {err}")?;
                    continue;
                }
            }
        }

        write!(stdout, "{}", render_grid(&session.grid(), session.is_finished()))?;
        writeln!(stdout, "{}", render_status(&session))?;
    }

    log::info!("Session ended at revision {}", session.revision());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_flag_beats_config() {
        assert_eq!(pick_seed(Some(7), Some(9)), 7);
        assert_eq!(pick_seed(None, Some(9)), 9);
    }

    #[test]
    fn seed_without_flag_or_config_is_random() {
        let seeds: Vec<u64> = (0..4).map(|_| pick_seed(None, None)).collect();
        assert!(seeds.windows(2).any(|pair| pair[0] != pair[1]));
    }
}
