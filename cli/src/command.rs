use anyhow::{Context, anyhow, bail};
use clap::ValueEnum;
use sweep_core::{Action, CellIndex, Coord, Grid, GridOptions};

use crate::Preset;

/// Cell addressed by the player, either as a flat index or as `col row`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Target {
    Index(CellIndex),
    Coords { col: Coord, row: Coord },
}

impl Target {
    pub fn resolve(self, grid: &Grid) -> anyhow::Result<CellIndex> {
        match self {
            Self::Index(index) => Ok(index),
            Self::Coords { col, row } => grid
                .index_of(row, col)
                .ok_or_else(|| anyhow!("({col}, {row}) is outside the {}x{} grid", grid.width(), grid.height())),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Target),
    Mark(Target),
    Reset,
    Difficulty(Preset),
    Options(GridOptions),
    Show,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> anyhow::Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match verb {
            "r" | "reveal" => Self::Reveal(parse_target(&args)?),
            "m" | "mark" => Self::Mark(parse_target(&args)?),
            "reset" => Self::Reset,
            "d" | "difficulty" => {
                let [name] = args.as_slice() else {
                    bail!("usage: difficulty <easy|medium|hard>");
                };
                Self::Difficulty(Preset::from_str(name, true).map_err(|err| anyhow!(err))?)
            }
            "o" | "options" => {
                let [width, height, hazards] = args.as_slice() else {
                    bail!("usage: options <width> <height> <hazards>");
                };
                Self::Options(GridOptions::new(
                    width.parse().context("invalid width")?,
                    height.parse().context("invalid height")?,
                    hazards.parse().context("invalid hazard count")?,
                )?)
            }
            "s" | "show" => Self::Show,
            "q" | "quit" | "exit" => Self::Quit,
            other => bail!("unknown command {other:?}"),
        };

        Ok(Some(command))
    }

    /// The engine action for this command, `None` for commands the host handles itself.
    pub fn to_action(self, grid: &Grid) -> anyhow::Result<Option<Action>> {
        Ok(match self {
            Self::Reveal(target) => Some(Action::Reveal(target.resolve(grid)?)),
            Self::Mark(target) => Some(Action::Mark(target.resolve(grid)?)),
            Self::Reset => Some(Action::Reset),
            Self::Difficulty(preset) => Some(Action::SetOptions(preset.options())),
            Self::Options(options) => Some(Action::SetOptions(options)),
            Self::Show | Self::Quit => None,
        })
    }
}

fn parse_target(args: &[&str]) -> anyhow::Result<Target> {
    match args {
        [index] => Ok(Target::Index(index.parse().context("invalid cell index")?)),
        [col, row] => Ok(Target::Coords {
            col: col.parse().context("invalid column")?,
            row: row.parse().context("invalid row")?,
        }),
        _ => bail!("expected a cell index or a column and row"),
    }
}
