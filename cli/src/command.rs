use std::str::FromStr;

use anyhow::{Context, anyhow, bail};
use minefield_core::{CellCount, Coord, Coord2};

pub(crate) const HELP: &str = "\
commands:
  r ROW COL          reveal a cell
  f ROW COL          toggle a flag
  n [SIZE [MINES]]   start a new game
  h                  show this help
  q                  quit";

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    New {
        size: Option<Coord>,
        mines: Option<CellCount>,
    },
    Help,
    Quit,
}

fn parse_coords<'a>(mut parts: impl Iterator<Item = &'a str>) -> anyhow::Result<Coord2> {
    let row = parts.next().ok_or_else(|| anyhow!("missing row"))?;
    let col = parts.next().ok_or_else(|| anyhow!("missing column"))?;
    if parts.next().is_some() {
        bail!("too many arguments");
    }
    Ok((
        row.parse().with_context(|| format!("invalid row {row:?}"))?,
        col.parse().with_context(|| format!("invalid column {col:?}"))?,
    ))
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            bail!("empty command, try `h`");
        };

        Ok(match verb {
            "r" | "reveal" => Command::Reveal(parse_coords(parts)?),
            "f" | "flag" => Command::Flag(parse_coords(parts)?),
            "n" | "new" => {
                let size = parts
                    .next()
                    .map(str::parse)
                    .transpose()
                    .context("invalid size")?;
                let mines = parts
                    .next()
                    .map(str::parse)
                    .transpose()
                    .context("invalid mine count")?;
                Command::New { size, mines }
            }
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" => Command::Quit,
            other => bail!("unknown command {other:?}, try `h`"),
        })
    }
}
