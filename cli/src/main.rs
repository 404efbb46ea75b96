use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use minefield_core as game;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

mod command;
mod render;

use command::Command;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML file with `min-size`, `max-size`, `min-mines` and `max-mines`
    #[arg(short, long)]
    bounds: Option<PathBuf>,

    /// Board side length of the first game
    #[arg(long)]
    size: Option<game::Coord>,

    /// Mine count of the first game
    #[arg(long)]
    mines: Option<game::CellCount>,
}

fn load_bounds(path: Option<&PathBuf>) -> Result<game::Bounds> {
    let Some(path) = path else {
        return Ok(game::Bounds::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("could not read bounds from {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("invalid bounds in {}", path.display()))
}

struct Session {
    game: game::Game,
    rng: SmallRng,
}

impl Session {
    fn new_game(&mut self, size: Option<game::Coord>, mines: Option<game::CellCount>) -> Result<()> {
        let defaults = self.game.bounds().default_config();
        let config = game::GameConfig::square(
            size.unwrap_or(defaults.rows),
            mines.unwrap_or(defaults.mines),
        );

        let context = || format!("cannot start {}x{} with {} mines", config.rows, config.cols, config.mines);

        // a rejected config keeps the running game
        self.game.bounds().check(&config).with_context(context)?;
        self.game.reset();
        self.game.start_random(config, &mut self.rng).with_context(context)
    }

    /// Returns `false` once the player asked to quit.
    fn handle(&mut self, command: Command) -> Result<bool> {
        match command {
            Command::Reveal(coords) => {
                let outcome = self.game.reveal_cell(coords);
                log::debug!("reveal {:?}: {:?}", coords, outcome);
            }
            Command::Flag(coords) => {
                let outcome = self.game.toggle_flag(coords);
                log::debug!("flag {:?}: {:?}", coords, outcome);
            }
            Command::New { size, mines } => self.new_game(size, mines)?,
            Command::Help => {
                println!("{}", command::HELP);
                return Ok(true);
            }
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    log::debug!("seed: {}", seed);

    let bounds = load_bounds(args.bounds.as_ref())?;
    let mut session = Session {
        game: game::Game::new(bounds).context("unusable bounds")?,
        rng: SmallRng::seed_from_u64(seed),
    };
    session.new_game(args.size, args.mines)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print!("{}", render::render(&session.game));
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read input")?;
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                println!("{err:#}");
                continue;
            }
        };

        match session.handle(command) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) => {
                println!("{err:#}");
                continue;
            }
        }

        print!("{}", render::render(&session.game));
        stdout.flush()?;
    }

    Ok(())
}
