use alloc::vec::Vec;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Configuring -> InProgress
/// - InProgress -> Won
/// - InProgress -> Lost
/// - Won | Lost -> Configuring
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// No board exists, waiting for a start
    Configuring,
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Configuring
    }
}

/// Outcome of a reveal request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    NoChange,
    Revealed(CellCount),
    Won,
    Lost,
}

impl MoveOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// One game session: owns the board and gates every move on the current [`GameState`].
///
/// Moves that make no sense right now (out of bounds, on a revealed or flagged cell, or after the game ended) are
/// ignored and report `NoChange`. Only starting a game can fail.
///
/// Deserializing re-checks the bounds and that the board agrees with the recorded state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GameRecord")]
pub struct Game {
    bounds: Bounds,
    config: Option<GameConfig>,
    board: Option<Board>,
    state: GameState,
    cleared: CellCount,
    triggered_mine: Option<Coord2>,
}

impl Game {
    pub fn new(bounds: Bounds) -> Result<Self> {
        bounds.validate()?;
        Ok(Self {
            bounds,
            config: None,
            board: None,
            state: GameState::default(),
            cleared: 0,
            triggered_mine: None,
        })
    }

    /// Starts a game with mines from `placement`.
    ///
    /// A finished game is reset first; a game in progress must be reset explicitly.
    pub fn start(&mut self, config: GameConfig, placement: &MinePlacement) -> Result<()> {
        self.begin(config, |board| placement.apply(board, config.mines))
    }

    /// Starts a game with mines drawn from `rng`.
    pub fn start_random<R: Rng + ?Sized>(&mut self, config: GameConfig, rng: &mut R) -> Result<()> {
        self.begin(config, |board| place_mines(board, config.mines, rng))
    }

    fn begin(
        &mut self,
        config: GameConfig,
        place: impl FnOnce(&mut Board) -> Result<()>,
    ) -> Result<()> {
        match self.state {
            GameState::InProgress => return Err(GameError::AlreadyInProgress),
            GameState::Won | GameState::Lost => self.reset(),
            GameState::Configuring => {}
        }

        if let Err(err) = self.bounds.check(&config) {
            log::warn!("Rejected game config {:?}: {}", config, err);
            return Err(err);
        }

        let mut board = Board::new(config.rows, config.cols);
        place(&mut board)?;

        self.board = Some(board);
        self.config = Some(config);
        self.cleared = 0;
        self.triggered_mine = None;
        self.state = GameState::InProgress;
        log::debug!(
            "Game started: {}x{} with {} mines",
            config.rows,
            config.cols,
            config.mines
        );
        Ok(())
    }

    /// Discards the board and goes back to configuring.
    pub fn reset(&mut self) {
        self.board = None;
        self.config = None;
        self.cleared = 0;
        self.triggered_mine = None;
        self.state = GameState::Configuring;
        log::debug!("Game reset");
    }

    pub fn reveal_cell(&mut self, coords: Coord2) -> MoveOutcome {
        if self.state != GameState::InProgress {
            return MoveOutcome::NoChange;
        }
        let Some(board) = self.board.as_mut() else {
            return MoveOutcome::NoChange;
        };

        match reveal(board, coords) {
            RevealOutcome::Mine => {
                self.triggered_mine = Some(coords);
                self.end_game(false);
                MoveOutcome::Lost
            }
            RevealOutcome::Cleared(0) => MoveOutcome::NoChange,
            RevealOutcome::Cleared(count) => {
                self.cleared += count;
                if self.cleared == self.safe_cell_target() {
                    self.end_game(true);
                    MoveOutcome::Won
                } else {
                    MoveOutcome::Revealed(count)
                }
            }
        }
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        if self.state != GameState::InProgress {
            return MarkOutcome::NoChange;
        }
        let Some(board) = self.board.as_mut() else {
            return MarkOutcome::NoChange;
        };
        if !board.in_bounds(coords) || board[coords].revealed {
            return MarkOutcome::NoChange;
        }

        let cell = &mut board[coords];
        cell.flagged = !cell.flagged;
        MarkOutcome::Changed
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn config(&self) -> Option<GameConfig> {
        self.config
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Safe cells revealed so far in this game.
    pub fn cleared(&self) -> CellCount {
        self.cleared
    }

    pub fn flag_count(&self) -> CellCount {
        self.board.as_ref().map_or(0, Board::flagged_count)
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Player-visible state of one cell, `None` when there is no board or `coords` is out of bounds.
    pub fn cell_view(&self, coords: Coord2) -> Option<CellView> {
        let cell = *self.board.as_ref()?.get(coords)?;

        Some(match (self.state, cell) {
            (GameState::Lost, _) if self.triggered_mine == Some(coords) => CellView::TriggeredMine,
            (GameState::Lost, Cell { is_mine: true, .. }) => CellView::Mine,
            (_, Cell { revealed: true, adjacent_mines, .. }) => CellView::Revealed(adjacent_mines),
            (_, Cell { flagged: true, .. }) => CellView::Flagged,
            _ => CellView::Hidden,
        })
    }

    /// All mine locations, only available after a loss.
    pub fn exposed_mines(&self) -> Option<Vec<Coord2>> {
        match self.state {
            GameState::Lost => self.board.as_ref().map(Board::mine_coords),
            _ => None,
        }
    }

    pub fn end_message(&self) -> Option<EndMessage> {
        match self.state {
            GameState::Won => Some(EndMessage::YouWon),
            GameState::Lost => Some(EndMessage::GameOver),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> Option<Snapshot> {
        Snapshot::from_game(self)
    }

    fn safe_cell_target(&self) -> CellCount {
        self.config.map_or(0, |config| config.safe_cells())
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won { GameState::Won } else { GameState::Lost };
        log::debug!(
            "Game ended: {:?} after clearing {} cells",
            self.state,
            self.cleared
        );
    }
}

/// Unchecked serialized form of [`Game`].
#[derive(Deserialize)]
struct GameRecord {
    bounds: Bounds,
    config: Option<GameConfig>,
    board: Option<Board>,
    state: GameState,
    cleared: CellCount,
    triggered_mine: Option<Coord2>,
}

impl GameRecord {
    fn is_consistent(&self) -> bool {
        match (&self.config, &self.board, self.state) {
            (None, None, GameState::Configuring) => self.cleared == 0 && self.triggered_mine.is_none(),
            (Some(config), Some(board), state) if state != GameState::Configuring => {
                let safe = config.safe_cells();
                let cleared_ok = match state {
                    GameState::Won => self.cleared == safe,
                    _ => self.cleared < safe,
                };
                let trigger_ok = match (state, self.triggered_mine) {
                    (GameState::Lost, Some(coords)) => board.get(coords).is_some_and(|cell| cell.is_mine),
                    (GameState::Lost, None) => false,
                    (_, trigger) => trigger.is_none(),
                };

                self.bounds.check(config).is_ok()
                    && board.size() == config.size()
                    && board.mine_count() == config.mines
                    && board.revealed_count() == self.cleared
                    && cleared_ok
                    && trigger_ok
            }
            _ => false,
        }
    }
}

impl TryFrom<GameRecord> for Game {
    type Error = GameError;

    fn try_from(record: GameRecord) -> Result<Self> {
        record.bounds.validate()?;
        if !record.is_consistent() {
            log::warn!("Rejected saved game in state {:?}", record.state);
            return Err(GameError::InvalidState);
        }

        Ok(Self {
            bounds: record.bounds,
            config: record.config,
            board: record.board,
            state: record.state,
            cleared: record.cleared,
            triggered_mine: record.triggered_mine,
        })
    }
}
