use serde::{Deserialize, Serialize};

use crate::*;

/// Arguments of a single game start.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    pub const fn square(size: Coord, mines: CellCount) -> Self {
        Self::new(size, size, mines)
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub fn total_cells(&self) -> CellCount {
        self.size().area()
    }

    pub fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

/// Legal ranges for [`GameConfig`], supplied once when the game is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Bounds {
    pub min_size: Coord,
    pub max_size: Coord,
    pub min_mines: CellCount,
    pub max_mines: CellCount,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min_size: 5,
            max_size: 20,
            min_mines: 1,
            max_mines: 60,
        }
    }
}

impl Bounds {
    pub fn new(
        min_size: Coord,
        max_size: Coord,
        min_mines: CellCount,
        max_mines: CellCount,
    ) -> Result<Self> {
        let bounds = Self {
            min_size,
            max_size,
            min_mines,
            max_mines,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Rejects bounds that admit no playable board.
    pub fn validate(&self) -> Result<()> {
        if self.min_size == 0
            || self.min_size > self.max_size
            || self.min_mines > self.max_mines
            || self.min_mines >= (self.max_size, self.max_size).area()
        {
            return Err(GameError::InvalidBounds);
        }
        Ok(())
    }

    /// Checks a start request against these bounds.
    pub fn check(&self, config: &GameConfig) -> Result<()> {
        let sizes = self.min_size..=self.max_size;
        if !sizes.contains(&config.rows) || !sizes.contains(&config.cols) {
            return Err(GameError::BoardSize {
                rows: config.rows,
                cols: config.cols,
            });
        }
        if !(self.min_mines..=self.max_mines).contains(&config.mines) {
            return Err(GameError::MineCount {
                mines: config.mines,
            });
        }
        if config.mines >= config.total_cells() {
            return Err(GameError::TooManyMines);
        }
        Ok(())
    }

    /// Pre-selected square board: midpoint size and midpoint mine count.
    ///
    /// The size grows past the midpoint when `min_mines` would not leave a safe cell, and the mine count is capped
    /// below the cell count. For bounds that pass [`Bounds::validate`] the result always passes [`Bounds::check`].
    pub fn default_config(&self) -> GameConfig {
        let midpoint = self.min_size + (self.max_size - self.min_size) / 2;
        let size = (midpoint..=self.max_size)
            .find(|&size| (size, size).area() > self.min_mines)
            .unwrap_or(self.max_size);

        let mines = self.min_mines + (self.max_mines - self.min_mines) / 2;
        let mines = mines.min((size, size).area() - 1).max(self.min_mines);
        GameConfig::square(size, mines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds_are_valid() {
        assert_eq!(Bounds::default().validate(), Ok(()));
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        assert_eq!(Bounds::new(10, 5, 1, 5), Err(GameError::InvalidBounds));
        assert_eq!(Bounds::new(0, 5, 1, 5), Err(GameError::InvalidBounds));
        assert_eq!(Bounds::new(2, 2, 4, 9), Err(GameError::InvalidBounds));
        assert_eq!(Bounds::new(5, 5, 8, 3), Err(GameError::InvalidBounds));
    }

    #[test]
    fn check_reports_each_violation() {
        let bounds = Bounds::new(3, 10, 1, 20).unwrap();

        assert_eq!(bounds.check(&GameConfig::new(8, 8, 10)), Ok(()));
        assert_eq!(
            bounds.check(&GameConfig::new(2, 8, 10)),
            Err(GameError::BoardSize { rows: 2, cols: 8 })
        );
        assert_eq!(
            bounds.check(&GameConfig::new(8, 11, 10)),
            Err(GameError::BoardSize { rows: 8, cols: 11 })
        );
        assert_eq!(
            bounds.check(&GameConfig::new(8, 8, 0)),
            Err(GameError::MineCount { mines: 0 })
        );
        assert_eq!(
            bounds.check(&GameConfig::new(3, 3, 9)),
            Err(GameError::TooManyMines)
        );
    }

    #[test]
    fn default_config_uses_midpoints() {
        let bounds = Bounds::new(5, 15, 10, 30).unwrap();

        assert_eq!(bounds.default_config(), GameConfig::square(10, 20));
    }

    #[test]
    fn default_config_keeps_a_safe_cell() {
        let bounds = Bounds::new(2, 2, 1, 10).unwrap();

        assert_eq!(bounds.default_config(), GameConfig::square(2, 3));
    }

    #[test]
    fn default_config_grows_board_for_min_mines() {
        let bounds = Bounds::new(2, 3, 8, 8).unwrap();
        let config = bounds.default_config();

        assert_eq!(config, GameConfig::square(3, 8));
        assert_eq!(bounds.check(&config), Ok(()));
    }

    #[test]
    fn default_config_passes_check_for_all_valid_bounds() {
        for min_size in 1..=6 {
            for max_size in min_size..=6 {
                for min_mines in 0..=40 {
                    for max_mines in [min_mines, min_mines + 3, 40] {
                        let Ok(bounds) = Bounds::new(min_size, max_size, min_mines, max_mines) else {
                            continue;
                        };
                        let config = bounds.default_config();
                        assert_eq!(bounds.check(&config), Ok(()), "{bounds:?} -> {config:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn bounds_deserialize_from_kebab_case() {
        let bounds: Bounds =
            serde_json::from_str(r#"{"min-size": 4, "max-size": 9, "max-mines": 12}"#).unwrap();

        assert_eq!(bounds, Bounds::new(4, 9, 1, 12).unwrap());
    }
}
