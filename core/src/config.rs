use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Board dimensions and mine count for one game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    /// Checks `0 < mines < rows * cols`, which keeps one cell free for the first click.
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::EmptyBoard);
        }
        if mines == 0 || mines >= mult(rows, cols) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self::new_unchecked(rows, cols, mines))
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }

    pub const fn contains(&self, (row, col): Coord2) -> bool {
        row < self.rows && col < self.cols
    }
}

/// Fixed difficulty table offered to players.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub const fn config(self) -> GameConfig {
        match self {
            Self::Easy => GameConfig::new_unchecked(9, 9, 10),
            Self::Medium => GameConfig::new_unchecked(16, 16, 40),
            Self::Hard => GameConfig::new_unchecked(16, 30, 99),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Lenient lookup for an optional address parameter: anything unknown is easy.
    pub fn from_param(param: Option<&str>) -> Self {
        match param.map(str::parse) {
            Some(Ok(difficulty)) => difficulty,
            Some(Err(_)) => {
                log::debug!("Unknown difficulty {:?}, using easy", param);
                Self::Easy
            }
            None => Self::Easy,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(GameError::UnknownDifficulty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_table() {
        assert_eq!(Difficulty::Easy.config(), GameConfig::new(9, 9, 10).unwrap());
        assert_eq!(Difficulty::Medium.config(), GameConfig::new(16, 16, 40).unwrap());
        assert_eq!(Difficulty::Hard.config(), GameConfig::new(16, 30, 99).unwrap());
        assert_eq!(Difficulty::Hard.config().safe_cells(), 381);
    }

    #[test]
    fn config_rejects_full_boards() {
        assert_eq!(GameConfig::new(2, 2, 4), Err(GameError::TooManyMines));
        assert_eq!(GameConfig::new(2, 2, 0), Err(GameError::TooManyMines));
        assert_eq!(GameConfig::new(0, 5, 1), Err(GameError::EmptyBoard));
        assert!(GameConfig::new(2, 2, 3).is_ok());
    }

    #[test]
    fn difficulty_parses_names() {
        assert_eq!("medium".parse(), Ok(Difficulty::Medium));
        assert_eq!("HARD".parse(), Ok(Difficulty::Hard));
        assert_eq!("nightmare".parse::<Difficulty>(), Err(GameError::UnknownDifficulty));
        assert_eq!(Difficulty::Medium.to_string(), "medium");
    }

    #[test]
    fn difficulty_param_falls_back_to_easy() {
        assert_eq!(Difficulty::from_param(Some("hard")), Difficulty::Hard);
        assert_eq!(Difficulty::from_param(Some("???")), Difficulty::Easy);
        assert_eq!(Difficulty::from_param(None), Difficulty::Easy);
    }

    #[test]
    fn difficulty_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), "\"hard\"");
    }
}
