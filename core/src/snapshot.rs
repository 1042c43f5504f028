use serde::{Deserialize, Serialize};

use crate::*;

/// Plain view of a session for debugging panels and logs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub difficulty: Option<Difficulty>,
    pub status: GameStatus,
    pub opened_cells: Vec<String>,
    pub flags: Vec<String>,
    pub time_ms: u64,
}

impl Snapshot {
    pub fn from_game(game: &Game) -> Self {
        Self {
            difficulty: game.difficulty(),
            status: game.status(),
            opened_cells: game.opened().iter().map(cell_key).collect(),
            flags: game.flagged().iter().map(cell_key).collect(),
            time_ms: game.elapsed().as_millis().try_into().unwrap_or(u64::MAX),
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// `"row,col"` key for a cell.
pub fn cell_key((row, col): Coord2) -> String {
    format!("{},{}", row, col)
}
