//! Minesweeper engine for the Ronin Mines site.
//!
//! The presentation shell owns a [`Game`] and feeds it player intents
//! ([`Game::open_cell`], [`Game::toggle_flag`], [`Game::reset`]); everything it
//! renders comes back out of [`Game::cell_view`], [`Game::mines_remaining`],
//! [`Game::status`] and [`Game::elapsed`].

pub use board::*;
pub use cell_set::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use reveal::*;
pub use snapshot::*;
pub use stopwatch::*;
pub use types::*;

mod board;
mod cell_set;
mod config;
mod error;
mod game;
mod generator;
mod reveal;
mod snapshot;
mod stopwatch;
mod types;
