use std::fmt;
use std::time::Duration;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Ready -> Playing
/// - Playing -> Won
/// - Playing -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// No board yet, timer at zero
    #[default]
    Ready,
    /// Board exists and the timer is running
    Playing,
    /// A mine was opened
    Lost,
    /// Every safe cell is open
    Won,
}

impl GameStatus {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Ready => "READY",
            Self::Playing => "PLAYING",
            Self::Lost => "LOST",
            Self::Won => "WON",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the player sees at one coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Opened(u8),
    Mine,
}

impl CellView {
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

/// Outcome of opening a cell
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl OpenOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Outcome of toggling a flag
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

impl FlagOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// What a primary click does.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Open,
    Flag,
}

impl InputMode {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Flag,
            Self::Flag => Self::Open,
        }
    }
}

/// One play session, from the first click to a win or a loss.
///
/// The board is generated lazily on the first open, with the clicked cell kept
/// free of mines, so the opening move can never lose.
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    difficulty: Option<Difficulty>,
    config: GameConfig,
    seed: u64,
    board: Option<Board>,
    opened: CellSet,
    flagged: CellSet,
    status: GameStatus,
    stopwatch: Stopwatch,
}

impl Game {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty: Some(difficulty),
            ..Self::with_config(difficulty.config())
        }
    }

    /// A game outside the difficulty table, e.g. a tiny practice board.
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            difficulty: None,
            config,
            seed: rand::random(),
            board: None,
            opened: CellSet::new(config.size()),
            flagged: CellSet::new(config.size()),
            status: Default::default(),
            stopwatch: Default::default(),
        }
    }

    /// A game on a fixed layout; the first click may hit a mine.
    pub fn with_board(board: Board) -> Self {
        let config = board.game_config();
        Self {
            board: Some(board),
            ..Self::with_config(config)
        }
    }

    /// Pins the seed used to generate the board on the first open.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn opened(&self) -> &CellSet {
        &self.opened
    }

    pub fn flagged(&self) -> &CellSet {
        &self.flagged
    }

    pub fn opened_count(&self) -> CellCount {
        self.opened.len()
    }

    pub fn flag_count(&self) -> CellCount {
        self.flagged.len()
    }

    /// Total mines minus flags placed; goes negative with too many flags.
    pub fn mines_remaining(&self) -> i32 {
        i32::from(self.config.mines) - i32::from(self.flagged.len())
    }

    pub fn elapsed(&self) -> Duration {
        self.stopwatch.elapsed()
    }

    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    pub fn cell_view(&self, coords: Coord2) -> CellView {
        if self.opened.contains(coords) {
            match self.board.as_ref().and_then(|board| board.get(coords)) {
                Some(cell) if cell.is_mine => CellView::Mine,
                Some(cell) => CellView::Opened(cell.adjacent),
                None => CellView::Hidden,
            }
        } else if self.flagged.contains(coords) {
            CellView::Flagged
        } else {
            CellView::Hidden
        }
    }

    pub fn open_cell(&mut self, coords: Coord2) -> OpenOutcome {
        use OpenOutcome::*;

        if !self.check_coords(coords) {
            return NoChange;
        }
        if self.status.is_finished() || self.flagged.contains(coords) || self.opened.contains(coords) {
            return NoChange;
        }

        self.mark_started();

        let (seed, config) = (self.seed, self.config);
        let board = self
            .board
            .get_or_insert_with(|| RandomBoardGenerator::new(seed, coords).generate(config));

        if board.contains_mine(coords) {
            log::debug!("Mine hit at {:?}", coords);
            self.opened.extend(board.mine_coords());
            self.end_game(GameStatus::Lost);
            return HitMine;
        }

        let added = reveal(board, coords, &mut self.opened, &self.flagged);
        log::debug!("Open cell at {:?}, {} cells opened", coords, added);

        if self.opened.len() >= self.config.safe_cells() {
            self.end_game(GameStatus::Won);
            Won
        } else {
            Revealed
        }
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> FlagOutcome {
        use FlagOutcome::*;

        if !self.check_coords(coords) {
            return NoChange;
        }
        if self.status.is_finished() || self.opened.contains(coords) {
            return NoChange;
        }

        self.mark_started();

        if self.flagged.toggle(coords) {
            Flagged
        } else {
            Unflagged
        }
    }

    /// Dispatches a primary click according to the current input mode.
    pub fn act(&mut self, mode: InputMode, coords: Coord2) -> bool {
        match mode {
            InputMode::Open => self.open_cell(coords).has_update(),
            InputMode::Flag => self.toggle_flag(coords).has_update(),
        }
    }

    /// Back to `Ready` on the same configuration, with a fresh seed.
    pub fn reset(&mut self) {
        log::debug!("Reset {}x{} game", self.config.rows, self.config.cols);
        self.seed = rand::random();
        self.board = None;
        self.opened = CellSet::new(self.config.size());
        self.flagged = CellSet::new(self.config.size());
        self.status = GameStatus::Ready;
        self.stopwatch.reset();
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = Some(difficulty);
        self.config = difficulty.config();
        self.reset();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_game(self)
    }

    fn check_coords(&self, coords: Coord2) -> bool {
        let valid = self.config.contains(coords);
        if !valid {
            log::warn!("Ignoring move outside the board at {:?}", coords);
        }
        valid
    }

    fn mark_started(&mut self) {
        if self.status.is_ready() {
            log::debug!("Game started");
            self.status = GameStatus::Playing;
            self.stopwatch.start();
        }
    }

    fn end_game(&mut self, status: GameStatus) {
        if self.status.is_finished() {
            return;
        }
        self.status = status;
        self.stopwatch.stop();
        log::debug!("Game ended: {} after {:?}", status, self.stopwatch.elapsed());
    }
}

pub fn new_game(difficulty: Difficulty) -> Game {
    Game::new(difficulty)
}

pub fn open_cell(state: &Game, coords: Coord2) -> Game {
    let mut next = state.clone();
    next.open_cell(coords);
    next
}

pub fn toggle_flag(state: &Game, coords: Coord2) -> Game {
    let mut next = state.clone();
    next.toggle_flag(coords);
    next
}

pub fn reset(state: &Game) -> Game {
    let mut next = state.clone();
    next.reset();
    next
}
