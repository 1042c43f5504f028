use ndarray::Array2;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use super::*;

/// Uniformly random layout that never puts a mine on the `safe` cell.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
    safe: Coord2,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64, safe: Coord2) -> Self {
        Self { seed, safe }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Board {
        let safe_index = config
            .contains(self.safe)
            .then(|| flat_index(self.safe, config.cols));

        let mut candidates: Vec<CellCount> = (0..config.total_cells())
            .filter(|&index| Some(index) != safe_index)
            .collect();

        if usize::from(config.mines) > candidates.len() {
            log::warn!(
                "Board too small for the mines requested, requested {} but only fits {}",
                config.mines,
                candidates.len()
            );
        }

        // Fisher-Yates over the candidates, the prefix becomes the mine set
        let mut rng = SmallRng::seed_from_u64(self.seed);
        candidates.shuffle(&mut rng);

        let mut mine_mask: Array2<bool> = Array2::default(config.size().to_nd_index());
        for &index in candidates.iter().take(config.mines.into()) {
            mine_mask[from_flat_index(index, config.cols).to_nd_index()] = true;
        }

        let board = Board::from_mine_mask(&mine_mask);
        log::debug!(
            "Generated {}x{} board with {} mines, safe cell {:?}",
            config.rows,
            config.cols,
            board.mine_count(),
            self.safe
        );
        board
    }
}
