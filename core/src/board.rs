use std::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// One square of the board; `adjacent` is only meaningful when `is_mine` is false.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub is_mine: bool,
    pub adjacent: u8,
}

impl Cell {
    pub const MINE: Self = Self {
        is_mine: true,
        adjacent: 0,
    };

    pub const fn safe(adjacent: u8) -> Self {
        Self {
            is_mine: false,
            adjacent,
        }
    }
}

/// Mine layout with precomputed adjacency, fixed for the lifetime of a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Board {
    pub fn from_mine_mask(mine_mask: &Array2<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        let cells = Array2::from_shape_fn(mine_mask.dim(), |(row, col)| {
            if mine_mask[(row, col)] {
                return Cell::MINE;
            }
            let adjacent = mine_mask
                .iter_neighbors((row as Coord, col as Coord))
                .filter(|&pos| mine_mask[pos.to_nd_index()])
                .count();
            Cell::safe(adjacent as u8)
        });

        Self { cells, mine_count }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(&mine_mask))
    }

    pub fn size(&self) -> Coord2 {
        dim_to_size(self.cells.dim())
    }

    pub fn game_config(&self) -> GameConfig {
        let (rows, cols) = self.size();
        GameConfig::new_unchecked(rows, cols, self.mine_count)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn get(&self, coords: Coord2) -> Option<Cell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].is_mine
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self[coords].adjacent
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    /// Mine positions in row-major order.
    pub fn mine_coords(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.is_mine)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adjacency_grid(board: &Board) -> Vec<Vec<Option<u8>>> {
        let (rows, cols) = board.size();
        (0..rows)
            .map(|row| {
                (0..cols)
                    .map(|col| {
                        let cell = board[(row, col)];
                        (!cell.is_mine).then_some(cell.adjacent)
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn adjacency_for_opposite_corners() {
        let board = Board::from_mine_coords((3, 3), &[(0, 0), (2, 2)]).unwrap();

        assert_eq!(
            adjacency_grid(&board),
            vec![
                vec![None, Some(1), Some(0)],
                vec![Some(1), Some(2), Some(1)],
                vec![Some(0), Some(1), None],
            ]
        );
        assert_eq!(board.mine_count(), 2);
        assert_eq!(board.safe_cell_count(), 7);
    }

    #[test]
    fn adjacency_counts_all_eight_neighbors() {
        let ring = [(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)];
        let board = Board::from_mine_coords((3, 3), &ring).unwrap();

        assert_eq!(board[(1, 1)], Cell::safe(8));
        assert!(board.contains_mine((0, 0)));
        assert_eq!(board[(0, 0)].adjacent, 0);
    }

    #[test]
    fn adjacency_on_rectangular_board() {
        let board = Board::from_mine_coords((2, 4), &[(0, 3)]).unwrap();

        assert_eq!(
            adjacency_grid(&board),
            vec![
                vec![Some(0), Some(0), Some(1), None],
                vec![Some(0), Some(0), Some(1), Some(1)],
            ]
        );
    }

    #[test]
    fn mine_coords_are_row_major() {
        let board = Board::from_mine_coords((3, 3), &[(2, 2), (0, 1)]).unwrap();
        assert_eq!(board.mine_coords().collect::<Vec<_>>(), vec![(0, 1), (2, 2)]);
    }

    #[test]
    fn rejects_mines_outside_board() {
        assert_eq!(
            Board::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn get_is_none_out_of_bounds() {
        let board = Board::from_mine_coords((2, 2), &[]).unwrap();
        assert_eq!(board.get((1, 1)), Some(Cell::safe(0)));
        assert_eq!(board.get((2, 0)), None);
        assert_eq!(board.validate_coords((0, 2)), Err(GameError::InvalidCoords));
    }
}
