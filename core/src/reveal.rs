use std::collections::VecDeque;

use crate::*;

/// Opens `start` and floods outward through zero-count cells.
///
/// Cells that are already opened or flagged are never visited, so calling this
/// on an opened or flagged `start` adds nothing. Returns the number of newly
/// opened cells.
pub fn reveal(board: &Board, start: Coord2, opened: &mut CellSet, flagged: &CellSet) -> CellCount {
    if opened.contains(start) || flagged.contains(start) {
        return 0;
    }

    let mut added = 0;
    let mut to_visit = VecDeque::from([start]);

    while let Some(coords) = to_visit.pop_front() {
        if flagged.contains(coords) || !opened.insert(coords) {
            continue;
        }
        added += 1;

        let cell = board[coords];
        if cell.is_mine || cell.adjacent != 0 {
            continue;
        }

        to_visit.extend(
            board
                .iter_neighbors(coords)
                .filter(|&pos| !opened.contains(pos) && !flagged.contains(pos)),
        );
    }

    log::trace!("Flood from {:?} opened {} cells", start, added);
    added
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sets(board: &Board) -> (CellSet, CellSet) {
        (CellSet::new(board.size()), CellSet::new(board.size()))
    }

    #[test]
    fn numbered_cell_opens_alone() {
        let board = Board::from_mine_coords((3, 3), &[(0, 0), (2, 2)]).unwrap();
        let (mut opened, flagged) = sets(&board);

        assert_eq!(reveal(&board, (1, 1), &mut opened, &flagged), 1);
        assert_eq!(opened.iter().collect::<Vec<_>>(), vec![(1, 1)]);
    }

    #[test]
    fn zero_cell_floods_up_to_numbered_boundary() {
        // column 3 is a wall of mines, column 2 is numbered
        let board = Board::from_mine_coords((3, 5), &[(0, 3), (1, 3), (2, 3)]).unwrap();
        let (mut opened, flagged) = sets(&board);

        let added = reveal(&board, (1, 0), &mut opened, &flagged);

        assert_eq!(added, 9);
        for row in 0..3 {
            for col in 0..3 {
                assert!(opened.contains((row, col)));
            }
            assert!(!opened.contains((row, 3)));
            assert!(!opened.contains((row, 4)));
        }
    }

    #[test]
    fn flood_stops_at_flags() {
        let board = Board::from_mine_coords((1, 5), &[(0, 4)]).unwrap();
        let (mut opened, mut flagged) = sets(&board);
        flagged.insert((0, 1));

        assert_eq!(reveal(&board, (0, 0), &mut opened, &flagged), 1);
        assert!(!opened.contains((0, 1)));
        assert!(!opened.contains((0, 2)));
    }

    #[test]
    fn already_opened_or_flagged_start_is_noop() {
        let board = Board::from_mine_coords((2, 2), &[(1, 1)]).unwrap();
        let (mut opened, mut flagged) = sets(&board);

        opened.insert((0, 0));
        flagged.insert((0, 1));

        assert_eq!(reveal(&board, (0, 0), &mut opened, &flagged), 0);
        assert_eq!(reveal(&board, (0, 1), &mut opened, &flagged), 0);
        assert_eq!(opened.len(), 1);
    }

    #[test]
    fn flood_skips_already_opened_cells() {
        let board = Board::from_mine_coords((1, 4), &[]).unwrap();
        let (mut opened, flagged) = sets(&board);
        opened.insert((0, 3));

        assert_eq!(reveal(&board, (0, 0), &mut opened, &flagged), 3);
        assert_eq!(opened.len(), 4);
    }

    #[test]
    fn mine_start_does_not_cascade() {
        let board = Board::from_mine_coords((2, 2), &[(0, 0)]).unwrap();
        let (mut opened, flagged) = sets(&board);

        assert_eq!(reveal(&board, (0, 0), &mut opened, &flagged), 1);
        assert_eq!(opened.len(), 1);
    }
}
