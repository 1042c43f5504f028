use ndarray::Array2;

use crate::*;

/// Set of coordinates on a fixed-size grid, stored as a membership mask.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellSet {
    mask: Array2<bool>,
    len: CellCount,
}

impl CellSet {
    pub fn new(size: Coord2) -> Self {
        Self {
            mask: Array2::default(size.to_nd_index()),
            len: 0,
        }
    }

    pub fn size(&self) -> Coord2 {
        dim_to_size(self.mask.dim())
    }

    pub fn len(&self) -> CellCount {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Always false for coordinates outside the grid.
    pub fn contains(&self, coords: Coord2) -> bool {
        self.mask.get(coords.to_nd_index()).copied().unwrap_or(false)
    }

    /// Returns whether the coordinate was newly added.
    pub fn insert(&mut self, coords: Coord2) -> bool {
        match self.mask.get_mut(coords.to_nd_index()) {
            Some(slot) if !*slot => {
                *slot = true;
                self.len += 1;
                true
            }
            _ => false,
        }
    }

    /// Returns whether the coordinate was present.
    pub fn remove(&mut self, coords: Coord2) -> bool {
        match self.mask.get_mut(coords.to_nd_index()) {
            Some(slot) if *slot => {
                *slot = false;
                self.len -= 1;
                true
            }
            _ => false,
        }
    }

    /// Flips membership, returning whether the coordinate is now present.
    pub fn toggle(&mut self, coords: Coord2) -> bool {
        if self.remove(coords) {
            false
        } else {
            self.insert(coords)
        }
    }

    pub fn clear(&mut self) {
        self.mask.fill(false);
        self.len = 0;
    }

    /// Members in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mask
            .indexed_iter()
            .filter(|&(_, &present)| present)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }
}

impl Extend<Coord2> for CellSet {
    fn extend<I: IntoIterator<Item = Coord2>>(&mut self, iter: I) {
        for coords in iter {
            self.insert(coords);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_remove_track_len() {
        let mut set = CellSet::new((3, 3));
        assert!(set.is_empty());

        assert!(set.insert((1, 2)));
        assert!(!set.insert((1, 2)));
        assert_eq!(set.len(), 1);
        assert!(set.contains((1, 2)));

        assert!(set.remove((1, 2)));
        assert!(!set.remove((1, 2)));
        assert!(set.is_empty());
    }

    #[test]
    fn toggle_flips_membership() {
        let mut set = CellSet::new((2, 2));
        assert!(set.toggle((0, 1)));
        assert!(set.contains((0, 1)));
        assert!(!set.toggle((0, 1)));
        assert!(!set.contains((0, 1)));
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn out_of_bounds_is_ignored() {
        let mut set = CellSet::new((2, 2));
        assert!(!set.insert((2, 0)));
        assert!(!set.contains((2, 0)));
        assert!(!set.toggle((0, 5)));
        assert!(set.is_empty());
    }

    #[test]
    fn iter_is_row_major_and_clear_empties() {
        let mut set = CellSet::new((3, 3));
        set.extend([(2, 0), (0, 2), (1, 1)]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![(0, 2), (1, 1), (2, 0)]);

        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
    }
}
