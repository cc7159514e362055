//! Toroidal 2D grid of cells.

use std::fmt;
use std::ops::{Index, Sub};

use itertools::Itertools;

use crate::ant::Direction;

/// Position of a cell on the grid.
///
/// Both coordinates are always in range for the grid that produced them.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Pos {
    /// X coordinate (column), increasing to the east.
    pub x: usize,
    /// Y coordinate (row), increasing to the south.
    pub y: usize,
}
impl Pos {
    /// Constructs a position from its coordinates.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}
impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Signed difference between two positions, ignoring wraparound.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Offset {
    /// Difference along the X axis.
    pub dx: isize,
    /// Difference along the Y axis.
    pub dy: isize,
}
impl Offset {
    /// Constructs an offset from its components.
    pub const fn new(dx: isize, dy: isize) -> Self {
        Self { dx, dy }
    }
    /// Returns true if both components are zero.
    pub fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}
impl Sub for Pos {
    type Output = Offset;

    #[inline]
    fn sub(self, origin: Pos) -> Offset {
        Offset {
            dx: self.x as isize - origin.x as isize,
            dy: self.y as isize - origin.y as isize,
        }
    }
}
impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:+}, {:+})", self.dx, self.dy)
    }
}

/// Rectangular grid of two-state cells whose opposite edges are joined.
///
/// Cells are stored row-major in a single flat slice. A cell state is `0`
/// (white) or `1` (black).
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Box<[u8]>,
}
impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("population", &self.population())
            .finish()
    }
}

impl Index<Pos> for Grid {
    type Output = u8;

    #[inline]
    fn index(&self, pos: Pos) -> &u8 {
        &self.cells[self.flatten_idx(pos)]
    }
}

impl Grid {
    /// Creates a grid of the given size with every cell white.
    ///
    /// # Panics
    ///
    /// This function panics if `width` or `height` is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "Grid must have nonzero size");
        Self {
            width,
            height,
            cells: vec![0_u8; width * height].into_boxed_slice(),
        }
    }

    /// Returns the number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
    /// Returns the number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }
    /// Returns the position of the center cell, rounding down.
    #[inline]
    pub fn center(&self) -> Pos {
        Pos::new(self.width / 2, self.height / 2)
    }

    /// Returns the state of the cell at `pos`.
    #[inline]
    pub fn cell(&self, pos: Pos) -> u8 {
        self[pos]
    }

    /// Inverts the cell at `pos` and returns its state from before the flip.
    #[inline]
    pub fn flip(&mut self, pos: Pos) -> u8 {
        let idx = self.flatten_idx(pos);
        let old = self.cells[idx];
        self.cells[idx] = 1 - old;
        old
    }

    /// Sets every cell to white.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = 0);
    }

    /// Returns the number of black cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    /// Maps arbitrary signed coordinates onto the grid.
    pub fn wrap(&self, x: isize, y: isize) -> Pos {
        Pos::new(
            x.rem_euclid(self.width as isize) as usize,
            y.rem_euclid(self.height as isize) as usize,
        )
    }

    /// Returns the neighbor of `pos` one cell away in `direction`, wrapping
    /// around the edges of the grid.
    #[inline]
    pub fn neighbor(&self, pos: Pos, direction: Direction) -> Pos {
        self.wrap(
            pos.x as isize + direction.x(),
            pos.y as isize + direction.y(),
        )
    }

    /// Returns an iterator over all cells in row-major order, enumerated by
    /// their positions.
    pub fn iter_enumerated<'a>(&'a self) -> impl 'a + Iterator<Item = (Pos, u8)> {
        (0..self.height)
            .cartesian_product(0..self.width)
            .map(|(y, x)| Pos::new(x, y))
            .zip(self.cells.iter().copied())
    }

    /// Returns the index into `cells` corresponding to a position.
    #[inline]
    fn flatten_idx(&self, pos: Pos) -> usize {
        debug_assert!(pos.x < self.width && pos.y < self.height);
        pos.y * self.width + pos.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_neighbor_wraps_each_edge() {
        let grid = Grid::new(5, 3);
        assert_eq!(Pos::new(2, 2), grid.neighbor(Pos::new(2, 0), Direction::N));
        assert_eq!(Pos::new(2, 0), grid.neighbor(Pos::new(2, 2), Direction::S));
        assert_eq!(Pos::new(0, 1), grid.neighbor(Pos::new(4, 1), Direction::E));
        assert_eq!(Pos::new(4, 1), grid.neighbor(Pos::new(0, 1), Direction::W));
        // No wrapping away from the edges.
        assert_eq!(Pos::new(2, 0), grid.neighbor(Pos::new(2, 1), Direction::N));
        assert_eq!(Pos::new(3, 1), grid.neighbor(Pos::new(2, 1), Direction::E));
        // A 1x1 grid is its own neighbor in every direction.
        let tiny = Grid::new(1, 1);
        for &d in &crate::ant::DIRECTIONS {
            assert_eq!(Pos::new(0, 0), tiny.neighbor(Pos::new(0, 0), d));
        }
    }

    #[test]
    fn test_grid_wrap_negative() {
        let grid = Grid::new(4, 6);
        assert_eq!(Pos::new(3, 5), grid.wrap(-1, -1));
        assert_eq!(Pos::new(1, 0), grid.wrap(9, 12));
    }

    #[test]
    fn test_grid_flip_and_population() {
        let mut grid = Grid::new(3, 3);
        assert_eq!(0, grid.population());
        assert_eq!(0, grid.flip(Pos::new(1, 2)));
        assert_eq!(1, grid.cell(Pos::new(1, 2)));
        assert_eq!(1, grid[grid.wrap(4, -1)]);
        assert_eq!(1, grid.population());
        let black = grid
            .iter_enumerated()
            .filter(|&(_, state)| state != 0)
            .map(|(pos, _)| pos)
            .collect_vec();
        assert_eq!(vec![Pos::new(1, 2)], black);
        assert_eq!(1, grid.flip(Pos::new(1, 2)));
        assert_eq!(0, grid.population());

        grid.flip(Pos::new(0, 0));
        grid.clear();
        assert_eq!(Grid::new(3, 3), grid);
    }

    #[test]
    fn test_grid_iter_enumerated_row_major() {
        let grid = Grid::new(2, 2);
        let positions = grid.iter_enumerated().map(|(pos, _)| pos).collect_vec();
        assert_eq!(
            vec![
                Pos::new(0, 0),
                Pos::new(1, 0),
                Pos::new(0, 1),
                Pos::new(1, 1),
            ],
            positions,
        );
    }

    #[test]
    fn test_pos_sub_is_signed() {
        assert_eq!(Offset::new(-3, 2), Pos::new(1, 5) - Pos::new(4, 3));
        assert!((Pos::new(7, 7) - Pos::new(7, 7)).is_zero());
    }

    #[test]
    #[should_panic]
    fn test_grid_zero_size_panics() {
        Grid::new(0, 10);
    }
}
