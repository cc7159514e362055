//! The ant and the direction it faces.

use std::fmt;

use crate::grid::Pos;

/// All cardinal directions, in clockwise order starting from north.
pub const DIRECTIONS: [Direction; 4] = [Direction::N, Direction::E, Direction::S, Direction::W];

/// 2D cardinal direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    /// North (toward decreasing Y).
    N = 0,
    /// East (toward increasing X).
    E = 1,
    /// South (toward increasing Y).
    S = 2,
    /// West (toward decreasing X).
    W = 3,
}
impl Default for Direction {
    fn default() -> Self {
        Direction::N
    }
}
impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
impl Direction {
    /// Returns the direction with the given index, modulo 4.
    pub fn from_index(idx: usize) -> Self {
        DIRECTIONS[idx % 4]
    }
    /// Returns the index of this direction: 0 for north, increasing
    /// clockwise.
    pub fn index(self) -> usize {
        self as usize
    }
    /// Returns the direction after rotating by `delta` quarter turns
    /// (positive is clockwise).
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn turn(self, delta: i8) -> Self {
        let idx = (self.index() as isize + delta as isize).rem_euclid(4);
        Self::from_index(idx as usize)
    }
    /// Returns the X component of the vector in this direction (0, -1, or +1).
    pub fn x(self) -> isize {
        match self {
            Direction::N | Direction::S => 0,
            Direction::E => 1,
            Direction::W => -1,
        }
    }
    /// Returns the Y component of the vector in this direction (0, -1, or +1).
    pub fn y(self) -> isize {
        match self {
            Direction::E | Direction::W => 0,
            Direction::S => 1,
            Direction::N => -1,
        }
    }
    /// Returns the full name of the direction.
    pub fn name(self) -> &'static str {
        match self {
            Direction::N => "North",
            Direction::E => "East",
            Direction::S => "South",
            Direction::W => "West",
        }
    }
}

/// The single agent walking the grid.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Ant {
    /// Cell the ant is standing on.
    pub pos: Pos,
    /// Direction the ant is facing.
    pub direction: Direction,
}
impl Ant {
    /// Constructs an ant at `pos` facing north.
    pub fn new(pos: Pos) -> Self {
        Self {
            pos,
            direction: Direction::N,
        }
    }
    /// Returns the X coordinate of the ant.
    pub fn x(&self) -> usize {
        self.pos.x
    }
    /// Returns the Y coordinate of the ant.
    pub fn y(&self) -> usize {
        self.pos.y
    }
}
