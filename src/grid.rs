use std::ops::Add;

use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the Manhattan distance between two cells.
    #[must_use]
    pub fn manhattan_distance(self, other: Self) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl Add<Direction> for Cell {
    type Output = Self;

    fn add(self, direction: Direction) -> Self {
        let (delta_row, delta_col) = direction.delta();
        Self {
            row: self.row + delta_row,
            col: self.col + delta_col,
        }
    }
}

/// Fixed play-field dimensions.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    pub width: u16,
    pub height: u16,
}

impl Grid {
    /// Returns true when `cell` lies inside `[0, height) x [0, width)`.
    #[must_use]
    pub fn contains(self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && cell.row < i32::from(self.height)
            && cell.col < i32::from(self.width)
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Iterates over every cell, row by row.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..i32::from(self.height))
            .flat_map(move |row| (0..i32::from(self.width)).map(move |col| Cell { row, col }))
    }
}

#[cfg(test)]
mod tests {
    use crate::input::Direction;

    use super::{Cell, Grid};

    const GRID: Grid = Grid {
        width: 30,
        height: 15,
    };

    #[test]
    fn contains_accepts_corners() {
        assert!(GRID.contains(Cell::new(0, 0)));
        assert!(GRID.contains(Cell::new(14, 29)));
    }

    #[test]
    fn contains_rejects_cells_past_each_edge() {
        assert!(!GRID.contains(Cell::new(-1, 3)));
        assert!(!GRID.contains(Cell::new(3, -1)));
        assert!(!GRID.contains(Cell::new(15, 3)));
        assert!(!GRID.contains(Cell::new(3, 30)));
    }

    #[test]
    fn rows_follow_height_and_columns_follow_width() {
        // 15 rows, 30 columns: (20, 3) is past the bottom, (3, 20) is inside.
        assert!(!GRID.contains(Cell::new(20, 3)));
        assert!(GRID.contains(Cell::new(3, 20)));
    }

    #[test]
    fn adding_a_direction_moves_one_cell() {
        let cell = Cell::new(5, 5);

        assert_eq!(cell + Direction::Up, Cell::new(4, 5));
        assert_eq!(cell + Direction::Down, Cell::new(6, 5));
        assert_eq!(cell + Direction::Left, Cell::new(5, 4));
        assert_eq!(cell + Direction::Right, Cell::new(5, 6));
    }

    #[test]
    fn cells_enumerates_whole_grid() {
        let grid = Grid {
            width: 4,
            height: 3,
        };

        assert_eq!(grid.cells().count(), grid.total_cells());
        assert!(grid.cells().all(|cell| grid.contains(cell)));
    }
}
