use std::collections::VecDeque;

use crate::error::GameError;
use crate::grid::Cell;
use crate::input::{direction_change_is_valid, Direction};

/// Snake body and heading.
///
/// The body is stored tail first; the last element is the head.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
}

impl Snake {
    /// Creates a snake from explicit body cells (tail first, head last).
    pub fn new<I>(cells: I, direction: Direction) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = Cell>,
    {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        if body.is_empty() {
            return Err(GameError::EmptySnake);
        }

        debug_assert!(
            body.iter()
                .zip(body.iter().skip(1))
                .all(|(a, b)| a.manhattan_distance(*b) == 1),
            "snake body cells must be grid-adjacent"
        );

        Ok(Self { body, direction })
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one cell")
    }

    /// Returns the head position after one step in the current direction.
    #[must_use]
    pub fn next_head(&self) -> Cell {
        self.head() + self.direction
    }

    /// Appends the next head and returns it. The tail is left in place;
    /// callers drop it with [`Snake::shrink`] when the snake did not grow.
    pub fn advance(&mut self) -> Cell {
        let next = self.next_head();
        self.body.push_back(next);
        next
    }

    /// Removes the tail cell. A one-cell snake is left untouched.
    pub fn shrink(&mut self) -> Option<Cell> {
        if self.body.len() <= 1 {
            return None;
        }
        self.body.pop_front()
    }

    /// Returns true if any cell other than the head equals `cell`.
    #[must_use]
    pub fn contains_before_head(&self, cell: Cell) -> bool {
        let before_head = self.body.len() - 1;
        self.body.iter().take(before_head).any(|segment| *segment == cell)
    }

    /// Returns true if moving the head to `cell` would bite the body.
    ///
    /// When the snake is not growing the tail moves away this tick, so the
    /// tail cell does not count.
    #[must_use]
    pub fn would_bite(&self, cell: Cell, growing: bool) -> bool {
        let skip = usize::from(!growing);
        self.body.iter().skip(skip).any(|segment| *segment == cell)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        self.contains_before_head(self.head())
    }

    /// Changes heading unless `direction` reverses the current one.
    ///
    /// Returns whether the change was accepted.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.direction, direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least one segment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from tail to head.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}
