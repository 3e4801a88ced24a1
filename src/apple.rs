use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::config::{BONUS_APPLE_ODDS, MAX_SPAWN_ATTEMPTS};
use crate::error::GameError;
use crate::grid::{Cell, Grid};
use crate::snake::Snake;

/// Apple reward classification.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RewardTier {
    Normal,
    Bonus,
}

impl RewardTier {
    /// Returns the score value granted when eaten.
    #[must_use]
    pub fn points(self) -> u32 {
        match self {
            Self::Normal => 1,
            Self::Bonus => 5,
        }
    }
}

/// Apple currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Apple {
    pub cell: Cell,
    pub tier: RewardTier,
}

impl Apple {
    #[must_use]
    pub fn normal(cell: Cell) -> Self {
        Self {
            cell,
            tier: RewardTier::Normal,
        }
    }

    #[must_use]
    pub fn bonus(cell: Cell) -> Self {
        Self {
            cell,
            tier: RewardTier::Bonus,
        }
    }
}

/// Places apples on free cells using a generator seeded once per game.
#[derive(Debug, Clone)]
pub struct AppleSpawner<R = StdRng> {
    rng: R,
}

impl AppleSpawner<StdRng> {
    /// Seeds from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Seeds deterministically for tests and reproducible games.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> AppleSpawner<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Picks an apple cell outside the snake body and draws its tier.
    ///
    /// Fails with [`GameError::GridFull`] when the snake covers every cell.
    pub fn respawn(&mut self, snake: &Snake, grid: Grid) -> Result<Apple, GameError> {
        if snake.len() >= grid.total_cells() {
            return Err(GameError::GridFull {
                width: grid.width,
                height: grid.height,
            });
        }

        let cell = match self.sample_free_cell(snake, grid) {
            Some(cell) => cell,
            None => {
                warn!(
                    attempts = MAX_SPAWN_ATTEMPTS,
                    snake_len = snake.len(),
                    "random apple placement exhausted, scanning free cells"
                );
                grid.cells()
                    .filter(|cell| !snake.occupies(*cell))
                    .choose(&mut self.rng)
                    .ok_or(GameError::GridFull {
                        width: grid.width,
                        height: grid.height,
                    })?
            }
        };

        let tier = if self.rng.gen_ratio(1, BONUS_APPLE_ODDS) {
            RewardTier::Bonus
        } else {
            RewardTier::Normal
        };

        debug!(row = cell.row, col = cell.col, ?tier, "apple spawned");
        Ok(Apple { cell, tier })
    }

    fn sample_free_cell(&mut self, snake: &Snake, grid: Grid) -> Option<Cell> {
        (0..MAX_SPAWN_ATTEMPTS)
            .map(|_| Cell {
                row: self.rng.gen_range(0..i32::from(grid.height)),
                col: self.rng.gen_range(0..i32::from(grid.width)),
            })
            .find(|cell| !snake.occupies(*cell))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::GameError;
    use crate::grid::{Cell, Grid};
    use crate::input::Direction;
    use crate::snake::Snake;

    use super::{Apple, AppleSpawner, RewardTier};

    const GRID: Grid = Grid {
        width: 30,
        height: 15,
    };

    fn vertical_snake() -> Snake {
        Snake::new((5..=9).rev().map(|row| Cell::new(row, 3)), Direction::Up)
            .expect("non-empty body")
    }

    #[test]
    fn apple_never_spawns_inside_snake() {
        let mut spawner = AppleSpawner::seeded(7);
        let snake = vertical_snake();

        for _ in 0..1000 {
            let apple = spawner.respawn(&snake, GRID).expect("grid has free cells");
            assert!(!snake.occupies(apple.cell));
            assert!(GRID.contains(apple.cell));
        }
    }

    #[test]
    fn both_tiers_appear_over_many_spawns() {
        let mut spawner = AppleSpawner::seeded(11);
        let snake = vertical_snake();

        let bonus = (0..1000)
            .map(|_| spawner.respawn(&snake, GRID).expect("grid has free cells"))
            .filter(|apple| apple.tier == RewardTier::Bonus)
            .count();

        // Expected around 200 for 1-in-5 odds.
        assert!((100..350).contains(&bonus), "bonus count {bonus}");
    }

    #[test]
    fn last_free_cell_is_found() {
        let grid = Grid {
            width: 3,
            height: 1,
        };
        let snake = Snake::new([Cell::new(0, 0), Cell::new(0, 1)], Direction::Right)
            .expect("non-empty body");
        let mut spawner = AppleSpawner::seeded(3);

        let apple = spawner.respawn(&snake, grid).expect("one cell is free");

        assert_eq!(apple.cell, Cell::new(0, 2));
    }

    #[test]
    fn full_grid_fails_fast() {
        let grid = Grid {
            width: 2,
            height: 1,
        };
        let snake = Snake::new([Cell::new(0, 0), Cell::new(0, 1)], Direction::Right)
            .expect("non-empty body");
        let mut spawner = AppleSpawner::seeded(3);

        let result = spawner.respawn(&snake, grid);

        assert!(matches!(
            result,
            Err(GameError::GridFull {
                width: 2,
                height: 1
            })
        ));
    }

    #[test]
    fn tiers_have_expected_points() {
        assert_eq!(Apple::normal(Cell::new(1, 1)).tier.points(), 1);
        assert_eq!(Apple::bonus(Cell::new(2, 2)).tier.points(), 5);
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let snake = vertical_snake();
        let mut first = AppleSpawner::seeded(42);
        let mut second = AppleSpawner::seeded(42);

        for _ in 0..20 {
            assert_eq!(
                first.respawn(&snake, GRID).expect("free cells"),
                second.respawn(&snake, GRID).expect("free cells")
            );
        }
    }
}
