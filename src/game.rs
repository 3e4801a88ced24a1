use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::apple::{Apple, AppleSpawner, RewardTier};
use crate::config::{GRID, INITIAL_DIRECTION, INITIAL_SNAKE};
use crate::error::GameError;
use crate::grid::{Cell, Grid};
use crate::input::GameInput;
use crate::snake::Snake;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
}

/// Why the game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// What a single call to [`GameState::tick`] did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// Paused or already over; nothing changed.
    Idle,
    Moved,
    Ate(RewardTier),
    Died(DeathReason),
}

/// Immutable copy of everything the renderer needs for one frame.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snapshot {
    /// Tail first, head last.
    pub snake_cells: Vec<Cell>,
    pub apple_cell: Cell,
    pub apple_tier: RewardTier,
    pub score: u32,
    pub paused: bool,
    pub game_over: bool,
    pub death_reason: Option<DeathReason>,
    pub grid: Grid,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState<R = StdRng> {
    snake: Snake,
    apple: Apple,
    score: u32,
    status: GameStatus,
    death_reason: Option<DeathReason>,
    tick_count: u64,
    grid: Grid,
    spawner: AppleSpawner<R>,
}

impl GameState<StdRng> {
    /// Starts a game on the fixed grid with an entropy-seeded spawner.
    pub fn new() -> Result<Self, GameError> {
        Self::start(AppleSpawner::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible games.
    pub fn new_with_seed(seed: u64) -> Result<Self, GameError> {
        Self::start(AppleSpawner::seeded(seed))
    }
}

impl<R: Rng> GameState<R> {
    /// Starts a game with the standard snake and a freshly spawned apple.
    pub fn start(mut spawner: AppleSpawner<R>) -> Result<Self, GameError> {
        let snake = Snake::new(INITIAL_SNAKE, INITIAL_DIRECTION)?;
        let apple = spawner.respawn(&snake, GRID)?;
        info!(
            width = GRID.width,
            height = GRID.height,
            "new game started"
        );
        Ok(Self::from_parts(snake, apple, GRID, spawner))
    }

    /// Assembles a running state from explicit parts.
    #[must_use]
    pub fn from_parts(snake: Snake, apple: Apple, grid: Grid, spawner: AppleSpawner<R>) -> Self {
        Self {
            snake,
            apple,
            score: 0,
            status: GameStatus::Running,
            death_reason: None,
            tick_count: 0,
            grid,
            spawner,
        }
    }

    /// Advances simulation by one gameplay tick.
    pub fn tick(&mut self) -> Result<TickOutcome, GameError> {
        if self.status != GameStatus::Running {
            return Ok(TickOutcome::Idle);
        }

        self.tick_count += 1;
        let new_head = self.snake.next_head();

        if !self.grid.contains(new_head) {
            return Ok(self.end(DeathReason::WallCollision));
        }

        let growing = new_head == self.apple.cell;
        if self.snake.would_bite(new_head, growing) {
            return Ok(self.end(DeathReason::SelfCollision));
        }

        self.snake.advance();

        if !growing {
            self.snake.shrink();
            debug_assert!(!self.snake.head_overlaps_body());
            return Ok(TickOutcome::Moved);
        }

        let tier = self.apple.tier;
        self.score += tier.points();
        debug!(
            score = self.score,
            length = self.snake.len(),
            ?tier,
            "apple eaten"
        );
        self.apple = self.spawner.respawn(&self.snake, self.grid)?;

        Ok(TickOutcome::Ate(tier))
    }

    /// Applies one external input event. Quit is handled by the caller.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                if self.status == GameStatus::Running && !self.snake.set_direction(direction) {
                    debug!(?direction, "reversal ignored");
                }
            }
            GameInput::Pause => self.toggle_pause(),
            GameInput::Quit => {}
        }
    }

    /// Flips between running and paused. Has no effect once the game is over.
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            GameStatus::GameOver => GameStatus::GameOver,
        };
        debug!(status = ?self.status, "pause toggled");
    }

    /// Copies the drawable state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake_cells: self.snake.segments().copied().collect(),
            apple_cell: self.apple.cell,
            apple_tier: self.apple.tier,
            score: self.score,
            paused: self.status == GameStatus::Paused,
            game_over: self.status == GameStatus::GameOver,
            death_reason: self.death_reason,
            grid: self.grid,
        }
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn apple(&self) -> Apple {
        self.apple
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    fn end(&mut self, reason: DeathReason) -> TickOutcome {
        self.status = GameStatus::GameOver;
        self.death_reason = Some(reason);
        info!(
            score = self.score,
            length = self.snake.len(),
            ticks = self.tick_count,
            ?reason,
            "game over"
        );
        TickOutcome::Died(reason)
    }
}
