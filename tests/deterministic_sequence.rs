use std::collections::VecDeque;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::mock::StepRng;
use grid_snake::apple::{Apple, AppleSpawner, RewardTier};
use grid_snake::config::GRID;
use grid_snake::game::{DeathReason, GameState, GameStatus, TickOutcome};
use grid_snake::grid::Cell;
use grid_snake::input::{Direction, GameInput, InputSource};
use grid_snake::snake::Snake;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn starting_snake() -> Snake {
    Snake::new(
        [
            Cell::new(9, 3),
            Cell::new(8, 3),
            Cell::new(7, 3),
            Cell::new(6, 3),
            Cell::new(5, 3),
        ],
        Direction::Up,
    )
    .expect("non-empty body")
}

#[test]
fn eating_the_apple_ahead_grows_to_six() {
    let mut state = GameState::from_parts(
        starting_snake(),
        Apple::normal(Cell::new(4, 3)),
        GRID,
        AppleSpawner::seeded(42),
    );

    let outcome = state.tick().expect("tick succeeds");

    assert_eq!(outcome, TickOutcome::Ate(RewardTier::Normal));
    let snapshot = state.snapshot();
    assert_eq!(snapshot.snake_cells.len(), 6);
    assert_eq!(snapshot.snake_cells.first(), Some(&Cell::new(9, 3)));
    assert_eq!(snapshot.snake_cells.last(), Some(&Cell::new(4, 3)));
    assert_eq!(snapshot.score, 1);
    assert!(!snapshot.snake_cells.contains(&snapshot.apple_cell));
}

#[test]
fn running_up_into_the_top_wall_ends_the_game() {
    let mut state = GameState::from_parts(
        starting_snake(),
        Apple::normal(Cell::new(14, 29)),
        GRID,
        AppleSpawner::seeded(42),
    );

    // Head starts at row 5: five moves reach row 0, the sixth leaves the grid.
    for _ in 0..5 {
        assert_eq!(state.tick().expect("tick succeeds"), TickOutcome::Moved);
    }
    assert_eq!(state.snake().head(), Cell::new(0, 3));

    let before = state.snapshot();
    let outcome = state.tick().expect("tick succeeds");

    assert_eq!(outcome, TickOutcome::Died(DeathReason::WallCollision));
    assert_eq!(state.status(), GameStatus::GameOver);
    let after = state.snapshot();
    assert_eq!(after.snake_cells, before.snake_cells);
    assert_eq!(after.score, before.score);
}

#[test]
fn scripted_keys_drive_one_input_per_tick() {
    let mut state = GameState::from_parts(
        starting_snake(),
        Apple::bonus(Cell::new(4, 4)),
        GRID,
        // Constant generator: every respawn lands in the (0,0) corner, off the route.
        AppleSpawner::new(StepRng::new(0, 0)),
    );
    let mut keys: VecDeque<KeyEvent> = VecDeque::from(vec![
        key(KeyCode::Char('s')),
        key(KeyCode::Char('d')),
        key(KeyCode::F(5)),
        key(KeyCode::Char('p')),
        key(KeyCode::Up),
        key(KeyCode::Char('p')),
    ]);
    let mut step = || {
        if let Some(input) = keys.poll_input() {
            assert_ne!(input, GameInput::Quit);
            state.apply_input(input);
        }
        state.tick().expect("tick succeeds")
    };

    // 's' reverses an upward snake and is ignored.
    assert_eq!(step(), TickOutcome::Moved);
    // 'd' turns right from (4,3) into the bonus apple at (4,4).
    assert_eq!(step(), TickOutcome::Ate(RewardTier::Bonus));
    // Unknown key: keep going right.
    assert_eq!(step(), TickOutcome::Moved);
    // Pause, then a direction while paused: both frozen ticks.
    assert_eq!(step(), TickOutcome::Idle);
    assert_eq!(step(), TickOutcome::Idle);
    // Resume.
    assert_eq!(step(), TickOutcome::Moved);

    assert_eq!(state.score(), 5);
    assert_eq!(state.snake().len(), 6);
    assert_eq!(state.snake().head(), Cell::new(4, 6));
    assert_eq!(state.snake().direction(), Direction::Right);
}
