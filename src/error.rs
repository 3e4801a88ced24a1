use std::io;

use thiserror::Error;

/// Unrecoverable conditions raised by the game core or the terminal layer.
///
/// Collisions are not errors; they end the game through [`crate::game::GameStatus::GameOver`].
#[derive(Debug, Error)]
pub enum GameError {
    /// A snake was built without any body cells.
    #[error("snake body must contain at least one cell")]
    EmptySnake,

    /// Every grid cell is covered by the snake, so no apple can be placed.
    #[error("no free cell left for an apple on the {width}x{height} grid")]
    GridFull { width: u16, height: u16 },

    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),
}
