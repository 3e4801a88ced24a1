use ratatui::style::Color;
use ratatui::symbols::border;

use crate::grid::{Cell, Grid};
use crate::input::Direction;

/// Fixed play-field size: 30 columns by 15 rows.
pub const GRID: Grid = Grid {
    width: 30,
    height: 15,
};

/// Tick period in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 75;

/// How long the final score stays on screen after a game over.
pub const GAME_OVER_DISPLAY_SECS: u64 = 3;

/// One apple in this many is a bonus apple.
pub const BONUS_APPLE_ODDS: u32 = 5;

/// Random placement attempts before falling back to scanning free cells.
pub const MAX_SPAWN_ATTEMPTS: usize = 4096;

/// Starting body, tail first.
pub const INITIAL_SNAKE: [Cell; 5] = [
    Cell::new(9, 3),
    Cell::new(8, 3),
    Cell::new(7, 3),
    Cell::new(6, 3),
    Cell::new(5, 3),
];

pub const INITIAL_DIRECTION: Direction = Direction::Up;

/// Default tracing filter when `SNAKE_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "grid_snake=info";

/// Double-line frame drawn around the play field.
pub const BORDER_DOUBLE_SIDES: border::Set = border::Set {
    top_left: "╔",
    top_right: "╗",
    bottom_left: "╚",
    bottom_right: "╝",
    vertical_left: "║",
    vertical_right: "║",
    horizontal_top: "═",
    horizontal_bottom: "═",
};

pub const GLYPH_SNAKE: &str = "█";
pub const GLYPH_APPLE_NORMAL: &str = "●";
pub const GLYPH_APPLE_BONUS: &str = "■";

pub const COLOR_SNAKE: Color = Color::Green;
pub const COLOR_APPLE_NORMAL: Color = Color::Red;
pub const COLOR_APPLE_BONUS: Color = Color::Yellow;
pub const COLOR_BORDER: Color = Color::White;
pub const COLOR_HUD: Color = Color::Gray;
