use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::apple::RewardTier;
use crate::config::{
    BORDER_DOUBLE_SIDES, COLOR_APPLE_BONUS, COLOR_APPLE_NORMAL, COLOR_BORDER, COLOR_SNAKE,
    GLYPH_APPLE_BONUS, GLYPH_APPLE_NORMAL, GLYPH_SNAKE,
};
use crate::game::Snapshot;
use crate::grid::{Cell, Grid};
use crate::ui::hud::{render_hud, HUD_HEIGHT};
use crate::ui::menu::{render_game_over_menu, render_pause_menu};

/// Renders the full game frame from a snapshot.
///
/// The play field is centered in the terminal with the HUD directly above it.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot) {
    let (hud_area, play_area) = board_layout(frame.area(), snapshot.grid);

    render_hud(frame, hud_area, snapshot);

    let block = Block::bordered()
        .border_set(BORDER_DOUBLE_SIDES)
        .border_style(Style::new().fg(COLOR_BORDER));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_apple(frame, inner, snapshot);
    render_snake(frame, inner, snapshot);

    if snapshot.game_over {
        render_game_over_menu(frame, play_area, snapshot.score, snapshot.death_reason);
    } else if snapshot.paused {
        render_pause_menu(frame, play_area);
    }
}

/// Splits `area` into the HUD row and the bordered play field, both centered.
#[must_use]
pub fn board_layout(area: Rect, grid: Grid) -> (Rect, Rect) {
    let board_width = grid.width.saturating_add(2).min(area.width);
    let board_height = grid.height.saturating_add(2);
    let total_height = board_height.saturating_add(HUD_HEIGHT).min(area.height);

    let x = area.x + (area.width - board_width) / 2;
    let y = area.y + (area.height - total_height) / 2;

    let hud = Rect {
        x,
        y,
        width: board_width,
        height: HUD_HEIGHT.min(total_height),
    };
    let play = Rect {
        x,
        y: y + hud.height,
        width: board_width,
        height: total_height - hud.height,
    };

    (hud, play)
}

fn render_apple(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot) {
    let Some((x, y)) = logical_to_terminal(inner, snapshot.grid, snapshot.apple_cell) else {
        return;
    };

    let (glyph, color) = match snapshot.apple_tier {
        RewardTier::Normal => (GLYPH_APPLE_NORMAL, COLOR_APPLE_NORMAL),
        RewardTier::Bonus => (GLYPH_APPLE_BONUS, COLOR_APPLE_BONUS),
    };
    frame
        .buffer_mut()
        .set_string(x, y, glyph, Style::new().fg(color).add_modifier(Modifier::BOLD));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot) {
    let buffer = frame.buffer_mut();
    for cell in &snapshot.snake_cells {
        let Some((x, y)) = logical_to_terminal(inner, snapshot.grid, *cell) else {
            continue;
        };
        buffer.set_string(x, y, GLYPH_SNAKE, Style::new().fg(COLOR_SNAKE));
    }
}

fn logical_to_terminal(inner: Rect, grid: Grid, cell: Cell) -> Option<(u16, u16)> {
    if !grid.contains(cell) {
        return None;
    }

    let x_offset = u16::try_from(cell.col).ok()?;
    let y_offset = u16::try_from(cell.row).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
