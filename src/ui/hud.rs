use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::COLOR_HUD;
use crate::game::Snapshot;

/// Rows reserved above the play field.
pub const HUD_HEIGHT: u16 = 1;

const CONTROLS_HINT: &str = "P pause  Q quit";

/// Draws the score on the left and the key hint on the right.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot) {
    let hint_width = u16::try_from(CONTROLS_HINT.chars().count()).unwrap_or(u16::MAX);
    let [score_area, hint_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(hint_width)]).areas(area);

    frame.render_widget(
        Paragraph::new(score_line(snapshot.score)).alignment(Alignment::Left),
        score_area,
    );
    frame.render_widget(
        Paragraph::new(CONTROLS_HINT)
            .alignment(Alignment::Right)
            .style(Style::default().fg(COLOR_HUD)),
        hint_area,
    );
}

fn score_line(score: u32) -> Line<'static> {
    Line::from(vec![
        Span::styled("Score: ", Style::default().fg(COLOR_HUD)),
        Span::styled(
            score.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::score_line;

    #[test]
    fn score_line_shows_value() {
        let line = score_line(42);
        let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();

        assert_eq!(text, "Score: 42");
    }
}
