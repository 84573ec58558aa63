use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::COLOR_HUD;
use crate::snapshot::Snapshot;

/// Renders the one-line HUD below the play field and returns the area
/// left for the field itself.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot) -> Rect {
    let [play_area, info_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(info_line(snapshot))
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::DarkGray)),
        info_area,
    );

    play_area
}

fn info_line(snapshot: &Snapshot) -> Line<'static> {
    let value = Style::default().fg(COLOR_HUD).add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::raw("Score "),
        Span::styled(snapshot.score.to_string(), value),
        Span::raw("  Length "),
        Span::styled(snapshot.len().to_string(), value),
        Span::raw("  Grid "),
        Span::styled(
            format!("{}x{}", snapshot.grid.width, snapshot.grid.height),
            value,
        ),
        Span::raw(" "),
    ])
}
