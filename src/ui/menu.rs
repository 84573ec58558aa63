use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::game::DeathReason;

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    death_reason: Option<DeathReason>,
) {
    let lines = vec![
        Line::from("GAME OVER").style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(death_cause(death_reason)),
        Line::from(""),
        Line::from("[Enter]/[Space]/[R] Play Again"),
        Line::from("[Q]/[Esc] Quit"),
    ];

    render_popup(frame, area, " game over ", lines);
}

/// Draws the victory screen shown once the snake fills the board.
pub fn render_victory_menu(frame: &mut Frame<'_>, area: Rect, score: u32) {
    let lines = vec![
        Line::from("YOU WIN").style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from("The snake fills the board"),
        Line::from(""),
        Line::from("[Enter]/[Space]/[R] Play Again"),
        Line::from("[Q]/[Esc] Quit"),
    ];

    render_popup(frame, area, " victory ", lines);
}

fn death_cause(reason: Option<DeathReason>) -> &'static str {
    match reason {
        Some(DeathReason::OutOfBounds) => "Cause: hit wall",
        Some(DeathReason::SelfCollision) => "Cause: hit yourself",
        None => "",
    }
}

fn render_popup(frame: &mut Frame<'_>, area: Rect, title: &str, lines: Vec<Line<'_>>) {
    let popup = centered_popup(area, 70, 60);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(title)),
        popup,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::game::DeathReason;

    use super::{centered_popup, death_cause};

    #[test]
    fn popup_stays_inside_area() {
        let area = Rect::new(0, 0, 40, 20);

        let popup = centered_popup(area, 70, 60);

        assert!(popup.x >= area.x && popup.right() <= area.right());
        assert!(popup.y >= area.y && popup.bottom() <= area.bottom());
        assert!(popup.width > 0 && popup.height > 0);
    }

    #[test]
    fn death_cause_names_collision() {
        assert_eq!(death_cause(Some(DeathReason::OutOfBounds)), "Cause: hit wall");
        assert_eq!(
            death_cause(Some(DeathReason::SelfCollision)),
            "Cause: hit yourself"
        );
        assert_eq!(death_cause(None), "");
    }
}
