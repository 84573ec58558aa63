use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{
    GridSize, COLOR_BORDER, COLOR_FOOD, COLOR_SNAKE_BODY, COLOR_SNAKE_HEAD, COLOR_SNAKE_TAIL,
    GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN, GLYPH_SNAKE_HEAD_LEFT,
    GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GLYPH_SNAKE_TAIL,
};
use crate::game::GameStatus;
use crate::input::Direction;
use crate::snake::Position;
use crate::snapshot::Snapshot;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_victory_menu};

/// Renders the full game frame from a snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot) {
    let area = frame.area();
    let play_area = render_hud(frame, area, snapshot);
    let field = field_rect(play_area, snapshot.grid);

    let block = Block::bordered().border_style(Style::new().fg(COLOR_BORDER));
    let inner = block.inner(field);
    frame.render_widget(block, field);

    render_food(frame, inner, snapshot);
    render_snake(frame, inner, snapshot);

    match snapshot.status {
        GameStatus::Over => {
            render_game_over_menu(frame, field, snapshot.score, snapshot.death_reason);
        }
        GameStatus::Won => render_victory_menu(frame, field, snapshot.score),
        GameStatus::Running => {}
    }
}

/// Centers a bordered rectangle sized to the grid, shrunk to fit `area`.
fn field_rect(area: Rect, grid: GridSize) -> Rect {
    let width = grid.width.saturating_add(2).min(area.width);
    let height = grid.height.saturating_add(2).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot) {
    let Some(food) = snapshot.food else {
        return;
    };
    let Some((x, y)) = logical_to_terminal(inner, snapshot.grid, food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(COLOR_FOOD));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot) {
    let last = snapshot.segments.len().saturating_sub(1);
    let buffer = frame.buffer_mut();

    // Tail first so the head wins when segments overlap.
    for (index, segment) in snapshot.segments.iter().enumerate().rev() {
        let Some((x, y)) = logical_to_terminal(inner, snapshot.grid, *segment) else {
            continue;
        };

        let (glyph, style) = if index == 0 {
            (
                head_glyph(snapshot.heading),
                Style::new()
                    .fg(COLOR_SNAKE_HEAD)
                    .add_modifier(Modifier::BOLD),
            )
        } else if index == last {
            (GLYPH_SNAKE_TAIL, Style::new().fg(COLOR_SNAKE_TAIL))
        } else {
            (GLYPH_SNAKE_BODY, Style::new().fg(COLOR_SNAKE_BODY))
        };

        buffer.set_string(x, y, glyph, style);
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;
    use ratatui::Terminal;

    use crate::config::{GameConfig, GridSize, GLYPH_FOOD, GLYPH_SNAKE_HEAD_RIGHT};
    use crate::food::Food;
    use crate::game::GameState;
    use crate::snake::Position;

    use super::{field_rect, logical_to_terminal, render};

    #[test]
    fn field_is_centered_and_clamped() {
        let grid = GridSize {
            width: 30,
            height: 20,
        };

        assert_eq!(
            field_rect(Rect::new(0, 0, 40, 24), grid),
            Rect::new(4, 1, 32, 22)
        );
        assert_eq!(
            field_rect(Rect::new(0, 0, 10, 5), grid),
            Rect::new(0, 0, 10, 5)
        );
    }

    #[test]
    fn positions_outside_drawable_area_are_clipped() {
        let inner = Rect::new(1, 1, 5, 5);
        let grid = GridSize {
            width: 30,
            height: 20,
        };

        assert_eq!(
            logical_to_terminal(inner, grid, Position { x: 2, y: 3 }),
            Some((3, 4))
        );
        assert_eq!(
            logical_to_terminal(inner, grid, Position { x: 10, y: 0 }),
            None
        );
        assert_eq!(
            logical_to_terminal(inner, grid, Position { x: -1, y: 0 }),
            None
        );
    }

    #[test]
    fn frame_shows_head_and_food() {
        let mut state =
            GameState::new_with_seed(GameConfig::default(), 1).expect("default config is valid");
        state.food = Some(Food::new(Position { x: 0, y: 0 }));
        let snapshot = state.snapshot();

        let mut terminal = Terminal::new(TestBackend::new(40, 25)).expect("test terminal");
        terminal
            .draw(|frame| render(frame, &snapshot))
            .expect("draw should succeed");

        // Field is at (4, 1) with a one-cell border.
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(11, 5)].symbol(), GLYPH_SNAKE_HEAD_RIGHT);
        assert_eq!(buffer[(5, 2)].symbol(), GLYPH_FOOD);
    }
}
