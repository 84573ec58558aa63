use std::fs;
use std::iter;
use std::path::Path;
use std::time::Duration;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::input::Direction;
use crate::snake::Position;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 30;

/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Segments the snake starts with; also the baseline for the score.
pub const DEFAULT_INITIAL_LENGTH: usize = 3;

/// Head cell of a fresh snake.
pub const DEFAULT_INITIAL_HEAD: Position = Position { x: 6, y: 3 };

/// Heading of a fresh snake.
pub const DEFAULT_INITIAL_HEADING: Direction = Direction::Right;

/// Fixed tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 140;

/// Number of segments right behind the head that can never be hit.
pub const SELF_COLLISION_EXEMPT_SEGMENTS: usize = 3;

/// Render cadence of the terminal front end.
pub const FRAME_INTERVAL_MS: u64 = 16;

pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";
pub const GLYPH_SNAKE_BODY: &str = "█";
pub const GLYPH_SNAKE_TAIL: &str = "▓";
pub const GLYPH_FOOD: &str = "●";

pub const COLOR_SNAKE_HEAD: Color = Color::White;
pub const COLOR_SNAKE_BODY: Color = Color::Green;
pub const COLOR_SNAKE_TAIL: Color = Color::DarkGray;
pub const COLOR_FOOD: Color = Color::Red;
pub const COLOR_BORDER: Color = Color::Gray;
pub const COLOR_HUD: Color = Color::White;

/// Construction parameters for one game.
///
/// Every field has a default, so a JSON config file only needs to name the
/// values it changes.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid: GridSize,
    pub initial_length: usize,
    pub initial_head: Position,
    pub initial_heading: Direction,
    pub tick_interval_ms: u64,
    /// Seed for food placement; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridSize {
                width: DEFAULT_GRID_WIDTH,
                height: DEFAULT_GRID_HEIGHT,
            },
            initial_length: DEFAULT_INITIAL_LENGTH,
            initial_head: DEFAULT_INITIAL_HEAD,
            initial_heading: DEFAULT_INITIAL_HEADING,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Returns the default configuration on a custom grid.
    #[must_use]
    pub fn with_grid(width: u16, height: u16) -> Self {
        Self {
            grid: GridSize { width, height },
            ..Self::default()
        }
    }

    /// Loads and validates a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks that a game can be built from this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.width == 0 || self.grid.height == 0 {
            return Err(ConfigError::InvalidGrid {
                width: self.grid.width,
                height: self.grid.height,
            });
        }

        let max = self.grid.total_cells();
        if self.initial_length == 0 || self.initial_length > max {
            return Err(ConfigError::InvalidInitialLength {
                length: self.initial_length,
                max,
            });
        }

        let outside = if self.initial_head.is_within_bounds(self.grid) {
            self.segment_trail()
                .find(|segment| !segment.is_within_bounds(self.grid))
        } else {
            Some(self.initial_head)
        };

        if let Some(outside) = outside {
            return Err(ConfigError::SnakeOutOfBounds {
                x: outside.x,
                y: outside.y,
                width: self.grid.width,
                height: self.grid.height,
            });
        }

        if self.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidTickInterval);
        }

        Ok(())
    }

    /// Starting body, head first, trailing away from the initial heading.
    ///
    /// Stops early if a coordinate would overflow, which only happens for
    /// configurations `validate` rejects.
    #[must_use]
    pub fn initial_segments(&self) -> Vec<Position> {
        self.segment_trail().collect()
    }

    fn segment_trail(&self) -> impl Iterator<Item = Position> {
        let back = self.initial_heading.opposite();
        iter::successors(Some(self.initial_head), move |cursor| {
            cursor.checked_step(back)
        })
        .take(self.initial_length)
    }

    /// Returns the tick period as a `Duration`.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
