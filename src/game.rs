use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{GameConfig, GridSize, SELF_COLLISION_EXEMPT_SEGMENTS};
use crate::error::ConfigError;
use crate::food::Food;
use crate::input::Direction;
use crate::snake::Snake;
use crate::snapshot::Snapshot;

/// Current high-level gameplay state.
///
/// `Over` and `Won` are terminal: a finished game is replaced, never resumed.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Over,
    /// The snake covers every cell, so no food can be placed.
    Won,
}

/// Why a game ended in `GameStatus::Over`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    OutOfBounds,
    SelfCollision,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Option<Food>,
    pub tick_count: u64,
    status: GameStatus,
    death_reason: Option<DeathReason>,
    config: GameConfig,
    rng: StdRng,
}

impl GameState {
    /// Creates a game, seeding food placement from `config.seed` or the OS.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let snake = Snake::with_capacity(
            config.initial_segments(),
            config.initial_heading,
            config.grid.total_cells(),
        );
        let food = Food::spawn(&mut rng, config.grid, &snake);
        let status = if food.is_some() {
            GameStatus::Running
        } else {
            GameStatus::Won
        };

        debug!(
            "new game on {}x{} grid, head at ({}, {})",
            config.grid.width, config.grid.height, config.initial_head.x, config.initial_head.y
        );

        Ok(Self {
            snake,
            food,
            tick_count: 0,
            status,
            death_reason: None,
            config,
            rng,
        })
    }

    /// Queues a turn for a later tick.
    ///
    /// Ignored once the game has ended, and when `direction` reverses the
    /// heading the snake is currently moving in. Returns whether it was queued.
    pub fn enqueue_direction(&mut self, direction: Direction) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }

        self.snake.buffer_direction(direction)
    }

    /// Advances simulation by one gameplay tick.
    pub fn advance_one_tick(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }

        self.snake.take_next_direction();
        let next_head = self.snake.next_head_position();

        if !next_head.is_within_bounds(self.config.grid) {
            self.end(DeathReason::OutOfBounds);
            return;
        }

        // Checked against the body before it shifts, so the cell the tail is
        // about to leave still counts.
        if self
            .snake
            .hits_body(next_head, SELF_COLLISION_EXEMPT_SEGMENTS)
        {
            self.end(DeathReason::SelfCollision);
            return;
        }

        self.tick_count += 1;

        let ate = self.food.is_some_and(|food| food.position == next_head);
        self.snake.advance_to(next_head, ate);

        if ate {
            debug!(
                "food eaten at ({}, {}), length {}",
                next_head.x,
                next_head.y,
                self.snake.len()
            );
            self.food = Food::spawn(&mut self.rng, self.config.grid, &self.snake);
            if self.food.is_none() {
                self.status = GameStatus::Won;
                info!("board filled after {} ticks, score {}", self.tick_count, self.score());
            }
        }
    }

    /// Returns an owned copy of everything a renderer needs.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.config.grid,
            segments: self.snake.segments().copied().collect(),
            food: self.food.map(|food| food.position),
            status: self.status,
            score: self.score(),
            heading: self.snake.direction(),
            tick_count: self.tick_count,
            death_reason: self.death_reason,
        }
    }

    /// Segments grown since the start of the game.
    #[must_use]
    pub fn score(&self) -> u32 {
        let grown = self.snake.len().saturating_sub(self.config.initial_length);
        u32::try_from(grown).unwrap_or(u32::MAX)
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
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.config.grid
    }

    fn end(&mut self, reason: DeathReason) {
        self.status = GameStatus::Over;
        self.death_reason = Some(reason);
        info!(
            "game over ({reason:?}) after {} ticks, score {}",
            self.tick_count,
            self.score()
        );
    }
}
