use crate::config::GridSize;
use crate::game::{DeathReason, GameStatus};
use crate::input::Direction;
use crate::snake::Position;

/// Owned, read-only copy of the simulation state for one rendered frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub grid: GridSize,
    /// Body cells, head first.
    pub segments: Vec<Position>,
    pub food: Option<Position>,
    pub status: GameStatus,
    pub score: u32,
    pub heading: Direction,
    pub tick_count: u64,
    pub death_reason: Option<DeathReason>,
}

impl Snapshot {
    #[must_use]
    pub fn head(&self) -> Option<Position> {
        self.segments.first().copied()
    }

    #[must_use]
    pub fn tail(&self) -> Option<Position> {
        self.segments.last().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// True once the game reached a terminal status.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status != GameStatus::Running
    }
}
