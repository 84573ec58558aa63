use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::config::GridSize;
use crate::input::{direction_change_is_valid, Direction};

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring cell one step in `direction`.
    ///
    /// The result may lie outside the grid; callers check bounds.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Like [`Position::step`], but `None` when a coordinate would overflow.
    #[must_use]
    pub fn checked_step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

/// Snake body, current heading and the queue of pending turns.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending: VecDeque<Direction>,
}

impl Snake {
    /// Creates a snake from explicit body segments (front is head).
    ///
    /// Storage for `capacity` segments is reserved up front so growth during
    /// play does not reallocate.
    ///
    /// # Panics
    ///
    /// Panics if `segments` is empty.
    #[must_use]
    pub(crate) fn with_capacity(
        segments: Vec<Position>,
        direction: Direction,
        capacity: usize,
    ) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");

        let mut body = VecDeque::with_capacity(capacity.max(segments.len()));
        body.extend(segments);

        Self {
            body,
            direction,
            pending: VecDeque::new(),
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics if `segments` is empty.
    #[must_use]
    pub(crate) fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        let capacity = segments.len();
        Self::with_capacity(segments, direction, capacity)
    }

    /// Queues a turn for a later tick.
    ///
    /// A turn that reverses the heading the snake is moving in *right now*
    /// is dropped. Already queued turns are not consulted. Returns whether
    /// the turn was queued.
    pub fn buffer_direction(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.direction, direction) {
            return false;
        }

        self.pending.push_back(direction);
        true
    }

    /// Consumes the next queued turn, or keeps the current heading when the
    /// queue is empty, and makes it the active heading.
    pub fn take_next_direction(&mut self) -> Direction {
        if let Some(next) = self.pending.pop_front() {
            self.direction = next;
        }
        self.direction
    }

    /// Returns the head position one step ahead in the active heading.
    #[must_use]
    pub fn next_head_position(&self) -> Position {
        self.head().step(self.direction)
    }

    /// Returns true if `position` matches any segment after the first
    /// `exempt` ones.
    #[must_use]
    pub fn hits_body(&self, position: Position, exempt: usize) -> bool {
        self.body
            .iter()
            .skip(exempt)
            .any(|segment| *segment == position)
    }

    /// Moves the head to `new_head`; the old tail is kept when `grow` is set.
    pub fn advance_to(&mut self, new_head: Position, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over queued turns, oldest first.
    pub fn pending_directions(&self) -> impl Iterator<Item = &Direction> {
        self.pending.iter()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
