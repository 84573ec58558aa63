use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Food item currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates food at `position`.
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Spawns food in a random unoccupied cell.
    ///
    /// Returns `None` when the snake covers every cell.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Option<Self> {
        spawn_position(rng, bounds, snake).map(Self::new)
    }
}

/// Picks a uniformly random cell that is not occupied by the snake.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Position> {
    if snake.len() >= bounds.total_cells() {
        return None;
    }

    let mut candidates = Vec::with_capacity(bounds.total_cells() - snake.len());
    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{spawn_position, Food};
    use crate::snake::{Position, Snake};

    fn every_cell(bounds: GridSize) -> Vec<Position> {
        (0..i32::from(bounds.height))
            .flat_map(|y| (0..i32::from(bounds.width)).map(move |x| Position { x, y }))
            .collect()
    }

    #[test]
    fn nearly_full_board_yields_the_single_gap() {
        let bounds = GridSize {
            width: 4,
            height: 3,
        };
        let mut rng = StdRng::seed_from_u64(7);

        for gap in every_cell(bounds) {
            let body: Vec<Position> = every_cell(bounds)
                .into_iter()
                .filter(|cell| *cell != gap)
                .collect();
            let snake = Snake::from_segments(body, Direction::Up);

            assert_eq!(spawn_position(&mut rng, bounds, &snake), Some(gap));
        }
    }

    #[test]
    fn two_free_cells_are_both_reachable() {
        let bounds = GridSize {
            width: 3,
            height: 2,
        };
        let free = [Position { x: 0, y: 0 }, Position { x: 2, y: 1 }];
        let body: Vec<Position> = every_cell(bounds)
            .into_iter()
            .filter(|cell| !free.contains(cell))
            .collect();
        let snake = Snake::from_segments(body, Direction::Right);
        let mut rng = StdRng::seed_from_u64(21);

        let mut seen = [false; 2];
        for _ in 0..200 {
            let food = Food::spawn(&mut rng, bounds, &snake).expect("two cells are free");
            let index = free
                .iter()
                .position(|cell| *cell == food.position)
                .expect("food must land on a free cell");
            seen[index] = true;
        }

        assert_eq!(seen, [true, true]);
    }

    #[test]
    fn last_free_cell_is_always_chosen() {
        let mut rng = StdRng::seed_from_u64(11);
        let snake = Snake::from_segments(
            vec![
                Position { x: 0, y: 0 },
                Position { x: 1, y: 0 },
                Position { x: 1, y: 1 },
            ],
            Direction::Down,
        );
        let bounds = GridSize {
            width: 2,
            height: 2,
        };

        let food = Food::spawn(&mut rng, bounds, &snake).expect("one cell is free");
        assert_eq!(food.position, Position { x: 0, y: 1 });
    }

    #[test]
    fn full_board_has_no_food_cell() {
        let mut rng = StdRng::seed_from_u64(3);
        let snake = Snake::from_segments(
            vec![Position { x: 0, y: 0 }, Position { x: 1, y: 0 }],
            Direction::Left,
        );
        let bounds = GridSize {
            width: 2,
            height: 1,
        };

        assert_eq!(Food::spawn(&mut rng, bounds, &snake), None);
    }
}
