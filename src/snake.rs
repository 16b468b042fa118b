use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::Cell;
use Direction::*;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i16, i16) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn random<R: Rng>(rng: &mut R) -> Direction {
        *[Up, Down, Left, Right].choose(rng).unwrap()
    }
}

pub struct Snake {
    body: Vec<Cell>, // head first
    direction: Direction,
    pending: Option<Direction>,
    target_length: usize,
}

impl Snake {
    pub fn new() -> Self {
        Snake {
            body: vec![Cell::center()],
            direction: Right,
            pending: None,
            target_length: 1,
        }
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    /// Buffers a direction change for the next tick. Reversing the currently
    /// applied direction would drive the head straight into the neck, so such
    /// requests are dropped without touching an already buffered one.
    pub fn request_direction(&mut self, direction: Direction) {
        if direction != self.direction.opposite() {
            self.pending = Some(direction);
        }
    }

    /// Advances the snake one step: applies any buffered direction, pushes the
    /// new (wrapped) head and trims the tail once the body has reached its
    /// target length. Returns the vacated tail cell so the caller can erase it.
    pub fn tick(&mut self) -> Option<Cell> {
        if let Some(direction) = self.pending.take() {
            self.direction = direction;
        }

        let new_head = self.head().step(self.direction);
        self.body.insert(0, new_head);

        if self.body.len() > self.target_length {
            self.body.pop()
        } else {
            None
        }
    }

    pub fn head_hits(&self, cell: Cell) -> bool {
        self.head() == cell
    }

    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    pub fn self_collision(&self) -> bool {
        self.body[1..].contains(&self.head())
    }

    /// Puts the snake back to its starting state after a collision. The
    /// applied direction is left as-is and only the pending slot is
    /// randomized, so the snake coasts one tick the old way before the new
    /// direction lands.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.body = vec![Cell::center()];
        self.target_length = 1;
        self.pending = Some(Direction::random(rng));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spawns_with_length_one_at_center_heading_right() {
        let snake = Snake::new();
        assert_eq!(snake.body(), &[Cell::center()]);
        assert_eq!(snake.direction(), Right);
        assert_eq!(snake.target_length(), 1);
    }

    #[test]
    fn body_never_exceeds_target_length() {
        let mut snake = Snake::new();
        for _ in 0..10 {
            snake.tick();
            assert!(snake.body().len() <= snake.target_length());
        }
    }

    #[test]
    fn reversal_request_is_ignored() {
        let mut snake = Snake::new(); // heading Right
        let head = snake.head();
        snake.request_direction(Left);
        snake.tick();
        assert_eq!(snake.direction(), Right);
        assert_eq!(snake.head(), head.step(Right));
    }

    #[test]
    fn last_valid_request_before_the_tick_wins() {
        let mut snake = Snake::new();
        snake.request_direction(Up);
        snake.request_direction(Down);
        snake.tick();
        assert_eq!(snake.direction(), Down);
    }

    #[test]
    fn rejected_reversal_keeps_the_earlier_pending_request() {
        let mut snake = Snake::new(); // heading Right
        snake.request_direction(Up);
        snake.request_direction(Left); // reversal, dropped
        snake.tick();
        assert_eq!(snake.direction(), Up);
    }

    #[test]
    fn grows_one_tick_after_eating() {
        let mut snake = Snake::new();
        snake.grow();
        assert_eq!(snake.target_length(), 2);
        assert_eq!(snake.body().len(), 1);

        snake.tick();
        assert_eq!(snake.body().len(), 2);
        snake.tick();
        assert_eq!(snake.body().len(), 2);
    }

    #[test]
    fn tick_reports_the_vacated_tail_cell() {
        let mut snake = Snake::new();
        let tail = snake.head();
        assert_eq!(snake.tick(), Some(tail));

        // While still growing, nothing is vacated
        snake.grow();
        assert_eq!(snake.tick(), None);
    }

    #[test]
    fn looping_back_is_a_self_collision() {
        let mut snake = Snake::new(); // heading Right
        for _ in 0..4 {
            snake.grow();
        }
        for _ in 0..4 {
            snake.tick();
        }
        assert_eq!(snake.body().len(), 5);

        // Hook around: down, left, then up into the body
        snake.request_direction(Down);
        snake.tick();
        snake.request_direction(Left);
        snake.tick();
        assert!(!snake.self_collision());

        snake.request_direction(Up);
        snake.tick();
        assert!(snake.self_collision());
    }

    #[test]
    fn reset_returns_to_center_keeping_the_applied_direction() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut snake = Snake::new();
        for _ in 0..3 {
            snake.grow();
            snake.tick();
        }
        snake.request_direction(Down);
        snake.tick();

        snake.reset(&mut rng);
        assert_eq!(snake.body(), &[Cell::center()]);
        assert_eq!(snake.target_length(), 1);
        assert_eq!(snake.direction(), Down);
    }
}
