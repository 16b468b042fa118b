use std::{thread::sleep, time::Duration};

use crate::food::Food;
use crate::snake::{Snake, Direction::*};
use crate::term::TermManager;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::Color;
use rand::rngs::ThreadRng;

const SPEED: u64 = 20; // ticks per second
const TICK_INTERVAL_MS: u64 = 1000 / SPEED;

const SNAKE_COLOR: Color = Color::Green;
const FOOD_COLOR: Color = Color::Red;

#[derive(PartialEq)]
enum Flow {
    Continue,
    Quit,
}

pub struct SnakeGame {
    term: TermManager,
    snake: Snake,
    food: Food,
    rng: ThreadRng,
}

impl SnakeGame {
    pub fn new() -> Self {
        let mut rng = rand::thread_rng();
        let snake = Snake::new();
        let food = Food::spawn(&mut rng, snake.body());

        SnakeGame { term: TermManager::new(), snake, food, rng }
    }

    pub fn initialize(&mut self) {
        self.term.setup();
    }

    /// The fixed-rate game loop. Returns when the player asks to quit; the
    /// caller is responsible for restoring the terminal afterwards.
    pub fn run(&mut self) {
        loop {
            sleep(Duration::from_millis(TICK_INTERVAL_MS));

            if self.handle_input() == Flow::Quit {
                break;
            }

            let vacated = self.snake.tick();

            if self.snake.head_hits(self.food.position()) {
                self.food.relocate(&mut self.rng, self.snake.body());
                self.snake.grow();
            }

            // Normal flow never leaves food under the body, but re-place it
            // if it somehow ended up there
            while self.snake.body().contains(&self.food.position()) {
                self.food.relocate(&mut self.rng, self.snake.body());
            }

            let collided = self.snake.self_collision();
            if collided {
                self.snake.reset(&mut self.rng);
                self.term.clear();
            }

            if let Some(cell) = vacated {
                if !collided {
                    self.term.erase_cell(cell);
                }
            }

            self.term.draw_cell(self.food.position(), FOOD_COLOR);
            for &cell in self.snake.body() {
                self.term.draw_cell(cell, SNAKE_COLOR);
            }
            self.term.flush();
        }
    }

    pub fn shutdown(&mut self) {
        self.term.restore();
    }

    ///////////////////////////////////////////////////////////////////////////

    fn handle_input(&mut self) -> Flow {
        for key_ev in self.term.read_key_events_queue() {
            match &key_ev {
                ev if is_ctrl_c(ev) => return Flow::Quit,
                KeyEvent { code, modifiers: _ } => match code {
                    KeyCode::Esc => return Flow::Quit,
                    KeyCode::Char('w') | KeyCode::Up => self.snake.request_direction(Up),
                    KeyCode::Char('a') | KeyCode::Left => self.snake.request_direction(Left),
                    KeyCode::Char('s') | KeyCode::Down => self.snake.request_direction(Down),
                    KeyCode::Char('d') | KeyCode::Right => self.snake.request_direction(Right),
                    _ => {}
                }
            }
        }

        Flow::Continue
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
