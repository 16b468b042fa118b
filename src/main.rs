mod food;
mod game;
mod grid;
mod snake;
mod term;

pub type Coords = (u16, u16);

fn main() {
    let mut game = game::SnakeGame::new();
    game.initialize();

    // Runs until the player quits (Esc or CTRL+C)
    game.run();
    game.shutdown();
}
