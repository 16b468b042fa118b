use std::{io::{Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::event::{Event, KeyEvent, poll, read};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};

use crate::grid::{Cell, CELL_WIDTH};

const CELL_CHAR: char = '█';

/// Owns stdout and the terminal state. Draw calls are queued and only hit the
/// screen on `flush`, once per game loop iteration.
pub struct TermManager {
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout() }
    }

    pub fn setup(&mut self) {
        execute!(self.stdout, EnterAlternateScreen).expect("Error entering alt screen");
        self.set_raw_mode(true);
        self.set_cursor_visibility(false);
        self.clear();
    }

    pub fn restore(&mut self) {
        self.set_cursor_visibility(true);
        self.set_raw_mode(false);
        execute!(self.stdout, LeaveAlternateScreen).expect("Error leaving alt screen");
    }

    pub fn read_key_events_queue(&self) -> Vec<KeyEvent> {
        let mut events = vec![];

        while poll(Duration::from_millis(1)).unwrap() {
            if let Event::Key(ev) = read().unwrap() {
                events.push(ev);
            }
        }

        events
    }

    pub fn draw_cell(&mut self, cell: Cell, color: Color) {
        let (x, y) = cell.to_screen();
        queue!(self.stdout, cursor::MoveTo(x, y), style::SetForegroundColor(color)).unwrap();

        for _ in 0..CELL_WIDTH {
            queue!(self.stdout, style::Print(CELL_CHAR)).unwrap();
        }

        queue!(self.stdout, style::ResetColor).unwrap();
    }

    pub fn erase_cell(&mut self, cell: Cell) {
        let (x, y) = cell.to_screen();
        queue!(self.stdout, cursor::MoveTo(x, y)).unwrap();

        for _ in 0..CELL_WIDTH {
            queue!(self.stdout, style::Print(' ')).unwrap();
        }
    }

    pub fn clear(&mut self) {
        execute!(self.stdout, terminal::Clear(ClearType::All)).expect("Error clearing.");
    }

    pub fn flush(&mut self) {
        self.stdout.flush().expect("Error flushing.");
    }

    ///////////////////////////////////////////////////////////////////////////

    fn set_raw_mode(&self, option: bool) {
        let res = if option {
            terminal::enable_raw_mode()
        } else {
            terminal::disable_raw_mode()
        };

        res.expect("Error setting raw mode.");
    }

    fn set_cursor_visibility(&mut self, option: bool) {
        let res = if option {
            execute!(self.stdout, cursor::Show)
        } else {
            execute!(self.stdout, cursor::Hide)
        };

        res.expect("Error setting cursor visibility.");
    }
}
