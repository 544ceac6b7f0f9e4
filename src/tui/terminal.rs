//! Terminal setup and restoration

use crossterm::{
    cursor,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::{self, stdout, Stdout};
use std::panic;

/// Terminal wrapper: raw mode and the alternate screen while alive
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

impl Tui {
    pub fn new() -> io::Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        Ok(Self {
            terminal,
            active: false,
        })
    }

    /// Enter raw mode and the alternate screen.
    ///
    /// Also chains a panic hook that restores the terminal first, so a panic
    /// message is readable instead of lost in raw mode.
    pub fn enter(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;
        stdout().execute(cursor::Hide)?;
        self.terminal.clear()?;
        self.active = true;

        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = restore();
            previous(info);
        }));
        Ok(())
    }

    /// Leave the alternate screen and raw mode
    pub fn exit(&mut self) -> io::Result<()> {
        if self.active {
            restore()?;
            self.active = false;
        }
        Ok(())
    }

    /// Draw one frame
    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

fn restore() -> io::Result<()> {
    stdout().execute(cursor::Show)?;
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}
