use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType, SetTitle};
use crossterm::{execute, queue};
use std::io::{self, IsTerminal, Write, stdout};

/// Console escapes are only emitted when stdout is a real terminal.
pub fn is_terminal() -> bool {
    stdout().is_terminal()
}

pub fn set_title(title: &str) -> io::Result<()> {
    if !is_terminal() {
        return Ok(());
    }
    execute!(stdout(), SetTitle(title))
}

pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    out.flush()
}
