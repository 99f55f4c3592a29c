use crate::constants::BANNER;
use crate::settings::{Radix, Settings, SettingsStore};
use crate::ui::terminal;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::warn;

/// One line typed at the settings prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SetRadix(Radix),
    SetLineBreaks(bool),
    Exit,
    Invalid,
}

impl Command {
    /// Matching is exact; only the line terminator is stripped.
    pub fn parse(line: &str) -> Self {
        match line.trim_end_matches(['\r', '\n']) {
            "hex" => Command::SetRadix(Radix::Hex),
            "dec" => Command::SetRadix(Radix::Decimal),
            "line" => Command::SetLineBreaks(true),
            "noline" => Command::SetLineBreaks(false),
            "" => Command::Exit,
            _ => Command::Invalid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Prompting,
    Applying(Command),
    Exiting,
}

/// Settings prompt shown when no files were given.
pub struct Session<'a> {
    store: &'a SettingsStore,
    settings: Settings,
    program: String,
    clear_screen: bool,
}

impl<'a> Session<'a> {
    pub fn new(
        store: &'a SettingsStore,
        settings: Settings,
        program: impl Into<String>,
    ) -> Self {
        Self {
            store,
            settings,
            program: program.into(),
            clear_screen: false,
        }
    }

    /// Clear the console after each applied change.
    pub fn with_clear_screen(
        mut self,
        clear: bool,
    ) -> Self {
        self.clear_screen = clear;
        self
    }

    /// Runs until an empty line (or end of input); returns the final settings.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> Result<Settings> {
        let mut state = SessionState::Prompting;
        loop {
            state = match state {
                SessionState::Prompting => {
                    self.prompt(out)?;
                    let mut line = String::new();
                    let cmd = if input.read_line(&mut line)? == 0 {
                        Command::Exit
                    } else {
                        Command::parse(&line)
                    };
                    if cmd == Command::Invalid {
                        writeln!(out, "Invalid input. Try again.")?;
                        SessionState::Prompting
                    } else {
                        SessionState::Applying(cmd)
                    }
                }
                SessionState::Applying(cmd) => self.apply(cmd, out)?,
                SessionState::Exiting => {
                    writeln!(out, "Exiting...")?;
                    out.flush()?;
                    return Ok(self.settings);
                }
            };
        }
    }

    fn apply<W: Write>(
        &mut self,
        cmd: Command,
        out: &mut W,
    ) -> Result<SessionState> {
        match cmd {
            Command::SetRadix(radix) => self.settings.radix = radix,
            Command::SetLineBreaks(on) => self.settings.line_breaks = on,
            Command::Exit => return Ok(SessionState::Exiting),
            Command::Invalid => return Ok(SessionState::Prompting),
        }
        if let Err(e) = self.store.save(self.settings) {
            warn!("Could not save {}: {e}", self.store.path().display());
        }
        if self.clear_screen {
            terminal::clear_screen(out)?;
        }
        Ok(SessionState::Prompting)
    }

    fn prompt<W: Write>(
        &self,
        out: &mut W,
    ) -> Result<()> {
        write!(
            out,
            "{BANNER}\n\n\
             Current mode: {}\n\
             Line breaks: {}\n\
             Usage:\n\
             1. Drag and drop a file onto the executable\n\
             2. Or run from command line: {} <filename>\n\
             3. To change mode, enter 'hex' or 'dec'\n\
             4. To toggle line breaks, enter 'line' or 'noline': ",
            self.settings.radix,
            if self.settings.line_breaks {
                "Enabled"
            } else {
                "Disabled"
            },
            self.program
        )?;
        out.flush()?;
        Ok(())
    }
}
