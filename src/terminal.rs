use std::io::{self, BufRead, Stdin, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use crate::error::{GameError, Result};
use crate::menu::MenuKey;

/// Blocking player input.  `Terminal` reads the real console; tests
/// substitute a scripted queue.
pub trait Input {
    /// One line of text, including the trailing newline if any.
    fn read_line(&mut self) -> Result<String>;
    /// The next key press, mapped to a menu action.
    fn read_key(&mut self) -> Result<MenuKey>;
    /// Block until any key is pressed.
    fn wait_key(&mut self) -> Result<()>;
    /// Start a stretch of key reads.  Keys pressed until `end_keys` are
    /// not echoed, so a menu can redraw itself undisturbed.
    fn begin_keys(&mut self) -> Result<()>;
    fn end_keys(&mut self);
}

/// Raw mode for as long as this value lives.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(RawMode)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

pub struct Terminal {
    stdin: Stdin,
    /// Held between `begin_keys` and `end_keys`.
    raw: Option<RawMode>,
}

impl Terminal {
    pub fn new() -> Self {
        Terminal {
            stdin: io::stdin(),
            raw: None,
        }
    }

    /// Wait for a key press in raw mode.  Releases and repeats reported by
    /// some platforms are skipped, as are non-key events.
    fn next_press(&self) -> io::Result<KeyEvent> {
        let _raw = match self.raw {
            Some(_) => None,
            None => Some(RawMode::enable()?),
        };
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(key);
                }
            }
        }
    }
}

impl Input for Terminal {
    fn read_line(&mut self) -> Result<String> {
        self.end_keys();
        io::stdout().flush()?;
        let mut line = String::new();
        if self.stdin.lock().read_line(&mut line)? == 0 {
            return Err(GameError::EndOfInput);
        }
        Ok(line)
    }

    fn read_key(&mut self) -> Result<MenuKey> {
        Ok(menu_key(self.next_press()?))
    }

    fn wait_key(&mut self) -> Result<()> {
        match menu_key(self.next_press()?) {
            MenuKey::Interrupt => Err(GameError::Interrupted),
            _ => Ok(()),
        }
    }

    fn begin_keys(&mut self) -> Result<()> {
        if self.raw.is_none() {
            self.raw = Some(RawMode::enable()?);
        }
        Ok(())
    }

    fn end_keys(&mut self) {
        self.raw = None;
    }
}

/// Arrow keys plus vi (`k`/`j`) and WASD (`w`/`s`) aliases navigate;
/// Enter or Space confirms.
pub fn menu_key(key: KeyEvent) -> MenuKey {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => MenuKey::Interrupt,
            _ => MenuKey::Other,
        };
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => MenuKey::Up,
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => MenuKey::Down,
        KeyCode::Enter | KeyCode::Char(' ') => MenuKey::Confirm,
        _ => MenuKey::Other,
    }
}
