use crate::error::{GameError, MenuError, Result};
use crate::renderer::Renderer;
use crate::terminal::Input;

/// The only actions a selection menu understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Up,
    Down,
    Confirm,
    /// Ctrl-C while the terminal is in raw mode.
    Interrupt,
    /// Any other key; ignored.
    Other,
}

/// A highlighted choice over a non-empty list of labels.
#[derive(Debug, Clone)]
pub struct Menu {
    prompt: String,
    options: Vec<String>,
    selected: usize,
}

impl Menu {
    pub fn new<S: Into<String>>(
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = S>,
    ) -> std::result::Result<Self, MenuError> {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.is_empty() {
            return Err(MenuError::NoOptions);
        }
        Ok(Menu {
            prompt: prompt.into(),
            options,
            selected: 0,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Move the highlight up, wrapping from the first option to the last.
    pub fn up(&mut self) {
        self.selected = match self.selected {
            0 => self.options.len() - 1,
            i => i - 1,
        };
    }

    /// Move the highlight down, wrapping from the last option to the first.
    pub fn down(&mut self) {
        self.selected = (self.selected + 1) % self.options.len();
    }

    /// Apply a key.  Returns the confirmed index on `Confirm`.
    pub fn press(&mut self, key: MenuKey) -> Option<usize> {
        match key {
            MenuKey::Up => self.up(),
            MenuKey::Down => self.down(),
            MenuKey::Confirm => return Some(self.selected),
            MenuKey::Interrupt | MenuKey::Other => {}
        }
        None
    }
}

/// Show `options` under `prompt` and block until one is confirmed.
/// The list is redrawn in place after every navigation step.
pub fn select<R: Renderer, I: Input>(
    renderer: &mut R,
    input: &mut I,
    prompt: &str,
    options: &[&str],
) -> Result<usize> {
    let mut menu = Menu::new(prompt, options.iter().copied())?;

    // One raw-mode stretch for the whole menu; keys arriving mid-redraw
    // must not be echoed into the list.
    input.begin_keys()?;
    let chosen = navigate(renderer, input, &mut menu);
    input.end_keys();
    chosen
}

fn navigate<R: Renderer, I: Input>(renderer: &mut R, input: &mut I, menu: &mut Menu) -> Result<usize> {
    renderer.menu(menu, false)?;

    loop {
        match input.read_key()? {
            MenuKey::Interrupt => return Err(GameError::Interrupted),
            MenuKey::Other => continue,
            key => {
                if let Some(idx) = menu.press(key) {
                    tracing::debug!(prompt = menu.prompt(), choice = %menu.options()[idx], "menu confirmed");
                    return Ok(idx);
                }
                renderer.menu(menu, true)?;
            }
        }
    }
}
