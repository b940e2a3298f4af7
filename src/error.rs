use thiserror::Error;

/// Rejections from the onboarding prompts.  These never escape the
/// validate-and-reprompt loop in `prompt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Nickname cannot be empty.")]
    EmptyNickname,
    #[error("Should be valid number")]
    InvalidNumber,
    #[error("You must be at least {min} years old.")]
    Underage { min: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MenuError {
    #[error("a selection menu needs at least one option")]
    NoOptions,
}

/// Everything that can end a session early.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("input stream closed")]
    EndOfInput,
    #[error("interrupted")]
    Interrupted,
    #[error(transparent)]
    Menu(#[from] MenuError),
}

pub type Result<T> = std::result::Result<T, GameError>;
