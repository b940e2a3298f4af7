use crate::error::{InputError, Result};
use crate::renderer::Renderer;
use crate::terminal::Input;

/// Youngest accepted player.
pub const MIN_AGE: u8 = 12;

/// A nickname is any input with at least one non-blank character.
pub fn parse_nickname(raw: &str) -> std::result::Result<String, InputError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(InputError::EmptyNickname);
    }
    Ok(name.to_string())
}

/// An age is a whole number in `MIN_AGE..=255`.
pub fn parse_age(raw: &str) -> std::result::Result<u8, InputError> {
    let age: u8 = raw.trim().parse().map_err(|_| InputError::InvalidNumber)?;
    if age < MIN_AGE {
        return Err(InputError::Underage { min: MIN_AGE });
    }
    Ok(age)
}

pub fn ask_nickname<R: Renderer, I: Input>(renderer: &mut R, input: &mut I) -> Result<String> {
    ask(renderer, input, "Nickname Required", "Enter your nickname: ", parse_nickname)
}

pub fn ask_age<R: Renderer, I: Input>(renderer: &mut R, input: &mut I) -> Result<u8> {
    ask(renderer, input, "Age Verification Required", "Enter your age: ", parse_age)
}

/// Clear, prompt, validate; on rejection show the reason, wait for a key
/// and start over.
fn ask<R, I, T>(
    renderer: &mut R,
    input: &mut I,
    title: &str,
    label: &str,
    parse: impl Fn(&str) -> std::result::Result<T, InputError>,
) -> Result<T>
where
    R: Renderer,
    I: Input,
{
    loop {
        renderer.clear()?;
        renderer.heading(title)?;
        renderer.prompt(label)?;

        let line = input.read_line()?;
        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(e) => {
                tracing::debug!(field = title, error = %e, "input rejected");
                renderer.error(&e.to_string())?;
                renderer.info("Press any key to try again...")?;
                input.wait_key()?;
            }
        }
    }
}
