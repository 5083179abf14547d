// Character-by-character "typewriter" printing

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::error::{ConsoleError, Result};

const DEFAULT_SPEED: Duration = Duration::from_millis(50);
const DEFAULT_PAUSE: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollOptions {
    /// Delay after each ordinary character
    pub speed: Duration,
    /// Characters followed by `pause_duration` instead of `speed`
    pub pause_chars: Vec<char>,
    pub pause_duration: Duration,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            pause_chars: Vec::new(),
            pause_duration: DEFAULT_PAUSE,
        }
    }
}

impl ScrollOptions {
    /// Delay to apply after printing `c`
    pub fn delay_after(&self, c: char) -> Duration {
        if self.pause_chars.contains(&c) {
            self.pause_duration
        } else {
            self.speed
        }
    }
}

/// Turn user-supplied pause characters into `char`s; each must be exactly
/// one character long
pub fn parse_pause_chars<S: AsRef<str>>(values: &[S]) -> Result<Vec<char>> {
    values
        .iter()
        .map(|value| {
            let value = value.as_ref();
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(c),
                _ => Err(ConsoleError::invalid_argument(format!(
                    "pause_chars must all have length 1, got {:?}",
                    value
                ))),
            }
        })
        .collect()
}

/// Print `msg` to stdout one character at a time
pub fn scroll_text(msg: &str, options: &ScrollOptions) -> Result<()> {
    scroll_text_to(&mut io::stdout(), msg, options, thread::sleep)
}

/// Print `msg` to `writer` one character at a time, calling `sleep` with the
/// delay after each character
pub fn scroll_text_to<W, F>(writer: &mut W, msg: &str, options: &ScrollOptions, mut sleep: F) -> Result<()>
where
    W: Write,
    F: FnMut(Duration),
{
    let mut buf = [0u8; 4];
    for c in msg.chars() {
        writer.write_all(c.encode_utf8(&mut buf).as_bytes())?;
        writer.flush()?;
        sleep(options.delay_after(c));
    }
    Ok(())
}
