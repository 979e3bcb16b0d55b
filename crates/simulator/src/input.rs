//! Keyboard input over a line-oriented reader.
//!
//! One key per line: `u`/`d`/`l`/`r` (or `up`, `down`, ...) and an empty
//! line, `c` or `ok` for Confirm. A line may hold several keys, e.g. `ddc`.

use std::collections::VecDeque;
use std::io::BufRead;

use platform::{InputError, InputSource, Key};

/// Parse one token into a key.
pub fn parse_key(token: &str) -> Option<Key> {
    match token.trim().to_ascii_lowercase().as_str() {
        "u" | "up" => Some(Key::Up),
        "d" | "down" => Some(Key::Down),
        "l" | "left" => Some(Key::Left),
        "r" | "right" => Some(Key::Right),
        "" | "c" | "ok" | "enter" | "confirm" => Some(Key::Confirm),
        _ => None,
    }
}

/// Parse a line into keys. Whole-word names win; otherwise every character
/// is one key.
pub fn parse_line(line: &str) -> Result<Vec<Key>, String> {
    if let Some(key) = parse_key(line) {
        return Ok(vec![key]);
    }
    line.trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| parse_key(c.encode_utf8(&mut [0; 4])).ok_or_else(|| format!("unknown key `{c}`")))
        .collect()
}

/// [`InputSource`] reading keys from `R`, one line at a time.
#[derive(Debug)]
pub struct LineInput<R> {
    reader: R,
    pending: VecDeque<Key>,
}

impl<R: BufRead> LineInput<R> {
    /// Read keys from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_key(&mut self) -> Result<Key, InputError> {
        loop {
            if let Some(key) = self.pending.pop_front() {
                return Ok(key);
            }
            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) | Err(_) => return Err(InputError::Closed),
                Ok(_) => match parse_line(&line) {
                    Ok(keys) => self.pending.extend(keys),
                    Err(e) => tracing::warn!("{e}; use u/d/l/r or enter"),
                },
            }
        }
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn wait_for(
        &mut self,
        keys: &[Key],
        _check_release: bool,
        _release_keys: &[Key],
    ) -> Result<Key, InputError> {
        loop {
            let key = self.next_key()?;
            if keys.contains(&key) {
                return Ok(key);
            }
            tracing::debug!(key = key.name(), "key not used on this screen");
        }
    }
}
