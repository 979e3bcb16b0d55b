//! Mock implementations for testing
//!
//! This module provides mock implementations of the platform traits for use
//! in unit and integration tests, and for driving screens from a script.

use crate::*;

/// Maximum number of queued keys in a [`ScriptedInput`].
pub const SCRIPT_CAPACITY: usize = 64;

/// Input source that replays a fixed sequence of keys.
///
/// Keys that the caller is not currently waiting for are skipped, the same
/// way a real button that nobody listens to has no effect. Once the script
/// is exhausted `wait_for` reports [`InputError::Closed`].
#[derive(Debug, Default)]
pub struct ScriptedInput {
    keys: heapless::Deque<Key, SCRIPT_CAPACITY>,
    delivered: usize,
    skipped: usize,
}

impl ScriptedInput {
    /// Create an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a script from `keys`. Keys beyond [`SCRIPT_CAPACITY`] are dropped.
    pub fn from_keys(keys: &[Key]) -> Self {
        let mut input = Self::new();
        for key in keys {
            if input.push(*key).is_err() {
                break;
            }
        }
        input
    }

    /// Append a key to the script.
    pub fn push(&mut self, key: Key) -> Result<(), Key> {
        self.keys.push_back(key)
    }

    /// Keys not yet consumed.
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }

    /// Keys returned from `wait_for` so far.
    pub fn delivered(&self) -> usize {
        self.delivered
    }

    /// Keys dropped because nobody was waiting for them.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl InputSource for ScriptedInput {
    fn wait_for(
        &mut self,
        keys: &[Key],
        _check_release: bool,
        _release_keys: &[Key],
    ) -> Result<Key, InputError> {
        while let Some(key) = self.keys.pop_front() {
            if keys.contains(&key) {
                self.delivered += 1;
                return Ok(key);
            }
            tracing::trace!(key = key.name(), "scripted key not awaited; skipped");
            self.skipped += 1;
        }
        Err(InputError::Closed)
    }
}

/// Display sink that keeps the most recent frame in memory.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    show_count: usize,
    width: u32,
    height: u32,
    last_frame: Vec<u8>,
}

impl RecordingDisplay {
    /// Create a sink that has not been flushed yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `show` calls so far.
    pub fn show_count(&self) -> usize {
        self.show_count
    }

    /// Most recently flushed frame, if any.
    pub fn last_frame(&self) -> Option<Frame<'_>> {
        if self.show_count == 0 {
            return None;
        }
        Some(Frame {
            width: self.width,
            height: self.height,
            data: &self.last_frame,
        })
    }
}

impl DisplaySink for RecordingDisplay {
    type Error = core::convert::Infallible;

    fn show(&mut self, frame: &Frame<'_>) -> Result<(), Self::Error> {
        self.show_count += 1;
        self.width = frame.width;
        self.height = frame.height;
        self.last_frame.clear();
        self.last_frame.extend_from_slice(frame.data);
        Ok(())
    }
}
