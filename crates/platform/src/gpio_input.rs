//! GPIO button input: one active-low pin per logical key, polled.
//!
//! # Pin assignments
//!
//! The joystick and its centre press are wired active-low with pull-ups, so
//! a pressed button reads `low`. Which pin drives which [`Key`] is decided by
//! the caller via [`PinInput::bind`].
//!
//! # Timing
//!
//! | Setting            | Default | Meaning                                   |
//! |--------------------|---------|-------------------------------------------|
//! | `poll_interval_ms` | 10 ms   | sleep between scans of all pins           |
//! | `debounce_ms`      | 20 ms   | a press must still read low after this    |
//! | `repeat_delay_ms`  | 250 ms  | a held key re-fires after this long       |
//!
//! A key that is still held from the previous `wait_for` does not fire again
//! until `repeat_delay_ms` has elapsed, so holding Down scrolls at a fixed
//! rate instead of on every poll.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;
use heapless::Vec;

use crate::input::{InputError, InputSource, Key};

/// Default sleep between pin scans.
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 10;
/// Default debounce window.
pub const DEFAULT_DEBOUNCE_MS: u32 = 20;
/// Default auto-repeat delay for held keys.
pub const DEFAULT_REPEAT_DELAY_MS: u32 = 250;

/// Polling button driver over `embedded-hal` input pins.
pub struct PinInput<P, D> {
    pins: Vec<(Key, P), 5>,
    delay: D,
    poll_interval_ms: u32,
    debounce_ms: u32,
    repeat_delay_ms: u32,
    held: Option<Key>,
    held_for_ms: u32,
}

impl<P, D> PinInput<P, D>
where
    P: InputPin,
    D: DelayNs,
{
    /// Create a driver with no pins bound yet.
    pub fn new(delay: D) -> Self {
        Self {
            pins: Vec::new(),
            delay,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            repeat_delay_ms: DEFAULT_REPEAT_DELAY_MS,
            held: None,
            held_for_ms: 0,
        }
    }

    /// Bind `pin` to `key`, replacing any pin previously bound to it.
    #[must_use]
    pub fn bind(mut self, key: Key, pin: P) -> Self {
        if let Some(slot) = self.pins.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = pin;
        } else {
            // Capacity equals the number of keys and keys are unique, so this
            // push cannot fail.
            self.pins.push((key, pin)).ok();
        }
        self
    }

    /// Set the sleep between pin scans.
    #[must_use]
    pub fn poll_interval_ms(mut self, ms: u32) -> Self {
        self.poll_interval_ms = ms.max(1);
        self
    }

    /// Set the debounce window.
    #[must_use]
    pub fn debounce_ms(mut self, ms: u32) -> Self {
        self.debounce_ms = ms;
        self
    }

    /// Set how long a key must stay held before it re-fires.
    #[must_use]
    pub fn repeat_delay_ms(mut self, ms: u32) -> Self {
        self.repeat_delay_ms = ms;
        self
    }

    /// Keys that currently have a pin bound.
    pub fn bound_keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.pins.iter().map(|(k, _)| *k)
    }

    /// First key in `keys` whose pin reads pressed, scanning in bind order.
    fn scan(&mut self, keys: &[Key]) -> Result<Option<Key>, InputError> {
        for (key, pin) in self.pins.iter_mut() {
            if !keys.contains(key) {
                continue;
            }
            if pin.is_low().map_err(|_| InputError::Pin)? {
                return Ok(Some(*key));
            }
        }
        Ok(None)
    }

    fn is_pressed(&mut self, key: Key) -> Result<bool, InputError> {
        match self.pins.iter_mut().find(|(k, _)| *k == key) {
            Some((_, pin)) => pin.is_low().map_err(|_| InputError::Pin),
            None => Ok(false),
        }
    }

    fn wait_for_release(&mut self, key: Key) -> Result<(), InputError> {
        while self.is_pressed(key)? {
            self.delay.delay_ms(self.poll_interval_ms);
        }
        Ok(())
    }
}

impl<P, D> InputSource for PinInput<P, D>
where
    P: InputPin,
    D: DelayNs,
{
    fn wait_for(
        &mut self,
        keys: &[Key],
        check_release: bool,
        release_keys: &[Key],
    ) -> Result<Key, InputError> {
        loop {
            let Some(key) = self.scan(keys)? else {
                self.held = None;
                self.held_for_ms = 0;
                self.delay.delay_ms(self.poll_interval_ms);
                continue;
            };

            if self.held == Some(key) {
                self.held_for_ms = self.held_for_ms.saturating_add(self.poll_interval_ms);
                if self.held_for_ms < self.repeat_delay_ms {
                    self.delay.delay_ms(self.poll_interval_ms);
                    continue;
                }
                tracing::trace!(key = key.name(), "auto-repeat");
                self.held_for_ms = 0;
            } else {
                self.delay.delay_ms(self.debounce_ms);
                if !self.is_pressed(key)? {
                    continue;
                }
                self.held = Some(key);
                self.held_for_ms = 0;
            }

            if check_release && release_keys.contains(&key) {
                self.wait_for_release(key)?;
                self.held = None;
            }

            tracing::debug!(key = key.name(), "button event");
            return Ok(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

    #[test]
    fn test_press_with_release_check_waits_for_release() {
        let up = PinMock::new(&[Transaction::get(State::High)]);
        let confirm = PinMock::new(&[
            Transaction::get(State::Low),  // scan: pressed
            Transaction::get(State::Low),  // still pressed after debounce
            Transaction::get(State::Low),  // release wait: held
            Transaction::get(State::High), // release wait: released
        ]);
        let mut input = PinInput::new(NoopDelay::new())
            .bind(Key::Up, up.clone())
            .bind(Key::Confirm, confirm.clone());

        let key = input
            .wait_for(&[Key::Up, Key::Confirm], true, &[Key::Confirm])
            .unwrap();
        assert_eq!(key, Key::Confirm);

        let (mut up, mut confirm) = (up, confirm);
        up.done();
        confirm.done();
    }

    #[test]
    fn test_bounce_is_ignored() {
        let down = PinMock::new(&[
            Transaction::get(State::Low),  // glitch
            Transaction::get(State::High), // gone after debounce
            Transaction::get(State::Low),  // real press
            Transaction::get(State::Low),  // confirmed
        ]);
        let mut input = PinInput::new(NoopDelay::new()).bind(Key::Down, down.clone());

        let key = input.wait_for(&[Key::Down], false, &[]).unwrap();
        assert_eq!(key, Key::Down);

        let mut down = down;
        down.done();
    }

    #[test]
    fn test_unrequested_keys_are_not_read() {
        // Left is bound but not requested, so its pin is never sampled.
        let left = PinMock::new(&[]);
        let up = PinMock::new(&[Transaction::get(State::Low), Transaction::get(State::Low)]);
        let mut input = PinInput::new(NoopDelay::new())
            .bind(Key::Left, left.clone())
            .bind(Key::Up, up.clone());

        assert_eq!(input.wait_for(&[Key::Up], false, &[]).unwrap(), Key::Up);

        let (mut left, mut up) = (left, up);
        left.done();
        up.done();
    }

    #[test]
    fn test_rebind_replaces_pin() {
        let first = PinMock::new(&[]);
        let second = PinMock::new(&[]);
        let input = PinInput::new(NoopDelay::new())
            .bind(Key::Up, first.clone())
            .bind(Key::Up, second.clone());
        assert_eq!(input.bound_keys().count(), 1);

        let (mut first, mut second) = (first, second);
        first.done();
        second.done();
    }
}
