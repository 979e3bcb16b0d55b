//! Input device abstraction

/// Logical keys, decoupled from how the physical buttons are wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Joystick up
    Up,
    /// Joystick down
    Down,
    /// Joystick left
    Left,
    /// Joystick right
    Right,
    /// Joystick press / OK button
    Confirm,
}

impl Key {
    /// Every logical key, in declaration order.
    pub const ALL: [Key; 5] = [Key::Up, Key::Down, Key::Left, Key::Right, Key::Confirm];

    /// Short lowercase name, used in logs and the simulator prompt.
    pub const fn name(self) -> &'static str {
        match self {
            Key::Up => "up",
            Key::Down => "down",
            Key::Left => "left",
            Key::Right => "right",
            Key::Confirm => "confirm",
        }
    }
}

/// Errors an input source can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// The source can never produce another event (script exhausted, stdin EOF).
    #[error("input source closed")]
    Closed,
    /// Reading a button pin failed.
    #[error("failed to read button pin")]
    Pin,
}

/// Blocking source of logical key events.
///
/// There is no timeout and no cancellation: `wait_for` returns only once one
/// of the requested keys fires, or the source fails.
pub trait InputSource {
    /// Block until one of `keys` is pressed and return it.
    ///
    /// When `check_release` is set and the pressed key is also listed in
    /// `release_keys`, the call returns only after that key is released, so a
    /// single press cannot confirm two screens in a row.
    fn wait_for(
        &mut self,
        keys: &[Key],
        check_release: bool,
        release_keys: &[Key],
    ) -> Result<Key, InputError>;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn wait_for(
        &mut self,
        keys: &[Key],
        check_release: bool,
        release_keys: &[Key],
    ) -> Result<Key, InputError> {
        (**self).wait_for(keys, check_release, release_keys)
    }
}

#[cfg(test)]
mod tests {
    use super::Key;

    #[test]
    fn test_all_keys_are_distinct() {
        for (i, a) in Key::ALL.iter().enumerate() {
            for b in Key::ALL.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Key::Confirm.name(), "confirm");
        assert_eq!(Key::Left.name(), "left");
    }
}
