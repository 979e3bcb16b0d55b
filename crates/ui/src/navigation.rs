//! Focus navigation state machine.
//!
//! Every screen template has the same shape: an optional focusable top bar
//! above zero or more buttons laid out either as a vertical list or as a
//! 2-column grid. [`FocusNavigator`] owns the cursor and turns key presses
//! into [`NavOutcome`]s; it never draws.
//!
//! Movement stops at the edges; nothing wraps around.

use heapless::Vec;
use platform::Key;

use gui_system::{GuiError, Result};

/// Where the cursor is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    /// Nothing highlighted
    Nothing,
    /// The top bar
    TopNav,
    /// Button `i`, in construction order
    Button(usize),
}

/// How a screen's buttons are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLayout {
    /// No buttons; only the top bar can be focused.
    TopNavOnly,
    /// Buttons stacked vertically.
    List {
        /// Button count, at least 1
        buttons: usize,
    },
    /// Buttons in two columns, filled row by row.
    Grid {
        /// Button count, 2 or 4
        buttons: usize,
    },
}

impl NavLayout {
    /// Number of buttons.
    pub fn buttons(&self) -> usize {
        match *self {
            NavLayout::TopNavOnly => 0,
            NavLayout::List { buttons } | NavLayout::Grid { buttons } => buttons,
        }
    }
}

/// Result of feeding one key to the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Nothing changed.
    Ignored,
    /// The cursor moved.
    Moved {
        /// Previous focus
        from: Focus,
        /// New focus
        to: Focus,
    },
    /// Confirm was pressed on this focus.
    Commit(Focus),
}

/// Cursor over a top bar and a list or grid of buttons.
///
/// ```
/// use platform::Key;
/// use ui::navigation::{Focus, FocusNavigator, NavLayout, NavOutcome};
///
/// let mut nav = FocusNavigator::new(NavLayout::List { buttons: 3 }, true)?;
/// nav.handle(Key::Down);
/// nav.handle(Key::Down);
/// assert_eq!(nav.focus(), Focus::Button(2));
/// assert_eq!(nav.handle(Key::Confirm), NavOutcome::Commit(Focus::Button(2)));
/// # Ok::<(), gui_system::GuiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FocusNavigator {
    layout: NavLayout,
    top_nav_focusable: bool,
    focus: Focus,
    /// Grid button to return to when leaving the top bar.
    resume: usize,
}

impl FocusNavigator {
    /// Validate `layout` and place the cursor on its initial focus.
    ///
    /// Lists need at least one button and grids exactly 2 or 4. The cursor
    /// starts on button 0, or on nothing when there are no buttons.
    pub fn new(layout: NavLayout, top_nav_focusable: bool) -> Result<Self> {
        let focus = match layout {
            NavLayout::TopNavOnly => Focus::Nothing,
            NavLayout::List { buttons: 0 } => {
                return Err(GuiError::configuration("button list needs at least one button"));
            }
            NavLayout::Grid { buttons } if buttons != 2 && buttons != 4 => {
                return Err(GuiError::configuration(format!(
                    "large button grid needs 2 or 4 buttons, got {buttons}"
                )));
            }
            NavLayout::List { .. } | NavLayout::Grid { .. } => Focus::Button(0),
        };
        Ok(Self {
            layout,
            top_nav_focusable,
            focus,
            resume: 0,
        })
    }

    /// Current focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// The layout being navigated.
    pub fn layout(&self) -> NavLayout {
        self.layout
    }

    /// Keys this layout reacts to; everything else can be left unread.
    pub fn keys(&self) -> Vec<Key, 5> {
        let keys: &[Key] = match self.layout {
            NavLayout::Grid { .. } => &Key::ALL,
            NavLayout::TopNavOnly | NavLayout::List { .. } => &[Key::Up, Key::Down, Key::Confirm],
        };
        keys.iter().copied().collect()
    }

    /// Apply one key press.
    pub fn handle(&mut self, key: Key) -> NavOutcome {
        let from = self.focus;
        if key == Key::Confirm {
            return match from {
                Focus::Nothing => NavOutcome::Ignored,
                focus => {
                    tracing::debug!(?focus, "commit");
                    NavOutcome::Commit(focus)
                }
            };
        }

        let target = match self.layout {
            NavLayout::TopNavOnly => self.step_top_nav_only(key),
            NavLayout::List { buttons } => self.step_list(key, buttons),
            NavLayout::Grid { buttons } => self.step_grid(key, buttons),
        };

        match target {
            Some(to) if to != from => {
                tracing::debug!(key = key.name(), ?from, ?to, "focus moved");
                self.focus = to;
                NavOutcome::Moved { from, to }
            }
            _ => {
                tracing::trace!(key = key.name(), ?from, "key ignored");
                NavOutcome::Ignored
            }
        }
    }

    fn top_nav(&self) -> Option<Focus> {
        self.top_nav_focusable.then_some(Focus::TopNav)
    }

    fn step_top_nav_only(&self, key: Key) -> Option<Focus> {
        match (self.focus, key) {
            (Focus::Nothing, Key::Up) => self.top_nav(),
            (Focus::TopNav, Key::Down) => Some(Focus::Nothing),
            _ => None,
        }
    }

    fn step_list(&self, key: Key, buttons: usize) -> Option<Focus> {
        match (self.focus, key) {
            (Focus::Button(0), Key::Up) => self.top_nav(),
            (Focus::Button(i), Key::Up) => Some(Focus::Button(i - 1)),
            (Focus::Button(i), Key::Down) if i + 1 < buttons => Some(Focus::Button(i + 1)),
            (Focus::TopNav, Key::Down) => Some(Focus::Button(0)),
            _ => None,
        }
    }

    fn step_grid(&mut self, key: Key, buttons: usize) -> Option<Focus> {
        match (self.focus, key) {
            (Focus::Button(i), Key::Up) if i < 2 => {
                let top = self.top_nav();
                if top.is_some() {
                    self.resume = i;
                }
                top
            }
            (Focus::Button(i), Key::Up) => Some(Focus::Button(i - 2)),
            (Focus::Button(i), Key::Down) if i + 2 < buttons => Some(Focus::Button(i + 2)),
            (Focus::Button(i), Key::Right) if i % 2 == 0 && i + 1 < buttons => {
                Some(Focus::Button(i + 1))
            }
            (Focus::Button(i), Key::Left) if i % 2 == 1 => Some(Focus::Button(i - 1)),
            (Focus::TopNav, Key::Down) => Some(Focus::Button(self.resume)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(n: usize) -> FocusNavigator {
        FocusNavigator::new(NavLayout::List { buttons: n }, true).unwrap()
    }

    fn grid(n: usize) -> FocusNavigator {
        FocusNavigator::new(NavLayout::Grid { buttons: n }, true).unwrap()
    }

    #[test]
    fn test_list_starts_at_first_button() {
        assert_eq!(list(3).focus(), Focus::Button(0));
    }

    #[test]
    fn test_list_down_stops_at_last() {
        let mut nav = list(3);
        assert_eq!(
            nav.handle(Key::Down),
            NavOutcome::Moved {
                from: Focus::Button(0),
                to: Focus::Button(1)
            }
        );
        nav.handle(Key::Down);
        assert_eq!(nav.handle(Key::Down), NavOutcome::Ignored);
        assert_eq!(nav.focus(), Focus::Button(2));
    }

    #[test]
    fn test_list_up_reaches_top_nav_and_back() {
        let mut nav = list(2);
        nav.handle(Key::Up);
        assert_eq!(nav.focus(), Focus::TopNav);
        assert_eq!(nav.handle(Key::Up), NavOutcome::Ignored);
        nav.handle(Key::Down);
        assert_eq!(nav.focus(), Focus::Button(0));
    }

    #[test]
    fn test_list_without_top_nav() {
        let mut nav = FocusNavigator::new(NavLayout::List { buttons: 2 }, false).unwrap();
        assert_eq!(nav.handle(Key::Up), NavOutcome::Ignored);
        assert_eq!(nav.focus(), Focus::Button(0));
    }

    #[test]
    fn test_list_ignores_left_right() {
        let mut nav = list(2);
        assert_eq!(nav.handle(Key::Left), NavOutcome::Ignored);
        assert_eq!(nav.handle(Key::Right), NavOutcome::Ignored);
        assert_eq!(nav.keys().as_slice(), &[Key::Up, Key::Down, Key::Confirm]);
    }

    #[test]
    fn test_grid_moves() {
        let mut nav = grid(4);
        nav.handle(Key::Right);
        assert_eq!(nav.focus(), Focus::Button(1));
        assert_eq!(nav.handle(Key::Right), NavOutcome::Ignored);
        nav.handle(Key::Left);
        assert_eq!(nav.focus(), Focus::Button(0));
        assert_eq!(nav.handle(Key::Left), NavOutcome::Ignored);
        nav.handle(Key::Down);
        assert_eq!(nav.focus(), Focus::Button(2));
        assert_eq!(nav.handle(Key::Down), NavOutcome::Ignored);
        nav.handle(Key::Right);
        assert_eq!(nav.focus(), Focus::Button(3));
        nav.handle(Key::Up);
        assert_eq!(nav.focus(), Focus::Button(1));
        assert_eq!(nav.keys().len(), 5);
    }

    #[test]
    fn test_grid_resumes_after_top_nav() {
        let mut nav = grid(4);
        nav.handle(Key::Right);
        nav.handle(Key::Up);
        assert_eq!(nav.focus(), Focus::TopNav);
        assert_eq!(nav.handle(Key::Left), NavOutcome::Ignored);
        assert_eq!(nav.handle(Key::Right), NavOutcome::Ignored);
        nav.handle(Key::Down);
        assert_eq!(nav.focus(), Focus::Button(1));
    }

    #[test]
    fn test_two_grid_has_no_second_row() {
        let mut nav = grid(2);
        assert_eq!(nav.handle(Key::Down), NavOutcome::Ignored);
        nav.handle(Key::Right);
        assert_eq!(nav.handle(Key::Confirm), NavOutcome::Commit(Focus::Button(1)));
    }

    #[test]
    fn test_grid_size_validated() {
        for n in [0, 1, 3, 5] {
            assert!(matches!(
                FocusNavigator::new(NavLayout::Grid { buttons: n }, true),
                Err(GuiError::Configuration(_))
            ));
        }
        assert!(FocusNavigator::new(NavLayout::List { buttons: 0 }, true).is_err());
    }

    #[test]
    fn test_top_nav_only() {
        let mut nav = FocusNavigator::new(NavLayout::TopNavOnly, true).unwrap();
        assert_eq!(nav.focus(), Focus::Nothing);
        assert_eq!(nav.handle(Key::Confirm), NavOutcome::Ignored);
        assert_eq!(nav.handle(Key::Down), NavOutcome::Ignored);
        nav.handle(Key::Up);
        assert_eq!(nav.handle(Key::Confirm), NavOutcome::Commit(Focus::TopNav));
        nav.handle(Key::Down);
        assert_eq!(nav.focus(), Focus::Nothing);
    }

    #[test]
    fn test_top_nav_only_unfocusable_bar() {
        let mut nav = FocusNavigator::new(NavLayout::TopNavOnly, false).unwrap();
        assert_eq!(nav.handle(Key::Up), NavOutcome::Ignored);
        assert_eq!(nav.focus(), Focus::Nothing);
    }
}
