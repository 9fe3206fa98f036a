//! TUI state algebra: pure types, zero effects.
//!
//! These types define the entire TUI state space. Screen variants carry
//! only per-screen transient state (the keypad cursor); shared data (the
//! calculator engine) lives in [`App`]. The transition function and the
//! rendering layer both program against these types.

use crate::engine::Calculator;
use crate::key::{KEYPAD, Key};

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
///
/// Owns the shared calculator engine and the current screen.
/// The effects layer reads this to know what to render.
#[derive(Debug)]
pub struct App {
    /// Current screen — carries per-screen navigation state.
    pub screen: Screen,

    /// The calculator engine, shared across screens. Survives
    /// navigation, discarded only on exit.
    pub calc: Calculator,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    /// Create an App landing on the welcome screen.
    pub fn new() -> Self {
        App {
            screen: Screen::Welcome,
            calc: Calculator::new(),
            should_quit: false,
        }
    }

    /// Create an App landing directly on the calculator screen.
    pub fn on_keypad() -> Self {
        App {
            screen: Screen::keypad(),
            calc: Calculator::new(),
            should_quit: false,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// SCREENS
// ============================================================================

/// Row index of the hidden navigation control, one past the keypad.
/// Only reachable once the secret sequence has been entered.
pub const SECRET_ROW: usize = KEYPAD.len();

/// The current TUI screen.
///
/// Each variant is a state in the navigation state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Static landing screen with a single control into the calculator.
    Welcome,

    /// The calculator: display, keypad grid, focused button.
    Keypad {
        /// Focused keypad row. [`SECRET_ROW`] focuses the hidden control.
        row: usize,
        /// Focused column within the row.
        col: usize,
    },
}

impl Screen {
    /// Create a Keypad screen with the cursor on the top-left button.
    pub fn keypad() -> Self {
        Screen::Keypad { row: 0, col: 0 }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Welcome
    }
}

/// The key under the keypad cursor, if the cursor is on the grid
/// (None on the secret row).
pub fn key_at(row: usize, col: usize) -> Option<Key> {
    KEYPAD.get(row)?.get(col).copied()
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps terminal key presses to Actions.
/// The transition function decides what each Action means per Screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Press a calculator button directly (character bindings).
    Press(Key),
    /// Move the keypad cursor up.
    MoveUp,
    /// Move the keypad cursor down.
    MoveDown,
    /// Move the keypad cursor left.
    MoveLeft,
    /// Move the keypad cursor right.
    MoveRight,
    /// Activate the focused control (Enter).
    Activate,
    /// Navigate back to the previous screen.
    Back,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// The update function returns this; the effects boundary inspects it
/// to decide what to render next.
#[derive(Debug, PartialEq, Eq)]
pub enum Transition {
    /// Render this screen (may be the same or a different screen).
    Screen(Screen),
    /// Quit the application.
    Quit,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Operator;

    #[test]
    fn app_starts_on_welcome() {
        let app = App::new();
        assert_eq!(app.screen, Screen::Welcome);
        assert_eq!(app.calc.display(), "0");
        assert!(!app.should_quit);
    }

    #[test]
    fn app_on_keypad_skips_welcome() {
        let app = App::on_keypad();
        assert_eq!(app.screen, Screen::keypad());
    }

    #[test]
    fn keypad_screen_starts_top_left() {
        assert_eq!(Screen::keypad(), Screen::Keypad { row: 0, col: 0 });
    }

    #[test]
    fn key_at_resolves_grid_positions() {
        assert_eq!(key_at(0, 0), Some(Key::Clear));
        assert_eq!(key_at(1, 1), Some(Key::Digit(8)));
        assert_eq!(key_at(3, 3), Some(Key::Op(Operator::Add)));
        assert_eq!(key_at(4, 2), Some(Key::Equals));
    }

    #[test]
    fn key_at_is_none_off_grid() {
        assert_eq!(key_at(4, 3), None); // last row has only 3 keys
        assert_eq!(key_at(SECRET_ROW, 0), None);
    }

    #[test]
    fn secret_row_is_one_past_the_grid() {
        assert_eq!(SECRET_ROW, 5);
    }
}
