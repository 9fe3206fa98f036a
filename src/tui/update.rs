//! Pure state transitions: (Screen, Action) → Transition.
//!
//! This is the dispatch core of the TUI. Fully testable without a
//! terminal. Each screen defines which actions it accepts; unhandled
//! actions return the current screen unchanged (no-op). Calculator
//! button presses mutate the engine in place — the engine itself has
//! no failure modes, so transitions never carry errors.

use crate::engine::Calculator;
use crate::key::KEYPAD;

use super::state::{key_at, Action, Screen, Transition, SECRET_ROW};

/// Pure state transition function.
///
/// Given the current screen, an action, and the calculator engine,
/// produces the next transition. The effects boundary interprets it.
pub fn update(screen: Screen, action: &Action, calc: &mut Calculator) -> Transition {
    match screen {
        Screen::Welcome => update_welcome(action),
        Screen::Keypad { row, col } => update_keypad(row, col, action, calc),
    }
}

// ============================================================================
// PER-SCREEN HANDLERS
// ============================================================================

/// Welcome: Activate enters the calculator. Everything else is a no-op.
fn update_welcome(action: &Action) -> Transition {
    match action {
        Action::Activate => Transition::Screen(Screen::keypad()),
        Action::Quit => Transition::Quit,
        _ => Transition::Screen(Screen::Welcome),
    }
}

/// Keypad: cursor movement, button presses, back navigation.
fn update_keypad(row: usize, col: usize, action: &Action, calc: &mut Calculator) -> Transition {
    match action {
        Action::Press(key) => {
            calc.press(*key);
            Transition::Screen(Screen::Keypad { row, col })
        }
        Action::Activate => {
            if row == SECRET_ROW {
                // The hidden control navigates back to the landing screen.
                Transition::Screen(Screen::Welcome)
            } else {
                if let Some(key) = key_at(row, col) {
                    calc.press(key);
                }
                Transition::Screen(Screen::Keypad { row, col })
            }
        }
        Action::MoveUp => {
            let row = row.saturating_sub(1);
            Transition::Screen(clamp_cursor(row, col))
        }
        Action::MoveDown => {
            let max_row = if calc.secret_revealed() { SECRET_ROW } else { KEYPAD.len() - 1 };
            let row = (row + 1).min(max_row);
            Transition::Screen(clamp_cursor(row, col))
        }
        Action::MoveLeft => Transition::Screen(clamp_cursor(row, col.saturating_sub(1))),
        Action::MoveRight => Transition::Screen(clamp_cursor(row, col + 1)),
        Action::Back => Transition::Screen(Screen::Welcome),
        Action::Quit => Transition::Quit,
    }
}

/// Clamp the cursor column to the width of its row. The secret row
/// holds a single control, so its only valid column is 0.
fn clamp_cursor(row: usize, col: usize) -> Screen {
    let width = KEYPAD.get(row).map(|r| r.len()).unwrap_or(1);
    Screen::Keypad {
        row,
        col: col.min(width - 1),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SECRET_SEQUENCE;
    use crate::key::{Key, Operator};

    fn at(row: usize, col: usize) -> Screen {
        Screen::Keypad { row, col }
    }

    // -- Welcome --

    #[test]
    fn welcome_activate_enters_keypad() {
        let mut calc = Calculator::new();
        let result = update(Screen::Welcome, &Action::Activate, &mut calc);
        assert_eq!(result, Transition::Screen(Screen::keypad()));
    }

    #[test]
    fn welcome_quit() {
        let mut calc = Calculator::new();
        assert_eq!(update(Screen::Welcome, &Action::Quit, &mut calc), Transition::Quit);
    }

    #[test]
    fn welcome_ignores_movement() {
        let mut calc = Calculator::new();
        let result = update(Screen::Welcome, &Action::MoveDown, &mut calc);
        assert_eq!(result, Transition::Screen(Screen::Welcome));
    }

    // -- Keypad cursor --

    #[test]
    fn cursor_moves_down_and_right() {
        let mut calc = Calculator::new();
        let result = update(at(0, 0), &Action::MoveDown, &mut calc);
        assert_eq!(result, Transition::Screen(at(1, 0)));
        let result = update(at(1, 0), &Action::MoveRight, &mut calc);
        assert_eq!(result, Transition::Screen(at(1, 1)));
    }

    #[test]
    fn cursor_up_at_top_stays() {
        let mut calc = Calculator::new();
        let result = update(at(0, 2), &Action::MoveUp, &mut calc);
        assert_eq!(result, Transition::Screen(at(0, 2)));
    }

    #[test]
    fn cursor_right_clamps_at_row_edge() {
        let mut calc = Calculator::new();
        let result = update(at(0, 3), &Action::MoveRight, &mut calc);
        assert_eq!(result, Transition::Screen(at(0, 3)));
    }

    #[test]
    fn column_clamps_when_entering_narrower_row() {
        // Row 3 has 4 keys, row 4 only 3: col 3 must clamp to 2.
        let mut calc = Calculator::new();
        let result = update(at(3, 3), &Action::MoveDown, &mut calc);
        assert_eq!(result, Transition::Screen(at(4, 2)));
    }

    // -- Button presses --

    #[test]
    fn activate_presses_focused_key() {
        let mut calc = Calculator::new();
        // (1, 0) is the 7 key.
        let result = update(at(1, 0), &Action::Activate, &mut calc);
        assert_eq!(result, Transition::Screen(at(1, 0)));
        assert_eq!(calc.display(), "7");
    }

    #[test]
    fn direct_press_reaches_the_engine() {
        let mut calc = Calculator::new();
        update(at(0, 0), &Action::Press(Key::Digit(4)), &mut calc);
        update(at(0, 0), &Action::Press(Key::Digit(2)), &mut calc);
        assert_eq!(calc.display(), "42");
    }

    #[test]
    fn full_sum_via_grid_activation() {
        let mut calc = Calculator::new();
        // 5 (row 2, col 1), + (row 3, col 3), 3 (row 3, col 2), = (row 4, col 2)
        update(at(2, 1), &Action::Activate, &mut calc);
        update(at(3, 3), &Action::Activate, &mut calc);
        update(at(3, 2), &Action::Activate, &mut calc);
        update(at(4, 2), &Action::Activate, &mut calc);
        assert_eq!(calc.display(), "8");
    }

    // -- Secret row --

    #[test]
    fn secret_row_unreachable_before_reveal() {
        let mut calc = Calculator::new();
        let result = update(at(4, 0), &Action::MoveDown, &mut calc);
        assert_eq!(result, Transition::Screen(at(4, 0)));
    }

    #[test]
    fn secret_row_reachable_after_reveal() {
        let mut calc = Calculator::new();
        for key in SECRET_SEQUENCE {
            calc.press(key);
        }
        let result = update(at(4, 1), &Action::MoveDown, &mut calc);
        assert_eq!(result, Transition::Screen(at(SECRET_ROW, 0)));
    }

    #[test]
    fn secret_activate_navigates_to_welcome() {
        let mut calc = Calculator::new();
        for key in SECRET_SEQUENCE {
            calc.press(key);
        }
        let result = update(at(SECRET_ROW, 0), &Action::Activate, &mut calc);
        assert_eq!(result, Transition::Screen(Screen::Welcome));
    }

    #[test]
    fn moving_up_from_secret_row_returns_to_grid() {
        let mut calc = Calculator::new();
        let result = update(at(SECRET_ROW, 0), &Action::MoveUp, &mut calc);
        assert_eq!(result, Transition::Screen(at(4, 0)));
    }

    // -- Navigation --

    #[test]
    fn back_returns_to_welcome_and_keeps_engine_state() {
        let mut calc = Calculator::new();
        update(at(0, 0), &Action::Press(Key::Digit(9)), &mut calc);
        let result = update(at(2, 2), &Action::Back, &mut calc);
        assert_eq!(result, Transition::Screen(Screen::Welcome));
        assert_eq!(calc.display(), "9");
    }

    #[test]
    fn keypad_quit() {
        let mut calc = Calculator::new();
        assert_eq!(update(at(0, 0), &Action::Quit, &mut calc), Transition::Quit);
    }

    #[test]
    fn press_also_advances_secret_detector() {
        let mut calc = Calculator::new();
        update(at(0, 0), &Action::Press(Key::Digit(7)), &mut calc);
        update(at(0, 0), &Action::Press(Key::Digit(8)), &mut calc);
        update(at(0, 0), &Action::Press(Key::Digit(9)), &mut calc);
        update(at(0, 0), &Action::Press(Key::Op(Operator::Add)), &mut calc);
        assert!(calc.secret_revealed());
    }
}
