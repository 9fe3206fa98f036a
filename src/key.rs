//! The calculator's button set.
//!
//! `Key` is the closed set of button identities: digits, the four
//! arithmetic operators, and the modifier/control keys. The keypad
//! grid layout and the per-key visual category both live here so the
//! rendering layer has a single source of truth for the button board.

// ============================================================================
// KEYS
// ============================================================================

/// One of the four arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// A calculator button identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A digit button, 0–9.
    Digit(u8),
    /// An arithmetic operator button.
    Op(Operator),
    Equals,
    Clear,
    Decimal,
    Percent,
    ToggleSign,
}

/// Visual grouping for keypad color coding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCategory {
    /// Digits and the decimal point.
    Digit,
    /// Arithmetic operators and equals.
    Operator,
    /// AC, sign toggle, percent.
    Modifier,
}

impl Key {
    /// Button face text, as printed on the keypad.
    pub fn label(&self) -> &'static str {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        match self {
            Key::Digit(d) => DIGITS[*d as usize % 10],
            Key::Op(Operator::Add) => "+",
            Key::Op(Operator::Subtract) => "-",
            Key::Op(Operator::Multiply) => "x",
            Key::Op(Operator::Divide) => "/",
            Key::Equals => "=",
            Key::Clear => "AC",
            Key::Decimal => ".",
            Key::Percent => "%",
            Key::ToggleSign => "-/+",
        }
    }

    /// Which visual group this key belongs to.
    pub fn category(&self) -> KeyCategory {
        match self {
            Key::Op(_) | Key::Equals => KeyCategory::Operator,
            Key::Clear | Key::ToggleSign | Key::Percent => KeyCategory::Modifier,
            Key::Digit(_) | Key::Decimal => KeyCategory::Digit,
        }
    }
}

// ============================================================================
// KEYPAD LAYOUT
// ============================================================================

/// The fixed keypad grid, top row first. The last row is narrower.
pub const KEYPAD: [&[Key]; 5] = [
    &[Key::Clear, Key::ToggleSign, Key::Percent, Key::Op(Operator::Divide)],
    &[Key::Digit(7), Key::Digit(8), Key::Digit(9), Key::Op(Operator::Multiply)],
    &[Key::Digit(4), Key::Digit(5), Key::Digit(6), Key::Op(Operator::Subtract)],
    &[Key::Digit(1), Key::Digit(2), Key::Digit(3), Key::Op(Operator::Add)],
    &[Key::Decimal, Key::Digit(0), Key::Equals],
];

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_labels_match_values() {
        for d in 0..=9u8 {
            assert_eq!(Key::Digit(d).label(), d.to_string());
        }
    }

    #[test]
    fn operator_labels() {
        assert_eq!(Key::Op(Operator::Add).label(), "+");
        assert_eq!(Key::Op(Operator::Subtract).label(), "-");
        assert_eq!(Key::Op(Operator::Multiply).label(), "x");
        assert_eq!(Key::Op(Operator::Divide).label(), "/");
        assert_eq!(Key::Clear.label(), "AC");
        assert_eq!(Key::ToggleSign.label(), "-/+");
    }

    #[test]
    fn categories_partition_the_board() {
        assert_eq!(Key::Digit(3).category(), KeyCategory::Digit);
        assert_eq!(Key::Decimal.category(), KeyCategory::Digit);
        assert_eq!(Key::Op(Operator::Divide).category(), KeyCategory::Operator);
        assert_eq!(Key::Equals.category(), KeyCategory::Operator);
        assert_eq!(Key::Clear.category(), KeyCategory::Modifier);
        assert_eq!(Key::Percent.category(), KeyCategory::Modifier);
    }

    #[test]
    fn keypad_holds_every_key_exactly_once() {
        let all: Vec<Key> = KEYPAD.iter().flat_map(|row| row.iter().copied()).collect();
        assert_eq!(all.len(), 19);
        for d in 0..=9u8 {
            assert_eq!(all.iter().filter(|k| **k == Key::Digit(d)).count(), 1);
        }
        assert_eq!(all.iter().filter(|k| **k == Key::Equals).count(), 1);
    }

    #[test]
    fn last_row_is_narrower() {
        assert_eq!(KEYPAD[0].len(), 4);
        assert_eq!(KEYPAD[4].len(), 3);
    }
}
