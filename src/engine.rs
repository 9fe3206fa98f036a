//! Calculator state machine: pure logic, zero effects.
//!
//! A single [`Calculator`] record owns the display string, the pending
//! operation, and the secret-sequence detector. Every button press goes
//! through [`Calculator::press`]; there are no error conditions — any
//! malformed input path is a silent no-op, so the engine cannot fail.
//!
//! Behavioral quirks preserved on purpose:
//! - Divide by zero yields 0, not an error or infinity.
//! - Whole-number results render without a decimal point, via a
//!   truncating integer cast.
//! - AC does not reset the secret detector directly, but the detector
//!   clears itself because AC never matches the sequence prefix.

use crate::key::{Key, Operator};

/// The button sequence that reveals the hidden navigation control.
pub const SECRET_SEQUENCE: [Key; 4] = [
    Key::Digit(7),
    Key::Digit(8),
    Key::Digit(9),
    Key::Op(Operator::Add),
];

// ============================================================================
// STATE
// ============================================================================

/// Complete calculator state. Created once per session, mutated only
/// by [`Calculator::press`], never persisted.
#[derive(Debug, Clone)]
pub struct Calculator {
    /// Text shown on the display. Always a numeric literal or "0",
    /// never more than one decimal point.
    display: String,
    /// Operator awaiting a second operand. Set iff `first_operand` is set.
    pending_op: Option<Operator>,
    /// Operand captured when the pending operator was pressed.
    first_operand: Option<f64>,
    /// True while typed digits extend the current entry (vs. starting
    /// a fresh entry after an operator or result).
    entering: bool,
    /// Rolling press buffer, always a prefix of [`SECRET_SEQUENCE`].
    key_history: Vec<Key>,
    /// Latched true once the secret sequence has been entered.
    secret_revealed: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator {
            display: String::from("0"),
            pending_op: None,
            first_operand: None,
            entering: false,
            key_history: Vec::new(),
            secret_revealed: false,
        }
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The display text to render.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Whether the hidden navigation control should be shown.
    pub fn secret_revealed(&self) -> bool {
        self.secret_revealed
    }

    // ------------------------------------------------------------------
    // DISPATCH
    // ------------------------------------------------------------------

    /// Apply one button press: advance the secret detector, then the
    /// key's normal arithmetic effect.
    pub fn press(&mut self, key: Key) {
        self.track_secret(key);

        match key {
            Key::Digit(d) => self.press_digit(d),
            Key::Op(op) => self.press_operator(op),
            Key::Equals => self.press_equals(),
            Key::Clear => self.press_clear(),
            Key::Decimal => self.press_decimal(),
            Key::Percent => self.press_percent(),
            Key::ToggleSign => self.press_toggle_sign(),
        }
    }

    /// Secret-sequence detector. Runs on every key, before the key's
    /// arithmetic effect. A mismatching press clears the buffer; the
    /// mismatching key itself is not retried as a new prefix.
    fn track_secret(&mut self, key: Key) {
        self.key_history.push(key);

        if self.key_history == SECRET_SEQUENCE {
            self.secret_revealed = true;
            self.key_history.clear();
        } else if !SECRET_SEQUENCE.starts_with(&self.key_history) {
            self.key_history.clear();
        }
    }

    // ------------------------------------------------------------------
    // KEY HANDLERS
    // ------------------------------------------------------------------

    fn press_digit(&mut self, d: u8) {
        let digit = char::from(b'0' + (d % 10));
        if self.entering {
            self.display.push(digit);
        } else {
            self.display = digit.to_string();
            self.entering = true;
        }
    }

    /// At most one decimal point per entry. Does not touch `entering`,
    /// so "8" + "." after a result still starts a fresh entry on the
    /// next digit — original behavior, preserved.
    fn press_decimal(&mut self) {
        if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    fn press_operator(&mut self, op: Operator) {
        if let Ok(value) = self.display.parse::<f64>() {
            self.first_operand = Some(value);
            self.pending_op = Some(op);
            self.entering = false;
        }
    }

    fn press_equals(&mut self) {
        let (Some(op), Some(first)) = (self.pending_op, self.first_operand) else {
            return;
        };
        let Ok(second) = self.display.parse::<f64>() else {
            return;
        };

        let result = match op {
            Operator::Add => first + second,
            Operator::Subtract => first - second,
            Operator::Multiply => first * second,
            Operator::Divide => {
                if second == 0.0 {
                    0.0
                } else {
                    first / second
                }
            }
        };

        self.display = format_result(result);
        self.pending_op = None;
        self.first_operand = None;
        self.entering = false;
    }

    fn press_clear(&mut self) {
        self.display = String::from("0");
        self.pending_op = None;
        self.first_operand = None;
        self.entering = false;
    }

    fn press_toggle_sign(&mut self) {
        if let Ok(value) = self.display.parse::<f64>() {
            self.display = format_result(-value);
        }
    }

    fn press_percent(&mut self) {
        if let Ok(value) = self.display.parse::<f64>() {
            self.display = format_result(value / 100.0);
        }
    }
}

// ============================================================================
// FORMATTING
// ============================================================================

/// Render a result for the display: whole numbers as integer literals,
/// everything else as the float's default decimal rendering.
pub fn format_result(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

// ============================================================================
// TESTS
// ============================================================================
