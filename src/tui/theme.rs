//! TUI color semantics and style constants.
//!
//! Centralized theme encoding the keypad's visual grammar.
//! Pure data — consumed by the rendering layer for visual consistency.
//!
//! Color semantics:
//! - Yellow: arithmetic operators and equals
//! - Dark gray: modifier keys (AC, sign toggle, percent)
//! - Plain/bold white: digits and the display readout
//! - Magenta: the hidden control and welcome-screen accents

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// KEY CATEGORY STYLES
// ============================================================================

/// Digit keys and the decimal point.
pub const STYLE_KEY_DIGIT: Style = Style::new().fg(Color::White);

/// Operator keys, including equals.
pub const STYLE_KEY_OPERATOR: Style = Style::new().fg(Color::Yellow);

/// Modifier keys: AC, sign toggle, percent.
pub const STYLE_KEY_MODIFIER: Style = Style::new().fg(Color::DarkGray);

/// The hidden navigation control.
pub const STYLE_SECRET: Style = Style::new().fg(Color::Magenta).add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// The numeric display readout.
pub const STYLE_DISPLAY: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Focused keypad button.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Welcome-screen call-to-action control.
pub const STYLE_ACCENT: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::LightMagenta)
    .add_modifier(Modifier::BOLD);

/// De-emphasized text (byline, separators).
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
