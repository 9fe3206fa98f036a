//! Pure rendering: map App state to ratatui widget trees.
//!
//! Each screen has a dedicated render function. The main `render()`
//! dispatches based on the current Screen variant. Widget-building
//! functions are pure (state in, widgets out); the only effect is
//! Frame::render_widget() which writes to the terminal buffer.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::engine::Calculator;
use crate::key::{KeyCategory, KEYPAD};

use super::state::{App, Screen, SECRET_ROW};
use super::theme;

/// Width of one keypad button cell, including its bracket padding.
const CELL_WIDTH: usize = 5;

/// Total keypad width: the widest row is 4 cells plus 3 gaps.
const BOARD_WIDTH: usize = CELL_WIDTH * 4 + 3;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Common layout: title bar at top, content in middle, help at bottom
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .split(area);

    let title = render_title(&app.screen);
    frame.render_widget(title, chunks[0]);

    let help = render_help(&app.screen);
    frame.render_widget(help, chunks[2]);

    match app.screen {
        Screen::Welcome => render_welcome(frame, chunks[1]),
        Screen::Keypad { row, col } => {
            render_keypad(&app.calc, row, col, frame, chunks[1]);
        }
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

/// Title bar showing the app name and screen context.
fn render_title(screen: &Screen) -> Paragraph<'static> {
    let title_text = match screen {
        Screen::Welcome => "foxcalc",
        Screen::Keypad { .. } => "Fox Calculator",
    };

    Paragraph::new(Line::from(Span::styled(title_text, theme::STYLE_TITLE)))
}

/// Help line showing available keybindings for the current screen.
fn render_help(screen: &Screen) -> Paragraph<'static> {
    let help_text = match screen {
        Screen::Welcome => "[Enter] calculator  [q] quit",
        Screen::Keypad { .. } => {
            "[0-9 . + - x / % =] press  [arrows] move  [Enter] press focused  [c] AC  [n] -/+  [Esc] back  [q] quit"
        }
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

// ============================================================================
// SCREEN: WELCOME
// ============================================================================

fn render_welcome(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("      /\\   /\\", theme::STYLE_TITLE)),
        Line::from(Span::styled("     //\\\\_//\\\\", theme::STYLE_TITLE)),
        Line::from(Span::styled("     \\_     _/", theme::STYLE_TITLE)),
        Line::from(Span::styled("      / ^ ^ \\", theme::STYLE_TITLE)),
        Line::from(Span::styled("      \\_\\o/_/", theme::STYLE_TITLE)),
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(" Enter The World of Math! ", theme::STYLE_ACCENT),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  Fox Calculator by TheAlepou",
            theme::STYLE_DIM,
        )),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

// ============================================================================
// SCREEN: KEYPAD
// ============================================================================

fn render_keypad(calc: &Calculator, cursor_row: usize, cursor_col: usize, frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from("")];

    // Display readout, right-aligned over the keypad board.
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(display_text(calc.display(), BOARD_WIDTH), theme::STYLE_DISPLAY),
    ]));
    lines.push(Line::from(Span::styled(
        format!("  {}", "─".repeat(BOARD_WIDTH)),
        theme::STYLE_DIM,
    )));

    // Button board.
    for (r, keys) in KEYPAD.iter().enumerate() {
        let mut spans = vec![Span::raw("  ")];
        for (c, key) in keys.iter().enumerate() {
            if c > 0 {
                spans.push(Span::raw(" "));
            }
            let cell = format!("{:^width$}", key.label(), width = CELL_WIDTH);
            let style = if r == cursor_row && c == cursor_col {
                theme::STYLE_CURSOR
            } else {
                match key.category() {
                    KeyCategory::Digit => theme::STYLE_KEY_DIGIT,
                    KeyCategory::Operator => theme::STYLE_KEY_OPERATOR,
                    KeyCategory::Modifier => theme::STYLE_KEY_MODIFIER,
                }
            };
            spans.push(Span::styled(cell, style));
        }
        lines.push(Line::from(spans));
    }

    // Hidden control, only once the secret sequence has been entered.
    if calc.secret_revealed() {
        lines.push(Line::from(""));
        let style = if cursor_row == SECRET_ROW {
            theme::STYLE_CURSOR
        } else {
            theme::STYLE_SECRET
        };
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled("[ Secret ]", style),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Right-align the display over the board; when the value is wider than
/// the board, keep the tail visible (the terminal analog of the
/// original's shrink-to-fit).
fn display_text(display: &str, width: usize) -> String {
    let len = display.chars().count();
    if len > width {
        display.chars().skip(len - width).collect()
    } else {
        format!("{display:>width$}")
    }
}

// ============================================================================
// TESTS
// ============================================================================
