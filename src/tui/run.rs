//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal — all intelligence lives in the pure layers.
//!
//! The loop is fully synchronous: one blocking read, one dispatch, one
//! redraw. Nothing in this domain runs in the background, so there are
//! no threads or channels.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::key::{Key, Operator};

use super::state::{Action, App, Transition};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveRight),
        KeyCode::Enter => Some(Action::Activate),
        KeyCode::Esc => Some(Action::Back),

        // Calculator buttons
        KeyCode::Char(c @ '0'..='9') => Some(Action::Press(Key::Digit(c as u8 - b'0'))),
        KeyCode::Char('+') => Some(Action::Press(Key::Op(Operator::Add))),
        KeyCode::Char('-') => Some(Action::Press(Key::Op(Operator::Subtract))),
        KeyCode::Char('*') | KeyCode::Char('x') => Some(Action::Press(Key::Op(Operator::Multiply))),
        KeyCode::Char('/') => Some(Action::Press(Key::Op(Operator::Divide))),
        KeyCode::Char('=') => Some(Action::Press(Key::Equals)),
        KeyCode::Char('.') => Some(Action::Press(Key::Decimal)),
        KeyCode::Char('%') => Some(Action::Press(Key::Percent)),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Action::Press(Key::Clear)),
        KeyCode::Char('n') => Some(Action::Press(Key::ToggleSign)),

        KeyCode::Char('q') => Some(Action::Quit),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the TUI event loop until the user quits.
///
/// `start_on_keypad` skips the welcome screen (the `--keypad` flag).
pub fn run(start_on_keypad: bool) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = if start_on_keypad {
        App::on_keypad()
    } else {
        App::new()
    };

    loop {
        // Render
        terminal.draw(|frame| render(&app, frame))?;

        // Check quit flag
        if app.should_quit {
            break;
        }

        // Block on the next terminal event
        match event::read()? {
            Event::Key(key) => {
                if let Some(action) = map_key(key) {
                    let screen = std::mem::take(&mut app.screen);
                    match update(screen, &action, &mut app.calc) {
                        Transition::Screen(new_screen) => {
                            app.screen = new_screen;
                        }
                        Transition::Quit => {
                            app.should_quit = true;
                        }
                    }
                }
            }
            _ => {} // ignore mouse, resize, etc.
        }
    }

    restore_terminal()?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
