//! foxcalc CLI
//!
//! Launches the terminal calculator. The application itself is entirely
//! interactive; the CLI surface is just the launcher.

use std::process::ExitCode;

use clap::Parser;

#[derive(Parser)]
#[command(name = "foxcalc")]
#[command(about = "Two-screen terminal calculator with a hidden surprise")]
#[command(version)]
struct Cli {
    /// Skip the welcome screen and start on the calculator
    #[arg(long)]
    keypad: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match foxcalc::tui::run::run(cli.keypad) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
