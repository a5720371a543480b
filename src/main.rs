//! Pinpad - terminal passcode entry demo
//!
//! Hosts the pinpad widget in a small demo application: keys are pressed
//! with the keyboard or mouse, the entered code is echoed masked, and a
//! completed code is checked against the expected one - a mismatch shakes
//! the pad.

// Module declarations
mod config;
mod constants;
mod models;
mod pinpad;
mod services;
mod tui;

use anyhow::{bail, Result};
use clap::Parser;

use crate::config::{Config, ThemeMode};
use crate::constants::APP_NAME;
use crate::pinpad::PinpadController;
use crate::tui::PinDisplay;

/// Pinpad - terminal passcode entry demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Target passcode length (defaults to the expected code's length)
    #[arg(short, long, value_name = "N")]
    digits: Option<usize>,

    /// Gap between keys in terminal cells
    #[arg(short, long, value_name = "CELLS")]
    spacing: Option<u16>,

    /// Expected passcode the demo accepts
    #[arg(short, long, value_name = "CODE")]
    code: Option<String>,

    /// Show entered digits instead of masking them
    #[arg(long)]
    no_mask: bool,

    /// Theme preference
    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
    println!("Terminal passcode entry demo");
    println!();

    // Load config; fall back to defaults on a missing or unreadable file
    let config = Config::load().unwrap_or_else(|_| Config::new());

    let num_digits = cli
        .digits
        .or_else(|| cli.code.as_ref().map(|code| code.chars().count()))
        .unwrap_or(config.pinpad.num_digits);
    let expected_code = cli.code.unwrap_or_else(|| default_code(num_digits));
    if expected_code.chars().count() != num_digits {
        bail!(
            "--code has {} characters but --digits asks for {}",
            expected_code.chars().count(),
            num_digits
        );
    }

    let key_spacing = cli.spacing.unwrap_or(config.pinpad.key_spacing);
    let theme_mode = cli.theme.unwrap_or(config.ui.theme_mode);
    let mask = !cli.no_mask && config.ui.mask_input;

    // Wire the widget the way the embedding application would
    let mut controller = PinpadController::new();
    controller.set_num_digits(num_digits);
    controller.set_key_spacing(key_spacing);
    let display = PinDisplay::new(mask);

    let mut app_state = tui::AppState::new(controller, display, expected_code, theme_mode);

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    // Check for errors
    result?;

    Ok(())
}

/// Default expected passcode for a target length: digits cycling from '1'.
fn default_code(num_digits: usize) -> String {
    "1234567890".chars().cycle().take(num_digits).collect()
}
