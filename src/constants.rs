//! Application-wide constants.
//!
//! This module defines the reserved key sentinels, the fixed grid dimensions,
//! the failure-animation parameters, and application naming and defaults.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Pinpad";

/// Reserved symbol for the delete key (⌫). Never a literal passcode character.
pub const KEY_DELETE: char = '\u{232B}';

/// Reserved symbol for the help key (❓). Never a literal passcode character.
pub const KEY_HELP: char = '\u{2753}';

/// Number of key columns in the pinpad grid.
pub const NUM_COLS: u16 = 3;

/// Number of key rows in the pinpad grid.
pub const NUM_ROWS: u16 = 4;

/// Total key count required for the custom grid layout to apply.
pub const NUM_KEYS: usize = (NUM_COLS * NUM_ROWS) as usize;

/// Duration of the failure shake animation in milliseconds.
pub const SHAKE_DURATION_MS: u64 = 300;

/// Number of full sine cycles the shake completes over its duration.
pub const SHAKE_CYCLES: f32 = 3.0;

/// Peak horizontal shake displacement in terminal cells.
pub const SHAKE_AMPLITUDE: u16 = 2;

/// Default passcode length.
pub const DEFAULT_NUM_DIGITS: usize = 4;

/// Default inter-key gap in terminal cells.
pub const DEFAULT_KEY_SPACING: u16 = 1;
