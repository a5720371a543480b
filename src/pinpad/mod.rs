//! Passcode entry state machine and its collaborator interfaces.
//!
//! [`PinpadController`] owns the key layout, the passcode buffer and the
//! accumulate/delete/reset/fail/complete transitions. Presentation is pushed
//! through an optional [`DisplaySink`]; completion and help events are pushed
//! through an optional [`HostCallback`]. Absent collaborators simply drop
//! their events.
//!
//! All operations are synchronous and infallible: invalid input degrades to
//! a no-op rather than an error. The controller is single-threaded state;
//! drive it from the thread that delivers input events.

pub mod animation;

pub use animation::ShakeAnimation;

use crate::constants::{DEFAULT_KEY_SPACING, DEFAULT_NUM_DIGITS};
use crate::models::{Key, KeyLayout};

/// Receives per-character display deltas from the controller.
///
/// Implemented by the presentation collaborator (e.g. [`crate::tui::PinDisplay`]).
pub trait DisplaySink {
    /// Informs the sink of the target passcode length. No-op permitted.
    fn set_digit_count(&mut self, digits: usize);

    /// Appends one entered symbol to the visible representation.
    fn on_append_char(&mut self, symbol: char);

    /// Removes the last visible symbol. Only invoked when at least one
    /// symbol is present.
    fn on_delete_char(&mut self);

    /// Clears the visible representation.
    fn on_reset(&mut self);
}

/// Receives completion and help notifications from the controller.
///
/// Implemented by the embedding application.
pub trait HostCallback {
    /// Invoked exactly once per completed entry, with a passcode of exactly
    /// the configured target length.
    fn on_passcode_complete(&mut self, passcode: &str);

    /// Invoked on every help key press, regardless of buffer state.
    fn on_help_request(&mut self);
}

/// The pinpad state machine.
///
/// Holds the twelve-key layout, the current passcode buffer and the geometry
/// configuration consumed by the widget on each layout pass. The buffer
/// length never exceeds the target digit count; once full, further literal
/// presses are absorbed until [`PinpadController::reset`] is called.
pub struct PinpadController {
    layout: KeyLayout,
    passcode: String,
    num_digits: usize,
    key_spacing: u16,
    display: Option<Box<dyn DisplaySink>>,
    callback: Option<Box<dyn HostCallback>>,
    shake: Option<ShakeAnimation>,
    pending_pulse: bool,
}

impl PinpadController {
    /// Creates a controller with the default telephone layout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_layout(KeyLayout::telephone())
    }

    /// Creates a controller over a custom key layout.
    ///
    /// The layout must not assign the reserved delete/help sentinels as
    /// literal symbols; sentinel handling takes precedence and would shadow
    /// such keys.
    #[must_use]
    pub fn with_layout(layout: KeyLayout) -> Self {
        Self {
            layout,
            passcode: String::new(),
            num_digits: DEFAULT_NUM_DIGITS,
            key_spacing: DEFAULT_KEY_SPACING,
            display: None,
            callback: None,
            shake: None,
            pending_pulse: false,
        }
    }

    /// The key layout, row-major.
    #[must_use]
    pub fn layout(&self) -> &KeyLayout {
        &self.layout
    }

    /// Target passcode length.
    #[must_use]
    pub fn num_digits(&self) -> usize {
        self.num_digits
    }

    /// Sets the target passcode length and informs the display sink.
    ///
    /// If the buffer already exceeds the new target, it is reset to keep the
    /// length invariant.
    pub fn set_num_digits(&mut self, digits: usize) {
        self.num_digits = digits;
        if self.passcode.chars().count() > digits {
            self.reset();
        }
        if let Some(display) = self.display.as_mut() {
            display.set_digit_count(digits);
        }
    }

    /// Inter-key gap used by the geometry pass.
    #[must_use]
    pub fn key_spacing(&self) -> u16 {
        self.key_spacing
    }

    /// Sets the inter-key gap. Consumed on the next layout pass.
    pub fn set_key_spacing(&mut self, spacing: u16) {
        self.key_spacing = spacing;
    }

    /// Number of symbols currently entered.
    #[must_use]
    pub fn entered_len(&self) -> usize {
        self.passcode.chars().count()
    }

    /// Installs the display sink, replacing any previous one, and forwards
    /// the current digit count to it.
    pub fn set_display_sink(&mut self, mut sink: Box<dyn DisplaySink>) {
        sink.set_digit_count(self.num_digits);
        self.display = Some(sink);
    }

    /// Removes the display sink; subsequent display events are dropped.
    #[allow(dead_code)]
    pub fn clear_display_sink(&mut self) {
        self.display = None;
    }

    /// Installs the host callback, replacing any previous one.
    pub fn set_host_callback(&mut self, callback: Box<dyn HostCallback>) {
        self.callback = Some(callback);
    }

    /// Removes the host callback; subsequent host events are dropped.
    #[allow(dead_code)]
    pub fn clear_host_callback(&mut self) {
        self.callback = None;
    }

    /// Handles a press of the key at a row-major layout index.
    ///
    /// Unknown indices are ignored. Returns true if a key was resolved.
    pub fn handle_key_at(&mut self, index: usize) -> bool {
        let Some(key) = self.layout.key_at(index).cloned() else {
            return false;
        };
        self.handle_key_press(&key);
        true
    }

    /// Handles a press of a key carrying `symbol`, if the layout has one.
    ///
    /// Returns the row-major index of the matched key.
    pub fn press_symbol(&mut self, symbol: char) -> Option<usize> {
        let index = self.layout.position_of(symbol)?;
        self.handle_key_at(index);
        Some(index)
    }

    /// Handles a key press.
    ///
    /// Sentinel symbols are resolved before literal interpretation: delete
    /// pops the last symbol (no-op on an empty buffer), help notifies the
    /// host without touching the buffer. A literal symbol is appended unless
    /// the buffer is already at the target length; reaching the target
    /// length notifies the host exactly once. The buffer then stays full
    /// until [`PinpadController::reset`].
    pub fn handle_key_press(&mut self, key: &Key) {
        if key.is_delete() {
            if !self.passcode.is_empty() {
                self.passcode.pop();
                if let Some(display) = self.display.as_mut() {
                    display.on_delete_char();
                }
            }
        } else if key.is_help() {
            if let Some(callback) = self.callback.as_mut() {
                callback.on_help_request();
            }
        } else if self.entered_len() < self.num_digits {
            self.passcode.push(key.symbol);
            if let Some(display) = self.display.as_mut() {
                display.on_append_char(key.symbol);
            }
            if self.entered_len() == self.num_digits {
                if let Some(callback) = self.callback.as_mut() {
                    callback.on_passcode_complete(&self.passcode);
                }
            }
        }
        // Buffer already full: extra literal taps are absorbed so completion
        // cannot fire twice before the host resets.
    }

    /// Clears the passcode buffer. Idempotent.
    pub fn reset(&mut self) {
        self.passcode.clear();
        if let Some(display) = self.display.as_mut() {
            display.on_reset();
        }
    }

    /// Signals a failed passcode: optionally resets the buffer, then starts
    /// the shake animation and arms a feedback pulse.
    ///
    /// Fire-and-forget: the animation runs on render ticks and nothing
    /// blocks here. A second call during an in-flight shake restarts it.
    pub fn fail(&mut self, reset: bool) {
        if reset {
            self.reset();
        }
        self.shake = Some(ShakeAnimation::start());
        self.pending_pulse = true;
    }

    /// Current horizontal shake displacement in cells. Zero when idle.
    #[must_use]
    pub fn shake_offset(&self) -> i16 {
        self.shake.as_ref().map_or(0, ShakeAnimation::offset)
    }

    /// Whether a shake animation is in flight.
    #[allow(dead_code)]
    #[must_use]
    pub fn is_shaking(&self) -> bool {
        self.shake.is_some()
    }

    /// Advances time-based state: drops the shake once it has run out.
    /// Call once per frame from the event loop.
    pub fn tick(&mut self) {
        if self.shake.is_some_and(|shake| shake.is_finished()) {
            self.shake = None;
        }
    }

    /// Takes the armed feedback pulse, if any. The embedder drains this once
    /// per frame and emits its platform feedback (e.g. a terminal bell).
    pub fn take_feedback_pulse(&mut self) -> bool {
        std::mem::take(&mut self.pending_pulse)
    }
}

impl Default for PinpadController {
    fn default() -> Self {
        Self::new()
    }
}
