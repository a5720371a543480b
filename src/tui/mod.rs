//! Terminal user interface: state, event loop, and widgets.
//!
//! This module contains the main TUI loop, [`AppState`], event handling,
//! and the pinpad widgets using Ratatui.

pub mod pin_display;
pub mod pinpad_widget;
pub mod status_bar;
pub mod theme;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Position, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use crate::config::ThemeMode;
use crate::constants::{APP_NAME, KEY_DELETE, KEY_HELP};
use crate::pinpad::{HostCallback, PinpadController};

// Re-export TUI components
pub use pin_display::PinDisplay;
pub use pinpad_widget::PinpadWidget;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Frames the flash highlight stays on a pressed key.
const FLASH_FRAMES: u8 = 2;

/// Host notification queued by the pinpad callback for the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// The buffer reached the target length with this passcode.
    PasscodeComplete(String),
    /// The help key was pressed.
    HelpRequest,
}

/// Queueing [`HostCallback`] adapter.
///
/// A host typically reacts to completion by resetting or failing the
/// pinpad; doing that from inside the controller call would require
/// reentrant mutation, so the callback enqueues events instead and the event
/// loop applies the reactions after the controller returns.
#[derive(Debug, Clone, Default)]
pub struct HostEvents {
    queue: Rc<RefCell<VecDeque<HostEvent>>>,
}

impl HostEvents {
    /// Takes all queued events in arrival order.
    pub fn drain(&self) -> Vec<HostEvent> {
        self.queue.borrow_mut().drain(..).collect()
    }
}

impl HostCallback for HostEvents {
    fn on_passcode_complete(&mut self, passcode: &str) {
        self.queue
            .borrow_mut()
            .push_back(HostEvent::PasscodeComplete(passcode.to_string()));
    }

    fn on_help_request(&mut self) {
        self.queue.borrow_mut().push_back(HostEvent::HelpRequest);
    }
}

/// Severity of the current status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Neutral information
    Info,
    /// Positive confirmation
    Success,
    /// Failure
    Error,
}

/// Application state for the demo TUI.
pub struct AppState {
    /// The pinpad state machine.
    pub controller: PinpadController,
    /// Render handle for the passcode echo (the controller's display sink).
    pub display: PinDisplay,
    /// The expected demo passcode compared on completion.
    pub expected_code: String,
    /// Resolved theme, refreshed every frame.
    pub theme: Theme,
    /// Configured theme mode.
    pub theme_mode: ThemeMode,
    /// Current status message.
    pub status_message: String,
    /// Severity of the current status message.
    pub status_kind: StatusKind,
    /// Flash highlight: pressed key index and remaining frames.
    pub flash: Option<(usize, u8)>,
    /// Absolute key rects from the last render, for mouse hit-testing.
    pub key_rects: Vec<Rect>,
    /// Set when the user asked to quit.
    pub should_quit: bool,
    host_events: HostEvents,
}

impl AppState {
    /// Wires the controller to the display sink and the host event queue
    /// and creates the initial state.
    #[must_use]
    pub fn new(
        mut controller: PinpadController,
        display: PinDisplay,
        expected_code: String,
        theme_mode: ThemeMode,
    ) -> Self {
        let host_events = HostEvents::default();
        controller.set_display_sink(Box::new(display.clone()));
        controller.set_host_callback(Box::new(host_events.clone()));

        Self {
            controller,
            display,
            expected_code,
            theme: Theme::from_mode(theme_mode),
            theme_mode,
            status_message: String::new(),
            status_kind: StatusKind::Info,
            flash: None,
            key_rects: Vec::new(),
            should_quit: false,
            host_events,
        }
    }

    /// Sets the status message and its severity.
    pub fn set_status(&mut self, kind: StatusKind, message: impl Into<String>) {
        self.status_kind = kind;
        self.status_message = message.into();
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Apply theme based on user preference (Auto detects OS, Dark/Light are explicit)
        state.theme = Theme::from_mode(state.theme_mode);

        // Decrement flash highlight counter
        if let Some((index, frames)) = state.flash {
            state.flash = (frames > 1).then(|| (index, frames - 1));
        }

        // Drop the shake once it has run its course
        state.controller.tick();

        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Feedback pulse armed by fail(): the terminal's haptic stand-in
        if state.controller.take_feedback_pulse() {
            execute!(io::stdout(), crossterm::style::Print('\u{7}'))
                .context("Failed to ring terminal bell")?;
        }

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => handle_key_event(state, key),
                Event::Mouse(mouse) => handle_mouse_event(state, mouse),
                Event::Resize(_, _) => {
                    // Terminal resized, will re-render on next loop
                }
                _ => {}
            }
        }

        // Apply queued host reactions after the controller has returned
        drain_host_events(state);

        // Check if should quit
        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Map a keyboard event onto the pinpad.
fn handle_key_event(state: &mut AppState, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Esc => state.should_quit = true,
        KeyCode::Backspace => press_symbol(state, KEY_DELETE),
        KeyCode::Char(c) => {
            // Literal layout symbols win over the convenience bindings, so
            // custom alphabets can use '?' or 'q' as keys.
            if state.controller.layout().position_of(c).is_some() {
                press_symbol(state, c);
            } else if c == '?' {
                press_symbol(state, KEY_HELP);
            } else if c == 'q' {
                state.should_quit = true;
            }
        }
        _ => {}
    }
}

/// Map a mouse event onto the pinpad via the last rendered key rects.
fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let position = Position::new(mouse.column, mouse.row);
    if let Some(index) = PinpadWidget::hit_key(&state.key_rects, position) {
        state.controller.handle_key_at(index);
        state.flash = Some((index, FLASH_FRAMES));
    }
}

/// Press the key carrying `symbol`, flashing it when matched.
fn press_symbol(state: &mut AppState, symbol: char) {
    if let Some(index) = state.controller.press_symbol(symbol) {
        state.flash = Some((index, FLASH_FRAMES));
    }
}

/// Apply the demo host's reactions to queued pinpad notifications.
fn drain_host_events(state: &mut AppState) {
    for host_event in state.host_events.drain() {
        match host_event {
            HostEvent::PasscodeComplete(code) => {
                if code == state.expected_code {
                    state.set_status(StatusKind::Success, "Access granted");
                    state.controller.reset();
                } else {
                    state.set_status(StatusKind::Error, "Wrong passcode");
                    state.controller.fail(true);
                }
            }
            HostEvent::HelpRequest => {
                let digits = state.controller.num_digits();
                state.set_status(
                    StatusKind::Info,
                    format!("Enter your {digits}-digit code. Backspace deletes the last digit."),
                );
            }
        }
    }
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &mut AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Passcode echo
            Constraint::Min(10),   // Pinpad grid
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);

    state.display.render(f, chunks[1], &state.theme);

    let flash_index = state.flash.map(|(index, _)| index);
    state.key_rects =
        PinpadWidget::render(f, chunks[2], &state.controller, flash_index, &state.theme);

    StatusBar::render(f, chunks[3], state, &state.theme);
}

/// Render title bar with app name and entry progress
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let title = format!(
        " {} - {}/{} ",
        APP_NAME,
        state.controller.entered_len(),
        state.controller.num_digits()
    );

    let title_widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(state.theme.primary)
                .bg(state.theme.background),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}
