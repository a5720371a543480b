//! Passcode echo display.
//!
//! The presentation collaborator fed by the controller: a shared-handle
//! text display implementing [`DisplaySink`]. The controller owns one handle
//! and pushes per-character deltas; the embedder keeps a clone to render the
//! current echo. Entered symbols are masked by default.

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::pinpad::DisplaySink;
use crate::tui::Theme;

#[derive(Debug, Default)]
struct PinDisplayState {
    echo: String,
    digit_count: usize,
    mask: bool,
}

/// Shared passcode echo buffer with masked rendering.
///
/// Cloning yields another handle to the same buffer; hand one clone to
/// [`crate::pinpad::PinpadController::set_display_sink`] and keep one for
/// rendering.
#[derive(Debug, Clone, Default)]
pub struct PinDisplay {
    state: Rc<RefCell<PinDisplayState>>,
}

impl PinDisplay {
    /// Creates an empty display. `mask` replaces entered symbols with
    /// bullets.
    #[must_use]
    pub fn new(mask: bool) -> Self {
        Self {
            state: Rc::new(RefCell::new(PinDisplayState {
                echo: String::new(),
                digit_count: 0,
                mask,
            })),
        }
    }

    /// Number of symbols currently shown.
    #[allow(dead_code)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.borrow().echo.chars().count()
    }

    /// Whether the echo is empty.
    #[allow(dead_code)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.borrow().echo.is_empty()
    }

    /// The visible representation: one glyph per entered symbol, with
    /// placeholder slots up to the digit count.
    #[must_use]
    pub fn visible_text(&self) -> String {
        let state = self.state.borrow();
        let entered = state.echo.chars().count();
        let mut glyphs: Vec<char> = if state.mask {
            std::iter::repeat('•').take(entered).collect()
        } else {
            state.echo.chars().collect()
        };
        for _ in entered..state.digit_count {
            glyphs.push('_');
        }

        let mut text = String::new();
        for (i, glyph) in glyphs.iter().enumerate() {
            if i > 0 {
                text.push(' ');
            }
            text.push(*glyph);
        }
        text
    }

    /// Render the echo centered inside a bordered block.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let line = Line::from(Span::styled(
            self.visible_text(),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        ));

        let display = Paragraph::new(line)
            .centered()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Passcode ")
                    .style(Style::default().bg(theme.background).fg(theme.primary)),
            );

        f.render_widget(display, area);
    }
}

impl DisplaySink for PinDisplay {
    fn set_digit_count(&mut self, digits: usize) {
        self.state.borrow_mut().digit_count = digits;
    }

    fn on_append_char(&mut self, symbol: char) {
        self.state.borrow_mut().echo.push(symbol);
    }

    fn on_delete_char(&mut self) {
        self.state.borrow_mut().echo.pop();
    }

    fn on_reset(&mut self) {
        self.state.borrow_mut().echo.clear();
    }
}
