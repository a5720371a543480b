//! Status bar widget for displaying status messages and key hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, StatusKind, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: the current status message (colored by
    /// severity) with the key hints line beneath it.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let message_line = if state.status_message.is_empty() {
            Line::from("")
        } else {
            let color = match state.status_kind {
                StatusKind::Info => theme.text,
                StatusKind::Success => theme.success,
                StatusKind::Error => theme.error,
            };
            Line::from(Span::styled(
                state.status_message.clone(),
                Style::default().fg(color),
            ))
        };

        let status = Paragraph::new(vec![message_line, Self::hints_line(theme)])
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Fixed key hints line.
    fn hints_line(theme: &Theme) -> Line<'static> {
        let hints = [
            ("0-9", "enter"),
            ("Backspace", "delete"),
            ("?", "help"),
            ("Esc", "quit"),
        ];

        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, (key, action)) in hints.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                key,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(action, Style::default().fg(theme.text_muted)));
        }

        Line::from(spans)
    }
}
