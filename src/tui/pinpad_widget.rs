//! Pinpad widget rendering the key grid.

use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Key;
use crate::pinpad::PinpadController;
use crate::services::geometry::{compute_grid, GridSpec};
use crate::tui::Theme;

/// Minimum key cell width when the container cannot fit the sub-label.
const MIN_KEY_WIDTH: u16 = 5;
/// Minimum key cell height: symbol line plus borders.
const MIN_KEY_HEIGHT: u16 = 3;

/// Pinpad widget renders the key grid from the controller's layout and
/// geometry configuration.
pub struct PinpadWidget;

impl PinpadWidget {
    /// Render the widget and return the absolute key bounding boxes in
    /// row-major order, for mouse hit-testing by the caller.
    ///
    /// `flash` highlights the key at that index (most recently pressed).
    /// The grid is centered in `area` and shifted by the controller's live
    /// shake offset. When the layout's key count does not match the grid,
    /// the custom geometry is skipped and keys are not drawn individually;
    /// the area is left to the container's own arrangement.
    pub fn render(
        f: &mut Frame,
        area: Rect,
        controller: &PinpadController,
        flash: Option<usize>,
        theme: &Theme,
    ) -> Vec<Rect> {
        let layout = controller.layout();
        let spec = GridSpec::pinpad(controller.key_spacing());

        let Some(geometry) = compute_grid(
            &spec,
            layout.key_count(),
            area.width,
            area.height,
            |max_width, max_height| Self::measure_key(layout.iter(), max_width, max_height),
        ) else {
            return Vec::new();
        };

        // Center the reported grid inside the area, then apply the shake.
        let x_offset = (area.width - geometry.width) / 2;
        let y_offset = (area.height - geometry.height) / 2;
        let shake = controller.shake_offset();
        let origin_x = i32::from(area.x) + i32::from(x_offset) + i32::from(shake);
        let origin_x = origin_x.clamp(0, i32::from(u16::MAX)) as u16;
        let origin_y = area.y + y_offset;

        let screen = f.area();
        let mut hit_rects = Vec::with_capacity(geometry.slots.len());

        for (index, slot) in geometry.slots.iter().enumerate() {
            let cell = Rect::new(
                origin_x.saturating_add(slot.x),
                origin_y.saturating_add(slot.y),
                slot.width,
                slot.height,
            );
            // Clip to the screen; a shaken grid may poke past the edge.
            let visible = cell.intersection(screen);
            if !visible.is_empty() {
                if let Some(key) = layout.key_at(index) {
                    Self::render_key(f, visible, key, flash == Some(index), theme);
                }
            }
            hit_rects.push(cell);
        }

        hit_rects
    }

    /// Measures the representative key cell: the widest symbol/sub-label in
    /// the layout plus borders, clamped to the per-key constraint from the
    /// geometry pass.
    fn measure_key<'a>(
        keys: impl Iterator<Item = &'a Key>,
        max_width: u16,
        max_height: u16,
    ) -> (u16, u16) {
        let mut widest_label: u16 = 1;
        let mut has_sub_label = false;
        for key in keys {
            widest_label = widest_label.max(key.sub_label.chars().count().max(1) as u16);
            has_sub_label |= !key.sub_label.is_empty();
        }

        // Borders on both axes; symbol and sub-label lines stacked inside.
        let natural_width = (widest_label + 2).max(MIN_KEY_WIDTH);
        let natural_height = MIN_KEY_HEIGHT + u16::from(has_sub_label);

        // Keys fill the offered constraint but never shrink below their
        // natural content size; oversized cells are clipped at render time.
        (
            max_width.max(natural_width),
            max_height.max(natural_height),
        )
    }

    /// Render one key cell: bordered block, symbol centered, sub-label
    /// dimmed beneath it.
    fn render_key(f: &mut Frame, cell: Rect, key: &Key, flashed: bool, theme: &Theme) {
        let base_style = if flashed {
            Style::default().fg(theme.accent).bg(theme.highlight_bg)
        } else {
            Style::default().fg(theme.text).bg(theme.background)
        };

        let mut lines = vec![Line::from(Span::styled(
            key.symbol.to_string(),
            base_style.add_modifier(Modifier::BOLD),
        ))];
        if !key.sub_label.is_empty() && cell.height >= 4 {
            lines.push(Line::from(Span::styled(
                key.sub_label.clone(),
                Style::default().fg(theme.text_muted),
            )));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if flashed { theme.accent } else { theme.primary }))
            .style(Style::default().bg(theme.background));

        let paragraph = Paragraph::new(lines).centered().block(block);
        f.render_widget(paragraph, cell);
    }

    /// Finds the key index under a screen position, given the rects returned
    /// by the last render.
    #[must_use]
    pub fn hit_key(hit_rects: &[Rect], position: Position) -> Option<usize> {
        hit_rects.iter().position(|rect| rect.contains(position))
    }
}
