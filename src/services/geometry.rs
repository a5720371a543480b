//! Grid geometry for the pinpad.
//!
//! Computes equal-size key slots from the container size, a uniform
//! inter-key gap and a measured representative child. All units are terminal
//! cells. The algorithm only applies when the rendered key count matches the
//! grid exactly; otherwise layout defers to the embedding container.

use ratatui::layout::Rect;

use crate::constants::{NUM_COLS, NUM_ROWS};

/// Grid parameters consumed by the measurement and layout passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    /// Number of key columns.
    pub cols: u16,
    /// Number of key rows.
    pub rows: u16,
    /// Uniform gap between keys and around the grid edge.
    pub spacing: u16,
    /// Outer padding inside the container, before the first gap.
    pub padding: u16,
}

impl GridSpec {
    /// Creates the standard 3×4 pinpad grid with the given spacing.
    #[must_use]
    pub const fn pinpad(spacing: u16) -> Self {
        Self {
            cols: NUM_COLS,
            rows: NUM_ROWS,
            spacing,
            padding: 0,
        }
    }

    /// Sets the outer padding.
    #[allow(dead_code)]
    #[must_use]
    pub const fn with_padding(mut self, padding: u16) -> Self {
        self.padding = padding;
        self
    }

    /// Fixed per-axis chrome: padding on both sides plus one gap more than
    /// there are keys on the axis.
    fn chrome(&self, axis_count: u16) -> u16 {
        (2 * self.padding).saturating_add(self.spacing.saturating_mul(axis_count + 1))
    }
}

/// Result of a grid measurement pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridGeometry {
    /// Total reported width, clamped to the container.
    pub width: u16,
    /// Total reported height, clamped to the container.
    pub height: u16,
    /// Measured per-key width. Identical for all slots.
    pub child_width: u16,
    /// Measured per-key height. Identical for all slots.
    pub child_height: u16,
    /// Key bounding boxes in row-major order, relative to the container origin.
    pub slots: Vec<Rect>,
}

/// Computes the grid geometry for `key_count` keys inside a container.
///
/// `measure_child` receives the per-key width/height constraint derived from
/// the container and returns the measured child size; every slot is laid out
/// at that size. Returns `None` when the key count does not match the grid
/// (or the grid is degenerate), in which case the caller falls back to the
/// container's default sizing.
pub fn compute_grid<F>(
    spec: &GridSpec,
    key_count: usize,
    container_width: u16,
    container_height: u16,
    measure_child: F,
) -> Option<GridGeometry>
where
    F: FnOnce(u16, u16) -> (u16, u16),
{
    if spec.cols == 0 || spec.rows == 0 {
        return None;
    }
    if key_count != (spec.cols as usize) * (spec.rows as usize) {
        return None;
    }

    let chrome_width = spec.chrome(spec.cols);
    let chrome_height = spec.chrome(spec.rows);

    // Per-key constraint from the space left after padding and gaps.
    let constraint_width = container_width.saturating_sub(chrome_width) / spec.cols;
    let constraint_height = container_height.saturating_sub(chrome_height) / spec.rows;

    // One representative child is measured; all keys share its size.
    let (child_width, child_height) = measure_child(constraint_width, constraint_height);

    let width = chrome_width
        .saturating_add(child_width.saturating_mul(spec.cols))
        .min(container_width);
    let height = chrome_height
        .saturating_add(child_height.saturating_mul(spec.rows))
        .min(container_height);

    let mut slots = Vec::with_capacity(key_count);
    for index in 0..key_count as u16 {
        let col = index % spec.cols;
        let row = index / spec.cols;
        let x = spec
            .padding
            .saturating_add(spec.spacing.saturating_mul(col + 1))
            .saturating_add(child_width.saturating_mul(col));
        let y = spec
            .padding
            .saturating_add(spec.spacing.saturating_mul(row + 1))
            .saturating_add(child_height.saturating_mul(row));
        slots.push(Rect::new(x, y, child_width, child_height));
    }

    Some(GridGeometry {
        width,
        height,
        child_width,
        child_height,
        slots,
    })
}

/// Finds the row-major index of the slot containing a point, if any.
#[allow(dead_code)]
#[must_use]
pub fn hit_test(slots: &[Rect], x: u16, y: u16) -> Option<usize> {
    slots
        .iter()
        .position(|slot| slot.contains(ratatui::layout::Position::new(x, y)))
}
