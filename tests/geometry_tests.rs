//! Integration tests for the grid geometry pass.

use pinpad::services::geometry::{compute_grid, hit_test, GridSpec};

#[test]
fn test_reported_size_matches_formula() {
    // W=60, H=40, padding=2, spacing=3, child measured at its natural 7x3.
    let spec = GridSpec::pinpad(3).with_padding(2);
    let geometry = compute_grid(&spec, 12, 60, 40, |_, _| (7, 3)).unwrap();

    // width  = 2*padding + spacing*(cols+1) + cw*cols = 4 + 12 + 21 = 37
    // height = 2*padding + spacing*(rows+1) + ch*rows = 4 + 15 + 12 = 31
    assert_eq!(geometry.width, 37);
    assert_eq!(geometry.height, 31);
    assert_eq!(geometry.child_width, 7);
    assert_eq!(geometry.child_height, 3);
}

#[test]
fn test_key_bounding_boxes() {
    let spec = GridSpec::pinpad(3).with_padding(2);
    let geometry = compute_grid(&spec, 12, 60, 40, |_, _| (7, 3)).unwrap();

    for (index, slot) in geometry.slots.iter().enumerate() {
        let col = (index % 3) as u16;
        let row = (index / 3) as u16;
        // left = padding + spacing*(col+1) + cw*col
        assert_eq!(slot.x, 2 + 3 * (col + 1) + 7 * col, "key {index} x");
        assert_eq!(slot.y, 2 + 3 * (row + 1) + 3 * row, "key {index} y");
        // right/bottom = left/top + child size
        assert_eq!(slot.right(), slot.x + 7);
        assert_eq!(slot.bottom(), slot.y + 3);
    }
}

#[test]
fn test_measure_constraint_divides_available_space() {
    // W=80: available = 80 - spacing*(3+1) = 76, per-key constraint = 25.
    // H=41: available = 41 - spacing*(4+1) = 36, per-key constraint = 9.
    let spec = GridSpec::pinpad(1);
    let geometry = compute_grid(&spec, 12, 80, 41, |w, h| {
        assert_eq!((w, h), (25, 9));
        (w, h)
    })
    .unwrap();

    // Reported size re-assembles from the measured child, clamped to the container.
    assert_eq!(geometry.width, (1 * 4 + 25 * 3).min(80));
    assert_eq!(geometry.height, 41);
}

#[test]
fn test_non_grid_key_count_defers_to_container() {
    let spec = GridSpec::pinpad(1);
    for key_count in [0, 1, 11, 13, 24] {
        assert!(
            compute_grid(&spec, key_count, 80, 40, |w, h| (w, h)).is_none(),
            "{key_count} keys must fall back"
        );
    }
}

#[test]
fn test_hit_test_round_trip() {
    let spec = GridSpec::pinpad(2);
    let geometry = compute_grid(&spec, 12, 50, 36, |_, _| (8, 4)).unwrap();

    // The center of every slot resolves back to its own index.
    for (index, slot) in geometry.slots.iter().enumerate() {
        let center_x = slot.x + slot.width / 2;
        let center_y = slot.y + slot.height / 2;
        assert_eq!(hit_test(&geometry.slots, center_x, center_y), Some(index));
    }

    // Points in the outer gap hit nothing.
    assert_eq!(hit_test(&geometry.slots, 0, 0), None);
    assert_eq!(hit_test(&geometry.slots, 1, 1), None);
}
