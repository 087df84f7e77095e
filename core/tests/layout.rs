use std::f64::consts::PI;

use showcase_core::layout::{
    icon_layout, CENTER_OPACITY, CENTER_SCALE, CENTER_Z_INDEX, ORBIT_OPACITY, ORBIT_RADIUS,
    ORBIT_SCALE, ORBIT_Z_INDEX,
};

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

#[test]
fn centered_tile_gets_center_transform() {
    for n in 1..=8 {
        for current in 0..n {
            let layout = icon_layout(current, current, n);
            assert_close(layout.dx, 0.0);
            assert_close(layout.dy, 0.0);
            assert_close(layout.scale, CENTER_SCALE);
            assert_close(layout.opacity, CENTER_OPACITY);
            assert_eq!(layout.z_index, CENTER_Z_INDEX);
        }
    }
}

#[test]
fn six_items_spread_on_fifths_of_the_circle() {
    let n = 6;
    let current = 0;
    for (rank, index) in (1..n).enumerate() {
        let layout = icon_layout(index, current, n);
        let angle = 2.0 * PI * rank as f64 / 5.0;
        assert_close(layout.dx, ORBIT_RADIUS * angle.cos());
        assert_close(layout.dy, ORBIT_RADIUS * angle.sin());
        assert_close(layout.scale, ORBIT_SCALE);
        assert_close(layout.opacity, ORBIT_OPACITY);
        assert_eq!(layout.z_index, ORBIT_Z_INDEX);
    }
}

#[test]
fn rank_skips_the_centered_index() {
    // current = 2 of 6: indices 0,1,3,4,5 take ranks 0..4 in original order.
    let n = 6;
    let current = 2;
    let expected_ranks = [(0usize, 0usize), (1, 1), (3, 2), (4, 3), (5, 4)];
    for (index, rank) in expected_ranks {
        let layout = icon_layout(index, current, n);
        let angle = 2.0 * PI * rank as f64 / 5.0;
        assert_close(layout.dx, ORBIT_RADIUS * angle.cos());
        assert_close(layout.dy, ORBIT_RADIUS * angle.sin());
    }
}

#[test]
fn orbit_tiles_sit_on_the_radius() {
    for n in 2..=8 {
        for current in 0..n {
            for index in (0..n).filter(|&i| i != current) {
                let layout = icon_layout(index, current, n);
                assert_close(layout.dx.hypot(layout.dy), ORBIT_RADIUS);
            }
        }
    }
}

#[test]
fn single_item_degenerates_to_center() {
    let layout = icon_layout(0, 0, 1);
    assert_close(layout.dx, 0.0);
    assert_close(layout.dy, 0.0);
    assert_close(layout.scale, CENTER_SCALE);
}

#[test]
fn layout_is_deterministic() {
    let a = icon_layout(4, 1, 6);
    let b = icon_layout(4, 1, 6);
    assert_eq!(a, b);
}
