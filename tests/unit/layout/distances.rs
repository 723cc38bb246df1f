use super::*;

#[test]
fn linear_index_packs_upper_triangle_exactly() {
    let mut seen = [false; PAIR_COUNT];
    let mut expected = 0;
    for i in 0..BUTTON_COUNT {
        for j in (i + 1)..BUTTON_COUNT {
            let idx = linear_index(i, j);
            assert_eq!(idx, expected);
            assert!(!seen[idx]);
            seen[idx] = true;
            expected += 1;
        }
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn table_is_symmetric_with_zero_diagonal() {
    let t = DistanceTable::baked();
    for i in 0..BUTTON_COUNT {
        assert_eq!(t.distance(i, i), 0.0);
        for j in 0..BUTTON_COUNT {
            assert_eq!(t.distance(i, j), t.distance(j, i));
        }
    }
}

#[test]
fn matches_direct_euclidean_distance() {
    let t = DistanceTable::baked();
    for i in 0..BUTTON_COUNT {
        for j in 0..BUTTON_COUNT {
            let dx = BUTTON_COORDS[j].x - BUTTON_COORDS[i].x;
            let dy = BUTTON_COORDS[j].y - BUTTON_COORDS[i].y;
            let direct = dx.hypot(dy) as f32;
            assert!((t.distance(i, j) - direct).abs() < 1e-6, "({i}, {j})");
        }
    }
}

#[test]
fn known_panel_distances() {
    let t = DistanceTable::baked();
    // LEFT -> DOWN are one unit apart on the same row.
    assert_eq!(t.distance(0, 1), 1.0);
    // P1 -> K1 straight down one unit.
    assert_eq!(t.distance(3, 10), 1.0);
    // LEFT -> P4 spans the whole panel.
    assert!((t.distance(0, 6) - 6.0f32.hypot(0.5)).abs() < 1e-6);
}

#[test]
fn custom_coordinates_build_their_own_table() {
    let mut coords = BUTTON_COORDS;
    coords[1] = Point::new(2.0, 4.5);
    let t = DistanceTable::from_coords(&coords);
    assert_eq!(t.distance(1, 0), 3.0);
    assert_ne!(&t, DistanceTable::baked());
}
