use std::sync::LazyLock;

use crate::foundation::core::{BUTTON_COORDS, BUTTON_COUNT, Point};

const PAIR_COUNT: usize = BUTTON_COUNT * (BUTTON_COUNT - 1) / 2;

static BAKED: LazyLock<DistanceTable> =
    LazyLock::new(|| DistanceTable::from_coords(&BUTTON_COORDS));

/// Symmetric Euclidean distances between every pair of buttons.
///
/// Only the upper triangle (`i < j`) is stored; the diagonal is zero by convention.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceTable {
    upper: [f32; PAIR_COUNT],
}

impl DistanceTable {
    /// Process-wide table built from [`BUTTON_COORDS`] on first use.
    pub fn baked() -> &'static Self {
        &BAKED
    }

    /// Build a table for an arbitrary placement of the panel's buttons.
    pub fn from_coords(coords: &[Point; BUTTON_COUNT]) -> Self {
        let mut upper = [0.0; PAIR_COUNT];
        for i in 0..BUTTON_COUNT {
            for j in (i + 1)..BUTTON_COUNT {
                upper[linear_index(i, j)] = coords[i].distance(coords[j]) as f32;
            }
        }
        Self { upper }
    }

    /// Distance between buttons `i` and `j`, in panel units.
    ///
    /// Both indices must be below [`BUTTON_COUNT`].
    pub fn distance(&self, i: usize, j: usize) -> f32 {
        debug_assert!(i < BUTTON_COUNT && j < BUTTON_COUNT, "button ({i}, {j}) off panel");
        match i.cmp(&j) {
            std::cmp::Ordering::Equal => 0.0,
            std::cmp::Ordering::Less => self.upper[linear_index(i, j)],
            std::cmp::Ordering::Greater => self.upper[linear_index(j, i)],
        }
    }
}

// Row-major offset of (i, j) in the packed upper triangle; requires i < j.
const fn linear_index(i: usize, j: usize) -> usize {
    let n = BUTTON_COUNT;
    PAIR_COUNT - (n - i) * (n - i - 1) / 2 + j - i - 1
}

#[cfg(test)]
#[path = "../../tests/unit/layout/distances.rs"]
mod tests;
