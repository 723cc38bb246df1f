pub use kurbo::Point;

/// Number of buttons on the panel.
pub const BUTTON_COUNT: usize = 12;

//     2 3 4  5  6  7 8
// 1  | | | |  |P2|P3|P4
//1.5 |L|D| |P1|  |  |
// 2  | | |R|  |K2|K3|K4
//2.5 | | | |K1|  |  |
//3.5 | | | |Up|  |  |
/// Panel coordinates of every button, indexed by button index.
pub const BUTTON_COORDS: [Point; BUTTON_COUNT] = [
    Point::new(2.0, 1.5), // LEFT
    Point::new(3.0, 1.5), // DOWN
    Point::new(4.0, 2.0), // RIGHT
    Point::new(5.0, 1.5), // P1
    Point::new(6.0, 1.0), // P2
    Point::new(7.0, 1.0), // P3
    Point::new(8.0, 1.0), // P4
    Point::new(8.0, 2.0), // K4
    Point::new(7.0, 2.0), // K3
    Point::new(6.0, 2.0), // K2
    Point::new(5.0, 2.5), // K1
    Point::new(5.0, 3.5), // UP
];

/// 8-bit RGB triple as stored in the LED frame buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// All channels off.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Build a triple from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Convert a reading of the external microsecond clock to engine milliseconds.
pub fn micros_to_millis(micros: u64) -> f64 {
    micros as f64 / 1000.0
}

/// Set of buttons, one bit per button index.
///
/// Used both for the per-frame press state and for the set of buttons a wave touched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ButtonSet(u32);

impl ButtonSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Build a set from button indices; indices outside the panel are ignored.
    pub fn from_buttons<I: IntoIterator<Item = usize>>(buttons: I) -> Self {
        buttons.into_iter().fold(Self::EMPTY, Self::with)
    }

    /// Return a copy with `button` added.
    pub fn with(self, button: usize) -> Self {
        if button < BUTTON_COUNT {
            Self(self.0 | (1 << button))
        } else {
            self
        }
    }

    /// Add `button` in place.
    pub fn insert(&mut self, button: usize) {
        *self = self.with(button);
    }

    /// Whether `button` is in the set.
    pub fn contains(self, button: usize) -> bool {
        button < BUTTON_COUNT && self.0 & (1 << button) != 0
    }

    /// Buttons present in `self` but absent from `previous`.
    pub fn rising_edges(self, previous: Self) -> Self {
        Self(self.0 & !previous.0)
    }

    /// Union of both sets.
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Whether no button is present.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of buttons present.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Raw bitmask.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Button indices in ascending order.
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..BUTTON_COUNT).filter(move |&i| self.contains(i))
    }
}

impl FromIterator<usize> for ButtonSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::from_buttons(iter)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
