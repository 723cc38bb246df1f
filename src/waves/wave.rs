use crate::color::rgba::Color;

/// One propagating ring, spawned by a button press.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Wave {
    /// Button the ring is centered on.
    pub spawn_button: usize,
    /// Ring color at full strength.
    pub color: Color,
    /// Engine time of the press, in milliseconds.
    pub spawn_ms: f64,
}

impl Wave {
    /// New wave centered on `spawn_button`.
    pub fn new(spawn_button: usize, color: Color, spawn_ms: f64) -> Self {
        Self {
            spawn_button,
            color,
            spawn_ms,
        }
    }

    /// Milliseconds elapsed since the wave spawned.
    pub fn age_ms(&self, now_ms: f64) -> f32 {
        (now_ms - self.spawn_ms) as f32
    }
}
