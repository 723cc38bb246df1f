use serde::{Deserialize, Serialize};

use crate::color::rgba::Color;

/// Twelve evenly spaced hues used for randomly colored waves.
pub const RAINBOW: [Color; 12] = [
    Color::rgb(1.0, 0.0, 0.0), // red
    Color::rgb(1.0, 0.5, 0.0), // orange
    Color::rgb(1.0, 1.0, 0.0), // yellow
    Color::rgb(0.5, 1.0, 0.0), // lime
    Color::rgb(0.0, 1.0, 0.0), // green
    Color::rgb(0.0, 1.0, 0.5), // seafoam
    Color::rgb(0.0, 1.0, 1.0), // aqua
    Color::rgb(0.0, 0.5, 1.0), // sky blue
    Color::rgb(0.0, 0.0, 1.0), // blue
    Color::rgb(0.5, 0.0, 1.0), // purple
    Color::rgb(1.0, 0.0, 1.0), // pink
    Color::rgb(1.0, 0.0, 0.5), // magenta
];

/// Pick a palette entry from the low 32 bits of the microsecond clock.
pub fn rainbow_pick(now_micros: u64) -> Color {
    let idx = (now_micros as u32).wrapping_mul(11) as usize % RAINBOW.len();
    RAINBOW[idx]
}

/// How a freshly spawned wave chooses its color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaveColor {
    /// Every wave uses the same color.
    Solid(Color),
    /// Clock-keyed pick from [`RAINBOW`].
    #[default]
    Rainbow,
    /// Inverse of the spawn button's current background pixel.
    Inverted,
}

impl WaveColor {
    /// Resolve the color of a wave spawned at `now_micros` on a button currently showing
    /// `background`.
    pub fn pick(self, now_micros: u64, background: Color) -> Color {
        match self {
            Self::Solid(c) => c,
            Self::Rainbow => rainbow_pick(now_micros),
            Self::Inverted => background.flip().with_alpha(1.0),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/palette.rs"]
mod tests;
