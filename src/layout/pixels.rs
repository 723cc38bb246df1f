use serde::{Deserialize, Serialize};

use crate::foundation::core::{BUTTON_COUNT, ButtonSet};
use crate::foundation::error::{WaveError, WaveResult};

/// One logical position on the panel and the LEDs it drives.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pixel {
    /// Button index, or a negative value when no button sits here.
    pub index: i32,
    /// Physical LED positions in the frame buffer.
    pub positions: Vec<usize>,
}

impl Pixel {
    /// Pixel bound to `button` driving `positions`.
    pub fn new(button: usize, positions: Vec<usize>) -> Self {
        Self {
            index: i32::try_from(button).unwrap_or(-1),
            positions,
        }
    }

    /// Position with no associated button.
    pub fn empty() -> Self {
        Self {
            index: -1,
            positions: Vec::new(),
        }
    }

    /// Button index if this pixel maps to one of the panel's buttons.
    pub fn button(&self) -> Option<usize> {
        usize::try_from(self.index)
            .ok()
            .filter(|&i| i < BUTTON_COUNT)
    }
}

/// Column-major grid of logical pixels mapping buttons to LED positions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelMatrix {
    /// Columns of pixels.
    pub pixels: Vec<Vec<Pixel>>,
}

impl PixelMatrix {
    /// Wrap an explicit column layout.
    pub fn new(pixels: Vec<Vec<Pixel>>) -> Self {
        Self { pixels }
    }

    /// One column per button, each driving the LED at the button's own index.
    pub fn one_per_button() -> Self {
        Self::new(
            (0..BUTTON_COUNT)
                .map(|b| vec![Pixel::new(b, vec![b])])
                .collect(),
        )
    }

    /// Every pixel bound to a button, with its button index.
    pub fn button_pixels(&self) -> impl Iterator<Item = (usize, &Pixel)> {
        self.pixels
            .iter()
            .flatten()
            .filter_map(|px| px.button().map(|b| (b, px)))
    }

    /// Smallest frame length that covers every mapped LED.
    pub fn led_count(&self) -> usize {
        self.pixels
            .iter()
            .flatten()
            .flat_map(|px| px.positions.iter().copied())
            .max()
            .map_or(0, |p| p + 1)
    }

    /// Collect a press set from the logical pixels currently held down.
    pub fn pressed_buttons<'a>(pressed: impl IntoIterator<Item = &'a Pixel>) -> ButtonSet {
        pressed.into_iter().filter_map(Pixel::button).collect()
    }

    /// Check that every button pixel drives at least one LED inside a frame of `frame_len`.
    pub fn validate(&self, frame_len: usize) -> WaveResult<()> {
        for (button, px) in self.button_pixels() {
            if px.positions.is_empty() {
                return Err(WaveError::validation(format!(
                    "button {button} is mapped to no LED positions"
                )));
            }
            if let Some(&bad) = px.positions.iter().find(|&&p| p >= frame_len) {
                return Err(WaveError::validation(format!(
                    "button {button} maps to LED {bad}, frame holds {frame_len}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/pixels.rs"]
mod tests;
