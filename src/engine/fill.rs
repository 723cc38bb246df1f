use crate::engine::animation::{Animation, FrameInput};
use crate::foundation::core::Rgb8;
use crate::layout::pixels::PixelMatrix;

/// Default tint painted under the waves.
pub const DEFAULT_FILL: Rgb8 = Rgb8::new(48, 48, 48);

/// Paints one constant color on every mapped LED.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticFill {
    matrix: PixelMatrix,
    color: Rgb8,
}

impl StaticFill {
    /// Fill every LED of `matrix` with `color`.
    pub fn new(matrix: PixelMatrix, color: Rgb8) -> Self {
        Self { matrix, color }
    }

    /// Painted color.
    pub fn color(&self) -> Rgb8 {
        self.color
    }
}

impl Animation for StaticFill {
    fn animate(&mut self, frame: &mut [Rgb8], _input: &FrameInput) {
        let leds = self.matrix.pixels.iter().flatten().flat_map(|px| &px.positions);
        for &led in leds {
            if let Some(slot) = frame.get_mut(led) {
                *slot = self.color;
            }
        }
    }
}
