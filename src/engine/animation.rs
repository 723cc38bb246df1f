use crate::foundation::core::{ButtonSet, Rgb8};
use crate::foundation::error::WaveResult;

/// Everything an animation sees about the current frame besides the frame buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Reading of the external monotonic microsecond clock.
    pub now_micros: u64,
    /// Buttons held this frame, or `None` for display-only use.
    pub pressed: Option<ButtonSet>,
}

impl FrameInput {
    /// Input for a frame at `now_micros` with the given press state.
    pub fn new(now_micros: u64, pressed: Option<ButtonSet>) -> Self {
        Self {
            now_micros,
            pressed,
        }
    }
}

/// A layer of the LED show, advanced once per rendered frame by an external scheduler.
///
/// Animations run in sequence over the same frame buffer; later layers read what earlier ones
/// wrote.
pub trait Animation {
    /// Read and overwrite `frame` for this frame.
    fn animate(&mut self, frame: &mut [Rgb8], input: &FrameInput);

    /// Step the animation's user parameter forward.
    fn parameter_up(&mut self) -> WaveResult<()> {
        Ok(())
    }

    /// Step the animation's user parameter backward.
    fn parameter_down(&mut self) -> WaveResult<()> {
        Ok(())
    }
}
