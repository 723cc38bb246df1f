//! Reactive light waves for a 12-button LED panel.
//!
//! Pressing a button spawns a colored ring that propagates across the panel at a fixed speed,
//! blended over a background tint whose visibility decays per button according to a selectable
//! [`MaskSetting`].
//!
//! # Frame overview
//!
//! 1. **Detect**: diff the press state against the previous frame; each rising edge spawns a
//!    [`Wave`] into a bounded [`WaveQueue`].
//! 2. **Render**: every live wave is measured against every button through the baked
//!    [`DistanceTable`] and composited into a transient layer with [`Color::over`].
//! 3. **Composite**: the layer is laid over the frame's existing colors, dimmed by the
//!    [`BackgroundMask`].
//! 4. **Decay**: masks fade by the elapsed time until the next wave re-arms them.
//!
//! The engine is single-threaded and call-driven: [`ButtonWaves::animate`] is the only thing
//! that advances it, and every call runs in time bounded by the button count and queue size.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod color;
mod engine;
mod foundation;
mod layout;
mod mask;
mod waves;

pub use color::palette::{RAINBOW, WaveColor, rainbow_pick};
pub use color::rgba::Color;
pub use engine::animation::{Animation, FrameInput};
pub use engine::config::EngineConfig;
pub use engine::driver::ButtonWaves;
pub use engine::fill::{DEFAULT_FILL, StaticFill};
pub use engine::options::{InMemoryOptions, JsonFileOptions, OptionsStore};
pub use foundation::core::{BUTTON_COORDS, BUTTON_COUNT, ButtonSet, Point, Rgb8, micros_to_millis};
pub use foundation::error::{WaveError, WaveResult};
pub use layout::distances::DistanceTable;
pub use layout::pixels::{Pixel, PixelMatrix};
pub use mask::background::{
    BG_BRIGHTNESS, BackgroundMask, MaskConfig, UNTOUCHED, background_coefficient, composite_pixel,
};
pub use mask::setting::{MaskSetting, MaskValues};
pub use waves::queue::{Iter as WaveIter, WaveQueue};
pub use waves::render::{Ring, Touch, WaveLayer, WaveParams, WaveRenderer, bleed_color};
pub use waves::wave::Wave;
