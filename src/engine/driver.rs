use crate::color::rgba::Color;
use crate::engine::animation::{Animation, FrameInput};
use crate::engine::config::EngineConfig;
use crate::engine::options::{InMemoryOptions, OptionsStore};
use crate::foundation::core::{BUTTON_COUNT, ButtonSet, Rgb8, micros_to_millis};
use crate::foundation::error::WaveResult;
use crate::layout::distances::DistanceTable;
use crate::layout::pixels::PixelMatrix;
use crate::mask::background::BackgroundMask;
use crate::mask::setting::MaskSetting;
use crate::waves::queue::WaveQueue;
use crate::waves::render::{WaveLayer, WaveRenderer};
use crate::waves::wave::Wave;

/// Button-press wave animation over the fixed 12-button panel.
///
/// One instance owns its wave queue and background mask; everything advances only when
/// [`ButtonWaves::animate`] is called. Per call:
///
/// 1. rising edges of the press state spawn waves,
/// 2. the frame buffer is read into a per-button background layer,
/// 3. live waves render into a transparent layer, re-arming the masks they touch,
/// 4. the wave layer is composited over the masked background and written back,
/// 5. masks decay by the time elapsed since the previous call.
#[derive(Debug)]
pub struct ButtonWaves<S: OptionsStore = InMemoryOptions> {
    matrix: PixelMatrix,
    config: EngineConfig,
    distances: &'static DistanceTable,
    options: S,
    setting: MaskSetting,
    waves: WaveQueue,
    mask: BackgroundMask,
    was_pressed: ButtonSet,
    last_ms: Option<f64>,
}

impl<S: OptionsStore> ButtonWaves<S> {
    /// Build an engine, restoring the mask setting from `options`.
    ///
    /// Buttons in `initially_pressed` count as already held, so they do not spawn a wave on the
    /// first frame. A missing or out-of-range persisted setting is replaced with the default and
    /// written back; a failed write-back is logged and does not fail construction.
    #[tracing::instrument(skip(matrix, options))]
    pub fn new(
        matrix: PixelMatrix,
        config: EngineConfig,
        mut options: S,
        initially_pressed: Option<ButtonSet>,
    ) -> WaveResult<Self> {
        config.validate()?;
        let setting = restore_setting(&mut options);
        Ok(Self {
            matrix,
            config,
            distances: DistanceTable::baked(),
            options,
            setting,
            waves: WaveQueue::new(),
            mask: BackgroundMask::new(config.mask),
            was_pressed: initially_pressed.unwrap_or_default(),
            last_ms: None,
        })
    }

    /// Active mask setting.
    pub fn mask_setting(&self) -> MaskSetting {
        self.setting
    }

    /// Advance the mask setting by one, wrapping, and persist it.
    ///
    /// The new setting takes effect even when persisting fails.
    pub fn cycle_forward(&mut self) -> WaveResult<MaskSetting> {
        self.set_mask_setting(self.setting.next())
    }

    /// Step the mask setting back by one, wrapping, and persist it.
    pub fn cycle_backward(&mut self) -> WaveResult<MaskSetting> {
        self.set_mask_setting(self.setting.prev())
    }

    /// Switch to `setting` and persist it.
    pub fn set_mask_setting(&mut self, setting: MaskSetting) -> WaveResult<MaskSetting> {
        tracing::debug!(from = %self.setting, to = %setting, "mask setting changed");
        self.setting = setting;
        self.options.store_mask_setting(setting.ordinal() as i32)?;
        Ok(setting)
    }

    /// Spawn a wave on `button` at engine time `now_ms`, re-arming that button's mask.
    ///
    /// Buttons outside the panel are ignored.
    pub fn spawn_wave(&mut self, button: usize, color: Color, now_ms: f64) {
        if button >= BUTTON_COUNT {
            return;
        }
        tracing::debug!(button, now_ms, "spawn wave");
        self.mask.reset(button, self.setting);
        if let Some(evicted) = self.waves.push(Wave::new(button, color, now_ms)) {
            tracing::trace!(button = evicted.spawn_button, "evicted oldest wave");
        }
    }

    /// Run one frame: detect presses, render waves and write `frame` in place.
    ///
    /// LED positions past the end of `frame` are skipped.
    #[tracing::instrument(level = "trace", skip(self, frame))]
    pub fn animate(&mut self, frame: &mut [Rgb8], pressed: Option<ButtonSet>, now_micros: u64) {
        let now_ms = micros_to_millis(now_micros);

        let mut background = [Color::TRANSPARENT; BUTTON_COUNT];
        for (button, px) in self.matrix.button_pixels() {
            if let Some(&rgb) = px.positions.first().and_then(|&led| frame.get(led)) {
                background[button] = Color::from_rgb8(rgb);
            }
        }

        if let Some(pressed) = pressed {
            for button in pressed.rising_edges(self.was_pressed).iter() {
                let color = self.config.color.pick(now_micros, background[button]);
                self.spawn_wave(button, color, now_ms);
            }
            self.was_pressed = pressed;
        }

        let output = self.render(&background, now_ms);

        for (button, px) in self.matrix.button_pixels() {
            let rgb = output[button].to_rgb8();
            for &led in &px.positions {
                if let Some(slot) = frame.get_mut(led) {
                    *slot = rgb;
                }
            }
        }
    }

    /// Composite live waves over `background` at `now_ms` and decay the masks.
    ///
    /// This is the frame-buffer-free core of [`ButtonWaves::animate`].
    pub fn render(&mut self, background: &WaveLayer, now_ms: f64) -> WaveLayer {
        let mut layer = [Color::TRANSPARENT; BUTTON_COUNT];
        let renderer = WaveRenderer::new(self.distances, self.config.wave);
        let touched = renderer.render_all(&self.waves, now_ms, &mut layer);
        self.mask.reset_all(touched, self.setting);

        let output =
            std::array::from_fn(|b| self.mask.composite(b, self.setting, layer[b], background[b]));

        let elapsed_ms = self.last_ms.map_or(0.0, |last| (now_ms - last).max(0.0)) as f32;
        self.mask.decay(elapsed_ms, self.setting);
        self.last_ms = Some(now_ms);
        output
    }

    /// Waves currently queued, oldest first. Expired waves stay until overwritten.
    pub fn waves(&self) -> &WaveQueue {
        &self.waves
    }

    /// Background mask state.
    pub fn mask(&self) -> &BackgroundMask {
        &self.mask
    }

    /// Engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Pixel mapping.
    pub fn matrix(&self) -> &PixelMatrix {
        &self.matrix
    }

    /// Options store.
    pub fn options(&self) -> &S {
        &self.options
    }

    /// Press state recorded at the end of the last frame.
    pub fn was_pressed(&self) -> ButtonSet {
        self.was_pressed
    }
}

impl<S: OptionsStore> Animation for ButtonWaves<S> {
    fn animate(&mut self, frame: &mut [Rgb8], input: &FrameInput) {
        ButtonWaves::animate(self, frame, input.pressed, input.now_micros);
    }

    fn parameter_up(&mut self) -> WaveResult<()> {
        self.cycle_forward().map(|_| ())
    }

    fn parameter_down(&mut self) -> WaveResult<()> {
        self.cycle_backward().map(|_| ())
    }
}

fn restore_setting<S: OptionsStore>(options: &mut S) -> MaskSetting {
    let stored = options.load_mask_setting();
    if let Some(setting) = stored.and_then(MaskSetting::from_ordinal) {
        return setting;
    }
    let fallback = MaskSetting::default();
    if let Some(ordinal) = stored {
        tracing::warn!(ordinal, %fallback, "persisted mask setting out of range, resetting");
    }
    if let Err(error) = options.store_mask_setting(fallback.ordinal() as i32) {
        tracing::warn!(%error, %fallback, "could not persist default mask setting");
    }
    fallback
}

#[cfg(test)]
#[path = "../../tests/unit/engine/driver.rs"]
mod tests;
