use serde::{Deserialize, Serialize};

use crate::color::rgba::Color;
use crate::foundation::core::{BUTTON_COUNT, ButtonSet};
use crate::mask::setting::MaskSetting;

/// Peak brightness of the background tint.
pub const BG_BRIGHTNESS: f32 = 4.0 / 16.0;

/// Mask value reported for buttons no wave has touched yet when the sentinel is enabled.
pub const UNTOUCHED: f32 = -1.0;

/// Background mask options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskConfig {
    /// Keep buttons black until the first wave reaches them, whatever the mode.
    pub untouched_sentinel: bool,
}

/// Background coefficient for a mask value, or `None` for [`MaskSetting::WavesOfBg`], which
/// derives visibility from wave alpha instead.
pub fn background_coefficient(setting: MaskSetting, mask: f32) -> Option<f32> {
    let m = mask.clamp(0.0, 1.0);
    match setting {
        MaskSetting::WavesOfBg => None,
        MaskSetting::FadeAfterIdle => Some(m * m * m * BG_BRIGHTNESS),
        MaskSetting::BgTrail | MaskSetting::DelayedFadeout | MaskSetting::AlwaysOn => {
            Some(m * BG_BRIGHTNESS)
        }
    }
}

/// Final color of one button from its wave layer pixel and background pixel.
pub fn composite_pixel(setting: MaskSetting, wave_px: Color, bg_px: Color, mask: f32) -> Color {
    match background_coefficient(setting, mask) {
        Some(coeff) => wave_px.over(bg_px * coeff),
        None => bg_px * (wave_px.a * 2.0),
    }
}

/// Per-button decaying visibility of the background tint.
#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundMask {
    values: [f32; BUTTON_COUNT],
    touched: ButtonSet,
    config: MaskConfig,
}

impl BackgroundMask {
    /// Fresh mask; every button starts dark.
    pub fn new(config: MaskConfig) -> Self {
        let initial = if config.untouched_sentinel {
            UNTOUCHED
        } else {
            0.0
        };
        Self {
            values: [initial; BUTTON_COUNT],
            touched: ButtonSet::EMPTY,
            config,
        }
    }

    /// Current mask value of `button`.
    pub fn get(&self, button: usize) -> f32 {
        self.values[button]
    }

    /// All mask values.
    pub fn values(&self) -> &[f32; BUTTON_COUNT] {
        &self.values
    }

    /// Options this mask was built with.
    pub fn config(&self) -> MaskConfig {
        self.config
    }

    /// Whether `button` is still waiting for its first wave under the sentinel option.
    pub fn is_untouched(&self, button: usize) -> bool {
        self.config.untouched_sentinel && !self.touched.contains(button)
    }

    /// Re-arm `button` to the fill value of `setting`.
    pub fn reset(&mut self, button: usize, setting: MaskSetting) {
        self.values[button] = setting.values().fill;
        self.touched.insert(button);
    }

    /// Re-arm every button in `buttons`.
    pub fn reset_all(&mut self, buttons: ButtonSet, setting: MaskSetting) {
        for b in buttons.iter() {
            self.reset(b, setting);
        }
    }

    /// Decay every touched button by `elapsed_ms` at the rate of `setting`.
    pub fn decay(&mut self, elapsed_ms: f32, setting: MaskSetting) {
        let step = elapsed_ms * setting.values().decay_per_ms;
        for b in 0..BUTTON_COUNT {
            if !self.is_untouched(b) {
                self.values[b] -= step;
            }
        }
    }

    /// Composite `button` under `setting`; untouched buttons render black.
    pub fn composite(
        &self,
        button: usize,
        setting: MaskSetting,
        wave_px: Color,
        bg_px: Color,
    ) -> Color {
        if self.is_untouched(button) {
            return Color::BLACK;
        }
        composite_pixel(setting, wave_px, bg_px, self.values[button])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mask/background.rs"]
mod tests;
