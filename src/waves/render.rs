use serde::{Deserialize, Serialize};

use crate::color::rgba::Color;
use crate::foundation::core::{BUTTON_COUNT, ButtonSet};
use crate::foundation::error::{WaveError, WaveResult};
use crate::layout::distances::DistanceTable;
use crate::waves::wave::Wave;

/// Transient per-button color layer built fresh every frame.
pub type WaveLayer = [Color; BUTTON_COUNT];

/// Geometry and lifetime of every wave.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveParams {
    /// Ring growth in panel units per millisecond.
    pub velocity_per_ms: f32,
    /// Width of the full-strength ring.
    pub width: f32,
    /// Width of the soft gradient on either side of the ring.
    pub bleed_radius: f32,
    /// Age after which a wave no longer renders.
    pub max_age_ms: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        // max age: (panel width 7.5 + (width + bleed) / 2) / 24 units/s, plus slop
        Self {
            velocity_per_ms: 24.0 / 1000.0,
            width: 0.25,
            bleed_radius: 1.0,
            max_age_ms: 340.0,
        }
    }
}

impl WaveParams {
    /// Reject geometry the renderer cannot draw.
    pub fn validate(&self) -> WaveResult<()> {
        if !(self.velocity_per_ms.is_finite() && self.velocity_per_ms > 0.0) {
            return Err(WaveError::validation("wave velocity must be > 0"));
        }
        if !(self.width.is_finite() && self.width >= 0.0) {
            return Err(WaveError::validation("wave width must be >= 0"));
        }
        if !(self.bleed_radius.is_finite() && self.bleed_radius > 0.0) {
            return Err(WaveError::validation("bleed radius must be > 0"));
        }
        if !(self.max_age_ms.is_finite() && self.max_age_ms > 0.0) {
            return Err(WaveError::validation("max wave age must be > 0"));
        }
        Ok(())
    }

    /// Full-strength ring of a wave aged `age_ms`, or `None` once it has expired.
    pub fn ring(&self, age_ms: f32) -> Option<Ring> {
        if !(0.0..self.max_age_ms).contains(&age_ms) {
            return None;
        }
        let min_full = age_ms * self.velocity_per_ms;
        Some(Ring {
            min_full,
            max_full: min_full + self.width,
        })
    }
}

/// Inner and outer radius of a wave's full-strength band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    /// Inner radius.
    pub min_full: f32,
    /// Outer radius.
    pub max_full: f32,
}

/// How a ring reaches a button at a given distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Touch {
    /// Inside the full-strength band.
    Full,
    /// In the gradient beyond the outer edge; position in `[0, 1)`.
    OuterBleed(f32),
    /// In the gradient inside the inner edge; position in `[0, 1)`.
    InnerBleed(f32),
}

impl Touch {
    /// Whether this touch re-arms the button's background mask.
    pub fn resets_mask(self) -> bool {
        matches!(self, Self::Full | Self::OuterBleed(_))
    }

    /// Contribution of a wave of `color` for this touch.
    pub fn tint(self, color: Color) -> Color {
        match self {
            Self::Full => color,
            Self::OuterBleed(pos) | Self::InnerBleed(pos) => bleed_color(color, pos),
        }
    }
}

impl Ring {
    /// Classify a button `d` units from the ring's center.
    pub fn classify(&self, d: f32, bleed_radius: f32) -> Option<Touch> {
        let beyond_min = d >= self.min_full;
        let within_max = d <= self.max_full;
        if beyond_min && within_max {
            Some(Touch::Full)
        } else if beyond_min && d < self.max_full + bleed_radius {
            Some(Touch::OuterBleed((d - self.max_full) / bleed_radius))
        } else if within_max && d > self.min_full - bleed_radius {
            Some(Touch::InnerBleed((self.min_full - d) / bleed_radius))
        } else {
            None
        }
    }
}

/// Fade `color` linearly across the bleed gradient (`0` is the ring edge, `1` the far end).
pub fn bleed_color(color: Color, position_in_gradient: f32) -> Color {
    let brightness = 1.0 - position_in_gradient;
    color.with_alpha(color.a * brightness)
}

/// Draws live waves into a [`WaveLayer`].
#[derive(Clone, Copy, Debug)]
pub struct WaveRenderer<'a> {
    distances: &'a DistanceTable,
    params: WaveParams,
}

impl<'a> WaveRenderer<'a> {
    /// Renderer measuring with `distances`.
    pub fn new(distances: &'a DistanceTable, params: WaveParams) -> Self {
        Self { distances, params }
    }

    /// Composite one wave over `layer` as seen at `now_ms`.
    ///
    /// Returns the buttons whose background mask the wave re-arms. Expired waves and waves
    /// spawned off the panel touch nothing.
    pub fn render_wave(&self, wave: &Wave, now_ms: f64, layer: &mut WaveLayer) -> ButtonSet {
        let mut resets = ButtonSet::EMPTY;
        if wave.spawn_button >= BUTTON_COUNT {
            return resets;
        }
        let Some(ring) = self.params.ring(wave.age_ms(now_ms)) else {
            return resets;
        };
        for (button, px) in layer.iter_mut().enumerate() {
            let d = self.distances.distance(wave.spawn_button, button);
            let Some(touch) = ring.classify(d, self.params.bleed_radius) else {
                continue;
            };
            *px = touch.tint(wave.color).over(*px);
            if touch.resets_mask() {
                resets.insert(button);
            }
        }
        resets
    }

    /// Composite every wave in order, each over the result of the ones before it.
    pub fn render_all<'w>(
        &self,
        waves: impl IntoIterator<Item = &'w Wave>,
        now_ms: f64,
        layer: &mut WaveLayer,
    ) -> ButtonSet {
        waves.into_iter().fold(ButtonSet::EMPTY, |acc, w| {
            acc.union(self.render_wave(w, now_ms, layer))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/waves/render.rs"]
mod tests;
