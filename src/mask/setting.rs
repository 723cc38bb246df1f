use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{WaveError, WaveResult};

/// Visual behavior of the background between waves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskSetting {
    /// Background shows only where waves are, scaled by wave alpha.
    WavesOfBg,
    /// Short linear trail behind each wave.
    BgTrail,
    /// Stays lit for a while, then fades linearly.
    DelayedFadeout,
    /// Lingers, then snaps off with a cubic falloff.
    #[default]
    FadeAfterIdle,
    /// Once lit, never fades.
    AlwaysOn,
}

/// Reset value and decay speed of a mask setting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaskValues {
    /// Value a mask jumps to when a wave touches its button.
    pub fill: f32,
    /// Amount subtracted from the mask per elapsed millisecond.
    pub decay_per_ms: f32,
}

const MASK_TABLE: [MaskValues; MaskSetting::COUNT] = [
    MaskValues {
        fill: 0.0,
        decay_per_ms: 0.0,
    },
    MaskValues {
        fill: 3.0,
        decay_per_ms: 16.0 / 1000.0,
    },
    MaskValues {
        fill: 32.0,
        decay_per_ms: 16.0 / 1000.0,
    },
    MaskValues {
        fill: 6.0,
        decay_per_ms: 0.33 / 1000.0,
    },
    MaskValues {
        fill: 1.0,
        decay_per_ms: 0.0,
    },
];

impl MaskSetting {
    /// Number of settings.
    pub const COUNT: usize = 5;

    /// Every setting in ordinal order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::WavesOfBg,
        Self::BgTrail,
        Self::DelayedFadeout,
        Self::FadeAfterIdle,
        Self::AlwaysOn,
    ];

    /// Position in [`MaskSetting::ALL`].
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Setting at `ordinal`, if in range.
    pub fn from_ordinal(ordinal: i32) -> Option<Self> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Next setting, wrapping after the last.
    pub fn next(self) -> Self {
        Self::ALL[(self.ordinal() + 1) % Self::COUNT]
    }

    /// Previous setting, wrapping before the first.
    pub fn prev(self) -> Self {
        Self::ALL[(self.ordinal() + Self::COUNT - 1) % Self::COUNT]
    }

    /// Fill and decay pair for this setting.
    pub fn values(self) -> MaskValues {
        MASK_TABLE[self.ordinal()]
    }

    /// Stable snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::WavesOfBg => "waves_of_bg",
            Self::BgTrail => "bg_trail",
            Self::DelayedFadeout => "delayed_fadeout",
            Self::FadeAfterIdle => "fade_after_idle",
            Self::AlwaysOn => "always_on",
        }
    }
}

impl TryFrom<i32> for MaskSetting {
    type Error = WaveError;

    fn try_from(ordinal: i32) -> WaveResult<Self> {
        Self::from_ordinal(ordinal).ok_or_else(|| {
            WaveError::validation(format!(
                "mask setting ordinal {ordinal} is outside 0..{}",
                Self::COUNT
            ))
        })
    }
}

impl fmt::Display for MaskSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MaskSetting {
    type Err = WaveError;

    fn from_str(s: &str) -> WaveResult<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| WaveError::validation(format!("unknown mask setting \"{s}\"")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mask/setting.rs"]
mod tests;
