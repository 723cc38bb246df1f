use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::palette::WaveColor;
use crate::foundation::error::{WaveError, WaveResult};
use crate::mask::background::MaskConfig;
use crate::waves::render::WaveParams;

/// Tunables of a [`crate::ButtonWaves`] engine.
///
/// Every field is optional in JSON; missing fields take their defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Wave geometry and lifetime.
    pub wave: WaveParams,
    /// Background mask options.
    pub mask: MaskConfig,
    /// How spawned waves pick their color.
    pub color: WaveColor,
}

impl EngineConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> WaveResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| WaveError::serde(format!("parse engine config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> WaveResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            WaveError::validation(format!("open engine config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> WaveResult<()> {
        self.wave.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/config.rs"]
mod tests;
