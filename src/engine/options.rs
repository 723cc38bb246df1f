use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::foundation::error::{WaveError, WaveResult};

/// Persisted user options the engine reads at construction and writes on mode changes.
pub trait OptionsStore {
    /// Stored mask setting ordinal, or `None` if nothing was ever stored.
    fn load_mask_setting(&self) -> Option<i32>;
    /// Persist a new mask setting ordinal.
    fn store_mask_setting(&mut self, ordinal: i32) -> WaveResult<()>;
}

/// Options kept in memory, for tests and display-only use.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InMemoryOptions {
    /// Stored mask setting ordinal.
    pub mask_setting: Option<i32>,
}

impl InMemoryOptions {
    /// Store pre-seeded with `ordinal`.
    pub fn with_mask_setting(ordinal: i32) -> Self {
        Self {
            mask_setting: Some(ordinal),
        }
    }
}

impl OptionsStore for InMemoryOptions {
    fn load_mask_setting(&self) -> Option<i32> {
        self.mask_setting
    }

    fn store_mask_setting(&mut self, ordinal: i32) -> WaveResult<()> {
        self.mask_setting = Some(ordinal);
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct OptionsDoc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    button_waves_mask_setting: Option<i32>,
    // Options owned by other animations ride along untouched.
    #[serde(flatten)]
    other: serde_json::Map<String, serde_json::Value>,
}

/// Options persisted as a JSON document on disk, rewritten on every change.
#[derive(Clone, Debug)]
pub struct JsonFileOptions {
    path: PathBuf,
    doc: OptionsDoc,
}

impl JsonFileOptions {
    /// Open `path`, starting from an empty document if the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> WaveResult<Self> {
        let path = path.into();
        let doc = match File::open(&path) {
            Ok(f) => serde_json::from_reader(BufReader::new(f)).map_err(|e| {
                WaveError::serde(format!("parse options '{}': {e}", path.display()))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => OptionsDoc::default(),
            Err(e) => {
                return Err(WaveError::options(format!(
                    "open options '{}': {e}",
                    path.display()
                )));
            }
        };
        Ok(Self { path, doc })
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> WaveResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                WaveError::options(format!("create options dir '{}': {e}", parent.display()))
            })?;
        }
        let json = serde_json::to_string_pretty(&self.doc)
            .map_err(|e| WaveError::serde(format!("encode options: {e}")))?;
        std::fs::write(&self.path, json).map_err(|e| {
            WaveError::options(format!("write options '{}': {e}", self.path.display()))
        })
    }
}

impl OptionsStore for JsonFileOptions {
    fn load_mask_setting(&self) -> Option<i32> {
        self.doc.button_waves_mask_setting
    }

    fn store_mask_setting(&mut self, ordinal: i32) -> WaveResult<()> {
        self.doc.button_waves_mask_setting = Some(ordinal);
        self.save()
    }
}

impl<S: OptionsStore + ?Sized> OptionsStore for &mut S {
    fn load_mask_setting(&self) -> Option<i32> {
        (**self).load_mask_setting()
    }

    fn store_mask_setting(&mut self, ordinal: i32) -> WaveResult<()> {
        (**self).store_mask_setting(ordinal)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/options.rs"]
mod tests;
