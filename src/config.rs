use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::id_generator::IdGenerator;
use crate::number::NumberFormat;
use crate::selection::{ScrollOptions, DEFAULT_DISPLAY};
use crate::string::{RandomOptions, TruncateOptions};

/// Every tunable default in one place, loadable from JSON.
///
/// Missing fields keep their defaults, so a settings file only needs the
/// values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ids: IdGenerator,
    pub random: RandomOptions,
    pub number: NumberFormat,
    pub truncate: TruncateOptions,
    pub scroll: ScrollOptions,
    /// `display` value used to show elements
    pub display: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ids: IdGenerator::default(),
            random: RandomOptions::default(),
            number: NumberFormat::default(),
            truncate: TruncateOptions::default(),
            scroll: ScrollOptions::default(),
            display: DEFAULT_DISPLAY.to_string(),
        }
    }
}

impl Settings {
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json_string(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        log::info!("Loaded settings from {}", path.display());
        Self::from_json_str(&json)
    }

    /// Write settings to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.ids.prefix.is_empty() && self.ids.length == 0 {
            return Err(ConfigError::Invalid(
                "ids need a prefix or a random part".to_string(),
            ));
        }
        if self.ids.max_attempts == Some(0) {
            return Err(ConfigError::Invalid("ids.max_attempts must be at least 1".to_string()));
        }
        if self.display.trim().is_empty() {
            return Err(ConfigError::Invalid("display must not be empty".to_string()));
        }
        Ok(())
    }
}
