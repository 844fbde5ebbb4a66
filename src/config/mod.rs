use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::ConfigError;
use crate::utils::{app_data_dir, config_file_in, ensure_dir};

const TMP_SUFFIX: &str = "tmp";

/// User-facing application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub currency: String,
    pub theme: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "USD".into(),
            theme: "light".into(),
            locale: None,
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_base(app_data_dir())
    }

    #[cfg(test)]
    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, ConfigError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
        })
    }

    pub fn load(&self) -> Result<Settings, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Settings::default())
        }
    }

    pub fn save(&self, settings: &Settings) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_returns_defaults_when_file_is_missing() {
        let base = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(base.path().to_path_buf()).unwrap();
        let settings = manager.load().unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let base = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(base.path().to_path_buf()).unwrap();
        let settings = Settings {
            currency: "EUR".into(),
            theme: "dark".into(),
            locale: Some("de-DE".into()),
        };
        manager.save(&settings).unwrap();
        assert_eq!(manager.load().unwrap(), settings);
    }
}
