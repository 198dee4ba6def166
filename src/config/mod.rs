use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::core::{
    errors::ExpenseError,
    utils::{app_data_dir, config_file_in, ensure_dir},
};

const TMP_SUFFIX: &str = "tmp";

/// Persisted user preferences.
///
/// `theme` holds the raw flag (`"light"`/`"dark"`); an absent flag means
/// light. It is written immediately whenever the user toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: crate::currency::DEFAULT_CURRENCY.into(),
            theme: None,
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, ExpenseError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ExpenseError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
        })
    }

    /// Loads preferences; a missing or unreadable file falls back to
    /// defaults rather than failing startup.
    pub fn load(&self) -> Config {
        if !self.path.exists() {
            return Config::default();
        }
        match fs::read_to_string(&self.path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(config) => config,
                Err(err) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        error = %err,
                        "malformed config file, using defaults"
                    );
                    Config::default()
                }
            },
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "unreadable config file, using defaults"
                );
                Config::default()
            }
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ExpenseError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        fs::write(&tmp, json)?;
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
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
