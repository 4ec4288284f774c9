//! Application configuration: form defaults and presentation settings.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::errors::StoreError;
use crate::utils::{app_data_dir, ensure_dir};

/// Standard deposit pre-filled on the client intake form, tenge.
pub const DEFAULT_DEPOSIT: i64 = 75_000;
/// Standard construction term pre-filled on the intake form, days.
pub const DEFAULT_CONSTRUCTION_DAYS: u32 = 45;
/// How many years (current year onwards) the year picker offers.
pub const DEFAULT_YEAR_SPAN: u8 = 5;

const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    pub default_deposit: i64,
    pub default_construction_days: u32,
    pub year_span: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "ru-RU".into(),
            currency: "KZT".into(),
            default_deposit: DEFAULT_DEPOSIT,
            default_construction_days: DEFAULT_CONSTRUCTION_DAYS,
            year_span: DEFAULT_YEAR_SPAN,
        }
    }
}

impl Config {
    /// Years offered by the pickers, starting at `current`.
    pub fn year_options(&self, current: i32) -> Vec<i32> {
        (0..self.year_span as i32).map(|i| current + i).collect()
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, StoreError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, StoreError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    pub fn load(&self) -> Result<Config, StoreError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_options_span_from_current() {
        let config = Config::default();
        assert_eq!(config.year_options(2025), vec![2025, 2026, 2027, 2028, 2029]);
    }

    #[test]
    fn defaults_match_the_intake_form() {
        let config = Config::default();
        assert_eq!(config.default_deposit, 75_000);
        assert_eq!(config.default_construction_days, 45);
        assert_eq!(config.currency, "KZT");
    }
}
