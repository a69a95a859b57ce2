//! Sinhala-specific configuration that extends the base `Config` from core.
//!
//! This configuration includes:
//! - All generic options from `libsinhala_core::Config` (flattened via serde)
//! - Literal formatting policy for currency amounts and clock times
//!
//! # Example
//!
//! ```rust
//! use libsinhala::{CurrencyStyle, SinhalaConfig};
//!
//! let config = SinhalaConfig::from_toml_str(
//!     "currency_style = \"localized\"\nnoise_coverage_threshold = 0.9",
//! )
//! .unwrap();
//! assert_eq!(config.currency_style, CurrencyStyle::Localized);
//! assert_eq!(config.base().noise_coverage_threshold, 0.9);
//! assert!(!config.meridiem_normalization);
//! ```
use std::path::Path;

use libsinhala_core::error::{self, LoadError};
use serde::{Deserialize, Serialize};

/// How a recognised currency amount is written back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyStyle {
    /// `Rs.` followed directly by the digits: `Rs. 1500` becomes `Rs.1500`.
    #[default]
    Canonical,
    /// Keep the literal byte-for-byte.
    Preserve,
    /// Sinhala rupee marker: `Rs. 1500` becomes `රු.1500`.
    Localized,
}

impl std::str::FromStr for CurrencyStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "canonical" => Ok(Self::Canonical),
            "preserve" => Ok(Self::Preserve),
            "localized" => Ok(Self::Localized),
            other => Err(format!(
                "unknown currency style '{other}' (expected canonical, preserve or localized)"
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SinhalaConfig {
    /// Base configuration fields (gate threshold, segmentation lengths, terms)
    #[serde(flatten)]
    pub base: libsinhala_core::Config,

    /// Rewrite `7.30 AM` as `පෙ.ව. 7.30` and `10.30 PM` as `ප.ව. 10.30`.
    pub meridiem_normalization: bool,

    pub currency_style: CurrencyStyle,
}

impl SinhalaConfig {
    /// Convert this config into the base config.
    pub fn into_base(self) -> libsinhala_core::Config {
        self.base
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &libsinhala_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut libsinhala_core::Config {
        &mut self.base
    }

    pub fn load_toml<P: AsRef<Path>>(path: P) -> error::Result<Self> {
        let content = error::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let content = self
            .to_toml_string()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }

    pub fn from_toml_str(content: &str) -> error::Result<Self> {
        let config: SinhalaConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn validate(&self) -> Result<(), LoadError> {
        self.base.validate()
    }
}
