//! Storefront configuration.
//!
//! Every section is optional; a missing file or section falls back to the
//! store's standard behaviour.

use std::path::{Path, PathBuf};
use std::time::Duration;

use fithaven_commerce::assistant::{CannedAnswer, CannedAnswers};
use fithaven_commerce::cart::{
    PricingPolicy, DEFAULT_FLAT_SHIPPING_FEE, DEFAULT_FREE_SHIPPING_THRESHOLD, DEFAULT_TAX_RATE,
};
use fithaven_commerce::{Currency, Money};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StorefrontError};
use crate::logging::LogFormat;

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["fithaven.toml", ".fithaven.toml", "fithaven.json"];

/// Storefront configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Shipping and tax rules.
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Hero carousel settings.
    #[serde(default)]
    pub hero: HeroConfig,

    /// Log level and format.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Assistant topic table override.
    #[serde(default)]
    pub assistant: AssistantConfig,
}

impl StorefrontConfig {
    /// Load config from a file, picking the format by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| StorefrontError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = if is_json(path) {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        config.validate()?;

        tracing::debug!(path = %path.display(), "loaded storefront config");
        Ok(config)
    }

    /// Save config to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content).map_err(|source| StorefrontError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Find a config file in `start` or any parent directory.
    pub fn find(start: &Path) -> Option<PathBuf> {
        start.ancestors().find_map(|dir| {
            CONFIG_FILE_NAMES
                .iter()
                .map(|name| dir.join(name))
                .find(|candidate| candidate.is_file())
        })
    }

    /// Load the nearest config file, or defaults when there is none.
    ///
    /// Returns the path that was loaded, if any.
    pub fn discover(start: &Path) -> Result<(Self, Option<PathBuf>)> {
        match Self::find(start) {
            Some(path) => Ok((Self::load(&path)?, Some(path))),
            None => {
                tracing::debug!(start = %start.display(), "no config file found, using defaults");
                Ok((Self::default(), None))
            }
        }
    }

    /// Check every section.
    pub fn validate(&self) -> Result<()> {
        self.pricing.validate()?;
        self.hero.validate()?;
        self.logging.validate()?;
        self.assistant.canned_answers()?;
        Ok(())
    }

    /// Pricing policy described by the `pricing` section.
    pub fn pricing_policy(&self) -> Result<PricingPolicy> {
        self.pricing.policy()
    }

    /// Canned answer table described by the `assistant` section.
    pub fn canned_answers(&self) -> Result<CannedAnswers> {
        self.assistant.canned_answers()
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Shipping and tax rules, in whole currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// ISO currency code.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Shipping is free above this subtotal.
    #[serde(default = "default_free_shipping_threshold")]
    pub free_shipping_threshold: f64,

    /// Shipping fee at or below the threshold.
    #[serde(default = "default_flat_shipping_fee")]
    pub flat_shipping_fee: f64,

    /// Tax rate, e.g. 0.08 for 8%.
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,
}

fn default_currency() -> String {
    Currency::USD.code().to_string()
}

fn default_free_shipping_threshold() -> f64 {
    DEFAULT_FREE_SHIPPING_THRESHOLD.to_decimal()
}

fn default_flat_shipping_fee() -> f64 {
    DEFAULT_FLAT_SHIPPING_FEE.to_decimal()
}

fn default_tax_rate() -> f64 {
    DEFAULT_TAX_RATE
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            free_shipping_threshold: default_free_shipping_threshold(),
            flat_shipping_fee: default_flat_shipping_fee(),
            tax_rate: default_tax_rate(),
        }
    }
}

impl PricingConfig {
    pub fn validate(&self) -> Result<()> {
        self.policy().map(|_| ())
    }

    /// Build the pricing policy, rejecting unusable amounts.
    pub fn policy(&self) -> Result<PricingPolicy> {
        let currency = Currency::from_code(&self.currency).ok_or_else(|| {
            StorefrontError::InvalidConfig(format!("unknown currency '{}'", self.currency))
        })?;

        for (name, value) in [
            ("free_shipping_threshold", self.free_shipping_threshold),
            ("flat_shipping_fee", self.flat_shipping_fee),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(StorefrontError::InvalidConfig(format!(
                    "pricing.{} must be a non-negative amount, got {}",
                    name, value
                )));
            }
        }
        if !(0.0..1.0).contains(&self.tax_rate) {
            return Err(StorefrontError::InvalidConfig(format!(
                "pricing.tax_rate must be in [0, 1), got {}",
                self.tax_rate
            )));
        }

        Ok(PricingPolicy {
            free_shipping_threshold: Money::from_decimal(self.free_shipping_threshold, currency),
            flat_shipping_fee: Money::from_decimal(self.flat_shipping_fee, currency),
            tax_rate: self.tax_rate,
        })
    }
}

/// Hero carousel settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroConfig {
    /// Milliseconds between automatic slide changes.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

fn default_interval_ms() -> u64 {
    5000
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

impl HeroConfig {
    pub fn validate(&self) -> Result<()> {
        if self.interval_ms == 0 {
            return Err(StorefrontError::InvalidConfig(
                "hero.interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<()> {
        tracing_subscriber::EnvFilter::try_new(&self.level).map_err(|e| {
            StorefrontError::InvalidConfig(format!("logging.level '{}': {}", self.level, e))
        })?;
        Ok(())
    }
}

/// Assistant settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Replaces the standard topic table when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<CannedAnswer>>,
}

impl AssistantConfig {
    /// Topic table to use. An override must hold exactly five topics with
    /// unique, non-reserved labels.
    pub fn canned_answers(&self) -> Result<CannedAnswers> {
        match &self.topics {
            Some(topics) => Ok(CannedAnswers::new(topics.clone())?),
            None => Ok(CannedAnswers::standard()),
        }
    }
}

/// Generate a commented default `fithaven.toml`.
pub fn generate_default_config() -> String {
    format!(
        r#"# FitHaven storefront configuration

[pricing]
currency = "USD"
# Shipping is free when the subtotal is above this amount.
free_shipping_threshold = {threshold:.2}
flat_shipping_fee = {fee:.2}
tax_rate = {tax}

[hero]
interval_ms = {interval}

[logging]
# Used when RUST_LOG is not set.
level = "warn"
# pretty, compact or json
format = "compact"

# Replace the assistant's topic menu (exactly five entries):
# [[assistant.topics]]
# topic = "Store Hours"
# answer = "We are open every day from 9 AM to 6 PM."
"#,
        threshold = DEFAULT_FREE_SHIPPING_THRESHOLD.to_decimal(),
        fee = DEFAULT_FLAT_SHIPPING_FEE.to_decimal(),
        tax = DEFAULT_TAX_RATE,
        interval = default_interval_ms(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_store_policy() {
        let config = StorefrontConfig::default();
        assert_eq!(config.pricing_policy().unwrap(), PricingPolicy::default());
        assert_eq!(config.hero.interval(), Duration::from_secs(5));
        assert_eq!(config.canned_answers().unwrap().len(), 5);
    }

    #[test]
    fn test_generated_config_parses() {
        let config: StorefrontConfig = toml::from_str(&generate_default_config()).unwrap();
        config.validate().unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config: StorefrontConfig = toml::from_str(
            r#"
            [pricing]
            flat_shipping_fee = 49.5
            "#,
        )
        .unwrap();
        let policy = config.pricing_policy().unwrap();
        assert_eq!(policy.flat_shipping_fee.amount_cents, 4950);
        assert_eq!(policy.free_shipping_threshold.amount_cents, 50_000);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = StorefrontConfig::default();
        config.pricing.tax_rate = 1.5;
        assert!(matches!(
            config.validate(),
            Err(StorefrontError::InvalidConfig(_))
        ));

        let mut config = StorefrontConfig::default();
        config.pricing.flat_shipping_fee = -1.0;
        assert!(config.validate().is_err());

        let mut config = StorefrontConfig::default();
        config.hero.interval_ms = 0;
        assert!(config.validate().is_err());

        let mut config = StorefrontConfig::default();
        config.pricing.currency = "XYZ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_reserved_topic_rejected() {
        let config = StorefrontConfig {
            assistant: AssistantConfig {
                topics: Some(vec![CannedAnswer::new("Contact Support", "x")]),
            },
            ..StorefrontConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(StorefrontError::Assistant(_))
        ));
    }
}
