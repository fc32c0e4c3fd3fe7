use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analytics;
use crate::generator;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AppConfig {
    pub generator: GeneratorConfig,
    pub analytics: AnalyticsConfig,
    pub logging: LoggingConfig,
}

/// Tunables for outfit synthesis. Defaults are the product's shipped
/// behavior; see the constants in [`crate::generator`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GeneratorConfig {
    /// Outfits produced per batch.
    pub batch_size: usize,
    /// Minimum seasonal candidates before a mandatory slot falls back to its
    /// unfiltered inventory.
    pub min_seasonal_candidates: usize,
    /// Outerwear joins an outfit only below this temperature (°C).
    pub outerwear_below_celsius: f64,
    /// Per-outfit chance of adding an accessory, in `[0, 1]`.
    pub accessory_probability: f64,
}

/// Windows and thresholds for wear analytics.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalyticsConfig {
    pub unworn_after_months: u32,
    pub rarely_worn_after_days: i64,
    pub frequently_worn_threshold: usize,
    pub low_usage_max_wears: u32,
    pub seasonal_suggestion_limit: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub batch_size: Option<usize>,
    pub accessory_probability: Option<f64>,
    pub log_level: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            batch_size: generator::DEFAULT_OUTFIT_BATCH,
            min_seasonal_candidates: generator::MIN_SEASONAL_CANDIDATES,
            outerwear_below_celsius: generator::OUTERWEAR_BELOW_CELSIUS,
            accessory_probability: generator::ACCESSORY_PROBABILITY,
        }
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            unworn_after_months: analytics::UNWORN_AFTER_MONTHS,
            rarely_worn_after_days: analytics::RARELY_WORN_AFTER_DAYS,
            frequently_worn_threshold: analytics::FREQUENTLY_WORN_THRESHOLD,
            low_usage_max_wears: analytics::LOW_USAGE_MAX_WEARS,
            seasonal_suggestion_limit: analytics::SEASONAL_SUGGESTION_LIMIT,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: LogFormat::Compact }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            analytics: AnalyticsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    generator: Option<GeneratorPatch>,
    analytics: Option<AnalyticsPatch>,
    logging: Option<LoggingPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct GeneratorPatch {
    batch_size: Option<usize>,
    min_seasonal_candidates: Option<usize>,
    outerwear_below_celsius: Option<f64>,
    accessory_probability: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct AnalyticsPatch {
    unworn_after_months: Option<u32>,
    rarely_worn_after_days: Option<i64>,
    frequently_worn_threshold: Option<usize>,
    low_usage_max_wears: Option<u32>,
    seasonal_suggestion_limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}

impl AppConfig {
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let maybe_path = resolve_config_path(options.config_path.as_deref());

        if let Some(path) = maybe_path {
            let patch = read_patch(&path)?;
            config.apply_patch(patch);
        } else if options.require_file {
            let expected = options.config_path.unwrap_or_else(|| PathBuf::from("drobe.toml"));
            return Err(ConfigError::MissingConfigFile(expected));
        }

        config.apply_env_overrides()?;
        config.apply_overrides(options.overrides);
        config.validate()?;

        Ok(config)
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(generator) = patch.generator {
            if let Some(batch_size) = generator.batch_size {
                self.generator.batch_size = batch_size;
            }
            if let Some(min_seasonal_candidates) = generator.min_seasonal_candidates {
                self.generator.min_seasonal_candidates = min_seasonal_candidates;
            }
            if let Some(outerwear_below_celsius) = generator.outerwear_below_celsius {
                self.generator.outerwear_below_celsius = outerwear_below_celsius;
            }
            if let Some(accessory_probability) = generator.accessory_probability {
                self.generator.accessory_probability = accessory_probability;
            }
        }

        if let Some(analytics) = patch.analytics {
            if let Some(unworn_after_months) = analytics.unworn_after_months {
                self.analytics.unworn_after_months = unworn_after_months;
            }
            if let Some(rarely_worn_after_days) = analytics.rarely_worn_after_days {
                self.analytics.rarely_worn_after_days = rarely_worn_after_days;
            }
            if let Some(frequently_worn_threshold) = analytics.frequently_worn_threshold {
                self.analytics.frequently_worn_threshold = frequently_worn_threshold;
            }
            if let Some(low_usage_max_wears) = analytics.low_usage_max_wears {
                self.analytics.low_usage_max_wears = low_usage_max_wears;
            }
            if let Some(seasonal_suggestion_limit) = analytics.seasonal_suggestion_limit {
                self.analytics.seasonal_suggestion_limit = seasonal_suggestion_limit;
            }
        }

        if let Some(logging) = patch.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(value) = read_env("DROBE_GENERATOR_BATCH_SIZE") {
            self.generator.batch_size = parse_usize("DROBE_GENERATOR_BATCH_SIZE", &value)?;
        }
        if let Some(value) = read_env("DROBE_GENERATOR_MIN_SEASONAL_CANDIDATES") {
            self.generator.min_seasonal_candidates =
                parse_usize("DROBE_GENERATOR_MIN_SEASONAL_CANDIDATES", &value)?;
        }
        if let Some(value) = read_env("DROBE_GENERATOR_OUTERWEAR_BELOW_CELSIUS") {
            self.generator.outerwear_below_celsius =
                parse_f64("DROBE_GENERATOR_OUTERWEAR_BELOW_CELSIUS", &value)?;
        }
        if let Some(value) = read_env("DROBE_GENERATOR_ACCESSORY_PROBABILITY") {
            self.generator.accessory_probability =
                parse_f64("DROBE_GENERATOR_ACCESSORY_PROBABILITY", &value)?;
        }

        if let Some(value) = read_env("DROBE_ANALYTICS_UNWORN_AFTER_MONTHS") {
            self.analytics.unworn_after_months =
                parse_u32("DROBE_ANALYTICS_UNWORN_AFTER_MONTHS", &value)?;
        }
        if let Some(value) = read_env("DROBE_ANALYTICS_RARELY_WORN_AFTER_DAYS") {
            self.analytics.rarely_worn_after_days =
                parse_i64("DROBE_ANALYTICS_RARELY_WORN_AFTER_DAYS", &value)?;
        }
        if let Some(value) = read_env("DROBE_ANALYTICS_FREQUENTLY_WORN_THRESHOLD") {
            self.analytics.frequently_worn_threshold =
                parse_usize("DROBE_ANALYTICS_FREQUENTLY_WORN_THRESHOLD", &value)?;
        }
        if let Some(value) = read_env("DROBE_ANALYTICS_LOW_USAGE_MAX_WEARS") {
            self.analytics.low_usage_max_wears =
                parse_u32("DROBE_ANALYTICS_LOW_USAGE_MAX_WEARS", &value)?;
        }
        if let Some(value) = read_env("DROBE_ANALYTICS_SEASONAL_SUGGESTION_LIMIT") {
            self.analytics.seasonal_suggestion_limit =
                parse_usize("DROBE_ANALYTICS_SEASONAL_SUGGESTION_LIMIT", &value)?;
        }

        let log_level = read_env("DROBE_LOGGING_LEVEL").or_else(|| read_env("DROBE_LOG_LEVEL"));
        if let Some(value) = log_level {
            self.logging.level = value;
        }
        let log_format = read_env("DROBE_LOGGING_FORMAT").or_else(|| read_env("DROBE_LOG_FORMAT"));
        if let Some(value) = log_format {
            self.logging.format = value.parse()?;
        }

        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(batch_size) = overrides.batch_size {
            self.generator.batch_size = batch_size;
        }
        if let Some(accessory_probability) = overrides.accessory_probability {
            self.generator.accessory_probability = accessory_probability;
        }
        if let Some(log_level) = overrides.log_level {
            self.logging.level = log_level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_generator(&self.generator)?;
        validate_analytics(&self.analytics)?;
        validate_logging(&self.logging)?;
        Ok(())
    }
}

fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then_some(path.to_path_buf());
    }

    [PathBuf::from("drobe.toml"), PathBuf::from("config/drobe.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;

    toml::from_str::<ConfigPatch>(&raw)
        .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}

fn parse_usize(key: &str, value: &str) -> Result<usize, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_u32(key: &str, value: &str) -> Result<u32, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_i64(key: &str, value: &str) -> Result<i64, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_f64(key: &str, value: &str) -> Result<f64, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn validate_generator(generator: &GeneratorConfig) -> Result<(), ConfigError> {
    if generator.batch_size == 0 || generator.batch_size > 50 {
        return Err(ConfigError::Validation(
            "generator.batch_size must be in range 1..=50".to_string(),
        ));
    }

    if generator.min_seasonal_candidates == 0 {
        return Err(ConfigError::Validation(
            "generator.min_seasonal_candidates must be greater than zero".to_string(),
        ));
    }

    if !generator.outerwear_below_celsius.is_finite() {
        return Err(ConfigError::Validation(
            "generator.outerwear_below_celsius must be a finite temperature".to_string(),
        ));
    }

    if !(0.0..=1.0).contains(&generator.accessory_probability) {
        return Err(ConfigError::Validation(
            "generator.accessory_probability must be in range 0.0..=1.0".to_string(),
        ));
    }

    Ok(())
}

fn validate_analytics(analytics: &AnalyticsConfig) -> Result<(), ConfigError> {
    if analytics.unworn_after_months == 0 {
        return Err(ConfigError::Validation(
            "analytics.unworn_after_months must be greater than zero".to_string(),
        ));
    }

    if analytics.rarely_worn_after_days <= 0 {
        return Err(ConfigError::Validation(
            "analytics.rarely_worn_after_days must be greater than zero".to_string(),
        ));
    }

    if analytics.frequently_worn_threshold == 0 {
        return Err(ConfigError::Validation(
            "analytics.frequently_worn_threshold must be greater than zero".to_string(),
        ));
    }

    if analytics.seasonal_suggestion_limit == 0 {
        return Err(ConfigError::Validation(
            "analytics.seasonal_suggestion_limit must be greater than zero".to_string(),
        ));
    }

    Ok(())
}

fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
    let level = logging.level.trim().to_ascii_lowercase();
    match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ConfigError::Validation(
            "logging.level must be one of trace|debug|info|warn|error".to_string(),
        )),
    }
}
