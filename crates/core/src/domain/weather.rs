use serde::{Deserialize, Serialize};

/// Point-in-time weather as supplied by an external provider. Only
/// `temperature` participates in outfit synthesis; the condition text is kept
/// for display and logging.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Degrees Celsius.
    pub temperature: f64,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub wind_speed: Option<f64>,
}

impl WeatherSnapshot {
    pub fn new(temperature: f64, condition: impl Into<String>) -> Self {
        Self { temperature, condition: condition.into(), city: None, humidity: None, wind_speed: None }
    }

    /// Case-insensitive substring match on the provider's condition text.
    pub fn is_rainy(&self) -> bool {
        let normalized = self.condition.to_ascii_lowercase();
        ["rain", "drizzle", "shower", "storm"].iter().any(|token| normalized.contains(token))
    }
}
