use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};

// ── Locations ──

/// A named geographic point a forecast is fetched for.
/// Coordinates stay strings: they are interpolated into the request
/// path verbatim, never used arithmetically.
#[derive(Debug, Clone)]
pub struct Locale {
    pub name: String,
    pub zip: Option<u32>,
    pub lat: String,
    pub lng: String,
}

impl Locale {
    fn new(name: &str, zip: Option<u32>, lat: &str, lng: &str) -> Self {
        Self {
            name: name.into(),
            zip,
            lat: lat.into(),
            lng: lng.into(),
        }
    }

    /// The built-in locale table, in notification order.
    pub fn defaults() -> Vec<Locale> {
        vec![
            Locale::new("Alameda, CA", Some(94501), "37.7712165", "-122.2824021"),
            Locale::new("Inner Richmond, SF, CA", Some(94118), "37.7822891", "-122.463708"),
            Locale::new("Pacifica, CA", Some(94044), "37.6138", "-122.4869"),
            Locale::new("SOMA, SF, CA", Some(94103), "37.7726402", "-122.4099154"),
            Locale::new("Sydney, AU", None, "-33.865143", "151.209900"),
        ]
    }
}

// ── Forecast Data ──

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSystem {
    /// Imperial (°F)
    Us,
    /// Metric (°C)
    Si,
}

impl UnitSystem {
    pub fn query_value(self) -> &'static str {
        match self {
            UnitSystem::Us => "us",
            UnitSystem::Si => "si",
        }
    }
}

/// The first day's record from the provider's daily collection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecast {
    pub summary: String,
    pub icon: String,
    pub temperature_min: f64,
    pub temperature_max: f64,
    #[serde(default)]
    pub precip_type: Option<String>,
    #[serde(default)]
    pub precip_probability: f64,
}

// ── Messages ──

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    pub fallback: String,
    pub text: String,
}

// ── Config ──

#[derive(Debug)]
pub struct Config {
    pub slack_api_key: String,
    pub forecastio_key: String,
    pub forecastio_base_url: String,
    pub slack_base_url: String,
    pub channel: String,
    pub locales: Vec<Locale>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            slack_api_key: require_var("SLACK_API_KEY")?,
            forecastio_key: require_var("FORECASTIO_KEY")?,
            forecastio_base_url: std::env::var("FORECASTIO_BASE_URL")
                .unwrap_or_else(|_| "https://api.darksky.net".into()),
            slack_base_url: std::env::var("SLACK_BASE_URL")
                .unwrap_or_else(|_| "https://slack.com/api".into()),
            channel: std::env::var("NOTIFY_CHANNEL").unwrap_or_else(|_| "general".into()),
            locales: Locale::defaults(),
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // from_env tests mutate the process environment; serialize them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn from_env_requires_both_credentials() {
        let _guard = ENV_LOCK.lock().unwrap();

        std::env::remove_var("SLACK_API_KEY");
        std::env::remove_var("FORECASTIO_KEY");
        let err = Config::from_env().unwrap_err();
        assert_eq!(err.to_string(), "Set the SLACK_API_KEY env variable");

        std::env::set_var("SLACK_API_KEY", "xoxb-test");
        let err = Config::from_env().unwrap_err();
        assert_eq!(err.to_string(), "Set the FORECASTIO_KEY env variable");

        std::env::set_var("FORECASTIO_KEY", "fio-test");
        let config = Config::from_env().unwrap();
        assert_eq!(config.slack_api_key, "xoxb-test");
        assert_eq!(config.forecastio_key, "fio-test");
        assert_eq!(config.channel, "general");
        assert_eq!(config.forecastio_base_url, "https://api.darksky.net");
        assert_eq!(config.locales.len(), 5);

        std::env::remove_var("SLACK_API_KEY");
        std::env::remove_var("FORECASTIO_KEY");
    }

    #[test]
    fn daily_forecast_deserializes_provider_fields() {
        let daily: DailyForecast = serde_json::from_str(
            r#"{
                "summary": "Light rain",
                "icon": "rain",
                "temperatureMin": 51.3,
                "temperatureMax": 59.8,
                "precipType": "rain",
                "precipProbability": 0.42,
                "windSpeed": 7.2
            }"#,
        )
        .unwrap();
        assert_eq!(daily.icon, "rain");
        assert_eq!(daily.precip_type.as_deref(), Some("rain"));
        assert_eq!(daily.precip_probability, 0.42);
    }

    #[test]
    fn daily_forecast_precip_fields_are_optional() {
        let daily: DailyForecast = serde_json::from_str(
            r#"{
                "summary": "Clear",
                "icon": "clear-day",
                "temperatureMin": 55,
                "temperatureMax": 68
            }"#,
        )
        .unwrap();
        assert!(daily.precip_type.is_none());
        assert_eq!(daily.precip_probability, 0.0);
    }
}
