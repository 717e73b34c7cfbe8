use crate::core::types::{DailyForecast, Locale, UnitSystem};
use crate::ports::weather_feed::WeatherFeed;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

pub struct ForecastIoClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

#[derive(Deserialize)]
struct ForecastResponse {
    daily: DailyBlock,
}

#[derive(Deserialize)]
struct DailyBlock {
    data: Vec<DailyForecast>,
}

impl ForecastIoClient {
    pub fn new(api_key: &str, base_url: &str) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()?,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl WeatherFeed for ForecastIoClient {
    async fn daily_forecast(&self, locale: &Locale, units: UnitSystem) -> Result<DailyForecast> {
        let url = format!(
            "{}/forecast/{}/{},{}?units={}",
            self.base_url,
            self.api_key,
            locale.lat,
            locale.lng,
            units.query_value(),
        );

        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            anyhow::bail!(
                "forecast request for {} ({}) -> {}",
                locale.name,
                units.query_value(),
                resp.status()
            );
        }

        let forecast = resp
            .json::<ForecastResponse>()
            .await
            .with_context(|| format!("malformed forecast response for {}", locale.name))?;

        forecast
            .daily
            .data
            .into_iter()
            .next()
            .with_context(|| format!("empty daily data for {}", locale.name))
    }
}
