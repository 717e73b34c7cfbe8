use crate::core::types::{DailyForecast, Locale, UnitSystem};
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait WeatherFeed: Send + Sync {
    /// Today's daily forecast record for a locale in the given unit system.
    async fn daily_forecast(&self, locale: &Locale, units: UnitSystem) -> Result<DailyForecast>;
}
