mod adapters;
mod core;
mod ports;

use adapters::forecast_io::ForecastIoClient;
use adapters::slack::SlackClient;
use crate::core::types::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenv::dotenv() {
        eprintln!("WARNING: .env load failed: {}", e);
    }
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let locale_names: Vec<&str> = config.locales.iter().map(|l| l.name.as_str()).collect();
    tracing::info!(
        "channel=#{} locales=[{}]",
        config.channel,
        locale_names.join(", ")
    );

    let weather = ForecastIoClient::new(&config.forecastio_key, &config.forecastio_base_url)?;
    let slack = SlackClient::new(&config.slack_api_key, &config.slack_base_url)?;

    crate::core::notifier::run(&weather, &slack, &config).await
}
