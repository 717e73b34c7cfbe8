use crate::core::{format, icons, types::*};
use crate::ports::messenger::Messenger;
use crate::ports::weather_feed::WeatherFeed;
use anyhow::Result;

/// One pass over the locale table: fetch both unit systems, build the
/// summary attachment, post to the configured channel. Strictly
/// sequential; the first failure aborts the run and leaves the
/// remaining locales unprocessed.
pub async fn run(
    weather: &dyn WeatherFeed,
    messenger: &dyn Messenger,
    config: &Config,
) -> Result<()> {
    for locale in &config.locales {
        let daily = weather.daily_forecast(locale, UnitSystem::Us).await?;
        let daily_si = weather.daily_forecast(locale, UnitSystem::Si).await?;

        let emoji = icons::emoji(&daily.icon)?;

        let attachment = Attachment {
            fallback: format::fallback_line(&daily, &daily_si, emoji),
            text: format::attachment_text(&daily, &daily_si, emoji),
        };

        tracing::info!(
            "{}: {} {} | {}° - {}° ({}°C - {}°C)",
            locale.name,
            daily.summary,
            emoji,
            daily.temperature_min,
            daily.temperature_max,
            daily_si.temperature_min,
            daily_si.temperature_max,
        );

        messenger
            .send(
                &format::title(&locale.name),
                std::slice::from_ref(&attachment),
                None,
                Some(&config.channel),
            )
            .await?;
    }

    Ok(())
}
