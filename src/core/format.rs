use crate::core::types::DailyForecast;

// The fallback and text variants of an attachment are built by two
// separate formatting passes that differ only in how the precipitation
// clause is joined: ", " for the fallback, "\n" for the text. The
// asymmetry is part of the message contract; do not unify the two.

pub fn title(locale_name: &str) -> String {
    format!("Forecast for {}", locale_name)
}

/// Plain summary line, precipitation clause comma-joined.
pub fn fallback_line(us: &DailyForecast, si: &DailyForecast, emoji: &str) -> String {
    let mut line = format!(
        "{} {}, {}° - {}° ({}°C - {}°C)",
        us.summary,
        emoji,
        us.temperature_min,
        us.temperature_max,
        si.temperature_min,
        si.temperature_max,
    );
    if let Some(precip) = precip_type(us) {
        line.push_str(&format!(
            ", {} chance of {}",
            percent(us.precip_probability),
            precip
        ));
    }
    line
}

/// Rich-text summary line, precipitation clause newline-joined.
pub fn attachment_text(us: &DailyForecast, si: &DailyForecast, emoji: &str) -> String {
    let mut line = format!(
        "{} {}, {}° - {}° ({}°C - {}°C)",
        us.summary,
        emoji,
        us.temperature_min,
        us.temperature_max,
        si.temperature_min,
        si.temperature_max,
    );
    if let Some(precip) = precip_type(us) {
        line.push_str(&format!(
            "\n{} chance of {}",
            percent(us.precip_probability),
            precip
        ));
    }
    line
}

fn precip_type(daily: &DailyForecast) -> Option<&str> {
    daily.precip_type.as_deref().filter(|p| !p.is_empty())
}

/// Probability scaled by 100 and rendered unrounded. `{:?}` keeps the
/// trailing `.0` on whole values (0.42 -> "42.0") and the full
/// shortest-round-trip precision otherwise.
fn percent(probability: f64) -> String {
    format!("{:?}%", probability * 100.0)
}
