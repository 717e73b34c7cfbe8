use crate::core::error::UnknownIcon;

/// Emoji shortcode for a forecast icon key. The table is a closed
/// enumeration: a key outside it is an error, not a blank annotation.
pub fn emoji(icon: &str) -> Result<&'static str, UnknownIcon> {
    let emoji = match icon {
        "clear-day" => ":sunny:",
        "clear-night" => ":full-moon:",
        "rain" => ":umbrella:",
        "snow" => ":snowflake:",
        "sleet" => ":umbrella:+:snowflake:",
        "wind" => ":dash:",
        "fog" => ":foggy:",
        "cloudy" => ":cloud:",
        "partly-cloudy-day" => ":partly_sunny:",
        "partly-cloudy-night" => ":cloud:",
        _ => return Err(UnknownIcon(icon.to_string())),
    };
    Ok(emoji)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_resolve() {
        assert_eq!(emoji("clear-day").unwrap(), ":sunny:");
        assert_eq!(emoji("partly-cloudy-day").unwrap(), ":partly_sunny:");
        assert_eq!(emoji("sleet").unwrap(), ":umbrella:+:snowflake:");
        assert_eq!(emoji("partly-cloudy-night").unwrap(), ":cloud:");
    }

    #[test]
    fn unknown_key_fails() {
        let err = emoji("tornado").unwrap_err();
        assert_eq!(err, UnknownIcon("tornado".into()));
        assert_eq!(
            err.to_string(),
            "no icon registered for forecast key 'tornado'"
        );
    }
}
