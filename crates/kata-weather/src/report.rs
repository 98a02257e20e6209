//! Fixed-format report rendering for current conditions.
//!
//! One human-readable line per response field, in a stable order. Unit and
//! category enums arrive upper-snake-case (`DEGREES_CELSIUS`, `NORTH_WEST`)
//! and are prettified for display.

use crate::types::CurrentConditions;
use chrono::{DateTime, Duration, Timelike};

/// Latitude/longitude echo printed before the weather report.
pub fn render_location(latitude: f64, longitude: f64) -> Vec<String> {
    vec![
        format!("Latitude: {} Degrees", latitude),
        format!("Longitude: {} Degrees", longitude),
    ]
}

/// Render every field of the response as one line each.
pub fn render_report(conditions: &CurrentConditions) -> Vec<String> {
    let history = &conditions.current_conditions_history;
    let daytime = if conditions.is_daytime { "Day" } else { "Night" };

    vec![
        format!("Time: {}", format_time(&conditions.current_time)),
        format!("Time Zone: {}", conditions.time_zone.id),
        format!("Daytime: {}", daytime),
        format!(
            "Weather Condition: {}",
            conditions.weather_condition.description.text
        ),
        format!(
            "Temperature: {} °{}",
            conditions.temperature.degrees,
            prettify(&conditions.temperature.unit)
        ),
        format!(
            "Feels Like Temperature: {} °{}",
            conditions.feels_like_temperature.degrees,
            prettify(&conditions.feels_like_temperature.unit)
        ),
        format!(
            "Dew Point: {} °{}",
            conditions.dew_point.degrees,
            prettify(&conditions.dew_point.unit)
        ),
        format!(
            "Heat Index: {} °{}",
            conditions.heat_index.degrees,
            prettify(&conditions.heat_index.unit)
        ),
        format!(
            "Wind Chill: {} °{}",
            conditions.wind_chill.degrees,
            prettify(&conditions.wind_chill.unit)
        ),
        format!("Relative Humidity: {}%", conditions.relative_humidity),
        format!("UV Index: {}", conditions.uv_index),
        format!(
            "Probability of {}: {}%",
            prettify(&conditions.precipitation.probability.kind),
            conditions.precipitation.probability.percent
        ),
        format!(
            "QPF: {} {}",
            conditions.precipitation.qpf.quantity,
            prettify(&conditions.precipitation.qpf.unit)
        ),
        format!(
            "Probability of Thunderstorm: {}%",
            conditions.thunderstorm_probability
        ),
        format!(
            "Air Pressure: {} hPa",
            conditions.air_pressure.mean_sea_level_millibars
        ),
        format!(
            "Wind Direction: {}° or {}",
            conditions.wind.direction.degrees,
            prettify(&conditions.wind.direction.cardinal)
        ),
        format!(
            "Wind Speed: {} {}",
            conditions.wind.speed.value,
            prettify(&conditions.wind.speed.unit)
        ),
        format!(
            "Wind Gust: {} {}",
            conditions.wind.gust.value,
            prettify(&conditions.wind.gust.unit)
        ),
        format!(
            "Visibility: {} {}",
            conditions.visibility.distance,
            prettify(&conditions.visibility.unit)
        ),
        format!("Cloud Cover: {}%", conditions.cloud_cover),
        format!(
            "Temperature Change History: {} °{}",
            history.temperature_change.degrees,
            prettify(&history.temperature_change.unit)
        ),
        format!(
            "Max Temperature History: {} °{}",
            history.max_temperature.degrees,
            prettify(&history.max_temperature.unit)
        ),
        format!(
            "Min Temperature History: {} °{}",
            history.min_temperature.degrees,
            prettify(&history.min_temperature.unit)
        ),
        format!(
            "QPF History: {} {}",
            history.qpf.quantity,
            prettify(&history.qpf.unit)
        ),
    ]
}

/// Underscores to spaces, Title Case each word.
fn prettify(value: &str) -> String {
    value
        .replace('_', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Round the RFC 3339 observation timestamp to whole seconds and render it
/// as e.g. `2026-08-25 3 PM`. Falls back to the raw string if it does not
/// parse.
fn format_time(raw: &str) -> String {
    let Ok(parsed) = DateTime::parse_from_rfc3339(raw) else {
        tracing::debug!(raw, "observation time did not parse as RFC 3339");
        return raw.to_string();
    };

    let rounded = if parsed.nanosecond() >= 500_000_000 {
        parsed + Duration::seconds(1)
    } else {
        parsed
    };
    let rounded = rounded.with_nanosecond(0).unwrap_or(rounded);

    rounded.format("%Y-%m-%d %-I %p").to_string()
}
