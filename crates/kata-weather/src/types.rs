use serde::Deserialize;
use thiserror::Error;

/// Weather lookup errors.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Non-success HTTP status from either endpoint. The display string is
    /// the message shown to the user; there is no retry.
    #[error("Request failed with status code: {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body did not match the expected shape. Missing fields land
    /// here; there is no partial rendering.
    #[error("Invalid response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Geocoding response envelope.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub results: Vec<GeocodeCandidate>,
}

/// One address-match result: a formatted address plus coordinates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeocodeCandidate {
    pub formatted_address: String,
    pub geometry: Geometry,
}

impl GeocodeCandidate {
    pub fn latitude(&self) -> f64 {
        self.geometry.location.lat
    }

    pub fn longitude(&self) -> f64 {
        self.geometry.location.lng
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Current conditions as returned by the weather endpoint.
///
/// Every field is required; a response missing any of them fails
/// deserialization and aborts the lookup.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    /// Observation timestamp, RFC 3339
    pub current_time: String,
    pub time_zone: TimeZone,
    pub is_daytime: bool,
    pub weather_condition: WeatherCondition,
    pub temperature: Temperature,
    pub feels_like_temperature: Temperature,
    pub dew_point: Temperature,
    pub heat_index: Temperature,
    pub wind_chill: Temperature,
    pub relative_humidity: f64,
    pub uv_index: f64,
    pub precipitation: Precipitation,
    pub thunderstorm_probability: f64,
    pub air_pressure: AirPressure,
    pub wind: Wind,
    pub visibility: Visibility,
    pub cloud_cover: f64,
    pub current_conditions_history: ConditionsHistory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimeZone {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherCondition {
    pub description: ConditionDescription,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConditionDescription {
    pub text: String,
}

/// A temperature-like reading: degrees plus a unit enum (e.g. `CELSIUS`).
#[derive(Debug, Clone, Deserialize)]
pub struct Temperature {
    pub degrees: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Precipitation {
    pub probability: PrecipitationProbability,
    pub qpf: Qpf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrecipitationProbability {
    pub percent: f64,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Quantitative precipitation forecast.
#[derive(Debug, Clone, Deserialize)]
pub struct Qpf {
    pub quantity: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirPressure {
    pub mean_sea_level_millibars: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
    pub direction: WindDirection,
    pub speed: WindMeasure,
    pub gust: WindMeasure,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindDirection {
    pub degrees: f64,
    pub cardinal: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindMeasure {
    pub value: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Visibility {
    pub distance: f64,
    pub unit: String,
}

/// Trailing 24h observations bundled with current conditions.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionsHistory {
    pub temperature_change: Temperature,
    pub max_temperature: Temperature,
    pub min_temperature: Temperature,
    pub qpf: Qpf,
}
