use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Provider schema (OpenWeatherMap current weather + 5-day/3-hour forecast)
// ---------------------------------------------------------------------------

/// Current conditions document as returned by the provider's
/// `/weather?q={city}` endpoint. Only the fields the view model consumes.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentConditions {
    pub name: String,
    pub sys: SysInfo,
    pub main: Thermals,
    /// Meters; the provider omits this in some regions
    #[serde(default)]
    pub visibility: u32,
    #[serde(default)]
    pub weather: Vec<ConditionSummary>,
    pub wind: Wind,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SysInfo {
    pub country: String,
    /// Epoch seconds, UTC
    pub sunrise: i64,
    pub sunset: i64,
}

/// Shared `main` block of both the current and forecast documents
#[derive(Debug, Clone, Deserialize)]
pub struct Thermals {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: u8,
    pub pressure: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConditionSummary {
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
    pub speed: f64,
    /// Degrees; absent when the provider reports calm
    #[serde(default)]
    pub deg: i32,
}

/// Forecast document: an ordered time series at 3-hour cadence
#[derive(Debug, Clone, Deserialize)]
pub struct Forecast {
    pub list: Vec<ForecastEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEntry {
    /// Epoch seconds, UTC
    pub dt: i64,
    pub main: Thermals,
    #[serde(default)]
    pub weather: Vec<ConditionSummary>,
    pub wind: Wind,
    /// Probability of precipitation, 0.0..=1.0
    #[serde(default)]
    pub pop: f64,
}

/// The combined pair of provider documents for one fetch.
///
/// Ephemeral: owned by the request that fetched it, never persisted.
#[derive(Debug, Clone)]
pub struct RawWeatherPayload {
    pub current: CurrentConditions,
    pub forecast: Forecast,
}

// ---------------------------------------------------------------------------
// View model
// ---------------------------------------------------------------------------

/// Normalized weather bundle handed to the presentation layer.
///
/// Built fresh per request and never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherViewModel {
    pub current: CurrentView,
    pub hourly: Vec<HourlyView>,
    pub daily: Vec<DailyView>,
    pub tomorrow_outlook: String,
    pub alerts: Vec<WeatherAlert>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentView {
    pub city: String,
    pub country: String,
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: u8,
    pub pressure: u32,
    pub visibility: u32,
    pub description: String,
    pub icon: String,
    pub wind_speed: f64,
    pub wind_deg: i32,
    /// Local time, `%H:%M`
    pub sunrise: String,
    pub sunset: String,
    /// Placeholder value, see [`crate::placeholder`]
    pub uv_index: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyView {
    /// Local time, `%H:%M`
    pub time: String,
    pub temp: f64,
    pub icon: String,
    pub humidity: u8,
    pub wind_speed: f64,
    pub description: String,
    /// Percentage, derived from the provider's probability (0..=1)
    pub precipitation: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyView {
    /// "Today" for the first entry, otherwise a Mon..Sun label
    pub day: String,
    /// `%b %d`, e.g. "Mar 04"
    pub date: String,
    pub high: f64,
    pub low: f64,
    pub icon: String,
    /// Placeholder value, see [`crate::placeholder`]
    pub precipitation: u8,
    pub description: String,
    pub wind_speed: f64,
}

/// Severe weather alert. The alerts feed is an unimplemented extension
/// point; the gateway currently always returns an empty list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherAlert {
    pub event: String,
    pub description: String,
}
