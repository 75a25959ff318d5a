//! View-model builder: reshapes the provider's combined payload into the
//! normalized structure the presentation layer consumes.

use chrono::{Datelike, Local, LocalResult, TimeZone};

use crate::placeholder;
use crate::types::{
    CurrentView, DailyView, HourlyView, RawWeatherPayload, WeatherAlert, WeatherViewModel,
};

/// Hourly entries taken from the head of the forecast series
const HOURLY_ENTRIES: usize = 12;

/// Forecast samples per day at the provider's 3-hour cadence
const SAMPLES_PER_DAY: usize = 8;

/// Future daily entries (today is synthesized separately)
const FUTURE_DAYS: usize = 6;

/// Monday-first, indexed by `Datelike::weekday().num_days_from_monday()`
const DAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Build the view model from a decoded provider payload.
///
/// Total over its input: the gateway already rejected payloads that don't
/// decode, and an empty forecast series just yields shorter outlooks.
pub fn build_view_model(raw: &RawWeatherPayload, alerts: Vec<WeatherAlert>) -> WeatherViewModel {
    let current = &raw.current;
    let series = &raw.forecast.list;
    let condition = current.weather.first().cloned().unwrap_or_default();

    let current_view = CurrentView {
        city: current.name.clone(),
        country: current.sys.country.clone(),
        temp: current.main.temp,
        feels_like: current.main.feels_like,
        temp_min: current.main.temp_min,
        temp_max: current.main.temp_max,
        humidity: current.main.humidity,
        pressure: current.main.pressure,
        visibility: current.visibility,
        description: condition.description.clone(),
        icon: condition.icon.clone(),
        wind_speed: current.wind.speed,
        wind_deg: current.wind.deg,
        sunrise: format_clock(current.sys.sunrise),
        sunset: format_clock(current.sys.sunset),
        uv_index: placeholder::uv_index(),
    };

    let hourly = series
        .iter()
        .take(HOURLY_ENTRIES)
        .map(|entry| {
            let cond = entry.weather.first().cloned().unwrap_or_default();
            HourlyView {
                time: format_clock(entry.dt),
                temp: entry.main.temp,
                icon: cond.icon,
                humidity: entry.main.humidity,
                wind_speed: entry.wind.speed,
                description: cond.description,
                precipitation: entry.pop * 100.0,
            }
        })
        .collect();

    // Today comes from the current-conditions document, not the forecast
    let mut daily = Vec::with_capacity(FUTURE_DAYS + 1);
    daily.push(DailyView {
        day: "Today".to_string(),
        date: Local::now().format("%b %d").to_string(),
        high: current.main.temp_max,
        low: current.main.temp_min,
        icon: condition.icon.clone(),
        precipitation: placeholder::precipitation_today(),
        description: condition.description.clone(),
        wind_speed: current.wind.speed,
    });

    // One sample per day at stride 8. Not a true daily min/max aggregate;
    // a series covering N whole days yields N future entries, with the
    // final sample standing in when the stride lands exactly at the end.
    for i in 1..=FUTURE_DAYS {
        let idx = i * SAMPLES_PER_DAY;
        let entry = if idx < series.len() {
            series.get(idx)
        } else if idx == series.len() {
            series.last()
        } else {
            None
        };
        let Some(entry) = entry else { break };

        let cond = entry.weather.first().cloned().unwrap_or_default();
        daily.push(DailyView {
            day: day_label(entry.dt),
            date: format_date(entry.dt),
            high: entry.main.temp_max,
            low: entry.main.temp_min,
            icon: cond.icon,
            precipitation: placeholder::precipitation_outlook(),
            description: cond.description,
            wind_speed: entry.wind.speed,
        });
    }

    let tomorrow_outlook = daily
        .get(1)
        .or_else(|| daily.first())
        .map(|day| format!("{}. High of {:.0}°", capitalize(&day.description), day.high))
        .unwrap_or_default();

    WeatherViewModel {
        current: current_view,
        hourly,
        daily,
        tomorrow_outlook,
        alerts,
    }
}

/// Epoch seconds to local `%H:%M`
fn format_clock(ts: i64) -> String {
    match Local.timestamp_opt(ts, 0) {
        LocalResult::Single(dt) => dt.format("%H:%M").to_string(),
        _ => String::new(),
    }
}

/// Epoch seconds to local `%b %d`
fn format_date(ts: i64) -> String {
    match Local.timestamp_opt(ts, 0) {
        LocalResult::Single(dt) => dt.format("%b %d").to_string(),
        _ => String::new(),
    }
}

fn day_label(ts: i64) -> String {
    match Local.timestamp_opt(ts, 0) {
        LocalResult::Single(dt) => {
            DAY_NAMES[dt.weekday().num_days_from_monday() as usize].to_string()
        }
        _ => String::new(),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
