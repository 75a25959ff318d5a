//! Minimal HTML rendering for the page routes.
//!
//! No template engine; pages are assembled with `format!` the same way the
//! JSON responses are assembled with `json!`. User-supplied city names are
//! escaped before interpolation.

use skycast_weather::WeatherViewModel;

/// Row for the favorites overview page
pub struct FavoriteSummary {
    pub city: String,
    pub current_temp: f64,
    pub description: String,
    pub icon: String,
}

pub fn weather_page(city: &str, weather: &WeatherViewModel, favorites: &[String]) -> String {
    let current = &weather.current;

    let hourly_rows: String = weather
        .hourly
        .iter()
        .map(|hour| {
            format!(
                "<tr><td>{}</td><td>{:.1}°</td><td>{}</td><td>{:.0}%</td></tr>\n",
                hour.time,
                hour.temp,
                escape(&hour.description),
                hour.precipitation
            )
        })
        .collect();

    let daily_rows: String = weather
        .daily
        .iter()
        .map(|day| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{:.1}° / {:.1}°</td><td>{}</td><td>{}%</td></tr>\n",
                day.day,
                day.date,
                day.high,
                day.low,
                escape(&day.description),
                day.precipitation
            )
        })
        .collect();

    let favorite_items: String = favorites
        .iter()
        .map(|name| format!("<li><a href=\"/?city={}\">{}</a></li>\n", escape(name), escape(name)))
        .collect();

    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Skycast - {city}</title></head>\n<body>\n\
         <h1>{city}, {country}</h1>\n\
         <p class=\"current\">{temp:.1}° (feels like {feels_like:.1}°), {description}</p>\n\
         <p>Humidity {humidity}% · Pressure {pressure} hPa · Wind {wind_speed} m/s · UV {uv}</p>\n\
         <p>Sunrise {sunrise} · Sunset {sunset}</p>\n\
         <p class=\"outlook\">Tomorrow: {outlook}</p>\n\
         <h2>Next hours</h2>\n<table>\n{hourly_rows}</table>\n\
         <h2>Week</h2>\n<table>\n{daily_rows}</table>\n\
         <h2>Favorites</h2>\n<ul>\n{favorite_items}</ul>\n\
         </body>\n</html>\n",
        city = escape(&current.city),
        country = escape(&current.country),
        temp = current.temp,
        feels_like = current.feels_like,
        description = escape(&current.description),
        humidity = current.humidity,
        pressure = current.pressure,
        wind_speed = current.wind_speed,
        uv = current.uv_index,
        sunrise = current.sunrise,
        sunset = current.sunset,
        outlook = escape(&weather.tomorrow_outlook),
    )
}

pub fn error_page(city: &str, message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Skycast</title></head>\n<body>\n\
         <h1>{}</h1>\n<p class=\"error\">{}</p>\n\
         <p><a href=\"/\">Back</a></p>\n\
         </body>\n</html>\n",
        escape(city),
        escape(message)
    )
}

pub fn favorites_page(cities: &[FavoriteSummary]) -> String {
    let rows: String = cities
        .iter()
        .map(|summary| {
            format!(
                "<tr><td><a href=\"/?city={city}\">{city}</a></td>\
                 <td>{temp:.1}°</td><td>{description}</td><td>{icon}</td></tr>\n",
                city = escape(&summary.city),
                temp = summary.current_temp,
                description = escape(&summary.description),
                icon = escape(&summary.icon),
            )
        })
        .collect();

    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Skycast - Favorites</title></head>\n<body>\n\
         <h1>Favorite cities</h1>\n<table>\n{rows}</table>\n\
         </body>\n</html>\n"
    )
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
