//! Weather gateway and view-model builder for Skycast
//!
//! Fetches current conditions and the 5-day/3-hour forecast from an
//! OpenWeatherMap-style provider and reshapes them into the view model
//! consumed by the HTTP layer.

pub mod placeholder;
pub mod provider;
pub mod types;
pub mod view;

pub use provider::{WeatherError, WeatherGateway};
pub use types::*;
pub use view::build_view_model;
