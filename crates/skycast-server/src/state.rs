use std::sync::Arc;

use skycast_services::FavoritesStore;
use skycast_weather::WeatherGateway;

/// Shared per-process state handed to every handler.
///
/// The gateway and store are both stateless between requests; there is no
/// in-process weather cache.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<WeatherGateway>,
    pub favorites: Arc<FavoritesStore>,
    pub default_city: String,
}

impl AppState {
    pub fn new(gateway: WeatherGateway, favorites: FavoritesStore, default_city: &str) -> Self {
        Self {
            gateway: Arc::new(gateway),
            favorites: Arc::new(favorites),
            default_city: default_city.to_string(),
        }
    }
}
