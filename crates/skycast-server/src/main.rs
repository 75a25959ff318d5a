use anyhow::Result;

use skycast_core::Config;
use skycast_server::{build_router, AppState};
use skycast_services::FavoritesStore;
use skycast_weather::WeatherGateway;

#[tokio::main]
async fn main() -> Result<()> {
    skycast_core::init()?;

    let config = Config::load()?;
    config.validate()?;

    let gateway = WeatherGateway::new(&config.provider_base_url, &config.api_key, &config.units)?;
    let favorites = FavoritesStore::new(&config.favorites_path);
    let state = AppState::new(gateway, favorites, &config.default_city);

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("Skycast listening on {}", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
