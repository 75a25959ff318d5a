use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::Deserialize;
use serde_json::json;

use skycast_weather::build_view_model;

use crate::pages;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/search", post(search_handler))
        .route("/favorite", post(favorite_handler))
        .route("/favorites", get(favorites_handler))
        .route("/api/geolocation", get(geolocation_handler))
        .route("/api/weather/:city", get(api_weather_handler))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct CityQuery {
    city: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    city: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FavoriteRequest {
    city: String,
    /// "add" or "remove"; anything else is a no-op
    action: String,
}

#[derive(Debug, Deserialize)]
pub struct GeoQuery {
    #[allow(dead_code)]
    lat: Option<f64>,
    #[allow(dead_code)]
    lon: Option<f64>,
}

/// Weather page for a city. A failed fetch renders the error banner with a
/// 200 rather than an error status; only the JSON API distinguishes.
async fn index_handler(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> Html<String> {
    let city = query.city.unwrap_or_else(|| state.default_city.clone());

    match state.gateway.fetch_raw(&city).await {
        Some(raw) => {
            let alerts = state.gateway.alerts(&city).await;
            let weather = build_view_model(&raw, alerts);
            let favorites = state.favorites.list();
            Html(pages::weather_page(&city, &weather, &favorites))
        }
        None => Html(pages::error_page(&city, "City not found")),
    }
}

/// Search submissions redirect to the weather page for the city
async fn search_handler(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Json<serde_json::Value> {
    let city = form.city.unwrap_or_else(|| state.default_city.clone());
    Json(json!({ "redirect": format!("/?city={city}") }))
}

async fn favorite_handler(
    State(state): State<AppState>,
    Json(request): Json<FavoriteRequest>,
) -> Json<serde_json::Value> {
    match request.action.as_str() {
        "add" => state.favorites.add(&request.city),
        "remove" => state.favorites.remove(&request.city),
        other => {
            tracing::debug!("Ignoring unknown favorite action: {}", other);
        }
    }

    Json(json!({ "success": true }))
}

/// Current conditions for every favorited city. Cities whose fetch fails
/// are skipped rather than failing the whole page.
async fn favorites_handler(State(state): State<AppState>) -> Html<String> {
    let mut cities = Vec::new();

    for city in state.favorites.list() {
        let Some(raw) = state.gateway.fetch_raw(&city).await else {
            continue;
        };
        let alerts = state.gateway.alerts(&city).await;
        let weather = build_view_model(&raw, alerts);
        cities.push(pages::FavoriteSummary {
            city,
            current_temp: weather.current.temp,
            description: weather.current.description,
            icon: weather.current.icon,
        });
    }

    Html(pages::favorites_page(&cities))
}

/// Stub geolocation lookup. Coordinates are accepted and ignored; a real
/// reverse-geocoding integration would resolve them to a city.
async fn geolocation_handler(
    State(state): State<AppState>,
    Query(_query): Query<GeoQuery>,
) -> Json<serde_json::Value> {
    Json(json!({ "city": state.default_city }))
}

async fn api_weather_handler(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Response {
    match state.gateway.fetch_raw(&city).await {
        Some(raw) => {
            let alerts = state.gateway.alerts(&city).await;
            Json(build_view_model(&raw, alerts)).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "City not found" })),
        )
            .into_response(),
    }
}
