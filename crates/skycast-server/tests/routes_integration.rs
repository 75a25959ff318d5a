//! Integration tests for the HTTP surface, driving the router directly
//! with tower's `oneshot` against a wiremock provider.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use skycast_server::{build_router, AppState};
use skycast_services::FavoritesStore;
use skycast_weather::{WeatherGateway, WeatherViewModel};

fn current_body(city: &str) -> serde_json::Value {
    serde_json::json!({
        "name": city,
        "sys": {"country": "FR", "sunrise": 1700000000i64, "sunset": 1700040000i64},
        "main": {"temp": 12.3, "feels_like": 11.0, "temp_min": 10.0,
                 "temp_max": 14.2, "humidity": 70, "pressure": 1012},
        "visibility": 10000,
        "weather": [{"description": "light rain", "icon": "10d"}],
        "wind": {"speed": 4.1, "deg": 200}
    })
}

fn forecast_body(entries: usize) -> serde_json::Value {
    let base = 1700000000i64;
    let list: Vec<serde_json::Value> = (0..entries)
        .map(|i| {
            serde_json::json!({
                "dt": base + (i as i64) * 10800,
                "main": {"temp": 9.0, "feels_like": 8.0, "temp_min": 7.5,
                         "temp_max": 9.5, "humidity": 60, "pressure": 1018},
                "weather": [{"description": "overcast clouds", "icon": "04d"}],
                "wind": {"speed": 2.2, "deg": 90},
                "pop": 0.4
            })
        })
        .collect();

    serde_json::json!({"list": list})
}

/// Mock a provider that knows one city and 404s everything else
async fn provider_with_city(city: &str) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(wiremock::matchers::query_param("q", city))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body(city)))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(40)))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    mock_server
}

fn test_state(provider_url: &str, favorites_dir: &tempfile::TempDir) -> AppState {
    let gateway = WeatherGateway::new(provider_url, "test-key", "metric").unwrap();
    let favorites = FavoritesStore::new(favorites_dir.path().join("favorite_cities.json"));
    AppState::new(gateway, favorites, "Patna")
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_api_weather_success() {
    let provider = provider_with_city("Paris").await;
    let dir = tempfile::tempdir().unwrap();
    let app = build_router(test_state(&provider.uri(), &dir));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/weather/Paris")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let vm: WeatherViewModel = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(vm.current.city, "Paris");
    assert_eq!(vm.hourly.len(), 12);
    assert_eq!(vm.daily.len(), 6);
    assert!(vm.alerts.is_empty());
}

#[tokio::test]
async fn test_api_weather_unknown_city_is_404() {
    let provider = provider_with_city("Paris").await;
    let dir = tempfile::tempdir().unwrap();
    let app = build_router(test_state(&provider.uri(), &dir));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/weather/Atlantis")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "City not found");
}

#[tokio::test]
async fn test_index_renders_weather_page() {
    let provider = provider_with_city("Paris").await;
    let dir = tempfile::tempdir().unwrap();
    let app = build_router(test_state(&provider.uri(), &dir));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/?city=Paris")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Paris"));
    assert!(html.contains("Tomorrow:"));
}

#[tokio::test]
async fn test_index_shows_error_instead_of_crashing() {
    let provider = provider_with_city("Paris").await;
    let dir = tempfile::tempdir().unwrap();
    let app = build_router(test_state(&provider.uri(), &dir));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/?city=Atlantis")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // The page route reports the failure in the body, not the status
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("City not found"));
}

#[tokio::test]
async fn test_search_redirect() {
    let provider = provider_with_city("Paris").await;
    let dir = tempfile::tempdir().unwrap();
    let app = build_router(test_state(&provider.uri(), &dir));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/search")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("city=Berlin"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["redirect"], "/?city=Berlin");
}

#[tokio::test]
async fn test_search_defaults_city() {
    let provider = provider_with_city("Paris").await;
    let dir = tempfile::tempdir().unwrap();
    let app = build_router(test_state(&provider.uri(), &dir));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/search")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(""))
                .unwrap(),
        )
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["redirect"], "/?city=Patna");
}

#[tokio::test]
async fn test_favorite_add_and_remove() {
    let provider = provider_with_city("Paris").await;
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&provider.uri(), &dir);
    let store = state.favorites.clone();

    let app = build_router(state);
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/favorite")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"city": "Paris", "action": "add"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert!(store.load().contains_key("Paris"));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/favorite")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"city": "Paris", "action": "remove"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(!store.load().contains_key("Paris"));
}

#[tokio::test]
async fn test_favorites_page_skips_failed_cities() {
    let provider = provider_with_city("Paris").await;
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&provider.uri(), &dir);
    state.favorites.add("Paris");
    state.favorites.add("Atlantis");

    let app = build_router(state);
    let response = app
        .oneshot(Request::builder().uri("/favorites").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Paris"));
    assert!(!html.contains("Atlantis"));
}

#[tokio::test]
async fn test_geolocation_stub_returns_default_city() {
    let provider = provider_with_city("Paris").await;
    let dir = tempfile::tempdir().unwrap();
    let app = build_router(test_state(&provider.uri(), &dir));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/geolocation?lat=25.6&lon=85.1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["city"], "Patna");
}
