use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use city_explorer::api::{AppState, FAILURE_MESSAGE, HOME_MESSAGE};
use city_explorer::config::Config;
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn spawn_app(providers: &MockServer) -> (Arc<AppState>, Router) {
    let db_path =
        std::env::temp_dir().join(format!("city-explorer-api-test-{}.db", uuid::Uuid::new_v4()));

    let mut config = Config::default();
    config.database.url = format!("sqlite:{}", db_path.display());

    let base = providers.uri();
    config.geocode.base_url = format!("{base}/v1/search.php");
    config.geocode.api_key = "geo-key".to_string();
    config.weather.base_url = format!("{base}/v2.0/forecast/daily");
    config.weather.api_key = "weather-key".to_string();
    config.trails.base_url = format!("{base}/data/get-trails");
    config.trails.api_key = "trail-key".to_string();
    config.movies.base_url = format!("{base}/3/search/movie");
    config.movies.api_key = "movie-key".to_string();
    config.yelp.base_url = format!("{base}/v3/businesses/search");
    config.yelp.api_key = "yelp-key".to_string();

    let state = city_explorer::api::create_app_state_from_config(config)
        .await
        .expect("Failed to create app state");
    let router = city_explorer::api::router(state.clone());
    (state, router)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

fn json(body: &[u8]) -> serde_json::Value {
    serde_json::from_slice(body).unwrap()
}

async fn mount_seattle_geocode(server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/v1/search.php"))
        .and(query_param("q", "seattle"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "display_name": "Seattle, WA, USA", "lat": "47.60", "lon": "-122.33" }
        ])))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_home_page() {
    let providers = MockServer::start().await;
    let (_, app) = spawn_app(&providers).await;

    let (status, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, HOME_MESSAGE.as_bytes());
}

#[tokio::test]
async fn test_location_miss_then_hit() {
    let providers = MockServer::start().await;
    mount_seattle_geocode(&providers, 1).await;
    let (state, app) = spawn_app(&providers).await;

    let (status, body) = get(&app, "/location?city=seattle").await;
    assert_eq!(status, StatusCode::OK);

    let expected = serde_json::json!({
        "search_query": "seattle",
        "formatted_query": "Seattle, WA, USA",
        "latitude": "47.60",
        "longitude": "-122.33"
    });
    assert_eq!(json(&body), expected);
    assert_eq!(state.store().count_locations("seattle").await.unwrap(), 1);

    // Served from the store; the mock's expect(1) fails the test on a second call.
    let (status, body) = get(&app, "/location?city=seattle").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body), expected);
    assert_eq!(state.store().count_locations("seattle").await.unwrap(), 1);
}

#[tokio::test]
async fn test_location_prepopulated_row_skips_provider() {
    let providers = MockServer::start().await;
    mount_seattle_geocode(&providers, 0).await;
    let (state, app) = spawn_app(&providers).await;

    state
        .store()
        .insert_location(&city_explorer::models::Location {
            search_query: "seattle".to_string(),
            formatted_query: "Seattle, WA, USA".to_string(),
            latitude: "47.60".to_string(),
            longitude: "-122.33".to_string(),
        })
        .await
        .unwrap();

    let (status, body) = get(&app, "/location?city=seattle").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["formatted_query"], "Seattle, WA, USA");
}

#[tokio::test]
async fn test_location_unknown_city_is_generic_500() {
    let providers = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search.php"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({ "error": "Unable to geocode" })),
        )
        .expect(1)
        .mount(&providers)
        .await;
    let (state, app) = spawn_app(&providers).await;

    let (status, body) = get(&app, "/location?city=atlantis").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, FAILURE_MESSAGE.as_bytes());
    assert_eq!(state.store().count_locations("atlantis").await.unwrap(), 0);
}

#[tokio::test]
async fn test_location_empty_result_persists_nothing() {
    let providers = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&providers)
        .await;
    let (state, app) = spawn_app(&providers).await;

    let (status, _) = get(&app, "/location?city=nowhere").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(state.store().count_locations("nowhere").await.unwrap(), 0);
}

#[tokio::test]
async fn test_location_requires_city() {
    let providers = MockServer::start().await;
    mount_seattle_geocode(&providers, 0).await;
    let (_, app) = spawn_app(&providers).await;

    let (status, body) = get(&app, "/location").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, FAILURE_MESSAGE.as_bytes());

    let (status, _) = get(&app, "/location?city=").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_store_outage_never_calls_geocoder() {
    let providers = MockServer::start().await;
    mount_seattle_geocode(&providers, 0).await;
    let (state, app) = spawn_app(&providers).await;

    state.store().conn.clone().close().await.unwrap();

    let (status, body) = get(&app, "/location?city=seattle").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, FAILURE_MESSAGE.as_bytes());
}

#[tokio::test]
async fn test_weather() {
    let providers = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2.0/forecast/daily"))
        .and(query_param("lat", "47.60"))
        .and(query_param("lon", "-122.33"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                { "datetime": "2020-04-13", "weather": { "description": "Light rain" } },
                { "datetime": "2020-04-14", "weather": { "description": "Overcast clouds" } }
            ]
        })))
        .mount(&providers)
        .await;
    let (_, app) = spawn_app(&providers).await;

    let (status, body) = get(&app, "/weather?latitude=47.60&longitude=-122.33").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json(&body),
        serde_json::json!([
            { "forecast": "Light rain", "time": "2020-04-13" },
            { "forecast": "Overcast clouds", "time": "2020-04-14" }
        ])
    );
}

#[tokio::test]
async fn test_weather_provider_down_is_generic_500() {
    let providers = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2.0/forecast/daily"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&providers)
        .await;
    let (_, app) = spawn_app(&providers).await;

    let (status, body) = get(&app, "/weather?latitude=47.60&longitude=-122.33").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, FAILURE_MESSAGE.as_bytes());
}

#[tokio::test]
async fn test_trails() {
    let providers = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/get-trails"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "trails": [{
                "name": "Discovery Park Loop",
                "location": "Seattle, Washington",
                "length": 2.8,
                "url": "https://www.hikingproject.com/trail/7021490",
                "conditionStatus": "All Clear",
                "conditionDetails": "Dry",
                "conditionDate": "2019-05-04 09:12:00",
                "stars": 4.2,
                "starVotes": 11,
                "summary": "Bluffs, beach and forest."
            }]
        })))
        .mount(&providers)
        .await;
    let (_, app) = spawn_app(&providers).await;

    let (status, body) = get(&app, "/trails?latitude=47.60&longitude=-122.33").await;

    assert_eq!(status, StatusCode::OK);
    let trails = json(&body);
    assert_eq!(trails[0]["trail_url"], "https://www.hikingproject.com/trail/7021490");
    assert_eq!(trails[0]["condition_date"], "2019-05-04");
    assert_eq!(trails[0]["condition_time"], "09:12:00");
    assert_eq!(trails[0]["conditions"], "Dry");
    assert_eq!(trails[0]["star_votes"], 11);
}

#[tokio::test]
async fn test_movies() {
    let providers = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/search/movie"))
        .and(query_param("query", "seattle"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "page": 1,
            "results": [{
                "title": "Sleepless in Seattle",
                "overview": "A widower's son calls a radio show.",
                "vote_average": 6.6,
                "vote_count": 1470,
                "poster_path": "/poster.jpg",
                "popularity": 12.5,
                "release_date": "1993-06-24"
            }]
        })))
        .mount(&providers)
        .await;
    let (_, app) = spawn_app(&providers).await;

    let (status, body) = get(&app, "/movies?search_query=seattle").await;

    assert_eq!(status, StatusCode::OK);
    let movies = json(&body);
    assert_eq!(movies[0]["title"], "Sleepless in Seattle");
    assert_eq!(movies[0]["total_votes"], 1470);
    assert_eq!(movies[0]["image_url"], "https://image.tmdb.org/t/p/w500/poster.jpg");
    assert_eq!(movies[0]["released_on"], "1993-06-24");
}

#[tokio::test]
async fn test_yelp_second_page() {
    let providers = MockServer::start().await;

    let businesses: Vec<serde_json::Value> = (0..12)
        .map(|i| {
            serde_json::json!({
                "name": format!("Listing {i}"),
                "image_url": format!("https://example.com/{i}.jpg"),
                "url": format!("https://www.yelp.com/biz/{i}"),
                "rating": 4.0,
                "price": "$"
            })
        })
        .collect();

    Mock::given(method("GET"))
        .and(path("/v3/businesses/search"))
        .and(header("authorization", "Bearer yelp-key"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "businesses": businesses })),
        )
        .expect(1)
        .mount(&providers)
        .await;
    let (_, app) = spawn_app(&providers).await;

    let (status, body) = get(&app, "/yelp?latitude=47.60&longitude=-122.33&page=2").await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<String> = json(&body)
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        names,
        vec!["Listing 5", "Listing 6", "Listing 7", "Listing 8", "Listing 9"]
    );
}

#[tokio::test]
async fn test_yelp_invalid_page_skips_provider() {
    let providers = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/businesses/search"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&providers)
        .await;
    let (_, app) = spawn_app(&providers).await;

    let (status, _) = get(&app, "/yelp?latitude=47.60&longitude=-122.33&page=0").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_unknown_route_and_method_are_generic_500() {
    let providers = MockServer::start().await;
    let (_, app) = spawn_app(&providers).await;

    let (status, body) = get(&app, "/restaurants").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, FAILURE_MESSAGE.as_bytes());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/location?city=seattle")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
