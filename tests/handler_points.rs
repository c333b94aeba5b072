mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;

use praymap::api::handlers::points_handler;
use praymap::domain::entities::Role;

fn test_server(state: praymap::AppState) -> TestServer {
    let app = Router::new()
        .route("/api/points", get(points_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_points_empty_store() {
    let (state, _store) = common::create_test_state();
    let server = test_server(state);

    let response = server.get("/api/points").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["count"], 0);
    assert!(body["points"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_points_returns_seeded_points_newest_first() {
    let (state, store) = common::create_test_state();
    common::seed_point(&store, "first", Role::RedPins, 52.0, 21.0).await;
    common::seed_point(&store, "second", Role::BluePins, -33.8688, 151.2093).await;

    let server = test_server(state);
    let response = server.get("/api/points").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["count"], 2);

    let points = body["points"].as_array().unwrap();
    assert_eq!(points[0]["name"], "second");
    assert_eq!(points[0]["role"], "BLUE PINS");
    assert_eq!(points[0]["color"], "#1976d2");
    assert_eq!(points[0]["lat"], -33.8688);
    assert_eq!(points[0]["lng"], 151.2093);
    assert!(points[0]["created_time"].is_string());

    assert_eq!(points[1]["name"], "first");
}

#[tokio::test]
async fn test_points_max_query_parameter() {
    let (state, store) = common::create_test_state();
    for i in 0..3 {
        common::seed_point(&store, &format!("p{i}"), Role::BlackPins, 50.0, 20.0).await;
    }

    let server = test_server(state);
    let response = server.get("/api/points").add_query_param("max", 2).await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["count"], 2);
}

#[tokio::test]
async fn test_points_max_is_clamped_to_cap() {
    let (state, store) = common::create_test_state();
    common::seed_point(&store, "p", Role::RedPins, 50.0, 20.0).await;

    let server = test_server(state);
    // Cap in the test state is 5000; an absurd max must not error.
    let response = server
        .get("/api/points")
        .add_query_param("max", 9_999_999)
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["count"], 1);
}
