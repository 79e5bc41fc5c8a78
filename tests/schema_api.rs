use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
};
use chrono::{FixedOffset, TimeZone};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use serde_json::Value;
use tower::ServiceExt; // for `oneshot`
use uuid::Uuid;

use mon_projet::{
    config::AppConfig,
    db::entities::{recipe, video},
    routes::API_PREFIX,
    test_helpers::{empty_mock_db, test_router, test_router_with},
};

fn api_path(path: &str) -> String {
    format!("{API_PREFIX}{path}")
}

async fn call(router: axum::Router, method: &str, path: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method(method)
                .uri(api_path(path))
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("request");
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&bytes).expect("json body");
    (status, json)
}

async fn get(path: &str) -> (StatusCode, Value) {
    call(test_router(), "GET", path).await
}

#[tokio::test]
async fn builtin_schema_checks_clean() {
    let (status, body) = get("/schema/check").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], 200);
    assert_eq!(body["data"]["ok"], true);
    assert_eq!(body["data"]["relationships_checked"], 6);
    assert_eq!(body["data"]["issues"], Value::Array(vec![]));
}

#[tokio::test]
async fn summary_reports_registry_totals() {
    let (status, body) = get("/schema/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["described_tables"], 16);
    assert_eq!(body["data"]["total_columns"], 141);
    assert_eq!(body["data"]["declared_functions"], 16);
    assert_eq!(body["data"]["triggers"], 6);
}

#[tokio::test]
async fn stats_and_definitions_are_listed() {
    let (_, stats) = get("/schema/stats").await;
    let stats = stats["data"].as_array().expect("array");
    assert_eq!(stats.len(), 16);
    assert_eq!(stats[0]["name"], "videos");

    let (_, tables) = get("/schema/tables").await;
    assert_eq!(tables["data"].as_array().expect("array").len(), 23);
}

#[tokio::test]
async fn table_detail_combines_stats_and_definition() {
    let (status, body) = get("/schema/tables/recipes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["stats"]["columns"], 15);
    assert_eq!(body["data"]["definition"]["name"], "recipes");
}

#[tokio::test]
async fn unknown_table_is_not_found() {
    let (status, body) = get("/schema/tables/vidoes").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn relationships_are_parsed() {
    let (status, body) = get("/schema/relationships").await;
    assert_eq!(status, StatusCode::OK);
    let first = &body["data"][0];
    assert_eq!(first["from"], "recipes");
    assert_eq!(first["to"], "videos");
    assert_eq!(first["cardinality"], "1:1");
}

#[tokio::test]
async fn functions_are_listed() {
    let (_, body) = get("/schema/functions").await;
    let names: Vec<&str> = body["data"]
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|function| function["name"].as_str())
        .collect();
    assert_eq!(names.len(), 17);
    assert!(names.contains(&"handle_new_user"));
}

#[tokio::test]
async fn function_lookup_by_name() {
    let (status, body) = get("/schema/functions/calculate_distance").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["implemented"], true);
    assert_eq!(body["data"]["params"].as_array().expect("array").len(), 4);

    let (status, body) = get("/schema/functions/drop_everything").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "unknown function 'drop_everything'");
}

#[tokio::test]
async fn distance_between_paris_and_london() {
    let (status, body) =
        get("/geo/distance?lat1=48.8566&lon1=2.3522&lat2=51.5074&lon2=-0.1278").await;
    assert_eq!(status, StatusCode::OK);
    let km = body["data"]["distance_km"].as_f64().expect("number");
    assert!((km - 343.5).abs() < 1.0, "got {km}");
}

#[tokio::test]
async fn antipodal_distance_is_a_number() {
    let (status, body) =
        get("/geo/distance?lat1=-89.1808&lon1=-178.4608&lat2=89.1808&lon2=1.5392").await;
    assert_eq!(status, StatusCode::OK);
    let km = body["data"]["distance_km"]
        .as_f64()
        .expect("distance should be a number");
    assert!((km - 20015.1).abs() < 1.0, "got {km}");
}

#[tokio::test]
async fn out_of_range_coordinate_is_bad_request() {
    let (status, body) = get("/geo/maps-link?lat=95&lng=2").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"]
        .as_str()
        .expect("message")
        .starts_with("invalid latitude"));
}

#[tokio::test]
async fn maps_link_is_generated() {
    let (status, body) = get("/geo/maps-link?lat=48.8566&lng=2.3522").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["url"],
        "https://www.google.com/maps?q=48.8566,2.3522"
    );
}

#[tokio::test]
async fn missing_query_parameters_use_the_envelope() {
    let (status, body) = get("/geo/distance?lat1=1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn unknown_api_route_uses_the_envelope() {
    let (status, body) = get("/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn metrics_without_database_are_unavailable() {
    let id = Uuid::new_v4();
    let (status, body) = call(test_router(), "POST", &format!("/videos/{id}/views")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["message"], "Database is not configured");
}

fn ts() -> chrono::DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .expect("offset")
        .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
        .single()
        .expect("timestamp")
}

fn recipe_model(id: Uuid, view_count: i32) -> recipe::Model {
    recipe::Model {
        id,
        title: "Ratatouille".to_string(),
        description: None,
        image: None,
        category: "plats".to_string(),
        difficulty: None,
        cook_time: 45,
        prep_time: None,
        servings: 4,
        rating: 4.5,
        view_count,
        ingredients: serde_json::json!([]),
        instructions: vec!["Mijoter".to_string()],
        video_id: None,
        created_by: None,
        created_at: ts(),
    }
}

fn video_model(id: Uuid, views: i32, likes: i32) -> video::Model {
    video::Model {
        id,
        title: "Crêpes".to_string(),
        description: None,
        video_url: None,
        thumbnail: None,
        duration: None,
        category: "desserts".to_string(),
        views,
        likes,
        recipe_id: None,
        created_by: None,
        created_at: ts(),
        updated_at: None,
    }
}

async fn post_with_db(db: DatabaseConnection, path: &str) -> (StatusCode, Value, String) {
    let router = test_router_with(AppConfig::default(), Some(db.clone()));
    let (status, body) = call(router, "POST", path).await;
    let log = format!("{:?}", db.into_transaction_log());
    (status, body, log)
}

#[tokio::test]
async fn video_views_are_incremented_in_the_database() {
    let id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[video_model(id, 42, 4)]])
        .into_connection();

    let (status, body, log) = post_with_db(db, &format!("/videos/{id}/views")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["column"], "views");
    assert_eq!(body["data"]["value"], 42);
    assert!(log.contains(r#"\"views\" = \"views\" + $1"#), "{log}");
}

#[tokio::test]
async fn video_likes_are_incremented_in_the_database() {
    let id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[video_model(id, 10, 5)]])
        .into_connection();

    let (status, body, log) = post_with_db(db, &format!("/videos/{id}/likes")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["table"], "videos");
    assert_eq!(body["data"]["column"], "likes");
    assert_eq!(body["data"]["value"], 5);
    assert!(log.contains(r#"\"likes\" = \"likes\" + $1"#), "{log}");
}

#[tokio::test]
async fn recipe_views_are_incremented_in_the_database() {
    let id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[recipe_model(id, 8)]])
        .into_connection();

    let (status, body, log) = post_with_db(db, &format!("/recipes/{id}/views")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["table"], "recipes");
    assert_eq!(body["data"]["column"], "view_count");
    assert_eq!(body["data"]["value"], 8);
    assert!(
        log.contains(r#"\"view_count\" = \"view_count\" + $1"#),
        "{log}"
    );
}

#[tokio::test]
async fn unknown_recipe_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<recipe::Model>::new()])
        .into_connection();
    let router = test_router_with(AppConfig::default(), Some(db));
    let id = Uuid::new_v4();

    let (status, body) = call(router, "POST", &format!("/recipes/{id}/views")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn malformed_id_is_rejected() {
    let router = test_router_with(AppConfig::default(), Some(empty_mock_db()));
    let (status, body) = call(router, "POST", "/videos/not-a-uuid/views").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
}
