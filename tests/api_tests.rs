mod common;

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use cinecat::state::SharedState;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

async fn spawn_app() -> (Router, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = common::test_config(&dir);
    let store = common::seeded_store(&config).await;

    let shared = Arc::new(SharedState::with_store(config, store));
    let state = cinecat::api::create_app_state(shared, None);
    (cinecat::api::router(state).await, dir)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(app: &Router, uri: &str) -> axum::response::Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> axum::response::Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref());
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
}

/// Registers `username` and returns the session cookie.
async fn register(app: &Router, username: &str) -> String {
    let response = send(
        app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({ "username": username, "password": "correct-horse" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("register must start a session")
        .to_str()
        .unwrap();
    cookie.split(';').next().unwrap().to_string()
}

#[tokio::test]
async fn test_health() {
    let (app, _dir) = spawn_app().await;

    let response = get(&app, "/api/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["status"], "ok");
    assert_eq!(json["data"]["database"], true);
}

#[tokio::test]
async fn test_metrics_disabled_is_404() {
    let (app, _dir) = spawn_app().await;

    let response = get(&app, "/api/metrics").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_movie() {
    let (app, _dir) = spawn_app().await;

    let response = get(&app, "/api/content/1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["title"], "Inception");
    assert_eq!(data["content_type"], "movie");
    assert_eq!(data["type_payload"]["type"], "movie");
    assert_eq!(data["type_payload"]["runtime_minutes"], 148);
    assert_eq!(data["countries"].as_array().unwrap().len(), 2);
    assert_eq!(data["genres"][0]["name"], "Science Fiction");
    assert_eq!(data["actors"][0]["name"], "Leonardo DiCaprio");
    assert_eq!(data["actors"][0]["photo_url"], "/static/persons/1.jpg");
    assert_eq!(data["directors"][0]["name"], "Christopher Nolan");
    assert_eq!(data["writers"][0]["name"], "Christopher Nolan");
    assert_eq!(data["composers"][0]["name"], "Hans Zimmer");
    assert_eq!(data["producers"].as_array().unwrap().len(), 0);
    assert_eq!(data["poster_url"], "/static/posters/1.jpg");
    assert_eq!(data["picture_urls"].as_array().unwrap().len(), 2);
    assert_eq!(data["facts"][0], "Shot in six countries");
    assert!(data["rating"].is_null());
}

#[tokio::test]
async fn test_get_series_keeps_season_order() {
    let (app, _dir) = spawn_app().await;

    let response = get(&app, "/api/content/2").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let payload = &json["data"]["type_payload"];
    assert_eq!(payload["type"], "series");
    assert_eq!(payload["year_start"], 2008);

    let seasons = payload["seasons"].as_array().unwrap();
    assert_eq!(seasons.len(), 2);
    assert_eq!(seasons[0]["title"], "Season 1");
    assert_eq!(seasons[0]["episodes"].as_array().unwrap().len(), 2);
    assert_eq!(seasons[0]["episodes"][0]["title"], "Pilot");
    assert_eq!(seasons[1]["episodes"][0]["title"], "Seven Thirty-Seven");
}

#[tokio::test]
async fn test_missing_content_is_404() {
    let (app, _dir) = spawn_app().await;

    let response = get(&app, "/api/content/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Content 999 does not exist");
}

#[tokio::test]
async fn test_invalid_ids_are_rejected() {
    let (app, _dir) = spawn_app().await;

    assert_eq!(get(&app, "/api/content/0").await.status(), StatusCode::BAD_REQUEST);
    assert_eq!(get(&app, "/api/persons/-1").await.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        get(&app, "/api/content?limit=0").await.status(),
        StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn test_preview_and_listing() {
    let (app, _dir) = spawn_app().await;

    let response = get(&app, "/api/content/1/preview").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Inception");
    assert!(json["data"].get("facts").is_none());
    assert!(json["data"].get("composers").is_none());

    let json = body_json(get(&app, "/api/content").await).await;
    let titles: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["Inception", "Breaking Bad"]);

    let json = body_json(get(&app, "/api/content?offset=1&limit=1").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["title"], "Breaking Bad");
}

#[tokio::test]
async fn test_search_and_genre_listing() {
    let (app, _dir) = spawn_app().await;

    let json = body_json(get(&app, "/api/content/search?q=incep").await).await;
    let results = json["data"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["id"], 1);

    let response = get(&app, "/api/content/search?q=%20%20").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(get(&app, "/api/genres/1/content").await).await;
    let results = json["data"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["title"], "Breaking Bad");
}

#[tokio::test]
async fn test_get_person() {
    let (app, _dir) = spawn_app().await;

    let response = get(&app, "/api/persons/2").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Christopher Nolan");
    assert_eq!(json["data"]["content_ids"], json!([1]));

    assert_eq!(get(&app, "/api/persons/77").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_auth_flow() {
    let (app, _dir) = spawn_app().await;

    assert_eq!(get(&app, "/api/auth/me").await.status(), StatusCode::UNAUTHORIZED);

    let cookie = register(&app, "alice").await;

    let response = send(&app, "GET", "/api/auth/me", Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["username"], "alice");

    let response = send(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({ "username": "alice", "password": "another-pass" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": "alice", "password": "wrong-password" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": "alice", "password": "correct-horse" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_some());

    let response = send(&app, "POST", "/api/auth/logout", Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, "GET", "/api/auth/me", Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_short_password_is_rejected() {
    let (app, _dir) = spawn_app().await;

    let response = send(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({ "username": "bob", "password": "short" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_reviews_and_rating() {
    let (app, _dir) = spawn_app().await;

    let response = send(
        &app,
        "POST",
        "/api/content/1/reviews",
        None,
        Some(json!({ "score": 9 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let alice = register(&app, "alice").await;
    let bob = register(&app, "bob").await;

    let response = send(
        &app,
        "POST",
        "/api/content/1/reviews",
        Some(&alice),
        Some(json!({ "score": 9, "text": "Layered." })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["username"], "alice");
    assert_eq!(json["data"]["score"], 9);

    let response = send(
        &app,
        "POST",
        "/api/content/1/reviews",
        Some(&alice),
        Some(json!({ "score": 3 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = send(
        &app,
        "POST",
        "/api/content/1/reviews",
        Some(&bob),
        Some(json!({ "score": 11 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(
        &app,
        "POST",
        "/api/content/1/reviews",
        Some(&bob),
        Some(json!({ "score": 6 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(
        &app,
        "POST",
        "/api/content/999/reviews",
        Some(&bob),
        Some(json!({ "score": 6 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(get(&app, "/api/content/1/reviews").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let json = body_json(get(&app, "/api/content/1").await).await;
    assert_eq!(json["data"]["rating"], 7.5);
}

#[tokio::test]
async fn test_favorites() {
    let (app, _dir) = spawn_app().await;
    let cookie = register(&app, "alice").await;

    let response = send(&app, "PUT", "/api/favorites/2", Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, "PUT", "/api/favorites/999", Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, "GET", "/api/favorites", Some(&cookie), None).await;
    let json = body_json(response).await;
    let favorites = json["data"].as_array().unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["title"], "Breaking Bad");

    let response = send(&app, "DELETE", "/api/favorites/2", Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, "DELETE", "/api/favorites/2", Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    assert_eq!(get(&app, "/api/favorites").await.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_static_upload_and_serve() {
    let (app, _dir) = spawn_app().await;
    let cookie = register(&app, "alice").await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/static/posters/new.png")
                .header(header::COOKIE, &cookie)
                .body(Body::from(vec![0x89, b'P', b'N', b'G']))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["url"], "/static/posters/new.png");

    let response = get(&app, "/static/posters/new.png").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        mime::IMAGE_PNG.as_ref()
    );
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], &[0x89, b'P', b'N', b'G']);

    assert_eq!(
        get(&app, "/static/posters/missing.png").await.status(),
        StatusCode::NOT_FOUND
    );

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/static/posters/anon.png")
                .body(Body::from("x"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
