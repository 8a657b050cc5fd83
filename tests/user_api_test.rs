use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

async fn setup_state() -> storefront_backend::AppState {
    dotenvy::dotenv().ok();
    env::set_var("SERVER_ADDRESS", "127.0.0.1:0");

    let config = storefront_backend::config::Config::from_env().expect("config");
    let pool = storefront_backend::database::pool::create_pool(&config)
        .await
        .expect("pool");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");
    storefront_backend::AppState::new(pool)
}

fn user_routes(state: storefront_backend::AppState) -> Router {
    Router::new()
        .route(
            "/api/users",
            get(storefront_backend::routes::user::list_users)
                .post(storefront_backend::routes::user::create_user),
        )
        .route(
            "/api/users/:id",
            get(storefront_backend::routes::user::get_user),
        )
        .with_state(state)
}

fn unique_suffix() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos()
}

#[tokio::test]
async fn user_flow_end_to_end() {
    let state = setup_state().await;
    let pool = state.pool.clone();
    let app = user_routes(state);

    let suffix = unique_suffix();
    let username = format!("ana_{}", suffix);
    let email = format!("ana_{}@example.com", suffix);

    let req = Request::builder()
        .method("POST")
        .uri("/api/users")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "username": &username, "email": &email }).to_string(),
        ))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let created: JsonValue = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(created["username"], username.as_str());
    assert_eq!(created["email"], email.as_str());
    assert_eq!(created["is_active"], true);
    assert!(created["created_at"].is_string());
    let id = created["id"].as_i64().expect("generated id");

    let req = Request::builder()
        .method("GET")
        .uri(format!("/api/users/{}", id))
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let fetched: JsonValue = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(fetched["id"], id);
    assert_eq!(fetched["username"], username.as_str());

    let req = Request::builder()
        .method("GET")
        .uri("/api/users")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let listed: JsonValue = serde_json::from_slice(&bytes).unwrap();
    let items = listed.as_array().expect("array body");
    assert!(items.iter().any(|item| item["id"] == id));

    let count_before = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .expect("count");

    // same username, different email
    let req = Request::builder()
        .method("POST")
        .uri("/api/users")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "username": &username, "email": format!("other_{}@example.com", suffix) })
                .to_string(),
        ))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let conflict: JsonValue = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(conflict["detail"], "Usuario o email ya existe");

    // different username, same email
    let req = Request::builder()
        .method("POST")
        .uri("/api/users")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "username": format!("otro_{}", suffix), "email": &email }).to_string(),
        ))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let count_after = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .expect("count");
    assert_eq!(count_before, count_after);
}

#[tokio::test]
async fn user_not_found_and_bad_input() {
    let state = setup_state().await;
    let app = user_routes(state);

    // serial ids start at 1
    let req = Request::builder()
        .method("GET")
        .uri("/api/users/0")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body: JsonValue = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["detail"], "Usuario no encontrado");

    // non-integer path id never reaches the repository layer
    let req = Request::builder()
        .method("GET")
        .uri("/api/users/abc")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert!(resp.status().is_client_error());

    // missing required field
    let req = Request::builder()
        .method("POST")
        .uri("/api/users")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "username": "solo" }).to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert!(resp.status().is_client_error());

    // empty username fails validation
    let req = Request::builder()
        .method("POST")
        .uri("/api/users")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "username": "", "email": "empty@example.com" }).to_string(),
        ))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
