//! In-process fake backend for integration tests.
//!
//! Unknown routes echo the request back as JSON so tests can assert on the
//! method, path, query, headers and body the client produced.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::{Value, json};

use sealia_admin_client::ApiClient;
use sealia_admin_client::token::{MemoryTokenStore, TokenStore};

pub const PASSWORD: &str = "hunter2";

fn header_value(headers: &HeaderMap, name: header::HeaderName) -> Value {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| Value::String(v.to_string()))
        .unwrap_or(Value::Null)
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Json<Value> {
    let body = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned()))
    };

    Json(json!({
        "method": method.as_str(),
        "path": uri.path(),
        "query": uri.query(),
        "authorization": header_value(&headers, header::AUTHORIZATION),
        "content_type": header_value(&headers, header::CONTENT_TYPE),
        "body": body,
    }))
}

async fn login(Json(body): Json<Value>) -> impl IntoResponse {
    let email = body["email"].as_str().unwrap_or_default().to_string();

    if body["password"] != PASSWORD {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid email or password" })),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "token": format!("tok-{email}"),
            "refresh_token": "refresh-1",
            "user": { "email": email, "role": "super_admin" }
        })),
    )
}

async fn register(Json(body): Json<Value>) -> impl IntoResponse {
    let email = body["email"].as_str().unwrap_or_default();

    Json(json!({
        "accessToken": format!("reg-{email}"),
        "refreshToken": "refresh-reg",
        "user": { "email": email, "name": body["name"] }
    }))
}

async fn refresh(Json(body): Json<Value>) -> impl IntoResponse {
    match body["refresh_token"].as_str() {
        Some(refresh) if !refresh.is_empty() => (
            StatusCode::OK,
            Json(json!({ "token": format!("fresh-{refresh}"), "user": null })),
        ),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Refresh token missing" })),
        ),
    }
}

fn router() -> Router {
    Router::new()
        .route(
            "/api/fail/message",
            get(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "message": "Agreement is already signed" })),
                )
            }),
        )
        .route(
            "/api/fail/plain",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
        )
        .route(
            "/api/fail/forbidden",
            get(|| async { (StatusCode::FORBIDDEN, Json(json!({ "error": "nope" }))) }),
        )
        .route("/api/ok/empty", get(|| async { StatusCode::OK }))
        .route("/api/ok/text", get(|| async { "definitely not json" }))
        .route(
            "/api/ok/agreement",
            get(|| async {
                Json(json!({
                    "id": "ag_1",
                    "title": "Tenancy agreement",
                    "signers": [{ "email": "a@example.com", "signed": true }],
                    "status": "completed"
                }))
            }),
        )
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
        .route("/api/auth/refresh", post(refresh))
        .route(
            "/api/auth/logout",
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "session store unavailable" })),
                )
            }),
        )
        .fallback(echo)
}

/// Start the fake backend and return its origin (`http://127.0.0.1:<port>`).
pub async fn spawn_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router()).await.unwrap();
    });

    format!("http://{addr}")
}

/// Client pointed at `<origin>/api` with a fresh in-memory token store.
pub fn client_for(origin: &str) -> (ApiClient, Arc<MemoryTokenStore>) {
    let store = Arc::new(MemoryTokenStore::new());
    let client = ApiClient::new(&format!("{origin}/api"), store.clone() as Arc<dyn TokenStore>)
        .unwrap();
    (client, store)
}

/// Decode an echoed query string into ordered pairs.
pub fn query_pairs(echo: &Value) -> Vec<(String, String)> {
    echo["query"]
        .as_str()
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .into_owned()
                .collect()
        })
        .unwrap_or_default()
}
