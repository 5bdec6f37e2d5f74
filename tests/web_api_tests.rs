//! Integration tests for the dashboard settings Web API.
//!
//! These tests require the `web` feature to be enabled:
//! ```bash
//! cargo test --features web web_api
//! ```

#![cfg(feature = "web")]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use crmdash::config::{Config, PathConfig, ThemeMode, UiConfig};
use crmdash::storage::{DurableStore, FileStore, MemoryStore};
use crmdash::web::{create_router, AppState};

/// Creates a test AppState over an in-memory store.
fn create_test_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let config = Config {
        ui: UiConfig {
            theme_mode: ThemeMode::Light,
        },
        ..Config::default()
    };
    let state = AppState::new(config, store.clone());
    (state, store)
}

/// Creates a test AppState backed by files in a temporary directory.
fn create_file_state(temp_dir: &TempDir) -> AppState {
    let config = Config {
        paths: PathConfig {
            storage_dir: Some(temp_dir.path().to_path_buf()),
        },
        ui: UiConfig {
            theme_mode: ThemeMode::Light,
        },
        ..Config::default()
    };
    AppState::from_config(config).expect("Failed to create app state")
}

async fn send(app: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

async fn send_json(app: &axum::Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
    )
    .await
}

/// Issues a page request, optionally carrying a cookie header.
async fn get_page(app: &axum::Router, uri: &str, cookie: Option<&str>) -> axum::response::Response {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

fn location(response: &axum::response::Response) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

// ============================================================================
// Health and settings snapshot
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let (state, _store) = create_test_state();
    let app = create_router(state);

    let (status, json) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_get_settings_fresh_session() {
    let (state, store) = create_test_state();
    let app = create_router(state);

    let (status, json) = get_json(&app, "/api/settings").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["sidebar"]["variant"], "inset");
    assert_eq!(json["sidebar"]["collapsible"], "offcanvas");
    assert_eq!(json["sidebar"]["side"], "left");
    assert_eq!(json["appearance"]["selectedTheme"], "");
    assert_eq!(json["appearance"]["selectedTweakcnTheme"], "");
    assert_eq!(json["appearance"]["selectedRadius"], "0.5rem");
    assert!(json["appearance"]["importedTheme"].is_null());
    assert_eq!(json["dark"], false);

    // Mounting alone never writes
    assert!(store.is_empty());
}

// ============================================================================
// Sidebar
// ============================================================================

#[tokio::test]
async fn test_patch_sidebar_merges_and_persists() {
    let (state, store) = create_test_state();
    let app = create_router(state);

    let (status, json) =
        send_json(&app, "PATCH", "/api/settings/sidebar", json!({"side": "right"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["side"], "right");
    assert_eq!(json["variant"], "inset");
    assert_eq!(json["collapsible"], "offcanvas");

    let stored: Value =
        serde_json::from_str(&store.get_item("sidebar-config").unwrap().unwrap()).unwrap();
    assert_eq!(stored["side"], "right");

    let (_, settings) = get_json(&app, "/api/settings").await;
    assert_eq!(settings["appearance"]["sidebarConfig"]["side"], "right");
}

#[tokio::test]
async fn test_patch_sidebar_rejects_unknown_variant() {
    let (state, _store) = create_test_state();
    let app = create_router(state);

    let (status, _) = send_json(
        &app,
        "PATCH",
        "/api/settings/sidebar",
        json!({"variant": "sideways"}),
    )
    .await;

    assert!(status.is_client_error());

    let (_, json) = get_json(&app, "/api/settings/sidebar").await;
    assert_eq!(json["variant"], "inset");
}

// ============================================================================
// Appearance
// ============================================================================

#[tokio::test]
async fn test_select_theme_applies_palette() {
    let (state, _store) = create_test_state();
    let app = create_router(state);

    let (status, json) = send_json(
        &app,
        "PUT",
        "/api/settings/appearance/theme",
        json!({"theme": "blue"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["appearance"]["selectedTheme"], "blue");
    assert_eq!(json["appearance"]["selectedTweakcnTheme"], "");
    assert_eq!(json["assignments"]["--primary"], "oklch(0.488 0.243 264.376)");
    assert_eq!(json["assignments"]["--radius"], "0.5rem");
}

#[tokio::test]
async fn test_select_unknown_theme_not_found() {
    let (state, _store) = create_test_state();
    let app = create_router(state);

    let (status, json) = send_json(
        &app,
        "PUT",
        "/api/settings/appearance/theme",
        json!({"theme": "plaid"}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("plaid"));
}

#[tokio::test]
async fn test_select_preset_clears_named_theme() {
    let (state, _store) = create_test_state();
    let app = create_router(state);

    send_json(
        &app,
        "PUT",
        "/api/settings/appearance/theme",
        json!({"theme": "rose"}),
    )
    .await;
    let (status, json) = send_json(
        &app,
        "PUT",
        "/api/settings/appearance/tweakcn",
        json!({"preset": "catppuccin"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["appearance"]["selectedTheme"], "");
    assert_eq!(json["appearance"]["selectedTweakcnTheme"], "catppuccin");
    assert_eq!(json["assignments"]["--font-sans"], "Montserrat, sans-serif");

    let (status, _) = send_json(
        &app,
        "PUT",
        "/api/settings/appearance/tweakcn",
        json!({"preset": "nope"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_set_radius() {
    let (state, _store) = create_test_state();
    let app = create_router(state);

    let (status, json) = send_json(
        &app,
        "PUT",
        "/api/settings/appearance/radius",
        json!({"radius": "1rem"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["appearance"]["selectedRadius"], "1rem");
    assert_eq!(json["assignments"]["--radius"], "1rem");

    let (status, _) = send_json(
        &app,
        "PUT",
        "/api/settings/appearance/radius",
        json!({"radius": "  "}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_import_css_theme() {
    let (state, _store) = create_test_state();
    let app = create_router(state);

    send_json(
        &app,
        "PUT",
        "/api/settings/appearance/theme",
        json!({"theme": "green"}),
    )
    .await;

    let css = ":root {\n  --primary: #112233;\n}\n.dark {\n  --primary: #445566;\n}\n";
    let (status, json) = send_json(
        &app,
        "POST",
        "/api/settings/appearance/import",
        json!({ "css": css }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["appearance"]["selectedTheme"], "");
    assert_eq!(json["appearance"]["importedTheme"]["light"]["primary"], "#112233");
    assert_eq!(json["assignments"]["--primary"], "#112233");

    // Imported themes follow the color mode
    let (status, json) = send_json(&app, "PUT", "/api/settings/mode", json!({"dark": true})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["dark"], true);
    assert_eq!(json["assignments"]["--primary"], "#445566");
}

#[tokio::test]
async fn test_import_structured_theme() {
    let (state, _store) = create_test_state();
    let app = create_router(state);

    let (status, json) = send_json(
        &app,
        "POST",
        "/api/settings/appearance/import",
        json!({"theme": {"light": {"background": "white"}, "dark": {"background": "black"}}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["assignments"]["--background"], "white");
}

#[tokio::test]
async fn test_import_rejects_bad_payloads() {
    let (state, _store) = create_test_state();
    let app = create_router(state);

    let (status, json) = send_json(
        &app,
        "POST",
        "/api/settings/appearance/import",
        json!({"css": "body { color: red; }"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["details"].is_string());

    let (status, _) =
        send_json(&app, "POST", "/api/settings/appearance/import", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_reset_restores_defaults_and_clears_storage() {
    let (state, store) = create_test_state();
    let app = create_router(state);

    send_json(
        &app,
        "PUT",
        "/api/settings/appearance/theme",
        json!({"theme": "violet"}),
    )
    .await;
    send_json(
        &app,
        "PATCH",
        "/api/settings/sidebar",
        json!({"variant": "floating"}),
    )
    .await;
    assert!(!store.is_empty());

    for _ in 0..2 {
        let (status, json) =
            send_json(&app, "POST", "/api/settings/appearance/reset", json!({})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["appearance"]["selectedTheme"], "");
        assert_eq!(json["appearance"]["selectedRadius"], "0.5rem");
        assert_eq!(json["sidebar"]["variant"], "inset");
    }

    assert!(store.get_item("sidebar-config").unwrap().is_none());
    assert!(store.get_item("appearance-settings").unwrap().is_none());
}

#[tokio::test]
async fn test_list_themes() {
    let (state, _store) = create_test_state();
    let app = create_router(state);

    let (status, json) = get_json(&app, "/api/themes").await;

    assert_eq!(status, StatusCode::OK);
    let themes: Vec<&str> = json["themes"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|t| t["id"].as_str())
        .collect();
    assert!(themes.contains(&"blue"));
    assert!(themes.contains(&"rose"));
    let presets = json["presets"].as_array().unwrap();
    assert!(presets.iter().any(|p| p["id"] == "modern-minimal"));
}

#[tokio::test]
async fn test_theme_css_reflects_selection() {
    let (state, _store) = create_test_state();
    let app = create_router(state);

    send_json(
        &app,
        "PUT",
        "/api/settings/appearance/radius",
        json!({"radius": "0.75rem"}),
    )
    .await;

    let response = get_page(&app, "/theme.css", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .starts_with("text/css"));

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let css = String::from_utf8(body.to_vec()).unwrap();
    assert!(css.starts_with(":root {"));
    assert!(css.contains("--radius: 0.75rem;"));
    assert!(css.contains("color-scheme: light;"));
}

#[tokio::test]
async fn test_settings_survive_restart() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    {
        let app = create_router(create_file_state(&temp_dir));
        send_json(
            &app,
            "PUT",
            "/api/settings/appearance/theme",
            json!({"theme": "orange"}),
        )
        .await;
        send_json(
            &app,
            "PATCH",
            "/api/settings/sidebar",
            json!({"collapsible": "icon"}),
        )
        .await;
    }

    let store = FileStore::new(temp_dir.path());
    assert!(store.get_item("appearance-settings").unwrap().is_some());

    let app = create_router(create_file_state(&temp_dir));
    let (_, json) = get_json(&app, "/api/settings").await;
    assert_eq!(json["appearance"]["selectedTheme"], "orange");
    assert_eq!(json["sidebar"]["collapsible"], "icon");
}

// ============================================================================
// Session gate
// ============================================================================

#[tokio::test]
async fn test_gate_redirects_anonymous_to_sign_in() {
    let (state, _store) = create_test_state();
    let app = create_router(state);

    for path in ["/", "/dashboard", "/settings"] {
        let response = get_page(&app, path, None).await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT, "{path}");
        assert_eq!(location(&response), Some("/sign-in"));
    }

    let response = get_page(&app, "/sign-in", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_gate_redirects_signed_in_to_dashboard() {
    let (state, _store) = create_test_state();
    let app = create_router(state);
    let cookie = Some("theme=dark; admin_token=abc123");

    for path in ["/", "/sign-in"] {
        let response = get_page(&app, path, cookie).await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT, "{path}");
        assert_eq!(location(&response), Some("/dashboard"));
    }

    let response = get_page(&app, "/dashboard", cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("data-sidebar-variant=\"inset\""));
}

#[tokio::test]
async fn test_gate_ignores_empty_token_and_api_routes() {
    let (state, _store) = create_test_state();
    let app = create_router(state);

    let response = get_page(&app, "/dashboard", Some("admin_token=")).await;
    assert_eq!(location(&response), Some("/sign-in"));

    let (status, _) = get_json(&app, "/api/settings").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_gate_applies_to_unrouted_pages() {
    let (state, _store) = create_test_state();
    let app = create_router(state);

    let response = get_page(&app, "/members", None).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), Some("/sign-in"));

    let response = get_page(&app, "/sign-in/forgot", Some("admin_token=t")).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), Some("/dashboard"));

    // Past the gate, unknown pages are still not found
    let response = get_page(&app, "/members", Some("admin_token=t")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let response = get_page(&app, "/sign-in/forgot", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_api_path_is_not_gated() {
    let (state, _store) = create_test_state();
    let app = create_router(state);

    let response = get_page(&app, "/api/unknown", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(location(&response), None);
}

#[tokio::test]
async fn test_reset_response_matches_applied_style() {
    let (state, _store) = create_test_state();
    let app = create_router(state);

    send_json(
        &app,
        "PUT",
        "/api/settings/appearance/radius",
        json!({"radius": "1rem"}),
    )
    .await;
    send_json(&app, "POST", "/api/settings/appearance/reset", json!({})).await;

    let response = get_page(&app, "/theme.css", None).await;
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let css = String::from_utf8(body.to_vec()).unwrap();
    assert!(css.contains("--radius: 0.5rem;"));
    assert!(css.contains("color-scheme: light;"));
}
