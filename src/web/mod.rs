//! Web API module for the CRM dashboard settings.
//!
//! This module exposes the settings context to the dashboard front end,
//! renders the active theme as CSS, and gates page routes on the
//! `admin_token` session cookie.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/settings` - Sidebar layout, appearance settings and color mode
//! - `GET|PATCH /api/settings/sidebar` - Read or partially update the sidebar layout
//! - `GET /api/settings/appearance` - Read appearance settings
//! - `PUT /api/settings/appearance/theme` - Select a named theme
//! - `PUT /api/settings/appearance/tweakcn` - Select a tweak preset
//! - `PUT /api/settings/appearance/radius` - Set the corner radius
//! - `POST /api/settings/appearance/import` - Import a theme (CSS or JSON)
//! - `POST /api/settings/appearance/reset` - Restore defaults
//! - `PUT /api/settings/mode` - Switch light/dark
//! - `GET /api/themes` - List named themes and tweak presets
//! - `GET /theme.css` - Computed style for the current state
//!
//! Page routes (`/`, `/dashboard`, `/settings`, `/sign-in`) sit behind the
//! session gate in [`gate`]. Unrouted page paths are gated as well before
//! they answer 404.

pub mod gate;

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware,
    response::{Html, IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::models::{AppearanceSettings, ImportedTheme, SidebarConfig, SidebarPatch};
use crate::settings::SettingsContext;
use crate::storage::{DurableStore, FileStore};
use crate::theme::{self, StyleAssignments};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    config: Arc<Config>,
    /// Settings context (single writer, guarded by a mutex)
    settings: Arc<Mutex<SettingsContext>>,
}

impl AppState {
    /// Creates a new application state over `storage` and mounts the settings.
    pub fn new(config: Config, storage: Arc<dyn DurableStore>) -> Self {
        let dark = config.ui.theme_mode.prefers_dark();
        let mut settings = SettingsContext::with_document(storage, dark);
        settings.mount();

        Self {
            config: Arc::new(config),
            settings: Arc::new(Mutex::new(settings)),
        }
    }

    /// Creates a state backed by the configured storage directory.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let storage_dir = config.storage_dir()?;
        info!("Settings storage: {}", storage_dir.display());
        Ok(Self::new(config, Arc::new(FileStore::new(storage_dir))))
    }

    /// Returns the application configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn lock(&self) -> Result<MutexGuard<'_, SettingsContext>, ApiFailure> {
        self.settings.lock().map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("Settings state is unavailable")),
            )
        })
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Full settings snapshot.
#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    /// Current sidebar layout.
    pub sidebar: SidebarConfig,
    /// Current appearance settings.
    pub appearance: AppearanceSettings,
    /// Whether dark mode is active.
    pub dark: bool,
}

/// Appearance settings together with the style they produce.
#[derive(Debug, Serialize)]
pub struct AppearanceResponse {
    /// Current appearance settings.
    pub appearance: AppearanceSettings,
    /// Applied custom properties.
    pub assignments: BTreeMap<String, String>,
    /// Whether dark mode is active.
    pub dark: bool,
}

/// Named theme selection request. An empty id returns to the default palette.
#[derive(Debug, Deserialize)]
pub struct ThemeRequest {
    /// Named theme id.
    pub theme: String,
}

/// Tweak preset selection request. An empty id returns to the default palette.
#[derive(Debug, Deserialize)]
pub struct PresetRequest {
    /// Tweak preset id.
    pub preset: String,
}

/// Radius update request.
#[derive(Debug, Deserialize)]
pub struct RadiusRequest {
    /// CSS length, e.g. "0.75rem".
    pub radius: String,
}

/// Theme import request. Exactly one of the fields is expected.
#[derive(Debug, Deserialize)]
pub struct ImportRequest {
    /// Theme editor export: CSS, or JSON text.
    #[serde(default)]
    pub css: Option<String>,
    /// Structured payload, applied as given.
    #[serde(default)]
    pub theme: Option<ImportedTheme>,
}

/// Color mode request.
#[derive(Debug, Deserialize)]
pub struct ModeRequest {
    /// True for dark mode.
    pub dark: bool,
}

/// Theme catalog response.
#[derive(Debug, Serialize)]
pub struct ThemeListResponse {
    /// Named color themes.
    pub themes: Vec<ThemeInfo>,
    /// Tweak presets.
    pub presets: Vec<ThemeInfo>,
}

/// Catalog entry.
#[derive(Debug, Serialize)]
pub struct ThemeInfo {
    /// Identifier to select the entry with.
    pub id: String,
    /// Display name.
    pub label: String,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

type ApiFailure = (StatusCode, Json<ApiError>);

fn appearance_response(ctx: &SettingsContext, assignments: StyleAssignments) -> AppearanceResponse {
    AppearanceResponse {
        appearance: ctx.appearance().clone(),
        assignments: assignments.into_map(),
        dark: ctx.is_dark(),
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/settings - Full settings snapshot.
async fn get_settings(
    State(state): State<AppState>,
) -> Result<Json<SettingsResponse>, ApiFailure> {
    let ctx = state.lock()?;
    Ok(Json(SettingsResponse {
        sidebar: ctx.sidebar(),
        appearance: ctx.appearance().clone(),
        dark: ctx.is_dark(),
    }))
}

/// GET /api/settings/sidebar - Current sidebar layout.
async fn get_sidebar(State(state): State<AppState>) -> Result<Json<SidebarConfig>, ApiFailure> {
    Ok(Json(state.lock()?.sidebar()))
}

/// PATCH /api/settings/sidebar - Shallow-merge a partial layout.
async fn update_sidebar(
    State(state): State<AppState>,
    Json(patch): Json<SidebarPatch>,
) -> Result<Json<SidebarConfig>, ApiFailure> {
    let mut ctx = state.lock()?;
    Ok(Json(ctx.update_sidebar(&patch)))
}

/// GET /api/settings/appearance - Appearance settings and applied style.
async fn get_appearance(
    State(state): State<AppState>,
) -> Result<Json<AppearanceResponse>, ApiFailure> {
    let ctx = state.lock()?;
    let assignments = ctx.resolved();
    Ok(Json(appearance_response(&ctx, assignments)))
}

/// PUT /api/settings/appearance/theme - Select a named theme.
async fn select_theme(
    State(state): State<AppState>,
    Json(request): Json<ThemeRequest>,
) -> Result<Json<AppearanceResponse>, ApiFailure> {
    if !request.theme.is_empty() && theme::find_named_theme(&request.theme).is_none() {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiError::new(format!("Unknown theme: {}", request.theme))),
        ));
    }

    let mut ctx = state.lock()?;
    let assignments = ctx.select_theme(&request.theme);
    Ok(Json(appearance_response(&ctx, assignments)))
}

/// PUT /api/settings/appearance/tweakcn - Select a tweak preset.
async fn select_preset(
    State(state): State<AppState>,
    Json(request): Json<PresetRequest>,
) -> Result<Json<AppearanceResponse>, ApiFailure> {
    if !request.preset.is_empty() && theme::find_tweak_preset(&request.preset).is_none() {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiError::new(format!("Unknown preset: {}", request.preset))),
        ));
    }

    let mut ctx = state.lock()?;
    let assignments = ctx.select_tweakcn_theme(&request.preset);
    Ok(Json(appearance_response(&ctx, assignments)))
}

/// PUT /api/settings/appearance/radius - Set the corner radius.
async fn set_radius(
    State(state): State<AppState>,
    Json(request): Json<RadiusRequest>,
) -> Result<Json<AppearanceResponse>, ApiFailure> {
    let radius = request.radius.trim();
    if radius.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError::new("Radius cannot be empty")),
        ));
    }

    let mut ctx = state.lock()?;
    let assignments = ctx.set_radius(radius);
    Ok(Json(appearance_response(&ctx, assignments)))
}

/// POST /api/settings/appearance/import - Import and activate a theme.
async fn import_theme(
    State(state): State<AppState>,
    Json(request): Json<ImportRequest>,
) -> Result<Json<AppearanceResponse>, ApiFailure> {
    let imported = match (request.theme, request.css) {
        (Some(theme), _) => theme,
        (None, Some(css)) => theme::parse_theme(&css).map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                Json(ApiError::with_details("Failed to import theme", format!("{e:#}"))),
            )
        })?,
        (None, None) => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ApiError::new("Expected a 'css' or 'theme' field")),
            ))
        }
    };

    let mut ctx = state.lock()?;
    let assignments = ctx.import_theme(imported);
    Ok(Json(appearance_response(&ctx, assignments)))
}

/// POST /api/settings/appearance/reset - Restore default appearance and layout.
async fn reset_appearance(
    State(state): State<AppState>,
) -> Result<Json<SettingsResponse>, ApiFailure> {
    let mut ctx = state.lock()?;
    ctx.reset();
    Ok(Json(SettingsResponse {
        sidebar: ctx.sidebar(),
        appearance: ctx.appearance().clone(),
        dark: ctx.is_dark(),
    }))
}

/// PUT /api/settings/mode - Switch between light and dark.
async fn set_mode(
    State(state): State<AppState>,
    Json(request): Json<ModeRequest>,
) -> Result<Json<AppearanceResponse>, ApiFailure> {
    let mut ctx = state.lock()?;
    let assignments = ctx.set_dark_mode(request.dark);
    Ok(Json(appearance_response(&ctx, assignments)))
}

/// GET /api/themes - Theme catalog.
async fn list_themes() -> Json<ThemeListResponse> {
    Json(ThemeListResponse {
        themes: theme::NAMED_THEMES
            .iter()
            .map(|t| ThemeInfo {
                id: t.id.to_string(),
                label: t.label.to_string(),
            })
            .collect(),
        presets: theme::TWEAK_PRESETS
            .iter()
            .map(|p| ThemeInfo {
                id: p.id.to_string(),
                label: p.label.to_string(),
            })
            .collect(),
    })
}

/// GET /theme.css - Computed style of the document root.
async fn theme_css(State(state): State<AppState>) -> Result<impl IntoResponse, ApiFailure> {
    let css = state.lock()?.scope().to_css();
    Ok(([(header::CONTENT_TYPE, "text/css; charset=utf-8")], css))
}

/// Renders a bare page shell carrying the layout and color mode.
fn page_shell(title: &str, ctx: &SettingsContext) -> Html<String> {
    let sidebar = ctx.sidebar();
    let class = if ctx.is_dark() { "dark" } else { "light" };
    Html(format!(
        "<!doctype html>\n<html class=\"{class}\">\n<head><title>{title}</title>\
         <link rel=\"stylesheet\" href=\"/theme.css\"></head>\n\
         <body data-sidebar-variant=\"{}\" data-sidebar-collapsible=\"{}\" data-sidebar-side=\"{}\">\
         <main id=\"app\"></main></body>\n</html>\n",
        sidebar.variant, sidebar.collapsible, sidebar.side
    ))
}

/// GET /dashboard, /settings - Authenticated page shells.
async fn app_page(State(state): State<AppState>) -> Result<Html<String>, ApiFailure> {
    let ctx = state.lock()?;
    Ok(page_shell("Dashboard", &ctx))
}

/// GET /sign-in - Public sign-in page shell.
async fn sign_in_page(State(state): State<AppState>) -> Result<Html<String>, ApiFailure> {
    let ctx = state.lock()?;
    Ok(page_shell("Sign in", &ctx))
}

/// Fallback for unrouted paths. Page paths go through the session gate
/// before answering 404, so anonymous users are still sent to sign in.
async fn not_found(request: Request) -> Response {
    let path = request.uri().path();
    if gate::is_page_path(path) {
        if let Some(redirect) = gate::redirect_for(&request) {
            return redirect;
        }
    }

    (
        StatusCode::NOT_FOUND,
        Json(ApiError::new(format!("Not found: {path}"))),
    )
        .into_response()
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - allow all origins for development
    // NOTE: restrict origins when the API is exposed beyond localhost.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let pages = Router::new()
        .route("/", get(app_page))
        .route("/dashboard", get(app_page))
        .route("/settings", get(app_page))
        .route("/sign-in", get(sign_in_page))
        .route_layer(middleware::from_fn(gate::require_session));

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Settings endpoints
        .route("/api/settings", get(get_settings))
        .route(
            "/api/settings/sidebar",
            get(get_sidebar).patch(update_sidebar),
        )
        .route("/api/settings/appearance", get(get_appearance))
        .route("/api/settings/appearance/theme", put(select_theme))
        .route("/api/settings/appearance/tweakcn", put(select_preset))
        .route("/api/settings/appearance/radius", put(set_radius))
        .route("/api/settings/appearance/import", post(import_theme))
        .route("/api/settings/appearance/reset", post(reset_appearance))
        .route("/api/settings/mode", put(set_mode))
        // Theme catalog and stylesheet
        .route("/api/themes", get(list_themes))
        .route("/theme.css", get(theme_css))
        .merge(pages)
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Errors
///
/// Returns an error if the storage directory cannot be resolved or the
/// server fails to start.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::from_config(config)?;
    let app = create_router(state);

    info!("Starting dashboard settings server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_state_mounts_on_creation() {
        let state = AppState::new(Config::default(), Arc::new(MemoryStore::new()));
        assert!(state.lock().unwrap().is_mounted());
    }

    #[test]
    fn test_page_shell_carries_layout() {
        let mut ctx = SettingsContext::with_document(Arc::new(MemoryStore::new()), true);
        ctx.mount();
        let Html(html) = page_shell("Dashboard", &ctx);
        assert!(html.contains("class=\"dark\""));
        assert!(html.contains("data-sidebar-variant=\"inset\""));
        assert!(html.contains("data-sidebar-side=\"left\""));
    }
}
