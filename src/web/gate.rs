//! Session gate for page routes.

use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use crate::access::{self, GateDecision};

/// Path prefixes served without a session.
const UNGATED_PREFIXES: [&str; 3] = ["/api/", "/health", "/theme.css"];

/// Returns true if `path` is a page path the gate applies to.
#[must_use]
pub fn is_page_path(path: &str) -> bool {
    path != "/api" && !UNGATED_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

/// Returns the redirect the gate demands for `request`, if any.
pub fn redirect_for(request: &Request) -> Option<Response> {
    let token = request
        .headers()
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(access::admin_token);

    let path = request.uri().path();
    match access::gate(path, token) {
        GateDecision::Allow => None,
        GateDecision::Redirect(to) => {
            debug!(from = %path, to, "Redirecting page request");
            Some(Redirect::temporary(to).into_response())
        }
    }
}

/// Middleware applying [`access::gate`] to every request it wraps.
pub async fn require_session(request: Request, next: Next) -> Response {
    match redirect_for(&request) {
        Some(redirect) => redirect,
        None => next.run(request).await,
    }
}
