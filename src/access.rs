//! Page access rules based on the `admin_token` session cookie.
//!
//! - Without a token, every path outside `/sign-in` redirects to `/sign-in`.
//! - With a token, `/sign-in` paths and `/` redirect to `/dashboard`.
//! - Everything else passes through.

use crate::constants::{ADMIN_TOKEN_COOKIE, DASHBOARD_PATH, SIGN_IN_PATH};

/// Outcome of the path gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Serve the requested page
    Allow,
    /// Redirect to the given path
    Redirect(&'static str),
}

/// Decides what to do with a page request.
///
/// An empty token counts as no token.
#[must_use]
pub fn gate(path: &str, token: Option<&str>) -> GateDecision {
    let authenticated = token.is_some_and(|t| !t.is_empty());
    let on_sign_in = path.starts_with(SIGN_IN_PATH);

    if !authenticated && !on_sign_in {
        return GateDecision::Redirect(SIGN_IN_PATH);
    }

    if authenticated && (on_sign_in || path == "/") {
        return GateDecision::Redirect(DASHBOARD_PATH);
    }

    GateDecision::Allow
}

/// Extracts the `admin_token` value from a `Cookie` header.
#[must_use]
pub fn admin_token(cookie_header: &str) -> Option<&str> {
    cookie_header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| name.trim() == ADMIN_TOKEN_COOKIE)
        .map(|(_, value)| value.trim().trim_matches('"'))
}
