//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name, durable storage keys and defaults.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "CRM Dashboard";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "crmdash";

/// Directory name used under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "crmdash";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "CRMDASH_CONFIG_DIR";

/// Durable storage key holding the sidebar layout.
pub const SIDEBAR_CONFIG_KEY: &str = "sidebar-config";

/// Durable storage key holding the appearance settings.
pub const APPEARANCE_SETTINGS_KEY: &str = "appearance-settings";

/// Radius applied when the user never picked one.
pub const DEFAULT_RADIUS: &str = "0.5rem";

/// Session cookie checked by the path gate.
pub const ADMIN_TOKEN_COOKIE: &str = "admin_token";

/// Sign-in page path (and prefix of every public page).
pub const SIGN_IN_PATH: &str = "/sign-in";

/// Landing page for authenticated users.
pub const DASHBOARD_PATH: &str = "/dashboard";
