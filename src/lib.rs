//! CRM Dashboard settings library
//!
//! This library provides the appearance and sidebar settings of the CRM
//! admin dashboard: typed settings stores persisted to a durable key-value
//! store, theme resolution into CSS custom properties, and the session gate
//! for page routes.

// Module declarations
pub mod access;
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod persistence;
pub mod settings;
pub mod storage;
pub mod theme;
#[cfg(feature = "web")]
pub mod web;
