//! HTTP API handlers.

use std::sync::Arc;

use askama::Template;
use axum::{extract::State, response::Html, response::IntoResponse, Json};
use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::utils::now_iso8601;

use super::templates::IndexTemplate;

/// Service version reported by `/api/health`.
pub const SERVICE_VERSION: &str = "1.0.0";

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Deployment name reported by `/api/status`.
    pub environment: Arc<str>,
}

impl AppState {
    /// Create new app state for the given environment name.
    pub fn new(environment: impl Into<Arc<str>>) -> Self {
        Self {
            environment: environment.into(),
        }
    }

    /// Build state from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.environment.as_str())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Status response.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Always "OK".
    pub status: &'static str,
    /// Time the response was produced (RFC 3339).
    pub timestamp: String,
    /// Configured deployment name.
    pub environment: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub health: &'static str,
    pub version: &'static str,
    pub uptime: &'static str,
}

impl HealthResponse {
    pub const HEALTHY: Self = Self {
        health: "healthy",
        version: SERVICE_VERSION,
        uptime: "running",
    };
}

/// Index handler - renders the portfolio page.
pub async fn index() -> Result<Html<String>> {
    let html = IndexTemplate::default().render()?;
    Ok(Html(html))
}

/// Status handler - reports status, current time and environment.
pub async fn status(State(state): State<AppState>) -> impl IntoResponse {
    let response = StatusResponse {
        status: "OK",
        timestamp: now_iso8601(),
        environment: state.environment.to_string(),
    };
    debug!(?response, "status requested");

    Json(response)
}

/// Health check handler - always returns 200 with a constant body.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse::HEALTHY)
}
