//! DevOps portfolio service.
//!
//! Serves a single HTML page plus two small JSON endpoints used by load
//! balancers and deploy pipelines to check that the process is up:
//!
//! ```text
//! GET /            -> portfolio page
//! GET /api/status  -> {"status":"OK","timestamp":"...","environment":"..."}
//! GET /api/health  -> {"health":"healthy","version":"1.0.0","uptime":"running"}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: HTTP handlers, templates and routes
//! - [`metrics`]: Request counters and latency histograms
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
