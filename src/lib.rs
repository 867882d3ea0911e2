//! Comic Reader UI
//!
//! The presentation layer of a comic-reading web application: layouts,
//! loading skeletons, error views and small UI primitives, rendered with
//! Leptos SSR and served by Axum. HTMX and Alpine.js attributes in the
//! markup carry the client-side behaviour.
//!
//! # Modules
//!
//! - [`config`]: CLI, file and environment configuration
//! - [`error`]: Startup and request errors
//! - [`network`]: Connectivity signals and the network-status state machine
//! - [`server`]: Axum router and route handlers
//! - [`telemetry`]: Tracing subscriber setup
//! - [`ui`]: Leptos components, layouts and pages

pub mod config;
pub mod error;
pub mod network;
pub mod server;
pub mod telemetry;
pub mod ui;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::ui::errors::RetryAction;
use crate::ui::layouts::Site;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Global Configuration
    pub config: Arc<AppConfig>,
    /// Site-wide values passed to layouts.
    pub site: Arc<Site>,
    /// Host callback run by the chapter retry route.
    pub retry: RetryAction,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>, retry: RetryAction) -> Self {
        let site = Arc::new(Site::from(&config.ui));
        Self {
            config,
            site,
            retry,
        }
    }
}
