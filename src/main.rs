//! Comic Reader UI server.
//!
//! Entry point: loads configuration, installs tracing and serves the pages.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use dotenvy::dotenv;
use mimalloc::MiMalloc;

use comic_reader_ui::AppState;
use comic_reader_ui::config::AppConfig;
use comic_reader_ui::server::start_server;
use comic_reader_ui::telemetry::init_tracing;
use comic_reader_ui::ui::errors::RetryAction;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    let config = Arc::new(AppConfig::load()?);

    // Initialize tracing (M-LOG-STRUCTURED)
    init_tracing(&config.logging)?;

    tracing::info!(
        name: "config.loaded",
        host = %config.server.host,
        port = config.server.port,
        static_dir = %config.ui.static_dir,
        "Configuration loaded"
    );

    let retries = AtomicU64::new(0);
    let retry = RetryAction::new(move || {
        let total = retries.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::info!(name: "chapter.retry", total, "Chapter retry requested");
    });

    start_server(AppState::new(config, retry)).await?;
    Ok(())
}
