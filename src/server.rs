use axum::{
    Json, Router,
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::AppState;
use crate::error::{AppError, PageError};
use crate::ui::errors::LoadError;
use crate::ui::layouts::Site;
use crate::ui::pages;

/// Start the Axum server with the provided state.
pub async fn start_server(state: AppState) -> Result<(), AppError> {
    let config = Arc::clone(&state.config);
    let app = router(state);

    let addr = config.server.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| AppError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!(
        name: "server.started",
        address = %addr,
        site = %config.ui.site_name,
        "Server started"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Serve)?;

    info!(name: "server.stopped", "Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let timeout = state.config.server.request_timeout();
    let static_dir = ServeDir::new(&state.config.ui.static_dir);

    Router::new()
        // HTML pages
        .route("/", get(home_page))
        .route("/browse", get(browse_page))
        .route("/library", get(library_page))
        .route("/library/bookmarks", get(library_bookmarks_page))
        .route("/library/history", get(library_history_page))
        .route("/comics/{slug}/chapters/{chapter}", get(chapter_page))
        .route(
            "/comics/{slug}/chapters/{chapter}/error",
            get(chapter_error_fragment),
        )
        .route("/comics/{slug}/chapters/{chapter}/retry", post(retry_chapter))
        .route("/login", get(login_page))
        .route("/register", get(register_page))
        // Probes
        .route("/health", get(health))
        // Static assets
        .nest_service("/static", static_dir)
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(
                    move |req: Request, next: Next| async move {
                        request_timeout(timeout, req, next).await
                    },
                )),
        )
        .with_state(state)
}

async fn request_timeout(duration: Duration, req: Request, next: Next) -> Response {
    match tokio::time::timeout(duration, next.run(req)).await {
        Ok(res) => res,
        Err(_) => (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Route parameters
// ─────────────────────────────────────────────────────────────────────────────

/// Slugs are lowercase alphanumerics separated by `-`.
fn validate_slug(slug: &str) -> Result<&str, PageError> {
    let valid = !slug.is_empty()
        && slug.len() <= 128
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if valid {
        Ok(slug)
    } else {
        Err(PageError::InvalidParam {
            name: "slug",
            value: slug.to_string(),
        })
    }
}

/// Chapters are identifiers like `12`, `12.5` or `extra-1`.
fn validate_chapter(chapter: &str) -> Result<&str, PageError> {
    let valid = !chapter.is_empty()
        && chapter.len() <= 32
        && chapter
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.');
    if valid {
        Ok(chapter)
    } else {
        Err(PageError::InvalidParam {
            name: "chapter",
            value: chapter.to_string(),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

fn site(state: &AppState) -> &Site {
    &state.site
}

async fn home_page(State(state): State<AppState>) -> Html<String> {
    Html(pages::home_document(site(&state)))
}

async fn browse_page(State(state): State<AppState>) -> Html<String> {
    Html(pages::browse_document(site(&state)))
}

async fn library_page(State(state): State<AppState>) -> Html<String> {
    Html(pages::library_document(site(&state), &pages::LIBRARY_TABS[0]))
}

async fn library_bookmarks_page(State(state): State<AppState>) -> Html<String> {
    Html(pages::library_document(site(&state), &pages::LIBRARY_TABS[1]))
}

async fn library_history_page(State(state): State<AppState>) -> Html<String> {
    Html(pages::library_document(site(&state), &pages::LIBRARY_TABS[2]))
}

async fn chapter_page(
    State(state): State<AppState>,
    Path((slug, chapter)): Path<(String, String)>,
) -> Result<Html<String>, PageError> {
    let slug = validate_slug(&slug)?;
    let chapter = validate_chapter(&chapter)?;
    Ok(Html(pages::chapter_document(site(&state), slug, chapter)))
}

/// Longest failure detail kept from the query string, in characters.
const MAX_REASON_CHARS: usize = 200;

/// Query for the chapter error fragment.
#[derive(Debug, Deserialize)]
struct ChapterErrorQuery {
    /// Failure detail from the host; logged, never shown.
    #[serde(default)]
    reason: Option<String>,
}

fn load_error(reason: Option<&str>) -> LoadError {
    match reason {
        Some(reason) => {
            let reason: String = reason.chars().take(MAX_REASON_CHARS).collect();
            LoadError::new(reason)
        }
        None => LoadError::new("chapter load failed"),
    }
}

async fn chapter_error_fragment(
    Path((slug, chapter)): Path<(String, String)>,
    Query(query): Query<ChapterErrorQuery>,
) -> Result<Html<String>, PageError> {
    let slug = validate_slug(&slug)?;
    let chapter = validate_chapter(&chapter)?;
    let error = load_error(query.reason.as_deref());
    Ok(Html(pages::chapter_error_fragment(slug, chapter, error)))
}

/// Runs the host's retry callback once, then renders the chapter again.
async fn retry_chapter(
    State(state): State<AppState>,
    Path((slug, chapter)): Path<(String, String)>,
) -> Result<Html<String>, PageError> {
    let slug = validate_slug(&slug)?;
    let chapter = validate_chapter(&chapter)?;

    state.retry.trigger();
    tracing::debug!(%slug, %chapter, "Chapter retry handled");

    Ok(Html(pages::chapter_document(site(&state), slug, chapter)))
}

async fn login_page(State(state): State<AppState>) -> Html<String> {
    Html(pages::auth_document(site(&state), "Sign in"))
}

async fn register_page(State(state): State<AppState>) -> Html<String> {
    Html(pages::auth_document(site(&state), "Create account"))
}

/// Health probe response.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(pages::not_found_document()))
}
