use axum::http::StatusCode;
use axum_test::TestServer;
use comic_reader_ui::AppState;
use comic_reader_ui::config::AppConfig;
use comic_reader_ui::server::router;
use comic_reader_ui::ui::errors::RetryAction;
use comic_reader_ui::ui::loading::{
    BROWSE_GRID_COUNT, CHAPTER_PAGE_COUNT, HOME_CARD_COUNT, LIBRARY_ROW_COUNT,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn server_with_retry(retry: RetryAction) -> TestServer {
    let mut config = AppConfig::default();
    config.ui.site_name = "Panelhouse".to_string();
    config.ui.restore_banner_ms = 2500;
    let state = AppState::new(Arc::new(config), retry);
    TestServer::new(router(state)).expect("Failed to build test server")
}

fn server() -> TestServer {
    server_with_retry(RetryAction::new(|| {}))
}

fn presets(html: &str, preset: &str) -> usize {
    html.matches(&format!("data-skeleton-preset=\"{preset}\"")).count()
}

#[tokio::test]
async fn test_home_renders_layout_and_skeleton() {
    let response = server().get("/").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Panelhouse</title>"));
    assert!(html.contains("id=\"network-status\""));
    assert!(html.contains("2500"));
    assert_eq!(presets(&html, "card"), HOME_CARD_COUNT);
}

#[tokio::test]
async fn test_route_skeleton_counts() {
    let server = server();

    let browse = server.get("/browse").await.text();
    assert_eq!(presets(&browse, "comic-card"), BROWSE_GRID_COUNT);

    let library = server.get("/library").await.text();
    assert_eq!(presets(&library, "list-row"), LIBRARY_ROW_COUNT);
    assert!(library.contains(">Bookmarks</a>"));

    let chapter = server.get("/comics/one-piece/chapters/1044").await;
    chapter.assert_status_ok();
    assert_eq!(presets(&chapter.text(), "page"), CHAPTER_PAGE_COUNT);
}

#[tokio::test]
async fn test_chapter_error_fragment() {
    let response = server()
        .get("/comics/one-piece/chapters/1044/error")
        .add_query_param("reason", "upstream timeout")
        .await;
    response.assert_status_ok();

    let html = response.text();
    assert!(!html.contains("<!DOCTYPE html>"));
    assert!(html.contains("href=\"/comics/one-piece\""));
    assert!(html.contains("hx-post=\"/comics/one-piece/chapters/1044/retry\""));
    assert!(!html.contains("upstream timeout"));
}

#[tokio::test]
async fn test_retry_request_runs_host_callback_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let server = server_with_retry(RetryAction::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    }));

    let response = server.post("/comics/one-piece/chapters/1044/retry").await;
    response.assert_status_ok();
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let html = response.text();
    assert!(html.contains("id=\"app\""));
    assert_eq!(presets(&html, "page"), CHAPTER_PAGE_COUNT);

    server.post("/comics/one-piece/chapters/1044/retry").await;
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_retry_with_invalid_params_skips_callback() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let server = server_with_retry(RetryAction::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    }));

    let response = server.post("/comics/Bad_Slug/chapters/1/retry").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    // Rendering the error view never runs the callback.
    server.get("/comics/one-piece/chapters/1/error").await;
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_library_tabs_resolve() {
    let server = server();

    for (path, title) in [
        ("/library", "Library - Panelhouse"),
        ("/library/bookmarks", "Bookmarks - Library - Panelhouse"),
        ("/library/history", "History - Library - Panelhouse"),
    ] {
        let response = server.get(path).await;
        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains(&format!("<title>{title}</title>")), "{path}");
        assert!(html.contains(&format!("href=\"{path}\" class=\"border-b-2")), "{path}");
        assert_eq!(presets(&html, "list-row"), LIBRARY_ROW_COUNT);
    }
}

#[tokio::test]
async fn test_invalid_route_params_render_not_found() {
    let server = server();

    let response = server.get("/comics/One%20Piece/chapters/1").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.text().contains("Page not found"));

    let response = server.get("/comics/one-piece/chapters/1%3Cb%3E/error").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_auth_pages_use_auth_layout() {
    let server = server();

    for (path, heading) in [("/login", "Sign in"), ("/register", "Create account")] {
        let response = server.get(path).await;
        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains(&format!(">{heading}</h1>")));
        assert!(html.contains("role=\"status\""));
        assert!(!html.contains("id=\"network-status\""));
    }
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let response = server().get("/definitely/not/here").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.text().contains("404"));
}

#[tokio::test]
async fn test_health() {
    let response = server().get("/health").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
}
