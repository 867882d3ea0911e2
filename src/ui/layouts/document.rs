//! HTML document shell.

use leptos::prelude::*;

/// `<html>` shell shared by every page.
///
/// Scripts are served locally so the pages work without a CDN.
#[component]
pub fn Document(
    /// Page title.
    #[prop(into)]
    title: String,
    /// Body content.
    children: Children,
) -> impl IntoView {
    view! {
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>

                <script src="/static/vendor/htmx-2.0.8.min.js"></script>
                <script defer src="/static/vendor/alpine.min.js"></script>
                <link rel="stylesheet" href="/static/app.css" />
            </head>
            <body class="min-h-screen bg-background text-textPrimary antialiased">
                {children()}
            </body>
        </html>
    }
}

/// Render a full page, prefixed with the doctype.
pub fn render_document(page: impl IntoView) -> String {
    format!("<!DOCTYPE html>{}", page.to_html())
}
