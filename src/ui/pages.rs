//! Full pages: a layout wrapped around a route's view, rendered to HTML.

use leptos::prelude::*;

use crate::ui::components::PageSpinner;
use crate::ui::errors::{ChapterError, LoadError, NotFound};
use crate::ui::layouts::{
    AuthLayout, Document, MainLayout, SectionLayout, SectionTab, Site, render_document,
};
use crate::ui::loading::{BrowseLoading, ChapterLoading, HomeLoading, LibraryLoading};

/// Library sub-sections.
pub const LIBRARY_TABS: &[SectionTab] = &[
    SectionTab {
        label: "Reading",
        href: "/library",
    },
    SectionTab {
        label: "Bookmarks",
        href: "/library/bookmarks",
    },
    SectionTab {
        label: "History",
        href: "/library/history",
    },
];

fn page_title(site: &Site, page: &str) -> String {
    format!("{page} - {}", site.name)
}

pub fn home_document(site: &Site) -> String {
    let title = site.name.clone();
    let site = site.clone();
    render_document(view! {
        <Document title=title>
            <MainLayout site=site active="/">
                <HomeLoading />
            </MainLayout>
        </Document>
    })
}

pub fn browse_document(site: &Site) -> String {
    let title = page_title(site, "Browse");
    let site = site.clone();
    render_document(view! {
        <Document title=title>
            <MainLayout site=site active="/browse">
                <BrowseLoading />
            </MainLayout>
        </Document>
    })
}

/// Library page with `tab` selected; the title names the tab unless it is
/// the default one.
pub fn library_document(site: &Site, tab: &SectionTab) -> String {
    let title = if tab.href == LIBRARY_TABS[0].href {
        page_title(site, "Library")
    } else {
        page_title(site, &format!("{} - Library", tab.label))
    };
    let site = site.clone();
    let active = tab.href;
    render_document(view! {
        <Document title=title>
            <MainLayout site=site active="/library">
                <SectionLayout
                    title="Library"
                    description="Comics you are reading and have saved."
                    tabs=LIBRARY_TABS
                    active=active
                >
                    <LibraryLoading />
                </SectionLayout>
            </MainLayout>
        </Document>
    })
}

pub fn chapter_document(site: &Site, slug: &str, chapter: &str) -> String {
    let title = page_title(site, &format!("{slug} #{chapter}"));
    let site = site.clone();
    render_document(view! {
        <Document title=title>
            <MainLayout site=site>
                <ChapterLoading />
            </MainLayout>
        </Document>
    })
}

/// Chapter error fragment, swapped in by the host when a chapter fails.
pub fn chapter_error_fragment(slug: &str, chapter: &str, error: LoadError) -> String {
    view! {
        <ChapterError error=error slug=slug.to_string() chapter=chapter.to_string() />
    }
    .to_html()
}

/// Sign-in or registration page; the form is loaded by the auth service.
pub fn auth_document(site: &Site, heading: &'static str) -> String {
    let title = page_title(site, heading);
    let site = site.clone();
    render_document(view! {
        <Document title=title>
            <AuthLayout site=site>
                <h1 class="mb-6 text-center text-2xl font-bold">{heading}</h1>
                <PageSpinner />
            </AuthLayout>
        </Document>
    })
}

pub fn not_found_document() -> String {
    render_document(view! {
        <Document title="Page not found">
            <NotFound />
        </Document>
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_page_nests_section_in_main_layout() {
        let html = library_document(&Site::new("Panels"), &LIBRARY_TABS[0]);
        let header = html.find("<header").unwrap();
        let section = html.find(">Library</h1>").unwrap();
        let rows = html.find("data-loading=\"library\"").unwrap();
        assert!(header < section && section < rows);
        assert!(html.contains("<title>Library - Panels</title>"));
    }

    #[test]
    fn test_library_tab_pages_select_their_tab() {
        let html = library_document(&Site::new("Panels"), &LIBRARY_TABS[2]);
        assert!(html.contains("<title>History - Library - Panels</title>"));
        assert!(html.contains("href=\"/library/history\" class=\"border-b-2"));
        assert_eq!(html.matches("aria-selected=\"true\"").count(), 1);
        assert!(html.contains("data-loading=\"library\""));
    }

    #[test]
    fn test_auth_page_has_no_main_chrome() {
        let html = auth_document(&Site::new("Panels"), "Sign in");
        assert!(html.contains(">Sign in</h1>"));
        assert!(!html.contains("id=\"network-status\""));
    }
}
