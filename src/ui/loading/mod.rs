//! Per-route loading screens.
//!
//! Each screen is a fixed arrangement of skeleton blocks approximating the
//! page it stands in for. They take no props and always render the same
//! number of repeated blocks.

mod browse;
mod chapter;
mod home;
mod library;

pub use browse::{BROWSE_GRID_COUNT, BrowseLoading};
pub use chapter::{CHAPTER_PAGE_COUNT, ChapterLoading};
pub use home::{HOME_CARD_COUNT, HomeLoading};
pub use library::{LIBRARY_ROW_COUNT, LibraryLoading};

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::*;

    fn presets(html: &str, preset: &str) -> usize {
        html.matches(&format!("data-skeleton-preset=\"{preset}\"")).count()
    }

    #[test]
    fn test_block_counts_are_fixed() {
        assert_eq!(HOME_CARD_COUNT, 8);
        assert_eq!(BROWSE_GRID_COUNT, 12);
        assert_eq!(CHAPTER_PAGE_COUNT, 3);
        assert_eq!(LIBRARY_ROW_COUNT, 6);
    }

    #[test]
    fn test_rendered_counts_match_constants() {
        let home = view! { <HomeLoading /> }.to_html();
        assert_eq!(presets(&home, "card"), HOME_CARD_COUNT);

        let browse = view! { <BrowseLoading /> }.to_html();
        assert_eq!(presets(&browse, "comic-card"), BROWSE_GRID_COUNT);

        let chapter = view! { <ChapterLoading /> }.to_html();
        assert_eq!(presets(&chapter, "page"), CHAPTER_PAGE_COUNT);

        let library = view! { <LibraryLoading /> }.to_html();
        assert_eq!(presets(&library, "list-row"), LIBRARY_ROW_COUNT);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let first = view! { <BrowseLoading /> }.to_html();
        let second = view! { <BrowseLoading /> }.to_html();
        assert_eq!(first, second);
    }
}
