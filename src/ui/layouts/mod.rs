//! Route-level layout shells.
//!
//! Layouts wrap child content with fixed chrome. They hold no state.
//!
//! - [`Document`]: `<html>` shell with scripts and stylesheet
//! - [`MainLayout`]: header, network banner, main content, footer
//! - [`AuthLayout`]: centered card for sign-in and registration
//! - [`SectionLayout`]: titled section with tab navigation

mod auth;
mod document;
mod main_layout;
mod section;

pub use auth::AuthLayout;
pub use document::{Document, render_document};
pub use main_layout::{MainLayout, NAV_LINKS};
pub use section::{SectionLayout, SectionTab};

use crate::config::UiConfig;

/// Site-wide values the layouts need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    /// Name shown in the header, footer and titles.
    pub name: String,
    /// Restore-banner window in milliseconds.
    pub restore_banner_ms: u64,
}

impl Site {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            restore_banner_ms: 3000,
        }
    }
}

impl From<&UiConfig> for Site {
    fn from(ui: &UiConfig) -> Self {
        Self {
            name: ui.site_name.clone(),
            restore_banner_ms: ui.restore_banner_ms,
        }
    }
}
