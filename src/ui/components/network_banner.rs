//! Network-status banner.
//!
//! Server-side the banner renders whatever [`BannerState`] it is given. In
//! the browser, Alpine.js runs the same machine as
//! [`NetworkIndicator`](crate::network::NetworkIndicator): window
//! `online`/`offline` listeners are added on init and removed on destroy,
//! and the restore timer is cleared on every transition and on teardown.

use leptos::prelude::*;

use super::icons::{WifiIcon, WifiOffIcon};
use super::style::join_classes;
use crate::network::BannerState;

/// Message shown while offline.
pub const OFFLINE_MESSAGE: &str = "You are offline. Some pages may not load.";

/// Message shown after connectivity returns.
pub const RESTORED_MESSAGE: &str = "Connection restored.";

const BANNER_BASE_CLASSES: &str = "fixed inset-x-0 top-0 z-[60] flex items-center justify-center \
                                   gap-2 px-4 py-2 text-sm font-medium shadow-md transition-all";
const OFFLINE_CLASSES: &str = "bg-danger text-white";
const RESTORED_CLASSES: &str = "bg-success text-white";

/// Alpine component state; `restore_ms` is the auto-hide window.
///
/// `init` subscribes to both window events and `destroy` removes them again
/// along with any pending timer.
fn alpine_data(restore_ms: u64) -> String {
    format!(
        "{{ online: navigator.onLine, visible: !navigator.onLine, timer: null, \
         init() {{ this.onOnline = () => this.wentOnline(); this.onOffline = () => this.wentOffline(); \
         window.addEventListener('online', this.onOnline); \
         window.addEventListener('offline', this.onOffline) }}, \
         wentOffline() {{ clearTimeout(this.timer); this.online = false; this.visible = true }}, \
         wentOnline() {{ if (this.online) return; clearTimeout(this.timer); this.online = true; \
         this.visible = true; this.timer = setTimeout(() => {{ this.visible = false }}, {restore_ms}) }}, \
         destroy() {{ window.removeEventListener('online', this.onOnline); \
         window.removeEventListener('offline', this.onOffline); clearTimeout(this.timer) }} }}"
    )
}

/// Network-status banner.
///
/// # Example
///
/// ```rust,ignore
/// view! { <NetworkBanner state=BannerState::Offline restore_ms=3000 /> }
/// ```
#[component]
pub fn NetworkBanner(
    /// State to render on the server.
    #[prop(default = BannerState::Hidden)]
    state: BannerState,
    /// Auto-hide window for the restored banner, in milliseconds.
    #[prop(default = 3000)]
    restore_ms: u64,
) -> impl IntoView {
    let (tone, message, state_name) = match state {
        BannerState::Hidden => (RESTORED_CLASSES, RESTORED_MESSAGE, "hidden"),
        BannerState::Restored => (RESTORED_CLASSES, RESTORED_MESSAGE, "restored"),
        BannerState::Offline => (OFFLINE_CLASSES, OFFLINE_MESSAGE, "offline"),
    };
    let classes = join_classes(&[BANNER_BASE_CLASSES, tone]);
    let style = (!state.is_visible()).then_some("display: none;");
    let bound_class = format!("online ? '{RESTORED_CLASSES}' : '{OFFLINE_CLASSES}'");
    let bound_text = format!("online ? '{RESTORED_MESSAGE}' : '{OFFLINE_MESSAGE}'");

    view! {
        <div
            id="network-status"
            role="status"
            aria-live="polite"
            class=classes
            style=style
            data-state=state_name
            x-data=alpine_data(restore_ms)
            x-show="visible"
            x-bind:class=bound_class
        >
            <span x-show="online" class="inline-flex">
                <WifiIcon />
            </span>
            <span x-show="!online" class="inline-flex">
                <WifiOffIcon />
            </span>
            <span x-text=bound_text>{message}</span>
        </div>
    }
}
