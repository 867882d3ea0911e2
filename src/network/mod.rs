//! Connectivity tracking for the network-status banner.
//!
//! # Architecture
//!
//! - [`ConnectivitySignals`]: the current reading plus `online`/`offline` events
//! - [`NetworkStatus`]: the banner state machine
//! - [`NetworkIndicator`]: binds the two together with an auto-hide timer
//!
//! # Example
//!
//! ```rust
//! use comic_reader_ui::network::{BannerState, ConnectivitySignals, NetworkIndicator};
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let signals = ConnectivitySignals::new(true);
//! let indicator = NetworkIndicator::mount(&signals, Duration::from_secs(3));
//!
//! signals.set_online(false);
//! assert_eq!(indicator.banner(), BannerState::Offline);
//!
//! indicator.unmount();
//! assert_eq!(signals.listener_count(), 0);
//! # }
//! ```

mod indicator;
mod signals;
mod status;

pub use indicator::{NetworkIndicator, RESTORE_BANNER_WINDOW};
pub use signals::{ConnectivityEvent, ConnectivitySignals, Subscription};
pub use status::{BannerState, HideTicket, NetworkStatus};
