//! Mounted network-status indicator.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::AbortHandle;

use super::signals::{ConnectivityEvent, ConnectivitySignals, Subscription};
use super::status::{BannerState, NetworkStatus};

/// How long the "connection restored" banner stays visible by default.
pub const RESTORE_BANNER_WINDOW: Duration = Duration::from_secs(3);

struct Inner {
    status: NetworkStatus,
    hide_timer: Option<AbortHandle>,
}

impl Inner {
    fn cancel_hide_timer(&mut self) {
        if let Some(timer) = self.hide_timer.take() {
            timer.abort();
        }
    }
}

struct Shared {
    inner: Mutex<Inner>,
    changes: watch::Sender<BannerState>,
    restore_window: Duration,
    runtime: Handle,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Publishes while `inner` is held so observers never see an older state.
    fn publish(&self, inner: &Inner) {
        self.changes.send_replace(inner.status.banner());
    }

    fn went_offline(&self) {
        let mut inner = self.lock();
        inner.cancel_hide_timer();
        inner.status.went_offline();
        tracing::debug!(banner = ?inner.status.banner(), "Network went offline");
        self.publish(&inner);
    }

    fn went_online(self: &Arc<Self>) {
        let mut inner = self.lock();
        let Some(ticket) = inner.status.went_online() else {
            return;
        };
        inner.cancel_hide_timer();

        let weak = Arc::downgrade(self);
        let window = self.restore_window;
        let task = self.runtime.spawn(async move {
            tokio::time::sleep(window).await;
            if let Some(shared) = weak.upgrade() {
                let mut inner = shared.lock();
                if inner.status.hide(ticket) {
                    inner.hide_timer = None;
                    tracing::debug!("Restored banner auto-hidden");
                    shared.publish(&inner);
                }
            }
        });
        inner.hide_timer = Some(task.abort_handle());

        tracing::debug!(window_ms = window.as_millis(), "Network restored");
        self.publish(&inner);
    }
}

/// Network-status indicator bound to a [`ConnectivitySignals`] source.
///
/// Mounting subscribes to both connectivity events; dropping (or calling
/// [`unmount`](Self::unmount)) releases both subscriptions and cancels any
/// pending auto-hide. Must be mounted from within a tokio runtime.
pub struct NetworkIndicator {
    shared: Arc<Shared>,
    _subscriptions: [Subscription; 2],
}

impl std::fmt::Debug for NetworkIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetworkIndicator")
            .field("banner", &self.banner())
            .field("restore_window", &self.shared.restore_window)
            .finish_non_exhaustive()
    }
}

impl NetworkIndicator {
    /// Mount the indicator, reading the current connectivity state.
    pub fn mount(signals: &Arc<ConnectivitySignals>, restore_window: Duration) -> Self {
        let status = NetworkStatus::new(signals.is_online());
        let (changes, _) = watch::channel(status.banner());

        let shared = Arc::new(Shared {
            inner: Mutex::new(Inner {
                status,
                hide_timer: None,
            }),
            changes,
            restore_window,
            runtime: Handle::current(),
        });

        let offline = listener(&shared, |shared| shared.went_offline());
        let online = listener(&shared, Shared::went_online);

        Self {
            _subscriptions: [
                signals.subscribe(ConnectivityEvent::Offline, offline),
                signals.subscribe(ConnectivityEvent::Online, online),
            ],
            shared,
        }
    }

    /// Current banner state.
    #[must_use]
    pub fn banner(&self) -> BannerState {
        self.shared.lock().status.banner()
    }

    /// Receiver that observes every banner change, for re-rendering.
    #[must_use]
    pub fn changes(&self) -> watch::Receiver<BannerState> {
        self.shared.changes.subscribe()
    }

    /// Tear down the indicator. Equivalent to dropping it.
    pub fn unmount(self) {}
}

impl Drop for NetworkIndicator {
    fn drop(&mut self) {
        self.shared.lock().cancel_hide_timer();
    }
}

fn listener(
    shared: &Arc<Shared>,
    on_event: fn(&Arc<Shared>),
) -> impl Fn() + Send + Sync + 'static {
    let weak: Weak<Shared> = Arc::downgrade(shared);
    move || {
        if let Some(shared) = weak.upgrade() {
            on_event(&shared);
        }
    }
}
