//! Connectivity signals: one boolean reading and two events.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};

/// Connectivity transition reported to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectivityEvent {
    /// The host became reachable.
    Online,
    /// The host became unreachable.
    Offline,
}

type Listener = Arc<dyn Fn() + Send + Sync>;

struct Registration {
    event: ConnectivityEvent,
    listener: Listener,
}

/// Source of connectivity readings and transitions.
///
/// Mirrors the browser's `navigator.onLine` plus the window `online` and
/// `offline` events. Listeners are registered with [`subscribe`] and stay
/// registered for as long as the returned [`Subscription`] is alive.
///
/// Readings are dispatched one at a time, so listeners observe events in the
/// same order the readings were recorded. Listeners must not call
/// [`set_online`] themselves.
///
/// [`subscribe`]: ConnectivitySignals::subscribe
/// [`set_online`]: ConnectivitySignals::set_online
pub struct ConnectivitySignals {
    online: AtomicBool,
    dispatch: Mutex<()>,
    next_id: AtomicU64,
    listeners: Mutex<HashMap<u64, Registration>>,
}

impl fmt::Debug for ConnectivitySignals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectivitySignals")
            .field("online", &self.is_online())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl ConnectivitySignals {
    /// Create a signal source with the given initial reading.
    #[must_use]
    pub fn new(online: bool) -> Arc<Self> {
        Arc::new(Self {
            online: AtomicBool::new(online),
            dispatch: Mutex::new(()),
            next_id: AtomicU64::new(0),
            listeners: Mutex::new(HashMap::new()),
        })
    }

    /// Current connectivity reading.
    #[must_use]
    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }

    /// Register `listener` for `event`.
    ///
    /// The listener is removed when the returned guard is dropped.
    #[must_use = "dropping the subscription unregisters the listener"]
    pub fn subscribe<F>(self: &Arc<Self>, event: ConnectivityEvent, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.lock().insert(
            id,
            Registration {
                event,
                listener: Arc::new(listener),
            },
        );
        Subscription {
            id,
            signals: Arc::downgrade(self),
        }
    }

    /// Record a new reading, firing the matching event if it changed.
    pub fn set_online(&self, online: bool) {
        let _dispatch = self.dispatch.lock().unwrap_or_else(PoisonError::into_inner);
        let previous = self.online.swap(online, Ordering::SeqCst);
        if previous == online {
            return;
        }
        let event = if online {
            ConnectivityEvent::Online
        } else {
            ConnectivityEvent::Offline
        };
        self.emit(event);
    }

    /// Number of live listeners across both events.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.lock().len()
    }

    fn emit(&self, event: ConnectivityEvent) {
        // Snapshot first: listeners may subscribe or unsubscribe re-entrantly.
        let listeners: Vec<Listener> = self
            .lock()
            .values()
            .filter(|r| r.event == event)
            .map(|r| Arc::clone(&r.listener))
            .collect();

        tracing::debug!(?event, listeners = listeners.len(), "Connectivity changed");

        for listener in listeners {
            listener();
        }
    }

    fn unsubscribe(&self, id: u64) {
        self.lock().remove(&id);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<u64, Registration>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Guard for a registered connectivity listener.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    signals: Weak<ConnectivitySignals>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(signals) = self.signals.upgrade() {
            signals.unsubscribe(self.id);
        }
    }
}
