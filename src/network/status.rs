//! Banner state machine for connectivity changes.

/// What the network banner shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BannerState {
    /// Online, nothing to show.
    #[default]
    Hidden,
    /// Connectivity just came back; shown for a fixed window.
    Restored,
    /// Offline; shown until connectivity returns.
    Offline,
}

impl BannerState {
    #[must_use]
    pub fn is_visible(self) -> bool {
        !matches!(self, Self::Hidden)
    }

    #[must_use]
    pub fn is_online(self) -> bool {
        !matches!(self, Self::Offline)
    }
}

/// Permission to auto-hide a specific "restored" banner.
///
/// A ticket only works for the transition that issued it; any later
/// transition invalidates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideTicket(u64);

/// Connectivity banner state machine.
#[derive(Debug, Clone)]
pub struct NetworkStatus {
    banner: BannerState,
    generation: u64,
}

impl NetworkStatus {
    /// Initial state from the reading taken at mount time.
    #[must_use]
    pub fn new(online: bool) -> Self {
        Self {
            banner: if online {
                BannerState::Hidden
            } else {
                BannerState::Offline
            },
            generation: 0,
        }
    }

    #[must_use]
    pub fn banner(&self) -> BannerState {
        self.banner
    }

    /// Any state moves to `Offline`.
    pub fn went_offline(&mut self) {
        self.banner = BannerState::Offline;
        self.generation += 1;
    }

    /// `Offline` moves to `Restored` and hands out a ticket for the auto-hide.
    ///
    /// Returns `None` when not offline; the event is ignored.
    pub fn went_online(&mut self) -> Option<HideTicket> {
        if self.banner != BannerState::Offline {
            return None;
        }
        self.banner = BannerState::Restored;
        self.generation += 1;
        Some(HideTicket(self.generation))
    }

    /// Hide the restored banner if `ticket` belongs to the current transition.
    pub fn hide(&mut self, ticket: HideTicket) -> bool {
        if self.banner == BannerState::Restored && ticket.0 == self.generation {
            self.banner = BannerState::Hidden;
            true
        } else {
            false
        }
    }
}
