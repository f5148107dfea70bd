//! Pointer capture — the seam between the drag controller and whatever
//! delivers "global" move/release events.
//!
//! While a drag is active the controller wants every move and release,
//! not only those over the handle. Hosts implement [`PointerCapture`] to
//! start and stop routing those events; the controller never talks to the
//! host's event system directly.

/// Subscription surface for global pointer events.
pub trait PointerCapture {
    /// Start routing pointer-move events to the controller.
    fn subscribe_move(&mut self);

    /// Start routing pointer-release events to the controller.
    fn subscribe_release(&mut self);

    /// Drop every subscription made through this capture.
    fn unsubscribe_all(&mut self);

    /// Whether move events are currently routed.
    fn routes_moves(&self) -> bool;

    /// Whether release events are currently routed.
    fn routes_release(&self) -> bool;
}

/// Capture that only counts live subscriptions.
///
/// Used headless and in tests to check that every drag cycle leaves no
/// subscription behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountingCapture {
    move_subscriptions: usize,
    release_subscriptions: usize,
    /// Total subscribe calls over the capture's lifetime.
    pub total_subscribes: usize,
    /// Total `unsubscribe_all` calls over the capture's lifetime.
    pub total_unsubscribes: usize,
}

impl CountingCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of subscriptions currently registered.
    pub fn live(&self) -> usize {
        self.move_subscriptions + self.release_subscriptions
    }
}

impl PointerCapture for CountingCapture {
    fn subscribe_move(&mut self) {
        self.move_subscriptions += 1;
        self.total_subscribes += 1;
    }

    fn subscribe_release(&mut self) {
        self.release_subscriptions += 1;
        self.total_subscribes += 1;
    }

    fn unsubscribe_all(&mut self) {
        self.move_subscriptions = 0;
        self.release_subscriptions = 0;
        self.total_unsubscribes += 1;
    }

    fn routes_moves(&self) -> bool {
        self.move_subscriptions > 0
    }

    fn routes_release(&self) -> bool {
        self.release_subscriptions > 0
    }
}
