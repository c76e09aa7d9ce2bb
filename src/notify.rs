//! Change notifications.
//!
//! The facade publishes zero-argument notifications through an explicit
//! observer registry. Delivery is synchronous and ordered: every subscriber
//! runs on the emitting thread, in registration order, before the mutating
//! call returns. There is no queuing and no cross-thread dispatch.

/// Notification kinds broadcast by the configuration facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// The active interface theme changed (base chrome swapped).
    InterfaceThemeChanged,
    /// The semantic color table was rebuilt.
    ColorsUpdated,
    /// The stored font changed (or was reset).
    FontsUpdated,
}

/// Handle returned by [`ObserverRegistry::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberId(u64);

type Callback = Box<dyn Fn(Notification)>;

/// Ordered list of notification callbacks.
#[derive(Default)]
pub struct ObserverRegistry {
    next_id: u64,
    subscribers: Vec<(SubscriberId, Callback)>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for every notification kind.
    pub fn subscribe(&mut self, callback: impl Fn(Notification) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a previously registered callback.
    ///
    /// Returns `true` when the subscriber was found.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Deliver `notification` to every subscriber, in registration order.
    pub fn emit(&self, notification: Notification) {
        for (_, callback) in &self.subscribers {
            callback(notification);
        }
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
