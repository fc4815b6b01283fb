use alloc::vec::Vec;

/// Handle returned by [`KeyBroadcast::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubscriberId(u64);

/// A page-wide key input service.
///
/// Instances that respond to any key press subscribe here instead of owning a document-level
/// handler, so every subscriber receives each key (registration order is delivery order).
#[derive(Clone, Debug)]
pub struct KeyBroadcast<T> {
    subscribers: Vec<(SubscriberId, T)>,
    next_id: u64,
}

impl<T> Default for KeyBroadcast<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> KeyBroadcast<T> {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn subscribe(&mut self, target: T) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.subscribers.push((id, target));
        strace!(subscribers = self.subscribers.len(), "KeyBroadcast::subscribe");
        id
    }

    /// Removes a subscriber. Returns `false` if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Subscribed targets, in delivery order.
    pub fn targets(&self) -> impl Iterator<Item = &T> + '_ {
        self.subscribers.iter().map(|(_, t)| t)
    }

    /// Calls `deliver` once per subscriber, in delivery order.
    pub fn broadcast(&self, mut deliver: impl FnMut(&T)) {
        for (_, target) in &self.subscribers {
            deliver(target);
        }
    }
}
