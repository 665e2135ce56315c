//! Event system: multicast observer lists
//!
//! Key principles:
//! - Registration system (only subscribed listeners are notified)
//! - Immediate, synchronous delivery on the calling thread
//! - Dispatch order is subscription order; every listener sees every event
//! - No queuing: an event is fully delivered before `broadcast` returns

/// Receiver of events of type `T`
///
/// Implemented for every `FnMut(&T)` closure, so most listeners are plain
/// closures.
pub trait Listener<T> {
    /// Handle one event
    fn on_event(&mut self, event: &T);
}

impl<T, F> Listener<T> for F
where
    F: FnMut(&T),
{
    fn on_event(&mut self, event: &T) {
        self(event)
    }
}

/// Handle returned by [`Multicast::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Ordered list of listeners for one kind of event
pub struct Multicast<T> {
    listeners: Vec<(ListenerId, Box<dyn Listener<T>>)>,
    next_id: u64,
}

impl<T> Multicast<T> {
    /// Create an empty listener list
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Add a listener at the end of the dispatch order
    pub fn subscribe<L>(&mut self, listener: L) -> ListenerId
    where
        L: Listener<T> + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns `false` if it was not subscribed
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Deliver `event` to every listener, in subscription order
    pub fn broadcast(&mut self, event: &T) {
        for (_, listener) in &mut self.listeners {
            listener.on_event(event);
        }
    }

    /// Number of subscribed listeners
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether nobody is listening
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Drop all listeners
    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}

impl<T> Default for Multicast<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Multicast<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Multicast")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
