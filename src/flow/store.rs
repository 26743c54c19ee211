use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<T> = Box<dyn FnMut(&Arc<T>)>;

/// A value that is only ever replaced as a whole.
///
/// Readers get an `Arc` snapshot; a snapshot taken before an update keeps showing the old
/// value. Subscribers run after every replacement, in subscription order.
pub struct Store<T> {
    value: Arc<T>,
    subscribers: Vec<(SubscriptionId, Subscriber<T>)>,
    next_subscription: u64,
}

impl<T> Store<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Arc::new(value),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The current value.
    pub fn get(&self) -> Arc<T> {
        Arc::clone(&self.value)
    }

    /// Replaces the value and notifies subscribers.
    pub fn set(&mut self, value: T) {
        self.value = Arc::new(value);
        trace!(subscribers = self.subscribers.len(), "store value replaced");
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.value);
        }
    }

    /// Derives the next value from the current one.
    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        let next = f(&self.value);
        self.set(next);
    }

    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&Arc<T>) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns `false` if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }
}

impl<T: Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
