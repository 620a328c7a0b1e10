//! Current voice list with change notifications.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tracing::debug;

use super::descriptor::VoiceDescriptor;

type Handler = Arc<dyn Fn(&[VoiceDescriptor]) + Send + Sync>;

#[derive(Default)]
struct Inner {
    voices: Vec<VoiceDescriptor>,
    handlers: BTreeMap<u64, Handler>,
    next_id: u64,
}

/// Holds the voices last reported by the host and notifies subscribers
/// when the list is replaced.
#[derive(Clone, Default)]
pub struct VoiceRegistry {
    inner: Arc<Mutex<Inner>>,
}

/// Handle returned by [`VoiceRegistry::on_voices_changed`].
#[must_use = "dropping a subscription keeps the handler registered; call unsubscribe()"]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Inner>>,
}

impl Subscription {
    /// Remove the handler. Does nothing if the registry is gone.
    pub fn unsubscribe(self) {
        if let Some(inner) = self.registry.upgrade() {
            lock(&inner).handlers.remove(&self.id);
        }
    }
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

impl VoiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current voices.
    pub fn voices(&self) -> Vec<VoiceDescriptor> {
        lock(&self.inner).voices.clone()
    }

    /// Register a handler called with the new list on every replacement.
    pub fn on_voices_changed<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&[VoiceDescriptor]) + Send + Sync + 'static,
    {
        let mut inner = lock(&self.inner);
        let id = inner.next_id;
        inner.next_id += 1;
        inner.handlers.insert(id, Arc::new(handler));

        Subscription {
            id,
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        lock(&self.inner).handlers.len()
    }

    /// Store a new voice list and notify subscribers.
    ///
    /// Handlers run after the lock is released and may call back into the
    /// registry.
    pub fn replace(&self, voices: Vec<VoiceDescriptor>) {
        let (voices, handlers) = {
            let mut inner = lock(&self.inner);
            inner.voices = voices;
            let handlers: Vec<Handler> = inner.handlers.values().cloned().collect();
            (inner.voices.clone(), handlers)
        };

        debug!(
            voices = voices.len(),
            subscribers = handlers.len(),
            "voices changed"
        );
        for handler in handlers {
            handler(&voices);
        }
    }
}
