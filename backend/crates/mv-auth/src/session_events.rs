use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use log::debug;
use mv_core::{AuthEvent, Session};

pub type SessionListener = Arc<dyn Fn(AuthEvent, Option<&Session>) + Send + Sync>;

#[derive(Default)]
struct ListenerSet {
    next_id: u64,
    listeners: HashMap<u64, SessionListener>,
}

/// Observable stream of session changes.
///
/// Contract: `subscribe` invokes the new listener exactly once, synchronously
/// and before returning, with [`AuthEvent::InitialSession`] and the session
/// passed in. Later events reach every registered listener synchronously, in
/// no particular order.
#[derive(Default)]
pub struct SessionEvents {
    inner: Arc<Mutex<ListenerSet>>,
}

impl SessionEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, current: Option<&Session>, listener: F) -> Subscription
    where
        F: Fn(AuthEvent, Option<&Session>) + Send + Sync + 'static,
    {
        let listener: SessionListener = Arc::new(listener);

        let id = {
            let mut set = lock(&self.inner);
            let id = set.next_id;
            set.next_id += 1;
            set.listeners.insert(id, Arc::clone(&listener));
            id
        };

        debug!("Session listener {} subscribed", id);
        listener(AuthEvent::InitialSession, current);

        Subscription {
            id,
            set: Arc::downgrade(&self.inner),
        }
    }

    pub fn emit(&self, event: AuthEvent, session: Option<&Session>) {
        // Snapshot so listeners may subscribe or unsubscribe re-entrantly.
        let listeners: Vec<SessionListener> = lock(&self.inner).listeners.values().cloned().collect();

        debug!("Emitting {} to {} listeners", event, listeners.len());
        for listener in listeners {
            listener(event, session);
        }
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.inner).listeners.len()
    }
}

/// Handle returned by [`SessionEvents::subscribe`]. Dropping it keeps the
/// listener registered; call [`Subscription::unsubscribe`] to remove it.
#[must_use = "the listener stays registered until `unsubscribe` is called"]
pub struct Subscription {
    id: u64,
    set: Weak<Mutex<ListenerSet>>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        if let Some(set) = self.set.upgrade() {
            lock(&set).listeners.remove(&self.id);
            debug!("Session listener {} unsubscribed", self.id);
        }
    }
}

fn lock(set: &Mutex<ListenerSet>) -> MutexGuard<'_, ListenerSet> {
    set.lock().unwrap_or_else(PoisonError::into_inner)
}
