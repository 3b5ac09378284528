use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::event::AppEvent;

/// Owned future returned by event handlers
pub type BoxFuture<'a> = Pin<Box<dyn Future<Output = ()> + Send + 'a>>;

/// Type for subscriber identifiers
pub type EventId = u64;

/// Asynchronous event handler
pub type EventHandler = Box<dyn for<'a> Fn(&'a AppEvent) -> BoxFuture<'a> + Send + Sync>;

struct EventBusInner {
    subscribers: Vec<(EventId, EventHandler)>,
    next_id: EventId,
}

/// Thread-safe application event bus.
///
/// Cloning the bus clones the handle; all clones share one subscriber
/// list. `emit` runs every handler subscribed at that moment, in
/// subscription order.
#[derive(Clone)]
pub struct EventBus {
    inner: Arc<Mutex<EventBusInner>>,
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus").finish_non_exhaustive()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(EventBusInner {
                subscribers: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Register a handler; returns an id usable with [`EventBus::unsubscribe`]
    pub async fn subscribe(&self, handler: EventHandler) -> EventId {
        let mut inner = self.inner.lock().await;
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, handler));
        id
    }

    /// Remove a handler by id; returns whether one was removed
    pub async fn unsubscribe(&self, id: EventId) -> bool {
        let mut inner = self.inner.lock().await;
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(sub_id, _)| *sub_id != id);
        inner.subscribers.len() < before
    }

    /// Broadcast an event to every current subscriber
    pub async fn emit(&self, event: &AppEvent) {
        log::debug!("Emitting event '{}'", event.name());
        let inner = self.inner.lock().await;
        for (_, handler) in &inner.subscribers {
            handler(event).await;
        }
    }

    /// Number of live subscriptions
    pub async fn subscriber_count(&self) -> usize {
        self.inner.lock().await.subscribers.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Wrap a synchronous closure into an async event handler
pub fn sync_handler<F>(f: F) -> EventHandler
where
    F: Fn(&AppEvent) + Send + Sync + 'static,
{
    Box::new(move |event| {
        f(event);
        Box::pin(async {})
    })
}
