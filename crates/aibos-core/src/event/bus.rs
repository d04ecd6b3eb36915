use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard, Weak};

use crate::event::error::{EventSystemError, ListenerError};
use crate::event::types::KernelEvent;
use crate::event::EventId;
use crate::kernel::context::KernelContext;

/// Synchronous event handler.
pub type EventHandler = Arc<dyn Fn(&KernelEvent) -> Result<(), ListenerError> + Send + Sync>;

type HandlerMap = HashMap<String, Vec<(EventId, EventHandler)>>;

/// Wrap a closure as an [`EventHandler`].
pub fn sync_event_handler<F>(f: F) -> EventHandler
where
    F: Fn(&KernelEvent) -> Result<(), ListenerError> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// In-process publish/subscribe bus.
///
/// Handlers for a type run on the emitter's stack in subscription order.
/// Dispatch works on a snapshot of the handler list, so handlers may emit,
/// subscribe or dispose while an event is being delivered.
pub struct EventBus {
    handlers: Arc<RwLock<HandlerMap>>,
    next_id: AtomicU64,
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("event_types", &self.event_types())
            .field("next_id", &self.next_id.load(Ordering::Relaxed))
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicU64::new(1),
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, HandlerMap> {
        self.handlers.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn snapshot(&self, event_type: &str) -> Vec<(EventId, EventHandler)> {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(event_type)
            .cloned()
            .unwrap_or_default()
    }

    /// Deliver `event` to every handler subscribed to its type.
    ///
    /// The first handler returning an error stops the dispatch; later
    /// handlers do not see the event.
    pub fn emit(&self, ctx: &KernelContext, event: &KernelEvent) -> Result<(), EventSystemError> {
        let handlers = self.snapshot(&event.event_type);
        log::debug!(
            "Emitting '{}' to {} handler(s) (tenant: {})",
            event.event_type,
            handlers.len(),
            ctx.tenant_id
        );
        for (id, handler) in handlers {
            handler(event).map_err(|source| EventSystemError::ListenerFailed {
                event_type: event.event_type.clone(),
                subscription: id,
                source,
            })?;
        }
        Ok(())
    }

    /// Subscribe `handler` to `event_type`.
    pub fn on(&self, ctx: &KernelContext, event_type: &str, handler: EventHandler) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.write()
            .entry(event_type.to_string())
            .or_default()
            .push((id, handler));
        log::debug!("Subscribed {} to '{}' (tenant: {})", id, event_type, ctx.tenant_id);
        Subscription {
            id,
            event_type: event_type.to_string(),
            handlers: Arc::downgrade(&self.handlers),
        }
    }

    /// Drop every subscription.
    pub fn clear(&self) {
        self.write().clear();
    }

    pub fn handler_count(&self, event_type: &str) -> usize {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(event_type)
            .map_or(0, Vec::len)
    }

    /// Event types with at least one subscription, sorted.
    pub fn event_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, _)| k.clone())
            .collect();
        types.sort();
        types
    }
}

/// Handle returned by [`EventBus::on`]. Disposing removes exactly the
/// subscription it was returned for. Dropping the handle keeps the
/// subscription alive.
#[derive(Debug, Clone)]
pub struct Subscription {
    id: EventId,
    event_type: String,
    handlers: Weak<RwLock<HandlerMap>>,
}

impl Subscription {
    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// Remove the subscription. Returns `false` if it was already gone.
    pub fn dispose(&self) -> bool {
        let Some(handlers) = self.handlers.upgrade() else {
            return false;
        };
        let mut map = handlers.write().unwrap_or_else(PoisonError::into_inner);
        let Some(list) = map.get_mut(&self.event_type) else {
            return false;
        };
        let before = list.len();
        list.retain(|(id, _)| *id != self.id);
        let removed = list.len() != before;
        if list.is_empty() {
            map.remove(&self.event_type);
        }
        removed
    }
}
