//! Capability lanes handed to module code.
//!
//! A [`Lanes`] value lets a module call services and emit or subscribe to
//! events on behalf of one [`KernelContext`], without access to the
//! registries themselves.
use std::fmt;
use std::sync::{Arc, Weak};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::event::{
    sync_event_handler, EventBus, EventHandler, EventSystemError, KernelEvent, ListenerError,
    Subscription,
};
use crate::kernel::context::KernelContext;
use crate::service::{ServiceError, ServiceRegistry};

/// Service invocation capability.
#[async_trait]
pub trait ServiceLane: Send + Sync {
    async fn call(&self, key: &str, input: Value) -> Result<Value, ServiceError>;
}

/// Event capability.
pub trait EventLane: Send + Sync {
    fn emit(&self, event: KernelEvent) -> Result<(), EventSystemError>;
    fn on(&self, event_type: &str, handler: EventHandler) -> Subscription;

    /// Encode `payload` and emit it stamped with `app_id` and the current time.
    fn emit_typed<P>(&self, app_id: &str, event_type: &str, payload: &P) -> Result<(), EventSystemError>
    where
        Self: Sized,
        P: Serialize,
    {
        self.emit(KernelEvent::encode(event_type, payload)?.from_app(app_id))
    }
}

#[derive(Clone)]
pub struct Lanes {
    services: ServicesLane,
    events: EventsLane,
    ctx: KernelContext,
}

impl fmt::Debug for Lanes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lanes").field("ctx", &self.ctx).finish_non_exhaustive()
    }
}

impl Lanes {
    pub fn new(services: Arc<ServiceRegistry>, events: Arc<EventBus>, ctx: KernelContext) -> Self {
        Self {
            services: ServicesLane { registry: services },
            events: EventsLane { bus: events, ctx: ctx.clone() },
            ctx,
        }
    }

    pub fn services(&self) -> &ServicesLane {
        &self.services
    }

    pub fn events(&self) -> &EventsLane {
        &self.events
    }

    pub fn ctx(&self) -> &KernelContext {
        &self.ctx
    }
}

#[derive(Clone)]
pub struct ServicesLane {
    registry: Arc<ServiceRegistry>,
}

#[async_trait]
impl ServiceLane for ServicesLane {
    async fn call(&self, key: &str, input: Value) -> Result<Value, ServiceError> {
        self.registry.call(key, input).await
    }
}

impl ServicesLane {
    /// Call with typed input and output.
    pub async fn call_typed<I, O>(&self, key: &str, input: &I) -> Result<O, ServiceError>
    where
        I: Serialize + Sync,
        O: DeserializeOwned,
    {
        let input = serde_json::to_value(input).map_err(|e| ServiceError::HandlerFailed {
            key: key.to_string(),
            message: format!("unencodable input: {e}"),
        })?;
        let output = self.registry.call(key, input).await?;
        serde_json::from_value(output).map_err(|e| ServiceError::HandlerFailed {
            key: key.to_string(),
            message: format!("undecodable output: {e}"),
        })
    }
}

#[derive(Clone)]
pub struct EventsLane {
    bus: Arc<EventBus>,
    ctx: KernelContext,
}

impl EventLane for EventsLane {
    fn emit(&self, event: KernelEvent) -> Result<(), EventSystemError> {
        self.bus.emit(&self.ctx, &event)
    }

    fn on(&self, event_type: &str, handler: EventHandler) -> Subscription {
        self.bus.on(&self.ctx, event_type, handler)
    }
}

impl EventsLane {
    /// Emit `payload` as an event of `event_type`.
    pub fn publish(&self, event_type: &str, payload: Value) -> Result<(), EventSystemError> {
        self.emit(KernelEvent::new(event_type, payload))
    }

    /// Emit `payload`, stamped with `app_id` and the current time.
    pub fn publish_from(&self, app_id: &str, event_type: &str, payload: Value) -> Result<(), EventSystemError> {
        self.emit(KernelEvent::new(event_type, payload).from_app(app_id))
    }

    /// Subscribe a closure.
    pub fn subscribe<F>(&self, event_type: &str, f: F) -> Subscription
    where
        F: Fn(&KernelEvent) -> Result<(), ListenerError> + Send + Sync + 'static,
    {
        self.on(event_type, sync_event_handler(f))
    }

    /// An emit-only handle holding a weak reference to the bus, for use
    /// inside handlers registered on that same bus.
    pub fn emitter(&self) -> EventEmitter {
        EventEmitter {
            bus: Arc::downgrade(&self.bus),
            ctx: self.ctx.clone(),
        }
    }
}

/// Emit-only capability that does not keep the bus alive.
#[derive(Clone)]
pub struct EventEmitter {
    bus: Weak<EventBus>,
    ctx: KernelContext,
}

impl EventEmitter {
    pub fn emit(&self, event: KernelEvent) -> Result<(), EventSystemError> {
        match self.bus.upgrade() {
            Some(bus) => bus.emit(&self.ctx, &event),
            None => Err(EventSystemError::BusUnavailable {
                event_type: event.event_type,
            }),
        }
    }

    pub fn publish_from(&self, app_id: &str, event_type: &str, payload: Value) -> Result<(), EventSystemError> {
        self.emit(KernelEvent::new(event_type, payload).from_app(app_id))
    }
}
