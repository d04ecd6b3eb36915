//! # AIBOS Core Event System
//!
//! Typed publish/subscribe between apps. Events are [`KernelEvent`] values
//! keyed by a type string; handlers are plain synchronous closures returning
//! a [`ListenerError`] on failure.
//!
//! The bus does not isolate listeners: an error from one handler aborts the
//! dispatch and is returned to the emitter. Modules that must not disturb
//! their emitters guard their own handlers.
pub mod bus;
pub mod error;
pub mod types;

/// Subscription identifier
pub type EventId = u64;

pub use bus::{sync_event_handler, EventBus, EventHandler, Subscription};
pub use error::{EventSystemError, ListenerError};
pub use types::KernelEvent;

#[cfg(test)]
mod tests;
