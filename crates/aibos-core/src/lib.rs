//! # AIBOS Core
//!
//! Plugin kernel for AIBOS business modules. Modules describe themselves
//! with a manifest, expose services through the [`service`] registry, talk
//! to each other over the [`event`] bus and are installed, upgraded and
//! unmounted by the [`adapter`] lifecycle. [`kernel::Kernel`] wires these
//! together and boots a set of modules.
pub mod adapter;
pub mod config;
pub mod event;
pub mod kernel;
pub mod manifest;
pub mod service;

pub use adapter::{AdapterRegistry, AppModule, AppRegistry, InstalledApp, LifecycleError, VersionPolicy};
pub use config::KernelConfig;
pub use event::{EventBus, KernelEvent, ListenerError, Subscription};
pub use kernel::error::Error as KernelError;
pub use kernel::{Kernel, KernelContext, Lanes};
pub use manifest::{define_app, AppManifest, ManifestBuilder, RawManifest, ServiceDef, ValidationError};
pub use service::{ServiceError, ServiceRegistry};

/// Everything a module crate typically needs.
pub mod prelude {
    pub use crate::adapter::AppModule;
    pub use crate::event::{EventSystemError, KernelEvent, ListenerError, Subscription};
    pub use crate::kernel::{EventEmitter, EventLane, Lanes, ServiceLane};
    pub use crate::manifest::{
        define_app, Issues, ManifestBuilder, RawManifest, ServiceDef, ValidationError, ValidationIssue,
    };
    pub use crate::service::{
        check, schema, sync_service_handler, typed_handler, validator_fn, ServiceError, TypedSchema,
        Validate, Validator,
    };
}

#[cfg(test)]
mod tests;
