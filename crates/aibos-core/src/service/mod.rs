//! # AIBOS Core Service Registry
//!
//! RPC-style services exposed by apps. Each [`ServiceDef`](crate::manifest::ServiceDef)
//! declared in a manifest is registered under its app id when the app is
//! installed; [`ServiceRegistry::call`] validates input, runs the handler and
//! validates output.
//!
//! - [`schema`]: the [`Validator`] trait, serde-backed [`TypedSchema`] and the
//!   [`Validate`] trait for value rules.
//! - [`handler`]: the [`ServiceHandler`] trait and closure adapters.
pub mod error;
pub mod handler;
pub mod registry;
pub mod schema;

pub use error::ServiceError;
pub use handler::{async_service_handler, sync_service_handler, typed_handler, ServiceHandler};
pub use registry::{RegisteredService, ServiceRegistry};
pub use schema::{check, schema, validator_fn, FnValidator, TypedSchema, Validate, Validator};

#[cfg(test)]
mod tests;
