//! # AIBOS Core Adapter Lifecycle
//!
//! Apps move through `Uninstalled -> Installed -> (Upgraded)* -> Uninstalled`.
//!
//! - [`AppModule`]: a manifest plus an optional listener hook, as handed to
//!   the kernel by a module crate.
//! - [`AppRegistry`]: the installed app records.
//! - [`AdapterRegistry`]: install, upgrade and unmount, keeping the app and
//!   service registries consistent.
//! - [`VersionPolicy`]: how upgrade versions are compared.
pub mod app_registry;
pub mod error;
pub mod module;
pub mod registry;
pub mod version;

pub use app_registry::{AppRegistry, InstalledApp};
pub use error::LifecycleError;
pub use module::{AppModule, ListenerHook};
pub use registry::AdapterRegistry;
pub use version::VersionPolicy;
