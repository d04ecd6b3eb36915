//! # AIBOS Core Kernel
//!
//! The `kernel` module ties the subsystems together into a host that
//! business modules boot into.
//!
//! ## Key Responsibilities & Components:
//!
//! - **Boot**: [`Kernel`](bootstrap::Kernel) owns the app registry, service
//!   registry and event bus for one runtime, installs modules and runs their
//!   listener hooks.
//! - **Lanes**: [`Lanes`](lanes::Lanes) is the capability bundle handed to
//!   module code: service calls and event emit/subscribe for one
//!   [`KernelContext`](context::KernelContext).
//! - **Core Constants**: system-wide constants in the `constants` submodule.
//! - **Error Handling**: the aggregate [`Error`](error::Error) and a `Result`
//!   alias in the `error` submodule.
pub mod bootstrap;
pub mod constants;
pub mod context;
pub mod error;
pub mod lanes;

pub use bootstrap::{BootReport, HookFailure, Kernel};
pub use context::KernelContext;
pub use error::{Error, Result};
pub use lanes::{EventEmitter, EventLane, EventsLane, Lanes, ServiceLane, ServicesLane};

// Test module declaration
#[cfg(test)]
mod tests;
