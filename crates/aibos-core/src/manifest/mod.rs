//! # AIBOS Core Manifests
//!
//! An app announces itself to the kernel through a manifest: identity and
//! version, the routes and menu entries it contributes, the permissions and
//! entities it owns, the services it exposes and the events it emits and
//! consumes.
//!
//! - [`RawManifest`] is the unvalidated form, written with [`ManifestBuilder`]
//!   or parsed from a JSON/TOML manifest document.
//! - [`validate`] checks a raw manifest and returns the normalized
//!   [`AppManifest`], or a [`ValidationError`] listing every issue found.
//! - [`define_app`] is the definition-time variant modules call to fail fast.
pub mod builder;
pub mod error;
pub mod raw;
pub mod types;
pub mod validate;

pub use builder::ManifestBuilder;
pub use error::{Issues, ValidationError, ValidationIssue};
pub use raw::{RawEventDecl, RawManifest};
pub use types::{AppManifest, EventDecl, MenuItem, RouteDef, ServiceDef};
pub use validate::{define_app, validate};

#[cfg(test)]
mod tests;
