use serde::Deserialize;
use serde_json::Value;

use super::error::ValidationError;
use super::types::{AppManifest, EventDecl, MenuItem, RouteDef, ServiceDef};

/// Unvalidated manifest, as written by a module author or parsed from a
/// manifest document. Every field is optional; [`validate`](super::validate)
/// decides what is acceptable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawManifest {
    pub id: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
    pub owned_entities: Option<Vec<String>>,
    pub routes: Option<Vec<RouteDef>>,
    pub menu: Option<Vec<MenuItem>>,
    pub permissions: Option<Vec<String>>,
    pub dimensions: Option<Vec<Value>>,
    pub services: Option<Vec<ServiceDef>>,
    pub events: Option<RawEventDecl>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEventDecl {
    pub emits: Option<Vec<String>>,
    pub consumes: Option<Vec<String>>,
}

impl RawManifest {
    /// Parse a JSON manifest document.
    pub fn from_json(text: &str) -> Result<Self, ValidationError> {
        serde_json::from_str(text).map_err(|e| ValidationError::single("", e.to_string()))
    }

    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        serde_json::from_value(value).map_err(|e| ValidationError::single("", e.to_string()))
    }

    /// Parse a TOML manifest document.
    #[cfg(feature = "toml-config")]
    pub fn from_toml(text: &str) -> Result<Self, ValidationError> {
        toml::from_str(text).map_err(|e| ValidationError::single("", e.to_string()))
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Attach a runtime service contract. A declared contract with the same
    /// key is replaced in place; otherwise the contract is appended.
    pub fn bind_service(mut self, def: ServiceDef) -> Self {
        let services = self.services.get_or_insert_with(Vec::new);
        match services.iter_mut().find(|s| s.key == def.key) {
            Some(slot) => *slot = def,
            None => services.push(def),
        }
        self
    }
}

impl From<AppManifest> for RawManifest {
    fn from(m: AppManifest) -> Self {
        let EventDecl { emits, consumes } = m.events;
        Self {
            id: Some(m.id),
            name: Some(m.name),
            version: Some(m.version),
            owned_entities: Some(m.owned_entities),
            routes: Some(m.routes),
            menu: Some(m.menu),
            permissions: Some(m.permissions),
            dimensions: Some(m.dimensions),
            services: Some(m.services),
            events: Some(RawEventDecl {
                emits: Some(emits),
                consumes: Some(consumes),
            }),
        }
    }
}
