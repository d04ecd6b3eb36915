use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::service::handler::ServiceHandler;
use crate::service::schema::Validator;

/// A UI route contributed by an app. `component` is an opaque reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDef {
    pub path: String,
    pub component: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exact: Option<bool>,
}

/// A navigation entry contributed by an app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

/// Event types an app publishes and subscribes to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDecl {
    #[serde(default)]
    pub emits: Vec<String>,
    #[serde(default)]
    pub consumes: Vec<String>,
}

/// A service contract declared by an app.
///
/// Schemas and handler are runtime values and never appear in a manifest
/// document; a contract parsed from JSON or TOML has neither until one is
/// bound with [`RawManifest::bind_service`](super::RawManifest::bind_service).
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDef {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip)]
    pub input_schema: Option<Arc<dyn Validator>>,
    #[serde(skip)]
    pub output_schema: Option<Arc<dyn Validator>>,
    #[serde(skip)]
    pub handler: Option<Arc<dyn ServiceHandler>>,
}

impl ServiceDef {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn input_schema(mut self, schema: Arc<dyn Validator>) -> Self {
        self.input_schema = Some(schema);
        self
    }

    pub fn output_schema(mut self, schema: Arc<dyn Validator>) -> Self {
        self.output_schema = Some(schema);
        self
    }

    pub fn handler(mut self, handler: Arc<dyn ServiceHandler>) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Whether the contract can be called.
    pub fn is_callable(&self) -> bool {
        self.handler.is_some()
    }
}

impl fmt::Debug for ServiceDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceDef")
            .field("key", &self.key)
            .field("description", &self.description)
            .field("input_schema", &self.input_schema.is_some())
            .field("output_schema", &self.output_schema.is_some())
            .field("handler", &self.handler.is_some())
            .finish()
    }
}

/// Validated, immutable app descriptor.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppManifest {
    pub id: String,
    pub name: String,
    pub version: String,
    pub owned_entities: Vec<String>,
    pub routes: Vec<RouteDef>,
    pub menu: Vec<MenuItem>,
    pub permissions: Vec<String>,
    pub dimensions: Vec<Value>,
    pub services: Vec<ServiceDef>,
    pub events: EventDecl,
}

impl AppManifest {
    /// Declared service keys in manifest order.
    pub fn service_keys(&self) -> Vec<&str> {
        self.services.iter().map(|s| s.key.as_str()).collect()
    }

    pub fn service(&self, key: &str) -> Option<&ServiceDef> {
        self.services.iter().find(|s| s.key == key)
    }

    /// Menu entries sorted by `order`; entries without an order go last,
    /// keeping manifest order among equals.
    pub fn sorted_menu(&self) -> Vec<&MenuItem> {
        let mut items: Vec<&MenuItem> = self.menu.iter().collect();
        items.sort_by_key(|m| m.order.unwrap_or(i32::MAX));
        items
    }

    pub fn emits(&self, event_type: &str) -> bool {
        self.events.emits.iter().any(|e| e == event_type)
    }

    pub fn consumes(&self, event_type: &str) -> bool {
        self.events.consumes.iter().any(|e| e == event_type)
    }
}
