use serde_json::Value;

use super::error::ValidationError;
use super::raw::{RawEventDecl, RawManifest};
use super::types::{AppManifest, MenuItem, RouteDef, ServiceDef};
use super::validate::validate;

/// Builder for creating an app manifest
pub struct ManifestBuilder {
    manifest: RawManifest,
}

impl ManifestBuilder {
    /// Create a new manifest builder
    pub fn new(id: &str, name: &str, version: &str) -> Self {
        Self {
            manifest: RawManifest {
                id: Some(id.to_string()),
                name: Some(name.to_string()),
                version: Some(version.to_string()),
                ..RawManifest::default()
            },
        }
    }

    /// Add an entity type this app owns
    pub fn owned_entity(mut self, entity: &str) -> Self {
        self.manifest
            .owned_entities
            .get_or_insert_with(Vec::new)
            .push(entity.to_string());
        self
    }

    pub fn owned_entities(self, entities: &[&str]) -> Self {
        entities.iter().fold(self, |b, e| b.owned_entity(e))
    }

    /// Add a route
    pub fn route(mut self, path: &str, component: &str) -> Self {
        self.push_route(path, component, None);
        self
    }

    /// Add a route that only matches its path exactly
    pub fn exact_route(mut self, path: &str, component: &str) -> Self {
        self.push_route(path, component, Some(true));
        self
    }

    fn push_route(&mut self, path: &str, component: &str, exact: Option<bool>) {
        self.manifest.routes.get_or_insert_with(Vec::new).push(RouteDef {
            path: path.to_string(),
            component: component.to_string(),
            exact,
        });
    }

    /// Add a menu entry
    pub fn menu_item(mut self, id: &str, label: &str, path: &str, order: Option<i32>) -> Self {
        self.manifest.menu.get_or_insert_with(Vec::new).push(MenuItem {
            id: id.to_string(),
            label: label.to_string(),
            path: path.to_string(),
            order,
        });
        self
    }

    pub fn permission(mut self, permission: &str) -> Self {
        self.manifest
            .permissions
            .get_or_insert_with(Vec::new)
            .push(permission.to_string());
        self
    }

    pub fn permissions(self, permissions: &[&str]) -> Self {
        permissions.iter().fold(self, |b, p| b.permission(p))
    }

    /// Add an opaque dimension descriptor
    pub fn dimension(mut self, dimension: Value) -> Self {
        self.manifest
            .dimensions
            .get_or_insert_with(Vec::new)
            .push(dimension);
        self
    }

    /// Add a service contract
    pub fn service(mut self, def: ServiceDef) -> Self {
        self.manifest.services.get_or_insert_with(Vec::new).push(def);
        self
    }

    /// Declare an emitted event type
    pub fn emits(mut self, event_type: &str) -> Self {
        self.events()
            .emits
            .get_or_insert_with(Vec::new)
            .push(event_type.to_string());
        self
    }

    /// Declare a consumed event type
    pub fn consumes(mut self, event_type: &str) -> Self {
        self.events()
            .consumes
            .get_or_insert_with(Vec::new)
            .push(event_type.to_string());
        self
    }

    fn events(&mut self) -> &mut RawEventDecl {
        self.manifest.events.get_or_insert_with(RawEventDecl::default)
    }

    /// Build the raw manifest
    pub fn build(self) -> RawManifest {
        self.manifest
    }

    /// Build and validate in one step
    pub fn define(self) -> Result<AppManifest, ValidationError> {
        validate(&self.manifest)
    }
}
