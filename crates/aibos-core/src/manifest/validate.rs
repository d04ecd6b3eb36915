use std::collections::HashSet;

use super::error::{Issues, ValidationError};
use super::raw::RawManifest;
use super::types::{AppManifest, EventDecl};

/// Validate a raw manifest and produce the normalized [`AppManifest`].
///
/// Every rule is checked and all failures are reported together. Omitted
/// collections become empty.
pub fn validate(raw: &RawManifest) -> Result<AppManifest, ValidationError> {
    let mut issues = Issues::new();

    let id = required(&mut issues, &raw.id, "id", true);
    let name = required(&mut issues, &raw.name, "name", false);
    let version = required(&mut issues, &raw.version, "version", true);

    let routes = raw.routes.clone().unwrap_or_default();
    for (i, route) in routes.iter().enumerate() {
        if !route.path.starts_with('/') {
            issues.push(format!("routes.{i}.path"), "Route path must start with '/'");
        }
        issues.non_empty(&route.component, format!("routes.{i}.component"));
    }

    let menu = raw.menu.clone().unwrap_or_default();
    {
        let mut seen = HashSet::new();
        for (i, item) in menu.iter().enumerate() {
            issues.non_empty(&item.id, format!("menu.{i}.id"));
            issues.non_empty(&item.label, format!("menu.{i}.label"));
            issues.non_empty(&item.path, format!("menu.{i}.path"));
            if !item.id.is_empty() && !seen.insert(item.id.as_str()) {
                issues.push(format!("menu.{i}.id"), format!("Duplicate menu id: {}", item.id));
            }
        }
    }

    let services = raw.services.clone().unwrap_or_default();
    {
        let mut seen = HashSet::new();
        for (i, service) in services.iter().enumerate() {
            issues.non_empty(&service.key, format!("services.{i}.key"));
            if !service.key.is_empty() && !seen.insert(service.key.as_str()) {
                issues.push(
                    format!("services.{i}.key"),
                    format!("Duplicate service key in manifest: {}", service.key),
                );
            }
        }
    }

    let permissions = raw.permissions.clone().unwrap_or_default();
    for (i, permission) in permissions.iter().enumerate() {
        issues.non_empty(permission, format!("permissions.{i}"));
    }

    let events = raw.events.clone().unwrap_or_default();
    let events = EventDecl {
        emits: events.emits.unwrap_or_default(),
        consumes: events.consumes.unwrap_or_default(),
    };
    for (i, event_type) in events.emits.iter().enumerate() {
        issues.non_empty(event_type, format!("events.emits.{i}"));
    }
    for (i, event_type) in events.consumes.iter().enumerate() {
        issues.non_empty(event_type, format!("events.consumes.{i}"));
    }

    issues.finish(AppManifest {
        id,
        name,
        version,
        owned_entities: raw.owned_entities.clone().unwrap_or_default(),
        routes,
        menu,
        permissions,
        dimensions: raw.dimensions.clone().unwrap_or_default(),
        services,
        events,
    })
}

/// Validate at definition time. Modules call this to fail fast on a
/// malformed manifest before handing it to the kernel.
pub fn define_app(raw: RawManifest) -> Result<AppManifest, ValidationError> {
    validate(&raw)
}

fn required(issues: &mut Issues, value: &Option<String>, path: &str, non_empty: bool) -> String {
    match value {
        Some(v) => {
            if non_empty {
                issues.non_empty(v, path);
            }
            v.clone()
        }
        None => {
            issues.push(path, "Required");
            String::new()
        }
    }
}
