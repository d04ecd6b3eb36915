use std::collections::HashSet;
use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;
use serde_json::Value;

use super::error::ServiceError;
use crate::manifest::ServiceDef;

/// A service contract together with the app that registered it.
#[derive(Debug, Clone)]
pub struct RegisteredService {
    pub def: ServiceDef,
    pub owner_id: String,
}

impl RegisteredService {
    pub fn key(&self) -> &str {
        &self.def.key
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn description(&self) -> Option<&str> {
        self.def.description.as_deref()
    }
}

/// Global map from service key to contract.
///
/// Keys are unique across all owners. Entries keep registration order.
#[derive(Default)]
pub struct ServiceRegistry {
    entries: RwLock<IndexMap<String, RegisteredService>>,
}

impl fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("keys", &self.keys())
            .finish()
    }
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, IndexMap<String, RegisteredService>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, IndexMap<String, RegisteredService>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register one contract under `owner_id`.
    pub fn register(&self, owner_id: &str, def: ServiceDef) -> Result<(), ServiceError> {
        let mut entries = self.write();
        if let Some(existing) = entries.get(&def.key) {
            return Err(ServiceError::DuplicateServiceKey {
                key: def.key.clone(),
                owner_id: existing.owner_id.clone(),
            });
        }
        log::debug!("Registered service '{}' for '{}'", def.key, owner_id);
        entries.insert(
            def.key.clone(),
            RegisteredService {
                def,
                owner_id: owner_id.to_string(),
            },
        );
        Ok(())
    }

    /// Register a batch of contracts. Either every key is inserted or none is.
    pub fn register_all(&self, owner_id: &str, defs: &[ServiceDef]) -> Result<(), ServiceError> {
        let mut entries = self.write();
        check_batch(&entries, owner_id, defs, |_| false)?;
        insert_batch(&mut entries, owner_id, defs);
        Ok(())
    }

    /// Swap every contract owned by `owner_id` for `defs`.
    ///
    /// Keys already held by the same owner may be reused; keys held by any
    /// other owner are rejected and the registry is left untouched.
    pub fn replace_owner(&self, owner_id: &str, defs: &[ServiceDef]) -> Result<Vec<String>, ServiceError> {
        let mut entries = self.write();
        check_batch(&entries, owner_id, defs, |existing| existing.owner_id == owner_id)?;
        let removed = remove_owner(&mut entries, owner_id);
        insert_batch(&mut entries, owner_id, defs);
        Ok(removed)
    }

    /// Remove every contract owned by `owner_id`, returning the removed keys.
    pub fn unregister_owner(&self, owner_id: &str) -> Vec<String> {
        let removed = remove_owner(&mut self.write(), owner_id);
        if !removed.is_empty() {
            log::debug!("Unregistered {} service(s) of '{}'", removed.len(), owner_id);
        }
        removed
    }

    pub fn get(&self, key: &str) -> Option<RegisteredService> {
        self.read().get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.read().contains_key(key)
    }

    /// Snapshot of all entries in registration order.
    pub fn list(&self) -> Vec<RegisteredService> {
        self.read().values().cloned().collect()
    }

    pub fn keys(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    pub fn keys_owned_by(&self, owner_id: &str) -> Vec<String> {
        self.read()
            .values()
            .filter(|s| s.owner_id == owner_id)
            .map(|s| s.def.key.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn clear(&self) {
        self.write().clear();
    }

    /// Invoke the service registered under `key`.
    ///
    /// The input schema (if any) validates and coerces `input` before the
    /// handler sees it; the output schema (if any) does the same for the
    /// result. The registry lock is released before the handler runs.
    pub async fn call(&self, key: &str, input: Value) -> Result<Value, ServiceError> {
        let not_found = || ServiceError::ServiceNotFound { key: key.to_string() };
        let def = self.get(key).map(|s| s.def).ok_or_else(not_found)?;
        let handler = def.handler.clone().ok_or_else(not_found)?;
        log::debug!("Calling service '{}'", key);

        let input = match &def.input_schema {
            Some(schema) => schema.validate(input).map_err(|source| ServiceError::InvalidInput {
                key: key.to_string(),
                source,
            })?,
            None => input,
        };

        let output = handler.handle(input).await.map_err(|e| e.with_key(key))?;

        match &def.output_schema {
            Some(schema) => schema.validate(output).map_err(|source| ServiceError::InvalidOutput {
                key: key.to_string(),
                source,
            }),
            None => Ok(output),
        }
    }
}

fn check_batch(
    entries: &IndexMap<String, RegisteredService>,
    owner_id: &str,
    defs: &[ServiceDef],
    may_reuse: impl Fn(&RegisteredService) -> bool,
) -> Result<(), ServiceError> {
    let mut seen = HashSet::new();
    for def in defs {
        if !seen.insert(def.key.as_str()) {
            return Err(ServiceError::DuplicateServiceKey {
                key: def.key.clone(),
                owner_id: owner_id.to_string(),
            });
        }
        if let Some(existing) = entries.get(&def.key) {
            if !may_reuse(existing) {
                return Err(ServiceError::DuplicateServiceKey {
                    key: def.key.clone(),
                    owner_id: existing.owner_id.clone(),
                });
            }
        }
    }
    Ok(())
}

fn insert_batch(entries: &mut IndexMap<String, RegisteredService>, owner_id: &str, defs: &[ServiceDef]) {
    for def in defs {
        entries.insert(
            def.key.clone(),
            RegisteredService {
                def: def.clone(),
                owner_id: owner_id.to_string(),
            },
        );
    }
}

fn remove_owner(entries: &mut IndexMap<String, RegisteredService>, owner_id: &str) -> Vec<String> {
    let removed: Vec<String> = entries
        .values()
        .filter(|s| s.owner_id == owner_id)
        .map(|s| s.def.key.clone())
        .collect();
    entries.retain(|_, s| s.owner_id != owner_id);
    removed
}
