use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;

use crate::manifest::AppManifest;

/// Record of an installed app.
#[derive(Debug, Clone)]
pub struct InstalledApp {
    pub id: String,
    pub version: String,
    pub manifest: AppManifest,
}

impl InstalledApp {
    pub fn new(manifest: AppManifest) -> Self {
        Self {
            id: manifest.id.clone(),
            version: manifest.version.clone(),
            manifest,
        }
    }
}

/// Installed apps keyed by id, in install order. Performs no validation.
#[derive(Default)]
pub struct AppRegistry {
    apps: RwLock<IndexMap<String, InstalledApp>>,
}

impl fmt::Debug for AppRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppRegistry").field("ids", &self.ids()).finish()
    }
}

impl AppRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, IndexMap<String, InstalledApp>> {
        self.apps.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, IndexMap<String, InstalledApp>> {
        self.apps.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert or replace the record for `id`. A replaced record keeps its position.
    pub fn set(&self, id: &str, app: InstalledApp) {
        self.write().insert(id.to_string(), app);
    }

    pub fn get(&self, id: &str) -> Option<InstalledApp> {
        self.read().get(id).cloned()
    }

    pub fn delete(&self, id: &str) -> Option<InstalledApp> {
        self.write().shift_remove(id)
    }

    pub fn list(&self) -> Vec<InstalledApp> {
        self.read().values().cloned().collect()
    }

    pub fn ids(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.read().contains_key(id)
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
}
