use std::fmt;
use std::sync::Arc;

use tokio::sync::Mutex;

use super::app_registry::{AppRegistry, InstalledApp};
use super::error::LifecycleError;
use super::module::AppModule;
use super::version::VersionPolicy;
use crate::manifest::validate;
use crate::service::ServiceRegistry;

/// Drives app lifecycle: install, upgrade and unmount.
///
/// Each operation validates first and mutates the app and service
/// registries only once every check has passed. Lifecycle operations are
/// serialized so concurrent callers cannot interleave the check and the
/// write for the same app.
pub struct AdapterRegistry {
    apps: Arc<AppRegistry>,
    services: Arc<ServiceRegistry>,
    policy: VersionPolicy,
    lifecycle: Mutex<()>,
}

impl fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterRegistry")
            .field("apps", &self.apps)
            .field("policy", &self.policy)
            .finish()
    }
}

impl AdapterRegistry {
    pub fn new(apps: Arc<AppRegistry>, services: Arc<ServiceRegistry>) -> Self {
        Self::with_policy(apps, services, VersionPolicy::default())
    }

    pub fn with_policy(apps: Arc<AppRegistry>, services: Arc<ServiceRegistry>, policy: VersionPolicy) -> Self {
        Self {
            apps,
            services,
            policy,
            lifecycle: Mutex::new(()),
        }
    }

    pub fn policy(&self) -> VersionPolicy {
        self.policy
    }

    pub fn is_installed(&self, app_id: &str) -> bool {
        self.apps.contains(app_id)
    }

    /// Validate `module`'s manifest, register its services and record it.
    pub async fn install(&self, module: &AppModule) -> Result<InstalledApp, LifecycleError> {
        let manifest = validate(&module.manifest)?;
        let _guard = self.lifecycle.lock().await;

        if let Some(existing) = self.apps.get(&manifest.id) {
            return Err(LifecycleError::AlreadyInstalled {
                app_id: manifest.id,
                version: existing.version,
            });
        }

        self.services.register_all(&manifest.id, &manifest.services)?;
        let app = InstalledApp::new(manifest);
        self.apps.set(&app.id, app.clone());
        log::info!("Installed app '{}' v{}", app.id, app.version);
        Ok(app)
    }

    /// Replace an installed app with a newer version of itself.
    pub async fn upgrade(&self, app_id: &str, module: &AppModule) -> Result<InstalledApp, LifecycleError> {
        let _guard = self.lifecycle.lock().await;

        let current = self.apps.get(app_id).ok_or_else(|| LifecycleError::NotInstalled {
            app_id: app_id.to_string(),
        })?;
        let manifest = validate(&module.manifest)?;
        if manifest.id != app_id {
            return Err(LifecycleError::IdMismatch {
                app_id: app_id.to_string(),
                manifest_id: manifest.id,
            });
        }
        self.policy
            .check_upgrade(&current.version, &manifest.version)
            .map_err(|reason| LifecycleError::VersionError {
                app_id: app_id.to_string(),
                current: current.version.clone(),
                proposed: manifest.version.clone(),
                reason,
            })?;

        self.services.replace_owner(app_id, &manifest.services)?;
        let app = InstalledApp::new(manifest);
        self.apps.set(app_id, app.clone());
        log::info!("Upgraded app '{}' {} -> {}", app_id, current.version, app.version);
        Ok(app)
    }

    /// Remove an app and its services. Returns whether the app was installed.
    pub async fn unmount(&self, app_id: &str) -> bool {
        let _guard = self.lifecycle.lock().await;

        let removed = self.apps.delete(app_id);
        let keys = self.services.unregister_owner(app_id);
        match removed {
            Some(app) => {
                log::info!("Unmounted app '{}' v{} ({} service(s) removed)", app.id, app.version, keys.len());
                true
            }
            None => false,
        }
    }

    /// Remove every app and service together. Returns how many apps were installed.
    pub async fn clear(&self) -> usize {
        let _guard = self.lifecycle.lock().await;

        let count = self.apps.len();
        self.apps.clear();
        self.services.clear();
        count
    }
}
