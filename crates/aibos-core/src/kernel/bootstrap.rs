use std::any::Any;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::adapter::{AdapterRegistry, AppModule, AppRegistry};
use crate::config::KernelConfig;
use crate::event::EventBus;
use crate::kernel::constants;
use crate::kernel::context::KernelContext;
use crate::kernel::error::Result;
use crate::kernel::lanes::Lanes;
use crate::service::ServiceRegistry;

/// A listener hook that failed during boot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookFailure {
    pub app_id: String,
    pub message: String,
    pub panicked: bool,
}

/// Outcome of a successful [`Kernel::boot`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootReport {
    /// Sequence number of this boot, starting at 1.
    pub boot: u64,
    /// Whether state from an earlier boot was cleared first.
    pub rebooted: bool,
    /// Installed app ids, in boot order.
    pub installed: Vec<String>,
    /// Apps whose listener hook completed.
    pub hooks_run: Vec<String>,
    pub hook_failures: Vec<HookFailure>,
}

impl BootReport {
    pub fn is_clean(&self) -> bool {
        self.hook_failures.is_empty()
    }
}

/// The plugin host. Owns the app, service and event registries for one
/// runtime and boots modules into them.
pub struct Kernel {
    config: KernelConfig,
    context: KernelContext,
    apps: Arc<AppRegistry>,
    services: Arc<ServiceRegistry>,
    events: Arc<EventBus>,
    adapters: AdapterRegistry,
    boot_lock: Mutex<()>,
    boots: AtomicU64,
}

impl fmt::Debug for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Kernel")
            .field("context", &self.context)
            .field("apps", &self.apps)
            .field("services", &self.services)
            .field("events", &self.events)
            .finish()
    }
}

impl Default for Kernel {
    fn default() -> Self {
        Self::new()
    }
}

impl Kernel {
    /// Kernel with default configuration and the development context.
    pub fn new() -> Self {
        Self::with_config(KernelConfig::default())
    }

    pub fn with_config(config: KernelConfig) -> Self {
        let apps = Arc::new(AppRegistry::new());
        let services = Arc::new(ServiceRegistry::new());
        let events = Arc::new(EventBus::new());
        let adapters = AdapterRegistry::with_policy(apps.clone(), services.clone(), config.version_policy);
        Self {
            context: config.context(),
            config,
            apps,
            services,
            events,
            adapters,
            boot_lock: Mutex::new(()),
            boots: AtomicU64::new(0),
        }
    }

    /// Install `modules` in order, then run their listener hooks.
    ///
    /// If any app is already installed this is a re-boot: installed apps
    /// and services are cleared first, and so are event subscriptions
    /// unless `clear_events_on_reboot` is off. An install failure stops the
    /// boot; apps installed before it stay installed and no hooks run. Hook
    /// errors and panics are logged and reported, never propagated.
    pub async fn boot(&self, modules: &[AppModule]) -> Result<BootReport> {
        let _guard = self.boot_lock.lock().await;
        let boot = self.boots.fetch_add(1, Ordering::SeqCst) + 1;
        log::info!(
            "Booting {} v{} with {} module(s) (boot #{})",
            constants::APP_NAME,
            constants::APP_VERSION,
            modules.len(),
            boot
        );

        let mut report = BootReport {
            boot,
            rebooted: !self.apps.is_empty(),
            ..BootReport::default()
        };
        if report.rebooted {
            let cleared = self.adapters.clear().await;
            log::info!("Re-boot: cleared {} installed app(s)", cleared);
            if self.config.clear_events_on_reboot {
                self.events.clear();
            }
        }

        for module in modules {
            let app = self.adapters.install(module).await?;
            report.installed.push(app.id);
        }

        let lanes = self.lanes();
        for (module, app_id) in modules.iter().zip(&report.installed) {
            let Some(hook) = &module.on_boot else {
                continue;
            };
            match catch_unwind(AssertUnwindSafe(|| hook(&lanes))) {
                Ok(Ok(())) => report.hooks_run.push(app_id.clone()),
                Ok(Err(err)) => {
                    log::error!("Listener hook of '{}' failed: {}", app_id, err);
                    report.hook_failures.push(HookFailure {
                        app_id: app_id.clone(),
                        message: err.to_string(),
                        panicked: false,
                    });
                }
                Err(payload) => {
                    let message = panic_message(payload.as_ref());
                    log::error!("Listener hook of '{}' panicked: {}", app_id, message);
                    report.hook_failures.push(HookFailure {
                        app_id: app_id.clone(),
                        message,
                        panicked: true,
                    });
                }
            }
        }

        log::info!(
            "Boot #{} complete: {} app(s), {} service(s), {} hook failure(s)",
            boot,
            self.apps.len(),
            self.services.len(),
            report.hook_failures.len()
        );
        Ok(report)
    }

    /// Lanes for the kernel's configured context.
    pub fn lanes(&self) -> Lanes {
        self.lanes_for(self.context.clone())
    }

    /// Lanes acting for `ctx`.
    pub fn lanes_for(&self, ctx: KernelContext) -> Lanes {
        Lanes::new(self.services.clone(), self.events.clone(), ctx)
    }

    pub fn apps(&self) -> &AppRegistry {
        &self.apps
    }

    pub fn adapters(&self) -> &AdapterRegistry {
        &self.adapters
    }

    pub fn services(&self) -> &ServiceRegistry {
        &self.services
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn context(&self) -> &KernelContext {
        &self.context
    }

    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// Drop every app, service and subscription.
    pub async fn shutdown(&self) {
        let _guard = self.boot_lock.lock().await;
        let cleared = self.adapters.clear().await;
        self.events.clear();
        log::info!("Shut down {} ({} app(s) removed)", constants::APP_NAME, cleared);
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
