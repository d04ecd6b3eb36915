use std::fmt;
use std::sync::Arc;

use crate::event::ListenerError;
use crate::kernel::lanes::Lanes;
use crate::manifest::RawManifest;

/// Per-boot listener registration hook.
pub type ListenerHook = Arc<dyn Fn(&Lanes) -> Result<(), ListenerError> + Send + Sync>;

/// What a module hands to the kernel: its manifest and, optionally, a hook
/// the kernel runs once per boot after every module is installed.
#[derive(Clone)]
pub struct AppModule {
    pub manifest: RawManifest,
    pub on_boot: Option<ListenerHook>,
}

impl AppModule {
    pub fn new(manifest: RawManifest) -> Self {
        Self {
            manifest,
            on_boot: None,
        }
    }

    /// Attach the listener hook.
    pub fn with_listeners<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Lanes) -> Result<(), ListenerError> + Send + Sync + 'static,
    {
        self.on_boot = Some(Arc::new(hook));
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.manifest.id()
    }
}

impl From<RawManifest> for AppModule {
    fn from(manifest: RawManifest) -> Self {
        Self::new(manifest)
    }
}

impl fmt::Debug for AppModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppModule")
            .field("id", &self.id())
            .field("on_boot", &self.on_boot.is_some())
            .finish()
    }
}
