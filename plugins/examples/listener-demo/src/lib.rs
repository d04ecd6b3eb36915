//! Demo module that listens for `HELLO_EVENT` and hands each message to a
//! callback.
use std::sync::{Arc, Mutex, PoisonError};

use aibos_core::prelude::*;

pub const MODULE_ID: &str = "demo.listener";
pub const VERSION: &str = "1.0.0";

pub const HELLO_EVENT: &str = "HELLO_EVENT";

pub fn manifest() -> RawManifest {
    ManifestBuilder::new(MODULE_ID, "Listener Demo", VERSION)
        .exact_route("/listener", "ListenerPage")
        .menu_item("listener.menu", "Listener Demo", "/listener", Some(2))
        .consumes(HELLO_EVENT)
        .build()
}

/// Listener demo that logs every message it hears.
pub fn module() -> AppModule {
    module_with_callback(|message| log::info!("[{}] heard: {}", MODULE_ID, message))
}

/// Listener demo passing every non-empty `message` payload field to `callback`.
///
/// Rerunning the hook replaces the previous subscription.
pub fn module_with_callback<F>(callback: F) -> AppModule
where
    F: Fn(&str) + Send + Sync + 'static,
{
    let callback = Arc::new(callback);
    let active: Mutex<Option<Subscription>> = Mutex::new(None);
    AppModule::new(manifest()).with_listeners(move |lanes| {
        let callback = callback.clone();
        let subscription = lanes.events().subscribe(HELLO_EVENT, move |event| {
            if let Some(message) = event.payload.get("message").and_then(|m| m.as_str()) {
                if !message.is_empty() {
                    callback(message);
                }
            }
            Ok(())
        });
        let previous = active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(subscription);
        if let Some(previous) = previous {
            previous.dispose();
        }
        Ok(())
    })
}
