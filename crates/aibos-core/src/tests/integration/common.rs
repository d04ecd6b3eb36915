#![cfg(test)]

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::adapter::AppModule;
use crate::event::ListenerError;
use crate::manifest::{ManifestBuilder, ServiceDef};
use crate::service::{schema, sync_service_handler, typed_handler, Validate};

pub type EventLog = Arc<Mutex<Vec<String>>>;

pub fn event_log() -> EventLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn entries(log: &EventLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SumInput {
    pub a: f64,
    pub b: f64,
}

impl Validate for SumInput {}

#[derive(Debug, Serialize, Deserialize)]
pub struct SumOutput {
    pub sum: f64,
}

impl Validate for SumOutput {}

/// Module "m" exposing `m.sum`.
pub fn sum_module() -> AppModule {
    AppModule::new(
        ManifestBuilder::new("m", "Math", "1.0.0")
            .service(
                ServiceDef::new("m.sum")
                    .input_schema(schema::<SumInput>())
                    .output_schema(schema::<SumOutput>())
                    .handler(typed_handler(|i: SumInput| Ok(SumOutput { sum: i.a + i.b }))),
            )
            .build(),
    )
}

/// Module with passthrough services under `keys`.
pub fn service_module(id: &str, version: &str, keys: &[&str]) -> AppModule {
    let builder = keys.iter().fold(ManifestBuilder::new(id, id, version), |b, key| {
        b.service(ServiceDef::new(key).handler(sync_service_handler(Ok)))
    });
    AppModule::new(builder.build())
}

/// Module whose hook subscribes a recorder for `event_type`, tagging entries with `tag`.
pub fn listener_module(id: &str, event_type: &str, tag: &str, log: &EventLog) -> AppModule {
    let event_type = event_type.to_string();
    let tag = tag.to_string();
    let log = log.clone();
    AppModule::new(ManifestBuilder::new(id, id, "1.0.0").consumes(&event_type).build()).with_listeners(
        move |lanes| {
            let tag = tag.clone();
            let log = log.clone();
            lanes.events().subscribe(&event_type, move |event| {
                log.lock().unwrap().push(format!("{}:{}", tag, event.payload));
                Ok(())
            });
            Ok(())
        },
    )
}

/// Module whose hook fails with `message`.
pub fn failing_hook_module(id: &str, message: &str) -> AppModule {
    let message = message.to_string();
    AppModule::new(ManifestBuilder::new(id, id, "1.0.0").build())
        .with_listeners(move |_| Err(ListenerError::new(message.clone())))
}

/// Module whose hook panics.
pub fn panicking_hook_module(id: &str) -> AppModule {
    AppModule::new(ManifestBuilder::new(id, id, "1.0.0").build()).with_listeners(|_| panic!("hook exploded"))
}
