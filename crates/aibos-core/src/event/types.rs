use chrono::{SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::event::error::{EventSystemError, ListenerError};

/// An event published on the bus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KernelEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub payload: Value,
    /// RFC 3339 time the event was emitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_app_id: Option<String>,
}

impl KernelEvent {
    pub fn new(event_type: &str, payload: Value) -> Self {
        Self {
            event_type: event_type.to_string(),
            payload,
            timestamp: None,
            source_app_id: None,
        }
    }

    /// Event whose payload is the JSON encoding of `payload`.
    pub fn encode<P: Serialize>(event_type: &str, payload: &P) -> Result<Self, EventSystemError> {
        let payload = serde_json::to_value(payload).map_err(|e| EventSystemError::PayloadEncoding {
            event_type: event_type.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self::new(event_type, payload))
    }

    /// Stamp the event with its emitting app and the current time.
    pub fn from_app(mut self, app_id: &str) -> Self {
        self.source_app_id = Some(app_id.to_string());
        self.timestamp = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));
        self
    }

    /// Decode the payload into a typed value.
    pub fn payload_as<T: DeserializeOwned>(&self) -> Result<T, ListenerError> {
        serde_json::from_value(self.payload.clone()).map_err(|e| {
            ListenerError::new(format!("invalid payload for '{}': {}", self.event_type, e))
        })
    }
}
