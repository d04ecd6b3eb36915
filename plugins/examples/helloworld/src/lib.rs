//! Demo module exposing an echo service and emitting `HELLO_EVENT`.
use aibos_core::prelude::*;
use serde::{Deserialize, Serialize};

pub const MODULE_ID: &str = "demo.helloworld";
pub const VERSION: &str = "1.0.1";

pub const ECHO: &str = "demo.helloworld.echo";
pub const HELLO_EVENT: &str = "HELLO_EVENT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Validate for Message {}

pub fn manifest() -> RawManifest {
    ManifestBuilder::new(MODULE_ID, "HelloWorld Demo", VERSION)
        .exact_route("/hello", "HelloWorldPage")
        .menu_item("hello.menu", "HelloWorld", "/hello", Some(1))
        .service(
            ServiceDef::new(ECHO)
                .description("Echo back a message")
                .input_schema(schema::<Message>())
                .output_schema(schema::<Message>())
                .handler(typed_handler(|input: Message| Ok::<_, ServiceError>(input))),
        )
        .emits(HELLO_EVENT)
        .build()
}

pub fn module() -> AppModule {
    AppModule::new(manifest())
}

/// Emit `HELLO_EVENT` carrying `message`, stamped as coming from this module.
pub fn say_hello<L: EventLane>(lane: &L, message: &str) -> Result<(), EventSystemError> {
    lane.emit_typed(
        MODULE_ID,
        HELLO_EVENT,
        &Message {
            message: message.to_string(),
        },
    )
}
