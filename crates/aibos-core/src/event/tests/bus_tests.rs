use std::sync::{Arc, Mutex};

use serde_json::json;

use crate::event::{sync_event_handler, EventBus, EventSystemError, KernelEvent, ListenerError};
use crate::kernel::KernelContext;

fn recorder(log: &Arc<Mutex<Vec<String>>>, tag: &str) -> crate::event::EventHandler {
    let log = log.clone();
    let tag = tag.to_string();
    sync_event_handler(move |event| {
        log.lock().unwrap().push(format!("{}:{}", tag, event.payload));
        Ok(())
    })
}

#[test]
fn test_delivery_in_subscription_order() {
    let bus = EventBus::new();
    let ctx = KernelContext::dev();
    let log = Arc::new(Mutex::new(Vec::new()));

    bus.on(&ctx, "T", recorder(&log, "h1"));
    bus.on(&ctx, "T", recorder(&log, "h2"));
    bus.on(&ctx, "other", recorder(&log, "x"));

    bus.emit(&ctx, &KernelEvent::new("T", json!(1))).unwrap();
    assert_eq!(*log.lock().unwrap(), vec!["h1:1", "h2:1"]);
}

#[test]
fn test_emit_without_handlers_is_ok() {
    let bus = EventBus::new();
    assert!(bus.emit(&KernelContext::dev(), &KernelEvent::new("nobody", json!(null))).is_ok());
}

#[test]
fn test_dispose_removes_only_its_subscription() {
    let bus = EventBus::new();
    let ctx = KernelContext::dev();
    let log = Arc::new(Mutex::new(Vec::new()));

    let e = bus.on(&ctx, "T", recorder(&log, "E"));
    let _f = bus.on(&ctx, "T", recorder(&log, "F"));

    bus.emit(&ctx, &KernelEvent::new("T", json!("a"))).unwrap();
    assert!(e.dispose());
    assert!(!e.dispose(), "second dispose is a no-op");
    bus.emit(&ctx, &KernelEvent::new("T", json!("b"))).unwrap();

    assert_eq!(*log.lock().unwrap(), vec!["E:\"a\"", "F:\"a\"", "F:\"b\""]);
    assert_eq!(bus.handler_count("T"), 1);
}

#[test]
fn test_same_closure_subscribed_twice_is_two_subscriptions() {
    let bus = EventBus::new();
    let ctx = KernelContext::dev();
    let log = Arc::new(Mutex::new(Vec::new()));
    let handler = recorder(&log, "h");

    let first = bus.on(&ctx, "T", handler.clone());
    bus.on(&ctx, "T", handler);
    assert_ne!(first.id(), 0);
    first.dispose();

    bus.emit(&ctx, &KernelEvent::new("T", json!(0))).unwrap();
    assert_eq!(log.lock().unwrap().len(), 1);
}

#[test]
fn test_listener_error_stops_dispatch() {
    let bus = EventBus::new();
    let ctx = KernelContext::dev();
    let log = Arc::new(Mutex::new(Vec::new()));

    bus.on(&ctx, "T", recorder(&log, "before"));
    bus.on(&ctx, "T", sync_event_handler(|_| Err(ListenerError::new("boom"))));
    bus.on(&ctx, "T", recorder(&log, "after"));

    let err = bus.emit(&ctx, &KernelEvent::new("T", json!(1))).unwrap_err();
    match err {
        EventSystemError::ListenerFailed { event_type, source, .. } => {
            assert_eq!(event_type, "T");
            assert_eq!(source.message(), "boom");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(*log.lock().unwrap(), vec!["before:1"]);
}

#[test]
fn test_reentrant_emit_runs_depth_first() {
    let bus = Arc::new(EventBus::new());
    let ctx = KernelContext::dev();
    let log = Arc::new(Mutex::new(Vec::new()));

    let inner_bus = Arc::downgrade(&bus);
    let inner_log = log.clone();
    bus.on(
        &ctx,
        "outer",
        sync_event_handler(move |_| {
            inner_log.lock().unwrap().push("outer-1".to_string());
            if let Some(bus) = inner_bus.upgrade() {
                bus.emit(&KernelContext::dev(), &KernelEvent::new("inner", json!(null)))?;
            }
            inner_log.lock().unwrap().push("outer-1-done".to_string());
            Ok(())
        }),
    );
    bus.on(&ctx, "outer", recorder(&log, "outer-2"));
    bus.on(&ctx, "inner", recorder(&log, "inner"));

    bus.emit(&ctx, &KernelEvent::new("outer", json!(null))).unwrap();
    assert_eq!(
        *log.lock().unwrap(),
        vec!["outer-1", "inner:null", "outer-1-done", "outer-2:null"]
    );
}

#[test]
fn test_subscribe_during_dispatch_applies_to_next_emit() {
    let bus = Arc::new(EventBus::new());
    let ctx = KernelContext::dev();
    let log = Arc::new(Mutex::new(Vec::new()));

    let weak = Arc::downgrade(&bus);
    let late = recorder(&log, "late");
    bus.on(
        &ctx,
        "T",
        sync_event_handler(move |_| {
            if let Some(bus) = weak.upgrade() {
                if bus.handler_count("T") == 1 {
                    bus.on(&KernelContext::dev(), "T", late.clone());
                }
            }
            Ok(())
        }),
    );

    bus.emit(&ctx, &KernelEvent::new("T", json!(1))).unwrap();
    assert!(log.lock().unwrap().is_empty());
    bus.emit(&ctx, &KernelEvent::new("T", json!(2))).unwrap();
    assert_eq!(*log.lock().unwrap(), vec!["late:2"]);
}

#[test]
fn test_clear_and_introspection() {
    let bus = EventBus::new();
    let ctx = KernelContext::dev();
    let sub = bus.on(&ctx, "b", sync_event_handler(|_| Ok(())));
    bus.on(&ctx, "a", sync_event_handler(|_| Ok(())));

    assert_eq!(bus.event_types(), vec!["a", "b"]);
    bus.clear();
    assert!(bus.event_types().is_empty());
    assert_eq!(bus.handler_count("a"), 0);
    assert!(!sub.dispose());
}

#[test]
fn test_dispose_after_bus_dropped() {
    let bus = EventBus::new();
    let sub = bus.on(&KernelContext::dev(), "T", sync_event_handler(|_| Ok(())));
    drop(bus);
    assert!(!sub.dispose());
}
