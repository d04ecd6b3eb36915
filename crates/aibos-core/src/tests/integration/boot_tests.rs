#![cfg(test)]

use std::sync::Arc;

use serde_json::json;

use super::common::*;
use crate::config::KernelConfig;
use crate::kernel::{Kernel, ServiceLane};

#[tokio::test]
async fn test_sum_round_trip_through_lanes() {
    let kernel = Kernel::new();
    kernel.boot(&[sum_module()]).await.unwrap();

    let out = kernel.lanes().services().call("m.sum", json!({"a": 2, "b": 3})).await.unwrap();
    assert_eq!(out["sum"], json!(5.0));
}

#[tokio::test]
async fn test_delivery_order_follows_module_order() {
    let log = event_log();
    let kernel = Kernel::new();
    kernel
        .boot(&[
            listener_module("first", "T", "h1", &log),
            listener_module("second", "T", "h2", &log),
        ])
        .await
        .unwrap();

    kernel.lanes().events().publish("T", json!(1)).unwrap();
    assert_eq!(entries(&log), vec!["h1:1", "h2:1"]);
}

#[tokio::test]
async fn test_boot_is_idempotent() {
    let log = event_log();
    let kernel = Kernel::new();
    let modules = vec![sum_module(), listener_module("l", "T", "h", &log)];

    kernel.boot(&modules).await.unwrap();
    let keys = kernel.services().keys();
    let report = kernel.boot(&modules).await.unwrap();

    assert!(report.rebooted);
    assert_eq!(report.boot, 2);
    assert_eq!(kernel.services().keys(), keys);
    assert_eq!(kernel.apps().ids(), vec!["m", "l"]);

    kernel.lanes().events().publish("T", json!("once")).unwrap();
    assert_eq!(entries(&log), vec!["h:\"once\""]);
}

#[tokio::test]
async fn test_reboot_without_clearing_events_keeps_old_listeners() {
    let log = event_log();
    let kernel = Kernel::with_config(KernelConfig {
        clear_events_on_reboot: false,
        ..KernelConfig::default()
    });
    let modules = vec![listener_module("l", "T", "h", &log)];

    kernel.boot(&modules).await.unwrap();
    kernel.boot(&modules).await.unwrap();
    assert_eq!(kernel.events().handler_count("T"), 2);
}

#[tokio::test]
async fn test_reboot_drops_stale_modules() {
    let kernel = Kernel::new();
    kernel
        .boot(&[sum_module(), service_module("old", "1.0.0", &["old.k"])])
        .await
        .unwrap();
    kernel.boot(&[sum_module()]).await.unwrap();

    assert_eq!(kernel.apps().ids(), vec!["m"]);
    assert!(!kernel.services().contains("old.k"));
}

#[tokio::test]
async fn test_shutdown_clears_everything_and_allows_boot() {
    let log = event_log();
    let kernel = Kernel::new();
    kernel
        .boot(&[sum_module(), listener_module("l", "T", "h", &log)])
        .await
        .unwrap();

    kernel.shutdown().await;
    assert!(kernel.apps().is_empty());
    assert!(kernel.services().is_empty());
    assert_eq!(kernel.events().handler_count("T"), 0);

    let report = kernel.boot(&[sum_module()]).await.unwrap();
    assert!(!report.rebooted);
    assert_eq!(kernel.services().keys_owned_by("m"), vec!["m.sum"]);
}

#[tokio::test]
async fn test_hook_failures_do_not_abort_boot() {
    let log = event_log();
    let kernel = Kernel::new();
    let report = kernel
        .boot(&[
            failing_hook_module("fails", "cannot subscribe"),
            panicking_hook_module("panics"),
            listener_module("works", "T", "ok", &log),
        ])
        .await
        .unwrap();

    assert_eq!(report.installed, vec!["fails", "panics", "works"]);
    assert_eq!(report.hooks_run, vec!["works"]);
    assert_eq!(report.hook_failures.len(), 2);
    assert_eq!(report.hook_failures[0].message, "cannot subscribe");
    assert!(!report.hook_failures[0].panicked);
    assert_eq!(report.hook_failures[1].message, "hook exploded");
    assert!(report.hook_failures[1].panicked);

    kernel.lanes().events().publish("T", json!(0)).unwrap();
    assert_eq!(entries(&log), vec!["ok:0"]);
}

#[tokio::test]
async fn test_subscribe_dispose_scenario() {
    let log = event_log();
    let kernel = Kernel::new();
    kernel.boot(&[]).await.unwrap();

    let events = kernel.lanes();
    let e_log = log.clone();
    let e = events.events().subscribe("X", move |ev| {
        e_log.lock().unwrap().push(format!("E:{}", ev.payload));
        Ok(())
    });
    let f_log = log.clone();
    events.events().subscribe("X", move |ev| {
        f_log.lock().unwrap().push(format!("F:{}", ev.payload));
        Ok(())
    });

    events.events().publish("X", json!(1)).unwrap();
    e.dispose();
    e.dispose();
    events.events().publish("X", json!(2)).unwrap();

    assert_eq!(entries(&log), vec!["E:1", "F:1", "F:2"]);
}

#[tokio::test]
async fn test_concurrent_boots_are_serialized() {
    let kernel = Arc::new(Kernel::new());
    let modules = vec![sum_module(), service_module("n", "1.0.0", &["n.a", "n.b"])];

    let (a, b) = tokio::join!(kernel.boot(&modules), kernel.boot(&modules));
    let (a, b) = (a.unwrap(), b.unwrap());

    let mut numbers = vec![a.boot, b.boot];
    numbers.sort();
    assert_eq!(numbers, vec![1, 2]);
    assert_ne!(a.rebooted, b.rebooted);
    assert_eq!(kernel.services().keys(), vec!["m.sum", "n.a", "n.b"]);
}
