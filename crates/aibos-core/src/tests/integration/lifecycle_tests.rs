#![cfg(test)]

use serde_json::json;

use super::common::*;
use crate::adapter::LifecycleError;
use crate::kernel::{Error, Kernel, ServiceLane};
use crate::service::ServiceError;

#[tokio::test]
async fn test_duplicate_key_in_boot_keeps_first_owner() {
    let kernel = Kernel::new();
    let err = kernel
        .boot(&[
            service_module("a", "1.0.0", &["shared"]),
            service_module("b", "1.0.0", &["b.own", "shared"]),
        ])
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Lifecycle(LifecycleError::Service(ServiceError::DuplicateServiceKey { .. }))
    ));
    assert_eq!(kernel.services().get("shared").unwrap().owner_id, "a");
    assert!(!kernel.services().contains("b.own"));
    assert!(!kernel.apps().contains("b"));
}

#[tokio::test]
async fn test_upgrade_after_boot() {
    let kernel = Kernel::new();
    kernel.boot(&[service_module("inv", "1.0.0", &["inv.a", "inv.b"])]).await.unwrap();

    let err = kernel
        .adapters()
        .upgrade("inv", &service_module("inv", "1.0.0", &["inv.c"]))
        .await
        .unwrap_err();
    assert!(matches!(err, LifecycleError::VersionError { .. }));

    kernel
        .adapters()
        .upgrade("inv", &service_module("inv", "1.0.1", &["inv.b", "inv.c"]))
        .await
        .unwrap();
    assert_eq!(kernel.services().keys_owned_by("inv"), vec!["inv.b", "inv.c"]);
    assert_eq!(kernel.apps().get("inv").unwrap().manifest.version, "1.0.1");

    let lanes = kernel.lanes();
    let services = lanes.services();
    let err = services.call("inv.a", json!({})).await.unwrap_err();
    assert!(matches!(err, ServiceError::ServiceNotFound { ref key } if key == "inv.a"));
    assert_eq!(services.call("inv.c", json!({"q": 2})).await.unwrap(), json!({"q": 2}));
}

#[tokio::test]
async fn test_unmount_isolation_through_kernel() {
    let kernel = Kernel::new();
    kernel
        .boot(&[
            service_module("svcA", "1.0.0", &["svcA.run"]),
            service_module("svcB", "1.0.0", &["svcB.run"]),
        ])
        .await
        .unwrap();

    assert!(kernel.adapters().unmount("svcA").await);
    let lanes = kernel.lanes();
    assert!(lanes.services().call("svcA.run", json!({})).await.is_err());
    assert_eq!(lanes.services().call("svcB.run", json!({"x": 1})).await.unwrap(), json!({"x": 1}));
}
