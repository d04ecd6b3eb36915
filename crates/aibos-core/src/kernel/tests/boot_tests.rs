use serde_json::json;

use crate::adapter::AppModule;
use crate::config::KernelConfig;
use crate::kernel::{Error, Kernel, KernelContext};
use crate::manifest::{ManifestBuilder, ServiceDef};
use crate::service::sync_service_handler;

fn echo_module(id: &str) -> AppModule {
    let key = format!("{id}.echo");
    AppModule::new(
        ManifestBuilder::new(id, id, "1.0.0")
            .service(ServiceDef::new(&key).handler(sync_service_handler(Ok)))
            .build(),
    )
}

#[tokio::test]
async fn test_kernel_new_is_empty() {
    let kernel = Kernel::new();
    assert!(kernel.apps().is_empty());
    assert!(kernel.services().is_empty());
    assert!(kernel.events().event_types().is_empty());
    assert_eq!(kernel.context(), &KernelContext::dev());
}

#[tokio::test]
async fn test_boot_installs_in_order() {
    let kernel = Kernel::new();
    let report = kernel.boot(&[echo_module("b"), echo_module("a")]).await.unwrap();

    assert_eq!(report.boot, 1);
    assert!(!report.rebooted);
    assert_eq!(report.installed, vec!["b", "a"]);
    assert!(report.is_clean());
    assert_eq!(kernel.apps().ids(), vec!["b", "a"]);
    assert_eq!(kernel.services().keys(), vec!["b.echo", "a.echo"]);
}

#[tokio::test]
async fn test_install_failure_propagates_and_keeps_earlier_installs() {
    let kernel = Kernel::new();
    let broken = AppModule::new(ManifestBuilder::new("", "Broken", "1.0.0").build());

    let err = kernel
        .boot(&[echo_module("ok"), broken, echo_module("never")])
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Lifecycle(_)));
    assert_eq!(kernel.apps().ids(), vec!["ok"]);
}

#[tokio::test]
async fn test_separate_kernels_do_not_share_state() {
    let first = Kernel::new();
    let second = Kernel::new();
    first.boot(&[echo_module("solo")]).await.unwrap();

    assert!(second.apps().is_empty());
    assert!(second.services().call("solo.echo", json!(1)).await.is_err());
}

#[tokio::test]
async fn test_lanes_for_custom_context() {
    let kernel = Kernel::with_config(KernelConfig {
        tenant_id: "acme".into(),
        user_id: None,
        ..KernelConfig::default()
    });
    assert_eq!(kernel.lanes().ctx(), &KernelContext::new("acme"));
    let other = kernel.lanes_for(KernelContext::new("globex").with_user("u1"));
    assert_eq!(other.ctx().tenant_id, "globex");
}

#[tokio::test]
async fn test_shutdown_clears_everything() {
    let kernel = Kernel::new();
    kernel.boot(&[echo_module("x")]).await.unwrap();
    kernel.lanes().events().subscribe("T", |_| Ok(()));

    kernel.shutdown().await;
    assert!(kernel.apps().is_empty());
    assert!(kernel.services().is_empty());
    assert_eq!(kernel.events().handler_count("T"), 0);
}
