use crate::manifest::ServiceDef;
use crate::service::{ServiceError, ServiceRegistry};

#[test]
fn test_register_and_list_in_order() {
    let registry = ServiceRegistry::new();
    registry.register("app1", ServiceDef::new("app1.b")).unwrap();
    registry.register("app1", ServiceDef::new("app1.a")).unwrap();
    registry.register("app2", ServiceDef::new("app2.c")).unwrap();

    assert_eq!(registry.keys(), vec!["app1.b", "app1.a", "app2.c"]);
    assert_eq!(registry.len(), 3);
    let entry = registry.get("app2.c").expect("entry present");
    assert_eq!(entry.owner_id(), "app2");
    assert_eq!(entry.key(), "app2.c");
}

#[test]
fn test_duplicate_key_rejected_regardless_of_owner() {
    let registry = ServiceRegistry::new();
    registry.register("first", ServiceDef::new("shared.key")).unwrap();

    for owner in ["first", "second"] {
        let err = registry
            .register(owner, ServiceDef::new("shared.key"))
            .expect_err("duplicate must fail");
        match err {
            ServiceError::DuplicateServiceKey { key, owner_id } => {
                assert_eq!(key, "shared.key");
                assert_eq!(owner_id, "first");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
    assert_eq!(registry.get("shared.key").unwrap().owner_id, "first");
}

#[test]
fn test_register_all_is_atomic() {
    let registry = ServiceRegistry::new();
    registry.register("other", ServiceDef::new("taken")).unwrap();

    let defs = vec![ServiceDef::new("fresh.a"), ServiceDef::new("taken"), ServiceDef::new("fresh.b")];
    let err = registry.register_all("mine", &defs).expect_err("collision must fail");
    assert_eq!(err.key(), "taken");
    assert_eq!(registry.keys(), vec!["taken"]);

    let repeated = vec![ServiceDef::new("x"), ServiceDef::new("x")];
    assert!(registry.register_all("mine", &repeated).is_err());
    assert!(!registry.contains("x"));
}

#[test]
fn test_replace_owner_swaps_keys() {
    let registry = ServiceRegistry::new();
    registry
        .register_all("m", &[ServiceDef::new("m.a"), ServiceDef::new("m.b")])
        .unwrap();
    registry.register("n", ServiceDef::new("n.a")).unwrap();

    let removed = registry
        .replace_owner("m", &[ServiceDef::new("m.b"), ServiceDef::new("m.c")])
        .unwrap();
    assert_eq!(removed, vec!["m.a", "m.b"]);
    assert_eq!(registry.keys_owned_by("m"), vec!["m.b", "m.c"]);
    assert!(!registry.contains("m.a"));

    // Taking another owner's key leaves everything untouched
    let err = registry
        .replace_owner("m", &[ServiceDef::new("n.a")])
        .expect_err("foreign key must fail");
    assert!(matches!(err, ServiceError::DuplicateServiceKey { .. }));
    assert_eq!(registry.keys_owned_by("m"), vec!["m.b", "m.c"]);
    assert_eq!(registry.get("n.a").unwrap().owner_id, "n");
}

#[test]
fn test_unregister_owner_is_idempotent() {
    let registry = ServiceRegistry::new();
    registry.register("svcA", ServiceDef::new("a.one")).unwrap();
    registry.register("svcB", ServiceDef::new("b.one")).unwrap();
    registry.register("svcA", ServiceDef::new("a.two")).unwrap();

    assert_eq!(registry.unregister_owner("svcA"), vec!["a.one", "a.two"]);
    assert!(registry.unregister_owner("svcA").is_empty());
    assert!(registry.unregister_owner("nobody").is_empty());
    assert_eq!(registry.keys(), vec!["b.one"]);
}

#[test]
fn test_clear() {
    let registry = ServiceRegistry::new();
    registry.register("a", ServiceDef::new("a.x")).unwrap();
    registry.clear();
    assert!(registry.is_empty());
    assert!(registry.list().is_empty());
}
