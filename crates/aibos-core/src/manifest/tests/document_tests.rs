use crate::manifest::{validate, RawManifest};

#[test]
fn test_json_document_uses_camel_case() {
    let raw = RawManifest::from_json(
        r#"{
            "id": "doc.json",
            "name": "JSON Doc",
            "version": "0.3.0",
            "ownedEntities": ["thing"],
            "routes": [{"path": "/doc", "component": "DocPage", "exact": true}],
            "services": [{"key": "doc.json.read", "description": "Read"}],
            "events": {"emits": ["doc.CHANGED"]},
            "unknownField": "ignored"
        }"#,
    )
    .expect("document should parse");

    let manifest = validate(&raw).expect("document should validate");
    assert_eq!(manifest.owned_entities, vec!["thing"]);
    assert_eq!(manifest.routes[0].exact, Some(true));
    assert!(!manifest.services[0].is_callable());
    assert!(manifest.events.consumes.is_empty());
}

#[test]
fn test_json_document_with_wrong_shape_fails_at_parse() {
    let err = RawManifest::from_json(r#"{"id": 7}"#).expect_err("id must be a string");
    assert_eq!(err.issues.len(), 1);
    assert_eq!(err.issues[0].path, "");
}

#[test]
#[cfg(feature = "toml-config")]
fn test_toml_document() {
    let raw = RawManifest::from_toml(
        r#"
id = "doc.toml"
name = "TOML Doc"
version = "1.0.0"
permissions = ["doc.read"]

[[menu]]
id = "doc"
label = "Doc"
path = "/doc"
order = 3

[events]
consumes = ["other.EVENT"]
"#,
    )
    .expect("toml should parse");

    let manifest = validate(&raw).expect("toml should validate");
    assert_eq!(manifest.menu[0].order, Some(3));
    assert!(manifest.consumes("other.EVENT"));
}

#[test]
fn test_serialized_manifest_omits_runtime_values() {
    let raw = RawManifest::from_json(
        r#"{"id":"ser","name":"Ser","version":"1.0.0","services":[{"key":"ser.a"}]}"#,
    )
    .unwrap();
    let manifest = validate(&raw).unwrap();
    let value = serde_json::to_value(&manifest).unwrap();

    assert_eq!(value["ownedEntities"], serde_json::json!([]));
    assert_eq!(value["services"][0], serde_json::json!({"key": "ser.a"}));
}
