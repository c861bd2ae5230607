//! Serde roundtrip and JsonSchema validation tests for the frontmatter shape.

use folio_core::Frontmatter;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn frontmatter_schema() -> serde_json::Value {
    serde_json::to_value(schema_for!(Frontmatter)).unwrap()
}

#[test]
fn full_frontmatter_roundtrips_and_validates() {
    let fm = Frontmatter {
        date: Some("2023-01-15".into()),
        title: Some("Example Cert".into()),
        company: Some("Acme".into()),
        external: Some("https://acme.example/verify".into()),
        github: Some("https://github.com/acme/cert".into()),
        folder: None,
        bookmark: None,
        ios: None,
        android: None,
    };

    let json_str = serde_json::to_string_pretty(&fm).unwrap();
    let recovered: Frontmatter = serde_json::from_str(&json_str).unwrap();
    assert_eq!(recovered, fm);

    let instance = serde_json::to_value(&fm).unwrap();
    let errors = validate_against_schema(&frontmatter_schema(), &instance);
    assert!(errors.is_empty(), "schema validation failed: {errors:?}");
}

#[test]
fn empty_frontmatter_validates() {
    let instance = serde_json::json!({});
    let errors = validate_against_schema(&frontmatter_schema(), &instance);
    assert!(errors.is_empty(), "schema validation failed: {errors:?}");
}

#[test]
fn non_string_title_is_rejected() {
    let instance = serde_json::json!({ "date": "2023-01-15", "title": 42 });
    let errors = validate_against_schema(&frontmatter_schema(), &instance);
    assert!(!errors.is_empty());
}
