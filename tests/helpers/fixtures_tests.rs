// tests/helpers/fixtures_tests.rs
// ============================================================================
// Module: Fixture Unit Tests
// Description: Unit coverage for fixture payloads and id extraction.
// Purpose: Keep the id-segment contract aligned with the validators.
// Dependencies: petstore-conformance, serde_json
// ============================================================================

//! ## Overview
//! Unit coverage for the fixture helpers. These run inside the conformance
//! binaries but touch no network.

use petstore_conformance::validate;
use serde_json::json;

use super::fixtures;

#[test]
fn id_segment_accepts_integer_and_string_ids() {
    assert_eq!(fixtures::id_segment(&json!({"id": 42})).as_deref(), Some("42"));
    assert_eq!(fixtures::id_segment(&json!({"id": "abc-7"})).as_deref(), Some("abc-7"));
}

#[test]
fn id_segment_rejects_what_id_field_rejects() {
    for body in [json!({"id": 1.5}), json!({"id": null}), json!({"id": true}), json!({})] {
        assert!(fixtures::id_segment(&body).is_none());
        assert!(!validate::id_field(&body, "id"));
    }
}

#[test]
fn sample_payloads_carry_required_fields() {
    let pet = fixtures::sample_pet();
    assert!(pet.get("name").is_some_and(|name| name.is_string()));
    assert!(pet.get("photoUrls").is_some_and(serde_json::Value::is_array));

    let order = fixtures::sample_order();
    assert!(order.get("petId").is_some_and(serde_json::Value::is_i64));
    assert!(order.get("status").is_some_and(|status| status == "placed"));

    let user = fixtures::sample_user();
    assert!(user.get("username").is_some_and(|name| name.is_string()));
    assert!(user.get("password").is_some_and(|pw| pw.is_string()));
}

#[test]
fn sample_usernames_are_unique_per_call() {
    let first = fixtures::sample_user();
    let second = fixtures::sample_user();
    assert_ne!(first.get("username"), second.get("username"));
}
