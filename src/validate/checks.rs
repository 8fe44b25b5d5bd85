// src/validate/checks.rs
// ============================================================================
// Module: Validator Checks
// Description: Required-field predicates for pet, order, and user bodies.
// Purpose: Keep structural expectations in one place for all suites.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Each predicate takes a decoded JSON value and reports whether the shape
//! meets the minimum the target API documents for that resource family.

use serde_json::Value;

/// Returns true when `value` is an object carrying `id` and `name`.
#[must_use]
pub fn pet_structure(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|map| map.contains_key("id") && map.contains_key("name"))
}

/// Returns true when `value` is an object carrying the order fields
/// `id`, `petId`, `quantity`, and `status`.
#[must_use]
pub fn order_structure(value: &Value) -> bool {
    value.as_object().is_some_and(|map| {
        ["id", "petId", "quantity", "status"].iter().all(|field| map.contains_key(*field))
    })
}

/// Returns true when `value` is an object carrying `id` or `username`.
///
/// The user shape is flexible in the target API; either key identifies
/// the record.
#[must_use]
pub fn user_structure(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|map| map.contains_key("id") || map.contains_key("username"))
}

/// Returns true when `value` is an array with at least `min_items` elements.
#[must_use]
pub fn list_shape(value: &Value, min_items: usize) -> bool {
    value.as_array().is_some_and(|items| items.len() >= min_items)
}

/// Returns true when `field` is present on the object and is a non-null
/// integer or string identifier.
#[must_use]
pub fn id_field(value: &Value, field: &str) -> bool {
    value
        .as_object()
        .and_then(|map| map.get(field))
        .is_some_and(|id| id.is_i64() || id.is_u64() || id.is_string())
}
