//! Async Engine Parity Tests
//!
//! The async engine must mirror the synchronous one: same recursion,
//! same messages, same error ordering. Suspension happens only at
//! custom-schema predicates, strictly one at a time.

use std::collections::BTreeMap;

use serde_json::json;
use shapeguard::schema::{CustomValidator, Schema, SchemaBuilder};
use shapeguard::validator::{validate, validate_async};

// =============================================================================
// Helper Functions
// =============================================================================

fn mixed_failure_schema() -> Schema {
    SchemaBuilder::object_with(
        BTreeMap::from([
            (
                "tags".to_string(),
                SchemaBuilder::array(vec![SchemaBuilder::string()]),
            ),
            (
                "point".to_string(),
                SchemaBuilder::array(vec![SchemaBuilder::number(), SchemaBuilder::number()]),
            ),
        ]),
        vec!["tags".to_string(), "point".to_string()],
        false,
    )
}

// =============================================================================
// Verdict Parity Tests
// =============================================================================

/// For schemas with no async predicates, both engines produce identical
/// error sequences.
#[tokio::test]
async fn test_error_order_parity_on_sync_schemas() {
    let schema = mixed_failure_schema();
    let value = json!({
        "tags": ["a", 1, "b", 2],
        "point": ["x"],
        "extra": true
    });

    let sync_verdict = validate(&value, &schema).unwrap();
    let async_verdict = validate_async(&value, &schema).await;

    assert!(!sync_verdict.is_valid());
    assert_eq!(sync_verdict.errors(), async_verdict.errors());
}

#[tokio::test]
async fn test_valid_value_parity() {
    let schema = mixed_failure_schema();
    let value = json!({"tags": [], "point": [0, 0]});

    assert!(validate(&value, &schema).unwrap().is_valid());
    assert!(validate_async(&value, &schema).await.is_valid());
}

// =============================================================================
// Async Predicate Tests
// =============================================================================

/// The sync engine refuses async predicates; the async engine runs them.
#[tokio::test]
async fn test_async_predicate_split_between_engines() {
    let schema = SchemaBuilder::custom_with_validator(
        "positive",
        CustomValidator::new_async(|v| {
            Box::pin(async move { v.as_f64().is_some_and(|n| n > 0.0) })
        }),
    );

    let err = validate(&json!(1), &schema).unwrap_err();
    assert_eq!(err.code().code(), "SHAPE_ASYNC_VALIDATOR");

    assert!(validate_async(&json!(1), &schema).await.is_valid());
    let negative = validate_async(&json!(-1), &schema).await;
    assert_eq!(
        negative.errors(),
        ["Custom validation failed for type: positive"]
    );
}

/// Predicate and inner schema both run, predicate error first, inner
/// errors appended verbatim.
#[tokio::test]
async fn test_async_predicate_and_inner_schema_accumulate() {
    let schema = SchemaBuilder::custom_full(
        "strict",
        Some(CustomValidator::new_async(|v| {
            Box::pin(async move { v.is_string() })
        })),
        Some(SchemaBuilder::number()),
    );

    let result = validate_async(&json!(true), &schema).await;
    assert_eq!(
        result.errors(),
        [
            "Custom validation failed for type: strict",
            "Expected number, got boolean",
        ]
    );
}

/// Breadcrumb prefixes apply to async predicate failures nested inside
/// containers, exactly as in the sync engine.
#[tokio::test]
async fn test_async_predicate_nested_breadcrumb() {
    let schema = SchemaBuilder::object(BTreeMap::from([(
        "emails".to_string(),
        SchemaBuilder::array(vec![SchemaBuilder::custom_with_validator(
            "email",
            CustomValidator::new_async(|v| {
                Box::pin(async move { v.as_str().is_some_and(|s| s.contains('@')) })
            }),
        )]),
    )]));

    let value = json!({"emails": ["a@b", "nope"]});
    let result = validate_async(&value, &schema).await;
    assert_eq!(
        result.errors(),
        ["Property 'emails': Item[1]: Custom validation failed for type: email"]
    );
}

/// Repeated async validation of the same inputs is deterministic.
#[tokio::test]
async fn test_async_validation_is_deterministic() {
    let schema = mixed_failure_schema();
    let value = json!({"tags": [1], "point": [0, 0]});

    let first = validate_async(&value, &schema).await;
    for _ in 0..10 {
        let again = validate_async(&value, &schema).await;
        assert_eq!(again, first);
    }
}
