//! Asynchronous recursive validation
//!
//! Mirrors the synchronous engine: same recursion structure, same error
//! messages, same ordering. Suspension happens only at custom-schema
//! predicates, one call at a time; sibling validations never run
//! concurrently, so the two engines produce identical error sequences
//! for identical inputs. No cancellation or timeout semantics.

use futures_util::future::BoxFuture;
use serde_json::Value;

use crate::schema::{CustomValidator, Schema};

use super::engine::{check_primitive, value_type_name};
use super::result::ValidationResult;

/// Validates a value against a schema, awaiting async predicates.
///
/// Sync predicates are called inline, so any schema accepted by
/// [`super::validate`] produces the same verdict here.
pub async fn validate_async(value: &Value, schema: &Schema) -> ValidationResult {
    let mut errors = Vec::new();
    walk(value, schema, &mut errors).await;
    ValidationResult::from_errors(errors)
}

// A recursive async fn must box its future.
fn walk<'a>(
    value: &'a Value,
    schema: &'a Schema,
    errors: &'a mut Vec<String>,
) -> BoxFuture<'a, ()> {
    Box::pin(async move {
        match schema {
            Schema::Primitive { ty } => {
                check_primitive(value, *ty, errors);
            }
            Schema::Array {
                items,
                min_items,
                max_items,
            } => {
                let Some(elements) = value.as_array() else {
                    errors.push(format!("Expected array, got {}", value_type_name(value)));
                    return;
                };

                if let Some(min) = min_items {
                    if elements.len() < *min {
                        errors.push(format!(
                            "Expected at least {} items, got {}",
                            min,
                            elements.len()
                        ));
                    }
                }
                if let Some(max) = max_items {
                    if elements.len() > *max {
                        errors.push(format!(
                            "Expected at most {} items, got {}",
                            max,
                            elements.len()
                        ));
                    }
                }

                match items.len() {
                    0 => {
                        if !elements.is_empty() {
                            errors.push(format!(
                                "Expected empty tuple, got array of length {}",
                                elements.len()
                            ));
                        }
                    }
                    1 => {
                        for (index, element) in elements.iter().enumerate() {
                            let mut nested = Vec::new();
                            walk(element, &items[0], &mut nested).await;
                            errors.extend(
                                nested
                                    .into_iter()
                                    .map(|e| format!("Item[{}]: {}", index, e)),
                            );
                        }
                    }
                    tuple_len => {
                        if elements.len() != tuple_len {
                            errors.push(format!(
                                "Expected tuple of length {}, got {}",
                                tuple_len,
                                elements.len()
                            ));
                        }
                        for index in 0..tuple_len.min(elements.len()) {
                            let mut nested = Vec::new();
                            walk(&elements[index], &items[index], &mut nested).await;
                            errors.extend(
                                nested
                                    .into_iter()
                                    .map(|e| format!("Item at index {}: {}", index, e)),
                            );
                        }
                    }
                }
            }
            Schema::Object {
                properties,
                required,
                additional_properties,
            } => {
                let Some(map) = value.as_object() else {
                    errors.push(format!("Expected object, got {}", value_type_name(value)));
                    return;
                };

                for name in required {
                    if !map.contains_key(name) {
                        errors.push(format!("Missing required property: '{}'", name));
                    }
                }

                for (name, property_schema) in properties {
                    if let Some(property_value) = map.get(name) {
                        let mut nested = Vec::new();
                        walk(property_value, property_schema, &mut nested).await;
                        errors.extend(
                            nested
                                .into_iter()
                                .map(|e| format!("Property '{}': {}", name, e)),
                        );
                    }
                }

                if !additional_properties {
                    for name in map.keys() {
                        if !properties.contains_key(name) {
                            errors.push(format!("Unexpected property: '{}'", name));
                        }
                    }
                }
            }
            Schema::Custom {
                type_name,
                validator,
                inner_schema,
            } => {
                if let Some(validator) = validator {
                    let passed = match validator {
                        CustomValidator::Sync(predicate) => predicate(value),
                        CustomValidator::Async(predicate) => predicate(value).await,
                    };
                    if !passed {
                        errors.push(format!("Custom validation failed for type: {}", type_name));
                    }
                }
                if let Some(inner) = inner_schema {
                    walk(value, inner, errors).await;
                }
            }
        }
    })
}
