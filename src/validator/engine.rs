//! Synchronous recursive validation
//!
//! Validation never fails on malformed input values; mismatches become
//! accumulated errors. The one fatal path is API misuse: a custom schema
//! whose predicate must be awaited belongs to `validate_async`.
//!
//! Error messages compose by prefixing structural context at each
//! nesting level, producing breadcrumb paths such as
//! `Property 'tags': Item[2]: Expected string, got number`.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::registry::TypeRegistry;
use crate::schema::{CustomValidator, PrimitiveType, Schema, SchemaError, SchemaResult};

use super::result::ValidationResult;

/// Validates a value against a schema.
///
/// Mismatches accumulate into the returned verdict. The call itself only
/// fails when the schema carries an async predicate (FATAL
/// `SHAPE_ASYNC_VALIDATOR`).
pub fn validate(value: &Value, schema: &Schema) -> SchemaResult<ValidationResult> {
    let mut errors = Vec::new();
    walk(value, schema, &mut errors)?;
    Ok(ValidationResult::from_errors(errors))
}

/// Registry-backed validator for name-keyed validation.
pub struct SchemaValidator<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> SchemaValidator<'a> {
    /// Creates a validator backed by the given registry
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self { registry }
    }

    /// Validates a value against the schema registered under `type_name`.
    ///
    /// # Errors
    ///
    /// Returns `SHAPE_UNKNOWN_TYPE` when the name is not registered, and
    /// propagates the fatal async-predicate error from [`validate`].
    pub fn validate_named(&self, type_name: &str, value: &Value) -> SchemaResult<ValidationResult> {
        let def = self
            .registry
            .get_type(type_name)
            .ok_or_else(|| SchemaError::unknown_type(type_name))?;
        let verdict = validate(value, &def.schema)?;
        tracing::debug!(
            type_name = %type_name,
            valid = verdict.is_valid(),
            errors = verdict.error_count(),
            "validated value against registered type"
        );
        Ok(verdict)
    }
}

/// Runtime type name of a value, as reported in error messages
pub(crate) fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Checks a value against a primitive type, pushing errors on mismatch
pub(crate) fn check_primitive(value: &Value, ty: PrimitiveType, errors: &mut Vec<String>) {
    let type_matches = match ty {
        PrimitiveType::String => value.is_string(),
        PrimitiveType::Number => value.is_number(),
        PrimitiveType::Boolean => value.is_boolean(),
    };
    if !type_matches {
        errors.push(format!(
            "Expected {}, got {}",
            ty.as_str(),
            value_type_name(value)
        ));
        return;
    }
    // NaN never satisfies a number schema. Numbers parsed from JSON text
    // cannot be NaN; the guard covers values built through other routes.
    if ty == PrimitiveType::Number {
        if let Some(n) = value.as_f64() {
            if n.is_nan() {
                errors.push("Number value cannot be NaN".to_string());
            }
        }
    }
}

fn walk(value: &Value, schema: &Schema, errors: &mut Vec<String>) -> SchemaResult<()> {
    match schema {
        Schema::Primitive { ty } => {
            check_primitive(value, *ty, errors);
            Ok(())
        }
        Schema::Array {
            items,
            min_items,
            max_items,
        } => walk_array(value, items, *min_items, *max_items, errors),
        Schema::Object {
            properties,
            required,
            additional_properties,
        } => walk_object(value, properties, required, *additional_properties, errors),
        Schema::Custom {
            type_name,
            validator,
            inner_schema,
        } => {
            // Predicate and inner schema are independent; both run and
            // both accumulate errors.
            if let Some(validator) = validator {
                match validator {
                    CustomValidator::Sync(predicate) => {
                        if !predicate(value) {
                            errors.push(format!(
                                "Custom validation failed for type: {}",
                                type_name
                            ));
                        }
                    }
                    CustomValidator::Async(_) => {
                        return Err(SchemaError::async_validator(type_name));
                    }
                }
            }
            if let Some(inner) = inner_schema {
                // Inner errors are appended verbatim, with no extra prefix.
                walk(value, inner, errors)?;
            }
            Ok(())
        }
    }
}

fn walk_array(
    value: &Value,
    items: &[Schema],
    min_items: Option<usize>,
    max_items: Option<usize>,
    errors: &mut Vec<String>,
) -> SchemaResult<()> {
    let Some(elements) = value.as_array() else {
        errors.push(format!("Expected array, got {}", value_type_name(value)));
        return Ok(());
    };

    // Length bounds are reported independently and do not suppress
    // per-item checks.
    if let Some(min) = min_items {
        if elements.len() < min {
            errors.push(format!(
                "Expected at least {} items, got {}",
                min,
                elements.len()
            ));
        }
    }
    if let Some(max) = max_items {
        if elements.len() > max {
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
                walk(element, &items[0], &mut nested)?;
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
                walk(&elements[index], &items[index], &mut nested)?;
                errors.extend(
                    nested
                        .into_iter()
                        .map(|e| format!("Item at index {}: {}", index, e)),
                );
            }
        }
    }
    Ok(())
}

fn walk_object(
    value: &Value,
    properties: &BTreeMap<String, Schema>,
    required: &[String],
    additional_properties: bool,
    errors: &mut Vec<String>,
) -> SchemaResult<()> {
    let Some(map) = value.as_object() else {
        errors.push(format!("Expected object, got {}", value_type_name(value)));
        return Ok(());
    };

    // Required names are checked by presence alone; they need not be
    // declared in `properties`.
    for name in required {
        if !map.contains_key(name) {
            errors.push(format!("Missing required property: '{}'", name));
        }
    }

    for (name, property_schema) in properties {
        if let Some(property_value) = map.get(name) {
            let mut nested = Vec::new();
            walk(property_value, property_schema, &mut nested)?;
            errors.extend(
                nested
                    .into_iter()
                    .map(|e| format!("Property '{}': {}", name, e)),
            );
        }
        // Absent and not required: accepted, no defaults injected.
    }

    if !additional_properties {
        for name in map.keys() {
            if !properties.contains_key(name) {
                errors.push(format!("Unexpected property: '{}'", name));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaBuilder;
    use serde_json::json;

    #[test]
    fn test_primitive_match_and_mismatch() {
        let schema = SchemaBuilder::string();

        let ok = validate(&json!("hello"), &schema).unwrap();
        assert!(ok.is_valid());

        let bad = validate(&json!(42), &schema).unwrap();
        assert_eq!(bad.errors(), ["Expected string, got number"]);
    }

    #[test]
    fn test_non_array_value_is_single_error() {
        let schema = SchemaBuilder::array(vec![SchemaBuilder::string()]);
        let result = validate(&json!({"not": "an array"}), &schema).unwrap();
        assert_eq!(result.errors(), ["Expected array, got object"]);
    }

    #[test]
    fn test_custom_sync_predicate_failure() {
        let schema = SchemaBuilder::custom_with_validator(
            "email",
            crate::schema::CustomValidator::new(|v| {
                v.as_str().is_some_and(|s| s.contains('@'))
            }),
        );

        let result = validate(&json!("not-an-email"), &schema).unwrap();
        assert_eq!(result.errors(), ["Custom validation failed for type: email"]);
    }

    #[test]
    fn test_async_predicate_in_sync_call_is_fatal() {
        let schema = SchemaBuilder::custom_with_validator(
            "email",
            crate::schema::CustomValidator::new_async(|v| {
                Box::pin(async move { v.is_string() })
            }),
        );

        let err = validate(&json!("x"), &schema).unwrap_err();
        assert_eq!(err.code().code(), "SHAPE_ASYNC_VALIDATOR");
        assert!(err.is_fatal());
    }

    #[test]
    fn test_validate_named_unknown_type() {
        let registry = TypeRegistry::new();
        let validator = SchemaValidator::new(&registry);

        let err = validator.validate_named("ghost", &json!(1)).unwrap_err();
        assert_eq!(err.code().code(), "SHAPE_UNKNOWN_TYPE");
    }

    #[test]
    fn test_validate_named_builtin() {
        let registry = TypeRegistry::new();
        let validator = SchemaValidator::new(&registry);

        assert!(validator
            .validate_named("number", &json!(3.5))
            .unwrap()
            .is_valid());
        assert!(!validator
            .validate_named("number", &json!("3.5"))
            .unwrap()
            .is_valid());
    }
}
