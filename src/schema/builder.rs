//! Schema construction helpers
//!
//! Pure factory functions, one per variant shape. The validator and the
//! compatibility checker never construct schemas; callers build them
//! here (or deserialize them) and pass them in.

use std::collections::BTreeMap;

use super::types::{CustomValidator, PrimitiveType, Schema};

/// Factory functions for schema values
pub struct SchemaBuilder;

impl SchemaBuilder {
    /// String primitive schema
    pub fn string() -> Schema {
        Schema::Primitive {
            ty: PrimitiveType::String,
        }
    }

    /// Number primitive schema
    pub fn number() -> Schema {
        Schema::Primitive {
            ty: PrimitiveType::Number,
        }
    }

    /// Boolean primitive schema
    pub fn boolean() -> Schema {
        Schema::Primitive {
            ty: PrimitiveType::Boolean,
        }
    }

    /// Array schema.
    ///
    /// One item schema means homogeneous, two or more a fixed-length
    /// tuple, zero the empty tuple.
    pub fn array(items: Vec<Schema>) -> Schema {
        Schema::Array {
            items,
            min_items: None,
            max_items: None,
        }
    }

    /// Array schema with inclusive length bounds
    pub fn bounded_array(
        items: Vec<Schema>,
        min_items: Option<usize>,
        max_items: Option<usize>,
    ) -> Schema {
        Schema::Array {
            items,
            min_items,
            max_items,
        }
    }

    /// Object schema with no required names; additional properties rejected
    pub fn object(properties: BTreeMap<String, Schema>) -> Schema {
        Schema::Object {
            properties,
            required: Vec::new(),
            additional_properties: false,
        }
    }

    /// Object schema with explicit required names and additionalProperties switch
    pub fn object_with(
        properties: BTreeMap<String, Schema>,
        required: Vec<String>,
        additional_properties: bool,
    ) -> Schema {
        Schema::Object {
            properties,
            required,
            additional_properties,
        }
    }

    /// Custom schema carrying only a name
    pub fn custom(type_name: impl Into<String>) -> Schema {
        Schema::Custom {
            type_name: type_name.into(),
            validator: None,
            inner_schema: None,
        }
    }

    /// Custom schema with a predicate
    pub fn custom_with_validator(
        type_name: impl Into<String>,
        validator: CustomValidator,
    ) -> Schema {
        Schema::Custom {
            type_name: type_name.into(),
            validator: Some(validator),
            inner_schema: None,
        }
    }

    /// Custom schema wrapping an inner schema
    pub fn custom_with_schema(type_name: impl Into<String>, inner_schema: Schema) -> Schema {
        Schema::Custom {
            type_name: type_name.into(),
            validator: None,
            inner_schema: Some(Box::new(inner_schema)),
        }
    }

    /// Custom schema with both parts explicit
    pub fn custom_full(
        type_name: impl Into<String>,
        validator: Option<CustomValidator>,
        inner_schema: Option<Schema>,
    ) -> Schema {
        Schema::Custom {
            type_name: type_name.into(),
            validator,
            inner_schema: inner_schema.map(Box::new),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_defaults() {
        let schema = SchemaBuilder::object(BTreeMap::from([
            ("x".to_string(), SchemaBuilder::number()),
        ]));

        match schema {
            Schema::Object {
                required,
                additional_properties,
                ..
            } => {
                assert!(required.is_empty());
                assert!(!additional_properties);
            }
            other => panic!("Expected object schema, got {}", other.kind_name()),
        }
    }

    #[test]
    fn test_array_has_no_bounds_by_default() {
        let schema = SchemaBuilder::array(vec![SchemaBuilder::string()]);
        match schema {
            Schema::Array {
                min_items,
                max_items,
                ..
            } => {
                assert!(min_items.is_none());
                assert!(max_items.is_none());
            }
            other => panic!("Expected array schema, got {}", other.kind_name()),
        }
    }

    #[test]
    fn test_custom_builder_forms() {
        let bare = SchemaBuilder::custom("email");
        match bare {
            Schema::Custom {
                validator,
                inner_schema,
                ..
            } => {
                assert!(validator.is_none());
                assert!(inner_schema.is_none());
            }
            other => panic!("Expected custom schema, got {}", other.kind_name()),
        }

        let full = SchemaBuilder::custom_full(
            "email",
            Some(CustomValidator::new(|v| {
                v.as_str().is_some_and(|s| s.contains('@'))
            })),
            Some(SchemaBuilder::string()),
        );
        match full {
            Schema::Custom {
                validator,
                inner_schema,
                ..
            } => {
                assert!(validator.is_some());
                assert!(inner_schema.is_some());
            }
            other => panic!("Expected custom schema, got {}", other.kind_name()),
        }
    }
}
