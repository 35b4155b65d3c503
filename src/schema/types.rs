//! Schema type definitions
//!
//! A schema is a closed tagged union over four variants:
//! - primitive: string, number, boolean
//! - array: homogeneous arrays, fixed-length tuples, empty tuples
//! - object: property maps with required names and an additionalProperties switch
//! - custom: a named type with an optional predicate and an optional inner schema
//!
//! Schemas are immutable once constructed. Validation and compatibility
//! checking only read them.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Supported primitive types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    /// UTF-8 string
    String,
    /// Any numeric value except NaN
    Number,
    /// Boolean
    Boolean,
}

impl PrimitiveType {
    /// Returns the type name used in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveType::String => "string",
            PrimitiveType::Number => "number",
            PrimitiveType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Synchronous predicate over a candidate value
pub type SyncPredicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Suspending predicate; the async engine awaits one call at a time
pub type AsyncPredicate = Arc<dyn for<'a> Fn(&'a Value) -> BoxFuture<'a, bool> + Send + Sync>;

/// User-supplied predicate attached to a custom schema.
///
/// The synchronous engine runs `Sync` predicates only; handing it an
/// `Async` predicate aborts the call as API misuse. The async engine
/// runs both forms.
#[derive(Clone)]
pub enum CustomValidator {
    /// Plain predicate, called inline
    Sync(SyncPredicate),
    /// Predicate returning a boxed future, awaited sequentially
    Async(AsyncPredicate),
}

impl CustomValidator {
    /// Wraps a plain closure
    pub fn new(predicate: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        CustomValidator::Sync(Arc::new(predicate))
    }

    /// Wraps a future-returning closure
    pub fn new_async(
        predicate: impl for<'a> Fn(&'a Value) -> BoxFuture<'a, bool> + Send + Sync + 'static,
    ) -> Self {
        CustomValidator::Async(Arc::new(predicate))
    }

    /// True when the predicate must be awaited
    pub fn is_async(&self) -> bool {
        matches!(self, CustomValidator::Async(_))
    }
}

impl fmt::Debug for CustomValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomValidator::Sync(_) => f.write_str("CustomValidator::Sync(..)"),
            CustomValidator::Async(_) => f.write_str("CustomValidator::Async(..)"),
        }
    }
}

/// Schema as a closed tagged union.
///
/// The serialized form carries a `kind` tag and camelCase field names,
/// so schema files read as plain JSON descriptions. Custom predicates
/// are not serializable and are skipped on both sides; a deserialized
/// custom schema has no validator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Schema {
    /// Single primitive value
    Primitive {
        /// Expected primitive type
        #[serde(rename = "type")]
        ty: PrimitiveType,
    },
    /// Sequence of values.
    ///
    /// `items` of length 1 is a homogeneous array (every element must
    /// conform to the single schema); length >= 2 is a fixed-length
    /// tuple matched positionally; length 0 is the empty tuple.
    #[serde(rename_all = "camelCase")]
    Array {
        /// Element schemas
        items: Vec<Schema>,
        /// Inclusive lower bound on element count
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_items: Option<usize>,
        /// Inclusive upper bound on element count
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_items: Option<usize>,
    },
    /// Mapping from property name to schema
    #[serde(rename_all = "camelCase")]
    Object {
        /// Declared properties
        properties: BTreeMap<String, Schema>,
        /// Names that must be present; not cross-checked against `properties`
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        required: Vec<String>,
        /// Whether undeclared properties are accepted
        #[serde(default)]
        additional_properties: bool,
    },
    /// Named type with an optional predicate and an optional inner schema
    #[serde(rename_all = "camelCase")]
    Custom {
        /// Name identifying the type for compatibility and error messages
        type_name: String,
        /// Optional predicate; not serialized
        #[serde(skip)]
        validator: Option<CustomValidator>,
        /// Optional schema the value must also satisfy
        #[serde(default, skip_serializing_if = "Option::is_none")]
        inner_schema: Option<Box<Schema>>,
    },
}

impl Schema {
    /// Returns the kind name for error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Schema::Primitive { .. } => "primitive",
            Schema::Array { .. } => "array",
            Schema::Object { .. } => "object",
            Schema::Custom { .. } => "custom",
        }
    }

    /// Renders an indented, one-line-per-node summary of the schema tree
    pub fn describe(&self) -> String {
        let mut out = String::new();
        self.describe_node(&mut out, 0, None);
        out
    }

    fn describe_node(&self, out: &mut String, depth: usize, label: Option<&str>) {
        use std::fmt::Write;

        for _ in 0..depth {
            out.push_str("  ");
        }
        if let Some(label) = label {
            let _ = write!(out, "{}: ", label);
        }
        match self {
            Schema::Primitive { ty } => {
                let _ = writeln!(out, "{}", ty);
            }
            Schema::Array {
                items,
                min_items,
                max_items,
            } => {
                let form = match items.len() {
                    0 => "empty tuple".to_string(),
                    1 => "homogeneous".to_string(),
                    n => format!("tuple of {}", n),
                };
                let mut bounds = String::new();
                if let Some(min) = min_items {
                    let _ = write!(bounds, ", minItems {}", min);
                }
                if let Some(max) = max_items {
                    let _ = write!(bounds, ", maxItems {}", max);
                }
                let _ = writeln!(out, "array ({}{})", form, bounds);
                for item in items {
                    item.describe_node(out, depth + 1, None);
                }
            }
            Schema::Object {
                properties,
                required,
                additional_properties,
            } => {
                let _ = writeln!(
                    out,
                    "object ({} properties, {} required{})",
                    properties.len(),
                    required.len(),
                    if *additional_properties { ", open" } else { "" }
                );
                for (name, property) in properties {
                    property.describe_node(out, depth + 1, Some(name));
                }
            }
            Schema::Custom {
                type_name,
                validator,
                inner_schema,
            } => {
                let _ = writeln!(
                    out,
                    "custom '{}'{}",
                    type_name,
                    if validator.is_some() {
                        " (with validator)"
                    } else {
                        ""
                    }
                );
                if let Some(inner) = inner_schema {
                    inner.describe_node(out, depth + 1, None);
                }
            }
        }
    }
}

/// A named schema held by the registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeDefinition {
    /// Unique type name
    pub name: String,
    /// The schema values of this type must satisfy
    pub schema: Schema,
    /// Optional human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TypeDefinition {
    /// Create a definition with no description
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema,
            description: None,
        }
    }

    /// Create a definition with a description
    pub fn with_description(
        name: impl Into<String>,
        schema: Schema,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            schema,
            description: Some(description.into()),
        }
    }
}
