//! Type registry
//!
//! In-memory name-to-definition store with unique-name enforcement. A
//! new registry pre-registers the three built-in primitive type names.
//! Registries are explicit constructed instances passed by reference;
//! there is no process-wide registry, and nothing is persisted.

use std::collections::BTreeMap;

use crate::schema::{SchemaBuilder, SchemaError, SchemaResult, TypeDefinition};

/// Name-keyed store of type definitions
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: BTreeMap<String, TypeDefinition>,
}

impl TypeRegistry {
    /// Creates a registry seeded with the built-in primitive types
    /// `string`, `number`, and `boolean`
    pub fn new() -> Self {
        let mut types = BTreeMap::new();
        for (name, schema) in [
            ("string", SchemaBuilder::string()),
            ("number", SchemaBuilder::number()),
            ("boolean", SchemaBuilder::boolean()),
        ] {
            types.insert(name.to_string(), TypeDefinition::new(name, schema));
        }
        Self { types }
    }

    /// Registers a definition under its unique name.
    ///
    /// # Errors
    ///
    /// Duplicate names (built-ins included) are API misuse and fail with
    /// a FATAL `SHAPE_DUPLICATE_TYPE` error.
    pub fn register_type(&mut self, def: TypeDefinition) -> SchemaResult<()> {
        if self.types.contains_key(&def.name) {
            return Err(SchemaError::duplicate_type(&def.name));
        }
        tracing::debug!(type_name = %def.name, "registered type");
        self.types.insert(def.name.clone(), def);
        Ok(())
    }

    /// Looks up a definition by name
    pub fn get_type(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }

    /// True when `name` is registered
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn type_names(&self) -> Vec<&str> {
        self.types.keys().map(|s| s.as_str()).collect()
    }

    /// Number of registered types
    pub fn type_count(&self) -> usize {
        self.types.len()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
