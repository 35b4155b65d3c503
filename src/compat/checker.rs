//! Structural compatibility checking
//!
//! Directional: the source schema must satisfy the target schema's
//! constraints, not vice versa. Schemas of different kinds are never
//! compatible. Custom types compare by name alone; predicates and inner
//! schemas are not consulted.

use std::collections::BTreeMap;

use crate::registry::TypeRegistry;
use crate::schema::Schema;

use super::result::CompatibilityResult;

/// True when `source` satisfies `target`'s constraints
pub fn are_compatible(source: &Schema, target: &Schema) -> bool {
    check_compatibility(source, target).is_compatible()
}

/// Compatibility verdict with a reason on failure
pub fn check_compatibility(source: &Schema, target: &Schema) -> CompatibilityResult {
    match (source, target) {
        (Schema::Primitive { ty: source_ty }, Schema::Primitive { ty: target_ty }) => {
            if source_ty == target_ty {
                CompatibilityResult::compatible()
            } else {
                CompatibilityResult::incompatible(format!(
                    "Primitive type mismatch: {} vs {}",
                    source_ty, target_ty
                ))
            }
        }
        (
            Schema::Array {
                items: source_items,
                ..
            },
            Schema::Array {
                items: target_items,
                ..
            },
        ) => check_array_items(source_items, target_items),
        (
            Schema::Object {
                properties: source_properties,
                ..
            },
            Schema::Object {
                properties: target_properties,
                required: target_required,
                ..
            },
        ) => check_object(source_properties, target_properties, target_required),
        (
            Schema::Custom {
                type_name: source_name,
                ..
            },
            Schema::Custom {
                type_name: target_name,
                ..
            },
        ) => {
            if source_name == target_name {
                CompatibilityResult::compatible()
            } else {
                CompatibilityResult::incompatible(format!(
                    "Custom type mismatch: {} vs {}",
                    source_name, target_name
                ))
            }
        }
        (source, target) => CompatibilityResult::incompatible(format!(
            "Kind mismatch: {} vs {}",
            source.kind_name(),
            target.kind_name()
        )),
    }
}

/// Array rule: empty tuples only match each other; two homogeneous
/// schemas recurse on the single element; two tuples of equal length
/// recurse pairwise; everything else is incompatible.
fn check_array_items(source: &[Schema], target: &[Schema]) -> CompatibilityResult {
    if source.is_empty() || target.is_empty() {
        return if source.is_empty() && target.is_empty() {
            CompatibilityResult::compatible()
        } else {
            CompatibilityResult::incompatible(format!(
                "Array form mismatch: {} vs {}",
                form_name(source),
                form_name(target)
            ))
        };
    }

    match (source.len(), target.len()) {
        (1, 1) => {
            let inner = check_compatibility(&source[0], &target[0]);
            match inner.reason() {
                None => CompatibilityResult::compatible(),
                Some(reason) => CompatibilityResult::incompatible(format!("Item: {}", reason)),
            }
        }
        (source_len, target_len) if source_len >= 2 && target_len >= 2 => {
            if source_len != target_len {
                return CompatibilityResult::incompatible(format!(
                    "Tuple length mismatch: {} vs {}",
                    source_len, target_len
                ));
            }
            for (index, (source_item, target_item)) in source.iter().zip(target).enumerate() {
                let inner = check_compatibility(source_item, target_item);
                if let Some(reason) = inner.reason() {
                    return CompatibilityResult::incompatible(format!(
                        "Item at index {}: {}",
                        index, reason
                    ));
                }
            }
            CompatibilityResult::compatible()
        }
        _ => CompatibilityResult::incompatible(format!(
            "Array form mismatch: {} vs {}",
            form_name(source),
            form_name(target)
        )),
    }
}

fn form_name(items: &[Schema]) -> &'static str {
    match items.len() {
        0 => "empty tuple",
        1 => "homogeneous",
        _ => "tuple",
    }
}

/// Object rule: every target-required name must be declared by the
/// source (presence only, not source-requiredness); properties declared
/// on both sides must be recursively compatible; one-sided properties
/// are ignored.
fn check_object(
    source_properties: &BTreeMap<String, Schema>,
    target_properties: &BTreeMap<String, Schema>,
    target_required: &[String],
) -> CompatibilityResult {
    for name in target_required {
        if !source_properties.contains_key(name) {
            return CompatibilityResult::incompatible(format!(
                "Required property '{}' missing from source schema",
                name
            ));
        }
    }

    for (name, source_schema) in source_properties {
        if let Some(target_schema) = target_properties.get(name) {
            let inner = check_compatibility(source_schema, target_schema);
            if let Some(reason) = inner.reason() {
                return CompatibilityResult::incompatible(format!(
                    "Property '{}': {}",
                    name, reason
                ));
            }
        }
    }

    CompatibilityResult::compatible()
}

/// Registry-backed checker for name-keyed compatibility
pub struct CompatibilityChecker<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> CompatibilityChecker<'a> {
    /// Creates a checker backed by the given registry
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self { registry }
    }

    /// True when the type registered as `source` is compatible with the
    /// type registered as `target`
    pub fn are_types_compatible(&self, source: &str, target: &str) -> bool {
        self.check_types(source, target).is_compatible()
    }

    /// Name-keyed compatibility verdict.
    ///
    /// Identical names short-circuit to compatible before any registry
    /// lookup. Unresolved names are reported by role; a structural
    /// failure collapses to a single type-level reason.
    pub fn check_types(&self, source: &str, target: &str) -> CompatibilityResult {
        if source == target {
            return CompatibilityResult::compatible();
        }
        let Some(source_def) = self.registry.get_type(source) else {
            return CompatibilityResult::incompatible(format!("Unknown source type: {}", source));
        };
        let Some(target_def) = self.registry.get_type(target) else {
            return CompatibilityResult::incompatible(format!("Unknown target type: {}", target));
        };
        if are_compatible(&source_def.schema, &target_def.schema) {
            CompatibilityResult::compatible()
        } else {
            CompatibilityResult::incompatible(format!(
                "Type mismatch: {} is not compatible with {}",
                source, target
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaBuilder;

    #[test]
    fn test_kind_mismatch() {
        let result = check_compatibility(
            &SchemaBuilder::string(),
            &SchemaBuilder::array(vec![SchemaBuilder::string()]),
        );
        assert_eq!(result.reason(), Some("Kind mismatch: primitive vs array"));
    }

    #[test]
    fn test_primitive_rule() {
        assert!(are_compatible(
            &SchemaBuilder::number(),
            &SchemaBuilder::number()
        ));
        assert!(!are_compatible(
            &SchemaBuilder::number(),
            &SchemaBuilder::string()
        ));
    }

    #[test]
    fn test_homogeneous_recursion_wraps_reason() {
        let source = SchemaBuilder::array(vec![SchemaBuilder::number()]);
        let target = SchemaBuilder::array(vec![SchemaBuilder::string()]);

        let result = check_compatibility(&source, &target);
        assert_eq!(
            result.reason(),
            Some("Item: Primitive type mismatch: number vs string")
        );
    }

    #[test]
    fn test_custom_compares_by_name_only() {
        let a = SchemaBuilder::custom_with_validator(
            "email",
            crate::schema::CustomValidator::new(|v| v.is_string()),
        );
        let b = SchemaBuilder::custom_with_schema("email", SchemaBuilder::number());
        assert!(are_compatible(&a, &b));

        let c = SchemaBuilder::custom("uuid");
        assert!(!are_compatible(&a, &c));
    }
}
