// Thu Feb 05 2026 - Alex

use crate::layout::Carrier;
use crate::parser::StructureField;
use crate::types::error::TypeError;
use crate::types::native::{MappedField, NativeType};
use crate::types::plural::{default_plurality, PluralityRule};
use crate::types::rules::{FieldQuery, RULES};
use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// C scalar names with known ABI widths, seeded into every default registry.
static PRIMITIVE_SEED: Lazy<Vec<(&'static str, Carrier)>> = Lazy::new(|| {
    vec![
        ("char", Carrier::Byte),
        ("int8_t", Carrier::Byte),
        ("uint8_t", Carrier::Byte),
        ("int16_t", Carrier::Short),
        ("uint16_t", Carrier::Short),
        ("int", Carrier::Int),
        ("int32_t", Carrier::Int),
        ("uint32_t", Carrier::Int),
        ("int64_t", Carrier::Long),
        ("uint64_t", Carrier::Long),
        ("size_t", Carrier::Long),
        ("float", Carrier::Float),
        ("double", Carrier::Double),
    ]
});

/// Base Vulkan scalar typedefs that never appear as their own declarations.
const TYPEDEF_SEED: &[(&str, &str)] = &[
    ("uint32_t", "VkBool32"),
    ("uint32_t", "VkFlags"),
    ("uint64_t", "VkFlags64"),
    ("uint64_t", "VkDeviceSize"),
    ("uint64_t", "VkDeviceAddress"),
    ("uint32_t", "VkSampleMask"),
];

/// Registry mapping C type names to native binding types.
///
/// Grows monotonically as declarations are generated; entries are never
/// removed or replaced. Passed by `&mut` into every map/layout call so
/// per-test registries stay fully isolated.
pub struct TypeMapper {
    registry: IndexMap<String, NativeType>,
    aliases: IndexMap<String, String>,
    plurality: PluralityRule,
    flagged: Vec<String>,
}

impl TypeMapper {
    pub fn new() -> Self {
        Self {
            registry: IndexMap::new(),
            aliases: IndexMap::new(),
            plurality: Box::new(default_plurality),
            flagged: Vec::new(),
        }
    }

    /// Registry pre-seeded with the primitive C types and the base Vulkan
    /// scalar typedefs.
    pub fn with_defaults() -> Self {
        let mut mapper = Self::new();
        for (name, carrier) in PRIMITIVE_SEED.iter() {
            mapper
                .registry
                .insert(name.to_string(), NativeType::primitive(*carrier));
        }
        for (existing, alias) in TYPEDEF_SEED {
            mapper
                .aliases
                .insert(alias.to_string(), existing.to_string());
        }
        mapper
    }

    /// Replaces the pointer-plurality heuristic.
    pub fn set_plurality(&mut self, rule: PluralityRule) {
        self.plurality = rule;
    }

    pub fn add(&mut self, name: &str, native: NativeType) -> Result<(), TypeError> {
        if self.contains(name) {
            return Err(TypeError::DuplicateType(name.to_string()));
        }
        log::debug!("registered type '{}' as {}", name, native);
        self.registry.insert(name.to_string(), native);
        Ok(())
    }

    pub fn add_handle(&mut self, name: &str) -> Result<(), TypeError> {
        self.add(name, NativeType::handle())
    }

    /// Registers `alias` for an already-registered `existing` type.
    pub fn typedef(&mut self, existing: &str, alias: &str) -> Result<(), TypeError> {
        if !self.contains(existing) {
            return Err(TypeError::UnknownType(existing.to_string()));
        }
        if self.contains(alias) {
            return Err(TypeError::DuplicateType(alias.to_string()));
        }
        self.aliases
            .insert(alias.to_string(), existing.to_string());
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains_key(name) || self.aliases.contains_key(name)
    }

    /// Whether `name` reaches a registration only through typedef aliases.
    pub fn is_alias(&self, name: &str) -> bool {
        self.aliases.contains_key(name)
    }

    /// Follows the alias chain to the concrete registration, if any.
    pub fn resolve(&self, name: &str) -> Option<&NativeType> {
        let mut current = name;
        let mut hops = 0;
        while let Some(next) = self.aliases.get(current) {
            current = next;
            hops += 1;
            if hops > 32 {
                return None;
            }
        }
        self.registry.get(current)
    }

    /// Resolves a parsed field through the ordered rule chain.
    pub fn map(&mut self, field: &StructureField) -> Result<MappedField, TypeError> {
        let query = FieldQuery::new(field);
        for (rule_name, rule) in RULES {
            if let Some(mapped) = rule(self, &query)? {
                log::debug!(
                    "field '{}' ({}) matched rule '{}' -> {}",
                    field.name(),
                    field.type_name(),
                    rule_name,
                    mapped.type_name()
                );
                return Ok(mapped);
            }
        }
        Err(TypeError::UnknownType(query.base.to_string()))
    }

    pub(crate) fn is_plural(&mut self, name: &str) -> bool {
        match (self.plurality)(name) {
            Some(plural) => plural,
            None => {
                log::warn!("ambiguous plurality for field '{}', assuming singular", name);
                self.flagged.push(name.to_string());
                false
            }
        }
    }

    /// Field names the plurality heuristic could not classify.
    pub fn flagged_names(&self) -> &[String] {
        &self.flagged
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

impl Default for TypeMapper {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::native::TypeCategory;

    #[test]
    fn test_seeded_primitive_widths() {
        let mapper = TypeMapper::with_defaults();
        let expected = [
            ("char", 1),
            ("uint8_t", 1),
            ("uint16_t", 2),
            ("uint32_t", 4),
            ("int32_t", 4),
            ("uint64_t", 8),
            ("size_t", 8),
            ("float", 4),
            ("double", 8),
        ];
        for (name, size) in expected {
            let native = mapper.resolve(name).unwrap();
            assert_eq!(native.layout().byte_size(), size, "width of {}", name);
        }
    }

    #[test]
    fn test_seeded_vulkan_typedefs() {
        let mapper = TypeMapper::with_defaults();
        assert_eq!(mapper.resolve("VkBool32").unwrap().layout().byte_size(), 4);
        assert_eq!(
            mapper.resolve("VkDeviceSize").unwrap().layout().byte_size(),
            8
        );
        assert!(mapper.is_alias("VkFlags"));
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut mapper = TypeMapper::with_defaults();
        mapper.add_handle("VkDevice").unwrap();
        let err = mapper.add_handle("VkDevice").unwrap_err();
        assert!(matches!(err, TypeError::DuplicateType(name) if name == "VkDevice"));
    }

    #[test]
    fn test_typedef_requires_existing() {
        let mut mapper = TypeMapper::with_defaults();
        let err = mapper.typedef("VkMissing", "VkAlias").unwrap_err();
        assert!(matches!(err, TypeError::UnknownType(name) if name == "VkMissing"));
    }

    #[test]
    fn test_alias_chain_resolution() {
        let mut mapper = TypeMapper::with_defaults();
        mapper.typedef("VkFlags", "VkAccessFlags").unwrap();
        let native = mapper.resolve("VkAccessFlags").unwrap();
        assert_eq!(native.category(), TypeCategory::Primitive);
        assert_eq!(native.layout().byte_size(), 4);
    }

    #[test]
    fn test_registries_are_isolated() {
        let mut first = TypeMapper::with_defaults();
        let second = TypeMapper::with_defaults();
        first.add_handle("VkInstance").unwrap();
        assert!(first.contains("VkInstance"));
        assert!(!second.contains("VkInstance"));
    }
}
