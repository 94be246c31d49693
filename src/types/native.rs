// Thu Feb 05 2026 - Alex

use crate::layout::{Carrier, GroupKind, MemoryLayout};
use std::fmt;

/// What a registry entry fundamentally is; rules branch on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCategory {
    Primitive,
    Handle,
    Structure,
    Union,
    Enumeration,
    Bitmask,
}

/// A generated binding type: target-language name plus memory layout.
/// Immutable once registered.
#[derive(Debug, Clone)]
pub struct NativeType {
    name: String,
    layout: MemoryLayout,
    category: TypeCategory,
}

impl NativeType {
    pub fn new(name: &str, layout: MemoryLayout, category: TypeCategory) -> Self {
        Self {
            name: name.to_string(),
            layout,
            category,
        }
    }

    pub fn primitive(carrier: Carrier) -> Self {
        Self::new(
            carrier.type_name(),
            MemoryLayout::value(carrier),
            TypeCategory::Primitive,
        )
    }

    /// Opaque pointer-sized reference; all handles share one binding type.
    pub fn handle() -> Self {
        Self::new("MemorySegment", MemoryLayout::address(), TypeCategory::Handle)
    }

    pub fn enumeration(name: &str) -> Self {
        Self::new(
            name,
            MemoryLayout::value(Carrier::Int),
            TypeCategory::Enumeration,
        )
    }

    pub fn bitmask(name: &str) -> Self {
        Self::new(
            name,
            MemoryLayout::value(Carrier::Int),
            TypeCategory::Bitmask,
        )
    }

    pub fn structure(name: &str, kind: GroupKind, layout: MemoryLayout) -> Self {
        let category = match kind {
            GroupKind::Struct => TypeCategory::Structure,
            GroupKind::Union => TypeCategory::Union,
        };
        Self::new(name, layout, category)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn layout(&self) -> &MemoryLayout {
        &self.layout
    }

    pub fn category(&self) -> TypeCategory {
        self.category
    }

    pub fn carrier(&self) -> Option<Carrier> {
        match self.layout {
            MemoryLayout::Value { carrier, .. } => Some(carrier),
            _ => None,
        }
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} bytes)", self.name, self.layout.byte_size())
    }
}

/// A structure field resolved to its binding type and member layout.
#[derive(Debug, Clone)]
pub struct MappedField {
    name: String,
    type_name: String,
    layout: MemoryLayout,
}

impl MappedField {
    pub fn new(name: &str, type_name: &str, layout: MemoryLayout) -> Self {
        Self {
            name: name.to_string(),
            type_name: type_name.to_string(),
            layout,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn layout(&self) -> &MemoryLayout {
        &self.layout
    }
}

impl fmt::Display for MappedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.type_name, self.name)
    }
}
