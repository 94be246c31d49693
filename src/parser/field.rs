// Wed Feb 04 2026 - Alex

use std::fmt;

/// One parsed struct/union member declaration.
///
/// Pointer depth is folded into the type name (`"char**"`); an array
/// length of zero means a scalar field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureField {
    name: String,
    type_name: String,
    array_length: usize,
}

impl StructureField {
    pub fn new(name: &str, type_name: &str, array_length: usize) -> Self {
        Self {
            name: name.to_string(),
            type_name: type_name.to_string(),
            array_length,
        }
    }

    pub fn scalar(name: &str, type_name: &str) -> Self {
        Self::new(name, type_name, 0)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn array_length(&self) -> usize {
        self.array_length
    }

    /// Base type with the pointer stars stripped back off.
    pub fn base_type(&self) -> &str {
        self.type_name.trim_end_matches('*')
    }

    pub fn pointer_depth(&self) -> usize {
        self.type_name.len() - self.base_type().len()
    }
}

impl fmt::Display for StructureField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.type_name, self.name)?;
        if self.array_length > 0 {
            write!(f, "[{}]", self.array_length)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_depth() {
        assert_eq!(StructureField::scalar("pNext", "void*").pointer_depth(), 1);
        assert_eq!(StructureField::scalar("ppData", "char**").pointer_depth(), 2);
        assert_eq!(StructureField::scalar("width", "uint32_t").pointer_depth(), 0);
    }

    #[test]
    fn test_base_type() {
        let field = StructureField::scalar("ppEnabledLayerNames", "char**");
        assert_eq!(field.base_type(), "char");
        assert_eq!(field.type_name(), "char**");
    }
}
