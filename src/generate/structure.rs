// Fri Feb 06 2026 - Alex

use crate::generate::arguments::{FieldDeclaration, StructureArguments};
use crate::layout::{LayoutBuilder, LayoutError, LayoutWriter, WordSize};
use crate::parser::StructureData;
use crate::types::TypeMapper;

/// Assembles, registers and renders one structure, producing the
/// template arguments for its generated source file.
pub struct StructureGenerator {
    word: WordSize,
}

impl StructureGenerator {
    pub fn new(word: WordSize) -> Self {
        Self { word }
    }

    pub fn generate(
        &self,
        data: &StructureData,
        mapper: &mut TypeMapper,
    ) -> Result<StructureArguments, LayoutError> {
        let builder = LayoutBuilder::new(self.word);
        let assembled = builder.layout(data.name(), data.kind(), data.fields(), mapper)?;
        let layout_source = LayoutWriter::new(self.word).render(assembled.layout())?;

        let fields = assembled
            .fields()
            .iter()
            .map(|field| FieldDeclaration {
                type_name: field.type_name().to_string(),
                name: field.name().to_string(),
            })
            .collect();

        Ok(StructureArguments {
            class_name: data.name().to_string(),
            fields,
            layout_source,
        })
    }
}

impl Default for StructureGenerator {
    fn default() -> Self {
        Self::new(WordSize::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::GroupKind;
    use crate::parser::StructureField;

    #[test]
    fn test_extent_arguments() {
        let mut data = StructureData::new("VkExtent2D", GroupKind::Struct);
        data.push(StructureField::scalar("width", "uint32_t"));
        data.push(StructureField::scalar("height", "uint32_t"));

        let mut mapper = TypeMapper::with_defaults();
        let arguments = StructureGenerator::default()
            .generate(&data, &mut mapper)
            .unwrap();

        assert_eq!(arguments.class_name, "VkExtent2D");
        assert_eq!(arguments.fields.len(), 2);
        assert_eq!(arguments.fields[0].type_name, "int");
        assert_eq!(arguments.fields[0].name, "width");
        assert_eq!(
            arguments.layout_source,
            "MemoryLayout.structLayout(\n  JAVA_INT.withName(\"width\"),\n  JAVA_INT.withName(\"height\")\n)"
        );
        assert!(mapper.contains("VkExtent2D"));
    }

    #[test]
    fn test_padding_rendered_between_fields() {
        let mut data = StructureData::new("VkBufferView", GroupKind::Struct);
        data.push(StructureField::scalar("count", "uint32_t"));
        data.push(StructureField::scalar("pNext", "void*"));

        let mut mapper = TypeMapper::with_defaults();
        let arguments = StructureGenerator::default()
            .generate(&data, &mut mapper)
            .unwrap();
        assert_eq!(
            arguments.layout_source,
            "MemoryLayout.structLayout(\n  JAVA_INT.withName(\"count\"),\n  MemoryLayout.paddingLayout(4),\n  ADDRESS.withName(\"pNext\")\n)"
        );
    }

    #[test]
    fn test_dependency_order_enforced() {
        let mut data = StructureData::new("VkOuter", GroupKind::Struct);
        data.push(StructureField::scalar("inner", "VkNotYetDeclared"));

        let mut mapper = TypeMapper::with_defaults();
        let err = StructureGenerator::default()
            .generate(&data, &mut mapper)
            .unwrap_err();
        assert!(matches!(err, LayoutError::Type(_)));
        assert!(!mapper.contains("VkOuter"));
    }
}
