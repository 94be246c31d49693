// Tue Feb 03 2026 - Alex

use crate::layout::alignment::FieldAlignment;
use crate::layout::error::LayoutError;
use crate::layout::model::{GroupKind, MemoryLayout};
use crate::layout::word::WordSize;
use crate::parser::StructureField;
use crate::types::{MappedField, NativeType, TypeMapper};

/// A finished structure layout with the per-field mapping that produced it.
#[derive(Debug, Clone)]
pub struct AssembledLayout {
    name: String,
    layout: MemoryLayout,
    fields: Vec<MappedField>,
}

impl AssembledLayout {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn layout(&self) -> &MemoryLayout {
        &self.layout
    }

    pub fn fields(&self) -> &[MappedField] {
        &self.fields
    }
}

/// Assembles struct/union memory layouts from parsed fields.
///
/// Structs get FieldAlignment-computed padding before each member and a
/// tail rounded to the aggregate's own natural alignment. Union members
/// all start at offset zero. The finished layout is registered in the
/// TypeMapper, but only once every field has resolved.
pub struct LayoutBuilder {
    word: WordSize,
}

impl LayoutBuilder {
    pub fn new(word: WordSize) -> Self {
        Self { word }
    }

    pub fn layout(
        &self,
        name: &str,
        kind: GroupKind,
        fields: &[StructureField],
        mapper: &mut TypeMapper,
    ) -> Result<AssembledLayout, LayoutError> {
        let mapped = fields
            .iter()
            .map(|field| mapper.map(field))
            .collect::<Result<Vec<_>, _>>()?;

        let group = match kind {
            GroupKind::Struct => self.assemble_struct(&mapped),
            GroupKind::Union => self.assemble_union(&mapped),
        };

        mapper.add(name, NativeType::structure(name, kind, group.clone()))?;

        Ok(AssembledLayout {
            name: name.to_string(),
            layout: group,
            fields: mapped,
        })
    }

    fn assemble_struct(&self, mapped: &[MappedField]) -> MemoryLayout {
        let word = self.word.as_usize();
        let mut members = Vec::with_capacity(mapped.len());
        let mut state = FieldAlignment::new(self.word);
        let mut natural = 1;

        for field in mapped {
            let padding = state.align(field.layout());
            if padding > 0 {
                members.push(MemoryLayout::padding(padding));
            }
            natural = natural.max(field.layout().natural_alignment(word));
            members.push(field.layout().clone().with_name(field.name()));
        }

        let size: usize = members.iter().map(MemoryLayout::byte_size).sum();
        let tail = (natural - size % natural) % natural;
        if tail > 0 {
            members.push(MemoryLayout::padding(tail));
        }

        MemoryLayout::group(GroupKind::Struct, members)
    }

    fn assemble_union(&self, mapped: &[MappedField]) -> MemoryLayout {
        let word = self.word.as_usize();
        let mut members: Vec<MemoryLayout> = mapped
            .iter()
            .map(|field| field.layout().clone().with_name(field.name()))
            .collect();

        let size = members
            .iter()
            .map(MemoryLayout::byte_size)
            .max()
            .unwrap_or(0);
        let natural = members
            .iter()
            .map(|member| member.natural_alignment(word))
            .max()
            .unwrap_or(1);
        let rounded = (size + natural - 1) / natural * natural;
        if rounded > size {
            members.push(MemoryLayout::padding(rounded));
        }

        MemoryLayout::group(GroupKind::Union, members)
    }
}

impl Default for LayoutBuilder {
    fn default() -> Self {
        Self::new(WordSize::default())
    }
}
