// Thu Feb 05 2026 - Alex

use crate::layout::{Carrier, MemoryLayout};
use crate::parser::StructureField;
use crate::types::error::TypeError;
use crate::types::native::{MappedField, TypeCategory};
use crate::types::registry::TypeMapper;

/// Field names that always carry an opaque binary blob, whatever the
/// declared element width.
const RESERVED_BLOB_FIELDS: &[&str] = &["pCode", "pData"];

/// Tagged view of one field, the input every mapping rule matches on.
#[derive(Debug, Clone, Copy)]
pub struct FieldQuery<'a> {
    pub base: &'a str,
    pub depth: usize,
    pub array_length: usize,
    pub name: &'a str,
}

impl<'a> FieldQuery<'a> {
    pub fn new(field: &'a StructureField) -> Self {
        Self {
            base: field.base_type(),
            depth: field.pointer_depth(),
            array_length: field.array_length(),
            name: field.name(),
        }
    }
}

pub type Rule = fn(&mut TypeMapper, &FieldQuery) -> Result<Option<MappedField>, TypeError>;

/// The resolution chain, evaluated strictly in order. First match wins.
pub const RULES: &[(&str, Rule)] = &[
    ("primitive-array", primitive_array),
    ("binary-blob", binary_blob),
    ("string-and-opaque-pointer", string_and_opaque_pointer),
    ("handle-pointer", handle_pointer),
    ("primitive-pointer", primitive_pointer),
    ("structure-pointer", structure_pointer),
    ("embedded-structure", embedded_structure),
    ("enumeration-field", enumeration_field),
    ("enumeration-pointer", enumeration_pointer),
    ("registered-scalar", registered_scalar),
];

fn flags_convention(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    lower.ends_with("flags") || lower.ends_with("mask")
}

/// `float[4]` and friends; `char[N]` becomes a String over raw bytes.
fn primitive_array(
    mapper: &mut TypeMapper,
    query: &FieldQuery,
) -> Result<Option<MappedField>, TypeError> {
    if query.array_length == 0 || query.depth != 0 {
        return Ok(None);
    }
    let carrier = match mapper.resolve(query.base) {
        Some(native) if native.category() == TypeCategory::Primitive => match native.carrier() {
            Some(carrier) => carrier,
            None => return Ok(None),
        },
        _ => return Ok(None),
    };

    if query.base == "char" {
        let layout = MemoryLayout::sequence(
            query.array_length,
            MemoryLayout::value(Carrier::Byte),
        );
        return Ok(Some(MappedField::new(query.name, "String", layout)));
    }

    let layout = MemoryLayout::sequence(query.array_length, MemoryLayout::value(carrier));
    let type_name = format!("{}[]", carrier.type_name());
    Ok(Some(MappedField::new(query.name, &type_name, layout)))
}

/// `pCode`/`pData` pointers are raw byte arrays by convention.
fn binary_blob(
    _mapper: &mut TypeMapper,
    query: &FieldQuery,
) -> Result<Option<MappedField>, TypeError> {
    if query.depth == 0 || !RESERVED_BLOB_FIELDS.contains(&query.name) {
        return Ok(None);
    }
    Ok(Some(MappedField::new(
        query.name,
        "byte[]",
        MemoryLayout::address(),
    )))
}

fn string_and_opaque_pointer(
    _mapper: &mut TypeMapper,
    query: &FieldQuery,
) -> Result<Option<MappedField>, TypeError> {
    let mapped = match (query.base, query.depth) {
        ("char", 1) => Some(MappedField::new(query.name, "String", MemoryLayout::address())),
        ("char", 2) => Some(MappedField::new(query.name, "String[]", MemoryLayout::address())),
        ("void", 1) => Some(MappedField::new(
            query.name,
            "MemorySegment",
            MemoryLayout::address(),
        )),
        _ => None,
    };
    Ok(mapped)
}

fn handle_pointer(
    mapper: &mut TypeMapper,
    query: &FieldQuery,
) -> Result<Option<MappedField>, TypeError> {
    if query.depth != 1 {
        return Ok(None);
    }
    match mapper.resolve(query.base) {
        Some(native) if native.category() == TypeCategory::Handle => {}
        _ => return Ok(None),
    }
    let type_name = if mapper.is_plural(query.name) {
        "MemorySegment[]"
    } else {
        "MemorySegment"
    };
    Ok(Some(MappedField::new(
        query.name,
        type_name,
        MemoryLayout::address(),
    )))
}

fn primitive_pointer(
    mapper: &mut TypeMapper,
    query: &FieldQuery,
) -> Result<Option<MappedField>, TypeError> {
    if query.depth != 1 {
        return Ok(None);
    }
    let carrier = match mapper.resolve(query.base) {
        Some(native) if native.category() == TypeCategory::Primitive => match native.carrier() {
            Some(carrier) => carrier,
            None => return Ok(None),
        },
        _ => return Ok(None),
    };
    let type_name = format!("{}[]", carrier.type_name());
    Ok(Some(MappedField::new(
        query.name,
        &type_name,
        MemoryLayout::address(),
    )))
}

fn structure_pointer(
    mapper: &mut TypeMapper,
    query: &FieldQuery,
) -> Result<Option<MappedField>, TypeError> {
    if query.depth != 1 {
        return Ok(None);
    }
    let structure_name = match mapper.resolve(query.base) {
        Some(native)
            if matches!(
                native.category(),
                TypeCategory::Structure | TypeCategory::Union
            ) =>
        {
            native.name().to_string()
        }
        _ => return Ok(None),
    };
    let type_name = if mapper.is_plural(query.name) {
        format!("{}[]", structure_name)
    } else {
        structure_name
    };
    Ok(Some(MappedField::new(
        query.name,
        &type_name,
        MemoryLayout::address(),
    )))
}

/// Non-pointer structure fields embed the structure's own layout.
fn embedded_structure(
    mapper: &mut TypeMapper,
    query: &FieldQuery,
) -> Result<Option<MappedField>, TypeError> {
    if query.depth != 0 {
        return Ok(None);
    }
    let (structure_name, layout) = match mapper.resolve(query.base) {
        Some(native)
            if matches!(
                native.category(),
                TypeCategory::Structure | TypeCategory::Union
            ) =>
        {
            (native.name().to_string(), native.layout().clone())
        }
        _ => return Ok(None),
    };
    if query.array_length > 0 {
        let type_name = format!("{}[]", structure_name);
        let layout = MemoryLayout::sequence(query.array_length, layout);
        return Ok(Some(MappedField::new(query.name, &type_name, layout)));
    }
    Ok(Some(MappedField::new(query.name, &structure_name, layout)))
}

fn enumeration_field(
    mapper: &mut TypeMapper,
    query: &FieldQuery,
) -> Result<Option<MappedField>, TypeError> {
    if query.depth != 0 {
        return Ok(None);
    }
    let enum_name = match mapper.resolve(query.base) {
        Some(native)
            if matches!(
                native.category(),
                TypeCategory::Enumeration | TypeCategory::Bitmask
            ) =>
        {
            native.name().to_string()
        }
        Some(_) => return Ok(None),
        None => {
            // Flags-convention names must exist by the time a field uses
            // them; anything else falls through to the later rules.
            if query.base.ends_with("FlagBits") || query.base.ends_with("Flags") {
                return Err(TypeError::MissingTypeDefinition(query.base.to_string()));
            }
            return Ok(None);
        }
    };
    if query.array_length > 0 {
        let layout = MemoryLayout::sequence(
            query.array_length,
            MemoryLayout::value(Carrier::Int),
        );
        return Ok(Some(MappedField::new(query.name, "int[]", layout)));
    }
    if flags_convention(query.name) {
        let type_name = format!("EnumerationMask<{}>", enum_name);
        return Ok(Some(MappedField::new(
            query.name,
            &type_name,
            MemoryLayout::value(Carrier::Int),
        )));
    }
    Ok(Some(MappedField::new(
        query.name,
        "int",
        MemoryLayout::value(Carrier::Int),
    )))
}

fn enumeration_pointer(
    mapper: &mut TypeMapper,
    query: &FieldQuery,
) -> Result<Option<MappedField>, TypeError> {
    if query.depth != 1 {
        return Ok(None);
    }
    match mapper.resolve(query.base) {
        Some(native)
            if matches!(
                native.category(),
                TypeCategory::Enumeration | TypeCategory::Bitmask
            ) => {}
        _ => return Ok(None),
    }
    Ok(Some(MappedField::new(
        query.name,
        "int[]",
        MemoryLayout::address(),
    )))
}

/// Plain scalar of an already-registered primitive or handle.
fn registered_scalar(
    mapper: &mut TypeMapper,
    query: &FieldQuery,
) -> Result<Option<MappedField>, TypeError> {
    if query.depth != 0 || query.array_length != 0 {
        return Ok(None);
    }
    let mapped = match mapper.resolve(query.base) {
        Some(native)
            if matches!(
                native.category(),
                TypeCategory::Primitive | TypeCategory::Handle
            ) =>
        {
            MappedField::new(query.name, native.name(), native.layout().clone())
        }
        _ => return Ok(None),
    };
    Ok(Some(mapped))
}
