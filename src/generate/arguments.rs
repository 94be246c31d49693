// Fri Feb 06 2026 - Alex

use serde::Serialize;

/// One renamed enum constant; values stay unsigned 32-bit.
#[derive(Debug, Clone, Serialize)]
pub struct EnumerationConstant {
    pub name: String,
    pub value: u32,
}

/// Template arguments for one generated enumeration source file.
#[derive(Debug, Clone, Serialize)]
pub struct EnumerationArguments {
    pub class_name: String,
    pub flags_name: Option<String>,
    pub constants: Vec<EnumerationConstant>,
}

/// One field declaration in a generated structure class.
#[derive(Debug, Clone, Serialize)]
pub struct FieldDeclaration {
    pub type_name: String,
    pub name: String,
}

/// Template arguments for one generated structure source file.
#[derive(Debug, Clone, Serialize)]
pub struct StructureArguments {
    pub class_name: String,
    pub fields: Vec<FieldDeclaration>,
    pub layout_source: String,
}
