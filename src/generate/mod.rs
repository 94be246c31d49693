// Fri Feb 06 2026 - Alex

pub mod arguments;
pub mod enumeration;
pub mod naming;
pub mod structure;

pub use arguments::{
    EnumerationArguments, EnumerationConstant, FieldDeclaration, StructureArguments,
};
pub use enumeration::EnumerationGenerator;
pub use structure::StructureGenerator;
