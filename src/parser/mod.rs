// Wed Feb 04 2026 - Alex

pub mod enumeration;
pub mod field;
pub mod header;
pub mod structure;

pub use enumeration::{EnumerationData, EnumerationParser};
pub use field::StructureField;
pub use header::{Declaration, HeaderParser};
pub use structure::{StructureData, StructureParser};
