// Thu Feb 05 2026 - Alex

pub mod error;
pub mod native;
pub mod plural;
pub mod registry;
pub mod rules;

pub use error::TypeError;
pub use native::{MappedField, NativeType, TypeCategory};
pub use plural::{default_plurality, PluralityRule};
pub use registry::TypeMapper;
pub use rules::{FieldQuery, Rule};
