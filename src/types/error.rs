// Thu Feb 05 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TypeError {
    #[error("Unknown type: {0}")]
    UnknownType(String),
    #[error("Duplicate type: {0}")]
    DuplicateType(String),
    #[error("Missing type definition: {0}")]
    MissingTypeDefinition(String),
}
