// Tue Feb 03 2026 - Alex

use crate::types::TypeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid word size: {0}")]
    InvalidWordSize(usize),
    #[error("Missing member name in aggregate '{0}'")]
    MissingMemberName(String),
    #[error(transparent)]
    Type(#[from] TypeError),
}
