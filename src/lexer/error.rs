// Mon Feb 02 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("Token mismatch: expected '{expected}', found '{found}'")]
    TokenMismatch { expected: String, found: String },
    #[error("Unresolved symbol: {0}")]
    UnresolvedSymbol(String),
}
