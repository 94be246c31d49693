// Mon Feb 02 2026 - Alex

use crate::layout::LayoutError;
use crate::lexer::TokenError;
use crate::output::OutputError;
use crate::types::TypeError;
use thiserror::Error;

/// Aggregate error for a whole generation run; each component keeps its
/// own error type underneath.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error(transparent)]
    Type(#[from] TypeError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Output(#[from] OutputError),
}
