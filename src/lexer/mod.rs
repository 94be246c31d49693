// Mon Feb 02 2026 - Alex

pub mod error;
pub mod tokenizer;

pub use error::TokenError;
pub use tokenizer::Tokenizer;
