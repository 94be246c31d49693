// Mon Feb 02 2026 - Alex

#![allow(dead_code)]

pub mod config;
pub mod error;
pub mod generate;
pub mod layout;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod types;

pub use config::Config;
pub use error::GeneratorError;
pub use generate::{EnumerationGenerator, StructureGenerator};
pub use layout::{FieldAlignment, LayoutBuilder, LayoutWriter, MemoryLayout, WordSize};
pub use lexer::Tokenizer;
pub use output::{SourceWriter, Template};
pub use parser::{Declaration, EnumerationParser, HeaderParser, StructureParser};
pub use types::TypeMapper;
