// Fri Feb 06 2026 - Alex

pub mod error;
pub mod template;
pub mod writer;

pub use error::OutputError;
pub use template::Template;
pub use writer::SourceWriter;
