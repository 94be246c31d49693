// Tue Feb 03 2026 - Alex

pub mod alignment;
pub mod builder;
pub mod error;
pub mod model;
pub mod word;
pub mod writer;

pub use alignment::FieldAlignment;
pub use builder::{AssembledLayout, LayoutBuilder};
pub use error::LayoutError;
pub use model::{Carrier, GroupKind, MemoryLayout, ADDRESS_SIZE};
pub use word::WordSize;
pub use writer::LayoutWriter;
