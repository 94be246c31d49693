// Tue Feb 03 2026 - Alex

use crate::layout::error::LayoutError;
use std::fmt;

/// Maximum alignment boundary used for padding calculations.
///
/// Always a power of two; 8 on the 64-bit ABIs the bindings target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordSize {
    value: usize,
}

impl WordSize {
    pub fn new(value: usize) -> Result<Self, LayoutError> {
        if value == 0 || !value.is_power_of_two() {
            return Err(LayoutError::InvalidWordSize(value));
        }
        Ok(Self { value })
    }

    pub fn as_usize(&self) -> usize {
        self.value
    }
}

impl Default for WordSize {
    fn default() -> Self {
        Self { value: 8 }
    }
}

impl fmt::Display for WordSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
