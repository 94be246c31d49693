// Tue Feb 03 2026 - Alex

use crate::layout::model::MemoryLayout;
use crate::layout::word::WordSize;

/// Tracks the running byte offset within a structure under assembly.
///
/// The offset is kept modulo the word size; it never reaches the word
/// size itself. Reset per structure by constructing a fresh instance.
#[derive(Debug, Clone)]
pub struct FieldAlignment {
    word: WordSize,
    offset: usize,
}

impl FieldAlignment {
    pub fn new(word: WordSize) -> Self {
        Self { word, offset: 0 }
    }

    /// Padding required before `layout` so its start satisfies its natural
    /// alignment. Advances the running offset by padding plus layout size.
    pub fn align(&mut self, layout: &MemoryLayout) -> usize {
        let word = self.word.as_usize();
        let natural = layout.natural_alignment(word);
        let padding = (natural - self.offset % natural) % natural;
        self.offset = (self.offset + padding + layout.byte_size()) % word;
        padding
    }

    /// Current running offset, modulo the word size.
    pub fn alignment(&self) -> usize {
        self.offset
    }

    /// Trailing bytes still owed to reach the next word boundary.
    pub fn padding(&self) -> usize {
        let word = self.word.as_usize();
        (word - self.offset) % word
    }
}

impl Default for FieldAlignment {
    fn default() -> Self {
        Self::new(WordSize::default())
    }
}
