// Wed Feb 04 2026 - Alex

use crate::lexer::{TokenError, Tokenizer};
use indexmap::IndexMap;

/// Parsed enumeration: insertion order is declaration order.
#[derive(Debug, Clone)]
pub struct EnumerationData {
    name: String,
    values: IndexMap<String, i32>,
}

impl EnumerationData {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            values: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn insert(&mut self, constant: &str, value: i32) {
        self.values.insert(constant.to_string(), value);
    }

    pub fn value(&self, constant: &str) -> Option<i32> {
        self.values.get(constant).copied()
    }

    pub fn values(&self) -> &IndexMap<String, i32> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Consumes `{ NAME = VALUE , ... }` positioned just after the enum tag.
///
/// Synonym constants (`X = Y`) resolve against the names already parsed
/// in this same enumeration; nothing else is in scope.
pub struct EnumerationParser;

impl EnumerationParser {
    pub fn parse(tokens: &mut Tokenizer, name: &str) -> Result<EnumerationData, TokenError> {
        let mut data = EnumerationData::new(name);
        tokens.skip("{")?;
        while !tokens.peek("}") {
            let constant = tokens.next()?;
            tokens.skip("=")?;
            let value = tokens.integer(|symbol| data.value(symbol).map(i64::from))?;
            data.insert(&constant, value as i32);
            if tokens.peek(",") {
                tokens.skip(",")?;
            }
        }
        tokens.skip("}")?;
        Ok(data)
    }
}
