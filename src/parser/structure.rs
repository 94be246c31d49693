// Wed Feb 04 2026 - Alex

use crate::layout::GroupKind;
use crate::lexer::{TokenError, Tokenizer};
use crate::parser::field::StructureField;

/// Parsed struct/union declaration with fields in declaration order.
#[derive(Debug, Clone)]
pub struct StructureData {
    name: String,
    kind: GroupKind,
    fields: Vec<StructureField>,
}

impl StructureData {
    pub fn new(name: &str, kind: GroupKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            fields: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    pub fn push(&mut self, field: StructureField) {
        self.fields.push(field);
    }

    pub fn fields(&self) -> &[StructureField] {
        &self.fields
    }
}

/// Consumes `{ [const] TYPE [*[*]] NAME [[LENGTH]]; ... }` positioned just
/// after the struct/union tag.
///
/// `const` qualifiers are dropped wherever they appear, so
/// `char* const*` folds to `"char**"`. Symbolic array lengths resolve
/// through the injected `lengths` closure.
pub struct StructureParser;

impl StructureParser {
    pub fn parse<R>(
        tokens: &mut Tokenizer,
        name: &str,
        kind: GroupKind,
        lengths: R,
    ) -> Result<StructureData, TokenError>
    where
        R: Fn(&str) -> Option<i64>,
    {
        let mut data = StructureData::new(name, kind);
        tokens.skip("{")?;
        while !tokens.peek("}") {
            data.push(Self::field(tokens, &lengths)?);
        }
        tokens.skip("}")?;
        Ok(data)
    }

    fn field<R>(tokens: &mut Tokenizer, lengths: &R) -> Result<StructureField, TokenError>
    where
        R: Fn(&str) -> Option<i64>,
    {
        if tokens.peek("const") {
            tokens.skip("const")?;
        }
        let base = tokens.next()?;

        let mut depth = 0;
        loop {
            if tokens.peek("*") {
                tokens.skip("*")?;
                depth += 1;
            } else if tokens.peek("const") {
                tokens.skip("const")?;
            } else {
                break;
            }
        }

        let field_name = tokens.next()?;

        let mut array_length = 0;
        if tokens.peek("[") {
            tokens.skip("[")?;
            array_length = tokens.integer(|symbol| lengths(symbol))? as usize;
            tokens.skip("]")?;
        }
        tokens.skip(";")?;

        let type_name = format!("{}{}", base, "*".repeat(depth));
        Ok(StructureField::new(&field_name, &type_name, array_length))
    }
}
