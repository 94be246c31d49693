// Wed Feb 04 2026 - Alex

use crate::layout::GroupKind;
use crate::lexer::{TokenError, Tokenizer};
use crate::parser::enumeration::{EnumerationData, EnumerationParser};
use crate::parser::structure::{StructureData, StructureParser};

/// One top-level `typedef` declaration, in source order.
#[derive(Debug, Clone)]
pub enum Declaration {
    Enumeration(EnumerationData),
    Structure(StructureData),
    Alias { existing: String, alias: String },
}

/// Walks a header and dispatches the restricted `typedef` grammar:
/// `typedef enum N { .. } N;`, `typedef struct|union N { .. } N;` and
/// `typedef EXISTING ALIAS;`.
pub struct HeaderParser;

impl HeaderParser {
    pub fn parse<R>(source: &str, lengths: R) -> Result<Vec<Declaration>, TokenError>
    where
        R: Fn(&str) -> Option<i64>,
    {
        let mut tokens = Tokenizer::new(source);
        let mut declarations = Vec::new();

        while tokens.has_next() {
            tokens.skip("typedef")?;
            let keyword = tokens.next()?;
            match keyword.as_str() {
                "enum" => {
                    let tag = tokens.next()?;
                    let data = EnumerationParser::parse(&mut tokens, &tag)?;
                    Self::trailing_name(&mut tokens)?;
                    declarations.push(Declaration::Enumeration(data));
                }
                "struct" | "union" => {
                    let kind = if keyword == "struct" {
                        GroupKind::Struct
                    } else {
                        GroupKind::Union
                    };
                    let tag = tokens.next()?;
                    let data = StructureParser::parse(&mut tokens, &tag, kind, &lengths)?;
                    Self::trailing_name(&mut tokens)?;
                    declarations.push(Declaration::Structure(data));
                }
                existing => {
                    let alias = tokens.next()?;
                    tokens.skip(";")?;
                    declarations.push(Declaration::Alias {
                        existing: existing.to_string(),
                        alias,
                    });
                }
            }
        }

        Ok(declarations)
    }

    fn trailing_name(tokens: &mut Tokenizer) -> Result<(), TokenError> {
        tokens.next()?;
        tokens.skip(";")
    }
}
