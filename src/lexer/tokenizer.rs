// Mon Feb 02 2026 - Alex

use crate::lexer::error::TokenError;

/// Preprocessor block dropped in its entirety, prototypes are never bound.
const GUARDED_DEFINE: &str = "VK_NO_PROTOTYPES";

const PUNCTUATION: &[char] = &['{', '}', '[', ']', '(', ')', ';', ',', '*', '='];

/// Splits header text into whitespace/punctuation-delimited tokens.
///
/// Line comments, block comments and the `#ifndef VK_NO_PROTOTYPES` guard
/// block are filtered out before the cursor ever sees them.
pub struct Tokenizer {
    tokens: Vec<String>,
    cursor: usize,
}

impl Tokenizer {
    pub fn new(source: &str) -> Self {
        let tokens = filter_guarded(lex(source));
        Self { tokens, cursor: 0 }
    }

    pub fn has_next(&self) -> bool {
        self.cursor < self.tokens.len()
    }

    pub fn next(&mut self) -> Result<String, TokenError> {
        let token = self
            .tokens
            .get(self.cursor)
            .cloned()
            .ok_or(TokenError::UnexpectedEndOfInput)?;
        self.cursor += 1;
        Ok(token)
    }

    /// Tests the upcoming token without consuming it.
    pub fn peek(&self, expected: &str) -> bool {
        self.tokens.get(self.cursor).map(String::as_str) == Some(expected)
    }

    /// Consumes the upcoming token, which must match `expected`.
    pub fn skip(&mut self, expected: &str) -> Result<(), TokenError> {
        let found = self.next()?;
        if found != expected {
            return Err(TokenError::TokenMismatch {
                expected: expected.to_string(),
                found,
            });
        }
        Ok(())
    }

    /// Parses the next token as an integer literal.
    ///
    /// Decimal (optionally negative), `0x` hex, `0o` octal and `0b` binary
    /// forms are handled directly, with `_` separators ignored. Any other
    /// token is handed to `mapper` for symbolic resolution.
    pub fn integer<F>(&mut self, mapper: F) -> Result<i64, TokenError>
    where
        F: Fn(&str) -> Option<i64>,
    {
        let token = self.next()?;
        if looks_numeric(&token) {
            return parse_literal(&token).ok_or(TokenError::UnresolvedSymbol(token));
        }
        mapper(&token).ok_or(TokenError::UnresolvedSymbol(token))
    }
}

fn looks_numeric(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    digits.chars().next().map(|c| c.is_ascii_digit()).unwrap_or(false)
}

fn parse_literal(token: &str) -> Option<i64> {
    let cleaned: String = token.chars().filter(|&c| c != '_').collect();
    let (negative, body) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.as_str()),
    };

    let value = if let Some(hex) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16).ok()?
    } else if let Some(oct) = body.strip_prefix("0o").or_else(|| body.strip_prefix("0O")) {
        i64::from_str_radix(oct, 8).ok()?
    } else if let Some(bin) = body.strip_prefix("0b").or_else(|| body.strip_prefix("0B")) {
        i64::from_str_radix(bin, 2).ok()?
    } else {
        body.parse::<i64>().ok()?
    };

    Some(if negative { -value } else { value })
}

fn lex(source: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut chars = source.chars().peekable();
    let mut current = String::new();

    while let Some(c) = chars.next() {
        if c == '/' && chars.peek() == Some(&'/') {
            flush(&mut current, &mut tokens);
            for next in chars.by_ref() {
                if next == '\n' {
                    break;
                }
            }
            continue;
        }
        if c == '/' && chars.peek() == Some(&'*') {
            flush(&mut current, &mut tokens);
            chars.next();
            let mut previous = ' ';
            for next in chars.by_ref() {
                if previous == '*' && next == '/' {
                    break;
                }
                previous = next;
            }
            continue;
        }
        if c.is_whitespace() {
            flush(&mut current, &mut tokens);
            continue;
        }
        if PUNCTUATION.contains(&c) {
            flush(&mut current, &mut tokens);
            tokens.push(c.to_string());
            continue;
        }
        current.push(c);
    }
    flush(&mut current, &mut tokens);
    tokens
}

fn flush(current: &mut String, tokens: &mut Vec<String>) {
    if !current.is_empty() {
        tokens.push(std::mem::take(current));
    }
}

/// Drops `#ifndef VK_NO_PROTOTYPES` blocks, tracking nested conditionals.
fn filter_guarded(tokens: Vec<String>) -> Vec<String> {
    let mut filtered = Vec::with_capacity(tokens.len());
    let mut iter = tokens.into_iter().peekable();

    while let Some(token) = iter.next() {
        let guarded = token == "#ifndef"
            && iter
                .peek()
                .map(|next| next.as_str() == GUARDED_DEFINE)
                .unwrap_or(false);
        if !guarded {
            filtered.push(token);
            continue;
        }
        iter.next();
        let mut depth = 1usize;
        for inner in iter.by_ref() {
            if inner.starts_with("#if") {
                depth += 1;
            } else if inner == "#endif" {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
        }
    }
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_attached_punctuation() {
        let mut tokens = Tokenizer::new("uint32_t width;");
        assert_eq!(tokens.next().unwrap(), "uint32_t");
        assert_eq!(tokens.next().unwrap(), "width");
        assert_eq!(tokens.next().unwrap(), ";");
        assert!(!tokens.has_next());
    }

    #[test]
    fn test_filters_comments() {
        let mut tokens = Tokenizer::new("a // line comment\n/* block\ncomment */ b");
        assert_eq!(tokens.next().unwrap(), "a");
        assert_eq!(tokens.next().unwrap(), "b");
        assert!(!tokens.has_next());
    }

    #[test]
    fn test_filters_prototype_guard() {
        let source = "before #ifndef VK_NO_PROTOTYPES dropped #ifdef NESTED inner #endif also #endif after";
        let mut tokens = Tokenizer::new(source);
        assert_eq!(tokens.next().unwrap(), "before");
        assert_eq!(tokens.next().unwrap(), "after");
        assert!(!tokens.has_next());
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut tokens = Tokenizer::new("{ }");
        assert!(tokens.peek("{"));
        assert!(tokens.peek("{"));
        tokens.skip("{").unwrap();
        assert!(tokens.peek("}"));
    }

    #[test]
    fn test_skip_mismatch() {
        let mut tokens = Tokenizer::new("}");
        let err = tokens.skip("{").unwrap_err();
        assert!(matches!(err, TokenError::TokenMismatch { .. }));
    }

    #[test]
    fn test_exhausted_stream() {
        let mut tokens = Tokenizer::new("");
        assert!(matches!(
            tokens.next().unwrap_err(),
            TokenError::UnexpectedEndOfInput
        ));
        assert!(matches!(
            tokens.skip(";").unwrap_err(),
            TokenError::UnexpectedEndOfInput
        ));
    }

    #[test]
    fn test_integer_radixes() {
        let mut tokens = Tokenizer::new("10 -3 0x7FFFFFFF 0o17 0b1010 1_000_000");
        let none = |_: &str| None;
        assert_eq!(tokens.integer(none).unwrap(), 10);
        assert_eq!(tokens.integer(none).unwrap(), -3);
        assert_eq!(tokens.integer(none).unwrap(), i32::MAX as i64);
        assert_eq!(tokens.integer(none).unwrap(), 15);
        assert_eq!(tokens.integer(none).unwrap(), 10);
        assert_eq!(tokens.integer(none).unwrap(), 1_000_000);
    }

    #[test]
    fn test_integer_delegates_to_mapper() {
        let mut tokens = Tokenizer::new("VK_FILTER_LINEAR MISSING");
        let mapper = |name: &str| (name == "VK_FILTER_LINEAR").then_some(1);
        assert_eq!(tokens.integer(mapper).unwrap(), 1);
        let err = tokens.integer(mapper).unwrap_err();
        assert!(matches!(err, TokenError::UnresolvedSymbol(name) if name == "MISSING"));
    }
}
