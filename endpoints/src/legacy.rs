//! Compatibility shim for endpoint listings that are not JSON.
//!
//! Some Ontodocker deployments serve `/api/v1/endpoints`
//! as the Python `repr` of a list, e.g. `['https://h/api/v1/jena/ds/sparql']`,
//! which is not valid JSON because of its single-quoted strings.
//! This module parses that literal syntax
//! (strings, numbers, `None`, `True`, `False`, lists and tuples) and nothing more.
//!
//! It is only reached through [`parse_endpoints_response`](crate::parse_endpoints_response)
//! when JSON decoding fails,
//! and can be removed once no such deployment remains.

use crate::FormatError;

const MAX_DEPTH: usize = 64;

/// A value of the literal syntax understood by [`parse_literal`].
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    /// A string, after escape processing and concatenation of adjacent string literals
    Str(String),
    /// A number, kept in its source form
    Number(String),
    /// `True` or `False`
    Bool(bool),
    /// `None`
    Null,
    /// `[...]`
    List(Vec<Literal>),
    /// `(...)`
    Tuple(Vec<Literal>),
}

impl Literal {
    /// A short name of the kind of this value, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Literal::Str(_) => "str",
            Literal::Number(_) => "number",
            Literal::Bool(_) => "bool",
            Literal::Null => "None",
            Literal::List(_) => "list",
            Literal::Tuple(_) => "tuple",
        }
    }
}

/// Parse `text` as a single literal value, surrounded by optional whitespace.
pub fn parse_literal(text: &str) -> Result<Literal, FormatError> {
    let mut parser = Parser { src: text, pos: 0 };
    parser.skip_ws();
    let value = parser.value(0)?;
    parser.skip_ws();
    if parser.peek().is_some() {
        return parser.error("unexpected trailing characters");
    }
    Ok(value)
}

/// Parse `text` as a literal list of strings.
///
/// # Errors
///
/// [`FormatError::Literal`] if `text` is not a valid literal,
/// [`FormatError::NotAListOfStrings`] if it is, but not a list of strings.
pub fn parse_string_list(text: &str) -> Result<Vec<String>, FormatError> {
    match parse_literal(text)? {
        Literal::List(items) => items
            .into_iter()
            .map(|item| match item {
                Literal::Str(s) => Ok(s),
                other => Err(FormatError::NotAListOfStrings(format!(
                    "list containing a {}",
                    other.kind()
                ))),
            })
            .collect(),
        other => Err(FormatError::NotAListOfStrings(other.kind().into())),
    }
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.src[self.pos..].chars().nth(n)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn error<T>(&self, reason: impl Into<String>) -> Result<T, FormatError> {
        Err(FormatError::Literal {
            position: self.pos,
            reason: reason.into(),
        })
    }

    fn at_string_start(&self) -> bool {
        match self.peek() {
            Some('\'' | '"') => true,
            Some('r' | 'R' | 'u' | 'U' | 'b' | 'B') => matches!(self.peek_nth(1), Some('\'' | '"')),
            _ => false,
        }
    }

    fn value(&mut self, depth: usize) -> Result<Literal, FormatError> {
        if depth > MAX_DEPTH {
            return self.error("literal nested too deeply");
        }
        match self.peek() {
            None => self.error("unexpected end of input"),
            Some('[') => {
                self.bump();
                let (items, _) = self.sequence(']', depth)?;
                Ok(Literal::List(items))
            }
            Some('(') => {
                self.bump();
                let (mut items, trailing_comma) = self.sequence(')', depth)?;
                // `(x)` is just a parenthesized value, `(x,)` is a tuple
                if items.len() == 1 && !trailing_comma {
                    Ok(items.remove(0))
                } else {
                    Ok(Literal::Tuple(items))
                }
            }
            Some(_) if self.at_string_start() => self.strings(),
            Some(c) if c.is_ascii_digit() || matches!(c, '+' | '-' | '.') => self.number(),
            Some(c) if c.is_alphabetic() || c == '_' => self.name(),
            Some(c) => self.error(format!("unexpected character {c:?}")),
        }
    }

    /// Items up to `close`; the boolean tells whether the last item was followed by a comma.
    fn sequence(&mut self, close: char, depth: usize) -> Result<(Vec<Literal>, bool), FormatError> {
        let mut items = Vec::new();
        let mut trailing_comma = false;
        loop {
            self.skip_ws();
            if self.eat(close) {
                return Ok((items, trailing_comma));
            }
            items.push(self.value(depth + 1)?);
            self.skip_ws();
            trailing_comma = self.eat(',');
            if !trailing_comma {
                if self.eat(close) {
                    return Ok((items, false));
                }
                return self.error(format!("expected ',' or '{close}'"));
            }
        }
    }

    fn strings(&mut self) -> Result<Literal, FormatError> {
        let mut value = self.string()?;
        loop {
            self.skip_ws();
            if !self.at_string_start() {
                return Ok(Literal::Str(value));
            }
            value.push_str(&self.string()?);
        }
    }

    fn string(&mut self) -> Result<String, FormatError> {
        let mut raw = false;
        if let Some(prefix) = self.peek().filter(|c| !matches!(c, '\'' | '"')) {
            match prefix.to_ascii_lowercase() {
                'r' => raw = true,
                'u' => {}
                _ => return self.error("bytes literals are not supported"),
            }
            self.bump();
        }
        let quote = match self.bump() {
            Some(q @ ('\'' | '"')) => q,
            _ => return self.error("expected a quote"),
        };
        let triple = self.peek() == Some(quote) && self.peek_nth(1) == Some(quote);
        if triple {
            self.bump();
            self.bump();
        }

        let mut out = String::new();
        loop {
            let Some(c) = self.bump() else {
                return self.error("unterminated string");
            };
            match c {
                c if c == quote => {
                    if !triple {
                        return Ok(out);
                    }
                    if self.peek() == Some(quote) && self.peek_nth(1) == Some(quote) {
                        self.bump();
                        self.bump();
                        return Ok(out);
                    }
                    out.push(c);
                }
                '\n' | '\r' if !triple => return self.error("end of line in string"),
                '\\' if raw => {
                    // a backslash still protects the next character, and both are kept
                    out.push('\\');
                    if let Some(next) = self.bump() {
                        out.push(next);
                    }
                }
                '\\' => self.escape(&mut out)?,
                c => out.push(c),
            }
        }
    }

    fn escape(&mut self, out: &mut String) -> Result<(), FormatError> {
        let Some(c) = self.bump() else {
            return self.error("unterminated string");
        };
        match c {
            '\n' => {}
            '\r' => {
                self.eat('\n');
            }
            '\\' | '\'' | '"' => out.push(c),
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'a' => out.push('\x07'),
            'b' => out.push('\x08'),
            'f' => out.push('\x0c'),
            'v' => out.push('\x0b'),
            '0'..='7' => {
                let mut code = c.to_digit(8).unwrap_or_default();
                for _ in 0..2 {
                    match self.peek().and_then(|d| d.to_digit(8)) {
                        Some(d) => {
                            code = code * 8 + d;
                            self.bump();
                        }
                        None => break,
                    }
                }
                self.push_code_point(code, out)?;
            }
            'x' => self.hex_escape(2, out)?,
            'u' => self.hex_escape(4, out)?,
            'U' => self.hex_escape(8, out)?,
            'N' => return self.error("named unicode escapes are not supported"),
            other => {
                out.push('\\');
                out.push(other);
            }
        }
        Ok(())
    }

    fn hex_escape(&mut self, len: usize, out: &mut String) -> Result<(), FormatError> {
        let mut code = 0_u32;
        for _ in 0..len {
            let Some(d) = self.peek().and_then(|c| c.to_digit(16)) else {
                return self.error(format!("truncated escape, expected {len} hex digits"));
            };
            code = code * 16 + d;
            self.bump();
        }
        self.push_code_point(code, out)
    }

    fn push_code_point(&self, code: u32, out: &mut String) -> Result<(), FormatError> {
        match char::from_u32(code) {
            Some(c) => {
                out.push(c);
                Ok(())
            }
            None => self.error(format!("invalid code point U+{code:X}")),
        }
    }

    fn number(&mut self) -> Result<Literal, FormatError> {
        let start = self.pos;
        if matches!(self.peek(), Some('+' | '-')) {
            self.bump();
        }
        while let Some(c) = self.peek() {
            let after_exponent = matches!(self.src[start..self.pos].chars().last(), Some('e' | 'E'));
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_') || (matches!(c, '+' | '-') && after_exponent) {
                self.bump();
            } else {
                break;
            }
        }
        let text = &self.src[start..self.pos];
        let valid = is_number(text.trim_start_matches(['+', '-']));
        if valid {
            Ok(Literal::Number(text.to_string()))
        } else {
            Err(FormatError::Literal {
                position: start,
                reason: format!("invalid number {text:?}"),
            })
        }
    }

    fn name(&mut self) -> Result<Literal, FormatError> {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.bump();
        }
        match &self.src[start..self.pos] {
            "None" => Ok(Literal::Null),
            "True" => Ok(Literal::Bool(true)),
            "False" => Ok(Literal::Bool(false)),
            name => Err(FormatError::Literal {
                position: start,
                reason: format!("{name:?} is not a literal"),
            }),
        }
    }
}

/// Whether `text` (without sign) is an integer or float literal:
/// no leading zero in non-zero decimal integers,
/// and `_` only between two digits (or right after a radix prefix).
fn is_number(text: &str) -> bool {
    let radix = match text.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let body = &text[2..];
        return digit_groups(body.strip_prefix('_').unwrap_or(body), |c| c.is_digit(radix));
    }
    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(i) => (&text[..i], Some(&text[i + 1..])),
        None => (text, None),
    };
    let (int, frac) = match mantissa.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (mantissa, None),
    };
    let decimal = |part: &str| digit_groups(part, |c| c.is_ascii_digit());
    let int_ok = if int.is_empty() {
        frac.is_some_and(|f| !f.is_empty())
    } else {
        decimal(int)
    };
    let frac_ok = frac.map_or(true, |f| f.is_empty() || decimal(f));
    let exp_ok = exponent.map_or(true, |e| decimal(e.strip_prefix(['+', '-']).unwrap_or(e)));
    let leading_zero = frac.is_none()
        && exponent.is_none()
        && int.starts_with('0')
        && int.chars().any(|c| !matches!(c, '0' | '_'));
    int_ok && frac_ok && exp_ok && !leading_zero
}

/// Non-empty groups of digits separated by single underscores.
fn digit_groups(text: &str, is_digit: impl Fn(char) -> bool) -> bool {
    text.split('_')
        .all(|group| !group.is_empty() && group.chars().all(&is_digit))
}
