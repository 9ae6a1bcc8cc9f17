//! Restricted evaluator for permissive (`js`) parse mode.
//!
//! Accepts JavaScript literal expressions only: numbers, strings, `true`,
//! `false`, `null`, `undefined`, `NaN`, `Infinity`, array literals (with
//! holes, trailing commas and spread), object literals, parentheses, unary
//! `- + !` and binary `+ - * / %`. Comments are allowed wherever whitespace
//! is. Identifiers, calls, member access and template literals are
//! rejected, so input can never reach host functionality.
//!
//! Lone UTF-16 surrogate escapes decode to U+FFFD.

use crate::domain::{AppError, Value};

use super::serializer::format_number;

const MAX_DEPTH: usize = 256;

/// Evaluate `src` as a single literal expression.
pub fn evaluate(src: &str) -> Result<Value, AppError> {
    let mut evaluator = Evaluator { src, pos: 0, depth: 0 };
    evaluator.skip_trivia()?;
    if evaluator.at_end() {
        return Err(evaluator.error("expected an expression"));
    }
    let value = evaluator.additive()?;
    evaluator.skip_trivia()?;
    match evaluator.peek() {
        None => Ok(value),
        Some(c) => Err(evaluator.error(format!("unexpected '{c}'"))),
    }
}

struct Evaluator<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Evaluator<'a> {
    // Expressions

    fn additive(&mut self) -> Result<Value, AppError> {
        let mut lhs = self.multiplicative()?;
        loop {
            self.skip_trivia()?;
            match self.peek() {
                Some('+') => {
                    self.bump();
                    let rhs = self.multiplicative()?;
                    lhs = add(&lhs, &rhs);
                }
                Some('-') => {
                    self.bump();
                    let rhs = self.multiplicative()?;
                    lhs = Value::Number(to_number(&lhs) - to_number(&rhs));
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn multiplicative(&mut self) -> Result<Value, AppError> {
        let mut lhs = self.unary()?;
        loop {
            self.skip_trivia()?;
            let op = match self.peek() {
                Some(c @ ('*' | '/' | '%')) => c,
                _ => return Ok(lhs),
            };
            self.bump();
            let rhs = self.unary()?;
            let (a, b) = (to_number(&lhs), to_number(&rhs));
            lhs = Value::Number(match op {
                '*' => a * b,
                '/' => a / b,
                _ => a % b,
            });
        }
    }

    fn unary(&mut self) -> Result<Value, AppError> {
        self.skip_trivia()?;
        let op = match self.peek() {
            Some(c @ ('-' | '+' | '!')) => c,
            _ => return self.primary(),
        };
        self.bump();
        self.enter()?;
        let operand = self.unary()?;
        self.leave();
        Ok(match op {
            '-' => Value::Number(-to_number(&operand)),
            '+' => Value::Number(to_number(&operand)),
            _ => Value::Bool(!truthy(&operand)),
        })
    }

    fn primary(&mut self) -> Result<Value, AppError> {
        self.skip_trivia()?;
        match self.peek() {
            None => Err(self.error("unexpected end of input")),
            Some('[') => self.array(),
            Some('{') => self.object(),
            Some('(') => {
                self.bump();
                self.enter()?;
                let value = self.additive()?;
                self.leave();
                self.expect(')')?;
                Ok(value)
            }
            Some(quote @ ('"' | '\'')) => self.string(quote).map(Value::String),
            Some(c) if c.is_ascii_digit() || c == '.' => self.number().map(Value::Number),
            Some(c) if is_ident_start(c) => self.keyword(),
            Some('`') => Err(self.error("template literals are not supported")),
            Some(c) => Err(self.error(format!("unexpected '{c}'"))),
        }
    }

    fn keyword(&mut self) -> Result<Value, AppError> {
        let start = self.pos;
        let word = self.identifier();
        match word {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            "null" => Ok(Value::Null),
            "undefined" => Ok(Value::Undefined),
            "NaN" => Ok(Value::Number(f64::NAN)),
            "Infinity" => Ok(Value::Number(f64::INFINITY)),
            _ => {
                self.pos = start;
                Err(self.error(format!(
                    "identifier '{word}' is not allowed; only literal expressions are evaluated"
                )))
            }
        }
    }

    fn array(&mut self) -> Result<Value, AppError> {
        self.bump();
        self.enter()?;
        let mut items = Vec::new();
        loop {
            self.skip_trivia()?;
            match self.peek() {
                Some(']') => {
                    self.bump();
                    break;
                }
                Some(',') => {
                    self.bump();
                    items.push(Value::Undefined);
                    continue;
                }
                _ => {}
            }

            if self.rest().starts_with("...") {
                self.pos += 3;
                let spread_at = self.pos;
                match self.additive()? {
                    Value::Array(inner) => items.extend(inner),
                    Value::String(s) => items.extend(s.chars().map(|c| Value::String(c.into()))),
                    other => {
                        self.pos = spread_at;
                        return Err(self.error(format!("cannot spread a {}", other.type_name())));
                    }
                }
            } else {
                items.push(self.additive()?);
            }

            self.skip_trivia()?;
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some(']') => {}
                _ => return Err(self.error("expected ',' or ']' in array literal")),
            }
        }
        self.leave();
        Ok(Value::Array(items))
    }

    fn object(&mut self) -> Result<Value, AppError> {
        self.bump();
        self.enter()?;
        let mut fields = Vec::new();
        loop {
            self.skip_trivia()?;
            let key = match self.peek() {
                Some('}') => {
                    self.bump();
                    break;
                }
                Some(quote @ ('"' | '\'')) => self.string(quote)?,
                Some(c) if c.is_ascii_digit() || c == '.' => format_number(self.number()?),
                Some(c) if is_ident_start(c) => self.identifier().to_string(),
                _ => return Err(self.error("expected a property name")),
            };
            self.skip_trivia()?;
            self.expect(':')?;
            let value = self.additive()?;
            fields.push((key, value));

            self.skip_trivia()?;
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some('}') => {}
                _ => return Err(self.error("expected ',' or '}' in object literal")),
            }
        }
        self.leave();
        Ok(Value::Object(fields))
    }

    // Tokens

    fn number(&mut self) -> Result<f64, AppError> {
        let start = self.pos;
        let radix = match self.rest().get(..2) {
            Some("0x" | "0X") => Some(16),
            Some("0o" | "0O") => Some(8),
            Some("0b" | "0B") => Some(2),
            _ => None,
        };

        let value = if let Some(radix) = radix {
            self.pos += 2;
            let digits_start = self.pos;
            while self.peek().is_some_and(|c| c.is_digit(radix)) {
                self.bump();
            }
            let digits = &self.src[digits_start..self.pos];
            if digits.is_empty() {
                return Err(self.error("missing digits after radix prefix"));
            }
            digits.chars().filter_map(|c| c.to_digit(radix)).fold(0.0, |acc, d| {
                acc * f64::from(radix) + f64::from(d)
            })
        } else {
            self.eat_digits();
            if self.peek() == Some('.') {
                self.bump();
                self.eat_digits();
            }
            if matches!(self.peek(), Some('e' | 'E')) {
                self.bump();
                if matches!(self.peek(), Some('+' | '-')) {
                    self.bump();
                }
                if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    return Err(self.error("missing exponent digits"));
                }
                self.eat_digits();
            }
            let text = &self.src[start..self.pos];
            match text.parse::<f64>() {
                Ok(value) => value,
                Err(_) => {
                    self.pos = start;
                    return Err(self.error(format!("invalid number '{text}'")));
                }
            }
        };

        if self.peek().is_some_and(|c| is_ident_start(c) || c.is_ascii_digit()) {
            return Err(self.error("identifier starts immediately after numeric literal"));
        }
        Ok(value)
    }

    fn eat_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
        }
    }

    fn string(&mut self, quote: char) -> Result<String, AppError> {
        self.bump();
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(self.error("unterminated string literal")),
                Some(c) if c == quote => return Ok(out),
                Some('\n' | '\r') => return Err(self.error("unescaped line break in string")),
                Some('\\') => self.escape(&mut out)?,
                Some(c) => out.push(c),
            }
        }
    }

    fn escape(&mut self, out: &mut String) -> Result<(), AppError> {
        let Some(c) = self.bump() else {
            return Err(self.error("unterminated string literal"));
        };
        match c {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0' if !self.peek().is_some_and(|c| c.is_ascii_digit()) => out.push('\0'),
            '0'..='9' => return Err(self.error("octal escapes are not allowed")),
            'x' => {
                let code = self.hex_digits(2)?;
                out.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
            }
            'u' => {
                let code = self.unicode_escape()?;
                out.push(self.combine_surrogates(code)?);
            }
            '\r' => {
                if self.peek() == Some('\n') {
                    self.bump();
                }
            }
            '\n' | '\u{2028}' | '\u{2029}' => {}
            other => out.push(other),
        }
        Ok(())
    }

    fn unicode_escape(&mut self) -> Result<u32, AppError> {
        if self.peek() == Some('{') {
            self.bump();
            let start = self.pos;
            while self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
                self.bump();
            }
            let digits = &self.src[start..self.pos];
            let code = u32::from_str_radix(digits, 16)
                .ok()
                .filter(|code| *code <= 0x10FFFF)
                .ok_or_else(|| self.error("invalid code point escape"))?;
            self.expect('}')?;
            Ok(code)
        } else {
            self.hex_digits(4)
        }
    }

    fn combine_surrogates(&mut self, high: u32) -> Result<char, AppError> {
        if !(0xD800..0xDC00).contains(&high) {
            return Ok(char::from_u32(high).unwrap_or(char::REPLACEMENT_CHARACTER));
        }
        if self.rest().starts_with("\\u") {
            let save = self.pos;
            self.pos += 2;
            let low = self.unicode_escape()?;
            if (0xDC00..0xE000).contains(&low) {
                let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
                return Ok(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
            }
            self.pos = save;
        }
        Ok(char::REPLACEMENT_CHARACTER)
    }

    fn hex_digits(&mut self, count: usize) -> Result<u32, AppError> {
        let digits = self.rest().get(..count).filter(|d| d.chars().all(|c| c.is_ascii_hexdigit()));
        let Some(digits) = digits else {
            return Err(self.error("invalid hexadecimal escape"));
        };
        let code = u32::from_str_radix(digits, 16).map_err(|_| self.error("invalid escape"))?;
        self.pos += count;
        Ok(code)
    }

    fn identifier(&mut self) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(|c| is_ident_start(c) || c.is_ascii_digit()) {
            self.bump();
        }
        &self.src[start..self.pos]
    }

    // Cursor

    fn skip_trivia(&mut self) -> Result<(), AppError> {
        loop {
            let rest = self.rest();
            if rest.starts_with("//") {
                self.pos += rest.find('\n').unwrap_or(rest.len());
            } else if rest.starts_with("/*") {
                match rest[2..].find("*/") {
                    Some(end) => self.pos += end + 4,
                    None => return Err(self.error("unterminated block comment")),
                }
            } else if self.peek().is_some_and(|c| c.is_whitespace() || c == '\u{feff}') {
                self.bump();
            } else {
                return Ok(());
            }
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), AppError> {
        self.skip_trivia()?;
        if self.peek() == Some(expected) {
            self.bump();
            Ok(())
        } else {
            Err(self.error(format!("expected '{expected}'")))
        }
    }

    fn enter(&mut self) -> Result<(), AppError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(self.error(format!("nesting deeper than {MAX_DEPTH} levels")));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn error(&self, details: impl Into<String>) -> AppError {
        AppError::parse_error(
            "values as JS expression",
            format!("{} at offset {}", details.into(), self.pos),
        )
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

// JavaScript coercions

fn add(lhs: &Value, rhs: &Value) -> Value {
    let stringish = |v: &Value| matches!(v, Value::String(_) | Value::Array(_) | Value::Object(_));
    if stringish(lhs) || stringish(rhs) {
        Value::String(format!("{}{}", to_js_string(lhs), to_js_string(rhs)))
    } else {
        Value::Number(to_number(lhs) + to_number(rhs))
    }
}

fn to_js_string(value: &Value) -> String {
    match value {
        Value::String(s) | Value::Verbatim(s) => s.clone(),
        Value::Number(n) => format_number(*n),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Undefined => "undefined".to_string(),
        Value::Object(_) => "[object Object]".to_string(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null | Value::Undefined => String::new(),
                other => to_js_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
    }
}

fn to_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => *n,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Null => 0.0,
        Value::Undefined | Value::Object(_) => f64::NAN,
        Value::String(_) | Value::Verbatim(_) | Value::Array(_) => {
            let text = to_js_string(value);
            let text = text.trim();
            if text.is_empty() {
                0.0
            } else {
                match text {
                    "Infinity" | "+Infinity" => f64::INFINITY,
                    "-Infinity" => f64::NEG_INFINITY,
                    _ if text.chars().all(|c| c.is_ascii_digit() || "+-.eE".contains(c)) => {
                        text.parse().unwrap_or(f64::NAN)
                    }
                    _ => f64::NAN,
                }
            }
        }
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => *n != 0.0 && !n.is_nan(),
        Value::String(s) => !s.is_empty(),
        Value::Null | Value::Undefined => false,
        Value::Array(_) | Value::Object(_) | Value::Verbatim(_) => true,
    }
}
