//! Bracket-aware token walk over JavaScript-like source.
//!
//! Whitespace and comments are skipped; string and template literals are
//! single tokens, so brackets and commas inside them are never structural.
//! Regex literals are not recognised.

/// Kind of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    Open,
    Close,
    Comma,
    Colon,
    /// Identifier or number characters.
    Word,
    /// Quoted string or template literal, quotes included.
    Str,
    Other,
}

/// A token with its byte span and bracket depth.
///
/// Openers carry the depth outside them and closers the depth after
/// closing, so a matching pair shares one depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Lexeme {
    pub start: usize,
    pub end: usize,
    pub depth: usize,
    pub token: Token,
}

pub(crate) fn lexemes(src: &str) -> Lexemes<'_> {
    Lexemes { src, pos: 0, depth: 0 }
}

pub(crate) struct Lexemes<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
}

impl Lexemes<'_> {
    fn skip_trivia(&mut self) {
        let bytes = self.src.as_bytes();
        while self.pos < bytes.len() {
            let rest = &bytes[self.pos..];
            if rest.starts_with(b"//") {
                self.pos += rest.iter().position(|b| *b == b'\n').unwrap_or(rest.len());
            } else if rest.starts_with(b"/*") {
                let close = rest[2..].windows(2).position(|w| w == b"*/");
                self.pos += close.map_or(rest.len(), |i| i + 4);
            } else if rest[0].is_ascii_whitespace() {
                self.pos += 1;
            } else {
                match self.src[self.pos..].chars().next() {
                    Some(c) if c.is_whitespace() || c == '\u{feff}' => self.pos += c.len_utf8(),
                    _ => return,
                }
            }
        }
    }

    fn quoted_end(&self, quote: u8) -> usize {
        let bytes = self.src.as_bytes();
        let mut i = self.pos + 1;
        while i < bytes.len() {
            match bytes[i] {
                b'\\' => i += 2,
                b if b == quote => return i + 1,
                b'\n' if quote != b'`' => return i,
                _ => i += 1,
            }
        }
        bytes.len()
    }

    fn word_end(&self) -> usize {
        self.src[self.pos..]
            .char_indices()
            .find(|(_, c)| !is_word_char(*c))
            .map_or(self.src.len(), |(i, _)| self.pos + i)
    }
}

impl Iterator for Lexemes<'_> {
    type Item = Lexeme;

    fn next(&mut self) -> Option<Lexeme> {
        self.skip_trivia();
        let c = self.src[self.pos..].chars().next()?;
        let start = self.pos;

        let (token, end) = match c {
            '{' | '[' | '(' => (Token::Open, start + 1),
            '}' | ']' | ')' => (Token::Close, start + 1),
            ',' => (Token::Comma, start + 1),
            ':' => (Token::Colon, start + 1),
            '"' | '\'' | '`' => (Token::Str, self.quoted_end(c as u8).min(self.src.len())),
            c if is_word_char(c) => (Token::Word, self.word_end()),
            c => (Token::Other, start + c.len_utf8()),
        };

        let depth = match token {
            Token::Open => {
                self.depth += 1;
                self.depth - 1
            }
            Token::Close => {
                self.depth = self.depth.saturating_sub(1);
                self.depth
            }
            _ => self.depth,
        };

        self.pos = end;
        Some(Lexeme { start, end, depth, token })
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Index of the bracket closing the one at `open`, if balanced.
pub(crate) fn matching_close(src: &str, open: usize) -> Option<usize> {
    let mut tokens = lexemes(&src[open..]);
    let first = tokens.next()?;
    if first.token != Token::Open || first.start != 0 {
        return None;
    }
    tokens.find(|lx| lx.token == Token::Close && lx.depth == 0).map(|lx| open + lx.start)
}
