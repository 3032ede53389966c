//! Hand-written lexer for aatbe.
//!
//! Produces [`Token`]s lazily from a [`SourceBuffer`]. Each call to
//! [`Lexer::next_token`] skips whitespace and then tries, in order:
//! numbers, character and string literals, symbols (longest match),
//! identifiers and keywords. Anything else becomes an `Unexpected` token
//! so the parser can report it with context.
//!
//! Malformed literals are returned as [`LexError`] values; the lexer
//! never aborts.

mod keywords;
mod lex_error;
mod symbols;

use std::iter::FusedIterator;

use aatbe_ir::{Span, Token, TokenKind};
use aatbe_lexer_core::SourceBuffer;
use tracing::trace;

pub use keywords::KEYWORDS;
pub use lex_error::{LexError, LexErrorKind};
pub use symbols::SYMBOLS;

/// Text carried by the end-of-file token.
pub const EOF_TEXT: &str = "<eof>";

#[inline]
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

#[inline]
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[inline]
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Lexer state over one source buffer.
///
/// Lazy and finite: once the end is reached every further call yields
/// another `EndOfFile` token.
pub struct Lexer {
    source: SourceBuffer,
    /// Current byte offset.
    pos: usize,
    /// Start of the token being scanned.
    last: usize,
    /// Set once the iterator has yielded `EndOfFile` or an error.
    finished: bool,
}

impl Lexer {
    pub fn new(source: impl Into<SourceBuffer>) -> Self {
        Lexer {
            source: source.into(),
            pos: 0,
            last: 0,
            finished: false,
        }
    }

    pub fn source(&self) -> &SourceBuffer {
        &self.source
    }

    /// Scan the next token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        if self.at_end() {
            let end = Span::from_range(self.pos..self.pos);
            return Ok(Token::new(TokenKind::EndOfFile, EOF_TEXT, 0, end));
        }

        let cur = self.current();
        let next = self.source.char_at(self.pos + cur.len_utf8());

        let token = if cur.is_ascii_digit() || (cur == '-' && next.is_ascii_digit()) {
            self.number()?
        } else if cur == '\'' {
            self.character()?
        } else if cur == '"' {
            self.string()?
        } else if let Some(symbol) = self.match_symbol() {
            self.pos += symbol.len();
            self.token(TokenKind::Symbol, symbol, 0)
        } else if is_ident_start(cur) {
            self.identifier()
        } else {
            self.bump();
            self.token(TokenKind::Unexpected, cur.to_string(), u64::from(cur))
        };

        trace!(kind = ?token.kind, text = %token.text, span = ?token.span, "lexed token");
        Ok(token)
    }

    /// Collect every token up to, but excluding, `EndOfFile`.
    pub fn lex(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            if token.is_eof() {
                return Ok(tokens);
            }
            tokens.push(token);
        }
    }

    // --- scanning primitives ---

    #[inline]
    fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    #[inline]
    fn current(&self) -> char {
        self.source.char_at(self.pos)
    }

    /// Consume one character. Returns the sentinel at the end of input.
    #[inline]
    fn bump(&mut self) -> char {
        let c = self.current();
        if !self.at_end() {
            self.pos += c.len_utf8();
        }
        c
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while !self.at_end() && pred(self.current()) {
            self.pos += self.current().len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        self.eat_while(is_whitespace);
        self.last = self.pos;
    }

    #[inline]
    fn span(&self) -> Span {
        Span::from_range(self.last..self.pos)
    }

    fn token(&self, kind: TokenKind, text: impl Into<String>, value: u64) -> Token {
        Token::new(kind, text, value, self.span())
    }

    fn error(&self, kind: LexErrorKind) -> LexError {
        LexError::new(kind, self.span())
    }

    fn match_symbol(&self) -> Option<&'static str> {
        SYMBOLS
            .iter()
            .copied()
            .find(|symbol| self.source.contains(self.pos, symbol))
    }

    // --- token rules ---

    /// Decimal (`-12_000`) or hexadecimal (`0xFF_FF`) integer.
    ///
    /// The raw text is kept verbatim. Negative literals store the two's
    /// complement of their magnitude.
    fn number(&mut self) -> Result<Token, LexError> {
        let is_hex = self.current() == '0' && matches!(self.source.char_at(self.pos + 1), 'x' | 'X');
        let negative = self.current() == '-';

        let radix = if is_hex {
            self.pos += 2;
            16
        } else {
            if negative {
                self.pos += 1;
            }
            10
        };

        let body_start = self.pos;
        self.eat_while(|c| c.is_digit(radix) || c == '_');

        let digits: String = self
            .source
            .slice(Span::from_range(body_start..self.pos))
            .chars()
            .filter(|&c| c != '_')
            .collect();
        if digits.is_empty() {
            return Err(self.error(LexErrorKind::InvalidNumber));
        }

        let magnitude = u64::from_str_radix(&digits, radix)
            .map_err(|_| self.error(LexErrorKind::NumberOverflow))?;
        let value = if negative {
            if magnitude > i64::MIN.unsigned_abs() {
                return Err(self.error(LexErrorKind::NumberOverflow));
            }
            magnitude.wrapping_neg()
        } else {
            magnitude
        };

        let raw = self.source.slice(self.span()).to_owned();
        Ok(self.token(TokenKind::Number, raw, value))
    }

    /// One possibly escaped character inside a literal.
    fn literal_char(&mut self, unterminated: LexErrorKind) -> Result<char, LexError> {
        let c = self.bump();
        if c != '\\' {
            return Ok(c);
        }
        if self.at_end() {
            return Err(self.error(unterminated));
        }
        match self.bump() {
            '\\' => Ok('\\'),
            'n' => Ok('\n'),
            't' => Ok('\t'),
            'r' => Ok('\r'),
            '"' => Ok('"'),
            other => Err(self.error(LexErrorKind::InvalidEscape(other))),
        }
    }

    fn character(&mut self) -> Result<Token, LexError> {
        self.bump();

        if self.at_end() {
            return Err(self.error(LexErrorKind::UnterminatedChar));
        }
        if self.current() == '\'' {
            self.bump();
            return Err(self.error(LexErrorKind::EmptyChar));
        }

        let c = self.literal_char(LexErrorKind::UnterminatedChar)?;
        if self.at_end() || self.current() != '\'' {
            return Err(self.error(LexErrorKind::UnterminatedChar));
        }
        self.bump();

        Ok(self.token(TokenKind::Char, c.to_string(), u64::from(c)))
    }

    /// String literal. Runs to the next unescaped `"` and may span lines.
    fn string(&mut self) -> Result<Token, LexError> {
        self.bump();

        let mut text = String::new();
        loop {
            if self.at_end() {
                return Err(self.error(LexErrorKind::UnterminatedString));
            }
            if self.current() == '"' {
                self.bump();
                return Ok(self.token(TokenKind::String, text, 0));
            }
            text.push(self.literal_char(LexErrorKind::UnterminatedString)?);
        }
    }

    /// Identifier, keyword or boolean. One trailing `?` or `!` is allowed.
    fn identifier(&mut self) -> Token {
        self.eat_while(is_ident_continue);
        if matches!(self.current(), '?' | '!') {
            self.bump();
        }

        let text = self.source.slice(self.span()).to_owned();
        match text.as_str() {
            "true" => self.token(TokenKind::Boolean, text, 1),
            "false" => self.token(TokenKind::Boolean, text, 0),
            word if keywords::is_keyword(word) => self.token(TokenKind::Keyword, text, 0),
            _ => self.token(TokenKind::Identifier, text, 0),
        }
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.next_token();
        self.finished = result.as_ref().map_or(true, Token::is_eof);
        Some(result)
    }
}

impl FusedIterator for Lexer {}

/// Lex `source` into tokens, excluding `EndOfFile`.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).lex()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
