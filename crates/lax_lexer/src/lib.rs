//! Lexer for the Lax dialect.
//!
//! Scans UTF-8 text into [`Token`]s. Each position tries the token classes
//! in a fixed order: comments, numbers, raw strings, Base64 strings,
//! quoted strings, operators (two-character before one-character), and
//! finally a maximal identifier run. Whitespace (space, tab, CR, LF) is
//! skipped between tokens.
//!
//! The raw token stream still contains comments; callers normalize it with
//! the passes in this crate ([`reject_comments`], [`fuse_signed_numbers`],
//! and the optional [`merge_adjacent_strings`]).

mod cursor;
mod escape;
mod lex_error;
mod normalize;

pub use lex_error::{LexError, LexErrorKind};
pub use normalize::{fuse_signed_numbers, merge_adjacent_strings, reject_comments};

use cursor::Cursor;
use escape::apply_escape;
use lax_ir::{Span, Symbol, Token, TokenKind};

/// Tokenize source text.
///
/// Returns the raw token stream, comments included.
pub fn tokenize(src: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(src).run()
}

/// Closing quote for each opening quote the dialect accepts.
fn closing_quote(open: char) -> Option<char> {
    match open {
        '"' => Some('"'),
        '\'' => Some('\''),
        '“' => Some('”'),
        _ => None,
    }
}

struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Lexer {
            cursor: Cursor::new(src),
        }
    }

    fn run(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            self.cursor.eat_whitespace();
            if self.cursor.is_eof() {
                return Ok(tokens);
            }
            let start = self.cursor.pos();
            let kind = self.scan_token(start)?;
            tokens.push(Token::new(kind, Span::from_range(start..self.cursor.pos())));
        }
    }

    /// Scan one token starting at a non-whitespace position.
    fn scan_token(&mut self, start: usize) -> Result<TokenKind, LexError> {
        if let Some(comment) = self.scan_comment(start)? {
            return Ok(comment);
        }
        if let Some(number) = self.scan_number() {
            return Ok(number);
        }
        if self.cursor.starts_with("R\"") {
            return self.scan_raw_string(start);
        }
        if self.cursor.starts_with("$\"") {
            return self.scan_base64(start);
        }
        if let Some(open) = self.cursor.current_char() {
            if let Some(close) = closing_quote(open) {
                return self.scan_quoted(start, open, close);
            }
        }
        if let Some(symbol) = self.scan_symbol() {
            return Ok(TokenKind::Symbol(symbol));
        }
        self.scan_identifier(start)
    }

    /// `// …` to end of line, or `/* … */` (non-nesting, first `*/` wins).
    fn scan_comment(&mut self, start: usize) -> Result<Option<TokenKind>, LexError> {
        if self.cursor.starts_with("//") {
            self.cursor.advance_n(2);
            let body_start = self.cursor.pos();
            self.cursor.eat_until_newline_or_eof();
            let body = self.cursor.slice(body_start, self.cursor.pos());
            return Ok(Some(TokenKind::Comment(body.to_string())));
        }
        if self.cursor.starts_with("/*") {
            self.cursor.advance_n(2);
            let Some(close) = self.cursor.find("*/") else {
                return Err(LexError::new(
                    LexErrorKind::UnterminatedBlockComment,
                    Span::from_range(start..self.cursor.source_len()),
                ));
            };
            let body_start = self.cursor.pos();
            self.cursor.advance_n(close);
            let body = self.cursor.slice(body_start, self.cursor.pos());
            self.cursor.advance_n(2);
            return Ok(Some(TokenKind::Comment(body.to_string())));
        }
        Ok(None)
    }

    /// Numeric literal: digits, optional fraction, optional exponent
    /// (`12`, `.5`, `3.14`, `1e-3`). An incomplete exponent is left for
    /// the next token, so `1e+` lexes as `1`, `e`, `+`.
    fn scan_number(&mut self) -> Option<TokenKind> {
        let rest = self.cursor.rest().as_bytes();
        let mut i = 0;
        while i < rest.len() && rest[i].is_ascii_digit() {
            i += 1;
        }
        let mut end = i;
        if i < rest.len() && rest[i] == b'.' {
            let mut j = i + 1;
            while j < rest.len() && rest[j].is_ascii_digit() {
                j += 1;
            }
            if j > i + 1 {
                end = j;
            }
        }
        if end == 0 {
            return None;
        }
        if end < rest.len() && (rest[end] == b'e' || rest[end] == b'E') {
            let mut m = end + 1;
            if m < rest.len() && (rest[m] == b'+' || rest[m] == b'-') {
                m += 1;
            }
            let exp_digits = m;
            while m < rest.len() && rest[m].is_ascii_digit() {
                m += 1;
            }
            if m > exp_digits {
                end = m;
            }
        }
        let text = self.cursor.rest()[..end].to_string();
        self.cursor.advance_n(end);
        Some(TokenKind::Number(text))
    }

    /// Raw string: `R"<delim>(…)<delim>"` where `<delim>` is any run of
    /// non-`(` characters. Escapes still apply inside the body.
    fn scan_raw_string(&mut self, start: usize) -> Result<TokenKind, LexError> {
        let unterminated = |end: usize| {
            LexError::new(
                LexErrorKind::UnterminatedRawString,
                Span::from_range(start..end),
            )
        };
        self.cursor.advance_n(2); // R"
        let delim_start = self.cursor.pos();
        let Some(open_paren) = self.cursor.find("(") else {
            return Err(unterminated(self.cursor.source_len()));
        };
        self.cursor.advance_n(open_paren);
        let delim = self.cursor.slice(delim_start, self.cursor.pos());
        self.cursor.advance_n(1); // (
        let closing = format!("){delim}\"");

        let mut body = String::new();
        loop {
            if self.cursor.starts_with(&closing) {
                self.cursor.advance_n(closing.len());
                return Ok(TokenKind::Str(body));
            }
            if self.cursor.is_eof() {
                return Err(unterminated(self.cursor.source_len()));
            }
            if self.cursor.current() == b'\\' {
                apply_escape(&mut self.cursor, &mut body, '"', start)?;
            } else if let Some(c) = self.cursor.current_char() {
                body.push(c);
                self.cursor.advance_char();
            }
        }
    }

    /// Base64 string: `$"…"`. The body keeps its Base64 text; decoding to
    /// bytes happens at evaluation time.
    fn scan_base64(&mut self, start: usize) -> Result<TokenKind, LexError> {
        self.cursor.advance_n(2); // $"
        let mut body = String::new();
        loop {
            if self.cursor.is_eof() {
                return Err(LexError::new(
                    LexErrorKind::UnterminatedBase64,
                    Span::from_range(start..self.cursor.source_len()),
                ));
            }
            if self.cursor.current() == b'"' {
                self.cursor.advance_n(1);
                return Ok(TokenKind::Base64(body));
            }
            if self.cursor.current() == b'\\' {
                apply_escape(&mut self.cursor, &mut body, '"', start)?;
            } else if let Some(c) = self.cursor.current_char() {
                body.push(c);
                self.cursor.advance_char();
            }
        }
    }

    /// Quoted string opened with `"`, `'`, or `“`; the closer must be the
    /// matching member of its pair.
    fn scan_quoted(&mut self, start: usize, open: char, close: char) -> Result<TokenKind, LexError> {
        self.cursor.advance_char(); // opening quote
        let mut body = String::new();
        loop {
            let Some(c) = self.cursor.current_char() else {
                return Err(LexError::new(
                    LexErrorKind::UnterminatedString { open },
                    Span::from_range(start..self.cursor.source_len()),
                ));
            };
            if c == close {
                self.cursor.advance_char();
                return Ok(TokenKind::Str(body));
            }
            if c == '\\' {
                apply_escape(&mut self.cursor, &mut body, open, start)?;
            } else {
                body.push(c);
                self.cursor.advance_char();
            }
        }
    }

    /// Operator lookup, longest match first.
    fn scan_symbol(&mut self) -> Option<Symbol> {
        let a = self.cursor.current();
        let b = self.cursor.peek();
        if a.is_ascii() && b.is_ascii() {
            if let Some(symbol) = Symbol::from_two_chars(a as char, b as char) {
                self.cursor.advance_n(2);
                return Some(symbol);
            }
        }
        if a.is_ascii() {
            if let Some(symbol) = Symbol::from_char(a as char) {
                self.cursor.advance_n(1);
                return Some(symbol);
            }
        }
        None
    }

    /// Maximal run that no other token class claims: ends at whitespace,
    /// any quote character, or the start of an operator.
    fn scan_identifier(&mut self, start: usize) -> Result<TokenKind, LexError> {
        loop {
            let Some(c) = self.cursor.current_char() else {
                break;
            };
            if matches!(c, ' ' | '\t' | '\r' | '\n' | '"' | '\'' | '“' | '”') {
                break;
            }
            let next = self.cursor.peek();
            if c.is_ascii() {
                if next.is_ascii() && Symbol::from_two_chars(c, next as char).is_some() {
                    break;
                }
                if Symbol::from_char(c).is_some() {
                    break;
                }
            }
            self.cursor.advance_char();
        }
        if self.cursor.pos() == start {
            let found = self.cursor.current_char().unwrap_or('\0');
            return Err(LexError::new(
                LexErrorKind::UnexpectedChar { found },
                Span::from_range(start..start + found.len_utf8()),
            ));
        }
        Ok(TokenKind::Ident(
            self.cursor.slice(start, self.cursor.pos()).to_string(),
        ))
    }
}

#[cfg(test)]
mod tests;
