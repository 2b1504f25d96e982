//! Lexer error types.

use lax_ir::Span;
use std::fmt;

/// A lexer error with the source span it was detected at.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LexError {
    /// What went wrong.
    pub kind: LexErrorKind,
    /// Where in the source.
    pub span: Span,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LexErrorKind {
    /// Missing closing quote for a quoted string literal.
    UnterminatedString { open: char },
    /// Raw string missing its `(` or its `)delim"` terminator.
    UnterminatedRawString,
    /// Missing closing `"` for a `$"…"` Base64 literal.
    UnterminatedBase64,
    /// `/*` without a matching `*/`.
    UnterminatedBlockComment,
    /// `\uXXXX` with missing/non-hex digits or a non-scalar code point.
    MalformedUnicodeEscape,
    /// Source ended in the middle of an escape sequence.
    UnexpectedEof,
    /// A character that cannot start any token (e.g. a stray `”`).
    UnexpectedChar { found: char },
}

impl LexError {
    #[cold]
    pub(crate) fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { kind, span }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LexErrorKind::UnterminatedString { open } => {
                write!(f, "unterminated string opened with {open:?}")
            }
            LexErrorKind::UnterminatedRawString => f.write_str("unterminated raw string"),
            LexErrorKind::UnterminatedBase64 => f.write_str("unterminated base64 string"),
            LexErrorKind::UnterminatedBlockComment => f.write_str("unterminated block comment"),
            LexErrorKind::MalformedUnicodeEscape => f.write_str("malformed \\uXXXX escape"),
            LexErrorKind::UnexpectedEof => f.write_str("unexpected end of input"),
            LexErrorKind::UnexpectedChar { found } => {
                write!(f, "unexpected character {found:?}")
            }
        }?;
        write!(f, " at {}", self.span)
    }
}

impl std::error::Error for LexError {}
