//! Parser error types.

use lax_ir::{Span, Symbol, Token};
use std::fmt;

/// A parser error, with the source span when one is known.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Option<Span>,
}

/// What kind of parser error occurred.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseErrorKind {
    /// A closing bracket that does not pair with the opener it pops.
    UnmatchedBracket { found: Symbol },
    /// No grammatical form matches the token run.
    InvalidValue,
    /// Expression nesting exceeded the recursion limit.
    DepthExceeded,
}

impl ParseError {
    #[cold]
    pub(crate) fn unmatched_bracket(token: &Token) -> Self {
        let found = match token.kind {
            lax_ir::TokenKind::Symbol(symbol) => symbol,
            // Only symbol tokens reach the bracket checks.
            _ => Symbol::RParen,
        };
        ParseError {
            kind: ParseErrorKind::UnmatchedBracket { found },
            span: Some(token.span),
        }
    }

    #[cold]
    pub(crate) fn invalid_value(tokens: &[Token]) -> Self {
        let span = match (tokens.first(), tokens.last()) {
            (Some(first), Some(last)) => Some(first.span.merge(last.span)),
            _ => None,
        };
        ParseError {
            kind: ParseErrorKind::InvalidValue,
            span,
        }
    }

    #[cold]
    pub(crate) fn depth_exceeded() -> Self {
        ParseError {
            kind: ParseErrorKind::DepthExceeded,
            span: None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::UnmatchedBracket { found } => {
                write!(f, "unmatched bracket `{}`", found.as_str())?;
            }
            ParseErrorKind::InvalidValue => f.write_str("invalid value")?,
            ParseErrorKind::DepthExceeded => f.write_str("depth exceeded")?,
        }
        if let Some(span) = self.span {
            write!(f, " at {span}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}
