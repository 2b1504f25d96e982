//! Token types for the Lax lexer.
//!
//! A token carries its decoded payload, not its source spelling: string
//! tokens hold the unescaped body without quotes, Base64 tokens hold the
//! raw Base64 text, numbers keep their digit form for the parser to decide
//! integer vs. float.

use crate::Span;
use std::fmt;

/// A token with its span in the source.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// True if this token is the given symbol.
    #[inline]
    pub fn is_symbol(&self, symbol: Symbol) -> bool {
        self.kind == TokenKind::Symbol(symbol)
    }

    /// Approximate source text of the token.
    ///
    /// Strings and Base64 render their decoded body; used when a deferred
    /// token run has to be shown to a human (declaration bodies, errors).
    pub fn lexeme(&self) -> &str {
        match &self.kind {
            TokenKind::Comment(text)
            | TokenKind::Number(text)
            | TokenKind::Str(text)
            | TokenKind::Base64(text)
            | TokenKind::Ident(text) => text,
            TokenKind::Symbol(symbol) => symbol.as_str(),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Token kinds for Lax.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Comment body (without `//` or `/* */` fences). Rejected before parsing.
    Comment(String),
    /// Numeric literal in its original digit form: `42`, `.5`, `-1e3`.
    Number(String),
    /// String literal body, escapes already applied.
    Str(String),
    /// Base64 literal body; decoding to bytes happens at evaluation time.
    Base64(String),
    /// Operator or punctuation.
    Symbol(Symbol),
    /// Bare identifier (keywords included; the parser folds them).
    Ident(String),
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Comment(text) => write!(f, "Comment({text:?})"),
            TokenKind::Number(text) => write!(f, "Number({text})"),
            TokenKind::Str(text) => write!(f, "Str({text:?})"),
            TokenKind::Base64(text) => write!(f, "Base64({text:?})"),
            TokenKind::Symbol(symbol) => write!(f, "`{}`", symbol.as_str()),
            TokenKind::Ident(text) => write!(f, "Ident({text})"),
        }
    }
}

/// Operators and punctuation.
///
/// Two-character symbols are matched before one-character ones, so `->` is
/// never lexed as `-` `>`. The inventory is wider than the grammar strictly
/// consumes: unused operators still lex (and later fail as "invalid value")
/// rather than shattering into identifier characters.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Symbol {
    // Two-character
    EqEq,     // ==
    LtEq,     // <=
    GtEq,     // >=
    NotEq,    // !=
    QueryEq,  // ?=
    AndAnd,   // &&
    OrOr,     // ||
    Shr,      // >>
    Shl,      // <<
    ColonEq,  // :=
    PipeGt,   // |>
    LtPipe,   // <|
    PathSep,  // ::
    DashDash, // --
    FatArrow, // =>
    PlusPlus, // ++
    Arrow,    // ->
    ColonGt,  // :>

    // One-character
    Plus,      // +
    Minus,     // -
    Star,      // *
    Slash,     // /
    Backslash, // \
    Percent,   // %
    Amp,       // &
    Bang,      // !
    Caret,     // ^
    Tilde,     // ~
    Eq,        // =
    Gt,        // >
    Lt,        // <
    Pipe,      // |
    Question,  // ?
    Colon,     // :
    Comma,     // ,
    Dot,       // .
    Semi,      // ;
    LParen,    // (
    RParen,    // )
    LBracket,  // [
    RBracket,  // ]
    LBrace,    // {
    RBrace,    // }
}

impl Symbol {
    /// Source spelling of the symbol.
    pub fn as_str(self) -> &'static str {
        match self {
            Symbol::EqEq => "==",
            Symbol::LtEq => "<=",
            Symbol::GtEq => ">=",
            Symbol::NotEq => "!=",
            Symbol::QueryEq => "?=",
            Symbol::AndAnd => "&&",
            Symbol::OrOr => "||",
            Symbol::Shr => ">>",
            Symbol::Shl => "<<",
            Symbol::ColonEq => ":=",
            Symbol::PipeGt => "|>",
            Symbol::LtPipe => "<|",
            Symbol::PathSep => "::",
            Symbol::DashDash => "--",
            Symbol::FatArrow => "=>",
            Symbol::PlusPlus => "++",
            Symbol::Arrow => "->",
            Symbol::ColonGt => ":>",
            Symbol::Plus => "+",
            Symbol::Minus => "-",
            Symbol::Star => "*",
            Symbol::Slash => "/",
            Symbol::Backslash => "\\",
            Symbol::Percent => "%",
            Symbol::Amp => "&",
            Symbol::Bang => "!",
            Symbol::Caret => "^",
            Symbol::Tilde => "~",
            Symbol::Eq => "=",
            Symbol::Gt => ">",
            Symbol::Lt => "<",
            Symbol::Pipe => "|",
            Symbol::Question => "?",
            Symbol::Colon => ":",
            Symbol::Comma => ",",
            Symbol::Dot => ".",
            Symbol::Semi => ";",
            Symbol::LParen => "(",
            Symbol::RParen => ")",
            Symbol::LBracket => "[",
            Symbol::RBracket => "]",
            Symbol::LBrace => "{",
            Symbol::RBrace => "}",
        }
    }

    /// Look up a two-character operator.
    pub fn from_two_chars(a: char, b: char) -> Option<Symbol> {
        Some(match (a, b) {
            ('=', '=') => Symbol::EqEq,
            ('<', '=') => Symbol::LtEq,
            ('>', '=') => Symbol::GtEq,
            ('!', '=') => Symbol::NotEq,
            ('?', '=') => Symbol::QueryEq,
            ('&', '&') => Symbol::AndAnd,
            ('|', '|') => Symbol::OrOr,
            ('>', '>') => Symbol::Shr,
            ('<', '<') => Symbol::Shl,
            (':', '=') => Symbol::ColonEq,
            ('|', '>') => Symbol::PipeGt,
            ('<', '|') => Symbol::LtPipe,
            (':', ':') => Symbol::PathSep,
            ('-', '-') => Symbol::DashDash,
            ('=', '>') => Symbol::FatArrow,
            ('+', '+') => Symbol::PlusPlus,
            ('-', '>') => Symbol::Arrow,
            (':', '>') => Symbol::ColonGt,
            _ => return None,
        })
    }

    /// Look up a one-character operator.
    pub fn from_char(c: char) -> Option<Symbol> {
        Some(match c {
            '+' => Symbol::Plus,
            '-' => Symbol::Minus,
            '*' => Symbol::Star,
            '/' => Symbol::Slash,
            '\\' => Symbol::Backslash,
            '%' => Symbol::Percent,
            '&' => Symbol::Amp,
            '!' => Symbol::Bang,
            '^' => Symbol::Caret,
            '~' => Symbol::Tilde,
            '=' => Symbol::Eq,
            '>' => Symbol::Gt,
            '<' => Symbol::Lt,
            '|' => Symbol::Pipe,
            '?' => Symbol::Question,
            ':' => Symbol::Colon,
            ',' => Symbol::Comma,
            '.' => Symbol::Dot,
            ';' => Symbol::Semi,
            '(' => Symbol::LParen,
            ')' => Symbol::RParen,
            '[' => Symbol::LBracket,
            ']' => Symbol::RBracket,
            '{' => Symbol::LBrace,
            '}' => Symbol::RBrace,
            _ => return None,
        })
    }

    /// True for `(`, `[`, `{`.
    #[inline]
    pub fn is_open_bracket(self) -> bool {
        matches!(self, Symbol::LParen | Symbol::LBracket | Symbol::LBrace)
    }

    /// True for `)`, `]`, `}`.
    #[inline]
    pub fn is_close_bracket(self) -> bool {
        matches!(self, Symbol::RParen | Symbol::RBracket | Symbol::RBrace)
    }

    /// Matching closer for an opening bracket.
    #[inline]
    pub fn matching_close(self) -> Option<Symbol> {
        match self {
            Symbol::LParen => Some(Symbol::RParen),
            Symbol::LBracket => Some(Symbol::RBracket),
            Symbol::LBrace => Some(Symbol::RBrace),
            _ => None,
        }
    }
}
