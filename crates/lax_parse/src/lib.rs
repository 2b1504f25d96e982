//! Parser for the Lax dialect.
//!
//! There is no grammar table: a fixed, ordered list of matchers is tried
//! against the whole token slice, and the first one that recognizes its
//! distinguishing operator (or bracket shape) claims the slice. The order
//! encodes precedence, weakest binding first:
//!
//! ```text
//! ; → , → := → |> → ?: → + → * / → :> → -- → -> → {k:v} → {…} → […] → (…)
//! ```
//!
//! If nothing matches, a single remaining token is decoded as an atom.
//! Matchers recurse through [`parse_expr`]; nesting is capped at
//! [`MAX_DEPTH`] because the right-recursive operator forms grow the
//! stack linearly with token count.

mod error;
mod grammar;
mod segment;

pub use error::{ParseError, ParseErrorKind};

use lax_ir::{Expr, Lit, Token, TokenKind};

/// Maximum expression nesting depth.
pub const MAX_DEPTH: usize = 256;

/// Parse a normalized token stream (no comments, minus signs fused) into
/// an expression.
pub fn parse(tokens: &[Token]) -> Result<Expr, ParseError> {
    parse_expr(tokens, 0)
}

type Matcher = fn(&[Token], usize) -> Result<Option<Expr>, ParseError>;

/// Ordered matcher list; earlier entries bind more weakly.
const MATCHERS: [Matcher; 14] = [
    grammar::lines,
    grammar::tuple,
    grammar::declaration,
    grammar::pipe,
    grammar::if_expr,
    grammar::concat,
    grammar::mul_div,
    grammar::contains,
    grammar::argument,
    grammar::function_type,
    grammar::dict,
    grammar::set,
    grammar::list,
    grammar::grouping,
];

pub(crate) fn parse_expr(tokens: &[Token], depth: usize) -> Result<Expr, ParseError> {
    if depth >= MAX_DEPTH {
        return Err(ParseError::depth_exceeded());
    }
    for matcher in MATCHERS {
        if let Some(expr) = matcher(tokens, depth)? {
            return Ok(expr);
        }
    }
    match tokens {
        [token] => atom(token),
        _ => Err(ParseError::invalid_value(tokens)),
    }
}

/// Decode a single-token slice.
fn atom(token: &Token) -> Result<Expr, ParseError> {
    match &token.kind {
        TokenKind::Number(text) => Ok(Expr::Lit(number_lit(text))),
        TokenKind::Str(text) => Ok(Expr::Lit(Lit::Str(text.clone()))),
        TokenKind::Base64(body) => Ok(Expr::Lit(Lit::Base64(body.clone()))),
        TokenKind::Ident(name) => Ok(keyword_or_ident(name)),
        TokenKind::Symbol(_) | TokenKind::Comment(_) => {
            Err(ParseError::invalid_value(std::slice::from_ref(token)))
        }
    }
}

/// Integer if the lexeme is all digits (optionally `-`-prefixed), float
/// otherwise. Integers too wide for `i64` degrade to floats.
fn number_lit(text: &str) -> Lit {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(n) = text.parse::<i64>() {
            return Lit::Int(n);
        }
    }
    match text.parse::<f64>() {
        Ok(x) => Lit::Float(x),
        // The lexer's number scanner only emits f64-parseable lexemes.
        Err(_) => Lit::Float(f64::NAN),
    }
}

/// `true`/`false`/`null`/`none` fold case-insensitively; anything else is
/// an opaque identifier.
fn keyword_or_ident(name: &str) -> Expr {
    if name.eq_ignore_ascii_case("true") {
        Expr::Lit(Lit::Bool(true))
    } else if name.eq_ignore_ascii_case("false") {
        Expr::Lit(Lit::Bool(false))
    } else if name.eq_ignore_ascii_case("null") || name.eq_ignore_ascii_case("none") {
        Expr::Lit(Lit::Null)
    } else {
        Expr::Ident(name.to_string())
    }
}
