//! Lax — a permissive JSON dialect.
//!
//! A superset of conventional JSON with line/block comments, unquoted
//! identifier keys, tuples, sets, raw (heredoc-style) strings, Base64
//! literals, fullwidth quotation marks, `--key value` argument groups,
//! and a small embedded expression language (concatenation,
//! multiplication/division, membership, conditionals, pipes, function
//! types, declarations, and statement sequencing).
//!
//! The external surface is [`decode`]:
//!
//! ```
//! use lax::{decode, Value};
//!
//! let value = decode("{name: \"张三\", age: 18}")?;
//! let Value::Map(map) = value else { panic!() };
//! assert_eq!(map["age"], Value::Int(18));
//! # Ok::<(), lax::DecodeError>(())
//! ```
//!
//! [`encode`] writes a canonical textual form back out for values that
//! have one.

mod encode;

pub use encode::{encode, EncodeError};
pub use lax_eval::{EvalError, EvalErrorKind};
pub use lax_ir::{Declaration, SetElem, Value, ValueMap, ValueSet};
pub use lax_lexer::{LexError, LexErrorKind};
pub use lax_parse::{ParseError, ParseErrorKind};

use lax_lexer::{fuse_signed_numbers, reject_comments, tokenize};

/// Any failure while decoding: lexing, parsing, or evaluation.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Decode source text into a [`Value`].
///
/// Pipeline: tokenize, drop comments, fuse unary minus into number
/// literals, parse, evaluate. Adjacent string literals are *not* merged;
/// [`lax_lexer::merge_adjacent_strings`] exists for callers that want
/// that pass.
pub fn decode(text: &str) -> Result<Value, DecodeError> {
    let tokens = tokenize(text)?;
    let tokens = fuse_signed_numbers(reject_comments(tokens));
    let expr = lax_parse::parse(&tokens)?;
    Ok(lax_eval::evaluate(&expr)?)
}
