//! Lax IR - shared data model for the Lax dialect
//!
//! This crate contains the core data structures shared by the pipeline:
//! - Spans for source locations
//! - Tokens (lexer output)
//! - Expressions (parser output)
//! - Values (evaluator output), including the hashable set machinery
//!
//! The pipeline crates (`lax_lexer`, `lax_parse`, `lax_eval`) all depend on
//! this crate and nothing else internal, keeping the dependency graph a
//! straight line: text → tokens → expressions → values.

mod expr;
mod span;
mod token;
mod value;

pub use expr::{BinaryOp, Expr, Lit};
pub use span::Span;
pub use token::{Symbol, Token, TokenKind};
pub use value::{format_float, Declaration, SetElem, Value, ValueMap, ValueSet};
