//! Expression tree produced by the parser.
//!
//! The grammar is evaluated in a separate pass, so matchers build `Expr`
//! nodes instead of values. One exception survives from the dialect's
//! semantics: a declaration's value component stays a raw token run
//! (deferred binding), never an `Expr`.

use crate::Token;

/// A parsed expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Literal atom.
    Lit(Lit),
    /// Bare identifier that is not a keyword.
    Ident(String),
    /// `[a, b, c]`
    List(Vec<Expr>),
    /// `a, b` at top level or inside `(…)`.
    Tuple(Vec<Expr>),
    /// `{a, b}` (braces without a top-level `:`).
    Set(Vec<Expr>),
    /// `{k: v, …}`
    Mapping(Vec<(Expr, Expr)>),
    /// `left op right`, right-recursive.
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `cond ? then : else`
    If {
        cond: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
    /// `left |> right`
    Pipe { left: Box<Expr>, right: Box<Expr> },
    /// `left -> right`; both sides coerce to tuples at evaluation.
    FuncType { left: Box<Expr>, right: Box<Expr> },
    /// `name : ty := value`; the value run is kept unevaluated.
    Decl {
        name: Box<Expr>,
        ty: Box<Expr>,
        value: Vec<Token>,
    },
    /// `--key v1 v2 --key2 …`, in encounter order.
    ArgGroup(Vec<(Expr, Vec<Expr>)>),
    /// `a; b; c`
    Lines(Vec<Expr>),
}

/// Literal atoms.
#[derive(Clone, Debug, PartialEq)]
pub enum Lit {
    Int(i64),
    Float(f64),
    Str(String),
    /// Base64 body, decoded to bytes at evaluation time.
    Base64(String),
    Bool(bool),
    Null,
}

/// Binary operators evaluated eagerly by the value pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    /// `+` — concatenation / merge / union / numeric sum.
    Concat,
    /// `*` — product / replication / Cartesian product.
    Mul,
    /// `/` — true division (element-wise over lists).
    Div,
    /// `:>` — membership test.
    Contains,
}

impl BinaryOp {
    /// Source spelling, for error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Concat => "+",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Contains => ":>",
        }
    }
}
