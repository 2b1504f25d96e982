//! Evaluated values.
//!
//! `Value` is the dialect's output variant. Mappings are string-keyed (keys
//! are stringified at construction), sets are restricted to hashable
//! elements via the [`SetElem`] projection, and the structural forms
//! (pipes, function types, declarations) are their own variants rather
//! than tuples, so they survive round-trips through operators as opaque
//! results.

use crate::Token;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// String-keyed mapping.
pub type ValueMap = FxHashMap<String, Value>;

/// An evaluated value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Decoded Base64 payload.
    Bytes(Vec<u8>),
    /// Bare identifier that resolved to no keyword.
    Ident(String),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    Set(ValueSet),
    Map(ValueMap),
    /// `left |> right`
    Pipe(Box<Value>, Box<Value>),
    /// `params -> results`, both sides tuple-coerced.
    FuncType(Vec<Value>, Vec<Value>),
    /// `name : ty := body`, body kept as raw tokens.
    Decl(Declaration),
}

/// A deferred declaration: the value component is an unevaluated token run.
#[derive(Clone, Debug, PartialEq)]
pub struct Declaration {
    pub name: Box<Value>,
    pub ty: Box<Value>,
    pub body: Vec<Token>,
}

impl Value {
    /// Short type label for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Ident(_) => "identifier",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Set(_) => "set",
            Value::Map(_) => "mapping",
            Value::Pipe(..) => "pipe",
            Value::FuncType(..) => "function type",
            Value::Decl(_) => "declaration",
        }
    }
}

/// Canonical float rendering.
///
/// Finite floats always carry a `.` or an exponent (`2.0`, not `2`), so
/// the text stays distinguishable from an integer literal when it is
/// re-read.
pub fn format_float(value: f64) -> String {
    let mut text = format!("{value}");
    if value.is_finite() && !text.contains(['.', 'e', 'E']) {
        text.push_str(".0");
    }
    text
}

fn write_joined(f: &mut fmt::Formatter<'_>, values: &[Value]) -> fmt::Result {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{value}")?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(true) => f.write_str("true"),
            Value::Bool(false) => f.write_str("false"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => f.write_str(&format_float(*x)),
            Value::Str(s) | Value::Ident(s) => f.write_str(s),
            Value::Bytes(bytes) => {
                f.write_str("b\"")?;
                for &b in bytes {
                    if b.is_ascii_graphic() || b == b' ' {
                        write!(f, "{}", b as char)?;
                    } else {
                        write!(f, "\\x{b:02x}")?;
                    }
                }
                f.write_str("\"")
            }
            Value::List(items) => {
                f.write_str("[")?;
                write_joined(f, items)?;
                f.write_str("]")
            }
            Value::Tuple(items) => {
                f.write_str("(")?;
                write_joined(f, items)?;
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            Value::Set(set) => {
                // Sorted rendering keeps the hash-set's display deterministic.
                let mut rendered: Vec<String> =
                    set.iter().map(|elem| elem.to_value().to_string()).collect();
                rendered.sort_unstable();
                write!(f, "{{{}}}", rendered.join(", "))
            }
            Value::Map(map) => {
                let mut entries: Vec<(&String, &Value)> = map.iter().collect();
                entries.sort_unstable_by_key(|(key, _)| *key);
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Value::Pipe(left, right) => write!(f, "{left} |> {right}"),
            Value::FuncType(params, results) => {
                f.write_str("(")?;
                write_joined(f, params)?;
                f.write_str(") -> (")?;
                write_joined(f, results)?;
                f.write_str(")")
            }
            Value::Decl(decl) => {
                write!(f, "{} : {} := ", decl.name, decl.ty)?;
                for (i, token) in decl.body.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    f.write_str(token.lexeme())?;
                }
                Ok(())
            }
        }
    }
}

/// Hashable projection of a [`Value`], used as the set element type.
///
/// Only values with total equality can live in a set: scalars, strings,
/// bytes, identifiers, and tuples thereof. Floats are keyed by bit
/// pattern, which keeps `Eq`/`Hash` total at the price of distinguishing
/// `0.0` from `-0.0`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SetElem {
    Null,
    Bool(bool),
    Int(i64),
    Float(u64),
    Str(String),
    Ident(String),
    Bytes(Vec<u8>),
    Tuple(Vec<SetElem>),
}

impl SetElem {
    /// Project a value into its hashable form.
    ///
    /// Returns `None` for unhashable values (lists, sets, mappings, and
    /// the structural forms), which the evaluator reports as a type error.
    pub fn try_from_value(value: &Value) -> Option<SetElem> {
        Some(match value {
            Value::Null => SetElem::Null,
            Value::Bool(b) => SetElem::Bool(*b),
            Value::Int(n) => SetElem::Int(*n),
            Value::Float(x) => SetElem::Float(x.to_bits()),
            Value::Str(s) => SetElem::Str(s.clone()),
            Value::Ident(s) => SetElem::Ident(s.clone()),
            Value::Bytes(bytes) => SetElem::Bytes(bytes.clone()),
            Value::Tuple(items) => SetElem::Tuple(
                items
                    .iter()
                    .map(SetElem::try_from_value)
                    .collect::<Option<Vec<_>>>()?,
            ),
            _ => return None,
        })
    }

    /// Materialize the element back into a value.
    pub fn to_value(&self) -> Value {
        match self {
            SetElem::Null => Value::Null,
            SetElem::Bool(b) => Value::Bool(*b),
            SetElem::Int(n) => Value::Int(*n),
            SetElem::Float(bits) => Value::Float(f64::from_bits(*bits)),
            SetElem::Str(s) => Value::Str(s.clone()),
            SetElem::Ident(s) => Value::Ident(s.clone()),
            SetElem::Bytes(bytes) => Value::Bytes(bytes.clone()),
            SetElem::Tuple(items) => Value::Tuple(items.iter().map(SetElem::to_value).collect()),
        }
    }
}

/// A set of hashable values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValueSet {
    elems: FxHashSet<SetElem>,
}

impl ValueSet {
    pub fn new() -> Self {
        ValueSet::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Insert an element; returns `false` if it was already present.
    pub fn insert(&mut self, elem: SetElem) -> bool {
        self.elems.insert(elem)
    }

    pub fn contains(&self, elem: &SetElem) -> bool {
        self.elems.contains(elem)
    }

    /// Union, consuming both sides.
    #[must_use]
    pub fn union(mut self, other: ValueSet) -> ValueSet {
        self.elems.extend(other.elems);
        self
    }

    /// Cartesian product as a set of 2-tuples.
    #[must_use]
    pub fn product(&self, other: &ValueSet) -> ValueSet {
        let mut out = ValueSet::new();
        for a in &self.elems {
            for b in &other.elems {
                out.insert(SetElem::Tuple(vec![a.clone(), b.clone()]));
            }
        }
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = &SetElem> {
        self.elems.iter()
    }
}

impl FromIterator<SetElem> for ValueSet {
    fn from_iter<I: IntoIterator<Item = SetElem>>(iter: I) -> Self {
        ValueSet {
            elems: iter.into_iter().collect(),
        }
    }
}
