//! Canonical writer.
//!
//! Emits a conservative subset of the dialect that [`crate::decode`]
//! reads back unchanged: ASCII `"` strings, `$"…"` Base64 for bytes,
//! bracketed containers, sorted mapping keys. Identifier values are
//! written as quoted strings (never as bare identifiers), so they
//! re-decode as strings. Values with no textual form — pipes, function
//! types, declarations, empty sets, non-finite floats — are errors.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use lax_ir::{format_float, Value};

/// A value that cannot be written in the canonical subset.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// Pipes, function types, and declarations only exist as evaluation
    /// results; the grammar has no literal for them.
    #[error("{0} values have no textual form")]
    Unrepresentable(&'static str),
    /// `{}` reads back as an empty mapping, so an empty set cannot be
    /// round-tripped.
    #[error("empty sets have no textual form")]
    EmptySet,
    /// NaN and infinities have no literal.
    #[error("non-finite floats have no textual form")]
    NonFiniteFloat,
}

/// Write a value as canonical source text.
pub fn encode(value: &Value) -> Result<String, EncodeError> {
    let mut out = String::new();
    write_value(&mut out, value)?;
    Ok(out)
}

fn write_value(out: &mut String, value: &Value) -> Result<(), EncodeError> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Int(n) => out.push_str(&n.to_string()),
        Value::Float(x) => {
            if !x.is_finite() {
                return Err(EncodeError::NonFiniteFloat);
            }
            out.push_str(&format_float(*x));
        }
        Value::Str(text) | Value::Ident(text) => write_quoted(out, text),
        Value::Bytes(bytes) => {
            out.push_str("$\"");
            out.push_str(&STANDARD.encode(bytes));
            out.push('"');
        }
        Value::List(items) => {
            out.push('[');
            write_items(out, items)?;
            out.push(']');
        }
        Value::Tuple(items) => {
            out.push('(');
            if items.is_empty() {
                // `(,)` is the only spelling of an empty tuple: the comma
                // forces the tuple matcher, and empty partitions drop.
                out.push(',');
            } else {
                write_items(out, items)?;
                if items.len() == 1 {
                    out.push(',');
                }
            }
            out.push(')');
        }
        Value::Set(set) => {
            if set.is_empty() {
                return Err(EncodeError::EmptySet);
            }
            let mut rendered = set
                .iter()
                .map(|elem| encode(&elem.to_value()))
                .collect::<Result<Vec<_>, _>>()?;
            rendered.sort_unstable();
            out.push('{');
            out.push_str(&rendered.join(", "));
            out.push('}');
        }
        Value::Map(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_unstable_by_key(|(key, _)| *key);
            out.push('{');
            for (i, (key, value)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_quoted(out, key);
                out.push_str(": ");
                write_value(out, value)?;
            }
            out.push('}');
        }
        Value::Pipe(..) | Value::FuncType(..) | Value::Decl(_) => {
            return Err(EncodeError::Unrepresentable(value.type_name()));
        }
    }
    Ok(())
}

fn write_items(out: &mut String, items: &[Value]) -> Result<(), EncodeError> {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_value(out, item)?;
    }
    Ok(())
}

/// ASCII-quoted string with `\n`, `\t`, `\"`, `\\` escapes; other control
/// characters become `\uXXXX`.
fn write_quoted(out: &mut String, text: &str) {
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
