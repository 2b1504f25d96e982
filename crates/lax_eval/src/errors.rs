//! Evaluation error types and constructors.
//!
//! Every failure mode gets a `#[cold]` constructor so call sites stay
//! small and messages stay in one place.

use lax_ir::Value;
use std::fmt;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Broad class of failure, mirroring the dialect's error taxonomy.
    pub kind: EvalErrorKind,
    /// Human-readable message.
    pub message: String,
}

/// Class of evaluation failure.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// An operator met operand types it is not defined for.
    Type,
    /// A literal's payload is malformed (bad Base64).
    Value,
}

impl EvalError {
    fn type_error(message: impl Into<String>) -> Self {
        EvalError {
            kind: EvalErrorKind::Type,
            message: message.into(),
        }
    }

    fn value_error(message: impl Into<String>) -> Self {
        EvalError {
            kind: EvalErrorKind::Value,
            message: message.into(),
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

/// `+` between incompatible operand types.
#[cold]
pub fn invalid_concat(left: &Value, right: &Value) -> EvalError {
    EvalError::type_error(format!(
        "cannot concatenate {} and {}",
        left.type_name(),
        right.type_name()
    ))
}

/// `*`/`/` between incompatible operand types.
#[cold]
pub fn invalid_mul_div(op: &str, left: &Value, right: &Value) -> EvalError {
    EvalError::type_error(format!(
        "cannot apply `{op}` to {} and {}",
        left.type_name(),
        right.type_name()
    ))
}

/// `:>` with a right operand that supports no membership.
#[cold]
pub fn invalid_contains(left: &Value, right: &Value) -> EvalError {
    EvalError::type_error(format!(
        "cannot test membership of {} in {}",
        left.type_name(),
        right.type_name()
    ))
}

/// Element-wise `*`/`/` over lists of different lengths.
#[cold]
pub fn length_mismatch(op: &str, left: usize, right: usize) -> EvalError {
    EvalError::type_error(format!(
        "element-wise `{op}` needs equal lengths, found {left} and {right}"
    ))
}

/// Division by integer or float zero.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::type_error("division by zero")
}

/// Checked integer arithmetic overflowed.
#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::type_error(format!("integer overflow in {operation}"))
}

/// Conditional whose condition is not a Boolean.
#[cold]
pub fn non_boolean_condition(cond: &Value) -> EvalError {
    EvalError::type_error(format!(
        "conditional requires a boolean condition, found {}",
        cond.type_name()
    ))
}

/// A set element (or membership probe) that cannot be hashed.
#[cold]
pub fn unhashable(value: &Value) -> EvalError {
    EvalError::type_error(format!("unhashable type: {}", value.type_name()))
}

/// A `$"…"` body that is not valid Base64.
#[cold]
pub fn invalid_base64() -> EvalError {
    EvalError::value_error("invalid base64")
}
