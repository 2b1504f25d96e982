//! Evaluator for the Lax dialect.
//!
//! Walks a parsed [`Expr`] and materializes a [`Value`]. All operators are
//! eager; a conditional evaluates both branches and returns the taken one,
//! so arithmetic errors in the untaken branch still surface. The only
//! deferred construct is a declaration's value component, which stays a
//! raw token run inside the produced value.

mod errors;
mod ops;

pub use errors::{EvalError, EvalErrorKind, EvalResult};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use errors::{invalid_base64, non_boolean_condition, unhashable};
use lax_ir::{BinaryOp, Declaration, Expr, Lit, SetElem, Value, ValueMap, ValueSet};
use tracing::debug;

/// Evaluate an expression tree.
pub fn evaluate(expr: &Expr) -> EvalResult {
    match expr {
        Expr::Lit(lit) => literal(lit),
        Expr::Ident(name) => Ok(Value::Ident(name.clone())),
        Expr::List(items) => Ok(Value::List(eval_all(items)?)),
        Expr::Tuple(items) => Ok(Value::Tuple(eval_all(items)?)),
        Expr::Set(items) => {
            let mut set = ValueSet::new();
            for item in items {
                let value = evaluate(item)?;
                let elem = SetElem::try_from_value(&value).ok_or_else(|| unhashable(&value))?;
                set.insert(elem);
            }
            Ok(Value::Set(set))
        }
        Expr::Mapping(entries) => {
            let mut map = ValueMap::default();
            for (key, value) in entries {
                // Keys coerce to their canonical string form; duplicates
                // keep the last value.
                let key = evaluate(key)?.to_string();
                map.insert(key, evaluate(value)?);
            }
            Ok(Value::Map(map))
        }
        Expr::Binary { op, left, right } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            debug!(op = op.as_str(), "evaluating operator");
            match op {
                BinaryOp::Concat => ops::concat(left, right),
                BinaryOp::Mul => ops::multiply(left, right),
                BinaryOp::Div => ops::divide(left, right),
                BinaryOp::Contains => ops::contains(left, right),
            }
        }
        Expr::If {
            cond,
            then_branch,
            else_branch,
        } => {
            let cond = evaluate(cond)?;
            let Value::Bool(flag) = cond else {
                return Err(non_boolean_condition(&cond));
            };
            let then_value = evaluate(then_branch)?;
            let else_value = evaluate(else_branch)?;
            Ok(if flag { then_value } else { else_value })
        }
        Expr::Pipe { left, right } => Ok(Value::Pipe(
            Box::new(evaluate(left)?),
            Box::new(evaluate(right)?),
        )),
        Expr::FuncType { left, right } => Ok(Value::FuncType(
            tuple_coerce(evaluate(left)?),
            tuple_coerce(evaluate(right)?),
        )),
        Expr::Decl { name, ty, value } => Ok(Value::Decl(Declaration {
            name: Box::new(evaluate(name)?),
            ty: Box::new(evaluate(ty)?),
            body: value.clone(),
        })),
        Expr::ArgGroup(groups) => {
            let mut map = ValueMap::default();
            for (key, values) in groups {
                let key = evaluate(key)?.to_string();
                map.insert(key, Value::List(eval_all(values)?));
            }
            Ok(Value::Map(map))
        }
        Expr::Lines(items) => Ok(Value::List(eval_all(items)?)),
    }
}

fn eval_all(items: &[Expr]) -> Result<Vec<Value>, EvalError> {
    items.iter().map(evaluate).collect()
}

fn literal(lit: &Lit) -> EvalResult {
    match lit {
        Lit::Int(n) => Ok(Value::Int(*n)),
        Lit::Float(x) => Ok(Value::Float(*x)),
        Lit::Str(text) => Ok(Value::Str(text.clone())),
        Lit::Base64(body) => STANDARD
            .decode(body)
            .map(Value::Bytes)
            .map_err(|_| invalid_base64()),
        Lit::Bool(flag) => Ok(Value::Bool(*flag)),
        Lit::Null => Ok(Value::Null),
    }
}

/// Function-type sides coerce to tuples: a non-tuple wraps into a 1-tuple.
fn tuple_coerce(value: Value) -> Vec<Value> {
    match value {
        Value::Tuple(items) => items,
        other => vec![other],
    }
}

#[cfg(test)]
mod tests;
