use super::*;
use lax_lexer::{fuse_signed_numbers, reject_comments, tokenize};
use pretty_assertions::assert_eq;

/// Full pipeline: lex, normalize, parse, evaluate.
fn eval_src(src: &str) -> Value {
    match try_eval(src) {
        Ok(value) => value,
        Err(error) => unreachable!("evaluating {src:?} failed: {error}"),
    }
}

fn try_eval(src: &str) -> Result<Value, EvalError> {
    let tokens = match tokenize(src) {
        Ok(tokens) => tokens,
        Err(error) => unreachable!("lexing {src:?} failed: {error}"),
    };
    let tokens = fuse_signed_numbers(reject_comments(tokens));
    let expr = match lax_parse::parse(&tokens) {
        Ok(expr) => expr,
        Err(error) => unreachable!("parsing {src:?} failed: {error}"),
    };
    evaluate(&expr)
}

fn map_of(entries: &[(&str, Value)]) -> Value {
    let mut map = ValueMap::default();
    for (key, value) in entries {
        map.insert((*key).to_string(), value.clone());
    }
    Value::Map(map)
}

// === Atoms and containers ===

#[test]
fn scalars() {
    assert_eq!(eval_src("42"), Value::Int(42));
    assert_eq!(eval_src("-1"), Value::Int(-1));
    assert_eq!(eval_src("2.5"), Value::Float(2.5));
    assert_eq!(eval_src("true"), Value::Bool(true));
    assert_eq!(eval_src("none"), Value::Null);
    assert_eq!(eval_src("\"hi\""), Value::Str("hi".into()));
    assert_eq!(eval_src("banana"), Value::Ident("banana".into()));
}

#[test]
fn base64_literal_decodes_to_bytes() {
    assert_eq!(eval_src("$\"aGVsbG8=\""), Value::Bytes(b"hello".to_vec()));
}

#[test]
fn invalid_base64_is_a_value_error() {
    let error = match try_eval("$\"not base64!\"") {
        Err(error) => error,
        Ok(value) => unreachable!("expected error, got {value}"),
    };
    assert_eq!(error.kind, EvalErrorKind::Value);
    assert_eq!(error.to_string(), "invalid base64");
}

#[test]
fn list_and_tuple_values() {
    assert_eq!(
        eval_src("[1, 2.0, true, null, none]"),
        Value::List(vec![
            Value::Int(1),
            Value::Float(2.0),
            Value::Bool(true),
            Value::Null,
            Value::Null,
        ])
    );
    assert_eq!(
        eval_src("(1, 2)"),
        Value::Tuple(vec![Value::Int(1), Value::Int(2)])
    );
}

#[test]
fn mapping_keys_stringify() {
    assert_eq!(
        eval_src("{\"name\": \"张三\", \"age\": 18}"),
        map_of(&[
            ("name", Value::Str("张三".into())),
            ("age", Value::Int(18)),
        ])
    );
    assert_eq!(
        eval_src("{1: \"a\", true: \"b\", 2.0: \"c\"}"),
        map_of(&[
            ("1", Value::Str("a".into())),
            ("true", Value::Str("b".into())),
            ("2.0", Value::Str("c".into())),
        ])
    );
}

#[test]
fn mapping_duplicate_keys_keep_last() {
    assert_eq!(
        eval_src("{a: 1, a: 2}"),
        map_of(&[("a", Value::Int(2))])
    );
}

#[test]
fn empty_braces_evaluate_to_empty_mapping() {
    assert_eq!(eval_src("{}"), map_of(&[]));
}

#[test]
fn set_of_identifiers() {
    let expected: ValueSet = [
        SetElem::Ident("a".into()),
        SetElem::Ident("b".into()),
        SetElem::Ident("c".into()),
    ]
    .into_iter()
    .collect();
    assert_eq!(eval_src("{a, b, c}"), Value::Set(expected));
}

#[test]
fn set_deduplicates_values() {
    let expected: ValueSet = [SetElem::Int(1), SetElem::Int(2)].into_iter().collect();
    assert_eq!(eval_src("{1, 2, 1}"), Value::Set(expected));
}

#[test]
fn set_with_unhashable_element_errors() {
    let error = match try_eval("{[1]}") {
        Err(error) => error,
        Ok(value) => unreachable!("expected error, got {value}"),
    };
    assert_eq!(error.kind, EvalErrorKind::Type);
    assert_eq!(error.to_string(), "unhashable type: list");
}

// === Operators, end to end ===

#[test]
fn concat_chains_are_right_recursive() {
    // Right bias shows through mapping merge: the last duplicate wins.
    assert_eq!(
        eval_src("{a: 1} + {a: 2} + {a: 3}"),
        map_of(&[("a", Value::Int(3))])
    );
}

#[test]
fn tuple_concatenation() {
    assert_eq!(
        eval_src("(1, 2) + (3,)"),
        Value::Tuple(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
    );
}

#[test]
fn string_replication() {
    assert_eq!(eval_src("\"ab\" * 3"), Value::Str("ababab".into()));
}

#[test]
fn elementwise_list_product() {
    assert_eq!(
        eval_src("[1, 2] * [3, 4]"),
        Value::List(vec![Value::Int(3), Value::Int(8)])
    );
}

#[test]
fn set_cartesian_product() {
    let expected: ValueSet = [
        SetElem::Tuple(vec![SetElem::Int(1), SetElem::Int(3)]),
        SetElem::Tuple(vec![SetElem::Int(2), SetElem::Int(3)]),
    ]
    .into_iter()
    .collect();
    assert_eq!(eval_src("{1, 2} * {3}"), Value::Set(expected));
}

#[test]
fn membership_on_lists() {
    assert_eq!(eval_src("1 :> [1, 2, 3]"), Value::Bool(true));
    assert_eq!(eval_src("4 :> [1, 2, 3]"), Value::Bool(false));
}

#[test]
fn division_yields_floats() {
    assert_eq!(eval_src("7 / 2"), Value::Float(3.5));
}

#[test]
fn conditional_returns_taken_branch() {
    assert_eq!(eval_src("true ? \"y\" : \"n\""), Value::Str("y".into()));
    assert_eq!(eval_src("false ? \"y\" : \"n\""), Value::Str("n".into()));
}

#[test]
fn conditional_requires_boolean() {
    let error = match try_eval("1 ? 2 : 3") {
        Err(error) => error,
        Ok(value) => unreachable!("expected error, got {value}"),
    };
    assert_eq!(error.kind, EvalErrorKind::Type);
}

#[test]
fn pipe_produces_a_pair() {
    assert_eq!(
        eval_src("1 |> 2"),
        Value::Pipe(Box::new(Value::Int(1)), Box::new(Value::Int(2)))
    );
}

#[test]
fn function_type_coerces_to_tuples() {
    assert_eq!(
        eval_src("(a, b) -> c"),
        Value::FuncType(
            vec![Value::Ident("a".into()), Value::Ident("b".into())],
            vec![Value::Ident("c".into())],
        )
    );
}

#[test]
fn declaration_defers_its_body() {
    let value = eval_src("x : int := 1 + 2");
    let Value::Decl(decl) = value else {
        unreachable!("expected declaration value");
    };
    assert_eq!(*decl.name, Value::Ident("x".into()));
    assert_eq!(*decl.ty, Value::Ident("int".into()));
    let body: Vec<&str> = decl.body.iter().map(lax_ir::Token::lexeme).collect();
    assert_eq!(body, vec!["1", "+", "2"]);
}

#[test]
fn argument_group_builds_a_mapping_of_lists() {
    assert_eq!(
        eval_src("--a 1 --b 2 3"),
        map_of(&[
            ("a", Value::List(vec![Value::Int(1)])),
            (
                "b",
                Value::List(vec![Value::Int(2), Value::Int(3)])
            ),
        ])
    );
}

#[test]
fn argument_group_duplicate_keys_keep_last() {
    assert_eq!(
        eval_src("--a 1 --a 2"),
        map_of(&[("a", Value::List(vec![Value::Int(2)]))])
    );
}

#[test]
fn lines_evaluate_to_a_list() {
    assert_eq!(
        eval_src("1; \"x\"; [2]"),
        Value::List(vec![
            Value::Int(1),
            Value::Str("x".into()),
            Value::List(vec![Value::Int(2)]),
        ])
    );
}

#[test]
fn nested_scenario_with_identifiers() {
    // (A :> [A,B]) ? ({A:1,B:2}+{C:3}) : ({1,2}*{3})
    let value = eval_src("(A :> [A,B]) ? ({A:1,B:2}+{C:3}) : ({1,2}*{3})");
    assert_eq!(
        value,
        map_of(&[
            ("A", Value::Int(1)),
            ("B", Value::Int(2)),
            ("C", Value::Int(3)),
        ])
    );
}
