//! Integration tests for the full pipeline.
//!
//! These tests go from source text through tokenization and parsing to the
//! JSON form of the tree, using only the public API.

use exprtree::{
    ast::{from_json, to_json, to_json_compact, Expr, Number, Operator},
    errors::errors::ErrorImpl,
    lexer::lexer::tokenize,
    parse_source,
    parser::parser::parse,
    render_error,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn tree_json(source: &str) -> Value {
    let tokens = tokenize(source).unwrap();
    let ast = parse(tokens).unwrap();
    serde_json::from_str(&to_json(&ast).unwrap()).unwrap()
}

#[test]
fn test_precedence_json() {
    assert_eq!(
        tree_json("3 + 4 * 5"),
        json!({
            "type": "binary",
            "operator": "+",
            "left": { "type": "literal", "value": 3 },
            "right": {
                "type": "binary",
                "operator": "*",
                "left": { "type": "literal", "value": 4 },
                "right": { "type": "literal", "value": 5 }
            }
        })
    );
}

#[test]
fn test_unary_json() {
    assert_eq!(
        tree_json("-3 + 4"),
        json!({
            "type": "binary",
            "operator": "+",
            "left": {
                "type": "unary",
                "operator": "-",
                "operand": { "type": "literal", "value": 3 }
            },
            "right": { "type": "literal", "value": 4 }
        })
    );
}

#[test]
fn test_call_json() {
    assert_eq!(
        tree_json("func(1, 2 + 3)"),
        json!({
            "type": "call",
            "callee": { "type": "identifier", "name": "func" },
            "arguments": [
                { "type": "literal", "value": 1 },
                {
                    "type": "binary",
                    "operator": "+",
                    "left": { "type": "literal", "value": 2 },
                    "right": { "type": "literal", "value": 3 }
                }
            ]
        })
    );
    assert_eq!(
        tree_json("f()"),
        json!({
            "type": "call",
            "callee": { "type": "identifier", "name": "f" },
            "arguments": []
        })
    );
}

#[test]
fn test_numeric_fidelity_in_json() {
    let ast = parse_source("2.0 / 2").unwrap();

    assert_eq!(
        to_json_compact(&ast).unwrap(),
        r#"{"type":"binary","operator":"/","left":{"type":"literal","value":2.0},"right":{"type":"literal","value":2}}"#
    );
}

#[test]
fn test_json_reads_back() {
    let ast = parse_source("-(a + 1.5) * g(2, h())").unwrap();
    let restored = from_json(&to_json(&ast).unwrap()).unwrap();

    assert_eq!(restored, ast);
    match restored {
        Expr::Binary { right, .. } => match *right {
            Expr::Call { arguments, .. } => {
                assert_eq!(arguments[0], Expr::Literal { value: Number::Int(2) })
            }
            other => panic!("expected call, got {}", other),
        },
        other => panic!("expected binary, got {}", other),
    }
}

#[test]
fn test_from_json_hand_written() {
    let expr = from_json(
        r#"{"type":"unary","operator":"-","operand":{"type":"literal","value":0.5}}"#,
    )
    .unwrap();

    assert_eq!(expr, Expr::unary(Operator::Minus, Expr::float(0.5)));
}

#[test]
fn test_grouping_is_not_represented() {
    assert_eq!(parse_source("(((7)))").unwrap(), parse_source("7").unwrap());
}

#[test]
fn test_errors_surface_from_each_stage() {
    let err = parse_source("3 & 4").unwrap_err();
    assert_eq!(err.kind(), &ErrorImpl::UnexpectedCharacter { character: '&' });

    let err = parse_source("(3 + 4").unwrap_err();
    assert_eq!(err.kind(), &ErrorImpl::ExpectedClosingParen);

    let err = parse_source("1..2 + 3").unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorImpl::MalformedNumber {
            lexeme: "1..2".to_string()
        }
    );
}

#[test]
fn test_render_error_for_missing_operand() {
    let source = "4 * (2 -";
    let err = parse_source(source).unwrap_err();

    assert_eq!(err.kind(), &ErrorImpl::UnexpectedEndOfInput);
    assert_eq!(
        render_error(&err, source),
        "Error: UnexpectedEndOfInput (Expression ended early, is an operand missing?)\n  |\n1 | 4 * (2 -\n  | --------^\n"
    );
}

#[test]
fn test_independent_parses_on_threads() {
    let sources = ["3 + 4 * 5", "f(1, 2 + 3)", "-x / (y - 1)", "a(b(c(d)))"];

    let handles = sources
        .iter()
        .map(|source| {
            let source = source.to_string();
            std::thread::spawn(move || parse_source(&source).map(|expr| expr.to_string()))
        })
        .collect::<Vec<_>>();

    let results = handles
        .into_iter()
        .map(|handle| handle.join().unwrap().unwrap())
        .collect::<Vec<_>>();

    assert_eq!(
        results,
        vec![
            "(3 + (4 * 5))",
            "f(1, (2 + 3))",
            "((-x) / (y - 1))",
            "a(b(c(d)))"
        ]
    );
}

#[test]
fn test_deeply_nested_input_terminates() {
    let depth = 200;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));

    assert_eq!(parse_source(&source).unwrap(), Expr::int(1));

    let source = format!("{}x", "-".repeat(depth));
    assert_eq!(parse_source(&source).unwrap().node_count(), depth + 1);
}
