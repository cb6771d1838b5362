//! Unit tests for the parser module.
//!
//! This module contains tests for:
//! - Cursor predicates and lookahead
//! - Precedence and associativity
//! - Parenthesised subexpressions
//! - Error cases and trailing input

use std::rc::Rc;

use crate::{
    ast::{ast::Node, operators::BinaryOperator},
    errors::errors::{Error, ErrorImpl},
    interpreter::eval::evaluate,
    lexer::{lexer::tokenize, tokens::TokenKind},
};

use super::{
    cursor::Cursor,
    parser::{parse, parse_with_options, ParseOptions, Parser},
};

fn parse_source(source: &str) -> (Parser, Result<Node, Error>) {
    let tokens = tokenize(source, Some("test.txt".to_string())).unwrap();
    parse(tokens, Rc::new("test.txt".to_string()))
}

fn cursor_for(source: &str) -> Cursor {
    let tokens = tokenize(source, Some("test.txt".to_string())).unwrap();
    Cursor::new(tokens, Rc::new("test.txt".to_string()))
}

fn eval_source(source: &str) -> i64 {
    let (_, result) = parse_source(source);
    evaluate(&result.unwrap()).unwrap()
}

#[test]
fn test_cursor_predicates() {
    let mut cursor = cursor_for("(1)+");

    assert!(cursor.is_open_paren());
    assert!(cursor.is_operator());
    assert!(!cursor.is_integer());
    cursor.advance().unwrap();

    assert!(cursor.is_integer());
    assert!(!cursor.is_operator());
    cursor.advance().unwrap();

    assert!(cursor.is_close_paren());
    assert!(!cursor.is_open_paren());
    cursor.advance().unwrap();

    assert!(cursor.is_operator());
    assert!(!cursor.is_close_paren());
    cursor.advance().unwrap();

    assert!(cursor.at_end());
    assert!(!cursor.is_operator());
}

#[test]
fn test_cursor_advance_past_end_is_reported() {
    let mut cursor = cursor_for("");
    assert!(cursor.at_end());

    let error = cursor.advance().unwrap_err();
    assert_eq!(error.get_error_name(), "Internal");
    assert_eq!(cursor.index(), 0);
}

#[test]
fn test_cursor_at_end_within() {
    let cursor = cursor_for("1 + 2");

    assert!(!cursor.at_end_within(0));
    assert!(!cursor.at_end_within(3));
    assert!(cursor.at_end_within(4));
    assert!(cursor.at_end_within(10));
}

#[test]
fn test_lookahead_consumes_on_match() {
    let mut cursor = cursor_for("* 2");

    assert!(!cursor.lookahead(1, "/"));
    assert_eq!(cursor.index(), 0);

    assert!(cursor.lookahead(1, "*"));
    assert_eq!(cursor.index(), 1);
    assert!(cursor.is_integer());
}

#[test]
fn test_lookahead_multiple_tokens() {
    let mut cursor = cursor_for("* * 3");

    assert!(!cursor.lookahead(2, "*"));
    assert_eq!(cursor.index(), 0);

    assert!(cursor.lookahead(2, "**"));
    assert_eq!(cursor.index(), 2);
}

#[test]
fn test_lookahead_never_matches_end_of_input() {
    let mut cursor = cursor_for("+");

    assert!(!cursor.lookahead(2, "+EOF"));
    assert!(!cursor.lookahead(2, "+"));
    assert_eq!(cursor.index(), 0);

    assert!(cursor.lookahead(1, "+"));
    assert!(cursor.at_end());
    assert!(!cursor.lookahead(1, "EOF"));
}

#[test]
fn test_eat_helpers_check_kind() {
    let mut cursor = cursor_for("1 +");

    let error = cursor.eat_operator().unwrap_err();
    assert_eq!(error.get_error_name(), "ExpectedOperator");
    assert_eq!(cursor.index(), 0);

    let token = cursor.eat_integer().unwrap();
    assert_eq!(token.number, Some(1));

    let error = cursor.eat_integer().unwrap_err();
    assert_eq!(error.get_error_name(), "ExpectedInteger");
    assert_eq!(error.get_position().0, 2);

    cursor.eat_operator().unwrap();

    let error = cursor.eat_operator().unwrap_err();
    assert_eq!(*error.get_internal_error(), ErrorImpl::UnexpectedEndOfInput);
}

#[test]
fn test_cursor_appends_missing_end_token() {
    let mut tokens = tokenize("7", None).unwrap();
    tokens.pop();

    let mut cursor = Cursor::new(tokens, Rc::new("shell".to_string()));
    cursor.eat_integer().unwrap();
    assert!(cursor.at_end());
    assert_eq!(cursor.current_token().kind, TokenKind::EOF);
    assert_eq!(cursor.get_position().0, 1);

    let (_, result) = parse(vec![], Rc::new("shell".to_string()));
    assert_eq!(*result.unwrap_err().get_internal_error(), ErrorImpl::UnexpectedEndOfInput);
}

#[test]
fn test_parse_single_number() {
    let (parser, result) = parse_source("42");
    let root = result.unwrap();

    assert!(root.is_number());
    assert_eq!(root.value(), Some(42));
    assert!(root.left().is_none());
    assert!(root.right().is_none());
    assert_eq!(parser.node_count(), 1);
}

#[test]
fn test_parse_precedence() {
    let (_, result) = parse_source("2+3*4");
    let root = result.unwrap();

    assert_eq!(root.operator(), Some(BinaryOperator::Add));
    assert_eq!(root.left().unwrap().value(), Some(2));
    assert_eq!(root.right().unwrap().operator(), Some(BinaryOperator::Mul));
    assert_eq!(eval_source("2+3*4"), 14);
    assert_eq!(eval_source("2*3+4"), 10);
    assert_eq!(eval_source("10-6/2"), 7);
}

#[test]
fn test_parse_left_associativity() {
    let (_, result) = parse_source("8-3-2");
    let root = result.unwrap();

    assert_eq!(root.operator(), Some(BinaryOperator::Sub));
    assert_eq!(root.right().unwrap().value(), Some(2));
    assert_eq!(root.left().unwrap().operator(), Some(BinaryOperator::Sub));
    assert_eq!(eval_source("8-3-2"), 3);
    assert_eq!(eval_source("64/4/2"), 8);
    assert_eq!(eval_source("8/2*4"), 16);
}

#[test]
fn test_parse_parentheses_override_precedence() {
    assert_eq!(eval_source("(2+3)*4"), 20);
    assert_eq!(eval_source("8-(3-2)"), 7);
    assert_eq!(eval_source("((((5))))"), 5);
    assert_eq!(eval_source("2*(3+(4-1))/3"), 4);
}

#[test]
fn test_parse_operator_spans() {
    let (_, result) = parse_source("1 + 2 * 3");
    let root = result.unwrap();

    assert_eq!(root.get_span().start.0, 2);
    assert_eq!(root.right().unwrap().get_span().start.0, 6);
    assert_eq!(root.left().unwrap().get_span().start.0, 0);
}

#[test]
fn test_parse_node_counts_match_input() {
    let cases = [
        ("7", 1, 0),
        ("1+2", 2, 1),
        ("(1+2)*(3-4)/5", 5, 4),
        ("1*2*3*4+5-6", 6, 5),
        ("((9))", 1, 0),
    ];

    for (source, numbers, operators) in cases {
        let (parser, result) = parse_source(source);
        let root = result.unwrap();

        assert_eq!(root.number_count(), numbers, "{}", source);
        assert_eq!(root.operator_count(), operators, "{}", source);
        assert_eq!(parser.node_count(), root.node_count(), "{}", source);
    }
}

#[test]
fn test_parse_unclosed_paren() {
    let (_, result) = parse_source("(1+2");
    let error = result.unwrap_err();

    assert_eq!(error.get_error_name(), "ExpectedCloseParen");
    assert_eq!(error.get_position().0, 4);

    let (_, result) = parse_source("(1 2)");
    let error = result.unwrap_err();
    assert_eq!(
        *error.get_internal_error(),
        ErrorImpl::ExpectedCloseParen {
            token: "2".to_string()
        }
    );
    assert_eq!(error.get_position().0, 3);
}

#[test]
fn test_parse_trailing_close_paren() {
    let (_, result) = parse_source("1+2)");
    let error = result.unwrap_err();

    assert_eq!(
        *error.get_internal_error(),
        ErrorImpl::TrailingInput {
            token: ")".to_string()
        }
    );
    assert_eq!(error.get_position().0, 3);
}

#[test]
fn test_parse_expression_leaves_trailing_tokens() {
    let tokens = tokenize("1+2)", None).unwrap();
    let mut parser = Parser::new(tokens, Rc::new("shell".to_string()));

    let root = parser.parse_expression().unwrap();
    assert_eq!(evaluate(&root).unwrap(), 3);
    assert!(parser.cursor().is_close_paren());
    assert!(parser.expect_end().is_err());
}

#[test]
fn test_parse_trailing_number() {
    let (_, result) = parse_source("1 2");
    let error = result.unwrap_err();

    assert_eq!(error.get_error_name(), "TrailingInput");
    assert_eq!(error.get_position().0, 2);
}

#[test]
fn test_parse_empty_input() {
    let (parser, result) = parse_source("");
    let error = result.unwrap_err();

    assert_eq!(*error.get_internal_error(), ErrorImpl::UnexpectedEndOfInput);
    assert_eq!(parser.node_count(), 0);
}

#[test]
fn test_parse_missing_operand() {
    let (_, result) = parse_source("1 +");
    let error = result.unwrap_err();
    assert_eq!(*error.get_internal_error(), ErrorImpl::UnexpectedEndOfInput);
    assert_eq!(error.get_position().0, 3);

    let (_, result) = parse_source("1 + * 2");
    let error = result.unwrap_err();
    assert_eq!(
        *error.get_internal_error(),
        ErrorImpl::ExpectedNumber {
            token: "*".to_string()
        }
    );
    assert_eq!(error.get_position().0, 4);

    let (_, result) = parse_source("()");
    assert_eq!(result.unwrap_err().get_error_name(), "ExpectedNumber");
}

#[test]
fn test_parse_leading_operator() {
    let (_, result) = parse_source("-1");
    let error = result.unwrap_err();

    assert_eq!(error.get_error_name(), "ExpectedNumber");
    assert_eq!(error.get_position().0, 0);
}

#[test]
fn test_independent_parsers() {
    let (first, first_result) = parse_source("1+2+3");
    let (second, second_result) = parse_source("4");

    assert_eq!(evaluate(&first_result.unwrap()).unwrap(), 6);
    assert_eq!(evaluate(&second_result.unwrap()).unwrap(), 4);
    assert_eq!(first.node_count(), 5);
    assert_eq!(second.node_count(), 1);
}

fn nested(depth: usize) -> String {
    format!("{}1{}", "(".repeat(depth), ")".repeat(depth))
}

#[test]
fn test_parse_nesting_at_default_limit() {
    let limit = ParseOptions::default().max_nesting;

    let (_, result) = parse_source(&nested(limit));
    assert_eq!(evaluate(&result.unwrap()).unwrap(), 1);

    let (_, result) = parse_source(&nested(limit + 1));
    let error = result.unwrap_err();
    assert_eq!(*error.get_internal_error(), ErrorImpl::NestingTooDeep { limit });
    assert_eq!(error.get_position().0, limit as u32);
}

#[test]
fn test_parse_very_deep_nesting_is_an_error() {
    let (_, result) = parse_source(&nested(2000));
    assert_eq!(result.unwrap_err().get_error_name(), "NestingTooDeep");
}

#[test]
fn test_parse_nesting_with_custom_limit() {
    let options = ParseOptions { max_nesting: 2 };

    let tokens = tokenize("((1)) + ((2) * (3))", None).unwrap();
    let (_, result) = parse_with_options(tokens, Rc::new("shell".to_string()), options);
    assert_eq!(evaluate(&result.unwrap()).unwrap(), 7);

    let tokens = tokenize("1 + ((2 * (3)))", None).unwrap();
    let (_, result) = parse_with_options(tokens, Rc::new("shell".to_string()), options);
    let error = result.unwrap_err();
    assert_eq!(*error.get_internal_error(), ErrorImpl::NestingTooDeep { limit: 2 });
    assert_eq!(error.get_position().0, 10);
}

#[test]
fn test_parse_long_flat_chain() {
    let source = vec!["1"; 20_000].join("+");
    let (parser, result) = parse_source(&source);
    let root = result.unwrap();

    assert_eq!(parser.node_count(), 39_999);
    assert_eq!(root.number_count(), 20_000);
    assert_eq!(root.operator_count(), 19_999);
}
