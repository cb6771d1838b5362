//! Grammar rules, lowest precedence first:
//!
//! ```text
//! Expr -> Term ("+" Term | "-" Term)*
//! Term -> Atom ("*" Atom | "/" Atom)*
//! Atom -> "(" Expr ")" | integer
//! ```

use log::trace;

use crate::{
    ast::{ast::Node, operators::BinaryOperator},
    errors::errors::{Error, ErrorImpl},
    Span,
};

use super::parser::Parser;

pub fn parse_add_or_sub(parser: &mut Parser) -> Result<Node, Error> {
    trace!("parse_add_or_sub: current token = {:?}", parser.cursor().current_token().value);
    let mut node = parse_mul_or_div(parser)?;

    while !parser.cursor().at_end() {
        let Some((operator, span)) =
            match_operator(parser, &[BinaryOperator::Add, BinaryOperator::Sub])
        else {
            break;
        };

        let right = parse_mul_or_div(parser)?;
        node = parser.make_binary(operator, node, right, span);
    }

    Ok(node)
}

pub fn parse_mul_or_div(parser: &mut Parser) -> Result<Node, Error> {
    trace!("parse_mul_or_div: current token = {:?}", parser.cursor().current_token().value);
    let mut node = parse_num_or_bracket(parser)?;

    while !parser.cursor().at_end() {
        let Some((operator, span)) =
            match_operator(parser, &[BinaryOperator::Mul, BinaryOperator::Div])
        else {
            break;
        };

        let right = parse_num_or_bracket(parser)?;
        node = parser.make_binary(operator, node, right, span);
    }

    Ok(node)
}

pub fn parse_num_or_bracket(parser: &mut Parser) -> Result<Node, Error> {
    trace!("parse_num_or_bracket: current token = {:?}", parser.cursor().current_token().value);

    if parser.cursor().is_open_paren() {
        parser.enter_group(parser.get_position())?;
        parser.cursor_mut().eat_operator()?;
        let node = parse_add_or_sub(parser)?;

        if !parser.cursor().is_close_paren() {
            return Err(Error::new(
                ErrorImpl::ExpectedCloseParen {
                    token: parser.cursor().current_token().value.clone(),
                },
                parser.get_position(),
            ));
        }
        parser.cursor_mut().eat_operator()?;
        parser.exit_group();

        return Ok(node);
    }

    if parser.cursor().at_end() {
        return Err(Error::new(ErrorImpl::UnexpectedEndOfInput, parser.get_position()));
    }

    if !parser.cursor().is_integer() {
        return Err(Error::new(
            ErrorImpl::ExpectedNumber {
                token: parser.cursor().current_token().value.clone(),
            },
            parser.get_position(),
        ));
    }

    let token = parser.cursor_mut().eat_integer()?;
    let Some(value) = token.number else {
        return Err(Error::new(
            ErrorImpl::Internal {
                message: String::from("integer token without a value"),
            },
            token.span.start,
        ));
    };

    Ok(parser.make_number(value, token.span))
}

/// Consumes the first of `operators` whose symbol is the current token.
///
/// Returns the operator with the span of the consumed token.
fn match_operator(parser: &mut Parser, operators: &[BinaryOperator]) -> Option<(BinaryOperator, Span)> {
    let span = parser.cursor().current_token().span.clone();

    operators
        .iter()
        .copied()
        .find(|operator| parser.cursor_mut().lookahead(1, operator.symbol()))
        .map(|operator| (operator, span))
}
