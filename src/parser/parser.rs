//! Parser state and the parsing entry point.
//!
//! The parser owns the cursor for a single parse and builds nodes through
//! `make_number`/`make_binary`, which also keep the diagnostic node count.

use std::rc::Rc;

use log::debug;

use crate::{
    ast::{ast::Node, operators::BinaryOperator},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::Token,
    Position, Span,
};

use super::{cursor::Cursor, expr::parse_add_or_sub};

/// Parser behavior options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseOptions {
    /// Maximum parenthesis nesting depth.
    pub max_nesting: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { max_nesting: 256 }
    }
}

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Position in the token stream
    cursor: Cursor,
    /// The name of the source file being parsed
    file: Rc<String>,
    options: ParseOptions,
    /// Currently open parentheses
    depth: usize,
    /// Nodes built so far, diagnostics only
    node_count: usize,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Vector of tokens to parse, normally ending with an EOF token
    /// * `file` - Reference-counted string containing the source file name
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        Parser::with_options(tokens, file, ParseOptions::default())
    }

    /// Creates a parser with explicit options.
    pub fn with_options(tokens: Vec<Token>, file: Rc<String>, options: ParseOptions) -> Self {
        Parser {
            cursor: Cursor::new(tokens, Rc::clone(&file)),
            file,
            options,
            depth: 0,
            node_count: 0,
        }
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    pub fn get_file(&self) -> &Rc<String> {
        &self.file
    }

    /// Enters a parenthesised subexpression opened at `position`.
    ///
    /// Fails with `NestingTooDeep` once more than `max_nesting` are open.
    pub fn enter_group(&mut self, position: Position) -> Result<(), Error> {
        if self.depth >= self.options.max_nesting {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: self.options.max_nesting,
                },
                position,
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn exit_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.cursor.get_position()
    }

    /// Number of nodes created by this parser.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn make_number(&mut self, value: i64, span: Span) -> Node {
        self.node_count += 1;
        Node::number(value, span)
    }

    pub fn make_binary(
        &mut self,
        operator: BinaryOperator,
        left: Node,
        right: Node,
        span: Span,
    ) -> Node {
        self.node_count += 1;
        Node::binary(operator, left, right, span)
    }

    /// Parses a single expression starting at the cursor.
    ///
    /// Tokens following the expression are left in place.
    pub fn parse_expression(&mut self) -> Result<Node, Error> {
        parse_add_or_sub(self)
    }

    /// Fails with `TrailingInput` unless the cursor is on EOF.
    pub fn expect_end(&self) -> Result<(), Error> {
        if self.cursor.at_end() {
            return Ok(());
        }

        Err(Error::new(
            ErrorImpl::TrailingInput {
                token: self.cursor.current_token().value.clone(),
            },
            self.get_position(),
        ))
    }
}

/// Parses a stream of tokens into an expression tree.
///
/// The whole sequence must form one expression: anything left over after the
/// root expression, such as an unmatched `)`, is a `TrailingInput` error.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (with state after parsing)
/// - Result containing either the root Node or an Error
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> (Parser, Result<Node, Error>) {
    parse_with_options(tokens, file, ParseOptions::default())
}

/// Like [`parse`], with explicit parser options.
pub fn parse_with_options(
    tokens: Vec<Token>,
    file: Rc<String>,
    options: ParseOptions,
) -> (Parser, Result<Node, Error>) {
    let mut parser = Parser::with_options(tokens, file, options);

    let result = parser.parse_expression().and_then(|root| {
        parser.expect_end()?;
        Ok(root)
    });

    match &result {
        Ok(_) => debug!("parsed {} with {} nodes", parser.get_file(), parser.node_count()),
        Err(error) => debug!("failed to parse {}: {}", parser.get_file(), error),
    }

    (parser, result)
}
