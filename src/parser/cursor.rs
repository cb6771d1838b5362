//! Forward-only cursor over the token sequence.
//!
//! The cursor answers predicates about the current token and consumes tokens
//! without ever rewinding. `lookahead` either consumes every token it matched or
//! none at all, so the grammar never needs to backtrack.

use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

pub struct Cursor {
    /// Always ends with exactly one EOF token
    tokens: Vec<Token>,
    pos: usize,
}

impl Cursor {
    /// Creates a cursor at the first token.
    ///
    /// If the sequence is not terminated by an EOF token one is appended, placed
    /// right after the last token.
    pub fn new(mut tokens: Vec<Token>, file: Rc<String>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(|| Position(0, Rc::clone(&file)));
            tokens.push(MK_TOKEN!(
                TokenKind::EOF,
                String::from("EOF"),
                Span { start: end.clone(), end }
            ));
        }

        Cursor { tokens, pos: 0 }
    }

    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Index of the current token.
    pub fn index(&self) -> usize {
        self.pos
    }

    /// Source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    pub fn at_end(&self) -> bool {
        self.current_token().kind == TokenKind::EOF
    }

    /// Whether EOF is among the next `k` tokens, the current one included.
    pub fn at_end_within(&self, k: usize) -> bool {
        self.tokens[self.pos..]
            .iter()
            .take(k)
            .any(|token| token.kind == TokenKind::EOF)
    }

    pub fn is_operator(&self) -> bool {
        self.current_token().kind == TokenKind::Punct
    }

    pub fn is_integer(&self) -> bool {
        self.current_token().kind == TokenKind::Integer
    }

    pub fn is_open_paren(&self) -> bool {
        self.is_operator() && self.current_token().value.starts_with('(')
    }

    pub fn is_close_paren(&self) -> bool {
        self.is_operator() && self.current_token().value.starts_with(')')
    }

    /// Moves past the current token and returns it.
    pub fn advance(&mut self) -> Result<&Token, Error> {
        if self.at_end() {
            return Err(Error::new(
                ErrorImpl::Internal {
                    message: String::from("Should not be at end"),
                },
                self.get_position(),
            ));
        }

        self.pos += 1;
        Ok(&self.tokens[self.pos - 1])
    }

    /// Consumes the next `k` tokens if their concatenated text is exactly `pattern`.
    ///
    /// Fails without consuming anything when the text differs or when EOF is
    /// among those `k` tokens.
    pub fn lookahead(&mut self, k: usize, pattern: &str) -> bool {
        if self.at_end_within(k) {
            return false;
        }

        let text: String = self.tokens[self.pos..]
            .iter()
            .take(k)
            .map(|token| token.value.as_str())
            .collect();

        if text != pattern {
            return false;
        }

        self.pos += k;
        true
    }

    /// Consumes an operator or punctuation token.
    pub fn eat_operator(&mut self) -> Result<Token, Error> {
        self.eat_kind(TokenKind::Punct, |token| ErrorImpl::ExpectedOperator { token })
    }

    /// Consumes an integer token.
    pub fn eat_integer(&mut self) -> Result<Token, Error> {
        self.eat_kind(TokenKind::Integer, |token| ErrorImpl::ExpectedInteger { token })
    }

    fn eat_kind(
        &mut self,
        kind: TokenKind,
        error: fn(String) -> ErrorImpl,
    ) -> Result<Token, Error> {
        if self.at_end() {
            return Err(Error::new(ErrorImpl::UnexpectedEndOfInput, self.get_position()));
        }

        if self.current_token().kind != kind {
            return Err(Error::new(
                error(self.current_token().value.clone()),
                self.get_position(),
            ));
        }

        Ok(self.advance()?.clone())
    }
}
