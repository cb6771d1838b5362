use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::ExpectedNumber { .. } => "ExpectedNumber",
            ErrorImpl::ExpectedCloseParen { .. } => "ExpectedCloseParen",
            ErrorImpl::ExpectedOperator { .. } => "ExpectedOperator",
            ErrorImpl::ExpectedInteger { .. } => "ExpectedInteger",
            ErrorImpl::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            ErrorImpl::TrailingInput { .. } => "TrailingInput",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::DivisionByZero => "DivisionByZero",
            ErrorImpl::Overflow { .. } => "Overflow",
            ErrorImpl::Internal { .. } => "Internal",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::ExpectedNumber { token } => {
                ErrorTip::Suggestion(format!("Expected a number, found `{}`", token))
            }
            ErrorImpl::ExpectedCloseParen { token } => {
                ErrorTip::Suggestion(format!("Expected `)`, found `{}`", token))
            }
            ErrorImpl::ExpectedOperator { token } => {
                ErrorTip::Suggestion(format!("Expected an operator, found `{}`", token))
            }
            ErrorImpl::ExpectedInteger { token } => {
                ErrorTip::Suggestion(format!("Expected an integer, found `{}`", token))
            }
            ErrorImpl::UnexpectedEndOfInput => {
                ErrorTip::Suggestion(String::from("The expression ended too early"))
            }
            ErrorImpl::TrailingInput { token } => ErrorTip::Suggestion(format!(
                "Unexpected `{}` after a complete expression",
                token
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Parentheses nest deeper than {} levels",
                limit
            )),
            ErrorImpl::DivisionByZero => ErrorTip::None,
            ErrorImpl::Overflow { operator } => ErrorTip::Suggestion(format!(
                "Result of `{}` does not fit in a 64-bit integer",
                operator
            )),
            ErrorImpl::Internal { message } => ErrorTip::Suggestion(format!(
                "Internal parser error: {}",
                message
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}:{}", self.internal_error, self.position.1, self.position.0)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("expected a number, found {token:?}")]
    ExpectedNumber { token: String },
    #[error("expected closing parenthesis, found {token:?}")]
    ExpectedCloseParen { token: String },
    #[error("expected an operator, found {token:?}")]
    ExpectedOperator { token: String },
    #[error("expected an integer, found {token:?}")]
    ExpectedInteger { token: String },
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("unexpected trailing input: {token:?}")]
    TrailingInput { token: String },
    #[error("parentheses nested deeper than {limit}")]
    NestingTooDeep { limit: usize },
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in {operator:?}")]
    Overflow { operator: String },
    #[error("internal error: {message}")]
    Internal { message: String },
}
