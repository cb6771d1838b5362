//! Lexical analysis module.
//!
//! Converts an arithmetic expression into the token sequence the parser
//! consumes. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Integer literals, operators and parentheses
//! - Token position tracking for error reporting
//! - Whitespace skipping

pub mod lexer;
pub mod tokens;
