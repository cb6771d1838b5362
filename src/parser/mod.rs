//! Parser module for building the expression tree.
//!
//! A recursive-descent parser with one function per precedence level. Each
//! level parses the next-higher level first and then loops over its own
//! operators, folding them left-associatively:
//!
//! - `cursor`: forward-only token cursor with textual lookahead
//! - `expr`: the grammar rules
//! - `parser`: parser state, node construction and the `parse` entry point

pub mod cursor;
pub mod expr;
pub mod parser;

#[cfg(test)]
mod tests;
