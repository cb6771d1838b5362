//! Tree consumers.
//!
//! Walks a parsed expression tree to compute its value or render it:
//!
//! - `eval`: checked integer evaluation
//! - `printer`: parenthesised infix and indented tree output

pub mod eval;
pub mod printer;
