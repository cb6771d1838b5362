//! Error types and error handling.
//!
//! This module defines the error type shared by every stage. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for lexing, parsing and evaluation
//! - Helpful error messages and suggestions

pub mod errors;
