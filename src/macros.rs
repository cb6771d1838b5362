//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for punctuation
//!
//! These macros reduce boilerplate in the lexer pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's raw source text
/// * `$span` - The source span
/// * `$number` - The parsed integer value, `None` for non-integer tokens
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), span, Some(42));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        $crate::MK_TOKEN!($kind, $value, $span, None)
    };
    ($kind:expr, $value:expr, $span:expr, $number:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
            number: $number,
        }
    };
}

/// Creates a default lexer handler for single punctuation tokens.
///
/// Generates a handler function that creates a `Punct` token with the given text
/// and advances the lexer position by the token's length.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!("+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| {
            let span = lexer.span_of($value.len());
            lexer.push($crate::MK_TOKEN!(TokenKind::Punct, String::from($value), span));
            lexer.advance_n($value.len());
            Ok(())
        }
    };
}
