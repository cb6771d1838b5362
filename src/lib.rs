#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod interpreter;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing a byte offset.
///
/// Returns the 1-based line number, the line text and the offset within that line.
/// An offset at the very end of the source (where the EOF token sits) resolves to
/// the last line.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    // End of input: point just past the last line
    match source.split_inclusive('\n').last() {
        Some(line) if !line.ends_with('\n') => {
            Some((line_number - 1, line.to_string(), line.len()))
        }
        _ => Some((line_number, String::new(), 0)),
    }
}


/// Renders an error against the source it was raised for.
pub fn format_error(error: &Error, source: &str) -> String {
    /*
        Error: ExpectedCloseParen (Expected `)`, found `EOF`)
        -> input.txt
          |
        1 | (1 + 2
          | ------^
    */

    let position = error.get_position();
    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        output.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    output.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return output;
    };

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    output.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    output.push_str(&format!("{} | {}\n", line_str, line_text_removed.trim()));

    // Caret column counts characters, not bytes
    let column = line_text
        .get(..line_pos)
        .map(|prefix| prefix.chars().count())
        .unwrap_or(line_pos);
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    output
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
