use std::fmt::Display;

use crate::ast::{ast::Node, operators::BinaryOperator};

enum Piece<'a> {
    Node(&'a Node),
    Operator(BinaryOperator),
    Text(&'static str),
}

/// Infix form with every operator node wrapped in parentheses.
impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut pieces = vec![Piece::Node(self)];

        while let Some(piece) = pieces.pop() {
            match piece {
                Piece::Node(Node::Number { value, .. }) => write!(f, "{}", value)?,
                Piece::Node(Node::BinaryOp {
                    operator,
                    left,
                    right,
                    ..
                }) => {
                    pieces.push(Piece::Text(")"));
                    pieces.push(Piece::Node(right));
                    pieces.push(Piece::Operator(*operator));
                    pieces.push(Piece::Node(left));
                    write!(f, "(")?;
                }
                Piece::Operator(operator) => write!(f, " {} ", operator)?,
                Piece::Text(text) => write!(f, "{}", text)?,
            }
        }

        Ok(())
    }
}

/// Renders the tree one node per line, children indented under their parent.
pub fn print_tree(node: &Node) -> String {
    let mut result = String::new();
    let mut stack = vec![(node, 0)];

    while let Some((node, indent)) = stack.pop() {
        result.push_str(&"  ".repeat(indent));

        match node {
            Node::Number { value, .. } => {
                result.push_str(&format!("Number({})\n", value));
            }
            Node::BinaryOp {
                operator,
                left,
                right,
                ..
            } => {
                result.push_str(&format!("BinaryOp({})\n", operator));
                stack.push((&**right, indent + 1));
                stack.push((&**left, indent + 1));
            }
        }
    }

    result
}
