use crate::Span;

use super::operators::BinaryOperator;

/// Expression node.
///
/// Every node exclusively owns its children, so a tree is dropped as a whole
/// together with its root.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Integer literal
    Number { value: i64, span: Span },
    BinaryOp {
        operator: BinaryOperator,
        left: Box<Node>,
        right: Box<Node>,
        /// Span of the operator token
        span: Span,
    },
}

impl Node {
    pub fn number(value: i64, span: Span) -> Self {
        Node::Number { value, span }
    }

    pub fn binary(operator: BinaryOperator, left: Node, right: Node, span: Span) -> Self {
        Node::BinaryOp {
            operator,
            left: Box::new(left),
            right: Box::new(right),
            span,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Node::Number { .. })
    }

    /// The literal value, `None` for operator nodes.
    pub fn value(&self) -> Option<i64> {
        match self {
            Node::Number { value, .. } => Some(*value),
            Node::BinaryOp { .. } => None,
        }
    }

    pub fn operator(&self) -> Option<BinaryOperator> {
        match self {
            Node::Number { .. } => None,
            Node::BinaryOp { operator, .. } => Some(*operator),
        }
    }

    pub fn left(&self) -> Option<&Node> {
        match self {
            Node::Number { .. } => None,
            Node::BinaryOp { left, .. } => Some(left),
        }
    }

    pub fn right(&self) -> Option<&Node> {
        match self {
            Node::Number { .. } => None,
            Node::BinaryOp { right, .. } => Some(right),
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Node::Number { span, .. } | Node::BinaryOp { span, .. } => span,
        }
    }

    /// Number of `Number` leaves in the tree.
    pub fn number_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            match node {
                Node::Number { .. } => count += 1,
                Node::BinaryOp { left, right, .. } => {
                    stack.push(left);
                    stack.push(right);
                }
            }
        }

        count
    }

    /// Number of `BinaryOp` nodes in the tree.
    ///
    /// Every operator has exactly two children, so this is one less than the
    /// number of leaves.
    pub fn operator_count(&self) -> usize {
        self.number_count() - 1
    }

    pub fn node_count(&self) -> usize {
        self.number_count() + self.operator_count()
    }
}
