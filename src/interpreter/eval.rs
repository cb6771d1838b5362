use crate::{
    ast::{ast::Node, operators::BinaryOperator},
    errors::errors::{Error, ErrorImpl},
};

enum Step<'a> {
    Visit(&'a Node),
    /// Both operands of this node are on the value stack
    Apply(&'a Node),
}

/// Evaluates the tree with 64-bit checked arithmetic.
///
/// Division truncates toward zero. Errors are reported at the operator.
/// Walks the tree with an explicit stack, so long operator chains do not
/// grow the call stack.
pub fn evaluate(node: &Node) -> Result<i64, Error> {
    let mut steps = vec![Step::Visit(node)];
    let mut values: Vec<i64> = vec![];

    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(node) => match node {
                Node::Number { value, .. } => values.push(*value),
                Node::BinaryOp { left, right, .. } => {
                    steps.push(Step::Apply(node));
                    steps.push(Step::Visit(right));
                    steps.push(Step::Visit(left));
                }
            },
            Step::Apply(Node::BinaryOp { operator, span, .. }) => {
                let (Some(rhs), Some(lhs)) = (values.pop(), values.pop()) else {
                    return Err(Error::new(
                        ErrorImpl::Internal {
                            message: String::from("missing operand during evaluation"),
                        },
                        span.start.clone(),
                    ));
                };

                values.push(apply(*operator, lhs, rhs).map_err(|error| {
                    Error::new(error, span.start.clone())
                })?);
            }
            Step::Apply(Node::Number { value, .. }) => values.push(*value),
        }
    }

    values.pop().ok_or_else(|| {
        Error::new(
            ErrorImpl::Internal {
                message: String::from("evaluation produced no value"),
            },
            node.get_span().start.clone(),
        )
    })
}

fn apply(operator: BinaryOperator, lhs: i64, rhs: i64) -> Result<i64, ErrorImpl> {
    if operator == BinaryOperator::Div && rhs == 0 {
        return Err(ErrorImpl::DivisionByZero);
    }

    let result = match operator {
        BinaryOperator::Add => lhs.checked_add(rhs),
        BinaryOperator::Sub => lhs.checked_sub(rhs),
        BinaryOperator::Mul => lhs.checked_mul(rhs),
        BinaryOperator::Div => lhs.checked_div(rhs),
    };

    result.ok_or_else(|| ErrorImpl::Overflow {
        operator: operator.symbol().to_string(),
    })
}
