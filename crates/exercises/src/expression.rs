//! Postfix evaluation and bracket matching.

use crate::error::ExerciseError;

/// Evaluates a whitespace-separated postfix expression over `i64`.
///
/// Operators are `+ - * /`; division truncates toward zero. Unknown tokens,
/// missing operands, leftover operands, overflow and division by zero are
/// all malformed.
///
/// ```
/// use algokit_exercises::evaluate_postfix;
///
/// assert_eq!(evaluate_postfix("5 1 2 + 4 * + 3 -"), Ok(14));
/// ```
pub fn evaluate_postfix(expr: &str) -> Result<i64, ExerciseError> {
    let mut stack: Vec<i64> = Vec::new();
    for token in expr.split_whitespace() {
        let op: fn(i64, i64) -> Option<i64> = match token {
            "+" => i64::checked_add,
            "-" => i64::checked_sub,
            "*" => i64::checked_mul,
            "/" => i64::checked_div,
            _ => {
                let n = token.parse().map_err(|_| {
                    ExerciseError::MalformedExpression(format!("unknown token {token:?}"))
                })?;
                stack.push(n);
                continue;
            }
        };
        let (Some(b), Some(a)) = (stack.pop(), stack.pop()) else {
            return Err(ExerciseError::MalformedExpression(format!(
                "operator {token:?} lacks operands"
            )));
        };
        let v = op(a, b).ok_or_else(|| {
            ExerciseError::MalformedExpression(format!("{a} {token} {b} is undefined"))
        })?;
        stack.push(v);
    }
    match stack.as_slice() {
        [v] => Ok(*v),
        [] => Err(ExerciseError::MalformedExpression("empty expression".to_string())),
        _ => Err(ExerciseError::MalformedExpression(format!("{} operands left over", stack.len()))),
    }
}

/// Whether every `(`, `[` and `{` is closed by its partner in order.
/// Other characters are ignored.
pub fn is_balanced(text: &str) -> bool {
    let mut open: Vec<char> = Vec::new();
    for ch in text.chars() {
        let expected = match ch {
            '(' | '[' | '{' => {
                open.push(ch);
                continue;
            }
            ')' => '(',
            ']' => '[',
            '}' => '{',
            _ => continue,
        };
        if open.pop() != Some(expected) {
            return false;
        }
    }
    open.is_empty()
}
