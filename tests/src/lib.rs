//! Shared helpers for the Solvent integration tests.

use solvent_eval::dispatch;
use solvent_lexer::ops;

/// Evaluate a space-joined postfix rendering, as produced by
/// [`solvent::to_postfix`]. Function names carry an `_<arity>` suffix.
///
/// This is the reference consumer for the RPN output mode: running it over
/// a rendering must agree with evaluating the original infix text.
///
/// # Panics
///
/// Panics on input that is not a well-formed rendering; this is test
/// support, not production code.
pub fn eval_postfix(rendering: &str) -> f64 {
    let mut stack: Vec<f64> = Vec::new();

    for word in rendering.split_whitespace() {
        if let Ok(value) = word.parse::<f64>() {
            stack.push(value);
            continue;
        }

        let mut chars = word.chars();
        if let (Some(symbol), None) = (chars.next(), chars.clone().next()) {
            if let Some(op) = ops::lookup(symbol) {
                let rhs = stack.pop().expect("operator needs a right operand");
                let lhs = stack.pop().expect("operator needs a left operand");
                stack.push(op.apply(lhs, rhs));
                continue;
            }
        }

        let (name, arity) = word
            .rsplit_once('_')
            .map(|(name, count)| {
                let arity: usize = count.parse().expect("arity suffix should be a number");
                (name, arity)
            })
            .expect("function word should carry an arity suffix");
        let at = stack.len().checked_sub(arity).expect("enough arguments");
        let args = stack.split_off(at);
        stack.push(dispatch(name, &args).expect("function should resolve"));
    }

    assert_eq!(stack.len(), 1, "rendering should reduce to one value");
    stack.pop().expect("one value remains")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_postfix_operators() {
        assert_eq!(eval_postfix("3 4 2 * +"), 11.0);
        assert_eq!(eval_postfix("2 3 2 ^ ^"), 512.0);
    }

    #[test]
    fn test_eval_postfix_functions() {
        assert_eq!(eval_postfix("1 2 3 avg_3"), 2.0);
        assert_eq!(eval_postfix("1 1 + 1 2 3 median_3 avg_2"), 2.0);
    }
}
