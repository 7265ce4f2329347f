//! Function dispatch: the built-in statistical reducers, with a fallback
//! to the math provider for everything else.
//!
//! Both tables are fixed at startup; the name set is closed. Lookup order
//! is registry first, provider second, so `avg` can never be shadowed by
//! a provider function of the same name.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::error::EvalError;

/// A statistical reducer over the full evaluated argument list.
type Reducer = fn(&[f64]) -> f64;

lazy_static! {
    /// Built-in reducers, keyed by the name written in source text.
    static ref FUNCTIONS: HashMap<&'static str, Reducer> = {
        let mut table: HashMap<&'static str, Reducer> = HashMap::new();
        table.insert("avg", mean);
        table.insert("mean", mean);
        table.insert("median", median);
        table.insert("mode", mode);
        table.insert("countArgs", count_args);
        table
    };
}

/// Resolve a function name and apply it to the evaluated arguments.
///
/// Lookup tries the statistical registry first, then the math provider.
/// Failure is [`EvalError::UnknownFunction`] carrying the requested name.
pub fn dispatch(name: &str, args: &[f64]) -> Result<f64, EvalError> {
    if let Some(reducer) = FUNCTIONS.get(name) {
        log::trace!("dispatch '{name}' to the statistical registry");
        return Ok(reducer(args));
    }
    log::trace!("dispatch '{name}' to the math provider");
    math_builtin(name, args).ok_or_else(|| EvalError::UnknownFunction {
        name: name.to_string(),
    })
}

fn mean(args: &[f64]) -> f64 {
    args.iter().sum::<f64>() / args.len() as f64
}

fn median(args: &[f64]) -> f64 {
    if args.is_empty() {
        return f64::NAN;
    }
    let mut sorted = args.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Most frequent value. The scan runs over sorted data and only a strictly
/// greater run length replaces the recorded mode, so on a frequency tie
/// the numerically smallest value wins.
fn mode(args: &[f64]) -> f64 {
    if args.is_empty() {
        return f64::NAN;
    }
    let mut sorted = args.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut mode = sorted[0];
    let mut run = 0usize;
    let mut longest = 0usize;
    let mut previous: Option<f64> = None;
    for &value in &sorted {
        run = match previous {
            Some(p) if p == value => run + 1,
            _ => 1,
        };
        if run > longest {
            longest = run;
            mode = value;
        }
        previous = Some(value);
    }
    mode
}

fn count_args(args: &[f64]) -> f64 {
    args.len() as f64
}

/// The general math provider: named single- and two-argument functions
/// delegated to the standard float library. A miss (unknown name or wrong
/// argument count) returns `None` so the caller can report the requested
/// name.
fn math_builtin(name: &str, args: &[f64]) -> Option<f64> {
    match (name, args) {
        ("sin", [x]) => Some(x.sin()),
        ("cos", [x]) => Some(x.cos()),
        ("tan", [x]) => Some(x.tan()),
        ("asin", [x]) => Some(x.asin()),
        ("acos", [x]) => Some(x.acos()),
        ("atan", [x]) => Some(x.atan()),
        ("sinh", [x]) => Some(x.sinh()),
        ("cosh", [x]) => Some(x.cosh()),
        ("tanh", [x]) => Some(x.tanh()),
        ("sqrt", [x]) => Some(x.sqrt()),
        ("cbrt", [x]) => Some(x.cbrt()),
        ("exp", [x]) => Some(x.exp()),
        // `log` is natural log, as in the library this mirrors
        ("ln", [x]) | ("log", [x]) => Some(x.ln()),
        ("abs", [x]) => Some(x.abs()),
        ("floor", [x]) => Some(x.floor()),
        ("ceil", [x]) => Some(x.ceil()),
        ("round", [x]) => Some(x.round()),
        ("trunc", [x]) => Some(x.trunc()),
        ("sign", [x]) => Some(x.signum()),
        ("pow", [x, y]) => Some(x.powf(*y)),
        ("hypot", [x, y]) => Some(x.hypot(*y)),
        ("min", [x, y]) => Some(x.min(*y)),
        ("max", [x, y]) => Some(x.max(*y)),
        _ => None,
    }
}
