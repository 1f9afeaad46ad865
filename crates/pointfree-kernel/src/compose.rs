//! Function composition over [`Function`] values.
//!
//! [`pipe`] runs stages left to right; [`compose`] runs them right to left
//! and is defined as `pipe` over the reversed stages. The first stage to run
//! receives the caller's full argument list, every later stage receives
//! exactly one argument (the previous result). The first error aborts the
//! chain and is returned unchanged.

use pointfree_types::{EvalError, Function, Result, Value};
use tracing::{debug, trace};

/// Composes `stages` left to right.
///
/// The resulting function has the arity of the first stage.
///
/// # Example
///
/// ```
/// use pointfree_kernel::{curry_n, pipe};
/// use pointfree_types::Value;
///
/// let inc = curry_n(1, "inc", |args| Ok(Value::from(args[0].as_integer().unwrap_or(0) + 1)));
/// let double = curry_n(1, "double", |args| Ok(Value::from(args[0].as_integer().unwrap_or(0) * 2)));
///
/// let f = pipe([inc, double])?;
/// assert_eq!(f.call(&[Value::from(3)])?, Value::from(8));
/// # Ok::<(), pointfree_types::EvalError>(())
/// ```
pub fn pipe(stages: impl IntoIterator<Item = Function>) -> Result<Function> {
    let stages: Vec<Function> = stages.into_iter().collect();
    let Some(first) = stages.first() else {
        return Err(EvalError::EmptyPipeline);
    };

    let arity = first.arity().get();
    let name = stages
        .iter()
        .map(Function::name)
        .collect::<Vec<_>>()
        .join(" >> ");

    Ok(Function::native(name, arity, move |args| run(&stages, args)))
}

/// Composes `stages` right to left.
///
/// `compose([f, g, h])` behaves exactly like `pipe([h, g, f])`.
pub fn compose(stages: impl IntoIterator<Item = Function>) -> Result<Function> {
    let mut stages: Vec<Function> = stages.into_iter().collect();
    stages.reverse();
    pipe(stages)
}

fn run(stages: &[Function], args: &[Value]) -> Result<Value> {
    let (first, rest) = stages
        .split_first()
        .ok_or(EvalError::EmptyPipeline)?;

    let mut current = first.call(args).inspect_err(|e| {
        debug!(stage = 0, function = first.name(), error = %e, "pipeline stage failed");
    })?;

    for (index, stage) in rest.iter().enumerate() {
        trace!(stage = index + 1, function = stage.name(), input = %current, "pipeline stage");
        current = stage
            .call(std::slice::from_ref(&current))
            .inspect_err(|e| {
                debug!(stage = index + 1, function = stage.name(), error = %e, "pipeline stage failed");
            })?;
    }

    Ok(current)
}
