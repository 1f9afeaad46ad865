//! Currying: accumulate arguments until the declared arity is met.
//!
//! A curried function is an ordinary [`Function`]. Calling it with fewer
//! arguments than it needs returns a new [`Value::Function`] capturing the
//! arguments seen so far; calling it with enough invokes the wrapped
//! function. Accumulators are immutable, so a partial application can be
//! reused any number of times.

use std::sync::Arc;

use pointfree_types::{Arity, ExcessArgs, Function, Result, Value};
use tracing::trace;

/// Curries `function` using its declared arity, forwarding excess arguments.
pub fn curry(function: Function) -> Function {
    curry_with(function, ExcessArgs::Forward)
}

/// Curries `function` using its declared arity and the given excess policy.
pub fn curry_with(function: Function, policy: ExcessArgs) -> Function {
    Partial {
        target: function,
        policy,
        applied: Arc::from(Vec::new()),
    }
    .into_function()
}

/// Wraps `body` as a function of `arity` parameters and curries it.
///
/// # Example
///
/// ```
/// use pointfree_kernel::curry_n;
/// use pointfree_types::Value;
///
/// let add3 = curry_n(3, "add3", |args| {
///     Ok(Value::Integer(args.iter().filter_map(Value::as_integer).sum()))
/// });
///
/// let nine = add3
///     .call(&[Value::from(2)])?
///     .call(&[Value::from(3)])?
///     .call(&[Value::from(4)])?;
/// assert_eq!(nine, Value::Integer(9));
/// # Ok::<(), pointfree_types::EvalError>(())
/// ```
pub fn curry_n<F>(arity: usize, name: &str, body: F) -> Function
where
    F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
{
    curry(Function::native(name, arity, body))
}

/// A curried function with the arguments accumulated so far.
#[derive(Clone)]
struct Partial {
    target: Function,
    policy: ExcessArgs,
    applied: Arc<[Value]>,
}

impl Partial {
    fn into_function(self) -> Function {
        let arity = self.target.arity().remaining_after(self.applied.len());
        let name = self.target.name().to_string();
        Function::native(name, arity.get(), move |args| self.apply(args))
    }

    fn apply(&self, args: &[Value]) -> Result<Value> {
        let mut accumulated = Vec::with_capacity(self.applied.len() + args.len());
        accumulated.extend_from_slice(&self.applied);
        accumulated.extend_from_slice(args);

        let arity: Arity = self.target.arity();
        if !arity.is_saturated_by(accumulated.len()) {
            trace!(
                function = self.target.name(),
                accumulated = accumulated.len(),
                required = arity.get(),
                "partial application"
            );
            let next = Partial {
                target: self.target.clone(),
                policy: self.policy,
                applied: Arc::from(accumulated),
            };
            return Ok(Value::Function(next.into_function()));
        }

        let selected = self
            .policy
            .select(self.target.name(), arity, &accumulated)?;
        trace!(
            function = self.target.name(),
            supplied = accumulated.len(),
            passed = selected.len(),
            policy = %self.policy,
            "saturated call"
        );
        self.target.call(selected)
    }
}
