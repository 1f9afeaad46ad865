//! Opaque callables with a declared arity.

use std::fmt::{self, Debug, Display};
use std::sync::Arc;

use crate::Arity;
use crate::error::Result;
use crate::value::Value;

/// Signature of a function body: receives the full argument list.
pub type Body = dyn Fn(&[Value]) -> Result<Value> + Send + Sync;

/// A callable value of fixed declared arity.
///
/// The arity is metadata: calling a `Function` directly hands whatever
/// arguments were supplied to its body. Argument accumulation is layered on
/// top by currying.
///
/// Clones share the body, and equality is body identity.
#[derive(Clone)]
pub struct Function {
    name: Arc<str>,
    arity: Arity,
    body: Arc<Body>,
}

impl Function {
    /// Wraps a Rust closure as a function of the given arity.
    pub fn native<F>(name: impl Into<Arc<str>>, arity: usize, body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            arity: Arity::new(arity),
            body: Arc::new(body),
        }
    }

    /// Name used in diagnostics and log events.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared number of formal parameters.
    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Invokes the body with `args`.
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        (self.body)(args)
    }

    /// Returns a copy carrying a different name.
    pub fn renamed(&self, name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            arity: self.arity,
            body: Arc::clone(&self.body),
        }
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

impl Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<fn {}/{}>", self.name, self.arity)
    }
}
