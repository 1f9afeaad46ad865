//! # pointfree
//!
//! Curry, pipe and compose for point-free Rust.
//!
//! Two renditions of the same three combinators:
//!
//! - **Dynamic**: [`Function`] values of explicit [`Arity`] over dynamic
//!   [`Value`]s. [`curry`] accumulates arguments across calls until the
//!   arity is met, [`pipe()`] and [`compose()`] chain functions left to right
//!   and right to left. Partial applications are ordinary values.
//! - **Static**: [`pipe!`], [`compose!`], [`curry2!`] and [`curry3!`] for
//!   plain closures, checked entirely by the compiler.
//!
//! # Quick Start
//!
//! ```
//! use pointfree::{Toolkit, Value, builtins};
//!
//! let toolkit = Toolkit::default();
//!
//! let add3 = toolkit.curry_n(3, "add3", |args| {
//!     Ok(Value::Integer(args.iter().filter_map(Value::as_integer).sum()))
//! });
//! let nine = add3
//!     .call(&[Value::from(2)])?
//!     .call(&[Value::from(3)])?
//!     .call(&[Value::from(4)])?;
//! assert_eq!(nine, Value::from(9));
//!
//! let inc_then_double = toolkit.pipe([
//!     builtins::inc(),
//!     builtins::multiply().call(&[Value::from(2)])?.into_function()?,
//! ])?;
//! assert_eq!(inc_then_double.call(&[Value::from(3)])?, Value::from(8));
//! # Ok::<(), pointfree::PointfreeError>(())
//! ```
//!
//! # Modules
//!
//! - **Facade**: [`Toolkit`] binds the combinators to a [`PointfreeConfig`]
//! - **Kernel**: [`curry`], [`pipe()`], [`compose()`], [`builtins`]
//! - **Ambient**: [`telemetry`] for logging setup, layered configuration

mod error;
pub mod telemetry;
mod toolkit;

// Facade
pub use error::{PointfreeError, Result};
pub use toolkit::Toolkit;

// Foundation
pub use pointfree_types::{Arity, Body, EvalError, ExcessArgs, Function, Value};

// Kernel
// `compose` and `pipe` bring both the function and the macro of that name.
pub use pointfree_kernel::{
    Pipe, builtins, compose, curry, curry_n, curry_with, curry2, curry3, pipe, then,
};

// Configuration
pub use pointfree_config::{ConfigError, ConfigLoader, CurryConfig, LoggingConfig, PointfreeConfig};
