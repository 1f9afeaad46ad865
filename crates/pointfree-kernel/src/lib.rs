//! # pointfree-kernel: Functional core of `pointfree`
//!
//! The kernel holds the combinators. Everything here is pure: no IO, no
//! clocks, no shared mutable state. Same functions and arguments always
//! produce the same result.
//!
//! ## Architecture
//!
//! - [`curry`](mod@curry): argument accumulation up to a declared arity
//! - [`compose`](mod@compose): [`pipe()`] (left to right) and [`compose()`] (right to left)
//! - [`builtins`]: curried helpers (`prop`, `filter`, `map`, ...) for point-free pipelines
//! - [`typed`]: `pipe!`, `compose!`, `curry2!`, `curry3!` for ordinary closures
//!
//! ## Example
//!
//! ```
//! use pointfree_kernel::{builtins, pipe};
//! use pointfree_types::Value;
//!
//! let is_active = builtins::prop_eq().call(&[Value::from("active"), Value::from(true)])?;
//! let name = builtins::prop().call(&[Value::from("name")])?;
//!
//! let active_names = pipe([
//!     builtins::filter().call(&[is_active])?.into_function()?,
//!     builtins::map().call(&[name])?.into_function()?,
//! ])?;
//!
//! let users = Value::List(vec![
//!     Value::record([("name", Value::from("ada")), ("active", Value::from(true))]),
//!     Value::record([("name", Value::from("bob")), ("active", Value::from(false))]),
//! ]);
//! assert_eq!(active_names.call(&[users])?, Value::List(vec!["ada".into()]));
//! # Ok::<(), pointfree_types::EvalError>(())
//! ```

pub mod builtins;
pub mod compose;
pub mod curry;
pub mod typed;


// Re-export commonly used items
pub use compose::{compose, pipe};
pub use curry::{curry, curry_n, curry_with};
pub use typed::{Pipe, then};
