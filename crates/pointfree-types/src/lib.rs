//! # pointfree-types: Core types for `pointfree`
//!
//! This crate contains the types shared across the workspace:
//! - Dynamic values ([`Value`])
//! - Callables with a declared arity ([`Function`], [`Arity`])
//! - The excess-argument policy for currying ([`ExcessArgs`])
//! - Evaluation errors ([`EvalError`])

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

mod error;
mod function;
mod value;

pub use error::{EvalError, Result};
pub use function::{Body, Function};
pub use value::Value;

// ============================================================================
// Arity
// ============================================================================

/// Number of formal parameters a function declares.
///
/// Rust closures cannot be asked for their parameter count, so arity is
/// always supplied explicitly when a function is wrapped.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Arity(usize);

impl Arity {
    pub const NULLARY: Arity = Arity(0);
    pub const UNARY: Arity = Arity(1);
    pub const BINARY: Arity = Arity(2);

    pub fn new(count: usize) -> Self {
        Self(count)
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Whether `supplied` arguments are enough to invoke the function.
    pub fn is_saturated_by(self, supplied: usize) -> bool {
        supplied >= self.0
    }

    /// Arguments still missing after `supplied` have been accumulated.
    pub fn remaining_after(self, supplied: usize) -> Arity {
        Arity(self.0.saturating_sub(supplied))
    }
}

impl Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for Arity {
    fn from(count: usize) -> Self {
        Self(count)
    }
}

impl From<Arity> for usize {
    fn from(arity: Arity) -> Self {
        arity.0
    }
}

// ============================================================================
// Excess argument policy
// ============================================================================

/// What a saturated curried call does with arguments beyond the arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ExcessArgs {
    /// Pass every accumulated argument to the function.
    #[default]
    Forward,
    /// Pass only the first `arity` arguments.
    Truncate,
    /// Fail with [`EvalError::TooManyArguments`].
    Reject,
}

impl ExcessArgs {
    /// Selects the arguments a saturated call hands to `function`.
    ///
    /// Arguments that fall short of `arity` are returned unchanged by every
    /// policy; only a surplus is truncated or rejected.
    pub fn select<'a>(
        self,
        function: &str,
        arity: Arity,
        args: &'a [Value],
    ) -> Result<&'a [Value]> {
        let expected = arity.get();
        match self {
            ExcessArgs::Forward => Ok(args),
            ExcessArgs::Truncate => Ok(args.get(..expected).unwrap_or(args)),
            ExcessArgs::Reject if args.len() > expected => Err(EvalError::TooManyArguments {
                function: function.to_string(),
                expected,
                actual: args.len(),
            }),
            ExcessArgs::Reject => Ok(args),
        }
    }
}

impl Display for ExcessArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExcessArgs::Forward => "forward",
            ExcessArgs::Truncate => "truncate",
            ExcessArgs::Reject => "reject",
        };
        write!(f, "{name}")
    }
}
