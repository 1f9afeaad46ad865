//! Evaluation errors.

use thiserror::Error;

/// Result type for evaluating functions.
pub type Result<T> = std::result::Result<T, EvalError>;

/// Errors raised while applying functions to values.
///
/// Curry, pipe and compose never wrap these: an error returned by a wrapped
/// function reaches the caller exactly as it was produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A saturated call supplied more arguments than the declared arity
    /// while excess arguments are rejected.
    #[error("{function} expects {expected} argument(s), got {actual}")]
    TooManyArguments {
        function: String,
        expected: usize,
        actual: usize,
    },

    /// An argument had the wrong shape.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// A non-function value was applied.
    #[error("value is not callable: {0}")]
    NotCallable(String),

    /// A pipeline or composition was built from zero stages.
    #[error("cannot compose an empty sequence of functions")]
    EmptyPipeline,

    /// A function body failed.
    #[error("{function} failed: {message}")]
    Failed { function: String, message: String },
}

impl EvalError {
    /// Builds a [`EvalError::TypeMismatch`].
    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Builds a [`EvalError::Failed`].
    pub fn failed(function: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failed {
            function: function.into(),
            message: message.into(),
        }
    }
}
