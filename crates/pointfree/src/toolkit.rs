//! A configured entry point to the combinators.

use std::path::Path;

use pointfree_config::{ConfigLoader, PointfreeConfig};
use pointfree_kernel::{compose, curry_with, pipe};
use pointfree_types::{ExcessArgs, Function, Value};
use tracing::debug;

use crate::error::Result;

/// Combinators bound to a [`PointfreeConfig`].
///
/// The toolkit is stateless apart from its configuration and can be cloned
/// freely. Every function it curries uses the configured [`ExcessArgs`]
/// policy.
#[derive(Debug, Clone, Default)]
pub struct Toolkit {
    config: PointfreeConfig,
}

impl Toolkit {
    /// Creates a toolkit with the given configuration.
    pub fn new(config: PointfreeConfig) -> Self {
        debug!(excess_args = %config.curry.excess_args, "toolkit configured");
        Self { config }
    }

    /// Loads configuration from the default locations.
    pub fn load() -> Result<Self> {
        Ok(Self::new(ConfigLoader::new().load()?))
    }

    /// Loads configuration from a project directory.
    pub fn load_from_dir(project_dir: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(
            ConfigLoader::new().with_project_dir(project_dir).load()?,
        ))
    }

    /// Loads a single configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(PointfreeConfig::from_file(path)?))
    }

    pub fn config(&self) -> &PointfreeConfig {
        &self.config
    }

    pub fn excess_args(&self) -> ExcessArgs {
        self.config.curry.excess_args
    }

    /// Curries `function` using its declared arity.
    pub fn curry(&self, function: Function) -> Function {
        curry_with(function, self.excess_args())
    }

    /// Wraps `body` as a function of `arity` parameters and curries it.
    pub fn curry_n<F>(&self, arity: usize, name: &str, body: F) -> Function
    where
        F: Fn(&[Value]) -> pointfree_types::Result<Value> + Send + Sync + 'static,
    {
        self.curry(Function::native(name, arity, body))
    }

    /// Left-to-right composition.
    pub fn pipe(&self, stages: impl IntoIterator<Item = Function>) -> Result<Function> {
        Ok(pipe(stages)?)
    }

    /// Right-to-left composition.
    pub fn compose(&self, stages: impl IntoIterator<Item = Function>) -> Result<Function> {
        Ok(compose(stages)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pointfree_types::EvalError;

    fn pair() -> Function {
        Function::native("pair", 2, |args| Ok(Value::List(args.to_vec())))
    }

    #[test]
    fn default_toolkit_forwards_excess_arguments() {
        let toolkit = Toolkit::default();
        let result = toolkit
            .curry(pair())
            .call(&[Value::from(1), Value::from(2), Value::from(3)])
            .expect("forwarded");
        assert_eq!(result.as_list().map(<[Value]>::len), Some(3));
    }

    #[test]
    fn strict_toolkit_rejects_excess_arguments() {
        let toolkit = Toolkit::new(PointfreeConfig::strict());
        let err = toolkit
            .curry(pair())
            .call(&[Value::from(1), Value::from(2), Value::from(3)])
            .unwrap_err();
        assert!(matches!(err, EvalError::TooManyArguments { .. }));
    }

    #[test]
    fn empty_pipeline_surfaces_as_eval_error() {
        let toolkit = Toolkit::default();
        let err = toolkit.pipe(Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            crate::PointfreeError::Eval(EvalError::EmptyPipeline)
        ));
    }
}
