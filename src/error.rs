// Error types for closure evaluation and invocation

use rhai::EvalAltResult;
use thiserror::Error;

/// Result type for closure construction
pub type EvaluationResult<T> = Result<T, EvaluationError>;

/// Result type for closure invocation
pub type InvocationResult<T> = Result<T, InvocationError>;

/// Result type for predicate contract methods
pub type PredicateResult<T> = Result<T, PredicateError>;

/// Errors raised while turning script source into a callable handle.
///
/// These are construction-time only: once a handle exists, evaluation is
/// never repeated.
#[derive(Error, Debug)]
pub enum EvaluationError {
    /// Source text does not parse
    #[error("script does not parse: {0}")]
    Compile(#[from] rhai::ParseError),

    /// Source text raised while being evaluated
    #[error("script evaluation failed: {0}")]
    Eval(#[from] Box<EvalAltResult>),

    /// Source text evaluated to something other than a closure
    #[error("script evaluated to {actual}, expected a closure")]
    NotCallable {
        /// Type name of the evaluated value
        actual: String,
    },
}

/// Runtime error raised inside a closure during a call.
///
/// Propagated verbatim to the caller of the contract method that triggered
/// it; the adapter performs no retry and its state is unchanged.
#[derive(Error, Debug)]
#[error("closure invocation failed: {0}")]
pub struct InvocationError(#[from] pub Box<EvalAltResult>);

/// A closure result that a predicate contract cannot interpret as a boolean.
///
/// Coercion is strict: anything other than an actual boolean is an error, no
/// numeric truthiness convention is applied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("predicate result is {actual}, expected a boolean")]
pub struct TypeCoercionError {
    /// Type name of the offending result
    pub actual: String,
}

/// Failure modes of the predicate contract methods
#[derive(Error, Debug)]
pub enum PredicateError {
    /// The closure itself raised
    #[error(transparent)]
    Invocation(#[from] InvocationError),

    /// The closure returned a non-boolean result
    #[error(transparent)]
    Coercion(#[from] TypeCoercionError),
}
