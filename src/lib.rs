//! Rhai closure adapters for graph traversal steps
//!
//! Wraps textual Rhai closures so they can stand in wherever a traversal
//! pipeline expects a strongly typed functional value: a supplier, a unary or
//! binary function, a consumer of one to three arguments, or a predicate of
//! one or two arguments. One [`RhaiLambda`] satisfies every contract by
//! delegating to a single evaluated closure; [`RhaiPredicate`] is the narrow
//! variant over an already-evaluated handle. The [`ChooseStep`] branching
//! step is the immediate consumer: it uses a function adapter to compute a
//! branch key and dispatches each traverser into the matching sub-traversal.

pub mod closure;
pub mod engine;
pub mod error;
pub mod function;
pub mod traversal;

// Re-export main types
pub use closure::ScriptClosure;
pub use error::{
    EvaluationError, EvaluationResult, InvocationError, InvocationResult, PredicateError,
    PredicateResult, TypeCoercionError,
};
pub use function::{
    BiConsumer, BiFunction, BiPredicate, Consumer, Function, Predicate, RhaiLambda, RhaiPredicate,
    Supplier, TriConsumer,
};
pub use traversal::{BranchKey, ChooseError, ChooseResult, ChooseStep};
