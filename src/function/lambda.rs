//! The polymorphic closure adapter
//!
//! One scripted closure, every functional contract: a [`RhaiLambda`] wraps a
//! single evaluated closure and implements supplier, function, consumer and
//! predicate traits by delegating each call to it. The closure decides what
//! arities it actually supports; a mismatch surfaces as an invocation error
//! on the contract method that triggered it.

use crate::closure::ScriptClosure;
use crate::engine;
use crate::error::{EvaluationResult, InvocationResult, PredicateResult};
use crate::function::contract::{
    BiConsumer, BiFunction, BiPredicate, Consumer, Function, Predicate, Supplier, TriConsumer,
};
use rhai::{Dynamic, Engine, Scope};
use std::sync::Arc;

/// A scripted closure usable as any functional contract.
///
/// ```
/// use rhai_lambda::{Function, RhaiLambda};
/// use rhai::Dynamic;
///
/// let plus_two = RhaiLambda::new("|x| x + 2").unwrap();
/// let result = plus_two.apply(Dynamic::from(5_i64)).unwrap();
/// assert_eq!(result.as_int().unwrap(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct RhaiLambda {
    closure: ScriptClosure,
}

impl RhaiLambda {
    /// Evaluate `script` in the shared default engine.
    ///
    /// Fails when the source does not evaluate to a closure.
    pub fn new(script: &str) -> EvaluationResult<Self> {
        Self::with_engine(script, engine::default_engine())
    }

    /// Evaluate `script` in a caller-supplied engine instead of the default
    pub fn with_engine(script: &str, engine: Arc<Engine>) -> EvaluationResult<Self> {
        let mut scope = Scope::new();
        Self::with_scope(script, engine, &mut scope)
    }

    /// Evaluate `script` against a caller-supplied scope.
    ///
    /// Bindings pushed into the scope beforehand are captured by the closure,
    /// which is how side-effectful closures get a private environment to
    /// mutate.
    pub fn with_scope(
        script: &str,
        engine: Arc<Engine>,
        scope: &mut Scope,
    ) -> EvaluationResult<Self> {
        let closure = ScriptClosure::eval_with_scope(engine, scope, script)?;
        Ok(Self { closure })
    }

    /// The underlying callable handle
    pub fn closure(&self) -> &ScriptClosure {
        &self.closure
    }

    /// Unwrap into the underlying callable handle
    pub fn into_closure(self) -> ScriptClosure {
        self.closure
    }
}

impl Supplier for RhaiLambda {
    fn get(&self) -> InvocationResult<Dynamic> {
        self.closure.invoke(std::iter::empty())
    }
}

impl Function for RhaiLambda {
    fn apply(&self, value: Dynamic) -> InvocationResult<Dynamic> {
        self.closure.invoke([value])
    }
}

impl BiFunction for RhaiLambda {
    fn apply2(&self, a: Dynamic, b: Dynamic) -> InvocationResult<Dynamic> {
        self.closure.invoke([a, b])
    }
}

impl Consumer for RhaiLambda {
    fn accept(&self, value: Dynamic) -> InvocationResult<()> {
        self.closure.invoke([value]).map(|_| ())
    }
}

impl BiConsumer for RhaiLambda {
    fn accept2(&self, a: Dynamic, b: Dynamic) -> InvocationResult<()> {
        self.closure.invoke([a, b]).map(|_| ())
    }
}

impl TriConsumer for RhaiLambda {
    fn accept3(&self, a: Dynamic, b: Dynamic, c: Dynamic) -> InvocationResult<()> {
        self.closure.invoke([a, b, c]).map(|_| ())
    }
}

impl Predicate for RhaiLambda {
    fn test(&self, value: Dynamic) -> PredicateResult<bool> {
        self.closure.invoke_bool([value])
    }
}

impl BiPredicate for RhaiLambda {
    fn test2(&self, a: Dynamic, b: Dynamic) -> PredicateResult<bool> {
        self.closure.invoke_bool([a, b])
    }
}
