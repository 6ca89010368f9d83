//! The callable handle wrapped by every adapter
//!
//! A [`ScriptClosure`] is the evaluated form of a textual closure definition:
//! the function pointer produced by evaluation, the AST it was compiled from
//! (Rhai resolves the anonymous function through it at call time), and the
//! engine used to evaluate it. The engine is shared, not owned; the handle
//! never re-evaluates or mutates anything after construction, so one handle
//! can safely back any number of contract methods.

use crate::error::{
    EvaluationError, EvaluationResult, InvocationError, InvocationResult, PredicateResult,
    TypeCoercionError,
};
use rhai::{AST, Dynamic, Engine, FnPtr, Scope};
use std::fmt;
use std::sync::Arc;

/// An evaluated, referentially stable script closure
#[derive(Clone)]
pub struct ScriptClosure {
    /// Original source text, retained for diagnostics only
    script: Option<String>,
    engine: Arc<Engine>,
    ast: Arc<AST>,
    fn_ptr: FnPtr,
}

impl ScriptClosure {
    /// Evaluate `script` into a closure handle using `engine`.
    ///
    /// Fails with [`EvaluationError`] when the source does not parse, raises
    /// during evaluation, or evaluates to something other than a closure.
    pub fn eval(engine: Arc<Engine>, script: &str) -> EvaluationResult<Self> {
        let mut scope = Scope::new();
        Self::eval_with_scope(engine, &mut scope, script)
    }

    /// Evaluate `script` against a caller-supplied scope.
    ///
    /// Bindings pushed into `scope` beforehand (accumulator arrays, lookup
    /// maps) are captured by the closure, so side effects of later calls are
    /// observable through the scope.
    pub fn eval_with_scope(
        engine: Arc<Engine>,
        scope: &mut Scope,
        script: &str,
    ) -> EvaluationResult<Self> {
        let ast = engine.compile(script)?;
        let value = engine.eval_ast_with_scope::<Dynamic>(scope, &ast)?;

        let actual = value.type_name();
        let fn_ptr = value
            .try_cast::<FnPtr>()
            .ok_or_else(|| EvaluationError::NotCallable {
                actual: actual.to_string(),
            })?;

        log::trace!("evaluated closure '{}' from script", fn_ptr.fn_name());

        Ok(Self {
            script: Some(script.to_string()),
            engine,
            ast: Arc::new(ast),
            fn_ptr,
        })
    }

    /// Wrap a function pointer that was already evaluated elsewhere.
    ///
    /// `ast` must be the AST the pointer was evaluated from. There is no
    /// failure mode; the pointer is assumed valid.
    pub fn from_fn_ptr(engine: Arc<Engine>, ast: Arc<AST>, fn_ptr: FnPtr) -> Self {
        Self {
            script: None,
            engine,
            ast,
            fn_ptr,
        }
    }

    /// The source text this handle was evaluated from, if it is known
    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    /// Invoke the closure with the given arguments.
    ///
    /// Any error raised inside the closure, including an argument-count
    /// mismatch, surfaces as [`InvocationError`]; nothing is retried.
    pub fn invoke(&self, args: impl IntoIterator<Item = Dynamic>) -> InvocationResult<Dynamic> {
        let args: Vec<Dynamic> = args.into_iter().collect();
        self.fn_ptr
            .call::<Dynamic>(&self.engine, &self.ast, args)
            .map_err(InvocationError)
    }

    /// Invoke the closure and coerce the result to a strict boolean
    pub fn invoke_bool(&self, args: impl IntoIterator<Item = Dynamic>) -> PredicateResult<bool> {
        let result = self.invoke(args)?;
        result
            .as_bool()
            .map_err(|actual| {
                TypeCoercionError {
                    actual: actual.to_string(),
                }
                .into()
            })
    }
}

impl fmt::Debug for ScriptClosure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptClosure")
            .field("script", &self.script)
            .field("fn_name", &self.fn_ptr.fn_name())
            .finish()
    }
}

impl fmt::Display for ScriptClosure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.script {
            Some(script) => write!(f, "closure {{ {script} }}"),
            None => write!(f, "closure {}", self.fn_ptr.fn_name()),
        }
    }
}
