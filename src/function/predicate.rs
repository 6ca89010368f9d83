//! Predicate adapter over a pre-evaluated closure

use crate::closure::ScriptClosure;
use crate::error::PredicateResult;
use crate::function::contract::Predicate;
use rhai::Dynamic;

/// One-argument predicate backed by an already-evaluated closure handle.
///
/// Unlike [`RhaiLambda`](crate::RhaiLambda) there is no evaluation step and
/// no construction-time failure: the caller already owns a valid
/// [`ScriptClosure`], obtained for example as an intermediate result of
/// another evaluation, and only needs predicate semantics from it.
#[derive(Debug, Clone)]
pub struct RhaiPredicate {
    closure: ScriptClosure,
}

impl RhaiPredicate {
    /// Wrap an evaluated closure handle
    pub fn new(closure: ScriptClosure) -> Self {
        Self { closure }
    }
}

impl From<ScriptClosure> for RhaiPredicate {
    fn from(closure: ScriptClosure) -> Self {
        Self::new(closure)
    }
}

impl Predicate for RhaiPredicate {
    fn test(&self, value: Dynamic) -> PredicateResult<bool> {
        self.closure.invoke_bool([value])
    }
}
