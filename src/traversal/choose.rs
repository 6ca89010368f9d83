//! Branch selection keyed by a computed value
//!
//! A [`ChooseStep`] is the traversal-side consumer of the adapters: a key
//! function (scripted or native) computes a branch key per traverser, and the
//! traverser is dispatched into the sub-traversal registered under that key.
//! A two-way predicate choice is the special case of registering branches
//! under `true` and `false`.

use crate::error::InvocationError;
use crate::function::Function;
use rhai::Dynamic;
use std::collections::HashMap;
use thiserror::Error;

/// Result type for branch dispatch
pub type ChooseResult<T> = Result<T, ChooseError>;

/// Errors raised while dispatching a traverser into a branch
#[derive(Error, Debug)]
pub enum ChooseError {
    /// The key function raised
    #[error(transparent)]
    Key(#[from] InvocationError),

    /// The key function returned a value that cannot index a branch
    #[error("branch key must be a boolean, integer or string, got {actual}")]
    UnsupportedKey {
        /// Type name of the computed key
        actual: String,
    },

    /// No branch is registered for the computed key and there is no fallback
    #[error("no branch registered for key {key:?}")]
    NoBranch {
        /// The computed key
        key: BranchKey,
    },
}

/// Key domain for branch selection
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BranchKey {
    /// Predicate-style two-way choice
    Bool(bool),
    /// Integer key, e.g. an attribute length
    Int(i64),
    /// String key
    Str(String),
}

impl BranchKey {
    /// Convert a computed dynamic value into a branch key.
    ///
    /// Only booleans, integers and strings are keyable; anything else is a
    /// [`ChooseError::UnsupportedKey`].
    pub fn from_dynamic(value: Dynamic) -> ChooseResult<Self> {
        let actual = value.type_name();
        if let Ok(flag) = value.as_bool() {
            return Ok(Self::Bool(flag));
        }
        if let Ok(n) = value.as_int() {
            return Ok(Self::Int(n));
        }
        match value.into_string() {
            Ok(s) => Ok(Self::Str(s)),
            Err(_) => Err(ChooseError::UnsupportedKey {
                actual: actual.to_string(),
            }),
        }
    }
}

impl From<bool> for BranchKey {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for BranchKey {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for BranchKey {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for BranchKey {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// A sub-traversal: maps one traverser to any number of output traversers
type Branch = Box<dyn Fn(Dynamic) -> Vec<Dynamic> + Send + Sync>;

/// Branching step: computes a key per traverser and dispatches it into the
/// matching sub-traversal.
///
/// ```
/// use rhai_lambda::{ChooseStep, RhaiLambda};
/// use rhai::Dynamic;
///
/// let step = ChooseStep::new(RhaiLambda::new("|name| name.len()").unwrap())
///     .option(3_i64, |name| vec![name])
///     .otherwise(|_| vec![]);
///
/// let kept = step.apply(Dynamic::from("lop")).unwrap();
/// assert_eq!(kept.len(), 1);
/// ```
pub struct ChooseStep<F> {
    key_fn: F,
    options: HashMap<BranchKey, Branch>,
    fallback: Option<Branch>,
}

impl<F: Function> ChooseStep<F> {
    /// Create a branching step around a key function
    pub fn new(key_fn: F) -> Self {
        Self {
            key_fn,
            options: HashMap::new(),
            fallback: None,
        }
    }

    /// Register a sub-traversal under a branch key
    pub fn option<B>(mut self, key: impl Into<BranchKey>, branch: B) -> Self
    where
        B: Fn(Dynamic) -> Vec<Dynamic> + Send + Sync + 'static,
    {
        self.options.insert(key.into(), Box::new(branch));
        self
    }

    /// Register the sub-traversal taken when no key matches
    pub fn otherwise<B>(mut self, branch: B) -> Self
    where
        B: Fn(Dynamic) -> Vec<Dynamic> + Send + Sync + 'static,
    {
        self.fallback = Some(Box::new(branch));
        self
    }

    /// Dispatch one traverser.
    ///
    /// The key function sees the same value the selected branch receives.
    pub fn apply(&self, input: Dynamic) -> ChooseResult<Vec<Dynamic>> {
        let key = BranchKey::from_dynamic(self.key_fn.apply(input.clone())?)?;
        match self.options.get(&key) {
            Some(branch) => Ok(branch(input)),
            None => match &self.fallback {
                Some(branch) => Ok(branch(input)),
                None => Err(ChooseError::NoBranch { key }),
            },
        }
    }

    /// Dispatch a stream of traversers, flattening the branch outputs in
    /// input order
    pub fn apply_all(
        &self,
        inputs: impl IntoIterator<Item = Dynamic>,
    ) -> ChooseResult<Vec<Dynamic>> {
        let mut out = Vec::new();
        for input in inputs {
            out.extend(self.apply(input)?);
        }
        Ok(out)
    }
}
