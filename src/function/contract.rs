//! Functional contracts and their composition laws
//!
//! One trait per contract shape instead of one type implementing six
//! interfaces: an adapter opts into every contract it can honour, and
//! combinators returned by `and_then`/`negate` implement the same traits so
//! composed values stay usable wherever the contract is expected.
//!
//! Method names carry the arity (`apply`/`apply2`, `accept`/`accept2`/
//! `accept3`, `test`/`test2`) so one adapter can implement all contracts
//! without call-site ambiguity.

use crate::error::{InvocationResult, PredicateResult};
use rhai::Dynamic;

/// Zero-argument value supplier
pub trait Supplier {
    /// Produce a value
    fn get(&self) -> InvocationResult<Dynamic>;
}

/// One-argument function
pub trait Function {
    /// Apply to one argument and return the result, uncoerced
    fn apply(&self, value: Dynamic) -> InvocationResult<Dynamic>;

    /// Compose: apply `self`, then apply `after` to the result.
    ///
    /// An error from `self` short-circuits; `after` never runs.
    fn and_then<G>(self, after: G) -> Composed<Self, G>
    where
        Self: Sized,
        G: Function,
    {
        Composed { first: self, after }
    }
}

/// Two-argument function
pub trait BiFunction {
    /// Apply to two arguments and return the result, uncoerced
    fn apply2(&self, a: Dynamic, b: Dynamic) -> InvocationResult<Dynamic>;

    /// Compose: apply `self`, then apply the unary `after` to the result
    fn and_then2<G>(self, after: G) -> ComposedBi<Self, G>
    where
        Self: Sized,
        G: Function,
    {
        ComposedBi { first: self, after }
    }
}

/// One-argument consumer; the result of the underlying call is discarded
pub trait Consumer {
    /// Consume one argument
    fn accept(&self, value: Dynamic) -> InvocationResult<()>;

    /// Chain: run `self` to completion, then run `after` with the same
    /// argument. Side effects of `self` are fully observable before `after`
    /// starts.
    fn chain<G>(self, after: G) -> Chained<Self, G>
    where
        Self: Sized,
        G: Consumer,
    {
        Chained { first: self, after }
    }
}

/// Two-argument consumer
pub trait BiConsumer {
    /// Consume two arguments
    fn accept2(&self, a: Dynamic, b: Dynamic) -> InvocationResult<()>;

    /// Chain: run `self` to completion, then `after` with the same arguments
    fn chain2<G>(self, after: G) -> ChainedBi<Self, G>
    where
        Self: Sized,
        G: BiConsumer,
    {
        ChainedBi { first: self, after }
    }
}

/// Three-argument consumer
pub trait TriConsumer {
    /// Consume three arguments
    fn accept3(&self, a: Dynamic, b: Dynamic, c: Dynamic) -> InvocationResult<()>;

    /// Chain: run `self` to completion, then `after` with the same arguments
    fn chain3<G>(self, after: G) -> ChainedTri<Self, G>
    where
        Self: Sized,
        G: TriConsumer,
    {
        ChainedTri { first: self, after }
    }
}

/// One-argument predicate; the result is coerced to a strict boolean
pub trait Predicate {
    /// Test one argument
    fn test(&self, value: Dynamic) -> PredicateResult<bool>;

    /// Invert the truth result. Failure modes are unchanged: a coercion or
    /// invocation error passes through instead of being negated.
    fn negate(self) -> Negated<Self>
    where
        Self: Sized,
    {
        Negated(self)
    }
}

/// Two-argument predicate
pub trait BiPredicate {
    /// Test two arguments
    fn test2(&self, a: Dynamic, b: Dynamic) -> PredicateResult<bool>;

    /// Invert the truth result, leaving failure modes unchanged
    fn negate2(self) -> NegatedBi<Self>
    where
        Self: Sized,
    {
        NegatedBi(self)
    }
}

/// Composition of two unary functions, see [`Function::and_then`]
pub struct Composed<F, G> {
    first: F,
    after: G,
}

impl<F: Function, G: Function> Function for Composed<F, G> {
    fn apply(&self, value: Dynamic) -> InvocationResult<Dynamic> {
        let mid = self.first.apply(value)?;
        self.after.apply(mid)
    }
}

/// Composition of a binary function with a unary one, see
/// [`BiFunction::and_then2`]
pub struct ComposedBi<F, G> {
    first: F,
    after: G,
}

impl<F: BiFunction, G: Function> BiFunction for ComposedBi<F, G> {
    fn apply2(&self, a: Dynamic, b: Dynamic) -> InvocationResult<Dynamic> {
        let mid = self.first.apply2(a, b)?;
        self.after.apply(mid)
    }
}

/// Two consumers run in strict order, see [`Consumer::chain`]
pub struct Chained<F, G> {
    first: F,
    after: G,
}

impl<F: Consumer, G: Consumer> Consumer for Chained<F, G> {
    fn accept(&self, value: Dynamic) -> InvocationResult<()> {
        self.first.accept(value.clone())?;
        self.after.accept(value)
    }
}

/// Two binary consumers run in strict order
pub struct ChainedBi<F, G> {
    first: F,
    after: G,
}

impl<F: BiConsumer, G: BiConsumer> BiConsumer for ChainedBi<F, G> {
    fn accept2(&self, a: Dynamic, b: Dynamic) -> InvocationResult<()> {
        self.first.accept2(a.clone(), b.clone())?;
        self.after.accept2(a, b)
    }
}

/// Two ternary consumers run in strict order
pub struct ChainedTri<F, G> {
    first: F,
    after: G,
}

impl<F: TriConsumer, G: TriConsumer> TriConsumer for ChainedTri<F, G> {
    fn accept3(&self, a: Dynamic, b: Dynamic, c: Dynamic) -> InvocationResult<()> {
        self.first.accept3(a.clone(), b.clone(), c.clone())?;
        self.after.accept3(a, b, c)
    }
}

/// Logical inversion of a predicate, see [`Predicate::negate`]
pub struct Negated<P>(P);

impl<P: Predicate> Predicate for Negated<P> {
    fn test(&self, value: Dynamic) -> PredicateResult<bool> {
        Ok(!self.0.test(value)?)
    }
}

/// Logical inversion of a binary predicate
pub struct NegatedBi<P>(P);

impl<P: BiPredicate> BiPredicate for NegatedBi<P> {
    fn test2(&self, a: Dynamic, b: Dynamic) -> PredicateResult<bool> {
        Ok(!self.0.test2(a, b)?)
    }
}

// Plain Rust closures participate in composition and branching alongside
// scripted ones.

impl<F> Function for F
where
    F: Fn(Dynamic) -> InvocationResult<Dynamic>,
{
    fn apply(&self, value: Dynamic) -> InvocationResult<Dynamic> {
        self(value)
    }
}

impl<F> Predicate for F
where
    F: Fn(Dynamic) -> PredicateResult<bool>,
{
    fn test(&self, value: Dynamic) -> PredicateResult<bool> {
        self(value)
    }
}
