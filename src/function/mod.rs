//! Functional contracts and the adapters that satisfy them

pub mod contract;
pub mod lambda;
pub mod predicate;

pub use contract::{
    BiConsumer, BiFunction, BiPredicate, Chained, ChainedBi, ChainedTri, Composed, ComposedBi,
    Consumer, Function, Negated, NegatedBi, Predicate, Supplier, TriConsumer,
};
pub use lambda::RhaiLambda;
pub use predicate::RhaiPredicate;
