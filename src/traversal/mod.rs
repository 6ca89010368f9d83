//! Traversal-side consumers of the adapters

pub mod choose;

pub use choose::{BranchKey, ChooseError, ChooseResult, ChooseStep};
