//! Pull-based stages
//!
//! A stage is a cursor: each call to [`Stage::advance`] produces exactly one
//! element or reports exhaustion. Every transformation wraps an upstream
//! stage, so a pipeline is a chain of stages that does no work until the
//! outermost one is pulled.

pub mod core;
pub mod advanced;
pub mod constructors;

pub use self::core::{Filter, Limit, Map, Peek, Skip, ToNumber};
pub use advanced::{Concat, FlatMap};
pub use constructors::{Empty, Generate, Iterate, Range, Source};

/// Minimal pull cursor contract.
pub trait Stage {
    type Item;

    /// Produce the next element, or `None` once exhausted.
    ///
    /// After returning `None` a stage must never produce a value again.
    fn advance(&mut self) -> Option<Self::Item>;
}

/// Type-erased stage owned by a pipeline.
pub type BoxStage<T> = Box<dyn Stage<Item = T>>;

impl<S: Stage + ?Sized> Stage for Box<S> {
    type Item = S::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        (**self).advance()
    }
}

impl<S: Stage + ?Sized> Stage for &mut S {
    type Item = S::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        (**self).advance()
    }
}
