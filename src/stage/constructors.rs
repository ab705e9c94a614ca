//! Source stages: iterator sources, empty, range, iterate, generate
use std::marker::PhantomData;

use super::Stage;

// ================================
// Basic Sources
// ================================

/// Wraps any finite or infinite [`Iterator`] as the head of a pipeline.
pub struct Source<I> {
    iter: I,
}

impl<I: Iterator> Source<I> {
    pub fn new<T>(items: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self { iter: items.into_iter() }
    }
}

impl<I: Iterator> Stage for Source<I> {
    type Item = I::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}

pub struct Empty<T> {
    _phantom: PhantomData<T>,
}

impl<T> Empty<T> {
    pub fn new() -> Self {
        Self { _phantom: PhantomData }
    }
}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stage for Empty<T> {
    type Item = T;

    fn advance(&mut self) -> Option<T> {
        None
    }
}

// ================================
// Numeric Sources
// ================================

/// Half-open interval `[start, end)`.
pub struct Range {
    next: i64,
    end: i64,
}

impl Range {
    pub fn new(start_inclusive: i64, end_exclusive: i64) -> Self {
        Self { next: start_inclusive, end: end_exclusive }
    }
}

impl Stage for Range {
    type Item = i64;

    fn advance(&mut self) -> Option<i64> {
        if self.next >= self.end {
            return None;
        }
        let value = self.next;
        self.next += 1;
        Some(value)
    }
}

// ================================
// Function-based Sources
// ================================

/// `seed, f(seed), f(f(seed)), ...`; never exhausts.
pub struct Iterate<T, F> {
    seed: Option<T>,
    previous: Option<T>,
    f: F,
}

impl<T, F> Iterate<T, F> {
    pub fn new(seed: T, f: F) -> Self {
        Self { seed: Some(seed), previous: None, f }
    }
}

impl<T, F> Stage for Iterate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    type Item = T;

    fn advance(&mut self) -> Option<T> {
        let next = match (self.seed.take(), self.previous.as_ref()) {
            (Some(seed), _) => seed,
            (None, Some(previous)) => (self.f)(previous),
            (None, None) => return None,
        };
        self.previous = Some(next.clone());
        Some(next)
    }
}

/// A fresh `supplier()` call per pull; never exhausts.
pub struct Generate<F> {
    supplier: F,
}

impl<F> Generate<F> {
    pub fn new(supplier: F) -> Self {
        Self { supplier }
    }
}

impl<T, F> Stage for Generate<F>
where
    F: FnMut() -> T,
{
    type Item = T;

    fn advance(&mut self) -> Option<T> {
        Some((self.supplier)())
    }
}
