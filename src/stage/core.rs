//! Single-upstream stages: filter, map, to_number, peek, skip, limit
use super::Stage;
use crate::number::Number;

// Filter
pub struct Filter<S, P> {
    upstream: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub fn new(upstream: S, predicate: P) -> Self {
        Self { upstream, predicate }
    }
}

impl<S, P> Stage for Filter<S, P>
where
    S: Stage,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.upstream.advance()?;
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
    }
}

// Map
pub struct Map<S, F> {
    upstream: S,
    mapper: F,
}

impl<S, F> Map<S, F> {
    pub fn new(upstream: S, mapper: F) -> Self {
        Self { upstream, mapper }
    }
}

impl<S, R, F> Stage for Map<S, F>
where
    S: Stage,
    F: FnMut(S::Item) -> R,
{
    type Item = R;

    fn advance(&mut self) -> Option<R> {
        self.upstream.advance().map(&mut self.mapper)
    }
}

/// [`Map`] fixed to a [`Number`] output; bridges a generic pipeline into a
/// `NumberStream`.
pub struct ToNumber<S, F> {
    inner: Map<S, F>,
}

impl<S, F> ToNumber<S, F> {
    pub fn new(upstream: S, mapper: F) -> Self {
        Self { inner: Map::new(upstream, mapper) }
    }
}

impl<S, F, N> Stage for ToNumber<S, F>
where
    S: Stage,
    F: FnMut(S::Item) -> N,
    N: Number,
{
    type Item = N;

    fn advance(&mut self) -> Option<N> {
        self.inner.advance()
    }
}

// Peek
pub struct Peek<S, C> {
    upstream: S,
    consumer: C,
}

impl<S, C> Peek<S, C> {
    pub fn new(upstream: S, consumer: C) -> Self {
        Self { upstream, consumer }
    }
}

impl<S, C> Stage for Peek<S, C>
where
    S: Stage,
    C: FnMut(&S::Item),
{
    type Item = S::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        let item = self.upstream.advance()?;
        (self.consumer)(&item);
        Some(item)
    }
}

// Skip
pub struct Skip<S> {
    upstream: S,
    remaining: usize,
}

impl<S> Skip<S> {
    pub fn new(upstream: S, n: usize) -> Self {
        Self { upstream, remaining: n }
    }
}

impl<S: Stage> Stage for Skip<S> {
    type Item = S::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        while self.remaining > 0 {
            // upstream ran dry while discarding
            self.upstream.advance()?;
            self.remaining -= 1;
        }
        self.upstream.advance()
    }
}

// Limit
pub struct Limit<S> {
    upstream: S,
    remaining: usize,
}

impl<S> Limit<S> {
    pub fn new(upstream: S, n: usize) -> Self {
        Self { upstream, remaining: n }
    }
}

impl<S: Stage> Stage for Limit<S> {
    type Item = S::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.upstream.advance()
    }
}
