//! Multi-sequence stages: flat_map and concat
use super::Stage;

// ================================
// FlatMap
// ================================

enum FlatMapState<I> {
    /// No inner cursor; the next pull fetches one from upstream
    Idle,
    /// Draining the inner cursor produced by the last upstream element
    Active(I),
    /// Upstream is exhausted
    Done,
}

pub struct FlatMap<S, F, U: IntoIterator> {
    upstream: S,
    mapper: F,
    state: FlatMapState<U::IntoIter>,
}

impl<S, F, U: IntoIterator> FlatMap<S, F, U> {
    pub fn new(upstream: S, mapper: F) -> Self {
        Self { upstream, mapper, state: FlatMapState::Idle }
    }
}

impl<S, F, U> Stage for FlatMap<S, F, U>
where
    S: Stage,
    F: FnMut(S::Item) -> U,
    U: IntoIterator,
{
    type Item = U::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        loop {
            match &mut self.state {
                FlatMapState::Active(inner) => match inner.next() {
                    Some(item) => return Some(item),
                    // an exhausted (or empty) inner sequence never ends the stage
                    None => self.state = FlatMapState::Idle,
                },
                FlatMapState::Idle => match self.upstream.advance() {
                    Some(outer) => {
                        let inner = (self.mapper)(outer).into_iter();
                        self.state = FlatMapState::Active(inner);
                    }
                    None => self.state = FlatMapState::Done,
                },
                FlatMapState::Done => return None,
            }
        }
    }
}

// ================================
// Concat
// ================================

pub struct Concat<A, B> {
    first: A,
    second: B,
    first_done: bool,
    second_done: bool,
}

impl<A, B> Concat<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second, first_done: false, second_done: false }
    }
}

impl<A, B> Stage for Concat<A, B>
where
    A: Stage,
    B: Stage<Item = A::Item>,
{
    type Item = A::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        if !self.first_done {
            match self.first.advance() {
                Some(item) => return Some(item),
                None => self.first_done = true,
            }
        }
        if self.second_done {
            return None;
        }
        let next = self.second.advance();
        self.second_done = next.is_none();
        next
    }
}
