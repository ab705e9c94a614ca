//! Operations shared by every pipeline kind.
//!
//! [`BaseStream`] is parameterized over the element type and implemented by
//! each concrete kind, which only supplies its constructor and accessors.
//! Operations that preserve the element type (`filter`, `skip`, `limit`, ...)
//! return `Self`, so a `NumberStream` stays numeric; `map` and `flat_map`
//! always widen to [`Stream`].
//!
//! Intermediate operations consume the receiver and fail with
//! [`StreamError::AlreadyConsumed`] if it was closed; they pull nothing.
//! Terminal operations close the receiver before pulling and fail the same
//! way on a second call.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;

use crate::collectors::Collector;
use crate::config::StreamConfig;
use crate::error::{StreamError, StreamResult};
use crate::lambdas::natural_order;
use crate::optional::Optional;
use crate::pipeline::{IntoIter, Pipeline};
use crate::stage::{Concat, Filter, FlatMap, Limit, Map, Peek, Skip, Source};
use crate::stream::Stream;

pub trait BaseStream<T: 'static>: Sized {
    /// Build this pipeline kind around `pipeline`.
    fn from_pipeline(pipeline: Pipeline<T>) -> Self;

    fn pipeline(&self) -> &Pipeline<T>;

    fn pipeline_mut(&mut self) -> &mut Pipeline<T>;

    fn into_pipeline(self) -> Pipeline<T>;

    /// Whether a terminal operation has already run on this pipeline.
    fn is_closed(&self) -> bool {
        self.pipeline().is_closed()
    }

    // ================================
    // Intermediate operations
    // ================================

    /// Replace the configuration carried by this pipeline and its descendants.
    fn with_config(self, config: StreamConfig) -> StreamResult<Self> {
        let mut pipeline = self.into_pipeline();
        pipeline.ensure_open("with_config")?;
        pipeline.set_config(config);
        Ok(Self::from_pipeline(pipeline))
    }

    fn filter<P>(self, predicate: P) -> StreamResult<Self>
    where
        P: FnMut(&T) -> bool + 'static,
    {
        self.into_pipeline()
            .chain("filter", |head| Filter::new(head, predicate))
            .map(Self::from_pipeline)
    }

    fn map<R, F>(self, mapper: F) -> StreamResult<Stream<R>>
    where
        R: 'static,
        F: FnMut(T) -> R + 'static,
    {
        self.into_pipeline()
            .chain("map", |head| Map::new(head, mapper))
            .map(Stream::from_pipeline)
    }

    /// Replace each element with the sequence `mapper` returns for it.
    ///
    /// Inner sequences are drained in order; an empty one contributes nothing
    /// and does not end the stream.
    fn flat_map<R, U, F>(self, mapper: F) -> StreamResult<Stream<R>>
    where
        R: 'static,
        U: IntoIterator<Item = R> + 'static,
        U::IntoIter: 'static,
        F: FnMut(T) -> U + 'static,
    {
        self.into_pipeline()
            .chain("flat_map", |head| FlatMap::<_, _, U>::new(head, mapper))
            .map(Stream::from_pipeline)
    }

    /// Run `consumer` on each element as it is pulled.
    fn peek<C>(self, consumer: C) -> StreamResult<Self>
    where
        C: FnMut(&T) + 'static,
    {
        self.into_pipeline()
            .chain("peek", |head| Peek::new(head, consumer))
            .map(Self::from_pipeline)
    }

    fn skip(self, n: usize) -> StreamResult<Self> {
        self.into_pipeline()
            .chain("skip", |head| Skip::new(head, n))
            .map(Self::from_pipeline)
    }

    fn limit(self, n: usize) -> StreamResult<Self> {
        self.into_pipeline()
            .chain("limit", |head| Limit::new(head, n))
            .map(Self::from_pipeline)
    }

    /// All of `self`, then all of `other`.
    fn concat(self, other: Self) -> StreamResult<Self> {
        let pipeline = self.into_pipeline();
        pipeline.ensure_open("concat")?;
        let tail = other.into_pipeline().into_head("concat")?;
        pipeline
            .chain("concat", |head| Concat::new(head, tail))
            .map(Self::from_pipeline)
    }

    /// Sort by natural order. Eager: drains the receiver into a buffer.
    fn sorted(self) -> StreamResult<Self>
    where
        T: PartialOrd,
    {
        self.sorted_by(natural_order)
    }

    /// Sort with `comparator` (stable). Eager: drains the receiver into a
    /// buffer, bounded by the configured `sort_buffer_limit`.
    fn sorted_by<C>(self, mut comparator: C) -> StreamResult<Self>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        let mut pipeline = self.into_pipeline();
        let config = pipeline.config().clone();
        let mut buffer = Vec::with_capacity(config.initial_capacity);
        for item in pipeline.drain("sorted")? {
            if let Some(limit) = config.sort_buffer_limit {
                if buffer.len() >= limit {
                    log::warn!("pipeline {}: sort buffer limit {} exceeded", config.display_label(), limit);
                    return Err(StreamError::BufferLimitExceeded { limit });
                }
            }
            buffer.push(item);
        }
        buffer.sort_by(|a, b| comparator(a, b));
        Ok(Self::from_pipeline(Pipeline::new(Source::new(buffer), config)))
    }

    /// Drop elements equal to one already surfaced, keeping first occurrences.
    ///
    /// Linear scan over every element seen so far: O(n²) and unbounded memory
    /// on unbounded input. See [`BaseStream::distinct_hashed`].
    fn distinct(self) -> StreamResult<Self>
    where
        T: PartialEq + Clone,
    {
        let mut seen: Vec<T> = Vec::new();
        self.filter(move |item| {
            if seen.contains(item) {
                return false;
            }
            seen.push(item.clone());
            true
        })
    }

    /// [`BaseStream::distinct`] backed by a hash set.
    fn distinct_hashed(self) -> StreamResult<Self>
    where
        T: Eq + Hash + Clone,
    {
        let mut seen: HashSet<T> = HashSet::new();
        self.filter(move |item| seen.insert(item.clone()))
    }

    // ================================
    // Terminal operations
    // ================================

    /// Hand the remaining elements to an owning iterator.
    ///
    /// The `IntoIterator` impls call this and panic on a consumed pipeline.
    fn try_into_iter(self) -> StreamResult<IntoIter<T>> {
        self.into_pipeline().try_into_iter()
    }

    /// Fold the elements pairwise; empty when the stream was empty.
    fn reduce<F>(&mut self, reducer: F) -> StreamResult<Optional<T>>
    where
        F: FnMut(T, T) -> T,
    {
        Ok(self.pipeline_mut().drain("reduce")?.reduce(reducer).into())
    }

    /// Fold the elements starting from `identity`.
    fn reduce_with<F>(&mut self, identity: T, reducer: F) -> StreamResult<T>
    where
        F: FnMut(T, T) -> T,
    {
        Ok(self.pipeline_mut().drain("reduce")?.fold(identity, reducer))
    }

    /// First element matching `predicate`; stops pulling at the match.
    fn find<P>(&mut self, predicate: P) -> StreamResult<Optional<T>>
    where
        P: FnMut(&T) -> bool,
    {
        Ok(self.pipeline_mut().drain("find")?.find(predicate).into())
    }

    /// Number of elements until exhaustion. Never returns on an unbounded stream.
    fn count(&mut self) -> StreamResult<usize> {
        Ok(self.pipeline_mut().drain("count")?.count())
    }

    /// Stops at the first match.
    fn any_match<P>(&mut self, mut predicate: P) -> StreamResult<bool>
    where
        P: FnMut(&T) -> bool,
    {
        Ok(self.pipeline_mut().drain("any_match")?.any(|item| predicate(&item)))
    }

    /// Stops at the first mismatch; true on an empty stream.
    fn all_match<P>(&mut self, mut predicate: P) -> StreamResult<bool>
    where
        P: FnMut(&T) -> bool,
    {
        Ok(self.pipeline_mut().drain("all_match")?.all(|item| predicate(&item)))
    }

    /// Stops at the first match; true on an empty stream.
    fn none_match<P>(&mut self, mut predicate: P) -> StreamResult<bool>
    where
        P: FnMut(&T) -> bool,
    {
        Ok(!self.pipeline_mut().drain("none_match")?.any(|item| predicate(&item)))
    }

    fn min(&mut self) -> StreamResult<Optional<T>>
    where
        T: PartialOrd,
    {
        self.min_by(natural_order)
    }

    /// Smallest element under `comparator`; the first one wins ties.
    fn min_by<C>(&mut self, mut comparator: C) -> StreamResult<Optional<T>>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        let min = self.pipeline_mut().drain("min")?.fold(None, |min, item| match min {
            Some(current) if comparator(&item, &current) != Ordering::Less => Some(current),
            _ => Some(item),
        });
        Ok(min.into())
    }

    fn max(&mut self) -> StreamResult<Optional<T>>
    where
        T: PartialOrd,
    {
        self.max_by(natural_order)
    }

    /// Largest element under `comparator`; the first one wins ties.
    fn max_by<C>(&mut self, mut comparator: C) -> StreamResult<Optional<T>>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        let max = self.pipeline_mut().drain("max")?.fold(None, |max, item| match max {
            Some(current) if comparator(&item, &current) != Ordering::Greater => Some(current),
            _ => Some(item),
        });
        Ok(max.into())
    }

    /// Run `action` on every element in pull order.
    fn for_each<F>(&mut self, action: F) -> StreamResult<()>
    where
        F: FnMut(T),
    {
        self.pipeline_mut().drain("for_each")?.for_each(action);
        Ok(())
    }

    /// Hand the drained sequence to `collector`.
    fn collect<C>(&mut self, collector: C) -> StreamResult<C::Output>
    where
        C: Collector<T>,
    {
        let source = self.pipeline_mut().drain("collect")?;
        collector.collect(source)
    }
}
