//! Concrete pipeline kinds and the source-adapter facade.

use std::fmt;

use crate::base_stream::BaseStream;
use crate::config::StreamConfig;
use crate::error::{StreamError, StreamResult};
use crate::number::Number;
use crate::optional::Optional;
use crate::pipeline::{IntoIter, Pipeline};
use crate::stage::{Empty, Generate, Iterate, Range, Source, ToNumber};

// ================================
// Stream
// ================================

/// Generic pipeline over any element type.
pub struct Stream<T> {
    pipeline: Pipeline<T>,
}

impl<T: 'static> BaseStream<T> for Stream<T> {
    fn from_pipeline(pipeline: Pipeline<T>) -> Self {
        Self { pipeline }
    }

    fn pipeline(&self) -> &Pipeline<T> {
        &self.pipeline
    }

    fn pipeline_mut(&mut self) -> &mut Pipeline<T> {
        &mut self.pipeline
    }

    fn into_pipeline(self) -> Pipeline<T> {
        self.pipeline
    }
}

impl<T: 'static> Stream<T> {
    pub fn of<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self::from_pipeline(Pipeline::new(Source::new(items), StreamConfig::default()))
    }

    pub fn empty() -> Self {
        Self::from_pipeline(Pipeline::new(Empty::new(), StreamConfig::default()))
    }

    /// `seed, f(seed), f(f(seed)), ...`; bound it with `limit`.
    pub fn iterate<F>(seed: T, f: F) -> Self
    where
        T: Clone,
        F: FnMut(&T) -> T + 'static,
    {
        Self::from_pipeline(Pipeline::new(Iterate::new(seed, f), StreamConfig::default()))
    }

    /// One `supplier()` call per pull; bound it with `limit`.
    pub fn generate<F>(supplier: F) -> Self
    where
        F: FnMut() -> T + 'static,
    {
        Self::from_pipeline(Pipeline::new(Generate::new(supplier), StreamConfig::default()))
    }

    pub fn map_to_number<N, F>(self, mapper: F) -> StreamResult<NumberStream<N>>
    where
        N: Number,
        F: FnMut(T) -> N + 'static,
    {
        self.pipeline
            .chain("map_to_number", |head| ToNumber::new(head, mapper))
            .map(NumberStream::from_pipeline)
    }
}

impl<T: 'static> IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Panics with [`StreamError::AlreadyConsumed`] on a consumed stream;
    /// see [`BaseStream::try_into_iter`].
    fn into_iter(self) -> IntoIter<T> {
        self.try_into_iter().unwrap_or_else(|err| panic!("{}", err))
    }
}

impl<T> fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("closed", &self.pipeline.is_closed())
            .field("config", self.pipeline.config())
            .finish()
    }
}

// ================================
// NumberStream
// ================================

/// Numeric pipeline adding `sum` and `average`.
///
/// Defaults to `i64`, the element type of `range`; `NumberStream<f64>`
/// carries fractional values.
pub struct NumberStream<N = i64> {
    pipeline: Pipeline<N>,
}

impl<N: Number> BaseStream<N> for NumberStream<N> {
    fn from_pipeline(pipeline: Pipeline<N>) -> Self {
        Self { pipeline }
    }

    fn pipeline(&self) -> &Pipeline<N> {
        &self.pipeline
    }

    fn pipeline_mut(&mut self) -> &mut Pipeline<N> {
        &mut self.pipeline
    }

    fn into_pipeline(self) -> Pipeline<N> {
        self.pipeline
    }
}

impl<N: Number> NumberStream<N> {
    pub fn of<I>(numbers: I) -> Self
    where
        I: IntoIterator<Item = N>,
        I::IntoIter: 'static,
    {
        Self::from_pipeline(Pipeline::new(Source::new(numbers), StreamConfig::default()))
    }

    pub fn empty() -> Self {
        Self::from_pipeline(Pipeline::new(Empty::new(), StreamConfig::default()))
    }

    pub fn iterate<F>(seed: N, mut f: F) -> Self
    where
        F: FnMut(N) -> N + 'static,
    {
        Self::from_pipeline(Pipeline::new(
            Iterate::new(seed, move |previous: &N| f(*previous)),
            StreamConfig::default(),
        ))
    }

    pub fn generate<F>(supplier: F) -> Self
    where
        F: FnMut() -> N + 'static,
    {
        Self::from_pipeline(Pipeline::new(Generate::new(supplier), StreamConfig::default()))
    }

    /// Sum of all elements; zero for an empty stream.
    ///
    /// Integer sums that leave the element type's range fail with
    /// [`StreamError::ArithmeticOverflow`].
    pub fn sum(&mut self) -> StreamResult<N> {
        let label = self.pipeline.config().display_label().to_string();
        let mut total = N::ZERO;
        for n in self.pipeline.drain("sum")? {
            total = match total.checked_add(n) {
                Some(total) => total,
                None => {
                    log::warn!("pipeline {}: sum overflowed after {:?}", label, total);
                    return Err(StreamError::ArithmeticOverflow { operation: "sum" });
                }
            };
        }
        Ok(total)
    }

    /// Arithmetic mean; empty for an empty stream.
    pub fn average(&mut self) -> StreamResult<Optional<f64>> {
        Ok(N::mean(self.pipeline.drain("average")?).into())
    }

    /// Widen to a generic `Stream`.
    pub fn boxed(self) -> StreamResult<Stream<N>> {
        self.pipeline.ensure_open("boxed")?;
        Ok(Stream::from_pipeline(self.pipeline))
    }
}

impl NumberStream<i64> {
    /// `[start, end)`; empty when `start >= end`.
    pub fn range(start_inclusive: i64, end_exclusive: i64) -> Self {
        Self::from_pipeline(Pipeline::new(
            Range::new(start_inclusive, end_exclusive),
            StreamConfig::default(),
        ))
    }

    /// `[start, end]`, as `range(start, end + 1)`.
    ///
    /// `end + 1` saturates, so `i64::MAX` itself is never produced.
    pub fn range_closed(start_inclusive: i64, end_inclusive: i64) -> Self {
        Self::range(start_inclusive, end_inclusive.saturating_add(1))
    }
}

impl<N: Number> IntoIterator for NumberStream<N> {
    type Item = N;
    type IntoIter = IntoIter<N>;

    /// Panics with [`StreamError::AlreadyConsumed`] on a consumed stream;
    /// see [`BaseStream::try_into_iter`].
    fn into_iter(self) -> IntoIter<N> {
        self.try_into_iter().unwrap_or_else(|err| panic!("{}", err))
    }
}

impl<N> fmt::Debug for NumberStream<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberStream")
            .field("closed", &self.pipeline.is_closed())
            .field("config", self.pipeline.config())
            .finish()
    }
}

// ================================
// Source adapters
// ================================

/// Entry points for building pipelines.
pub struct Downstream;

impl Downstream {
    /// Wrap any iterable.
    pub fn of<T, I>(items: I) -> Stream<T>
    where
        T: 'static,
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Stream::of(items)
    }

    /// Wrap an iterable of numbers as a `NumberStream`.
    pub fn number_stream<N, I>(numbers: I) -> NumberStream<N>
    where
        N: Number,
        I: IntoIterator<Item = N>,
        I::IntoIter: 'static,
    {
        NumberStream::of(numbers)
    }

    pub fn empty<T: 'static>() -> Stream<T> {
        Stream::empty()
    }

    pub fn range(start_inclusive: i64, end_exclusive: i64) -> NumberStream {
        NumberStream::<i64>::range(start_inclusive, end_exclusive)
    }

    pub fn range_closed(start_inclusive: i64, end_inclusive: i64) -> NumberStream {
        NumberStream::<i64>::range_closed(start_inclusive, end_inclusive)
    }

    pub fn iterate<N, F>(seed: N, f: F) -> NumberStream<N>
    where
        N: Number,
        F: FnMut(N) -> N + 'static,
    {
        NumberStream::iterate(seed, f)
    }

    pub fn generate<N, F>(supplier: F) -> NumberStream<N>
    where
        N: Number,
        F: FnMut() -> N + 'static,
    {
        NumberStream::generate(supplier)
    }
}
