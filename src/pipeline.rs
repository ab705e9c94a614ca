//! Shared pipeline state: head stage, write-once closed flag and config.

use crate::config::StreamConfig;
use crate::error::{StreamError, StreamResult};
use crate::stage::{BoxStage, Stage};

/// The state every pipeline kind wraps.
///
/// A pipeline moves from open to closed exactly once, when a terminal
/// operation starts. Intermediate operations consume the pipeline and move
/// its head stage into the stage they build.
pub struct Pipeline<T> {
    head: BoxStage<T>,
    closed: bool,
    config: StreamConfig,
}

impl<T: 'static> Pipeline<T> {
    pub fn new<S>(stage: S, config: StreamConfig) -> Self
    where
        S: Stage<Item = T> + 'static,
    {
        Self { head: Box::new(stage), closed: false, config }
    }

    /// Wrap the head in a new stage and hand back a fresh, open pipeline.
    pub fn chain<R, S, B>(self, operation: &'static str, build: B) -> StreamResult<Pipeline<R>>
    where
        R: 'static,
        S: Stage<Item = R> + 'static,
        B: FnOnce(BoxStage<T>) -> S,
    {
        self.ensure_open(operation)?;
        log::trace!("pipeline {}: chained `{}`", self.config.display_label(), operation);
        let Pipeline { head, config, .. } = self;
        Ok(Pipeline::new(build(head), config))
    }
}

impl<T> Pipeline<T> {
    /// Guard run at the top of every operation.
    pub fn ensure_open(&self, operation: &'static str) -> StreamResult<()> {
        if self.closed {
            log::warn!(
                "pipeline {}: `{}` rejected, stream has already been consumed",
                self.config.display_label(),
                operation
            );
            return Err(StreamError::AlreadyConsumed { operation });
        }
        Ok(())
    }

    /// Close the pipeline and expose its cursor to a terminal operation.
    ///
    /// The flag is set before anything is pulled, so a panic inside a caller
    /// closure still leaves the pipeline closed.
    pub fn drain(&mut self, operation: &'static str) -> StreamResult<Drain<'_, T>> {
        self.ensure_open(operation)?;
        self.closed = true;
        log::debug!("pipeline {}: consumed by `{}`", self.config.display_label(), operation);
        Ok(Drain { head: &mut self.head })
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: StreamConfig) {
        self.config = config;
    }

    /// Surrender the head stage so another pipeline can wrap it.
    pub(crate) fn into_head(self, operation: &'static str) -> StreamResult<BoxStage<T>> {
        self.ensure_open(operation)?;
        Ok(self.head)
    }

    /// Owning iterator over the remaining elements of an open pipeline.
    pub fn try_into_iter(self) -> StreamResult<IntoIter<T>> {
        self.ensure_open("into_iter")?;
        log::debug!("pipeline {}: handed to an owning iterator", self.config.display_label());
        Ok(IntoIter { head: Some(self.head) })
    }
}

/// Exhaustible view over a closed pipeline's cursor.
///
/// Handed to terminal operations and collectors; every `next` pulls the
/// outermost stage once.
pub struct Drain<'a, T> {
    head: &'a mut BoxStage<T>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.head.advance()
    }
}

/// Owning iterator over a pipeline's remaining elements.
pub struct IntoIter<T> {
    head: Option<BoxStage<T>>,
}

impl<T> std::fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntoIter")
            .field("exhausted", &self.head.is_none())
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.head.as_mut()?.advance();
        if item.is_none() {
            self.head = None;
        }
        item
    }
}
