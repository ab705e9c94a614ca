//! A 0-or-1 element container returned by terminal operations that may have
//! no answer.
//!
//! Presence is an explicit tag: `0`, `""` and `false` are ordinary present
//! values.

use serde::{Deserialize, Serialize};

use crate::error::{StreamError, StreamResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Optional<T> {
    value: Option<T>,
}

impl<T> Optional<T> {
    pub fn of(value: T) -> Self {
        Self { value: Some(value) }
    }

    pub fn empty() -> Self {
        Self { value: None }
    }

    pub fn of_nullable(value: Option<T>) -> Self {
        Self { value }
    }

    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// The held value, or [`StreamError::NoValuePresent`].
    pub fn get(self) -> StreamResult<T> {
        self.value.ok_or(StreamError::NoValuePresent)
    }

    pub fn as_ref(&self) -> Optional<&T> {
        Optional { value: self.value.as_ref() }
    }

    pub fn or_else(self, default: T) -> T {
        self.value.unwrap_or(default)
    }

    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.value.unwrap_or_else(supplier)
    }

    /// The held value, or the error built by `supplier`.
    pub fn or_else_throw<E, F>(self, supplier: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        self.value.ok_or_else(supplier)
    }

    pub fn if_present<F>(&self, consumer: F)
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self.value {
            consumer(value);
        }
    }

    pub fn map<R, F>(self, mapper: F) -> Optional<R>
    where
        F: FnOnce(T) -> R,
    {
        Optional { value: self.value.map(mapper) }
    }

    pub fn flat_map<R, F>(self, mapper: F) -> Optional<R>
    where
        F: FnOnce(T) -> Optional<R>,
    {
        match self.value {
            Some(value) => mapper(value),
            None => Optional::empty(),
        }
    }

    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Optional { value: self.value.filter(predicate) }
    }

    pub fn into_option(self) -> Option<T> {
        self.value
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.value
    }
}
