//! Collectors materialize a drained pipeline into a final value.
//!
//! A [`Collector`] is invoked exactly once per `collect` call with the
//! pipeline's [`Drain`]. [`Collectors`] supplies the standard ones.

use std::collections::HashMap;
use std::convert;
use std::fmt::{Debug, Display, Write};
use std::hash::Hash;
use std::marker::PhantomData;

use crate::error::{StreamError, StreamResult};
use crate::pipeline::Drain;

pub trait Collector<T> {
    type Output;

    fn collect(self, source: Drain<'_, T>) -> StreamResult<Self::Output>;
}

/// Entry point for the standard collectors.
pub struct Collectors;

impl Collectors {
    /// Ordered `Vec` in pull order.
    pub fn to_vec() -> ToVec {
        ToVec
    }

    pub fn to_array() -> ToVec {
        ToVec
    }

    pub fn to_list() -> ToVec {
        ToVec
    }

    /// Concatenate `Display` renderings separated by `delimiter`.
    pub fn joining(delimiter: impl Into<String>) -> Joining {
        Self::joining_with(delimiter, "", "")
    }

    /// Like [`Collectors::joining`], wrapping each element in `prefix`/`suffix`.
    pub fn joining_with(
        delimiter: impl Into<String>,
        prefix: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Joining {
        Joining {
            delimiter: delimiter.into(),
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Key/value map; a repeated key fails with [`StreamError::DuplicateKey`].
    pub fn to_map<T, K, V, KF, VF>(key_mapper: KF, value_mapper: VF) -> ToMap<T, K, V, KF, VF, fn(V, V) -> V>
    where
        KF: FnMut(&T) -> K,
        VF: FnMut(T) -> V,
    {
        ToMap { key_mapper, value_mapper, merge: None, _phantom: PhantomData }
    }

    /// Map from key to the element itself; a repeated key fails with
    /// [`StreamError::DuplicateKey`].
    pub fn to_map_by_key<T, K, KF>(key_mapper: KF) -> ToMap<T, K, T, KF, fn(T) -> T, fn(T, T) -> T>
    where
        KF: FnMut(&T) -> K,
    {
        Self::to_map(key_mapper, convert::identity as fn(T) -> T)
    }

    /// Key/value map; a repeated key stores `merge(new, existing)`.
    pub fn to_map_merging<T, K, V, KF, VF, MF>(
        key_mapper: KF,
        value_mapper: VF,
        merge: MF,
    ) -> ToMap<T, K, V, KF, VF, MF>
    where
        KF: FnMut(&T) -> K,
        VF: FnMut(T) -> V,
        MF: FnMut(V, V) -> V,
    {
        ToMap { key_mapper, value_mapper, merge: Some(merge), _phantom: PhantomData }
    }

    /// Group elements by key, preserving pull order within each group.
    pub fn grouping_by<T, K, KF>(key_mapper: KF) -> GroupingBy<T, K, KF>
    where
        KF: FnMut(&T) -> K,
    {
        GroupingBy { key_mapper, _phantom: PhantomData }
    }

    /// Ad-hoc collector from a function over the drained sequence.
    pub fn from_fn<T, R, F>(f: F) -> FnCollector<T, R, F>
    where
        F: FnOnce(Drain<'_, T>) -> R,
    {
        FnCollector { f, _phantom: PhantomData }
    }
}

pub struct ToVec;

impl<T> Collector<T> for ToVec {
    type Output = Vec<T>;

    fn collect(self, source: Drain<'_, T>) -> StreamResult<Vec<T>> {
        Ok(source.collect())
    }
}

pub struct Joining {
    delimiter: String,
    prefix: String,
    suffix: String,
}

impl<T: Display> Collector<T> for Joining {
    type Output = String;

    fn collect(self, source: Drain<'_, T>) -> StreamResult<String> {
        let mut buffer = String::new();
        for (index, item) in source.enumerate() {
            if index > 0 {
                buffer.push_str(&self.delimiter);
            }
            // writing into a String cannot fail
            let _ = write!(buffer, "{}{}{}", self.prefix, item, self.suffix);
        }
        Ok(buffer)
    }
}

pub struct ToMap<T, K, V, KF, VF, MF> {
    key_mapper: KF,
    value_mapper: VF,
    merge: Option<MF>,
    _phantom: PhantomData<fn(T) -> (K, V)>,
}

impl<T, K, V, KF, VF, MF> Collector<T> for ToMap<T, K, V, KF, VF, MF>
where
    K: Eq + Hash + Debug,
    KF: FnMut(&T) -> K,
    VF: FnMut(T) -> V,
    MF: FnMut(V, V) -> V,
{
    type Output = HashMap<K, V>;

    fn collect(mut self, source: Drain<'_, T>) -> StreamResult<HashMap<K, V>> {
        let mut map = HashMap::new();
        for item in source {
            let key = (self.key_mapper)(&item);
            let value = (self.value_mapper)(item);
            match map.remove(&key) {
                None => {
                    map.insert(key, value);
                }
                Some(existing) => {
                    let Some(merge) = self.merge.as_mut() else {
                        log::warn!("to_map aborted on duplicate key {:?}", key);
                        return Err(StreamError::DuplicateKey { key: format!("{:?}", key) });
                    };
                    let merged = merge(value, existing);
                    map.insert(key, merged);
                }
            }
        }
        Ok(map)
    }
}

pub struct GroupingBy<T, K, KF> {
    key_mapper: KF,
    _phantom: PhantomData<fn(T) -> K>,
}

impl<T, K, KF> Collector<T> for GroupingBy<T, K, KF>
where
    K: Eq + Hash,
    KF: FnMut(&T) -> K,
{
    type Output = HashMap<K, Vec<T>>;

    fn collect(mut self, source: Drain<'_, T>) -> StreamResult<HashMap<K, Vec<T>>> {
        let mut groups: HashMap<K, Vec<T>> = HashMap::new();
        for item in source {
            groups.entry((self.key_mapper)(&item)).or_default().push(item);
        }
        Ok(groups)
    }
}

pub struct FnCollector<T, R, F> {
    f: F,
    _phantom: PhantomData<fn(T) -> R>,
}

impl<T, R, F> Collector<T> for FnCollector<T, R, F>
where
    F: FnOnce(Drain<'_, T>) -> R,
{
    type Output = R;

    fn collect(self, source: Drain<'_, T>) -> StreamResult<R> {
        Ok((self.f)(source))
    }
}
