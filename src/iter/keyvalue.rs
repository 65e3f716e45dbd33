//! Key/value pairs and the combinators that build or split them: zip, unzip
use super::core::Iter;
use crate::error::IterError;
use crate::iter_configuration::BufferConfig;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// An immutable key/value pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct KeyValue<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> KeyValue<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Return the key and the value.
    pub fn split(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for KeyValue<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self { key, value }
    }
}

impl<K, V> From<KeyValue<K, V>> for (K, V) {
    fn from(kv: KeyValue<K, V>) -> Self {
        kv.split()
    }
}

// ================================
// Zip
// ================================

/// Pairs produced by a key iterator and a value iterator, stepped together.
///
/// Values are only pulled when the key side produced a key, so a longer
/// value source keeps its remaining values.
pub struct Zip<K, V> {
    keys: K,
    values: V,
    stopped: bool,
}

impl<K: Iter, V: Iter> Zip<K, V> {
    pub(crate) fn new(keys: K, values: V) -> Self {
        Self {
            keys,
            values,
            stopped: false,
        }
    }
}

impl<K: Iter, V: Iter> Iter for Zip<K, V> {
    type Item = KeyValue<K::Item, V::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stopped {
            return None;
        }
        let pair = match self.keys.next() {
            Some(key) => self.values.next().map(|value| KeyValue::new(key, value)),
            None => None,
        };
        if pair.is_none() {
            self.stopped = true;
        }
        pair
    }

    /// The first error of the keys, else of the values.
    fn error(&self) -> Option<IterError> {
        self.keys.error().or_else(|| self.values.error())
    }
}

/// Zip a key iterator and a value iterator into key/value pairs.
pub fn zip<K: Iter, V: Iter>(keys: K, values: V) -> Zip<K, V> {
    Zip::new(keys, values)
}

// ================================
// Unzip
// ================================

// Shared between the two sides of an unzip. Whichever side runs ahead
// queues the other half of each pair it pulls.
struct Unzipper<S, K, V> {
    source: S,
    keys: VecDeque<K>,
    values: VecDeque<V>,
    // Set once a side is dropped; its half of each pair is discarded.
    keys_dropped: bool,
    values_dropped: bool,
    config: BufferConfig,
    overflow: Option<IterError>,
}

impl<S, K, V> Unzipper<S, K, V>
where
    S: Iter<Item = KeyValue<K, V>>,
{
    fn next_key(&mut self) -> Option<K> {
        if let Some(key) = self.keys.pop_front() {
            return Some(key);
        }
        if self.overflow.is_some() {
            return None;
        }
        let (key, value) = self.source.next()?.split();
        if !self.values_dropped {
            if let Err(err) = self.config.admits(self.values.len()) {
                self.overflow = Some(err);
                return None;
            }
            self.values.push_back(value);
        }
        Some(key)
    }

    fn next_value(&mut self) -> Option<V> {
        if let Some(value) = self.values.pop_front() {
            return Some(value);
        }
        if self.overflow.is_some() {
            return None;
        }
        let (key, value) = self.source.next()?.split();
        if !self.keys_dropped {
            if let Err(err) = self.config.admits(self.keys.len()) {
                self.overflow = Some(err);
                return None;
            }
            self.keys.push_back(key);
        }
        Some(value)
    }

    fn error(&self) -> Option<IterError> {
        self.overflow.clone().or_else(|| self.source.error())
    }
}

/// Key side of an unzip.
///
/// Both sides share one source through an `Rc<RefCell<_>>`, so they are
/// confined to a single thread and must not be pulled re-entrantly.
pub struct UnzipKeys<S, K, V> {
    shared: Rc<RefCell<Unzipper<S, K, V>>>,
}

/// Value side of an unzip.
pub struct UnzipValues<S, K, V> {
    shared: Rc<RefCell<Unzipper<S, K, V>>>,
}

impl<S, K, V> Iter for UnzipKeys<S, K, V>
where
    S: Iter<Item = KeyValue<K, V>>,
{
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.shared.borrow_mut().next_key()
    }

    fn error(&self) -> Option<IterError> {
        self.shared.borrow().error()
    }
}

impl<S, K, V> Iter for UnzipValues<S, K, V>
where
    S: Iter<Item = KeyValue<K, V>>,
{
    type Item = V;

    fn next(&mut self) -> Option<V> {
        self.shared.borrow_mut().next_value()
    }

    fn error(&self) -> Option<IterError> {
        self.shared.borrow().error()
    }
}

impl<S, K, V> Drop for UnzipKeys<S, K, V> {
    fn drop(&mut self) {
        if let Ok(mut shared) = self.shared.try_borrow_mut() {
            shared.keys_dropped = true;
            shared.keys.clear();
        }
    }
}

impl<S, K, V> Drop for UnzipValues<S, K, V> {
    fn drop(&mut self) {
        if let Ok(mut shared) = self.shared.try_borrow_mut() {
            shared.values_dropped = true;
            shared.values.clear();
        }
    }
}

/// Split a key/value iterator into a key iterator and a value iterator
/// which can be consumed at different paces.
pub fn unzip<S, K, V>(source: S) -> (UnzipKeys<S, K, V>, UnzipValues<S, K, V>)
where
    S: Iter<Item = KeyValue<K, V>>,
{
    unzip_with_config(source, BufferConfig::default())
}

pub fn unzip_with_config<S, K, V>(
    source: S,
    config: BufferConfig,
) -> (UnzipKeys<S, K, V>, UnzipValues<S, K, V>)
where
    S: Iter<Item = KeyValue<K, V>>,
{
    let shared = Rc::new(RefCell::new(Unzipper {
        source,
        keys: VecDeque::with_capacity(config.initial_capacity),
        values: VecDeque::with_capacity(config.initial_capacity),
        keys_dropped: false,
        values_dropped: false,
        config,
        overflow: None,
    }));
    (
        UnzipKeys {
            shared: Rc::clone(&shared),
        },
        UnzipValues { shared },
    )
}
