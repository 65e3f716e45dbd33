//! Consecutive-run grouping
//!
//! `group_by` scans its source once, left to right, and starts a new group
//! every time the key changes. Each group is handed out as its own iterator.
//! Groups are lazy: values are queued per group as the source is scanned,
//! and any group iterator can be consumed at any time, before or after the
//! ones handed out later.
//!
//! ```ignore
//! let words = from_slice(&["a", "be", "it", "no", "hello", "the", "are"]);
//! let mut groups = words.group_by(|w| w.len());
//! // (1, ["a"]), (2, ["be", "it", "no"]), (5, ["hello"]), (3, ["the", "are"])
//! ```
use super::core::Iter;
use super::keyvalue::{unzip, unzip_with_config, KeyValue, UnzipKeys, UnzipValues};
use crate::error::IterError;
use crate::iter_configuration::BufferConfig;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

struct Grouper<S: Iter, K, F> {
    source: S,
    key_fn: F,
    // Id of the group being scanned; 0 until the first value arrives.
    id: usize,
    key: Option<K>,
    pending: HashMap<usize, VecDeque<S::Item>>,
    // Group started by the scan but not yet handed out.
    unannounced: Option<usize>,
    // Group whose iterator was dropped while the scan was still on it.
    abandoned: Option<usize>,
    exhausted: bool,
    config: BufferConfig,
    overflow: Option<IterError>,
}

impl<S, K, F> Grouper<S, K, F>
where
    S: Iter,
    K: PartialEq,
    F: FnMut(&S::Item) -> K,
{
    /// Pull one value from the source into the queue of its group.
    fn advance_source(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        let value = match self.source.next() {
            Some(value) => value,
            None => {
                self.exhausted = true;
                return false;
            }
        };

        let key = (self.key_fn)(&value);
        if self.key.as_ref() != Some(&key) {
            self.id += 1;
            self.unannounced = Some(self.id);
            self.pending
                .insert(self.id, VecDeque::with_capacity(self.config.initial_capacity));
            log::trace!("group_by: started group {}", self.id);
        }
        self.key = Some(key);
        if self.abandoned == Some(self.id) {
            return true;
        }

        let queue = self.pending.entry(self.id).or_default();
        if let Err(err) = self.config.admits(queue.len()) {
            self.overflow = Some(err);
            self.exhausted = true;
            return false;
        }
        queue.push_back(value);
        true
    }

    fn error(&self) -> Option<IterError> {
        self.overflow.clone().or_else(|| self.source.error())
    }
}

/// Iterator over `(key, group)` pairs, one per run of equal keys.
///
/// The grouper state is shared with every [`Group`] through an
/// `Rc<RefCell<_>>`: all of them must stay on one thread, and the key
/// function must not pull from the grouper or its groups.
pub struct GroupBy<S: Iter, K, F> {
    grouper: Rc<RefCell<Grouper<S, K, F>>>,
}

impl<S, K, F> Iter for GroupBy<S, K, F>
where
    S: Iter,
    K: PartialEq + Clone,
    F: FnMut(&S::Item) -> K,
{
    type Item = KeyValue<K, Group<S, K, F>>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut grouper = self.grouper.borrow_mut();
        loop {
            // A group pulled in by a group iterator is announced before the
            // scan goes any further.
            if let Some(id) = grouper.unannounced.take() {
                let key = grouper.key.clone()?;
                let group = Group {
                    grouper: Rc::clone(&self.grouper),
                    id,
                    done: false,
                };
                return Some(KeyValue::new(key, group));
            }
            if !grouper.advance_source() {
                return None;
            }
        }
    }

    fn error(&self) -> Option<IterError> {
        self.grouper.borrow().error()
    }
}

/// Values of a single group.
pub struct Group<S: Iter, K, F> {
    grouper: Rc<RefCell<Grouper<S, K, F>>>,
    id: usize,
    done: bool,
}

impl<S: Iter, K, F> std::fmt::Debug for Group<S, K, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Group")
            .field("id", &self.id)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

impl<S: Iter, K, F> Group<S, K, F> {
    /// Values of this group already scanned and waiting to be consumed.
    pub fn pending(&self) -> usize {
        self.grouper
            .borrow()
            .pending
            .get(&self.id)
            .map_or(0, VecDeque::len)
    }
}

impl<S, K, F> Iter for Group<S, K, F>
where
    S: Iter,
    K: PartialEq,
    F: FnMut(&S::Item) -> K,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut grouper = self.grouper.borrow_mut();
        loop {
            if let Some(value) = grouper.pending.get_mut(&self.id).and_then(VecDeque::pop_front) {
                return Some(value);
            }
            // While the scan is still on this group, keep it going.
            if grouper.id == self.id && grouper.advance_source() {
                continue;
            }
            grouper.pending.remove(&self.id);
            self.done = true;
            return None;
        }
    }

    fn error(&self) -> Option<IterError> {
        self.grouper.borrow().error()
    }
}

impl<S: Iter, K, F> Drop for Group<S, K, F> {
    fn drop(&mut self) {
        // Nobody can read this group any more: release its queue, and stop
        // queueing values for it if the scan is still inside it.
        if let Ok(mut grouper) = self.grouper.try_borrow_mut() {
            grouper.pending.remove(&self.id);
            if grouper.id == self.id {
                grouper.abandoned = Some(self.id);
            }
        }
    }
}

/// Group consecutive values of `source` sharing the same `key_fn` key.
pub fn group_by<S, K, F>(source: S, key_fn: F) -> GroupBy<S, K, F>
where
    S: Iter,
    K: PartialEq + Clone,
    F: FnMut(&S::Item) -> K,
{
    group_by_with_config(source, key_fn, BufferConfig::default())
}

pub fn group_by_with_config<S, K, F>(source: S, key_fn: F, config: BufferConfig) -> GroupBy<S, K, F>
where
    S: Iter,
    K: PartialEq + Clone,
    F: FnMut(&S::Item) -> K,
{
    GroupBy {
        grouper: Rc::new(RefCell::new(Grouper {
            source,
            key_fn,
            id: 0,
            key: None,
            pending: HashMap::new(),
            unannounced: None,
            abandoned: None,
            exhausted: false,
            config,
            overflow: None,
        })),
    }
}

/// Fan-out combinators: group_by and unzip
pub trait FanOutIterExt: Iter + Sized {
    fn group_by<K, F>(self, key_fn: F) -> GroupBy<Self, K, F>
    where
        K: PartialEq + Clone,
        F: FnMut(&Self::Item) -> K,
    {
        group_by(self, key_fn)
    }

    fn group_by_with_config<K, F>(self, key_fn: F, config: BufferConfig) -> GroupBy<Self, K, F>
    where
        K: PartialEq + Clone,
        F: FnMut(&Self::Item) -> K,
    {
        group_by_with_config(self, key_fn, config)
    }

    fn unzip<K, V>(self) -> (UnzipKeys<Self, K, V>, UnzipValues<Self, K, V>)
    where
        Self: Iter<Item = KeyValue<K, V>>,
    {
        unzip(self)
    }

    fn unzip_with_config<K, V>(self, config: BufferConfig) -> (UnzipKeys<Self, K, V>, UnzipValues<Self, K, V>)
    where
        Self: Iter<Item = KeyValue<K, V>>,
    {
        unzip_with_config(self, config)
    }
}

impl<T> FanOutIterExt for T where T: Iter {}
