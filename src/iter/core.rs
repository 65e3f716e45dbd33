//! Core iterator protocol and the base combinators built directly on it.

use crate::error::{IterError, IterResult};
use crate::iter::chain::Chain;
use crate::iter::keyvalue::{KeyValue, Zip};
use crate::iter::repeat::Repeat;
use crate::iter_configuration::BufferConfig;
use std::collections::VecDeque;

/// Pull-based, single-pass producer of a typed sequence.
///
/// The protocol has two halves: [`Iter::next`] advances and fetches, and
/// [`Iter::error`] reports the first failure. Every implementation keeps
/// these promises:
///
/// - once `next` returns `None` it keeps returning `None`, with no further
///   side effects;
/// - producing a value and failing are mutually exclusive: a step that hits
///   an error returns `None`;
/// - after exhaustion, `error` returns the same error on every call.
///
/// ```ignore
/// let mut words = from_slice(&["these", "are", "the", "voyages"]);
/// while let Some(word) = words.next() {
///     // Do something with word.
/// }
/// if let Some(err) = words.error() {
///     // Handle error.
/// }
/// ```
pub trait Iter {
    type Item;

    /// Produce the next value, or `None` when the iterator is done or failed.
    fn next(&mut self) -> Option<Self::Item>;

    /// The first error that occurred while iterating, if any.
    fn error(&self) -> Option<IterError>;

    /// Advance and store the next value in `out`. On exhaustion `out` is
    /// reset to the default value and `false` is returned.
    fn advance(&mut self, out: &mut Self::Item) -> bool
    where
        Self::Item: Default,
    {
        match self.next() {
            Some(value) => {
                *out = value;
                true
            }
            None => {
                *out = <Self::Item as Default>::default();
                false
            }
        }
    }

    /// Single step: `Ok(Some(_))` for a value, `Ok(None)` when done and
    /// `Err(_)` when the iterator stopped because of an error.
    fn try_next(&mut self) -> IterResult<Option<Self::Item>> {
        match self.next() {
            Some(value) => Ok(Some(value)),
            None => match self.error() {
                Some(err) => Err(err),
                None => Ok(None),
            },
        }
    }
}

impl<I: Iter + ?Sized> Iter for &mut I {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }

    fn error(&self) -> Option<IterError> {
        (**self).error()
    }
}

impl<I: Iter + ?Sized> Iter for Box<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }

    fn error(&self) -> Option<IterError> {
        (**self).error()
    }
}

/// Type-erased iterator, used to chain sources of different concrete types.
pub type BoxIter<'a, T> = Box<dyn Iter<Item = T> + 'a>;

/// Extension trait providing iterator combinators
pub trait IterExt: Iter + Sized {
    /// Borrow the iterator so a combinator can consume part of it.
    fn by_ref(&mut self) -> &mut Self {
        self
    }

    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        Filter {
            source: self,
            predicate,
        }
    }

    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: FnMut(Self::Item) -> U,
    {
        Map { source: self, f }
    }

    /// Yield values while `predicate(index, &value)` holds. The first value
    /// failing the predicate is discarded and the source is never pulled
    /// again.
    fn take_while<F>(self, predicate: F) -> TakeWhile<Self, F>
    where
        F: FnMut(usize, &Self::Item) -> bool,
    {
        TakeWhile {
            source: self,
            predicate,
            idx: 0,
            stopped: false,
        }
    }

    /// Discard leading values while `predicate(index, &value)` holds, then
    /// yield everything else.
    fn drop_while<F>(self, predicate: F) -> DropWhile<Self, F>
    where
        F: FnMut(usize, &Self::Item) -> bool,
    {
        DropWhile {
            source: self,
            predicate,
            idx: 0,
            dropping: true,
        }
    }

    /// Yield at most `limit` values.
    fn limit(self, limit: usize) -> Limit<Self> {
        Limit {
            source: self,
            limit,
            taken: 0,
            stopped: false,
        }
    }

    /// Call `f` on every value as it passes through.
    fn inspect<F>(self, f: F) -> Inspect<Self, F>
    where
        F: FnMut(&Self::Item),
    {
        Inspect { source: self, f }
    }

    fn enumerate(self) -> Enumerate<Self> {
        Enumerate {
            source: self,
            idx: 0,
        }
    }

    /// Yield values from `self`, then from each of `others` in order. A
    /// source ending with an error stops the whole chain.
    fn chain<I>(self, others: I) -> Chain<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        Chain {
            current: Some(self),
            remaining: others.into_iter().collect::<VecDeque<_>>(),
        }
    }

    /// Repeat the values of a finite source endlessly. Bound the result
    /// with `limit` or `take_while` before draining it.
    fn repeat(self) -> Repeat<Self>
    where
        Self::Item: Clone,
    {
        self.repeat_with_config(BufferConfig::default())
    }

    fn repeat_with_config(self, config: BufferConfig) -> Repeat<Self>
    where
        Self::Item: Clone,
    {
        Repeat::new(self, config)
    }

    /// Pair values with the values of `other`; the shorter side decides
    /// when zipping stops.
    fn zip<V>(self, other: V) -> Zip<Self, V>
    where
        V: Iter,
    {
        Zip::new(self, other)
    }

    fn boxed<'a>(self) -> BoxIter<'a, Self::Item>
    where
        Self: 'a,
    {
        Box::new(self)
    }
}

impl<I: Iter + Sized> IterExt for I {}

// Combinator structs

pub struct Filter<S, F> {
    source: S,
    predicate: F,
}

impl<S, F> Iter for Filter<S, F>
where
    S: Iter,
    F: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(value) = self.source.next() {
            if (self.predicate)(&value) {
                return Some(value);
            }
        }
        None
    }

    fn error(&self) -> Option<IterError> {
        self.source.error()
    }
}

pub struct Map<S, F> {
    source: S,
    f: F,
}

impl<S, U, F> Iter for Map<S, F>
where
    S: Iter,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<Self::Item> {
        self.source.next().map(&mut self.f)
    }

    fn error(&self) -> Option<IterError> {
        self.source.error()
    }
}

pub struct TakeWhile<S, F> {
    source: S,
    predicate: F,
    idx: usize,
    stopped: bool,
}

impl<S, F> Iter for TakeWhile<S, F>
where
    S: Iter,
    F: FnMut(usize, &S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stopped {
            return None;
        }
        match self.source.next() {
            Some(value) if (self.predicate)(self.idx, &value) => {
                self.idx += 1;
                Some(value)
            }
            _ => {
                self.stopped = true;
                None
            }
        }
    }

    fn error(&self) -> Option<IterError> {
        self.source.error()
    }
}

pub struct DropWhile<S, F> {
    source: S,
    predicate: F,
    idx: usize,
    dropping: bool,
}

impl<S, F> Iter for DropWhile<S, F>
where
    S: Iter,
    F: FnMut(usize, &S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let value = self.source.next()?;
            if self.dropping {
                if (self.predicate)(self.idx, &value) {
                    self.idx += 1;
                    continue;
                }
                self.dropping = false;
            }
            return Some(value);
        }
    }

    fn error(&self) -> Option<IterError> {
        self.source.error()
    }
}

/// Equivalent to `take_while(|idx, _| idx < limit)`, except the source is
/// not pulled once the limit is reached.
pub struct Limit<S> {
    source: S,
    limit: usize,
    taken: usize,
    stopped: bool,
}

impl<S: Iter> Iter for Limit<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stopped || self.taken >= self.limit {
            self.stopped = true;
            return None;
        }
        match self.source.next() {
            Some(value) => {
                self.taken += 1;
                Some(value)
            }
            None => {
                self.stopped = true;
                None
            }
        }
    }

    fn error(&self) -> Option<IterError> {
        self.source.error()
    }
}

pub struct Inspect<S, F> {
    source: S,
    f: F,
}

impl<S, F> Iter for Inspect<S, F>
where
    S: Iter,
    F: FnMut(&S::Item),
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.source.next()?;
        (self.f)(&value);
        Some(value)
    }

    fn error(&self) -> Option<IterError> {
        self.source.error()
    }
}

pub struct Enumerate<S> {
    source: S,
    idx: usize,
}

impl<S: Iter> Iter for Enumerate<S> {
    type Item = KeyValue<usize, S::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.source.next()?;
        let kv = KeyValue::new(self.idx, value);
        self.idx += 1;
        Some(kv)
    }

    fn error(&self) -> Option<IterError> {
        self.source.error()
    }
}
