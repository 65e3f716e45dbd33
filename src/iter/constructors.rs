//! Iterator constructors: empty, once, from_slice, from_iter, from_fn, count, from_channel
use super::core::Iter;
use crate::error::{IterError, IterResult};
use num_traits::{CheckedAdd, CheckedRem};
use std::fmt::Debug;
use std::iter::{Cloned, Fuse};
use std::marker::PhantomData;
use std::ops::Add;
use std::slice;

// ================================
// Basic Constructors
// ================================

pub struct Empty<T> {
    _phantom: PhantomData<T>,
}

impl<T> Iter for Empty<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        None
    }

    fn error(&self) -> Option<IterError> {
        None
    }
}

pub struct Once<T> {
    value: Option<T>,
}

impl<T> Iter for Once<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.value.take()
    }

    fn error(&self) -> Option<IterError> {
        None
    }
}

/// Values of a standard iterator. Never errors.
pub struct FromIter<I> {
    iter: Fuse<I>,
}

impl<I: Iterator> Iter for FromIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.iter.next()
    }

    fn error(&self) -> Option<IterError> {
        None
    }
}

/// Values cloned out of a slice.
pub type SliceIter<'a, T> = FromIter<Cloned<slice::Iter<'a, T>>>;

/// Values produced by a closure until it returns `None`.
pub struct FromFn<F> {
    f: F,
    done: bool,
}

impl<T, F> Iter for FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.done {
            return None;
        }
        let value = (self.f)();
        self.done = value.is_none();
        value
    }

    fn error(&self) -> Option<IterError> {
        None
    }
}

// ================================
// Count
// ================================

/// Numbers from `start` to `stop` (excluded) moving by `step`.
///
/// The iteration stops when the current number is exactly `stop`. A step
/// whose sign does not lead from `start` to `stop`, or which overshoots it,
/// never terminates: bound such counts with `limit`, or build them with
/// [`Count::checked`].
///
/// A number is only computed when it is pulled. Pulling an unbounded count
/// past the range of `T` overflows, which panics in debug builds.
#[derive(Debug, Clone)]
pub struct Count<T> {
    current: T,
    stop: T,
    step: T,
    started: bool,
    done: bool,
}

impl<T> Count<T>
where
    T: Copy + PartialEq + PartialOrd + Default + Debug + CheckedAdd + CheckedRem,
{
    /// Like [`count`], but rejects arguments which would never reach `stop`.
    pub fn checked(start: T, stop: T, step: T) -> IterResult<Self> {
        if start != stop {
            let zero = T::default();
            if step == zero {
                return Err(IterError::InvalidArgument(format!(
                    "count from {:?} to {:?} with a zero step never terminates",
                    start, stop
                )));
            }
            if (start < stop) != (step > zero) {
                return Err(IterError::InvalidArgument(format!(
                    "step {:?} moves away from {:?} when counting from {:?}",
                    step, stop, start
                )));
            }
            if !lands_on(start, stop, step) {
                return Err(IterError::InvalidArgument(format!(
                    "step {:?} never lands on {:?} when counting from {:?}",
                    step, stop, start
                )));
            }
        }
        Ok(count(start, stop, step))
    }
}

// Whether `stop - start` is a multiple of `step`, for a step pointing from
// `start` to `stop`. The distance itself may not fit in `T`, so compare the
// remainders instead: they differ by 0 or by exactly one `step`.
fn lands_on<T>(start: T, stop: T, step: T) -> bool
where
    T: Copy + PartialEq + Default + CheckedAdd + CheckedRem,
{
    // Only `MIN % -1` fails here, and -1 divides everything.
    let rem = |v: T| v.checked_rem(&step).unwrap_or_default();
    let (from, to) = (rem(start), rem(stop));
    from == to || from.checked_add(&step) == Some(to)
}

impl<T> Iter for Count<T>
where
    T: Copy + PartialEq + Add<Output = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.done {
            return None;
        }
        if self.started {
            self.current = self.current + self.step;
        }
        self.started = true;
        if self.current == self.stop {
            self.done = true;
            return None;
        }
        Some(self.current)
    }

    fn error(&self) -> Option<IterError> {
        None
    }
}

// ================================
// Channels
// ================================

/// A queue whose receiving end can be waited on synchronously.
pub trait BlockingReceiver {
    type Item;

    /// Block until a value is available; `None` once the channel is closed.
    fn recv_blocking(&mut self) -> Option<Self::Item>;
}

impl<T> BlockingReceiver for std::sync::mpsc::Receiver<T> {
    type Item = T;

    fn recv_blocking(&mut self) -> Option<T> {
        self.recv().ok()
    }
}

/// Must not be used from within an asynchronous execution context.
impl<T> BlockingReceiver for tokio::sync::mpsc::Receiver<T> {
    type Item = T;

    fn recv_blocking(&mut self) -> Option<T> {
        self.blocking_recv()
    }
}

impl<T> BlockingReceiver for tokio::sync::mpsc::UnboundedReceiver<T> {
    type Item = T;

    fn recv_blocking(&mut self) -> Option<T> {
        self.blocking_recv()
    }
}

/// Values received from a channel, until it is closed. Never errors.
pub struct FromChannel<R> {
    rx: R,
    closed: bool,
}

impl<R: BlockingReceiver> Iter for FromChannel<R> {
    type Item = R::Item;

    fn next(&mut self) -> Option<R::Item> {
        if self.closed {
            return None;
        }
        let value = self.rx.recv_blocking();
        self.closed = value.is_none();
        value
    }

    fn error(&self) -> Option<IterError> {
        None
    }
}

// ================================
// Constructor Functions
// ================================

/// Create an empty iterator
pub fn empty<T>() -> Empty<T> {
    Empty {
        _phantom: PhantomData,
    }
}

/// Create an iterator producing a single value
pub fn once<T>(value: T) -> Once<T> {
    Once { value: Some(value) }
}

/// Create an iterator over the values of a slice
pub fn from_slice<T: Clone>(values: &[T]) -> SliceIter<'_, T> {
    from_iter(values.iter().cloned())
}

/// Create an iterator from anything iterable
pub fn from_iter<I>(iter: I) -> FromIter<I::IntoIter>
where
    I: IntoIterator,
{
    FromIter {
        iter: iter.into_iter().fuse(),
    }
}

/// Create an iterator calling `f` for each value
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    FromFn { f, done: false }
}

/// Count from `start` to `stop` with the given `step`
pub fn count<T>(start: T, stop: T, step: T) -> Count<T>
where
    T: Copy + PartialEq + Add<Output = T>,
{
    Count {
        current: start,
        stop,
        step,
        started: false,
        done: false,
    }
}

/// Create an iterator receiving values from a channel
pub fn from_channel<R: BlockingReceiver>(rx: R) -> FromChannel<R> {
    FromChannel { rx, closed: false }
}
