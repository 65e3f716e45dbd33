//! Sequencing combinators: chain and concat
use super::core::Iter;
use crate::error::IterError;
use std::collections::VecDeque;

/// Values from a sequence of sources, one after the other.
///
/// A source that stops with an error ends the chain: the remaining sources
/// are never pulled. [`Iter::error`] reports the error of the active source.
pub struct Chain<S> {
    pub(crate) current: Option<S>,
    pub(crate) remaining: VecDeque<S>,
}

impl<S: Iter> Iter for Chain<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let current = self.current.as_mut()?;
            if let Some(value) = current.next() {
                return Some(value);
            }
            if current.error().is_some() {
                return None;
            }
            let next = self.remaining.pop_front()?;
            log::debug!(
                "chain: source exhausted, switching to next ({} left)",
                self.remaining.len()
            );
            self.current = Some(next);
        }
    }

    fn error(&self) -> Option<IterError> {
        self.current.as_ref().and_then(|current| current.error())
    }
}

/// Chain `base` with `others`.
pub fn chain<S, I>(base: S, others: I) -> Chain<S>
where
    S: Iter,
    I: IntoIterator<Item = S>,
{
    Chain {
        current: Some(base),
        remaining: others.into_iter().collect(),
    }
}

/// Concatenate any number of sources, including none.
pub fn concat<S, I>(sources: I) -> Chain<S>
where
    S: Iter,
    I: IntoIterator<Item = S>,
{
    let mut remaining: VecDeque<S> = sources.into_iter().collect();
    Chain {
        current: remaining.pop_front(),
        remaining,
    }
}
