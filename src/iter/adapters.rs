//! Bridges to the standard library iterator and to `futures_core::Stream`
use super::core::Iter;
use crate::error::IterError;
use futures_core::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};

/// An [`Iter`] seen as a `std::iter::Iterator`.
///
/// Errors cannot travel through `Iterator::next`; check [`IntoStd::error`]
/// once the loop is over.
pub struct IntoStd<S> {
    source: S,
}

impl<S: Iter> IntoStd<S> {
    pub fn error(&self) -> Option<IterError> {
        self.source.error()
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: Iter> Iterator for IntoStd<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        self.source.next()
    }
}

impl<S: Iter> std::iter::FusedIterator for IntoStd<S> {}

/// An [`Iter`] seen as a stream of results. The stream is always ready;
/// when the source fails, the error is the last item.
pub struct IntoStream<S> {
    source: S,
    finished: bool,
}

impl<S> Stream for IntoStream<S>
where
    S: Iter + Unpin,
{
    type Item = Result<S::Item, IterError>;

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.finished {
            return Poll::Ready(None);
        }
        match this.source.next() {
            Some(value) => Poll::Ready(Some(Ok(value))),
            None => {
                this.finished = true;
                Poll::Ready(this.source.error().map(Err))
            }
        }
    }
}

pub trait AdapterIterExt: Iter + Sized {
    fn into_std(self) -> IntoStd<Self> {
        IntoStd { source: self }
    }

    fn into_stream(self) -> IntoStream<Self> {
        IntoStream {
            source: self,
            finished: false,
        }
    }
}

impl<T> AdapterIterExt for T where T: Iter {}
