//! Repeat: buffer a finite source and replay it forever
use super::core::Iter;
use crate::error::IterError;
use crate::iter_configuration::BufferConfig;

/// Endless replay of a finite source.
///
/// Values are passed through and recorded while the source produces them.
/// Once the source is exhausted without error, the recorded values are
/// replayed in order, wrapping around forever. An empty or failing source
/// simply ends the iteration.
pub struct Repeat<S: Iter> {
    source: S,
    buffer: Vec<S::Item>,
    cursor: usize,
    replaying: bool,
    config: BufferConfig,
    overflow: Option<IterError>,
}

impl<S> Repeat<S>
where
    S: Iter,
    S::Item: Clone,
{
    pub(crate) fn new(source: S, config: BufferConfig) -> Self {
        Self {
            source,
            buffer: Vec::with_capacity(config.initial_capacity),
            cursor: 0,
            replaying: false,
            config,
            overflow: None,
        }
    }

    /// Number of values recorded so far.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }
}

impl<S> Iter for Repeat<S>
where
    S: Iter,
    S::Item: Clone,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.overflow.is_some() {
            return None;
        }
        if !self.replaying {
            if let Some(value) = self.source.next() {
                if let Err(err) = self.config.admits(self.buffer.len()) {
                    self.overflow = Some(err);
                    return None;
                }
                self.buffer.push(value.clone());
                return Some(value);
            }
            if self.buffer.is_empty() || self.source.error().is_some() {
                return None;
            }
            log::debug!("repeat: source exhausted, replaying {} values", self.buffer.len());
            self.replaying = true;
            self.cursor = 0;
        }
        let value = self.buffer[self.cursor].clone();
        self.cursor = (self.cursor + 1) % self.buffer.len();
        Some(value)
    }

    fn error(&self) -> Option<IterError> {
        self.overflow.clone().or_else(|| self.source.error())
    }
}
