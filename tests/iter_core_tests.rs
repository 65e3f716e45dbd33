use rs2_iter::prelude::*;
use rs2_iter::{count, from_slice};
use std::cell::Cell;
use std::rc::Rc;

// Iterator returning the given value and then an error.
struct ErrorIter<T> {
    value: Option<T>,
    calls: usize,
}

impl<T> ErrorIter<T> {
    fn new(value: T) -> Self {
        Self {
            value: Some(value),
            calls: 0,
        }
    }
}

impl<T> Iter for ErrorIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.calls += 1;
        if self.calls > 1 {
            return None;
        }
        self.value.take()
    }

    fn error(&self) -> Option<IterError> {
        if self.calls > 1 {
            Some(IterError::custom("bad wolf"))
        } else {
            None
        }
    }
}

// Counts how many times the wrapped iterator is pulled.
struct PullCounter<S> {
    source: S,
    pulls: Rc<Cell<usize>>,
}

impl<S: Iter> Iter for PullCounter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        self.pulls.set(self.pulls.get() + 1);
        self.source.next()
    }

    fn error(&self) -> Option<IterError> {
        self.source.error()
    }
}

fn bad_wolf() -> IterError {
    IterError::custom("bad wolf")
}

#[test]
fn test_filter() {
    let mut iter = from_slice(&["these", "are", "the", "voyages"]).filter(|v| v.len() == 3);
    let mut values = Vec::new();
    while let Some(v) = iter.next() {
        values.push(v);
    }
    assert_eq!(values, vec!["are", "the"]);
    assert_eq!(iter.error(), None);

    // Further calls produce the default value.
    let mut v = "42";
    assert!(!iter.advance(&mut v));
    assert_eq!(v, "");
}

#[test]
fn test_filter_error() {
    let iter = ErrorIter::new('r').filter(|c| c.is_lowercase());
    let err = iter.to_vec().unwrap_err();
    assert_eq!(err.partial, vec!['r']);
    assert_eq!(err.error, bad_wolf());
}

#[test]
fn test_map() {
    let mut iter = from_slice(&["these", "are", "the", "voyages"]).map(str::to_uppercase);
    let mut got = Vec::new();
    while let Some(v) = iter.next() {
        got.push(v);
    }
    assert_eq!(got, vec!["THESE", "ARE", "THE", "VOYAGES"]);

    let mut v = "42".to_string();
    assert!(!iter.advance(&mut v));
    assert_eq!(v, "");
}

#[test]
fn test_map_different_types() {
    struct Rectangle {
        x: i32,
        y: i32,
    }
    let rects = vec![
        Rectangle { x: 1, y: 2 },
        Rectangle { x: 4, y: 5 },
        Rectangle { x: 10, y: 20 },
    ];
    let areas = rs2_iter::from_iter(rects).map(|r| r.x * r.y).to_vec().unwrap();
    assert_eq!(areas, vec![2, 20, 200]);
}

#[test]
fn test_map_error() {
    let iter = count(1, 5, 1)
        .boxed()
        .chain([ErrorIter::new(5).boxed()])
        .map(|v| v * v);
    let err = iter.to_vec().unwrap_err();
    assert_eq!(err.partial, vec![1, 4, 9, 16, 25]);
    assert_eq!(err.error, bad_wolf());
}

#[test]
fn test_take_while() {
    let pulls = Rc::new(Cell::new(0));
    let mut iter = PullCounter {
        source: count(0, 20, 1),
        pulls: Rc::clone(&pulls),
    }
    .take_while(|idx, v| idx < 3 || idx > 4 || *v == 3 || *v == 7);

    let values = iter.by_ref().to_vec().unwrap();
    assert_eq!(values, vec![0, 1, 2, 3]);
    assert_eq!(pulls.get(), 5);

    // Consuming more items neither produces values nor pulls the source.
    for _ in 0..5 {
        assert_eq!(iter.try_next(), Ok(None));
    }
    assert_eq!(pulls.get(), 5);
}

#[test]
fn test_take_while_error() {
    let iter = ErrorIter::new("ok").take_while(|_, v| *v == "ok");
    let err = iter.to_vec().unwrap_err();
    assert_eq!(err.partial, vec!["ok"]);
    assert_eq!(err.error, bad_wolf());
}

#[test]
fn test_drop_while() {
    let iter = count(0, 10, 1).drop_while(|idx, v| idx < 2 || idx > 4 || *v == 2 || *v == 7);
    assert_eq!(iter.to_vec().unwrap(), vec![3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn test_drop_while_counts_only_dropped_values() {
    let mut seen = Vec::new();
    let iter = count(10, 15, 1).drop_while(|idx, v| {
        seen.push(idx);
        *v < 12
    });
    assert_eq!(iter.to_vec().unwrap(), vec![12, 13, 14]);
    assert_eq!(seen, vec![0, 1, 2]);
}

#[test]
fn test_drop_while_error() {
    let iter = ErrorIter::new("ok").drop_while(|_, v| *v == "ok");
    let err = iter.to_vec().unwrap_err();
    assert!(err.partial.is_empty());
    assert_eq!(err.error, bad_wolf());
}

#[test]
fn test_limit() {
    let iter = count(0, 10, 1).limit(3);
    assert_eq!(iter.to_vec().unwrap(), vec![0, 1, 2]);
}

#[test]
fn test_limit_does_not_pull_past_limit() {
    let pulls = Rc::new(Cell::new(0));
    let mut iter = PullCounter {
        source: count(0, 10, 1),
        pulls: Rc::clone(&pulls),
    }
    .limit(2);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
    assert_eq!(pulls.get(), 2);
}

#[test]
fn test_inspect() {
    let mut seen = Vec::new();
    let mut iter = count(0, 10, 2).inspect(|v| seen.push(*v));
    assert_eq!(iter.try_next(), Ok(Some(0)));
    let rest = iter.to_vec().unwrap();
    assert_eq!(rest, vec![2, 4, 6, 8]);
    assert_eq!(seen, vec![0, 2, 4, 6, 8]);
}

#[test]
fn test_enumerate() {
    let pairs = from_slice(&["a", "b", "c"]).enumerate().to_vec().unwrap();
    assert_eq!(
        pairs,
        vec![
            KeyValue::new(0, "a"),
            KeyValue::new(1, "b"),
            KeyValue::new(2, "c"),
        ]
    );
}

#[test]
fn test_try_next() {
    let mut iter = ErrorIter::new("ok");
    assert_eq!(iter.try_next(), Ok(Some("ok")));
    assert_eq!(iter.try_next(), Err(bad_wolf()));
    // The error is stable.
    assert_eq!(iter.try_next(), Err(bad_wolf()));
    assert_eq!(iter.error(), Some(bad_wolf()));
}

#[test]
fn test_advance_resets_output_on_exhaustion() {
    let mut iter = ErrorIter::new(7);
    let mut v = 0;
    assert!(iter.advance(&mut v));
    assert_eq!(v, 7);
    assert!(!iter.advance(&mut v));
    assert_eq!(v, 0);
    assert_eq!(iter.error(), Some(bad_wolf()));
}

#[test]
fn test_exhaustion_is_idempotent() {
    let mut iter = count(0, 6, 1)
        .filter(|v| v % 2 == 0)
        .map(|v| v * 10)
        .take_while(|_, v| *v < 100)
        .drop_while(|idx, _| idx < 1);
    assert_eq!(iter.by_ref().to_vec().unwrap(), vec![20, 40]);
    for _ in 0..3 {
        assert_eq!(iter.next(), None);
        assert_eq!(iter.error(), None);
    }
}

#[test]
fn test_boxed_pipeline() {
    let iter: BoxIter<'_, i32> = count(0, 4, 1).map(|v| v + 1).boxed();
    assert_eq!(iter.sum().unwrap(), 10);
}
