use futures::executor::block_on;
use futures::StreamExt;
use rs2_iter::prelude::*;
use rs2_iter::{count, from_slice};

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
        (self.calls > 1).then(|| IterError::custom("bad wolf"))
    }
}

#[test]
fn test_into_std() {
    let doubled: Vec<i32> = count(0, 4, 1).into_std().map(|v| v * 2).collect();
    assert_eq!(doubled, vec![0, 2, 4, 6]);
}

#[test]
fn test_into_std_error_after_loop() {
    let mut values = ErrorIter::new("first").into_std();
    let collected: Vec<&str> = values.by_ref().collect();
    assert_eq!(collected, vec!["first"]);
    assert_eq!(values.error(), Some(IterError::custom("bad wolf")));
    assert_eq!(values.next(), None);
}

#[test]
fn test_into_std_into_inner() {
    let mut std_iter = from_slice(&[1, 2, 3]).into_std();
    assert_eq!(std_iter.next(), Some(1));
    let rest = std_iter.into_inner().to_vec().unwrap();
    assert_eq!(rest, vec![2, 3]);
}

#[test]
fn test_into_stream() {
    let items: Vec<IterResult<&str>> = block_on(from_slice(&["a", "b"]).into_stream().collect());
    assert_eq!(items, vec![Ok("a"), Ok("b")]);
}

#[test]
fn test_into_stream_error_is_last_item() {
    let stream = count(0, 2, 1)
        .boxed()
        .chain([ErrorIter::new(2).boxed()])
        .into_stream();
    let items: Vec<IterResult<i32>> = block_on(stream.collect());
    assert_eq!(
        items,
        vec![Ok(0), Ok(1), Ok(2), Err(IterError::custom("bad wolf"))]
    );
}

#[test]
fn test_into_stream_is_fused() {
    block_on(async {
        let mut stream = ErrorIter::new(1).into_stream();
        assert_eq!(stream.next().await, Some(Ok(1)));
        assert_eq!(stream.next().await, Some(Err(IterError::custom("bad wolf"))));
        assert_eq!(stream.next().await, None);
        assert_eq!(stream.next().await, None);
    });
}
