//! Reader-backed iterators: lines and bytes
use super::core::Iter;
use crate::error::IterError;
use std::io::{self, BufRead, BufReader, Read};

/// Lines read from a buffered reader, without their `\n` or `\r\n`
/// terminator. Read errors other than end-of-stream stop the iteration and
/// are reported by [`Iter::error`].
pub struct Lines<R> {
    reader: R,
    buf: String,
    done: bool,
    error: Option<IterError>,
}

impl<R: BufRead> Iter for Lines<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        self.buf.clear();
        match self.reader.read_line(&mut self.buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                if self.buf.ends_with('\n') {
                    self.buf.pop();
                    if self.buf.ends_with('\r') {
                        self.buf.pop();
                    }
                }
                Some(std::mem::take(&mut self.buf))
            }
            Err(err) => {
                self.done = true;
                self.error = Some(err.into());
                None
            }
        }
    }

    fn error(&self) -> Option<IterError> {
        self.error.clone()
    }
}

/// Bytes read from a reader.
pub struct Bytes<R> {
    bytes: io::Bytes<BufReader<R>>,
    done: bool,
    error: Option<IterError>,
}

impl<R: Read> Iter for Bytes<R> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.done {
            return None;
        }
        match self.bytes.next() {
            Some(Ok(byte)) => Some(byte),
            Some(Err(err)) => {
                self.done = true;
                self.error = Some(err.into());
                None
            }
            None => {
                self.done = true;
                None
            }
        }
    }

    fn error(&self) -> Option<IterError> {
        self.error.clone()
    }
}

/// Create an iterator over the lines of `reader`
pub fn lines<R: BufRead>(reader: R) -> Lines<R> {
    Lines {
        reader,
        buf: String::new(),
        done: false,
        error: None,
    }
}

/// Create an iterator over the bytes of `reader`
pub fn bytes<R: Read>(reader: R) -> Bytes<R> {
    Bytes {
        bytes: BufReader::new(reader).bytes(),
        done: false,
        error: None,
    }
}
