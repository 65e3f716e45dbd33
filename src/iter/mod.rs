//! Lazy, pull-based iterators and their combinators
//!
//! Everything here implements one protocol, [`Iter`]: pull the next value,
//! or learn that the iteration is over and ask for the error that ended it,
//! if any. Combinators wrap sources and are themselves sources, so pipelines
//! are built by nesting. Nothing is pushed: values are only produced when a
//! terminal or a downstream combinator asks for them.
//!
//! `group_by` and `unzip` fan one source out to several iterators. They share
//! their state through `Rc<RefCell<_>>` and are therefore `!Send`: the whole
//! family must be driven from a single thread.

pub mod core;
pub mod constructors;
pub mod chain;
pub mod repeat;
pub mod keyvalue;
pub mod group;
pub mod io;
pub mod terminal;
pub mod adapters;

// Re-export core types
pub use self::core::{
    BoxIter, DropWhile, Enumerate, Filter, Inspect, Iter, IterExt, Limit, Map, TakeWhile,
};

// Re-export constructors
pub use constructors::{
    count, empty, from_channel, from_fn, from_iter, from_slice, once, BlockingReceiver, Count,
    Empty, FromChannel, FromFn, FromIter, Once, SliceIter,
};

// Re-export sequencing and buffering combinators
pub use chain::{chain, concat, Chain};
pub use repeat::Repeat;

// Re-export key/value and fan-out combinators
pub use group::{group_by, group_by_with_config, FanOutIterExt, Group, GroupBy};
pub use keyvalue::{unzip, unzip_with_config, zip, KeyValue, UnzipKeys, UnzipValues, Zip};

// Re-export reader-backed iterators
pub use io::{bytes, lines, Bytes, Lines};

// Re-export terminals and adapters
pub use adapters::{AdapterIterExt, IntoStd, IntoStream};
pub use terminal::{Summable, TerminalIterExt};
