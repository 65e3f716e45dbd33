pub mod error;
pub mod iter;
pub mod iter_configuration;

pub use error::{IterError, IterResult, Partial};
pub use iter_configuration::BufferConfig;

// Re-export the protocol, constructors and extension traits at the crate root
pub use iter::{
    bytes, chain, concat, count, empty, from_channel, from_fn, from_iter, from_slice, group_by,
    group_by_with_config, lines, once, unzip, unzip_with_config, zip, AdapterIterExt, BoxIter, Count,
    FanOutIterExt, Iter, IterExt, KeyValue, Summable, TerminalIterExt,
};

/// Everything needed to build and drain pipelines.
pub mod prelude {
    pub use crate::error::{IterError, IterResult, Partial};
    pub use crate::iter::{
        AdapterIterExt, BoxIter, FanOutIterExt, Iter, IterExt, KeyValue, TerminalIterExt,
    };
    pub use crate::iter_configuration::BufferConfig;
}
