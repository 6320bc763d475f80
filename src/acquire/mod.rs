//! Getting raw text onto disk and into memory: HTTP transport, the on-disk
//! cache, and the decoding/extraction steps between them.

pub mod cache;
pub mod fetch;
pub mod source;

pub use cache::DataCache;
pub use fetch::{Fetch, HttpFetcher};
pub use source::{acquire_corpus, acquire_word_list};
