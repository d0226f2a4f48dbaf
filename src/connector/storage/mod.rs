//! Storage implementations for the translation cache.

mod bounded;
mod json_file;
mod memory;

pub use bounded::DEFAULT_CACHE_CAPACITY;
pub use json_file::*;
pub use memory::*;

pub(crate) use bounded::BoundedStore;
