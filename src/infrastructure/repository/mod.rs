//! Chart repository implementations

mod client;
mod constraint;
mod index;

pub use client::IndexChartRepository;
pub use index::{index_url, resolve_reference, IndexEntry, IndexFile, INDEX_FILE};
