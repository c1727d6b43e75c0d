//! File System Implementations

mod local;

pub use local::{atomic_write, remove_any};
