//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod chart_dir;
mod file_state;
mod hash;

pub use chart_dir::{ChartDir, ChartDirError};
pub use file_state::FileState;
pub use hash::ContentDigest;
