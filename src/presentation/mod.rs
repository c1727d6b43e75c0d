//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Flags and positional chart names
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Run summary and error rendering
//! - `terminal` - Unicode/CI detection
//!
//! ## Usage
//!
//! ```ignore
//! use chart_vendor::presentation::factory;
//!
//! let use_case = factory::create_vendor_use_case(&settings)?;
//! let report = use_case.execute(&manifest, &options, sink.as_ref())?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;
pub mod terminal;

pub use cli::Cli;
pub use factory::{create_drift_checker, create_event_sink, create_vendor_use_case};
