//! Configuration module
//!
//! - `types` - runtime `Settings`
//! - `loader` - defaults + `CHART_VENDOR_*` environment overrides
//! - `manifest` - the `.charts.yml` parser

mod loader;
pub mod manifest;
mod types;

pub use loader::{
    load_settings, parse_timeout, with_env_overrides, ENV_TIMEOUT, ENV_USER_AGENT,
    ENV_VERIFY_DIGEST,
};
pub use manifest::{
    load_manifest, parse_manifest, ManifestWarning, ParsedManifest, DEFAULT_MANIFEST_FILE,
};
pub use types::{HttpSettings, Settings, DEFAULT_LOCK_FILE};
