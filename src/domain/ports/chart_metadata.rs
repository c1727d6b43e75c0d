//! ChartMetadataReader port - read a chart's own dependency declaration

use std::path::Path;

use crate::domain::entities::DependencyRecord;
use crate::error::VendorResult;

/// Reads metadata from an unpacked chart directory
pub trait ChartMetadataReader: Send + Sync {
    /// Declared dependencies; `None` when the chart declares none at all
    fn dependencies(&self, chart_dir: &Path) -> VendorResult<Option<Vec<DependencyRecord>>>;
}
