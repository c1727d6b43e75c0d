//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{ArchiveFetcher, DriftChecker, LockWriter, VendorUseCase};
use crate::config::Settings;
use crate::domain::ports::VendorEventSink;
use crate::error::VendorResult;
use crate::infrastructure::{
    ChartYamlReader, ConsoleEventSink, GitWorkingTree, IndexChartRepository, JsonEventSink,
    TarGzExtractor, YamlLockStore,
};

/// Type alias for the concrete VendorUseCase with all dependencies
pub type ConcreteVendorUseCase =
    VendorUseCase<IndexChartRepository, TarGzExtractor, ChartYamlReader, YamlLockStore>;

/// Type alias for the git-backed drift checker
pub type ConcreteDriftChecker = DriftChecker<GitWorkingTree>;

/// Create a vendor use case backed by the index repository client
pub fn create_vendor_use_case(settings: &Settings) -> VendorResult<ConcreteVendorUseCase> {
    let repository = IndexChartRepository::new(&settings.http)?;
    let fetcher = ArchiveFetcher::new(repository, TarGzExtractor::new())
        .verify_digest(settings.verify_digest);

    Ok(VendorUseCase::new(
        fetcher,
        ChartYamlReader::new(),
        LockWriter::new(YamlLockStore::new()),
    ))
}

pub fn create_drift_checker() -> ConcreteDriftChecker {
    DriftChecker::new(GitWorkingTree::new())
}

/// NDJSON on stdout in `--json` mode, progress lines otherwise
pub fn create_event_sink(json: bool, unicode: bool, verbose: u8) -> Box<dyn VendorEventSink> {
    if json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stdout(unicode, verbose))
    }
}
