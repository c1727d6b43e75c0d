//! Lock record entity - digest-stamped snapshot of a chart's dependencies
//!
//! The digest covers the canonical JSON of `[dependencies, dependencies]`,
//! the "requested vs. resolved" pair of the Helm `Chart.lock` convention
//! collapsed onto one list, so the output stays bit-compatible with locks
//! produced by `helm dependency update`.
//!
//! I/O is handled by `LockRecordStore`.

use std::io;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::ser::Formatter;

use crate::domain::value_objects::ContentDigest;

/// Seconds from the Unix epoch back to 0001-01-01T00:00:00Z
const ZERO_TIME_SECS: i64 = -62_135_596_800;

fn is_false(b: &bool) -> bool {
    !*b
}

/// One entry of a chart's own dependency declaration (`Chart.yaml`)
///
/// Field order is the serialization order and is part of the digest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(rename = "repository", default)]
    pub repo_url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub condition: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub enabled: bool,
    #[serde(
        rename = "import-values",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub import_values: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub alias: String,
}

impl DependencyRecord {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        repo_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            repo_url: repo_url.into(),
            condition: String::new(),
            tags: Vec::new(),
            enabled: false,
            import_values: Vec::new(),
            alias: String::new(),
        }
    }
}

/// Lock record persisted next to every vendored chart
#[derive(Debug, Clone, PartialEq)]
pub struct LockRecord {
    generated: DateTime<Utc>,
    dependencies: Vec<DependencyRecord>,
    digest: ContentDigest,
}

impl LockRecord {
    /// Build a record; `None` is treated as an empty dependency list
    pub fn new(dependencies: Option<Vec<DependencyRecord>>) -> Result<Self, serde_json::Error> {
        let dependencies = dependencies.unwrap_or_default();
        let digest = Self::compute_digest(&dependencies)?;
        Ok(Self {
            generated: Self::zero_time(),
            dependencies,
            digest,
        })
    }

    /// Digest over the canonical JSON of `[deps, deps]`
    pub fn compute_digest(
        dependencies: &[DependencyRecord],
    ) -> Result<ContentDigest, serde_json::Error> {
        let data = canonical_json(&[dependencies, dependencies])?;
        Ok(ContentDigest::from_bytes(&data))
    }

    /// Fixed generation time, which keeps lock files reproducible
    pub fn zero_time() -> DateTime<Utc> {
        DateTime::from_timestamp(ZERO_TIME_SECS, 0).unwrap_or_default()
    }

    /// RFC 3339 rendering of `generated`, e.g. `0001-01-01T00:00:00Z`
    pub fn generated_rfc3339(&self) -> String {
        self.generated.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    pub fn dependencies(&self) -> &[DependencyRecord] {
        &self.dependencies
    }

    pub fn digest(&self) -> &ContentDigest {
        &self.digest
    }
}

/// Compact JSON escaped the way Go's `json.Marshal` escapes strings
///
/// `<`, `>`, `&`, U+2028 and U+2029 are written as `\u` escapes.
fn canonical_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut out = Vec::with_capacity(128);
    let mut ser = serde_json::Serializer::with_formatter(&mut out, GoEscapeFormatter);
    value.serialize(&mut ser)?;
    Ok(out)
}

struct GoEscapeFormatter;

impl Formatter for GoEscapeFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            let escape = match c {
                '<' => "\\u003c",
                '>' => "\\u003e",
                '&' => "\\u0026",
                '\u{2028}' => "\\u2028",
                '\u{2029}' => "\\u2029",
                _ => continue,
            };
            writer.write_all(fragment[start..i].as_bytes())?;
            writer.write_all(escape.as_bytes())?;
            start = i + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}
