//! Helm-style version constraints on top of `semver`
//!
//! Accepted forms: `1.2.3`, `v1.2.3`, `^1.2`, `~1.2.3`, `1.x`, `>=1 <2`,
//! `>= 1, < 2`, `1.2 - 1.4` and `||` alternatives. A bare version is an
//! exact match (`=1.2.3`), not a caret requirement as in Cargo.

use semver::{Version, VersionReq};

const OPERATOR_CHARS: &str = "=<>~^";

/// Parsed constraint; matches when any alternative matches
#[derive(Debug, Clone)]
pub struct VersionConstraint {
    alternatives: Vec<VersionReq>,
}

impl VersionConstraint {
    /// `*`, which matches every stable release
    pub fn any() -> Self {
        Self {
            alternatives: vec![VersionReq::STAR],
        }
    }

    pub fn parse(raw: &str) -> Result<Self, semver::Error> {
        let alternatives = raw
            .split("||")
            .map(parse_alternative)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { alternatives })
    }

    pub fn matches(&self, version: &Version) -> bool {
        self.alternatives.iter().any(|req| req.matches(version))
    }
}

/// Parse an index version leniently: `v` prefix and missing minor/patch allowed
pub fn parse_version(raw: &str) -> Option<Version> {
    let raw = strip_v(raw.trim());
    if let Ok(version) = Version::parse(raw) {
        return Some(version);
    }

    let (core, suffix) = raw.split_at(raw.find(['-', '+']).unwrap_or(raw.len()));
    let padded = match core.split('.').count() {
        1 => format!("{core}.0.0{suffix}"),
        2 => format!("{core}.0{suffix}"),
        _ => return None,
    };
    Version::parse(&padded).ok()
}

fn parse_alternative(raw: &str) -> Result<VersionReq, semver::Error> {
    let tokens = tokenize(raw);
    let mut comparators = Vec::with_capacity(tokens.len());

    let mut i = 0;
    while i < tokens.len() {
        if tokens.get(i + 1).map(String::as_str) == Some("-") {
            if let Some(upper) = tokens.get(i + 2) {
                comparators.push(format!(">={}", strip_v(&tokens[i])));
                comparators.push(format!("<={}", strip_v(upper)));
                i += 3;
                continue;
            }
        }
        comparators.push(comparator(&tokens[i]));
        i += 1;
    }

    if comparators.is_empty() {
        return Ok(VersionReq::STAR);
    }
    VersionReq::parse(&comparators.join(", "))
}

/// Split on whitespace and commas, gluing a bare operator to its version
fn tokenize(raw: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut operator = String::new();

    for word in raw
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|w| !w.is_empty())
    {
        if word.chars().all(|c| OPERATOR_CHARS.contains(c)) {
            operator.push_str(word);
            continue;
        }
        tokens.push(format!("{operator}{word}"));
        operator.clear();
    }
    if !operator.is_empty() {
        tokens.push(operator);
    }
    tokens
}

fn comparator(token: &str) -> String {
    let split = token
        .find(|c: char| !OPERATOR_CHARS.contains(c))
        .unwrap_or(token.len());
    let (op, version) = token.split_at(split);
    let version = strip_v(version);

    if op.is_empty() && !is_wildcard(version) {
        format!("={version}")
    } else {
        format!("{op}{version}")
    }
}

fn is_wildcard(version: &str) -> bool {
    version
        .split('.')
        .any(|part| matches!(part, "*" | "x" | "X"))
}

fn strip_v(version: &str) -> &str {
    version.strip_prefix('v').unwrap_or(version)
}
