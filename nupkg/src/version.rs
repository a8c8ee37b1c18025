//! Package versions and dependency version ranges.
//!
//! A package version is `major.minor.patch[.revision][-prerelease][+metadata]`.
//! The four numeric parts compare numerically, a release version orders
//! after any of its prereleases, and prerelease labels compare dot by dot
//! (numerically when both labels are numeric, case-insensitively
//! otherwise). Build metadata never participates in ordering. The string a
//! version was parsed from is kept so display can round-trip it unchanged.
//!
//! A dependency names a [`VersionRange`] rather than a version: the simple
//! form `1.0` (an inclusive minimum), the bracket forms `[1.0]`,
//! `[1.0, 2.0)`, `(, 2.0]`, or the floating form `1.0.*`.

use std::cmp::Ordering;

use crate::compare::compare_ignore_case;
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct PackageVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// Fourth, legacy version part; zero when absent.
    pub revision: u64,
    /// Dot-separated prerelease labels; empty for a release version.
    pub release_labels: Vec<String>,
    /// Build metadata (after `+`), carried for display only.
    pub metadata: Option<String>,
    original: String,
}

impl PackageVersion {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        let mut version = PackageVersion {
            major,
            minor,
            patch,
            revision: 0,
            release_labels: Vec::new(),
            metadata: None,
            original: String::new(),
        };
        version.original = version.to_normalized_string();
        version
    }

    /// Parses a version string.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidVersion(input.to_string()));
        }

        let (rest, metadata) = match trimmed.split_once('+') {
            Some((rest, metadata)) => (rest, Some(metadata.to_string())),
            None => (trimmed, None),
        };

        let (numeric, labels) = match rest.split_once('-') {
            Some((numeric, labels)) => (numeric, Some(labels)),
            None => (rest, None),
        };

        let parts: Vec<&str> = numeric.split('.').collect();
        if parts.is_empty() || parts.len() > 4 {
            return Err(Error::InvalidVersion(input.to_string()));
        }
        let mut numbers = [0u64; 4];
        for (i, part) in parts.iter().enumerate() {
            numbers[i] = part
                .parse::<u64>()
                .map_err(|_| Error::InvalidVersion(input.to_string()))?;
        }

        let release_labels = match labels {
            Some(labels) => {
                let split: Vec<String> = labels.split('.').map(str::to_string).collect();
                if split.iter().any(String::is_empty) {
                    return Err(Error::InvalidVersion(input.to_string()));
                }
                split
            }
            None => Vec::new(),
        };

        Ok(PackageVersion {
            major: numbers[0],
            minor: numbers[1],
            patch: numbers[2],
            revision: numbers[3],
            release_labels,
            metadata,
            original: trimmed.to_string(),
        })
    }

    pub fn is_prerelease(&self) -> bool {
        !self.release_labels.is_empty()
    }

    /// The numeric-only release version: prerelease labels and metadata
    /// stripped, revision kept.
    pub fn release(&self) -> PackageVersion {
        let mut version = PackageVersion {
            major: self.major,
            minor: self.minor,
            patch: self.patch,
            revision: self.revision,
            release_labels: Vec::new(),
            metadata: None,
            original: String::new(),
        };
        version.original = version.to_normalized_string();
        version
    }

    /// Canonical form: three numeric parts, the revision only when
    /// non-zero, prerelease labels when present, no metadata.
    pub fn to_normalized_string(&self) -> String {
        let mut out = format!("{}.{}.{}", self.major, self.minor, self.patch);
        if self.revision > 0 {
            out.push_str(&format!(".{}", self.revision));
        }
        if !self.release_labels.is_empty() {
            out.push('-');
            out.push_str(&self.release_labels.join("."));
        }
        out
    }

    /// The string this version was parsed from, for display.
    pub fn original(&self) -> &str {
        &self.original
    }

    fn compare_release_labels(&self, other: &Self) -> Ordering {
        // Release orders after prerelease.
        match (self.release_labels.is_empty(), other.release_labels.is_empty()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            (false, false) => {}
        }

        for (a, b) in self.release_labels.iter().zip(&other.release_labels) {
            let ordering = match (a.parse::<u64>(), b.parse::<u64>()) {
                (Ok(a), Ok(b)) => a.cmp(&b),
                // A numeric label orders before an alphanumeric one.
                (Ok(_), Err(_)) => Ordering::Less,
                (Err(_), Ok(_)) => Ordering::Greater,
                (Err(_), Err(_)) => compare_ignore_case(a, b),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        self.release_labels.len().cmp(&other.release_labels.len())
    }
}

impl Ord for PackageVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch, self.revision)
            .cmp(&(other.major, other.minor, other.patch, other.revision))
            .then_with(|| self.compare_release_labels(other))
    }
}

impl PartialOrd for PackageVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for PackageVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PackageVersion {}

impl std::fmt::Display for PackageVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.original)
    }
}

/// A dependency's acceptable version interval.
#[derive(Debug, Clone)]
pub struct VersionRange {
    pub min: Option<PackageVersion>,
    pub include_min: bool,
    pub max: Option<PackageVersion>,
    pub include_max: bool,
    /// True for `1.0.*` style ranges; the minimum then holds the floating
    /// prefix with the wildcard parts zeroed.
    pub floating: bool,
    original: String,
}

impl VersionRange {
    /// The unbounded range, accepting every version.
    pub fn all() -> Self {
        VersionRange {
            min: None,
            include_min: false,
            max: None,
            include_max: false,
            floating: false,
            original: "(, )".to_string(),
        }
    }

    /// Parses a range string: `1.0`, `[1.0]`, `[1.0, 2.0)`, `(, 2.0]` or a
    /// floating `1.0.*`.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidRange(input.to_string()));
        }

        if !trimmed.starts_with('[') && !trimmed.starts_with('(') {
            // Simple form: an inclusive minimum, possibly floating.
            let (min, floating) = parse_possibly_floating(trimmed)
                .ok_or_else(|| Error::InvalidRange(input.to_string()))?;
            return Ok(VersionRange {
                min: Some(min),
                include_min: true,
                max: None,
                include_max: false,
                floating,
                original: trimmed.to_string(),
            });
        }

        let include_min = trimmed.starts_with('[');
        let include_max = trimmed.ends_with(']');
        if !trimmed.ends_with(']') && !trimmed.ends_with(')') {
            return Err(Error::InvalidRange(input.to_string()));
        }

        let inner = &trimmed[1..trimmed.len() - 1];
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        match parts.len() {
            1 => {
                // Exact pin, only valid fully inclusive: `[1.0]`.
                if !include_min || !include_max {
                    return Err(Error::InvalidRange(input.to_string()));
                }
                let version = PackageVersion::parse(parts[0])?;
                Ok(VersionRange {
                    min: Some(version.clone()),
                    include_min: true,
                    max: Some(version),
                    include_max: true,
                    floating: false,
                    original: trimmed.to_string(),
                })
            }
            2 => {
                let (min, floating) = if parts[0].is_empty() {
                    (None, false)
                } else {
                    let (version, floating) = parse_possibly_floating(parts[0])
                        .ok_or_else(|| Error::InvalidRange(input.to_string()))?;
                    (Some(version), floating)
                };
                let max = if parts[1].is_empty() {
                    None
                } else {
                    Some(PackageVersion::parse(parts[1])?)
                };
                if min.is_none() && max.is_none() {
                    return Err(Error::InvalidRange(input.to_string()));
                }
                Ok(VersionRange {
                    min,
                    include_min,
                    max,
                    include_max,
                    floating,
                    original: trimmed.to_string(),
                })
            }
            _ => Err(Error::InvalidRange(input.to_string())),
        }
    }

    pub fn is_exact(&self) -> bool {
        match (&self.min, &self.max) {
            (Some(min), Some(max)) => self.include_min && self.include_max && min == max,
            _ => false,
        }
    }

    pub fn satisfies(&self, version: &PackageVersion) -> bool {
        if let Some(ref min) = self.min {
            let ordering = version.cmp(min);
            if ordering == Ordering::Less || (ordering == Ordering::Equal && !self.include_min) {
                return false;
            }
        }
        if let Some(ref max) = self.max {
            let ordering = version.cmp(max);
            if ordering == Ordering::Greater || (ordering == Ordering::Equal && !self.include_max) {
                return false;
            }
        }
        true
    }

    /// The version a reference to this range resolves to when a single
    /// version is needed: the minimum bound, numeric-only when the range
    /// floats.
    pub fn resolve_min(&self) -> Option<PackageVersion> {
        let min = self.min.as_ref()?;
        if self.floating {
            Some(min.release())
        } else {
            Some(min.clone())
        }
    }

    /// Human-readable form of the interval: `(= 1.0.0)`, `(>= 1.0.0)`,
    /// `(>= 1.0.0 && < 2.0.0)`. Unbounded ranges render empty.
    pub fn to_pretty_string(&self) -> String {
        if self.is_exact() {
            if let Some(ref min) = self.min {
                return format!("(= {})", min.to_normalized_string());
            }
        }

        let mut bounds = Vec::new();
        if let Some(ref min) = self.min {
            let op = if self.include_min { ">=" } else { ">" };
            bounds.push(format!("{} {}", op, min.to_normalized_string()));
        }
        if let Some(ref max) = self.max {
            let op = if self.include_max { "<=" } else { "<" };
            bounds.push(format!("{} {}", op, max.to_normalized_string()));
        }
        if bounds.is_empty() {
            return String::new();
        }
        format!("({})", bounds.join(" && "))
    }
}

impl std::fmt::Display for VersionRange {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.original)
    }
}

/// Parses `1.2.3`, or a floating `*` / `1.*` / `1.2.*` / `1.0.0-*` with the
/// wildcard parts zeroed. Returns the version and whether it floats.
fn parse_possibly_floating(input: &str) -> Option<(PackageVersion, bool)> {
    if !input.contains('*') {
        return PackageVersion::parse(input).ok().map(|v| (v, false));
    }

    if input == "*" {
        return Some((PackageVersion::new(0, 0, 0), true));
    }

    if let Some(prefix) = input.strip_suffix(".*") {
        if prefix.contains('*') || prefix.contains('-') {
            return None;
        }
        // Pad the stated prefix with zeros: `1.*` floats over 1.0.0 and up.
        let mut padded = prefix.to_string();
        for _ in prefix.split('.').count()..3 {
            padded.push_str(".0");
        }
        return PackageVersion::parse(&padded).ok().map(|v| (v, true));
    }

    if let Some(prefix) = input.strip_suffix("-*") {
        if prefix.contains('*') {
            return None;
        }
        return PackageVersion::parse(prefix).ok().map(|v| (v, true));
    }

    None
}
