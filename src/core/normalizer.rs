//! Metadata Normalization Module
//!
//! Turns loosely typed manifest fields into fully populated package
//! metadata. Three independent extractors feed one aggregator:
//!
//! - **name**: a `bin` string wins, then the first key of a `bin` map,
//!   then `name` itself; every candidate is trimmed and must be
//!   non-empty.
//! - **version**: must be a string parsing as a semantic version
//!   (surrounding whitespace and one leading `v` are tolerated); the
//!   canonical form is returned.
//! - **description**: any string that is non-empty after trimming.
//!
//! Whatever an extractor cannot produce falls back to the configured
//! defaults, so normalization never fails. Supplied-but-unusable values
//! are reported through the diagnostic sink; absent or null fields stay
//! silent.

use crate::core::types::{MetadataDefaults, PackageMetadata, RawMetadata, json_type_name};
use crate::traits::{ConsoleSink, DiagnosticSink};
use semver::Version;
use serde_json::Value;

/// Normalizes raw manifest fields into complete package metadata.
pub struct MetadataNormalizer {
    defaults: MetadataDefaults,
    sink: Box<dyn DiagnosticSink>,
}

impl MetadataNormalizer {
    /// Create a normalizer with explicit defaults and diagnostic sink.
    pub fn new(defaults: MetadataDefaults, sink: Box<dyn DiagnosticSink>) -> Self {
        Self { defaults, sink }
    }

    /// Create a normalizer with the documented defaults and a custom sink.
    pub fn with_sink(sink: Box<dyn DiagnosticSink>) -> Self {
        Self::new(MetadataDefaults::default(), sink)
    }

    /// Normalize one record.
    ///
    /// Never fails: each field that cannot be extracted is replaced by
    /// its default. Extraction runs field by field (name, version,
    /// description), and so do any resulting warnings.
    pub fn normalize(&self, input: &RawMetadata) -> PackageMetadata {
        PackageMetadata {
            name: self
                .name_from(input.name.as_ref(), input.bin.as_ref())
                .unwrap_or_else(|| self.defaults.name.clone()),
            version: self
                .version_from(input.version.as_ref())
                .unwrap_or_else(|| self.defaults.version.clone()),
            description: self
                .description_from(input.description.as_ref())
                .unwrap_or_else(|| self.defaults.description.clone()),
        }
    }

    /// Derive the package name from `bin` (preferred) or `name`.
    fn name_from(&self, name: Option<&Value>, bin: Option<&Value>) -> Option<String> {
        let name = supplied(name);
        let bin = supplied(bin);

        let bin_candidate = match bin {
            Some(Value::String(raw)) => trimmed_non_empty(raw),
            // Only the first key of a bin map counts; an unusable first
            // key does not fall through to later keys
            Some(Value::Object(map)) => map
                .keys()
                .next()
                .map(String::as_str)
                .and_then(trimmed_non_empty),
            // Any other bin type contributes no candidate
            _ => None,
        };
        if let Some(candidate) = bin_candidate {
            return Some(candidate.to_string());
        }

        if let Some(candidate) = name.and_then(Value::as_str).and_then(trimmed_non_empty) {
            return Some(candidate.to_string());
        }

        // Warn only if there was some input to begin with
        if name.is_some() || bin.is_some() {
            self.sink.warn(&format!(
                "Could not determine a valid package name from name: '{}' or bin: '{}'.",
                display_raw(name),
                display_json(bin)
            ));
        }
        None
    }

    /// Validate and canonicalize the version field.
    fn version_from(&self, version: Option<&Value>) -> Option<String> {
        let value = supplied(version)?;
        let Some(raw) = value.as_str() else {
            self.sink.warn(&format!(
                "Version input is not a string: '{}'.",
                json_type_name(value)
            ));
            return None;
        };

        let candidate = raw.trim();
        let candidate = candidate.strip_prefix('v').unwrap_or(candidate);
        match Version::parse(candidate) {
            Ok(version) => Some(version.to_string()),
            Err(_) => {
                self.sink.warn(&format!(
                    "Invalid semantic version string provided: '{}'.",
                    raw
                ));
                None
            }
        }
    }

    /// Trim the description field; empty results are dropped silently.
    fn description_from(&self, description: Option<&Value>) -> Option<String> {
        let value = supplied(description)?;
        let Some(raw) = value.as_str() else {
            self.sink.warn(&format!(
                "Description input is not a string: '{}'.",
                json_type_name(value)
            ));
            return None;
        };

        trimmed_non_empty(raw).map(str::to_string)
    }
}

impl Default for MetadataNormalizer {
    /// Documented defaults, warnings to stderr.
    fn default() -> Self {
        Self::new(MetadataDefaults::default(), Box::new(ConsoleSink))
    }
}

/// Normalize one record with the default configuration.
///
/// Shorthand for `MetadataNormalizer::default().normalize(input)`.
pub fn normalize(input: &RawMetadata) -> PackageMetadata {
    MetadataNormalizer::default().normalize(input)
}

/// Treat explicit JSON null the same as an absent field
fn supplied(value: Option<&Value>) -> Option<&Value> {
    value.filter(|value| !value.is_null())
}

fn trimmed_non_empty(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Raw rendering for diagnostics: strings appear as-is, anything else
/// as compact JSON, absent as `null`
fn display_raw(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(raw)) => raw.clone(),
        Some(other) => other.to_string(),
        None => "null".to_string(),
    }
}

/// JSON rendering for diagnostics: strings keep their quotes, absent is `null`
fn display_json(value: Option<&Value>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "null".to_string(),
    }
}
