use crate::constants;
use crate::error::{MetadataError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// Loosely typed manifest fields as they arrive from the outside world.
// Every field is optional and untyped; the normalizer decides what is
// usable. An explicit JSON null behaves exactly like an absent field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawMetadata {
    /// Declared package name
    pub name: Option<Value>,
    /// Executable entry: either a single path string, or a map of
    /// command name -> path (only the first key is consulted)
    pub bin: Option<Value>,
    /// Version string, expected to parse as a semantic version
    pub version: Option<Value>,
    /// Free-form description
    pub description: Option<Value>,
}

impl RawMetadata {
    /// Pick the four metadata fields out of a JSON object.
    ///
    /// Values are cloned as-is; validation happens later, during
    /// normalization. Anything other than an object at the root is
    /// rejected.
    pub fn from_value(value: &Value) -> Result<Self> {
        let fields = value.as_object().ok_or(MetadataError::UnexpectedRoot {
            found: json_type_name(value),
        })?;

        Ok(Self {
            name: fields.get("name").cloned(),
            bin: fields.get("bin").cloned(),
            version: fields.get("version").cloned(),
            description: fields.get("description").cloned(),
        })
    }
}

// Fully populated metadata produced by normalization. All three fields
// are guaranteed present; missing or unusable input degrades to the
// configured defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageMetadata {
    pub name: String,
    pub version: String,
    pub description: String,
}

/// Fallback values substituted when an extractor comes up empty.
///
/// Passed to `MetadataNormalizer::new` so the defaults are explicit per
/// normalizer instead of process-wide state. Custom values are
/// substituted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataDefaults {
    pub name: String,
    pub version: String,
    pub description: String,
}

impl Default for MetadataDefaults {
    fn default() -> Self {
        Self {
            name: constants::DEFAULT_NAME.to_string(),
            version: constants::DEFAULT_VERSION.to_string(),
            description: constants::DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

/// JSON type name of a value, for diagnostics
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
