//! Package metadata normalization.
//!
//! Extracts `name`, `version`, and `description` from loosely typed
//! manifest fields, falling back to documented defaults and reporting
//! supplied-but-invalid values through an injectable diagnostic sink.

pub mod constants;
pub mod core;
pub mod error;
pub mod traits;
pub mod ui;

pub use crate::core::normalizer::{MetadataNormalizer, normalize};
pub use crate::core::types::{MetadataDefaults, PackageMetadata, RawMetadata};
pub use crate::error::{MetadataError, Result};
pub use crate::traits::{ConsoleSink, DiagnosticSink, MemorySink};
