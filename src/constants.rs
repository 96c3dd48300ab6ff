// Fallback values substituted when a metadata field is missing or unusable

/// Package name used when none can be derived from `name` or `bin`
pub const DEFAULT_NAME: &str = "unnamed-package";

/// Version used when none is supplied or the supplied one is invalid
pub const DEFAULT_VERSION: &str = "0.0.1";

/// Description used when none is supplied
pub const DEFAULT_DESCRIPTION: &str = "";
