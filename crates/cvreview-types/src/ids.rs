//! Stable keys and tags shared by the builder and the converters.

/// Field of a CAI resource holding the resource's full name.
pub const FIELD_NAME: &str = "name";

// Insight content keys
pub const CONTENT_RESOURCE: &str = "resource";
pub const CONTENT_METADATA: &str = "metadata";

// Insight categories
pub const CATEGORY_SECURITY: &str = "SECURITY";

/// Schema id accepted in `cvreview.toml`.
pub const SCHEMA_CONFIG_V1: &str = "cvreview.config.v1";
