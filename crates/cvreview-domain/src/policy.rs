use cvreview_types::ids;

/// Effective configuration used by the builder and the insight converter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewConfig {
    /// CAI field holding the resource name.
    pub name_field: String,
    pub insights: InsightConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InsightConfig {
    pub category: String,
    /// Content key for the raw CAI resource.
    pub resource_key: String,
    /// Content key for the violation metadata.
    pub metadata_key: String,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            name_field: ids::FIELD_NAME.to_string(),
            insights: InsightConfig::default(),
        }
    }
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            category: ids::CATEGORY_SECURITY.to_string(),
            resource_key: ids::CONTENT_RESOURCE.to_string(),
            metadata_key: ids::CONTENT_METADATA.to_string(),
        }
    }
}
