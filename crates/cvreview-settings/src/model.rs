use serde::{Deserialize, Serialize};

/// `cvreview.toml` schema v1.
///
/// Every field is optional; anything left out falls back to the defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CvreviewConfigV1 {
    /// Optional schema string for tooling (`cvreview.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// CAI field that holds the resource name (default `name`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_field: Option<String>,

    #[serde(default)]
    pub insights: InsightsConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InsightsConfig {
    /// Insight category tag (default `SECURITY`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_key: Option<String>,
}
