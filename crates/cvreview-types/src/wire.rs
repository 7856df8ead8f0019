use crate::structured::StructuredValue;
use crate::value::DynMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Violation record reported through the constraint-violation API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Violation {
    /// Name of the violated constraint.
    pub constraint: String,
    /// Name of the reviewed resource.
    pub resource: String,
    pub message: String,
    #[schemars(with = "serde_json::Value")]
    pub metadata: StructuredValue,
}

/// Security finding handed to the insights sink.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub description: String,
    /// Always a single entry: the owning resource's name.
    pub target_resources: Vec<String>,
    pub insight_subtype: String,
    /// The raw CAI resource and the violation metadata, under two keys.
    #[schemars(with = "BTreeMap<String, serde_json::Value>")]
    pub content: DynMap,
    pub category: String,
}
