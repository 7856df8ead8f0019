//! Evaluation engine output, as handed to the result builder.

use crate::constraint::ConstraintRef;
use crate::value::DynMap;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Per-target responses for one review.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Responses {
    #[serde(default)]
    pub by_target: BTreeMap<String, Response>,
}

impl Responses {
    pub fn target(&self, target: &str) -> Option<&Response> {
        self.by_target.get(target)
    }

    /// Add (or replace) the response for `response.target`.
    pub fn insert(&mut self, response: Response) {
        self.by_target.insert(response.target.clone(), response);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Response {
    pub target: String,
    /// One entry per unsatisfied constraint, in engine order.
    #[serde(default)]
    pub results: Vec<EvalResult>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EvalResult {
    pub msg: String,
    /// Absent and `null` both read as an empty map.
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schemars(with = "BTreeMap<String, serde_json::Value>")]
    pub metadata: DynMap,
    pub constraint: ConstraintRef,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DynMap, D::Error> {
    Option::<DynMap>::deserialize(deserializer).map(Option::unwrap_or_default)
}
