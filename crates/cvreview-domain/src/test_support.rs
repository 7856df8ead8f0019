use cvreview_types::{ConstraintRef, DynMap, Dynamic, EvalResult, Response, Responses};
use serde_json::Value as JsonValue;

pub const TARGET: &str = "validation.gcp.forsetisecurity.org";

/// Convert a `json!` object into a dynamic mapping.
pub fn map(value: JsonValue) -> DynMap {
    match Dynamic::from(value) {
        Dynamic::Map(m) => m,
        other => panic!("expected a JSON object, got {}", other.type_name()),
    }
}

pub fn cai_resource(name: &str) -> DynMap {
    let mut m = map(serde_json::json!({
        "asset_type": "storage.googleapis.com/Bucket",
        "resource": {"data": {"location": "US"}},
    }));
    m.insert("name".to_string(), Dynamic::from(name));
    m
}

pub fn eval_result(msg: &str, constraint: &str, metadata: JsonValue) -> EvalResult {
    EvalResult {
        msg: msg.to_string(),
        metadata: map(metadata),
        constraint: ConstraintRef::new("GCPTestConstraintV1", constraint),
    }
}

pub fn responses(target: &str, results: Vec<EvalResult>) -> Responses {
    let mut responses = Responses::default();
    responses.insert(Response {
        target: target.to_string(),
        results,
    });
    responses
}
