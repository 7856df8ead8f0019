//! Shared test utilities for the cvreview workspace.
//!
//! Fixtures live under `tests/fixtures/<name>/` at the repository root:
//! - `cai.json`: the CAI resource
//! - `responses.json`: the engine responses
//! - `review.json` (optional): the resource submitted for review

use cvreview_types::{DynMap, Dynamic, Responses};
use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// A fixture loaded from disk.
#[derive(Clone, Debug)]
pub struct Fixture {
    pub cai_resource: DynMap,
    pub review_resource: Option<DynMap>,
    pub responses: Responses,
}

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("tests")
        .join("fixtures")
}

/// Read and deserialize `tests/fixtures/<rel>`. Panics on any failure.
pub fn read_json<T: DeserializeOwned>(rel: &str) -> T {
    let path = fixtures_dir().join(rel);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read fixture {}: {e}", path.display()));
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("parse fixture {}: {e}", path.display()))
}

pub fn load_fixture(name: &str) -> Fixture {
    let review_path = fixtures_dir().join(name).join("review.json");
    Fixture {
        cai_resource: read_json(&format!("{name}/cai.json")),
        review_resource: review_path
            .exists()
            .then(|| read_json(&format!("{name}/review.json"))),
        responses: read_json(&format!("{name}/responses.json")),
    }
}

/// Convert a `json!` object into a dynamic mapping. Panics on non-objects.
pub fn dyn_map(value: serde_json::Value) -> DynMap {
    match Dynamic::from(value) {
        Dynamic::Map(m) => m,
        other => panic!("expected a JSON object, got {}", other.type_name()),
    }
}

/// Install a tracing subscriber that writes through the test harness.
///
/// Honors `RUST_LOG`; defaults to `warn`. Safe to call from every test.
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(filter)
        .try_init();
}
