//! Fuzz target for the metadata bridge.
//!
//! Goal: parsing arbitrary JSON into a dynamic value and encoding it as a
//! structured value should **never panic**. Errors are fine.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_metadata_bridge
//! ```

#![no_main]

use cvreview_types::{DynMap, Dynamic};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(value) = serde_json::from_str::<Dynamic>(text) else {
        return;
    };

    let metadata = match value {
        Dynamic::Map(m) => m,
        other => {
            let mut m = DynMap::new();
            m.insert("value".to_string(), other);
            m
        }
    };

    if let Ok(encoded) = cvreview_domain::encode_metadata(&metadata) {
        // Whatever encodes must decode to the same JSON as the canonical text.
        let text = serde_json::to_string(&metadata).expect("encoded metadata serializes");
        let reparsed: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(encoded.to_json(), reparsed);
    }
});
