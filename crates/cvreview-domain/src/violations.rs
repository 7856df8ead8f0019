use crate::error::ReviewError;
use crate::model::{ConstraintViolation, ReviewResult};
use cvreview_types::{DynMap, StructuredValue, Violation};

/// Why the metadata bridge failed; the caller adds the violation context.
#[derive(Debug)]
enum BridgeError {
    Serialize(serde_json::Error),
    Decode {
        json: String,
        source: serde_json::Error,
    },
}

/// Encode dynamic metadata as a structured value.
///
/// The metadata is written to canonical JSON text and that text is parsed
/// back, so the structured value has exactly the JSON types of the text.
pub fn encode_metadata(metadata: &DynMap) -> Result<StructuredValue, serde_json::Error> {
    bridge(metadata).map_err(|err| match err {
        BridgeError::Serialize(source) | BridgeError::Decode { source, .. } => source,
    })
}

fn bridge(metadata: &DynMap) -> Result<StructuredValue, BridgeError> {
    let json = serde_json::to_string(metadata).map_err(BridgeError::Serialize)?;
    StructuredValue::from_json_str(&json).map_err(|source| BridgeError::Decode { json, source })
}

impl ReviewResult {
    /// Project into wire violations.
    ///
    /// Fails on the first violation whose metadata cannot be encoded; no
    /// partial list is returned.
    pub fn to_violations(&self) -> Result<Vec<Violation>, ReviewError> {
        self.constraint_violations
            .iter()
            .enumerate()
            .map(|(index, cv)| cv.to_violation(&self.name, index))
            .collect()
    }
}

impl ConstraintViolation {
    fn to_violation(&self, resource: &str, index: usize) -> Result<Violation, ReviewError> {
        let metadata = bridge(&self.metadata).map_err(|err| match err {
            BridgeError::Serialize(source) => ReviewError::Serialization {
                resource: resource.to_string(),
                constraint: self.constraint.name.clone(),
                index,
                source,
            },
            BridgeError::Decode { json, source } => ReviewError::Encoding {
                resource: resource.to_string(),
                constraint: self.constraint.name.clone(),
                index,
                json,
                source,
            },
        })?;

        Ok(Violation {
            constraint: self.constraint.name.clone(),
            resource: resource.to_string(),
            message: self.message.clone(),
            metadata,
        })
    }
}
