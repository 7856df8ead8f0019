/// Errors produced while building or projecting a review result.
///
/// Every failing operation produces nothing: there is no partial result.
#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("no response for target '{target}'")]
    NotFound { target: String },

    #[error("resource reviewed for target '{target}' is missing field '{field}'")]
    MissingField { target: String, field: String },

    #[error("resource field '{field}' is {found}, expected a string (target '{target}')")]
    TypeMismatch {
        target: String,
        field: String,
        found: &'static str,
    },

    #[error(
        "failed to marshal metadata of violation {index} ('{constraint}') on '{resource}' to json: {source}"
    )]
    Serialization {
        resource: String,
        constraint: String,
        index: usize,
        source: serde_json::Error,
    },

    #[error(
        "failed to decode json of violation {index} ('{constraint}') on '{resource}' into a structured value: {source}"
    )]
    Encoding {
        resource: String,
        constraint: String,
        index: usize,
        json: String,
        source: serde_json::Error,
    },
}

/// Error category, for callers that branch on the kind of failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewErrorKind {
    NotFound,
    MissingField,
    TypeMismatch,
    Serialization,
    Encoding,
}

impl ReviewError {
    pub fn kind(&self) -> ReviewErrorKind {
        match self {
            ReviewError::NotFound { .. } => ReviewErrorKind::NotFound,
            ReviewError::MissingField { .. } => ReviewErrorKind::MissingField,
            ReviewError::TypeMismatch { .. } => ReviewErrorKind::TypeMismatch,
            ReviewError::Serialization { .. } => ReviewErrorKind::Serialization,
            ReviewError::Encoding { .. } => ReviewErrorKind::Encoding,
        }
    }
}
