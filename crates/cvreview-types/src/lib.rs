//! Stable DTOs and IDs used across the cvreview workspace.
//!
//! This crate is intentionally boring:
//! - the dynamic value union used for schema-less resource payloads
//! - the structured wire value used for violation metadata
//! - evaluation engine response DTOs
//! - wire records for the violation API and the insights sink

#![forbid(unsafe_code)]

pub mod constraint;
pub mod ids;
pub mod response;
pub mod schema;
pub mod structured;
pub mod value;
pub mod wire;

pub use constraint::ConstraintRef;
pub use response::{EvalResult, Response, Responses};
pub use structured::StructuredValue;
pub use value::{DynMap, Dynamic, FieldError};
pub use wire::{Insight, Violation};
