//! Pure review result handling (no IO).
//!
//! Input: a CAI resource, the resource submitted for review and the
//! evaluation engine's per-target responses.
//! Output: a [`ReviewResult`] and its violation and insight projections.

#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod policy;

mod builder;
mod insights;
mod violations;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use builder::{ResultBuilder, build};
pub use error::{ReviewError, ReviewErrorKind};
pub use model::{ConstraintViolation, ReviewResult};
pub use policy::{InsightConfig, ReviewConfig};
pub use violations::encode_metadata;
