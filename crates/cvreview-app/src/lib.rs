//! Use case orchestration for cvreview.
//!
//! This crate provides the application layer: it resolves configuration,
//! drives the domain for one or many resources and renders the projections
//! for their sinks. It is intentionally thin and delegates the transforms to
//! the domain crate.

#![forbid(unsafe_code)]

mod render;
mod review;

pub use render::{insights_to_json, violations_to_jsonl};
pub use review::{ReviewOutput, ReviewRequest, Reviewer};
