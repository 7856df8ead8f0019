//! JSON Schemas for the emitted records.

use crate::wire::{Insight, Violation};
use schemars::{Schema, schema_for};

pub fn violation_schema() -> Schema {
    schema_for!(Violation)
}

pub fn insight_schema() -> Schema {
    schema_for!(Insight)
}
