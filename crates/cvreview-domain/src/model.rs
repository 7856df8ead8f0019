use cvreview_types::{ConstraintRef, DynMap};

/// Outcome of reviewing one resource.
///
/// Built by [`crate::build`]; read-only afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewResult {
    pub(crate) name: String,
    pub(crate) cai_resource: DynMap,
    pub(crate) review_resource: DynMap,
    pub(crate) constraint_violations: Vec<ConstraintViolation>,
}

impl ReviewResult {
    /// Resource name as given by CAI.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resource as given by CAI.
    pub fn cai_resource(&self) -> &DynMap {
        &self.cai_resource
    }

    /// The resource as submitted to the evaluation engine. For most asset
    /// types this equals the CAI resource; some are unwrapped first.
    pub fn review_resource(&self) -> &DynMap {
        &self.review_resource
    }

    /// Constraints that were not satisfied, in engine order.
    pub fn constraint_violations(&self) -> &[ConstraintViolation] {
        &self.constraint_violations
    }

    pub fn is_clean(&self) -> bool {
        self.constraint_violations.is_empty()
    }
}

/// One unsatisfied constraint.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstraintViolation {
    /// Human readable message.
    pub message: String,
    /// Metadata returned by the constraint check.
    pub metadata: DynMap,
    pub constraint: ConstraintRef,
}
