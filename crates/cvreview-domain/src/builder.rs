use crate::error::ReviewError;
use crate::model::{ConstraintViolation, ReviewResult};
use crate::policy::ReviewConfig;
use cvreview_types::value::{self, FieldError};
use cvreview_types::{DynMap, Responses};

/// Binds a target's evaluation results to the resource they were computed for.
#[derive(Clone, Debug)]
pub struct ResultBuilder<'a> {
    cfg: &'a ReviewConfig,
}

impl<'a> ResultBuilder<'a> {
    pub fn new(cfg: &'a ReviewConfig) -> Self {
        Self { cfg }
    }

    /// Build the [`ReviewResult`] for `target`.
    ///
    /// The target lookup happens before the resource is inspected, so a
    /// missing target reports `NotFound` whatever the resource looks like.
    pub fn build(
        &self,
        target: &str,
        cai_resource: DynMap,
        review_resource: DynMap,
        responses: &Responses,
    ) -> Result<ReviewResult, ReviewError> {
        let response = responses
            .target(target)
            .ok_or_else(|| ReviewError::NotFound {
                target: target.to_string(),
            })?;

        let name = value::get_str(&cai_resource, &self.cfg.name_field)
            .map_err(|err| match err {
                FieldError::Missing { field } => ReviewError::MissingField {
                    target: target.to_string(),
                    field,
                },
                FieldError::NotAString { field, found } => ReviewError::TypeMismatch {
                    target: target.to_string(),
                    field,
                    found,
                },
            })?
            .to_string();

        let constraint_violations = response
            .results
            .iter()
            .map(|r| ConstraintViolation {
                message: r.msg.clone(),
                metadata: r.metadata.clone(),
                constraint: r.constraint.clone(),
            })
            .collect();

        Ok(ReviewResult {
            name,
            cai_resource,
            review_resource,
            constraint_violations,
        })
    }
}

/// [`ResultBuilder::build`] with the default configuration.
pub fn build(
    target: &str,
    cai_resource: DynMap,
    review_resource: DynMap,
    responses: &Responses,
) -> Result<ReviewResult, ReviewError> {
    ResultBuilder::new(&ReviewConfig::default()).build(
        target,
        cai_resource,
        review_resource,
        responses,
    )
}
