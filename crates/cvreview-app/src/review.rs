//! The `review` use case: bind engine responses to a resource and project them.

use anyhow::Context;
use cvreview_domain::{ResultBuilder, ReviewConfig, ReviewResult};
use cvreview_settings::Overrides;
use cvreview_types::{DynMap, Insight, Responses, Violation};
use rayon::prelude::*;
use tracing::{debug, debug_span, warn};

/// One resource to review.
#[derive(Clone, Debug)]
pub struct ReviewRequest {
    /// Target whose responses apply to this resource.
    pub target: String,
    /// The resource as given by CAI.
    pub cai_resource: DynMap,
    /// The resource as submitted to the engine; `None` means it was the CAI
    /// resource itself.
    pub review_resource: Option<DynMap>,
    /// Engine output for this resource.
    pub responses: Responses,
}

/// Everything produced for one resource.
#[derive(Clone, Debug)]
pub struct ReviewOutput {
    pub result: ReviewResult,
    pub violations: Vec<Violation>,
    pub insights: Vec<Insight>,
}

/// Reviews resources with a resolved configuration.
#[derive(Clone, Debug, Default)]
pub struct Reviewer {
    config: ReviewConfig,
}

impl Reviewer {
    pub fn new(config: ReviewConfig) -> Self {
        Self { config }
    }

    /// Build a reviewer from `cvreview.toml` text (empty text means defaults).
    pub fn from_config_text(config_text: &str, overrides: Overrides) -> anyhow::Result<Self> {
        let cfg = if config_text.trim().is_empty() {
            cvreview_settings::CvreviewConfigV1::default()
        } else {
            cvreview_settings::parse_config_toml(config_text).context("parse config")?
        };
        let resolved =
            cvreview_settings::resolve_config(cfg, overrides).context("resolve config")?;
        Ok(Self::new(resolved.effective))
    }

    pub fn config(&self) -> &ReviewConfig {
        &self.config
    }

    /// Review a single resource. Any failure means nothing was produced.
    pub fn review(&self, request: ReviewRequest) -> anyhow::Result<ReviewOutput> {
        let span = debug_span!(
            "review",
            target = %request.target,
            resource = tracing::field::Empty
        );
        let _guard = span.enter();

        let ReviewRequest {
            target,
            cai_resource,
            review_resource,
            responses,
        } = request;
        let review_resource = review_resource.unwrap_or_else(|| cai_resource.clone());

        let result = ResultBuilder::new(&self.config)
            .build(&target, cai_resource, review_resource, &responses)
            .with_context(|| format!("build review result for target '{target}'"))?;
        span.record("resource", result.name());

        let violations = result
            .to_violations()
            .with_context(|| format!("convert violations for '{}'", result.name()))?;
        let insights = result.to_insights_with(&self.config.insights);

        debug!(
            resource = result.name(),
            violations = violations.len(),
            insights = insights.len(),
            "reviewed resource"
        );

        Ok(ReviewOutput {
            result,
            violations,
            insights,
        })
    }

    /// Review many independent resources in parallel.
    ///
    /// Returns one outcome per request, in request order. A failing review
    /// does not affect the others.
    pub fn review_all(&self, requests: Vec<ReviewRequest>) -> Vec<anyhow::Result<ReviewOutput>> {
        debug!(requests = requests.len(), "reviewing resources");
        requests
            .into_par_iter()
            .enumerate()
            .map(|(index, request)| {
                let outcome = self.review(request);
                if let Err(err) = &outcome {
                    warn!(index, error = %format!("{err:#}"), "review failed");
                }
                outcome
            })
            .collect()
    }
}
