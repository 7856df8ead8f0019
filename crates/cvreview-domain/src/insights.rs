use crate::model::ReviewResult;
use crate::policy::InsightConfig;
use cvreview_types::{DynMap, Dynamic, Insight};

impl ReviewResult {
    /// Project into insights with the default category and content keys.
    ///
    /// A clean result yields an empty `Vec`.
    pub fn to_insights(&self) -> Vec<Insight> {
        self.to_insights_with(&InsightConfig::default())
    }

    pub fn to_insights_with(&self, cfg: &InsightConfig) -> Vec<Insight> {
        self.constraint_violations
            .iter()
            .map(|cv| {
                let mut content = DynMap::new();
                content.insert(
                    cfg.resource_key.clone(),
                    Dynamic::Map(self.cai_resource.clone()),
                );
                content.insert(cfg.metadata_key.clone(), Dynamic::Map(cv.metadata.clone()));

                Insight {
                    description: cv.message.clone(),
                    target_resources: vec![self.name.clone()],
                    insight_subtype: cv.constraint.name.clone(),
                    content,
                    category: cfg.category.clone(),
                }
            })
            .collect()
    }
}
