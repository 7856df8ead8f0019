use crate::model::CvreviewConfigV1;
use anyhow::Context;
use cvreview_domain::ReviewConfig;
use cvreview_types::ids;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub name_field: Option<String>,
    pub category: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: ReviewConfig,
}

pub fn resolve_config(
    cfg: CvreviewConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != ids::SCHEMA_CONFIG_V1
    {
        anyhow::bail!(
            "unsupported config schema: {schema} (expected '{}')",
            ids::SCHEMA_CONFIG_V1
        );
    }

    let mut effective = ReviewConfig::default();

    if let Some(field) = overrides.name_field.or(cfg.name_field) {
        effective.name_field = non_empty("name_field", field)?;
    }

    let insights = cfg.insights;
    if let Some(category) = overrides.category.or(insights.category) {
        effective.insights.category =
            parse_category(&category).with_context(|| "invalid insights.category")?;
    }
    if let Some(key) = insights.resource_key {
        effective.insights.resource_key = non_empty("insights.resource_key", key)?;
    }
    if let Some(key) = insights.metadata_key {
        effective.insights.metadata_key = non_empty("insights.metadata_key", key)?;
    }
    if effective.insights.resource_key == effective.insights.metadata_key {
        anyhow::bail!(
            "insights.resource_key and insights.metadata_key must differ (both are '{}')",
            effective.insights.resource_key
        );
    }

    Ok(ResolvedConfig { effective })
}

fn non_empty(key: &str, value: String) -> anyhow::Result<String> {
    if value.trim().is_empty() {
        anyhow::bail!("{key} must not be empty");
    }
    Ok(value)
}

/// Categories are upper snake case tags, e.g. `SECURITY`.
fn parse_category(v: &str) -> anyhow::Result<String> {
    let valid = !v.is_empty()
        && v.starts_with(|c: char| c.is_ascii_uppercase())
        && v.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');
    if !valid {
        anyhow::bail!("unknown category format: {v} (expected UPPER_SNAKE_CASE)");
    }
    Ok(v.to_string())
}
