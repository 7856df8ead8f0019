//! Config parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{CvreviewConfigV1, InsightsConfig};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `cvreview.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<CvreviewConfigV1> {
    let cfg: CvreviewConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the domain (defaults + file + overrides).
pub fn resolve_config(
    cfg: CvreviewConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
