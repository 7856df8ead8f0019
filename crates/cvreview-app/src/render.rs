//! Serialization of the projections for their sinks.

use anyhow::Context;
use cvreview_types::{Insight, Violation};

/// One violation per line, as accepted by the violation API's bulk import.
pub fn violations_to_jsonl(violations: &[Violation]) -> anyhow::Result<String> {
    let mut out = String::new();
    for (idx, v) in violations.iter().enumerate() {
        let line = serde_json::to_string(v)
            .with_context(|| format!("serialize violation {idx} ('{}')", v.constraint))?;
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}

/// Pretty JSON array of insights for the findings sink.
pub fn insights_to_json(insights: &[Insight]) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(insights).context("serialize insights")?;
    out.push('\n');
    Ok(out)
}
