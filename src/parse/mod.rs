//! Load phase: JSON → Rust types + graph construction.

pub mod graph;
pub mod spec;
pub mod types;

pub use graph::PipelineGraph;
pub use spec::*;
pub use types::*;

use serde_json::Value;

use crate::error::LoadError;

/// Deserialize a pipeline document. Anything without a `pipelines` array is
/// rejected here so the validators only ever see the typed shape.
pub fn load(raw: &str) -> Result<PipelineDocument, LoadError> {
    let value: Value = serde_json::from_str(raw)?;
    match value.get("pipelines") {
        Some(Value::Array(_)) => Ok(serde_json::from_value(value)?),
        Some(_) => Err(LoadError::shape("`pipelines` is not an array")),
        None => Err(LoadError::shape("missing `pipelines`")),
    }
}

/// Deserialize a single pipeline (`{ "nodes": [...] }`).
pub fn load_pipeline(raw: &str) -> Result<Pipeline, LoadError> {
    Ok(serde_json::from_str(raw)?)
}

/// Deserialize a component catalog. Entries that don't match the spec shape
/// are dropped individually.
pub fn load_specs(raw: &str) -> Result<Vec<ComponentSpec>, LoadError> {
    let value: Value = serde_json::from_str(raw)?;
    let Value::Array(entries) = value else {
        return Err(LoadError::shape("component catalog is not an array"));
    };

    let specs: Vec<ComponentSpec> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| match serde_json::from_value(entry) {
            Ok(spec) => Some(spec),
            Err(e) => {
                tracing::warn!(index = i, error = %e, "skipping malformed component spec");
                None
            }
        })
        .collect();
    Ok(specs)
}
