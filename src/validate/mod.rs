//! Validation entry points.
//!
//! Problems come back in a fixed order: circular references, then missing
//! components, then missing properties.

pub mod cycles;
pub mod properties;
pub mod references;

pub use properties::{check_node, check_pipeline};

use crate::config::ValidationOptions;
use crate::parse::{self, ComponentSpec, PipelineDocument, PipelineGraph};
use crate::problem::Problem;

/// Validate a serialized pipeline document against a component catalog.
/// A document that can't be loaded has nothing to validate and yields no
/// problems.
pub fn validate(raw: &str, specs: &[ComponentSpec]) -> Vec<Problem> {
    validate_with(raw, specs, &ValidationOptions::default())
}

pub fn validate_with(raw: &str, specs: &[ComponentSpec], options: &ValidationOptions) -> Vec<Problem> {
    match parse::load(raw) {
        Ok(doc) => validate_document(&doc, specs, options),
        Err(e) => {
            tracing::debug!(error = %e, "pipeline document not loaded, nothing to validate");
            vec![]
        }
    }
}

/// Validate an already loaded document.
pub fn validate_document(
    doc: &PipelineDocument,
    specs: &[ComponentSpec],
    options: &ValidationOptions,
) -> Vec<Problem> {
    let graph = PipelineGraph::build(doc);
    let mut problems = Vec::new();

    if options.check_cycles {
        problems.extend(cycles::detect_cycles(&graph));
    }
    if options.check_references {
        problems.extend(references::resolve_refs(&graph, specs));
    }
    if options.check_properties {
        for pipeline in &doc.pipelines {
            problems.extend(check_pipeline(pipeline, specs, options));
        }
    }

    tracing::debug!(
        pipelines = doc.pipelines.len(),
        problems = problems.len(),
        "pipeline validated"
    );
    problems
}
