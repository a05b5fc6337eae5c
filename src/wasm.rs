//! WASM entry points for the editor.

use wasm_bindgen::prelude::*;

use crate::config::ValidationOptions;
use crate::parse::{self, ComponentSpec};
use crate::problem::Problem;

/// Validate a pipeline document JSON against a component catalog JSON.
/// Returns a JSON array of problems.
#[wasm_bindgen]
pub fn validate_pipeline(pipeline_json: &str, specs_json: &str) -> JsValue {
    let result = validate_pipeline_inner(pipeline_json, specs_json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_pipeline_inner(pipeline_json: &str, specs_json: &str) -> Vec<Problem> {
    let specs = load_specs_or_empty(specs_json);
    crate::validate::validate(pipeline_json, &specs)
}

/// Property problems for a single pipeline JSON (`{ "nodes": [...] }`).
/// Returns a JSON array of problems.
#[wasm_bindgen]
pub fn get_node_problems(pipeline_json: &str, specs_json: &str) -> JsValue {
    let result = get_node_problems_inner(pipeline_json, specs_json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn get_node_problems_inner(pipeline_json: &str, specs_json: &str) -> Vec<Problem> {
    let pipeline = match parse::load_pipeline(pipeline_json) {
        Ok(p) => p,
        Err(e) => {
            tracing::debug!(error = %e, "pipeline not loaded, nothing to validate");
            return vec![];
        }
    };
    let specs = load_specs_or_empty(specs_json);
    crate::validate::check_pipeline(&pipeline, &specs, &ValidationOptions::default())
}

fn load_specs_or_empty(specs_json: &str) -> Vec<ComponentSpec> {
    parse::load_specs(specs_json).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "component catalog not loaded, validating without specs");
        vec![]
    })
}
