use pipeline_validator::parse::{ComponentSpec, Pipeline};
use pipeline_validator::{Problem, ProblemKind};
use serde_json::{Value, json};

// =============================================================================
// Catalog builders
// =============================================================================

/// The notebook component: `elyra_filename` is required, runtime image is not.
pub fn node_spec() -> ComponentSpec {
    serde_json::from_str(include_str!("../fixtures/node_spec.json")).expect("node spec fixture")
}

/// A spec with a single required parameter that also declares a default.
pub fn spec_with_default(op: &str, param: &str, default: &str) -> ComponentSpec {
    serde_json::from_value(json!({
        "op": op,
        "app_data": {
            "properties": {
                "current_parameters": { param: default },
                "parameters": [{ "id": param }],
                "uihints": {
                    "parameter_info": [{
                        "control": "custom",
                        "custom_control_id": "StringControl",
                        "parameter_ref": param,
                        "label": { "default": "Example" },
                        "description": { "default": "this is an example.", "placement": "on_panel" },
                        "data": { "required": true }
                    }],
                    "group_info": [{
                        "type": "panels",
                        "group_info": [{ "id": param, "type": "controls", "parameter_refs": [param] }]
                    }]
                }
            }
        }
    }))
    .expect("spec with default")
}

/// A spec that declares nothing.
pub fn bare_spec(op: &str) -> ComponentSpec {
    serde_json::from_value(json!({ "op": op, "app_data": {} })).expect("bare spec")
}

// =============================================================================
// Pipeline builders
// =============================================================================

pub fn execution_node(id: &str, op: &str, params: Option<Value>) -> Value {
    let mut app_data = json!({ "ui_data": { "label": id } });
    if let Some(params) = params {
        app_data["component_parameters"] = params;
    }
    json!({ "id": id, "type": "execution_node", "op": op, "app_data": app_data })
}

pub fn pipeline(nodes: Vec<Value>) -> Pipeline {
    serde_json::from_value(json!({ "nodes": nodes })).expect("pipeline")
}

pub fn document(nodes: Vec<Value>) -> String {
    json!({ "pipelines": [{ "nodes": nodes }] }).to_string()
}

// =============================================================================
// Assertions
// =============================================================================

pub fn kinds(problems: &[Problem]) -> Vec<ProblemKind> {
    problems.iter().map(Problem::kind).collect()
}

pub fn properties(problems: &[Problem]) -> Vec<&str> {
    problems.iter().filter_map(Problem::property).collect()
}
