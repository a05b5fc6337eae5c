//! Required-property checks for execution nodes.
//!
//! Split in two halves that don't know about each other: what a spec
//! requires (`required_parameters`, `storage_key`) and what a node provides
//! (`Node::parameter`, `is_missing`).

use std::collections::HashSet;

use serde_json::Value;

use crate::config::ValidationOptions;
use crate::parse::spec::{ComponentSpec, find_spec};
use crate::parse::types::{Node, Pipeline};
use crate::problem::Problem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredBy {
    /// `uihints.parameter_info[].data.required = true`
    UiHint,
    /// Non-empty default in `current_parameters`.
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredParameter {
    pub id: String,
    pub source: RequiredBy,
}

/// Union of ui-hint required flags and declared defaults, de-duplicated by
/// id. Ui-hint entries come first, in declaration order.
pub fn required_parameters(spec: &ComponentSpec) -> Vec<RequiredParameter> {
    let mut seen = HashSet::new();
    let mut required = Vec::new();

    for info in spec.parameter_info().iter().filter(|i| i.is_required()) {
        if seen.insert(info.parameter_ref.as_str()) {
            required.push(RequiredParameter {
                id: info.parameter_ref.clone(),
                source: RequiredBy::UiHint,
            });
        }
    }

    if let Some(props) = spec.properties() {
        for (id, default) in &props.current_parameters {
            if !is_missing(Some(default)) && seen.insert(id.as_str()) {
                required.push(RequiredParameter {
                    id: id.clone(),
                    source: RequiredBy::Default,
                });
            }
        }
    }

    required
}

/// Key under which the value for parameter `id` is stored in a node's
/// `component_parameters`.
pub fn storage_key<'a>(spec: &'a ComponentSpec, id: &'a str, options: &ValidationOptions) -> &'a str {
    let hinted = spec
        .parameter_info()
        .iter()
        .find(|info| info.parameter_ref == id)
        .and_then(|info| info.data.as_ref())
        .and_then(|data| data.storage_key.as_deref());
    if let Some(key) = hinted {
        return key;
    }

    if let Some(key) = spec.parameter_decl(id).and_then(|d| d.storage_key.as_deref()) {
        return key;
    }

    options
        .reserved_prefix
        .as_deref()
        .filter(|prefix| !prefix.is_empty())
        .and_then(|prefix| id.strip_prefix(prefix))
        .filter(|stripped| !stripped.is_empty())
        .unwrap_or(id)
}

/// Absent, null and the empty string all count as "not provided".
pub fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Property problems for a single node.
pub fn check_node(node: &Node, specs: &[ComponentSpec], options: &ValidationOptions) -> Vec<Problem> {
    check_node_in(None, node, specs, options)
}

/// Property problems for every node of one pipeline. Graph-level checks are
/// not run.
pub fn check_pipeline(
    pipeline: &Pipeline,
    specs: &[ComponentSpec],
    options: &ValidationOptions,
) -> Vec<Problem> {
    pipeline
        .executable_nodes()
        .flat_map(|node| check_node_in(pipeline.id.as_deref(), node, specs, options))
        .collect()
}

pub(crate) fn check_node_in(
    pipeline_id: Option<&str>,
    node: &Node,
    specs: &[ComponentSpec],
    options: &ValidationOptions,
) -> Vec<Problem> {
    if node.is_super_node() {
        return vec![];
    }
    let Some(spec) = node.op.as_deref().and_then(|op| find_spec(specs, op)) else {
        return vec![];
    };

    let mut problems = Vec::new();
    for param in required_parameters(spec) {
        let key = storage_key(spec, &param.id, options);
        if !is_missing(node.parameter(key)) {
            continue;
        }
        let label = spec.parameter_label(&param.id).unwrap_or(&param.id);
        problems.push(Problem::missing_property(
            pipeline_id,
            &node.id,
            &param.id,
            format!("Node '{}' is missing required property '{}'", node.label(), label),
        ));
    }
    problems
}
