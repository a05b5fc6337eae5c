//! Integration tests for the node-level entry point (property checks only).

#[allow(dead_code)]
mod helpers;

use helpers::*;
use pipeline_validator::{ProblemKind, ValidationOptions, check_node, check_pipeline};
use serde_json::json;

fn node_problems(
    nodes: Vec<serde_json::Value>,
    specs: &[pipeline_validator::parse::ComponentSpec],
) -> Vec<pipeline_validator::Problem> {
    check_pipeline(&pipeline(nodes), specs, &ValidationOptions::default())
}

#[test]
fn skips_supernodes() {
    let nodes = vec![json!({
        "id": "node-1",
        "type": "super_node",
        "op": "execute-notebook-node",
        "app_data": { "ui_data": { "label": "Node 1" } }
    })];
    assert!(node_problems(nodes, &[node_spec()]).is_empty());
}

#[test]
fn finds_missing_properties() {
    let nodes = vec![execution_node("node-1", "execute-notebook-node", None)];
    let problems = node_problems(nodes, &[node_spec()]);
    assert_eq!(kinds(&problems), vec![ProblemKind::MissingProperty]);
    assert_eq!(properties(&problems), vec!["elyra_filename"]);
    assert_eq!(problems[0].node_id(), "node-1");
}

#[test]
fn required_default_without_override_is_missing() {
    let nodes = vec![execution_node("node-1", "execute-notebook-node", None)];
    let spec = spec_with_default("execute-notebook-node", "has_default", "default");
    let problems = node_problems(nodes, &[spec]);
    assert_eq!(kinds(&problems), vec![ProblemKind::MissingProperty]);
    assert_eq!(properties(&problems), vec!["has_default"]);
}

#[test]
fn default_alone_makes_a_parameter_required() {
    let spec: pipeline_validator::parse::ComponentSpec = serde_json::from_value(json!({
        "op": "op",
        "app_data": { "properties": { "current_parameters": { "timeout": 30 } } }
    }))
    .unwrap();
    let problems = node_problems(vec![execution_node("n", "op", None)], &[spec.clone()]);
    assert_eq!(properties(&problems), vec!["timeout"]);

    let configured = execution_node("n", "op", Some(json!({ "timeout": 60 })));
    assert!(node_problems(vec![configured], &[spec]).is_empty());
}

#[test]
fn empty_strings_count_as_missing() {
    let nodes = vec![execution_node(
        "node-1",
        "execute-notebook-node",
        Some(json!({ "filename": "", "runtime_image": "" })),
    )];
    let problems = node_problems(nodes, &[node_spec()]);
    assert_eq!(kinds(&problems), vec![ProblemKind::MissingProperty]);
    assert_eq!(properties(&problems), vec!["elyra_filename"]);
}

#[test]
fn provided_properties_have_no_problems() {
    let nodes = vec![execution_node(
        "node-1",
        "execute-notebook-node",
        Some(json!({ "filename": "example.py", "runtime_image": "example/runtime:1.2.3" })),
    )];
    assert!(node_problems(nodes, &[node_spec()]).is_empty());
}

#[test]
fn no_required_properties_no_problems() {
    let nodes = vec![execution_node("node-1", "execute-notebook-node", None)];
    assert!(node_problems(nodes, &[bare_spec("execute-notebook-node")]).is_empty());
}

#[test]
fn extra_properties_are_ignored() {
    let mut node = execution_node(
        "node-1",
        "execute-notebook-node",
        Some(json!({ "filename": "example.py", "unknown": "123" })),
    );
    node["app_data"]["fake"] = json!("123");
    assert!(node_problems(vec![node.clone()], &[node_spec()]).is_empty());
    assert!(node_problems(vec![node], &[bare_spec("execute-notebook-node")]).is_empty());
}

#[test]
fn one_problem_per_node() {
    let nodes = vec![
        execution_node("a", "execute-notebook-node", None),
        execution_node("b", "execute-notebook-node", Some(json!({ "filename": "b.py" }))),
        execution_node("c", "execute-notebook-node", Some(json!({ "filename": "" }))),
    ];
    let problems = node_problems(nodes, &[node_spec()]);
    let ids: Vec<&str> = problems.iter().map(|p| p.node_id()).collect();
    assert_eq!(ids, vec!["a", "c"]);
}

#[test]
fn check_node_matches_pipeline_check() {
    let node: pipeline_validator::parse::Node =
        serde_json::from_value(execution_node("n", "execute-notebook-node", None)).unwrap();
    let problems = check_node(&node, &[node_spec()], &ValidationOptions::default());
    assert_eq!(properties(&problems), vec!["elyra_filename"]);
}

#[test]
fn missing_property_json_shape() {
    let nodes = vec![execution_node("node-1", "execute-notebook-node", None)];
    let problems = node_problems(nodes, &[node_spec()]);
    insta::assert_json_snapshot!(problems, @r#"
    [
      {
        "message": "Node 'node-1' is missing required property 'Filename'",
        "info": {
          "type": "missingProperty",
          "pipelineID": null,
          "nodeID": "node-1",
          "property": "elyra_filename"
        }
      }
    ]
    "#);
}
