//! Link target resolution.

use crate::parse::graph::PipelineGraph;
use crate::parse::spec::{ComponentSpec, find_spec};
use crate::parse::types::{Node, NodeKind};
use crate::problem::Problem;

/// One `missingComponent` problem per link whose target can't be resolved to
/// a component-backed node, in document order (pipelines, nodes, inputs,
/// links).
///
/// A target is component-backed when it exists and, for an execution node,
/// its `op` is in `specs`; for a super-node, its subflow pipeline is in the
/// document. Targets are looked up in the link's own pipeline first.
pub fn resolve_refs(graph: &PipelineGraph, specs: &[ComponentSpec]) -> Vec<Problem> {
    let mut problems = Vec::new();

    for (p, pipeline) in graph.document().pipelines.iter().enumerate() {
        for (node, link) in pipeline.nodes.iter().flat_map(|n| n.links().map(move |l| (n, l))) {
            let target = graph
                .resolve_link(p, &link.node_id_ref)
                .map(|idx| graph.node_at(idx));
            let message = match target {
                None => format!(
                    "Node '{}' references node '{}' which does not exist",
                    node.label(),
                    link.node_id_ref
                ),
                Some(target) => match unresolved_component(graph, target, specs) {
                    None => continue,
                    Some(reason) => format!(
                        "Node '{}' references node '{}' whose component {}",
                        node.label(),
                        target.label(),
                        reason
                    ),
                },
            };
            problems.push(Problem::missing_component(
                pipeline.id.as_deref(),
                &node.id,
                &link.id,
                &link.node_id_ref,
                message,
            ));
        }
    }

    tracing::trace!(count = problems.len(), "reference resolution finished");
    problems
}

/// Why `target` isn't backed by a known component, or `None` if it is.
fn unresolved_component(
    graph: &PipelineGraph,
    target: &Node,
    specs: &[ComponentSpec],
) -> Option<String> {
    match &target.kind {
        NodeKind::Execution => match target.op.as_deref() {
            None => Some("is not specified".into()),
            Some(op) if find_spec(specs, op).is_none() => {
                Some(format!("'{}' is not available", op))
            }
            Some(_) => None,
        },
        NodeKind::Super => match &target.subflow_ref {
            Some(sub) if !graph.has_pipeline(&sub.pipeline_id_ref) => Some(format!(
                "pipeline '{}' is not in the document",
                sub.pipeline_id_ref
            )),
            _ => None,
        },
        NodeKind::Other(_) => None,
    }
}
