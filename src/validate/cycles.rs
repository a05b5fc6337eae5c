//! Circular reference detection over the link graph.

use petgraph::algo::tarjan_scc;
use petgraph::graph::NodeIndex;

use crate::parse::graph::PipelineGraph;
use crate::problem::Problem;

/// One `circularReference` problem per node sitting on a cycle. A node that
/// belongs to several cycles is still reported once.
pub fn detect_cycles(graph: &PipelineGraph) -> Vec<Problem> {
    let mut cycles: Vec<Vec<NodeIndex>> = tarjan_scc(&graph.graph)
        .into_iter()
        .filter(|scc| scc.len() > 1 || graph.graph.contains_edge(scc[0], scc[0]))
        .collect();

    // tarjan_scc emits components in reverse topological order; report them
    // in document order instead.
    for scc in &mut cycles {
        scc.sort();
    }
    cycles.sort_by_key(|scc| scc[0]);

    let mut problems = Vec::new();
    for idx in cycles.into_iter().flatten() {
        let node = graph.node_at(idx);
        let pipeline = graph.pipeline_at(idx);
        problems.push(Problem::circular_reference(
            pipeline.id.as_deref(),
            &node.id,
            format!("Node '{}' is part of a circular reference", node.label()),
        ));
    }

    tracing::trace!(count = problems.len(), "cycle detection finished");
    problems
}
