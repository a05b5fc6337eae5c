//! petgraph-based view of the link graph across every pipeline in a document.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use super::types::{Node, Pipeline, PipelineDocument};

/// Vertex payload: where the node lives in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRef {
    pub pipeline: usize,
    pub node: usize,
    pub id: String,
}

pub struct PipelineGraph<'a> {
    doc: &'a PipelineDocument,
    pub graph: DiGraph<NodeRef, String>,
    pub node_indices: HashMap<String, NodeIndex>,
    local_indices: Vec<HashMap<&'a str, NodeIndex>>,
}

impl<'a> PipelineGraph<'a> {
    /// One vertex per node in document order, one edge per link whose
    /// `node_id_ref` names a node somewhere in the document (see
    /// `resolve_link`).
    pub fn build(doc: &'a PipelineDocument) -> Self {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();
        let mut local_indices: Vec<HashMap<&'a str, NodeIndex>> = Vec::new();
        let mut vertices = Vec::new();

        for (p, pipeline) in doc.pipelines.iter().enumerate() {
            let mut local = HashMap::new();
            for (n, node) in pipeline.nodes.iter().enumerate() {
                let idx = graph.add_node(NodeRef {
                    pipeline: p,
                    node: n,
                    id: node.id.clone(),
                });
                vertices.push((p, idx, node));
                local.entry(node.id.as_str()).or_insert(idx);
                if node_indices.contains_key(&node.id) {
                    tracing::debug!(node_id = %node.id, pipeline = p, "duplicate node id, keeping first occurrence");
                    continue;
                }
                node_indices.insert(node.id.clone(), idx);
            }
            local_indices.push(local);
        }

        let mut built = PipelineGraph {
            doc,
            graph,
            node_indices,
            local_indices,
        };

        for (p, consumer, node) in vertices {
            for link in node.links() {
                if let Some(source) = built.resolve_link(p, &link.node_id_ref) {
                    built.graph.add_edge(source, consumer, link.id.clone());
                }
            }
        }

        tracing::trace!(
            nodes = built.graph.node_count(),
            edges = built.graph.edge_count(),
            "built pipeline graph"
        );

        built
    }

    /// Vertex a link owned by pipeline `pipeline` points at: a node of the
    /// same pipeline first, then the first node with that id document-wide.
    pub fn resolve_link(&self, pipeline: usize, node_id_ref: &str) -> Option<NodeIndex> {
        self.local_indices
            .get(pipeline)
            .and_then(|local| local.get(node_id_ref))
            .or_else(|| self.node_indices.get(node_id_ref))
            .copied()
    }

    pub fn document(&self) -> &'a PipelineDocument {
        self.doc
    }

    pub fn contains(&self, node_id: &str) -> bool {
        self.node_indices.contains_key(node_id)
    }

    pub fn node(&self, node_id: &str) -> Option<&'a Node> {
        let &idx = self.node_indices.get(node_id)?;
        Some(self.node_at(idx))
    }

    pub fn node_at(&self, idx: NodeIndex) -> &'a Node {
        let r = &self.graph[idx];
        &self.doc.pipelines[r.pipeline].nodes[r.node]
    }

    pub fn pipeline_at(&self, idx: NodeIndex) -> &'a Pipeline {
        &self.doc.pipelines[self.graph[idx].pipeline]
    }

    pub fn has_pipeline(&self, pipeline_id: &str) -> bool {
        self.doc
            .pipelines
            .iter()
            .any(|p| p.id.as_deref() == Some(pipeline_id))
    }

    /// Nodes whose output `node_id` consumes.
    pub fn predecessors(&self, node_id: &str) -> Vec<&str> {
        self.neighbors(node_id, petgraph::Direction::Incoming)
    }

    /// Nodes consuming the output of `node_id`.
    pub fn successors(&self, node_id: &str) -> Vec<&str> {
        self.neighbors(node_id, petgraph::Direction::Outgoing)
    }

    fn neighbors(&self, node_id: &str, dir: petgraph::Direction) -> Vec<&str> {
        let Some(&idx) = self.node_indices.get(node_id) else {
            return vec![];
        };
        let mut ids: Vec<&str> = self
            .graph
            .neighbors_directed(idx, dir)
            .map(|n| self.graph[n].id.as_str())
            .collect();
        // petgraph walks adjacency newest-first
        ids.reverse();
        ids
    }
}
