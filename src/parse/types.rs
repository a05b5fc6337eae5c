//! Rust types for the pipeline-flow document the editor submits.
//!
//! Only the fields validation reads are modelled; everything else in the
//! document (positions, styling, runtime metadata) is ignored by serde.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// DOCUMENT
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineDocument {
    pub pipelines: Vec<Pipeline>,
    #[serde(default)]
    pub primary_pipeline: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pipeline {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub nodes: Vec<Node>,
}

impl Pipeline {
    /// Nodes that carry their own component parameters. Super-nodes only wrap
    /// a nested pipeline and are skipped.
    pub fn executable_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| !n.is_super_node())
    }
}

// =============================================================================
// NODES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    Execution,
    Super,
    Other(String),
}

/// A node without a `type` is neither executed nor expanded.
impl Default for NodeKind {
    fn default() -> Self {
        NodeKind::Other(String::new())
    }
}

impl From<String> for NodeKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "execution_node" => NodeKind::Execution,
            "super_node" => NodeKind::Super,
            _ => NodeKind::Other(s),
        }
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Execution => "execution_node".into(),
            NodeKind::Super => "super_node".into(),
            NodeKind::Other(s) => s,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: NodeKind,
    #[serde(default)]
    pub op: Option<String>,
    #[serde(default)]
    pub app_data: Option<NodeAppData>,
    #[serde(default)]
    pub inputs: Vec<Port>,
    #[serde(default)]
    pub subflow_ref: Option<SubflowRef>,
}

impl Node {
    pub fn is_super_node(&self) -> bool {
        self.kind == NodeKind::Super
    }

    pub fn is_execution_node(&self) -> bool {
        self.kind == NodeKind::Execution
    }

    /// Display name shown in the editor, falling back to the node id.
    pub fn label(&self) -> &str {
        self.app_data
            .as_ref()
            .and_then(|a| a.ui_data.as_ref())
            .and_then(|u| u.label.as_deref())
            .unwrap_or(&self.id)
    }

    /// Configured value for a component parameter, if the node has one.
    pub fn parameter(&self, key: &str) -> Option<&Value> {
        self.app_data
            .as_ref()
            .and_then(|a| a.component_parameters.as_ref())
            .and_then(|params| params.get(key))
    }

    /// Every link feeding this node, across all input ports.
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.inputs.iter().flat_map(|port| port.links.iter())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeAppData {
    #[serde(default)]
    pub ui_data: Option<UiData>,
    #[serde(default)]
    pub component_parameters: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiData {
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubflowRef {
    pub pipeline_id_ref: String,
}

// =============================================================================
// PORTS & LINKS
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Port {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Directed edge `node_id_ref -> owning node`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    /// Empty when the editor didn't assign one.
    #[serde(default)]
    pub id: String,
    pub node_id_ref: String,
    #[serde(default)]
    pub port_id_ref: Option<String>,
}
