//! Validation findings handed back to the editor.

use serde::{Deserialize, Serialize};

/// One finding. `info` carries the machine-readable kind and the identifiers
/// the editor needs to highlight the offending node, link or property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub message: String,
    pub info: ProblemInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProblemInfo {
    #[serde(rename = "missingComponent")]
    MissingComponent {
        #[serde(rename = "pipelineID")]
        pipeline_id: Option<String>,
        #[serde(rename = "nodeID")]
        node_id: String,
        #[serde(rename = "linkID")]
        link_id: String,
        #[serde(rename = "nodeIDRef")]
        node_id_ref: String,
    },
    #[serde(rename = "circularReference")]
    CircularReference {
        #[serde(rename = "pipelineID")]
        pipeline_id: Option<String>,
        #[serde(rename = "nodeID")]
        node_id: String,
    },
    #[serde(rename = "missingProperty")]
    MissingProperty {
        #[serde(rename = "pipelineID")]
        pipeline_id: Option<String>,
        #[serde(rename = "nodeID")]
        node_id: String,
        property: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemKind {
    MissingComponent,
    CircularReference,
    MissingProperty,
}

impl std::fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProblemKind::MissingComponent => write!(f, "missingComponent"),
            ProblemKind::CircularReference => write!(f, "circularReference"),
            ProblemKind::MissingProperty => write!(f, "missingProperty"),
        }
    }
}

impl Problem {
    pub fn missing_component(
        pipeline_id: Option<&str>,
        node_id: &str,
        link_id: &str,
        node_id_ref: &str,
        message: impl Into<String>,
    ) -> Self {
        Problem {
            message: message.into(),
            info: ProblemInfo::MissingComponent {
                pipeline_id: pipeline_id.map(str::to_string),
                node_id: node_id.into(),
                link_id: link_id.into(),
                node_id_ref: node_id_ref.into(),
            },
        }
    }

    pub fn circular_reference(
        pipeline_id: Option<&str>,
        node_id: &str,
        message: impl Into<String>,
    ) -> Self {
        Problem {
            message: message.into(),
            info: ProblemInfo::CircularReference {
                pipeline_id: pipeline_id.map(str::to_string),
                node_id: node_id.into(),
            },
        }
    }

    pub fn missing_property(
        pipeline_id: Option<&str>,
        node_id: &str,
        property: &str,
        message: impl Into<String>,
    ) -> Self {
        Problem {
            message: message.into(),
            info: ProblemInfo::MissingProperty {
                pipeline_id: pipeline_id.map(str::to_string),
                node_id: node_id.into(),
                property: property.into(),
            },
        }
    }

    pub fn kind(&self) -> ProblemKind {
        match self.info {
            ProblemInfo::MissingComponent { .. } => ProblemKind::MissingComponent,
            ProblemInfo::CircularReference { .. } => ProblemKind::CircularReference,
            ProblemInfo::MissingProperty { .. } => ProblemKind::MissingProperty,
        }
    }

    pub fn node_id(&self) -> &str {
        match &self.info {
            ProblemInfo::MissingComponent { node_id, .. }
            | ProblemInfo::CircularReference { node_id, .. }
            | ProblemInfo::MissingProperty { node_id, .. } => node_id,
        }
    }

    /// The parameter id for `missingProperty` problems.
    pub fn property(&self) -> Option<&str> {
        match &self.info {
            ProblemInfo::MissingProperty { property, .. } => Some(property),
            _ => None,
        }
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {} (node '{}')", self.kind(), self.message, self.node_id())
    }
}
