//! Component specifications: one per node `op`, declaring the parameters a
//! node of that kind recognizes, their defaults and their UI hints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentSpec {
    pub op: String,
    #[serde(default)]
    pub app_data: SpecAppData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpecAppData {
    #[serde(default)]
    pub properties: Option<SpecProperties>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpecProperties {
    /// Parameter id -> default value.
    #[serde(default)]
    pub current_parameters: Map<String, Value>,
    #[serde(default)]
    pub parameters: Vec<ParameterDecl>,
    #[serde(default)]
    pub uihints: Option<UiHints>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterDecl {
    pub id: String,
    /// Key the configured value is stored under in `component_parameters`,
    /// when it differs from `id`.
    #[serde(default)]
    pub storage_key: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiHints {
    #[serde(default)]
    pub parameter_info: Vec<ParameterInfo>,
    #[serde(default)]
    pub group_info: Vec<GroupInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterInfo {
    pub parameter_ref: String,
    #[serde(default)]
    pub label: Option<LocalizedText>,
    #[serde(default)]
    pub data: Option<ParameterData>,
}

impl ParameterInfo {
    pub fn is_required(&self) -> bool {
        self.data.as_ref().is_some_and(|d| d.required)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParameterData {
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub storage_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalizedText {
    pub default: String,
}

/// Panel layout metadata. Carried for shape fidelity, never read by validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    pub group_type: Option<String>,
    #[serde(default)]
    pub parameter_refs: Vec<String>,
    #[serde(default)]
    pub group_info: Vec<GroupInfo>,
}

impl ComponentSpec {
    pub fn properties(&self) -> Option<&SpecProperties> {
        self.app_data.properties.as_ref()
    }

    pub fn parameter_info(&self) -> &[ParameterInfo] {
        self.properties()
            .and_then(|p| p.uihints.as_ref())
            .map(|h| h.parameter_info.as_slice())
            .unwrap_or_default()
    }

    pub fn parameter_decl(&self, id: &str) -> Option<&ParameterDecl> {
        self.properties()?.parameters.iter().find(|p| p.id == id)
    }

    /// Label shown in the properties panel for `id`.
    pub fn parameter_label(&self, id: &str) -> Option<&str> {
        self.parameter_info()
            .iter()
            .find(|info| info.parameter_ref == id)
            .and_then(|info| info.label.as_ref())
            .map(|l| l.default.as_str())
    }
}

/// Look up the spec for a node `op`.
pub fn find_spec<'a>(specs: &'a [ComponentSpec], op: &str) -> Option<&'a ComponentSpec> {
    specs.iter().find(|s| s.op == op)
}
