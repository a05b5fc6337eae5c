//! Validation options.

use serde::{Deserialize, Serialize};

/// Prefix the editor reserves for UI-side parameter refs whose value is
/// stored under the unprefixed key (`elyra_filename` -> `filename`).
pub const DEFAULT_RESERVED_PREFIX: &str = "elyra_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Stripped from a parameter id to find its storage key when the spec
    /// declares no explicit `storage_key`. `None` disables the fallback.
    pub reserved_prefix: Option<String>,

    pub check_cycles: bool,
    pub check_references: bool,
    pub check_properties: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            reserved_prefix: Some(DEFAULT_RESERVED_PREFIX.into()),
            check_cycles: true,
            check_references: true,
            check_properties: true,
        }
    }
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reserved parameter prefix
    pub fn with_reserved_prefix(mut self, prefix: Option<String>) -> Self {
        self.reserved_prefix = prefix;
        self
    }

    /// Enable or disable cycle detection
    pub fn check_cycles(mut self, enable: bool) -> Self {
        self.check_cycles = enable;
        self
    }

    /// Enable or disable link reference resolution
    pub fn check_references(mut self, enable: bool) -> Self {
        self.check_references = enable;
        self
    }

    /// Enable or disable required-property checks
    pub fn check_properties(mut self, enable: bool) -> Self {
        self.check_properties = enable;
        self
    }
}
