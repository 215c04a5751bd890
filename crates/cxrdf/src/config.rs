use crate::error::{ExportError, Result};
use crate::policy::Policy;
use serde::{Deserialize, Serialize};

/// Configuration for an export run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Vocabulary policy deciding the triple shapes
    pub policy: Policy,

    /// Emit `rdfs:label` for node names and the network `name` attribute
    pub label_nodes: bool,

    /// Bind `@context` prefixes on the output graph (serialization only)
    pub bind_context_prefixes: bool,

    /// Emit one `cx:namespace` entity per `@context` declaration,
    /// linked from the document
    pub emit_namespace_entities: bool,

    /// Bind the `cxa` and `cxi` prefixes for minted predicates
    pub bind_minted_prefixes: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            policy: Policy::Aspect,
            label_nodes: true,
            bind_context_prefixes: true,
            emit_namespace_entities: true,
            bind_minted_prefixes: true,
        }
    }
}

impl ExportConfig {
    /// Default configuration for a given policy
    pub fn for_policy(policy: Policy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    /// Identity and structure only: no labels, no namespace entities or bindings
    pub fn minimal() -> Self {
        Self {
            label_nodes: false,
            bind_context_prefixes: false,
            emit_namespace_entities: false,
            bind_minted_prefixes: false,
            ..Default::default()
        }
    }

    /// Load a configuration from JSON; missing fields take their defaults
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Config`] if the text is not a valid config.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| ExportError::Config {
            message: e.to_string(),
        })
    }

    /// Select the policy
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Enable or disable labels
    pub fn with_labels(mut self, label_nodes: bool) -> Self {
        self.label_nodes = label_nodes;
        self
    }

    /// Enable or disable `@context` handling (bindings and namespace entities)
    pub fn with_context(mut self, enabled: bool) -> Self {
        self.bind_context_prefixes = enabled;
        self.emit_namespace_entities = enabled;
        self
    }
}
