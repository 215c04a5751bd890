//! Prefix → namespace bindings carried by a graph.
//!
//! Bindings only affect serialization; stored IRIs are always expanded.

use crate::error::{GraphError, Result};
use oxrdf::NamedNode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ordered prefix map for one graph instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceMap {
    data: BTreeMap<String, String>,
}

impl NamespaceMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            data: BTreeMap::new(),
        }
    }

    /// Builder pattern: bind a prefix and return self.
    ///
    /// # Errors
    ///
    /// Same as [`NamespaceMap::bind`].
    pub fn with(mut self, prefix: impl Into<String>, namespace: impl Into<String>) -> Result<Self> {
        self.bind(prefix, namespace)?;
        Ok(self)
    }

    /// Bind `prefix` to `namespace`, replacing any previous binding.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidPrefix`] if the prefix is not a Turtle
    /// `PN_PREFIX` (the empty prefix is allowed) and [`GraphError::InvalidIri`]
    /// if the namespace is not an absolute IRI.
    pub fn bind(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) -> Result<()> {
        let prefix = prefix.into();
        let namespace = namespace.into();
        if !is_valid_prefix(&prefix) {
            return Err(GraphError::InvalidPrefix { prefix });
        }
        let namespace = NamedNode::new(namespace.as_str())
            .map_err(|e| GraphError::invalid_iri(namespace, e))?
            .into_string();
        self.data.insert(prefix, namespace);
        Ok(())
    }

    /// Namespace bound to `prefix`.
    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.data.get(prefix).map(String::as_str)
    }

    /// Check if a prefix is bound.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.data.contains_key(prefix)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if there are no bindings.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate bindings in prefix order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data.iter().map(|(p, ns)| (p.as_str(), ns.as_str()))
    }

    /// Expand a `prefix:local` name to an IRI.
    ///
    /// Returns `None` for unbound prefixes and for expansions that are not
    /// valid IRIs.
    pub fn expand(&self, curie: &str) -> Option<NamedNode> {
        let (prefix, local) = curie.split_once(':')?;
        let namespace = self.get(prefix)?;
        NamedNode::new(format!("{namespace}{local}")).ok()
    }
}

/// Turtle `PN_PREFIX` (ASCII subset), or empty.
pub fn is_valid_prefix(prefix: &str) -> bool {
    if prefix.is_empty() {
        return true;
    }
    let mut chars = prefix.chars();
    let first_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    first_ok
        && !prefix.ends_with('.')
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
