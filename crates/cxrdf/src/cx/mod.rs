//! Typed view of a CX document.
//!
//! A CX document is a JSON array of aspect fragments, each an object mapping
//! an aspect name to a list of records:
//!
//! ```text
//! [
//!   {"nodes": [{"@id": 0, "n": "A"}]},
//!   {"edges": [{"@id": 0, "s": 0, "t": 1, "i": "increases"}]},
//!   {"nodeAttributes": [{"po": 0, "n": "Color", "v": "Red"}]}
//! ]
//! ```
//!
//! Fragments of the same aspect are concatenated in document order. Aspects
//! the exporter has no mapping for are counted and skipped.

mod records;
mod value;

pub use records::{
    CxAttribute, CxCitation, CxCitationLink, CxEdge, CxId, CxNamespace, CxNetworkAttribute,
    CxNode, CxSupport, CxSupportLink,
};
pub use value::AttributeValue;

use crate::error::{ExportError, Result};
use log::{debug, trace};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;

/// Aspect names as they appear in CX.
pub mod aspect {
    /// Pseudo-aspect name used in errors about the envelope itself
    pub const DOCUMENT: &str = "<document>";
    /// `nodes`
    pub const NODES: &str = "nodes";
    /// `edges`
    pub const EDGES: &str = "edges";
    /// `nodeAttributes`
    pub const NODE_ATTRIBUTES: &str = "nodeAttributes";
    /// `edgeAttributes`
    pub const EDGE_ATTRIBUTES: &str = "edgeAttributes";
    /// `networkAttributes`
    pub const NETWORK_ATTRIBUTES: &str = "networkAttributes";
    /// `citations`
    pub const CITATIONS: &str = "citations";
    /// `supports`
    pub const SUPPORTS: &str = "supports";
    /// `edgeCitations`
    pub const EDGE_CITATIONS: &str = "edgeCitations";
    /// `edgeSupports`
    pub const EDGE_SUPPORTS: &str = "edgeSupports";
    /// `nodeCitations`
    pub const NODE_CITATIONS: &str = "nodeCitations";
    /// `nodeSupports`
    pub const NODE_SUPPORTS: &str = "nodeSupports";
    /// `@context`
    pub const CONTEXT: &str = "@context";
}

/// All recognized aspects of one CX document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CxDocument {
    /// `nodes`
    pub nodes: Vec<CxNode>,
    /// `edges`
    pub edges: Vec<CxEdge>,
    /// `nodeAttributes`
    pub node_attributes: Vec<CxAttribute>,
    /// `edgeAttributes`
    pub edge_attributes: Vec<CxAttribute>,
    /// `networkAttributes`
    pub network_attributes: Vec<CxNetworkAttribute>,
    /// `citations`
    pub citations: Vec<CxCitation>,
    /// `supports`
    pub supports: Vec<CxSupport>,
    /// `edgeCitations`
    pub edge_citations: Vec<CxCitationLink>,
    /// `edgeSupports`
    pub edge_supports: Vec<CxSupportLink>,
    /// `nodeCitations`
    pub node_citations: Vec<CxCitationLink>,
    /// `nodeSupports`
    pub node_supports: Vec<CxSupportLink>,
    /// `@context` declarations
    pub namespaces: Vec<CxNamespace>,
    /// Records read per aspect name (recognized or not)
    pub aspect_counts: BTreeMap<String, usize>,
    /// Names of aspects that were skipped, in first-seen order
    pub skipped_aspects: Vec<String>,
}

impl CxDocument {
    /// Read a CX document from parsed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Structure`] if the envelope is not an array of
    /// objects, an aspect body is not an array, or a record of a recognized
    /// aspect is missing a required field or has the wrong type.
    pub fn from_value(value: &Value) -> Result<Self> {
        let fragments = value.as_array().ok_or_else(|| {
            ExportError::structure(aspect::DOCUMENT, "expected a JSON array of aspects")
        })?;

        let mut document = CxDocument::default();
        for (index, fragment) in fragments.iter().enumerate() {
            let fragment = fragment.as_object().ok_or_else(|| {
                ExportError::structure(
                    aspect::DOCUMENT,
                    format!("aspect entry {index} is not an object"),
                )
            })?;
            for (name, body) in fragment {
                document.read_aspect(name, body)?;
            }
        }

        debug!(
            "Read CX document: {} nodes, {} edges, {} citations, {} supports",
            document.nodes.len(),
            document.edges.len(),
            document.citations.len(),
            document.supports.len()
        );
        Ok(document)
    }

    /// Parse CX JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Json`] for malformed JSON, otherwise as
    /// [`CxDocument::from_value`].
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(text).map_err(|source| ExportError::Json { source })?;
        Self::from_value(&value)
    }

    /// Total number of records across all aspects.
    pub fn record_count(&self) -> usize {
        self.aspect_counts.values().sum()
    }

    fn read_aspect(&mut self, name: &str, body: &Value) -> Result<()> {
        trace!("Reading aspect '{name}'");
        let count = match name {
            aspect::NODES => extend(&mut self.nodes, parse_records(name, body)?),
            aspect::EDGES => extend(&mut self.edges, parse_records(name, body)?),
            aspect::NODE_ATTRIBUTES => {
                extend(&mut self.node_attributes, parse_records(name, body)?)
            }
            aspect::EDGE_ATTRIBUTES => {
                extend(&mut self.edge_attributes, parse_records(name, body)?)
            }
            aspect::NETWORK_ATTRIBUTES => {
                extend(&mut self.network_attributes, parse_records(name, body)?)
            }
            aspect::CITATIONS => extend(&mut self.citations, parse_records(name, body)?),
            aspect::SUPPORTS => extend(&mut self.supports, parse_records(name, body)?),
            aspect::EDGE_CITATIONS => {
                extend(&mut self.edge_citations, parse_records(name, body)?)
            }
            aspect::EDGE_SUPPORTS => extend(&mut self.edge_supports, parse_records(name, body)?),
            aspect::NODE_CITATIONS => {
                extend(&mut self.node_citations, parse_records(name, body)?)
            }
            aspect::NODE_SUPPORTS => extend(&mut self.node_supports, parse_records(name, body)?),
            aspect::CONTEXT => extend(&mut self.namespaces, parse_context(body)?),
            _ => {
                if !self.skipped_aspects.iter().any(|s| s == name) {
                    debug!("Skipping unsupported aspect '{name}'");
                    self.skipped_aspects.push(name.to_string());
                }
                body.as_array().map_or(1, Vec::len)
            }
        };

        *self.aspect_counts.entry(name.to_string()).or_default() += count;
        Ok(())
    }
}

fn extend<T>(target: &mut Vec<T>, records: Vec<T>) -> usize {
    let count = records.len();
    target.extend(records);
    count
}

fn parse_records<T: DeserializeOwned>(name: &str, body: &Value) -> Result<Vec<T>> {
    let records = body
        .as_array()
        .ok_or_else(|| ExportError::structure(name, "aspect body is not an array"))?;

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            T::deserialize(record)
                .map_err(|e| ExportError::structure(name, format!("record {index}: {e}")))
        })
        .collect()
}

// `@context` is a list of prefix maps; a bare map is accepted too
fn parse_context(body: &Value) -> Result<Vec<CxNamespace>> {
    let maps: Vec<&serde_json::Map<String, Value>> = match body {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                item.as_object().ok_or_else(|| {
                    ExportError::structure(
                        aspect::CONTEXT,
                        format!("record {index}: expected a prefix map"),
                    )
                })
            })
            .collect::<Result<_>>()?,
        Value::Object(map) => vec![map],
        _ => {
            return Err(ExportError::structure(
                aspect::CONTEXT,
                "aspect body is not an array",
            ))
        }
    };

    let mut namespaces = Vec::new();
    for map in maps {
        for (prefix, uri) in map {
            let uri = uri.as_str().ok_or_else(|| {
                ExportError::structure(
                    aspect::CONTEXT,
                    format!("namespace for prefix '{prefix}' is not a string"),
                )
            })?;
            namespaces.push(CxNamespace {
                prefix: prefix.clone(),
                uri: uri.to_string(),
            });
        }
    }
    Ok(namespaces)
}
