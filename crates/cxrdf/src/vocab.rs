//! The fixed CX vocabulary.
//!
//! All terms live under [`cx::NS`]. Attribute and interaction predicates are
//! minted on demand under their own namespaces by [`attribute_predicate`] and
//! [`interaction_predicate`].

use cxrdf_graph::NamedNode;

/// CX classes and predicates (`cx:`)
pub mod cx {
    /// Namespace IRI
    pub const NS: &str = "https://www.ndexbio.org/cx/";
    /// Prefix bound in every exported graph
    pub const PREFIX: &str = "cx";

    // Classes
    /// `cx:network`, the document root
    pub const NETWORK: &str = "https://www.ndexbio.org/cx/network";
    /// `cx:node`
    pub const NODE: &str = "https://www.ndexbio.org/cx/node";
    /// `cx:edge`
    pub const EDGE: &str = "https://www.ndexbio.org/cx/edge";
    /// `cx:citation`
    pub const CITATION: &str = "https://www.ndexbio.org/cx/citation";
    /// `cx:support`
    pub const SUPPORT: &str = "https://www.ndexbio.org/cx/support";
    /// `cx:node_attribute`
    pub const NODE_ATTRIBUTE: &str = "https://www.ndexbio.org/cx/node_attribute";
    /// `cx:edge_attribute`
    pub const EDGE_ATTRIBUTE: &str = "https://www.ndexbio.org/cx/edge_attribute";
    /// `cx:network_attribute`
    pub const NETWORK_ATTRIBUTE: &str = "https://www.ndexbio.org/cx/network_attribute";
    /// `cx:namespace`
    pub const NAMESPACE: &str = "https://www.ndexbio.org/cx/namespace";

    // Identity
    /// `cx:has_id`
    pub const HAS_ID: &str = "https://www.ndexbio.org/cx/has_id";
    /// `cx:edge_has_id`
    pub const EDGE_HAS_ID: &str = "https://www.ndexbio.org/cx/edge_has_id";
    /// `cx:citation_has_id`
    pub const CITATION_HAS_ID: &str = "https://www.ndexbio.org/cx/citation_has_id";
    /// `cx:support_has_id`
    pub const SUPPORT_HAS_ID: &str = "https://www.ndexbio.org/cx/support_has_id";

    // Document containment
    /// `cx:has_node`
    pub const HAS_NODE: &str = "https://www.ndexbio.org/cx/has_node";
    /// `cx:has_edge`
    pub const HAS_EDGE: &str = "https://www.ndexbio.org/cx/has_edge";
    /// `cx:has_citation`
    pub const HAS_CITATION: &str = "https://www.ndexbio.org/cx/has_citation";
    /// `cx:has_support`
    pub const HAS_SUPPORT: &str = "https://www.ndexbio.org/cx/has_support";
    /// `cx:has_network_attribute`
    pub const HAS_NETWORK_ATTRIBUTE: &str = "https://www.ndexbio.org/cx/has_network_attribute";
    /// `cx:has_namespace`
    pub const HAS_NAMESPACE: &str = "https://www.ndexbio.org/cx/has_namespace";

    // Nodes and edges
    /// `cx:node_represents`
    pub const NODE_REPRESENTS: &str = "https://www.ndexbio.org/cx/node_represents";
    /// `cx:edge_source`
    pub const EDGE_SOURCE: &str = "https://www.ndexbio.org/cx/edge_source";
    /// `cx:edge_target`
    pub const EDGE_TARGET: &str = "https://www.ndexbio.org/cx/edge_target";
    /// `cx:edge_interaction`
    pub const EDGE_INTERACTION: &str = "https://www.ndexbio.org/cx/edge_interaction";

    // Attribute entities
    /// `cx:has_node_attribute`
    pub const HAS_NODE_ATTRIBUTE: &str = "https://www.ndexbio.org/cx/has_node_attribute";
    /// `cx:has_edge_attribute`
    pub const HAS_EDGE_ATTRIBUTE: &str = "https://www.ndexbio.org/cx/has_edge_attribute";
    /// `cx:attribute_name`
    pub const ATTRIBUTE_NAME: &str = "https://www.ndexbio.org/cx/attribute_name";
    /// `cx:attribute_value`
    pub const ATTRIBUTE_VALUE: &str = "https://www.ndexbio.org/cx/attribute_value";
    /// `cx:attribute_data_type`
    pub const ATTRIBUTE_DATA_TYPE: &str = "https://www.ndexbio.org/cx/attribute_data_type";

    // Citations and supports
    /// `cx:citation_title`
    pub const CITATION_TITLE: &str = "https://www.ndexbio.org/cx/citation_title";
    /// `cx:citation_contributor`
    pub const CITATION_CONTRIBUTOR: &str = "https://www.ndexbio.org/cx/citation_contributor";
    /// `cx:citation_identifier`
    pub const CITATION_IDENTIFIER: &str = "https://www.ndexbio.org/cx/citation_identifier";
    /// `cx:citation_type`
    pub const CITATION_TYPE: &str = "https://www.ndexbio.org/cx/citation_type";
    /// `cx:citation_description`
    pub const CITATION_DESCRIPTION: &str = "https://www.ndexbio.org/cx/citation_description";
    /// `cx:support_text`
    pub const SUPPORT_TEXT: &str = "https://www.ndexbio.org/cx/support_text";
    /// `cx:support_citation`
    pub const SUPPORT_CITATION: &str = "https://www.ndexbio.org/cx/support_citation";

    // Attachments
    /// `cx:edge_has_citation`
    pub const EDGE_HAS_CITATION: &str = "https://www.ndexbio.org/cx/edge_has_citation";
    /// `cx:edge_has_support`
    pub const EDGE_HAS_SUPPORT: &str = "https://www.ndexbio.org/cx/edge_has_support";
    /// `cx:node_has_citation`
    pub const NODE_HAS_CITATION: &str = "https://www.ndexbio.org/cx/node_has_citation";
    /// `cx:node_has_support`
    pub const NODE_HAS_SUPPORT: &str = "https://www.ndexbio.org/cx/node_has_support";

    // Namespace declarations
    /// `cx:namespace_prefix`
    pub const NAMESPACE_PREFIX: &str = "https://www.ndexbio.org/cx/namespace_prefix";
    /// `cx:namespace_uri`
    pub const NAMESPACE_URI: &str = "https://www.ndexbio.org/cx/namespace_uri";
}

/// Minted attribute predicates (`cxa:`)
pub mod cxa {
    /// Namespace IRI
    pub const NS: &str = "https://www.ndexbio.org/cx/attribute/";
    /// Prefix
    pub const PREFIX: &str = "cxa";
}

/// Minted interaction predicates (`cxi:`)
pub mod cxi {
    /// Namespace IRI
    pub const NS: &str = "https://www.ndexbio.org/cx/interaction/";
    /// Prefix
    pub const PREFIX: &str = "cxi";
    /// Interaction used when an edge carries none
    pub const DEFAULT_INTERACTION: &str = "interacts_with";
}

/// Wrap a vocabulary constant as a [`NamedNode`].
pub fn term(iri: &'static str) -> NamedNode {
    NamedNode::new_unchecked(iri)
}

/// Predicate for a CX attribute name, e.g. `Color` → `cxa:Color`.
pub fn attribute_predicate(name: &str) -> NamedNode {
    NamedNode::new_unchecked(format!("{}{}", cxa::NS, encode_local(name)))
}

/// Predicate for a CX interaction, e.g. `increases` → `cxi:increases`.
pub fn interaction_predicate(interaction: &str) -> NamedNode {
    NamedNode::new_unchecked(format!("{}{}", cxi::NS, encode_local(interaction)))
}

/// Percent-encode everything outside `[A-Za-z0-9_.~-]`; empty names become `_`.
pub fn encode_local(name: &str) -> String {
    if name.is_empty() {
        return "_".to_string();
    }
    let mut out = String::with_capacity(name.len());
    for byte in name.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'_' | b'.' | b'~' | b'-') {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}
