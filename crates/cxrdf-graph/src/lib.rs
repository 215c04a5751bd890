//! # cxrdf-graph
//!
//! A small, explicit in-memory RDF graph used as the output store for CX exports.
//!
//! ## Core Principles
//!
//! - **Set Semantics**: A triple is stored at most once
//! - **Stable Output**: Iteration and serialization follow insertion order
//! - **Local Bindings**: Namespace prefixes belong to one graph, never to the process
//! - **Zero Magic**: Expanded IRIs everywhere; prefixes only matter when serializing
//!
//! ## Architecture
//!
//! ```text
//! Exporters (cxrdf policies)
//!     ↓
//! RdfGraph (oxrdf triples, indexes, namespace bindings)
//!     ↓
//! oxrdfio serializers (N-Triples, Turtle, RDF/XML)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use cxrdf_graph::{export, BlankNode, Literal, NamedNode, RdfGraph};
//!
//! let mut graph = RdfGraph::new();
//! graph.bind("ex", "http://example.org/").unwrap();
//!
//! let node = BlankNode::default();
//! graph.add(
//!     node,
//!     NamedNode::new("http://example.org/name").unwrap(),
//!     Literal::new_simple_literal("A"),
//! );
//!
//! let nt = export::export_ntriples(&graph).unwrap();
//! assert!(nt.contains("<http://example.org/name> \"A\" ."));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod export;
pub mod graph;
pub mod vocab;

// Re-export main types
pub use error::{GraphError, Result};
pub use export::{serialize, RdfFormat};
pub use graph::{
    BlankNode, Literal, NamedNode, NamedOrBlankNode, NamespaceMap, RdfGraph, Term, Triple,
};
