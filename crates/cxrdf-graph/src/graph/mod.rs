//! Core graph types and operations.
//!
//! Terms and triples are [`oxrdf`]'s. This module adds:
//! - [`NamespaceMap`]: validated prefix bindings
//! - [`RdfGraph`]: the insertion-ordered triple set carrying those bindings

mod namespace;
mod rdfgraph;

pub use namespace::{is_valid_prefix, NamespaceMap};
pub use rdfgraph::RdfGraph;

pub use oxrdf::{BlankNode, Literal, NamedNode, NamedOrBlankNode, Term, Triple};
