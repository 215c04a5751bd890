//! # cxrdf
//!
//! Convert Cytoscape Exchange (CX) networks into RDF graphs.
//!
//! A CX document is a JSON array of aspects (`nodes`, `edges`,
//! `nodeAttributes`, `citations`, ...). An export walks those aspects once and
//! emits triples under one of three policies:
//!
//! - **aspect**: every CX record becomes an entity, attributes included
//! - **predicate**: attributes become direct `(owner, cxa:<name>, value)` triples
//! - **abstract**: edges also become `(source, cxi:<interaction>, target)`
//!   statements and `@context` CURIEs are resolved to IRIs
//!
//! Under every policy each CX node, edge, citation and support id maps to
//! exactly one blank node, typed and linked from a single `cx:network`
//! document root.
//!
//! ## Example
//!
//! ```rust
//! use cxrdf::{cx_to_rdf_graph, RdfFormat};
//! use serde_json::json;
//!
//! let cx = json!([
//!     {"nodes": [{"@id": 0, "n": "A"}, {"@id": 1, "n": "B"}]},
//!     {"edges": [{"@id": 0, "s": 0, "t": 1, "i": "increases"}]}
//! ]);
//!
//! let graph = cx_to_rdf_graph(&cx, "abstract").unwrap();
//! let ntriples = cxrdf_graph::serialize(&graph, RdfFormat::NTriples).unwrap();
//! assert!(ntriples.contains("<https://www.ndexbio.org/cx/interaction/increases>"));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod cx;
pub mod error;
pub mod exporter;
pub mod policy;
pub mod registry;
pub mod stats;
pub mod vocab;

// Re-export main types
pub use config::ExportConfig;
pub use cx::CxDocument;
pub use error::{ExportError, Result};
pub use exporter::{EdgeEntities, Export, Exporter};
pub use policy::{AbstractExporter, AspectExporter, Policy, PredicateExporter};
pub use registry::{EntityKind, EntityRegistry};
pub use stats::ExportStats;

pub use cxrdf_graph::{RdfFormat, RdfGraph};

use serde_json::Value;

/// Export a CX document with the named policy.
///
/// # Errors
///
/// Returns [`ExportError::UnknownPolicy`] for an unrecognized policy name
/// (before anything is exported) and [`ExportError::Structure`] for
/// malformed CX.
pub fn cx_to_rdf_graph(cx_json: &Value, policy: &str) -> Result<RdfGraph> {
    let policy: Policy = policy.parse()?;
    cx_to_rdf_graph_with(cx_json, &ExportConfig::for_policy(policy))
}

/// Export a CX document with an explicit configuration.
///
/// # Errors
///
/// Returns [`ExportError::Structure`] for malformed CX.
pub fn cx_to_rdf_graph_with(cx_json: &Value, config: &ExportConfig) -> Result<RdfGraph> {
    cx_to_rdf_report(cx_json, config).map(|(graph, _)| graph)
}

/// Export a CX document into an existing graph.
///
/// Triples and bindings already in `graph` are kept; the export adds its own
/// document root.
///
/// # Errors
///
/// Returns [`ExportError::Structure`] for malformed CX.
pub fn cx_to_rdf_graph_into(
    cx_json: &Value,
    config: &ExportConfig,
    graph: RdfGraph,
) -> Result<RdfGraph> {
    let exporter = Exporter::from_parts(graph, config.clone());
    config.policy.run(exporter, cx_json).map(|(graph, _)| graph)
}

/// Export a CX document and report statistics.
///
/// # Errors
///
/// Returns [`ExportError::Structure`] for malformed CX.
pub fn cx_to_rdf_report(
    cx_json: &Value,
    config: &ExportConfig,
) -> Result<(RdfGraph, ExportStats)> {
    let exporter = Exporter::with_config(config.clone());
    config.policy.run(exporter, cx_json)
}

/// Export CX JSON text and serialize the graph.
///
/// # Errors
///
/// Returns [`ExportError::UnknownPolicy`] for an unrecognized policy name,
/// [`ExportError::Json`] if the text is not JSON, [`ExportError::Structure`]
/// for malformed CX and [`ExportError::Graph`] if serialization fails.
pub fn cx_str_to_rdf(cx_text: &str, policy: &str, format: RdfFormat) -> Result<String> {
    let policy: Policy = policy.parse()?;
    let cx_json: Value =
        serde_json::from_str(cx_text).map_err(|source| ExportError::Json { source })?;
    let graph = cx_to_rdf_graph_with(&cx_json, &ExportConfig::for_policy(policy))?;
    Ok(cxrdf_graph::serialize(&graph, format)?)
}
