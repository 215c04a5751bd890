//! Serialization of graphs to concrete RDF text formats.
//!
//! Writing is delegated to [`oxrdfio`]. Formats with prefixed names get the
//! graph's own bindings plus the standard `rdf`, `rdfs` and `xsd` prefixes.

use crate::error::{GraphError, Result};
use crate::vocab::STANDARD_PREFIXES;
use crate::RdfGraph;
use log::debug;
use oxrdfio::{RdfFormat as OxRdfFormat, RdfSerializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Output format for [`serialize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RdfFormat {
    /// N-Triples (.nt), one triple per line
    NTriples,
    /// Turtle (.ttl), compact and human-readable
    #[default]
    Turtle,
    /// RDF/XML (.rdf)
    RdfXml,
}

impl RdfFormat {
    /// Conventional file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            RdfFormat::NTriples => "nt",
            RdfFormat::Turtle => "ttl",
            RdfFormat::RdfXml => "rdf",
        }
    }

    fn to_oxrdf_format(self) -> OxRdfFormat {
        match self {
            RdfFormat::NTriples => OxRdfFormat::NTriples,
            RdfFormat::Turtle => OxRdfFormat::Turtle,
            RdfFormat::RdfXml => OxRdfFormat::RdfXml,
        }
    }
}

impl fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RdfFormat::NTriples => write!(f, "ntriples"),
            RdfFormat::Turtle => write!(f, "turtle"),
            RdfFormat::RdfXml => write!(f, "rdfxml"),
        }
    }
}

impl FromStr for RdfFormat {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nt" | "ntriples" | "n-triples" => Ok(RdfFormat::NTriples),
            "ttl" | "turtle" => Ok(RdfFormat::Turtle),
            "rdf" | "xml" | "rdfxml" | "rdf/xml" => Ok(RdfFormat::RdfXml),
            _ => Err(GraphError::UnknownFormat {
                name: s.to_string(),
            }),
        }
    }
}

/// Write a graph to `writer` in the given format, in insertion order.
///
/// # Errors
///
/// Returns [`GraphError::Serialization`] if writing fails.
pub fn write<W: Write>(graph: &RdfGraph, writer: W, format: RdfFormat) -> Result<W> {
    let mut serializer = RdfSerializer::from_format(format.to_oxrdf_format());

    for (prefix, namespace) in STANDARD_PREFIXES {
        if !graph.namespaces().contains_prefix(prefix) {
            serializer = serializer
                .with_prefix(prefix, namespace)
                .map_err(|e| GraphError::invalid_iri(namespace, e))?;
        }
    }
    for (prefix, namespace) in graph.namespaces().iter() {
        serializer = serializer
            .with_prefix(prefix, namespace)
            .map_err(|e| GraphError::invalid_iri(namespace, e))?;
    }

    let mut serializer = serializer.for_writer(writer);
    for triple in graph.iter() {
        serializer
            .serialize_triple(triple)
            .map_err(GraphError::serialization)?;
    }
    let writer = serializer.finish().map_err(GraphError::serialization)?;

    debug!("Serialized {} triples as {format}", graph.len());
    Ok(writer)
}

/// Serialize a graph to a string in the given format.
///
/// # Errors
///
/// Returns [`GraphError::Serialization`] if serialization fails or the
/// output is not valid UTF-8.
pub fn serialize(graph: &RdfGraph, format: RdfFormat) -> Result<String> {
    let buffer = write(graph, Vec::new(), format)?;
    String::from_utf8(buffer)
        .map_err(|e| GraphError::serialization(format!("Invalid UTF-8 in output: {e}")))
}

/// Export graph as N-Triples.
///
/// # Errors
///
/// See [`serialize`].
pub fn export_ntriples(graph: &RdfGraph) -> Result<String> {
    serialize(graph, RdfFormat::NTriples)
}

/// Export graph as Turtle.
///
/// # Errors
///
/// See [`serialize`].
pub fn export_turtle(graph: &RdfGraph) -> Result<String> {
    serialize(graph, RdfFormat::Turtle)
}
