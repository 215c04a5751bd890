//! Shared CX fixtures and graph helpers for integration tests.

#![allow(dead_code)]

use cxrdf::vocab;
use cxrdf_graph::{Literal, NamedNode, NamedOrBlankNode, RdfGraph, Term};
use serde_json::{json, Value};

/// Five nodes A-E, two edges (A→B, B→C `increases`), one citation and one
/// support attached twice to the first edge, colors and aliases, a
/// two-prefix `@context` and the network name "Test Name".
pub fn sample_network() -> Value {
    json!([
        {"numberVerification": [{"longNumber": 281474976710655i64}]},
        {"metaData": [{"name": "nodes", "elementCount": 5}, {"name": "edges", "elementCount": 2}]},
        {"@context": [{"example": "http://example.com/#", "test": "http://test.com/#"}]},
        {"networkAttributes": [{"n": "name", "v": "Test Name"}]},
        {"nodes": [
            {"@id": 0, "n": "A"},
            {"@id": 1, "n": "B"},
            {"@id": 2, "n": "C"},
            {"@id": 3, "n": "D"},
            {"@id": 4, "n": "E"}
        ]},
        {"edges": [
            {"@id": 0, "s": 0, "t": 1},
            {"@id": 1, "s": 1, "t": 2, "i": "increases"}
        ]},
        {"citations": [{"@id": 0, "dc:title": "Hi"}]},
        {"supports": [{"@id": 0, "text": "Hi"}]},
        {"edgeCitations": [{"po": [0], "citations": [0]}]},
        {"edgeSupports": [{"po": [0], "supports": [0]}]},
        {"nodeAttributes": [
            {"po": 0, "n": "Color", "v": "Red"},
            {"po": 1, "n": "Color", "v": "Red"},
            {"po": 2, "n": "Color", "v": "Red"},
            {"po": 3, "n": "Color", "v": "Blue"},
            {"po": 4, "n": "Color", "v": "Blue"},
            {"po": 0, "n": "alias", "v": ["test:A", "example:001"], "d": "list_of_string"},
            {"po": 1, "n": "alias", "v": ["test:B", "example:002"], "d": "list_of_string"},
            {"po": 2, "n": "alias", "v": ["test:C", "example:003"], "d": "list_of_string"},
            {"po": 3, "n": "alias", "v": ["test:D", "example:004"], "d": "list_of_string"},
            {"po": 4, "n": "alias", "v": ["test:E", "example:005"], "d": "list_of_string"}
        ]},
        {"edgeAttributes": [
            {"po": 0, "n": "Color", "v": "Green"},
            {"po": 1, "n": "Color", "v": "Purple"}
        ]},
        {"edgeCitations": [{"po": [0], "citations": [0]}]},
        {"edgeSupports": [{"po": [0], "supports": [0]}]},
        {"status": [{"error": "", "success": true}]}
    ])
}

/// Triples with the given predicate.
pub fn count(graph: &RdfGraph, predicate: &'static str) -> usize {
    graph
        .triples_matching(None, Some(&vocab::term(predicate)), None)
        .len()
}

/// Subjects typed with `class`.
pub fn instances<'a>(graph: &'a RdfGraph, class: &'static str) -> Vec<&'a NamedOrBlankNode> {
    graph.subjects(
        &vocab::term(cxrdf_graph::vocab::rdf::TYPE),
        &Term::from(vocab::term(class)),
    )
}

/// Plain string literal term.
pub fn string(value: &str) -> Term {
    Literal::new_simple_literal(value).into()
}

/// `xsd:integer` literal term.
pub fn integer(value: i64) -> Term {
    Literal::from(value).into()
}

/// IRI term.
pub fn iri(value: &str) -> Term {
    NamedNode::new_unchecked(value).into()
}
