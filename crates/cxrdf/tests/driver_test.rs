//! Entry points: policy names, text input, serialization.

mod common;

use common::{sample_network, string};
use cxrdf::{
    cx_str_to_rdf, cx_to_rdf_graph, cx_to_rdf_graph_into, ExportConfig, ExportError, Policy,
    RdfFormat, RdfGraph,
};
use cxrdf_graph::NamedNode;
use serde_json::json;

#[test]
fn test_unknown_policy_fails_before_reading_input() {
    // The input is malformed too; the policy error wins
    let err = cx_to_rdf_graph(&json!({"not": "cx"}), "reified").unwrap_err();
    assert!(matches!(err, ExportError::UnknownPolicy { .. }));
}

#[test]
fn test_policy_names_are_forgiving() {
    assert!(cx_to_rdf_graph(&sample_network(), " Abstract ").is_ok());
}

#[test]
fn test_structural_errors_propagate() {
    let err = cx_to_rdf_graph(&json!([{"edges": [{"@id": 0, "s": 1}]}]), "aspect").unwrap_err();
    assert!(matches!(err, ExportError::Structure { ref aspect, .. } if aspect == "edges"));
}

#[test]
fn test_empty_document() {
    let graph = cx_to_rdf_graph(&json!([]), "predicate").unwrap();
    assert_eq!(graph.len(), 1);
}

#[test]
fn test_text_to_turtle() {
    let text = sample_network().to_string();
    let turtle = cx_str_to_rdf(&text, "aspect", RdfFormat::Turtle).unwrap();

    assert!(turtle.contains("<https://www.ndexbio.org/cx/>"));
    assert!(turtle.contains("<http://test.com/#>"));
    assert!(turtle.contains("\"Test Name\""));
}

#[test]
fn test_text_to_ntriples() {
    let text = sample_network().to_string();
    let nt = cx_str_to_rdf(&text, "abstract", RdfFormat::NTriples).unwrap();
    assert!(nt
        .lines()
        .all(|line| line.ends_with(" .")));
    assert!(nt.contains("<https://www.ndexbio.org/cx/interaction/increases>"));
}

#[test]
fn test_context_uri_that_is_not_an_iri_is_not_bound() {
    let text = r#"[{"@context":[{"bad":"http://ex.org/a b>"}]},{"nodes":[{"@id":0,"n":"A"}]}]"#;

    let graph = cx_to_rdf_graph(&serde_json::from_str(text).unwrap(), "aspect").unwrap();
    assert_eq!(graph.namespace("bad"), None);

    let turtle = cx_str_to_rdf(text, "aspect", RdfFormat::Turtle).unwrap();
    assert!(!turtle.contains("<http://ex.org/a b>>"));
    // The declaration survives as a literal
    assert!(turtle.contains("\"http://ex.org/a b>\""));
}

#[test]
fn test_malformed_text() {
    let err = cx_str_to_rdf("[{\"nodes\": ", "aspect", RdfFormat::Turtle).unwrap_err();
    assert!(matches!(err, ExportError::Json { .. }));
}

#[test]
fn test_export_into_existing_graph() {
    let mut graph = RdfGraph::new();
    graph.add(
        NamedNode::new_unchecked("http://example.org/a"),
        cxrdf::vocab::term(cxrdf_graph::vocab::rdfs::LABEL),
        string("kept"),
    );

    let config = ExportConfig::for_policy(Policy::Aspect);
    let graph = cx_to_rdf_graph_into(&json!([{"nodes": [{"@id": 0}]}]), &config, graph).unwrap();
    // kept triple + document + 3 for the node
    assert_eq!(graph.len(), 5);
}

#[test]
fn test_runs_are_structurally_identical() {
    let cx_json = sample_network();
    let first = cx_to_rdf_graph(&cx_json, "abstract").unwrap();
    let second = cx_to_rdf_graph(&cx_json, "abstract").unwrap();
    assert_eq!(first.len(), second.len());
}
