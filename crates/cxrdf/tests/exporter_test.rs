//! Identity guarantees of the exporter base.

mod common;

use common::{count, integer, string};
use cxrdf::vocab::cx;
use cxrdf::{EntityKind, Exporter};
use cxrdf_graph::{NamedNode, NamedOrBlankNode, RdfGraph, Term};

#[test]
fn test_first_creation_adds_three_triples() {
    let mut exporter = Exporter::new();
    let before = exporter.graph().len();
    exporter.ensure_node(42);
    assert_eq!(exporter.graph().len() - before, 3);
}

#[test]
fn test_repeated_ensure_is_idempotent_for_every_kind() {
    let mut exporter = Exporter::new();
    for kind in EntityKind::ALL {
        let first = exporter.ensure(kind, 1);
        let size = exporter.graph().len();
        let second = exporter.ensure(kind, 1);
        assert_eq!(first, second, "{kind} 1 mapped twice");
        assert_eq!(exporter.graph().len(), size);
    }
}

#[test]
fn test_distinct_ids_distinct_entities() {
    let mut exporter = Exporter::new();
    let entities: Vec<_> = (0..10).map(|id| exporter.ensure_citation(id)).collect();
    for (i, a) in entities.iter().enumerate() {
        for b in &entities[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_same_id_across_kinds() {
    let mut exporter = Exporter::new();
    assert_ne!(exporter.ensure_node(5), exporter.ensure_edge(5));
}

#[test]
fn test_document_linkage_is_complete() {
    let mut exporter = Exporter::new();
    for id in [3, 1, 4, 1, 5, 9, 2, 6, 5, 3] {
        exporter.ensure_node(id);
        exporter.ensure_support(id % 3);
    }

    let document = NamedOrBlankNode::from(exporter.document().clone());
    let graph = exporter.graph();
    for kind in [EntityKind::Node, EntityKind::Support] {
        for (id, entity) in exporter.registry().iter(kind) {
            let links = graph.subjects(
                &cxrdf::vocab::term(kind.document_predicate()),
                &Term::from(entity.clone()),
            );
            assert_eq!(links, vec![&document], "{kind} {id} not linked exactly once");
        }
    }
    assert_eq!(count(graph, cx::HAS_NODE), 7);
    assert_eq!(count(graph, cx::HAS_SUPPORT), 3);
}

#[test]
fn test_label_accumulation() {
    let mut exporter = Exporter::new();
    let node = exporter.ensure_node(0);
    exporter.add_label(&node, "A");
    exporter.add_label(&node, "B");
    // Same label twice is one triple
    exporter.add_label(&node, "B");

    let labels = exporter.graph().objects(
        &NamedOrBlankNode::from(node),
        &cxrdf::vocab::term(cxrdf_graph::vocab::rdfs::LABEL),
    );
    assert_eq!(labels, vec![&string("A"), &string("B")]);
}

#[test]
fn test_document_triple() {
    let mut exporter = Exporter::new();
    exporter.add_document_triple(cxrdf::vocab::attribute_predicate("version"), string("1.0"));
    let document = NamedOrBlankNode::from(exporter.document().clone());
    assert_eq!(
        exporter
            .graph()
            .objects(&document, &cxrdf::vocab::attribute_predicate("version")),
        vec![&string("1.0")]
    );
}

#[test]
fn test_existing_graph_is_extended() {
    let mut graph = RdfGraph::new();
    graph.bind("ex", "http://example.org/").unwrap();
    graph.add(
        NamedNode::new_unchecked("http://example.org/a"),
        cxrdf::vocab::term(cx::HAS_ID),
        integer(1),
    );

    let exporter = Exporter::with_graph(graph);
    assert_eq!(exporter.graph().len(), 2);
    assert_eq!(exporter.graph().namespace("ex"), Some("http://example.org/"));
    assert_eq!(exporter.graph().namespace(cx::PREFIX), Some(cx::NS));
}

#[test]
fn test_add_about_named_resource() {
    let mut exporter = Exporter::new();
    let resource = NamedNode::new_unchecked("http://example.org/a");
    assert!(exporter.add(resource.clone(), cxrdf::vocab::term(cx::HAS_ID), integer(1)));
    assert!(!exporter.add(resource.clone(), cxrdf::vocab::term(cx::HAS_ID), integer(1)));

    let objects = exporter
        .graph()
        .objects(&NamedOrBlankNode::from(resource), &cxrdf::vocab::term(cx::HAS_ID));
    assert_eq!(objects, vec![&integer(1)]);
}

#[test]
fn test_bind_namespace_rejects_non_iri() {
    let mut exporter = Exporter::new();
    let result = exporter.bind_namespace("bad", "not an iri");
    assert!(matches!(result, Err(cxrdf::ExportError::Graph(_))));
    assert_eq!(exporter.graph().namespace("bad"), None);
}
