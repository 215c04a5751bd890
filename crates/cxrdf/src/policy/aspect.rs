//! `aspect` policy: every CX record becomes an entity.

use crate::cx::{aspect, AttributeValue, CxAttribute, CxEdge, CxNetworkAttribute, CxNode};
use crate::error::Result;
use crate::exporter::{Export, Exporter};
use crate::registry::EntityKind;
use crate::vocab::{self, cx};
use cxrdf_graph::vocab::rdf;
use cxrdf_graph::{BlankNode, Literal};

/// Mirrors the CX aspect structure in RDF.
///
/// Attribute records become `cx:node_attribute`, `cx:edge_attribute` or
/// `cx:network_attribute` entities carrying name, values and data type.
#[derive(Debug)]
pub struct AspectExporter {
    base: Exporter,
}

impl Export for AspectExporter {
    const NAME: &'static str = "aspect";

    fn new(exporter: Exporter) -> Self {
        Self { base: exporter }
    }

    fn exporter_mut(&mut self) -> &mut Exporter {
        &mut self.base
    }

    fn into_exporter(self) -> Exporter {
        self.base
    }

    fn export_node(&mut self, node: &CxNode) -> Result<()> {
        let entity = self.base.declare_node(node);
        if let Some(represents) = &node.represents {
            self.base.add_about(
                &entity,
                vocab::term(cx::NODE_REPRESENTS),
                Literal::new_simple_literal(represents),
            );
        }
        Ok(())
    }

    fn export_edge(&mut self, edge: &CxEdge) -> Result<()> {
        self.base.declare_edge(edge);
        Ok(())
    }

    fn export_node_attribute(&mut self, attribute: &CxAttribute) -> Result<()> {
        let owner = self
            .base
            .resolve(EntityKind::Node, attribute.property_of, aspect::NODE_ATTRIBUTES);
        let entity = attribute_entity(
            &mut self.base,
            cx::NODE_ATTRIBUTE,
            &attribute.name,
            &attribute.value,
            attribute.data_type.as_deref(),
        );
        self.base
            .add_about(&owner, vocab::term(cx::HAS_NODE_ATTRIBUTE), entity);
        Ok(())
    }

    fn export_edge_attribute(&mut self, attribute: &CxAttribute) -> Result<()> {
        let owner = self
            .base
            .resolve(EntityKind::Edge, attribute.property_of, aspect::EDGE_ATTRIBUTES);
        let entity = attribute_entity(
            &mut self.base,
            cx::EDGE_ATTRIBUTE,
            &attribute.name,
            &attribute.value,
            attribute.data_type.as_deref(),
        );
        self.base
            .add_about(&owner, vocab::term(cx::HAS_EDGE_ATTRIBUTE), entity);
        Ok(())
    }

    fn export_network_attribute(&mut self, attribute: &CxNetworkAttribute) -> Result<()> {
        self.base.label_network(attribute);
        let entity = attribute_entity(
            &mut self.base,
            cx::NETWORK_ATTRIBUTE,
            &attribute.name,
            &attribute.value,
            attribute.data_type.as_deref(),
        );
        self.base
            .add_document_triple(vocab::term(cx::HAS_NETWORK_ATTRIBUTE), entity);
        Ok(())
    }
}

// A fresh entity per record: two records with the same name and value stay two entities
fn attribute_entity(
    exporter: &mut Exporter,
    class: &'static str,
    name: &str,
    value: &AttributeValue,
    data_type: Option<&str>,
) -> BlankNode {
    let entity = BlankNode::default();
    exporter.add_about(&entity, vocab::term(rdf::TYPE), vocab::term(class));
    exporter.add_about(&entity, vocab::term(cx::ATTRIBUTE_NAME), Literal::new_simple_literal(name));
    for literal in value.to_literals(data_type) {
        exporter.add_about(&entity, vocab::term(cx::ATTRIBUTE_VALUE), literal);
    }
    if let Some(data_type) = data_type {
        exporter.add_about(
            &entity,
            vocab::term(cx::ATTRIBUTE_DATA_TYPE),
            Literal::new_simple_literal(data_type),
        );
    }
    entity
}
