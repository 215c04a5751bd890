//! `predicate` policy: attributes become direct triples.

use crate::cx::{aspect, AttributeValue, CxAttribute, CxEdge, CxNetworkAttribute, CxNode};
use crate::error::Result;
use crate::exporter::{Export, Exporter};
use crate::registry::EntityKind;
use crate::vocab::{self, cx};
use cxrdf_graph::{BlankNode, Literal};

/// Writes each attribute value as `(owner, cxa:<name>, value)`.
#[derive(Debug)]
pub struct PredicateExporter {
    base: Exporter,
}

impl Export for PredicateExporter {
    const NAME: &'static str = "predicate";

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
        attribute_triples(
            &mut self.base,
            &owner,
            &attribute.name,
            &attribute.value,
            attribute.data_type.as_deref(),
        );
        Ok(())
    }

    fn export_edge_attribute(&mut self, attribute: &CxAttribute) -> Result<()> {
        let owner = self
            .base
            .resolve(EntityKind::Edge, attribute.property_of, aspect::EDGE_ATTRIBUTES);
        attribute_triples(
            &mut self.base,
            &owner,
            &attribute.name,
            &attribute.value,
            attribute.data_type.as_deref(),
        );
        Ok(())
    }

    fn export_network_attribute(&mut self, attribute: &CxNetworkAttribute) -> Result<()> {
        self.base.label_network(attribute);
        let document = self.base.document().clone();
        attribute_triples(
            &mut self.base,
            &document,
            &attribute.name,
            &attribute.value,
            attribute.data_type.as_deref(),
        );
        Ok(())
    }
}

/// One `(owner, cxa:<name>, literal)` triple per value element.
pub(crate) fn attribute_triples(
    exporter: &mut Exporter,
    owner: &BlankNode,
    name: &str,
    value: &AttributeValue,
    data_type: Option<&str>,
) -> usize {
    let predicate = vocab::attribute_predicate(name);
    let mut added = 0;
    for literal in value.to_literals(data_type) {
        if exporter.add_about(owner, predicate.clone(), literal) {
            added += 1;
        }
    }
    added
}
