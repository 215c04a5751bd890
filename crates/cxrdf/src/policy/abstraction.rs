//! `abstract` policy: interactions as direct node-to-node statements.

use super::predicate::attribute_triples;
use crate::cx::{aspect, CxAttribute, CxEdge, CxNetworkAttribute, CxNode};
use crate::error::Result;
use crate::exporter::{Export, Exporter};
use crate::registry::EntityKind;
use crate::vocab::{self, cx, cxi};
use cxrdf_graph::vocab::{rdf, rdfs};
use cxrdf_graph::{BlankNode, Literal};

/// Attribute names whose CURIE values are resolved to IRIs.
const LINKED_ATTRIBUTES: [&str; 1] = ["alias"];

/// States each edge as `(source, cxi:<interaction>, target)`.
///
/// The edge entity is kept and reifies that statement through `rdf:subject`,
/// `rdf:predicate` and `rdf:object`, so edge attributes, citations and
/// supports still have something to hang off. Node `represents` and `alias`
/// values whose prefix is declared in `@context` are linked with
/// `rdfs:seeAlso`.
#[derive(Debug)]
pub struct AbstractExporter {
    base: Exporter,
}

impl AbstractExporter {
    /// Link `value` with `rdfs:seeAlso` if it resolves; reports success.
    fn see_also(&mut self, entity: &BlankNode, value: &str) -> bool {
        match self.base.resolve_curie(value) {
            Some(iri) => {
                self.base.add_about(entity, vocab::term(rdfs::SEE_ALSO), iri);
                true
            }
            None => false,
        }
    }
}

impl Export for AbstractExporter {
    const NAME: &'static str = "abstract";

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
            self.see_also(&entity, represents);
        }
        Ok(())
    }

    fn export_edge(&mut self, edge: &CxEdge) -> Result<()> {
        let entities = self.base.declare_edge(edge);
        let interaction = edge
            .interaction
            .as_deref()
            .unwrap_or(cxi::DEFAULT_INTERACTION);
        let predicate = vocab::interaction_predicate(interaction);

        self.base
            .add_about(&entities.source, predicate.clone(), entities.target.clone());

        let statement = &entities.edge;
        self.base
            .add_about(statement, vocab::term(rdf::TYPE), vocab::term(rdf::STATEMENT));
        self.base
            .add_about(statement, vocab::term(rdf::SUBJECT), entities.source.clone());
        self.base
            .add_about(statement, vocab::term(rdf::PREDICATE), predicate);
        self.base
            .add_about(statement, vocab::term(rdf::OBJECT), entities.target.clone());
        Ok(())
    }

    fn export_node_attribute(&mut self, attribute: &CxAttribute) -> Result<()> {
        let owner = self
            .base
            .resolve(EntityKind::Node, attribute.property_of, aspect::NODE_ATTRIBUTES);

        if LINKED_ATTRIBUTES.contains(&attribute.name.as_str()) {
            let predicate = vocab::attribute_predicate(&attribute.name);
            for value in attribute.value.strings() {
                if !self.see_also(&owner, value) {
                    self.base
                        .add_about(&owner, predicate.clone(), Literal::new_simple_literal(value));
                }
            }
            return Ok(());
        }

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
