//! The exporter base shared by every policy.
//!
//! [`Exporter`] owns one graph for one conversion. Construction binds the
//! `cx` prefix and creates the document root; the `ensure_*` accessors map
//! CX ids to blank nodes exactly once per kind.
//!
//! Policies implement [`Export`], which supplies the aspect walk and calls the
//! per-record hooks in a fixed order:
//!
//! ```text
//! @context → nodes → edges → citations → supports
//!          → edge/node citations and supports
//!          → node attributes → edge attributes → network attributes
//! ```
//!
//! [`Export::export`] consumes the policy, so an exporter cannot be reused
//! once its graph has been handed out.

use crate::config::ExportConfig;
use crate::cx::{
    aspect, CxAttribute, CxCitation, CxCitationLink, CxDocument, CxEdge, CxId, CxNamespace,
    CxNetworkAttribute, CxNode, CxSupport, CxSupportLink,
};
use crate::error::Result;
use crate::registry::{EntityKind, EntityRegistry};
use crate::stats::ExportStats;
use crate::vocab::{self, cx, cxa, cxi};
use cxrdf_graph::vocab::{rdf, rdfs};
use cxrdf_graph::{
    BlankNode, Literal, NamedNode, NamedOrBlankNode, NamespaceMap, RdfGraph, Term, Triple,
};
use log::{debug, info, trace, warn};
use serde_json::Value;
use std::time::Instant;

/// Prefixes the exporter binds itself; `@context` may not rebind them.
const RESERVED_PREFIXES: [&str; 3] = [cx::PREFIX, cxa::PREFIX, cxi::PREFIX];

/// Entities touched by one edge record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeEntities {
    /// The edge itself
    pub edge: BlankNode,
    /// Source node
    pub source: BlankNode,
    /// Target node
    pub target: BlankNode,
}

/// Graph, document root and entity caches for one export.
#[derive(Debug)]
pub struct Exporter {
    graph: RdfGraph,
    document: BlankNode,
    registry: EntityRegistry,
    context: NamespaceMap,
    config: ExportConfig,
    stats: ExportStats,
    started: Instant,
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter {
    /// Create an exporter over a fresh graph with the default configuration.
    pub fn new() -> Self {
        Self::from_parts(RdfGraph::new(), ExportConfig::default())
    }

    /// Create an exporter that adds to an existing graph.
    pub fn with_graph(graph: RdfGraph) -> Self {
        Self::from_parts(graph, ExportConfig::default())
    }

    /// Create an exporter over a fresh graph with the given configuration.
    pub fn with_config(config: ExportConfig) -> Self {
        Self::from_parts(RdfGraph::new(), config)
    }

    /// Create an exporter from a graph and a configuration.
    ///
    /// Binds `cx` (and `cxa`/`cxi` when configured), then emits
    /// `(document, rdf:type, cx:network)`. Never fails.
    pub fn from_parts(mut graph: RdfGraph, config: ExportConfig) -> Self {
        let mut bindings = vec![(cx::PREFIX, cx::NS)];
        if config.bind_minted_prefixes {
            bindings.push((cxa::PREFIX, cxa::NS));
            bindings.push((cxi::PREFIX, cxi::NS));
        }
        for (prefix, namespace) in bindings {
            if let Err(e) = graph.bind(prefix, namespace) {
                warn!("Could not bind prefix '{prefix}': {e}");
            }
        }

        let document = BlankNode::default();
        graph.insert(Triple::new(
            document.clone(),
            vocab::term(rdf::TYPE),
            vocab::term(cx::NETWORK),
        ));
        debug!("Created document root {document}");

        let stats = ExportStats {
            policy: config.policy.to_string(),
            ..Default::default()
        };

        Self {
            graph,
            document,
            registry: EntityRegistry::new(),
            context: NamespaceMap::new(),
            config,
            stats,
            started: Instant::now(),
        }
    }

    /// Entity for `(kind, id)`, created on first use.
    ///
    /// The first call for a given pair emits exactly three triples (type,
    /// id literal, document link); later calls emit nothing and return the
    /// same blank node.
    pub fn ensure(&mut self, kind: EntityKind, id: CxId) -> BlankNode {
        if let Some(entity) = self.registry.get(kind, id) {
            return entity.clone();
        }

        let entity = BlankNode::default();
        self.add_about(&entity, vocab::term(rdf::TYPE), vocab::term(kind.class()));
        self.add_about(&entity, vocab::term(kind.id_predicate()), Literal::from(id));
        self.add_document_triple(vocab::term(kind.document_predicate()), entity.clone());
        trace!("Created {kind} {id} as {entity}");

        let (entity, _) = self.registry.insert(kind, id, entity);
        entity
    }

    /// Entity for CX node `id`.
    pub fn ensure_node(&mut self, id: CxId) -> BlankNode {
        self.ensure(EntityKind::Node, id)
    }

    /// Entity for CX edge `id`.
    pub fn ensure_edge(&mut self, id: CxId) -> BlankNode {
        self.ensure(EntityKind::Edge, id)
    }

    /// Entity for CX citation `id`.
    pub fn ensure_citation(&mut self, id: CxId) -> BlankNode {
        self.ensure(EntityKind::Citation, id)
    }

    /// Entity for CX support `id`.
    pub fn ensure_support(&mut self, id: CxId) -> BlankNode {
        self.ensure(EntityKind::Support, id)
    }

    /// Like [`Exporter::ensure`], but logs ids the document never declared.
    pub fn resolve(&mut self, kind: EntityKind, id: CxId, referenced_from: &str) -> BlankNode {
        if !self.registry.contains(kind, id) {
            debug!("'{referenced_from}' references undeclared {kind} {id}");
        }
        self.ensure(kind, id)
    }

    /// Emit `(entity, rdfs:label, text)`. Labels accumulate.
    pub fn add_label(&mut self, entity: &BlankNode, text: &str) -> bool {
        self.add_about(entity, vocab::term(rdfs::LABEL), Literal::new_simple_literal(text))
    }

    /// Emit `(document, predicate, object)`.
    pub fn add_document_triple(&mut self, predicate: NamedNode, object: impl Into<Term>) -> bool {
        let document = self.document.clone();
        self.add_about(&document, predicate, object)
    }

    /// Emit a triple about a blank node.
    pub fn add_about(
        &mut self,
        subject: &BlankNode,
        predicate: NamedNode,
        object: impl Into<Term>,
    ) -> bool {
        self.graph.add(subject.clone(), predicate, object)
    }

    /// Emit a triple about any resource.
    pub fn add(
        &mut self,
        subject: impl Into<NamedOrBlankNode>,
        predicate: NamedNode,
        object: impl Into<Term>,
    ) -> bool {
        self.graph.add(subject, predicate, object)
    }

    /// Bind a prefix on the output graph.
    ///
    /// # Errors
    ///
    /// Fails if the prefix is not a valid Turtle prefix or the namespace is not
    /// an absolute IRI.
    pub fn bind_namespace(&mut self, prefix: &str, namespace: &str) -> Result<()> {
        Ok(self.graph.bind(prefix, namespace)?)
    }

    /// Register one `@context` declaration.
    ///
    /// The prefix becomes available to [`Exporter::resolve_curie`]; depending
    /// on the configuration it is also bound on the graph and recorded as a
    /// `cx:namespace` entity linked from the document.
    pub fn declare_namespace(&mut self, namespace: &CxNamespace) {
        let CxNamespace { prefix, uri } = namespace;

        if let Err(e) = self.context.bind(prefix.as_str(), uri.as_str()) {
            debug!("Ignoring @context entry '{prefix}' for CURIE resolution: {e}");
        }

        if self.config.bind_context_prefixes {
            if RESERVED_PREFIXES.contains(&prefix.as_str()) {
                debug!("@context may not rebind reserved prefix '{prefix}'");
            } else if let Err(e) = self.graph.bind(prefix, uri) {
                debug!("Not binding @context prefix '{prefix}': {e}");
            }
        }

        if self.config.emit_namespace_entities {
            let entity = BlankNode::default();
            self.add_about(&entity, vocab::term(rdf::TYPE), vocab::term(cx::NAMESPACE));
            self.add_about(
                &entity,
                vocab::term(cx::NAMESPACE_PREFIX),
                Literal::new_simple_literal(prefix),
            );
            self.add_about(
                &entity,
                vocab::term(cx::NAMESPACE_URI),
                Literal::new_simple_literal(uri),
            );
            self.add_document_triple(vocab::term(cx::HAS_NAMESPACE), entity);
        }
    }

    /// Expand a CURIE whose prefix was declared in `@context`.
    ///
    /// Returns `None` for values that are not CURIEs, use an undeclared
    /// prefix, or do not expand to a valid IRI.
    pub fn resolve_curie(&self, value: &str) -> Option<NamedNode> {
        self.context.expand(value.trim())
    }

    /// Node entity for a `nodes` record, labelled with its name.
    pub fn declare_node(&mut self, node: &CxNode) -> BlankNode {
        let entity = self.ensure_node(node.id);
        if self.config.label_nodes {
            if let Some(name) = &node.name {
                self.add_label(&entity, name);
            }
        }
        entity
    }

    /// Edge entity for an `edges` record with its structural links.
    ///
    /// Emits `cx:edge_source`, `cx:edge_target` and, when present, the
    /// `cx:edge_interaction` literal.
    pub fn declare_edge(&mut self, edge: &CxEdge) -> EdgeEntities {
        let entity = self.ensure_edge(edge.id);
        let source = self.resolve(EntityKind::Node, edge.source, aspect::EDGES);
        let target = self.resolve(EntityKind::Node, edge.target, aspect::EDGES);

        self.add_about(&entity, vocab::term(cx::EDGE_SOURCE), source.clone());
        self.add_about(&entity, vocab::term(cx::EDGE_TARGET), target.clone());
        if let Some(interaction) = &edge.interaction {
            self.add_about(
                &entity,
                vocab::term(cx::EDGE_INTERACTION),
                Literal::new_simple_literal(interaction),
            );
        }

        EdgeEntities {
            edge: entity,
            source,
            target,
        }
    }

    /// Label the document from the `name` network attribute.
    ///
    /// Returns whether the attribute was the network name.
    pub fn label_network(&mut self, attribute: &CxNetworkAttribute) -> bool {
        if attribute.name != "name" {
            return false;
        }
        if self.config.label_nodes {
            let document = self.document.clone();
            for name in attribute.value.strings() {
                self.add_label(&document, name);
            }
        }
        true
    }

    /// Link every `(owner, target)` pair of an attachment record.
    pub fn attach(
        &mut self,
        owners: (EntityKind, &[CxId]),
        targets: (EntityKind, &[CxId]),
        predicate: &'static str,
        referenced_from: &str,
    ) {
        let (owner_kind, owner_ids) = owners;
        let (target_kind, target_ids) = targets;
        for &owner_id in owner_ids {
            let owner = self.resolve(owner_kind, owner_id, referenced_from);
            for &target_id in target_ids {
                let target = self.resolve(target_kind, target_id, referenced_from);
                self.add_about(&owner, vocab::term(predicate), target);
            }
        }
    }

    /// The document root.
    pub fn document(&self) -> &BlankNode {
        &self.document
    }

    /// The graph built so far.
    pub fn graph(&self) -> &RdfGraph {
        &self.graph
    }

    /// The entity caches.
    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    /// Active configuration.
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// `@context` declarations seen so far.
    pub fn context(&self) -> &NamespaceMap {
        &self.context
    }

    fn record_input(&mut self, document: &CxDocument) {
        self.stats.records_per_aspect = document.aspect_counts.clone();
        self.stats.skipped_aspects = document.skipped_aspects.clone();
    }

    /// Hand out the graph and the statistics of this export.
    pub fn finish(mut self) -> (RdfGraph, ExportStats) {
        for kind in EntityKind::ALL {
            self.stats.entities.insert(kind, self.registry.len(kind));
        }
        self.stats.triple_count = self.graph.len();
        self.stats.elapsed = self.started.elapsed();
        (self.graph, self.stats)
    }
}

/// An export policy: per-record hooks over a shared [`Exporter`].
///
/// Implementors decide the triple shapes for nodes, edges and attributes.
/// Citations, supports, attachments and `@context` have shared defaults that
/// policies may override.
pub trait Export: Sized {
    /// Policy name as accepted by the driver
    const NAME: &'static str;

    /// Wrap an exporter.
    fn new(exporter: Exporter) -> Self;

    /// Shared base, mutably.
    fn exporter_mut(&mut self) -> &mut Exporter;

    /// Unwrap the base.
    fn into_exporter(self) -> Exporter;

    /// Export one `nodes` record.
    fn export_node(&mut self, node: &CxNode) -> Result<()>;

    /// Export one `edges` record.
    fn export_edge(&mut self, edge: &CxEdge) -> Result<()>;

    /// Export one `nodeAttributes` record.
    fn export_node_attribute(&mut self, attribute: &CxAttribute) -> Result<()>;

    /// Export one `edgeAttributes` record.
    fn export_edge_attribute(&mut self, attribute: &CxAttribute) -> Result<()>;

    /// Export one `networkAttributes` record.
    fn export_network_attribute(&mut self, attribute: &CxNetworkAttribute) -> Result<()>;

    /// Export one `citations` record as Dublin Core fields on the citation.
    fn export_citation(&mut self, citation: &CxCitation) -> Result<()> {
        let exporter = self.exporter_mut();
        let entity = exporter.ensure_citation(citation.id);
        let fields = [
            (cx::CITATION_TITLE, &citation.title),
            (cx::CITATION_CONTRIBUTOR, &citation.contributor),
            (cx::CITATION_IDENTIFIER, &citation.identifier),
            (cx::CITATION_TYPE, &citation.citation_type),
            (cx::CITATION_DESCRIPTION, &citation.description),
        ];
        for (predicate, value) in fields {
            if let Some(value) = value {
                exporter.add_about(
                    &entity,
                    vocab::term(predicate),
                    Literal::new_simple_literal(value),
                );
            }
        }
        Ok(())
    }

    /// Export one `supports` record with its text and source citation.
    fn export_support(&mut self, support: &CxSupport) -> Result<()> {
        let exporter = self.exporter_mut();
        let entity = exporter.ensure_support(support.id);
        if let Some(text) = &support.text {
            exporter.add_about(
                &entity,
                vocab::term(cx::SUPPORT_TEXT),
                Literal::new_simple_literal(text),
            );
        }
        if let Some(citation_id) = support.citation {
            let citation = exporter.resolve(EntityKind::Citation, citation_id, aspect::SUPPORTS);
            exporter.add_about(&entity, vocab::term(cx::SUPPORT_CITATION), citation);
        }
        Ok(())
    }

    /// Export one `edgeCitations` record.
    fn export_edge_citations(&mut self, link: &CxCitationLink) -> Result<()> {
        self.exporter_mut().attach(
            (EntityKind::Edge, link.property_of.as_slice()),
            (EntityKind::Citation, link.citations.as_slice()),
            cx::EDGE_HAS_CITATION,
            aspect::EDGE_CITATIONS,
        );
        Ok(())
    }

    /// Export one `edgeSupports` record.
    fn export_edge_supports(&mut self, link: &CxSupportLink) -> Result<()> {
        self.exporter_mut().attach(
            (EntityKind::Edge, link.property_of.as_slice()),
            (EntityKind::Support, link.supports.as_slice()),
            cx::EDGE_HAS_SUPPORT,
            aspect::EDGE_SUPPORTS,
        );
        Ok(())
    }

    /// Export one `nodeCitations` record.
    fn export_node_citations(&mut self, link: &CxCitationLink) -> Result<()> {
        self.exporter_mut().attach(
            (EntityKind::Node, link.property_of.as_slice()),
            (EntityKind::Citation, link.citations.as_slice()),
            cx::NODE_HAS_CITATION,
            aspect::NODE_CITATIONS,
        );
        Ok(())
    }

    /// Export one `nodeSupports` record.
    fn export_node_supports(&mut self, link: &CxSupportLink) -> Result<()> {
        self.exporter_mut().attach(
            (EntityKind::Node, link.property_of.as_slice()),
            (EntityKind::Support, link.supports.as_slice()),
            cx::NODE_HAS_SUPPORT,
            aspect::NODE_SUPPORTS,
        );
        Ok(())
    }

    /// Export one `@context` declaration.
    fn export_context(&mut self, namespace: &CxNamespace) -> Result<()> {
        self.exporter_mut().declare_namespace(namespace);
        Ok(())
    }

    /// Walk a parsed document, calling the hooks in walk order.
    fn export_document(&mut self, document: &CxDocument) -> Result<()> {
        for namespace in &document.namespaces {
            self.export_context(namespace)?;
        }
        for node in &document.nodes {
            trace!("Exporting node {}", node.id);
            self.export_node(node)?;
        }
        for edge in &document.edges {
            trace!("Exporting edge {}", edge.id);
            self.export_edge(edge)?;
        }
        for citation in &document.citations {
            self.export_citation(citation)?;
        }
        for support in &document.supports {
            self.export_support(support)?;
        }
        for link in &document.edge_citations {
            self.export_edge_citations(link)?;
        }
        for link in &document.edge_supports {
            self.export_edge_supports(link)?;
        }
        for link in &document.node_citations {
            self.export_node_citations(link)?;
        }
        for link in &document.node_supports {
            self.export_node_supports(link)?;
        }
        for attribute in &document.node_attributes {
            trace!("Exporting node attribute '{}' of {}", attribute.name, attribute.property_of);
            self.export_node_attribute(attribute)?;
        }
        for attribute in &document.edge_attributes {
            trace!("Exporting edge attribute '{}' of {}", attribute.name, attribute.property_of);
            self.export_edge_attribute(attribute)?;
        }
        for attribute in &document.network_attributes {
            self.export_network_attribute(attribute)?;
        }
        Ok(())
    }

    /// Export a CX document and return the populated graph.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Structure`](crate::ExportError::Structure) when
    /// the input does not have the CX aspect structure. No graph is returned
    /// in that case.
    fn export(self, cx_json: &Value) -> Result<RdfGraph> {
        self.export_with_stats(cx_json).map(|(graph, _)| graph)
    }

    /// Like [`Export::export`], also returning statistics.
    ///
    /// # Errors
    ///
    /// See [`Export::export`].
    fn export_with_stats(mut self, cx_json: &Value) -> Result<(RdfGraph, ExportStats)> {
        let document = CxDocument::from_value(cx_json)?;
        info!(
            "Exporting CX network with policy '{}' ({} records)",
            Self::NAME,
            document.record_count()
        );

        self.export_document(&document)?;

        let mut exporter = self.into_exporter();
        exporter.record_input(&document);
        let (graph, mut stats) = exporter.finish();
        stats.policy = Self::NAME.to_string();

        info!(
            "Exported {} nodes, {} edges, {} citations, {} supports as {} triples in {:?}",
            stats.entity_count(EntityKind::Node),
            stats.entity_count(EntityKind::Edge),
            stats.entity_count(EntityKind::Citation),
            stats.entity_count(EntityKind::Support),
            stats.triple_count,
            stats.elapsed
        );
        Ok((graph, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(graph: &RdfGraph, predicate: &'static str) -> usize {
        graph
            .triples_matching(None, Some(&vocab::term(predicate)), None)
            .len()
    }

    #[test]
    fn test_construction_creates_document() {
        let exporter = Exporter::new();
        let graph = exporter.graph();

        assert_eq!(graph.len(), 1);
        assert!(graph.contains(&Triple::new(
            exporter.document().clone(),
            vocab::term(rdf::TYPE),
            vocab::term(cx::NETWORK),
        )));
        assert_eq!(graph.namespace(cx::PREFIX), Some(cx::NS));
        assert_eq!(graph.namespace(cxa::PREFIX), Some(cxa::NS));
    }

    #[test]
    fn test_minimal_config_skips_minted_prefixes() {
        let exporter = Exporter::with_config(ExportConfig::minimal());
        assert_eq!(exporter.graph().namespace(cx::PREFIX), Some(cx::NS));
        assert_eq!(exporter.graph().namespace(cxi::PREFIX), None);
    }

    #[test]
    fn test_ensure_node_is_idempotent() {
        let mut exporter = Exporter::new();
        let before = exporter.graph().len();

        let first = exporter.ensure_node(42);
        assert_eq!(exporter.graph().len(), before + 3);

        let second = exporter.ensure_node(42);
        assert_eq!(first, second);
        assert_eq!(exporter.graph().len(), before + 3);
    }

    #[test]
    fn test_ensure_distinct_ids() {
        let mut exporter = Exporter::new();
        let a = exporter.ensure_edge(1);
        let b = exporter.ensure_edge(2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_kinds_do_not_share_entities() {
        let mut exporter = Exporter::new();
        let node = exporter.ensure_node(5);
        let edge = exporter.ensure_edge(5);
        let citation = exporter.ensure_citation(5);
        let support = exporter.ensure_support(5);

        let entities = [node, edge, citation, support];
        for (i, a) in entities.iter().enumerate() {
            for b in &entities[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(exporter.registry().total(), 4);
    }

    #[test]
    fn test_ensure_emits_kind_vocabulary() {
        let mut exporter = Exporter::new();
        let support = exporter.ensure_support(7);
        let graph = exporter.graph();
        let subject = NamedOrBlankNode::from(support.clone());

        assert_eq!(
            graph.objects(&subject, &vocab::term(rdf::TYPE)),
            vec![&Term::from(vocab::term(cx::SUPPORT))]
        );
        assert_eq!(
            graph.objects(&subject, &vocab::term(cx::SUPPORT_HAS_ID)),
            vec![&Term::from(Literal::from(7i64))]
        );
        assert_eq!(
            graph.subjects(&vocab::term(cx::HAS_SUPPORT), &Term::from(support)),
            vec![&NamedOrBlankNode::from(exporter.document().clone())]
        );
    }

    #[test]
    fn test_labels_accumulate() {
        let mut exporter = Exporter::new();
        let node = exporter.ensure_node(0);
        assert!(exporter.add_label(&node, "A"));
        assert!(exporter.add_label(&node, "B"));

        let labels = exporter
            .graph()
            .objects(&NamedOrBlankNode::from(node), &vocab::term(rdfs::LABEL))
            .len();
        assert_eq!(labels, 2);
    }

    #[test]
    fn test_resolve_creates_undeclared_entities() {
        let mut exporter = Exporter::new();
        let node = exporter.resolve(EntityKind::Node, 9, aspect::EDGES);
        assert_eq!(exporter.registry().get(EntityKind::Node, 9), Some(&node));
        assert_eq!(count(exporter.graph(), cx::HAS_NODE), 1);
    }

    #[test]
    fn test_declare_namespace() {
        let mut exporter = Exporter::new();
        exporter.declare_namespace(&CxNamespace {
            prefix: "test".into(),
            uri: "http://test.com/#".into(),
        });

        assert_eq!(exporter.graph().namespace("test"), Some("http://test.com/#"));
        assert_eq!(count(exporter.graph(), cx::HAS_NAMESPACE), 1);
        assert_eq!(
            exporter.resolve_curie("test:A"),
            Some(NamedNode::new_unchecked("http://test.com/#A"))
        );
        assert_eq!(exporter.resolve_curie("other:A"), None);
        assert_eq!(exporter.resolve_curie("plain"), None);
    }

    #[test]
    fn test_declare_namespace_skips_invalid_uri() {
        let mut exporter = Exporter::new();
        exporter.declare_namespace(&CxNamespace {
            prefix: "bad".into(),
            uri: "http://ex.org/a b>".into(),
        });

        assert_eq!(exporter.graph().namespace("bad"), None);
        assert!(!exporter.context().contains_prefix("bad"));
        assert_eq!(exporter.resolve_curie("bad:x"), None);
        // The declaration itself is still recorded
        assert_eq!(count(exporter.graph(), cx::HAS_NAMESPACE), 1);
    }

    #[test]
    fn test_context_cannot_rebind_cx() {
        let mut exporter = Exporter::new();
        exporter.declare_namespace(&CxNamespace {
            prefix: "cx".into(),
            uri: "http://elsewhere.org/".into(),
        });
        assert_eq!(exporter.graph().namespace(cx::PREFIX), Some(cx::NS));
    }

    #[test]
    fn test_attach_links_every_pair() {
        let mut exporter = Exporter::new();
        exporter.attach(
            (EntityKind::Edge, &[0, 1][..]),
            (EntityKind::Citation, &[3][..]),
            cx::EDGE_HAS_CITATION,
            aspect::EDGE_CITATIONS,
        );
        assert_eq!(count(exporter.graph(), cx::EDGE_HAS_CITATION), 2);
        assert_eq!(exporter.registry().len(EntityKind::Citation), 1);
    }

    #[test]
    fn test_finish_reports_counts() {
        let mut exporter = Exporter::new();
        exporter.ensure_node(0);
        exporter.ensure_node(1);
        exporter.ensure_edge(0);

        let (graph, stats) = exporter.finish();
        assert_eq!(stats.triple_count, graph.len());
        assert_eq!(stats.entity_count(EntityKind::Node), 2);
        assert_eq!(stats.entity_count(EntityKind::Edge), 1);
        assert_eq!(stats.entity_count(EntityKind::Support), 0);
    }
}
