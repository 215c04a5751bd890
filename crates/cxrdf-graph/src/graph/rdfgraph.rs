//! The in-memory RDF graph.

use super::namespace::NamespaceMap;
use crate::error::Result;
use log::{debug, trace};
use oxrdf::{NamedNode, NamedOrBlankNode, Term, Triple};
use std::collections::{HashMap, HashSet};

/// An in-memory set of RDF triples with namespace bindings.
///
/// `RdfGraph` has set semantics: inserting a triple that is already present
/// is a no-op. Iteration follows insertion order, so serializers produce
/// stable output for a given insertion sequence.
#[derive(Debug, Clone, Default)]
pub struct RdfGraph {
    triples: Vec<Triple>,
    // Membership check for set semantics
    seen: HashSet<Triple>,
    // Position indexes for pattern lookups
    by_subject: HashMap<NamedOrBlankNode, Vec<usize>>,
    by_predicate: HashMap<NamedNode, Vec<usize>>,
    namespaces: NamespaceMap,
}

impl RdfGraph {
    /// Create an empty graph with no bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a triple.
    ///
    /// Returns `false` if an identical triple was already present.
    pub fn insert(&mut self, triple: Triple) -> bool {
        if self.seen.contains(&triple) {
            trace!("Skipping duplicate triple {triple}");
            return false;
        }

        let position = self.triples.len();
        self.by_subject
            .entry(triple.subject.clone())
            .or_default()
            .push(position);
        self.by_predicate
            .entry(triple.predicate.clone())
            .or_default()
            .push(position);
        self.seen.insert(triple.clone());
        self.triples.push(triple);
        true
    }

    /// Build and insert a triple from its parts.
    ///
    /// Returns `false` if an identical triple was already present.
    pub fn add(
        &mut self,
        subject: impl Into<NamedOrBlankNode>,
        predicate: impl Into<NamedNode>,
        object: impl Into<Term>,
    ) -> bool {
        self.insert(Triple::new(subject, predicate, object))
    }

    /// Number of triples.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Check if the graph has no triples.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterate triples in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Check if a triple is present.
    pub fn contains(&self, triple: &Triple) -> bool {
        self.seen.contains(triple)
    }

    /// All triples matching a pattern; `None` is a wildcard.
    ///
    /// Results are in insertion order.
    pub fn triples_matching(
        &self,
        subject: Option<&NamedOrBlankNode>,
        predicate: Option<&NamedNode>,
        object: Option<&Term>,
    ) -> Vec<&Triple> {
        let candidates: Box<dyn Iterator<Item = &Triple> + '_> = match (subject, predicate) {
            (Some(s), _) => Box::new(self.positions(self.by_subject.get(s))),
            (None, Some(p)) => Box::new(self.positions(self.by_predicate.get(p))),
            (None, None) => Box::new(self.triples.iter()),
        };

        candidates
            .filter(|t| subject.map_or(true, |s| &t.subject == s))
            .filter(|t| predicate.map_or(true, |p| &t.predicate == p))
            .filter(|t| object.map_or(true, |o| &t.object == o))
            .collect()
    }

    /// Objects of all `(subject, predicate, ?)` triples.
    pub fn objects(&self, subject: &NamedOrBlankNode, predicate: &NamedNode) -> Vec<&Term> {
        self.triples_matching(Some(subject), Some(predicate), None)
            .into_iter()
            .map(|t| &t.object)
            .collect()
    }

    /// Subjects of all `(?, predicate, object)` triples.
    pub fn subjects(&self, predicate: &NamedNode, object: &Term) -> Vec<&NamedOrBlankNode> {
        self.triples_matching(None, Some(predicate), Some(object))
            .into_iter()
            .map(|t| &t.subject)
            .collect()
    }

    /// Distinct subjects in first-appearance order.
    pub fn subject_terms(&self) -> Vec<&NamedOrBlankNode> {
        let mut seen = HashSet::new();
        self.triples
            .iter()
            .map(|t| &t.subject)
            .filter(|s| seen.insert(*s))
            .collect()
    }

    /// Bind a namespace prefix for this graph only.
    ///
    /// # Errors
    ///
    /// See [`NamespaceMap::bind`]; a rejected binding leaves the graph unchanged.
    pub fn bind(&mut self, prefix: &str, namespace: &str) -> Result<()> {
        self.namespaces.bind(prefix, namespace)?;
        debug!("Bound prefix {prefix}: -> <{namespace}>");
        Ok(())
    }

    /// Namespace bound to a prefix.
    pub fn namespace(&self, prefix: &str) -> Option<&str> {
        self.namespaces.get(prefix)
    }

    /// All bindings of this graph.
    pub fn namespaces(&self) -> &NamespaceMap {
        &self.namespaces
    }

    /// Insert every triple and binding of `other`.
    ///
    /// Returns the number of triples that were new to this graph.
    pub fn merge(&mut self, other: &RdfGraph) -> usize {
        for (prefix, namespace) in other.namespaces.iter() {
            // Already validated when bound on `other`
            let _ = self.namespaces.bind(prefix, namespace);
        }
        other
            .triples
            .iter()
            .filter(|t| self.insert((*t).clone()))
            .count()
    }

    fn positions<'a>(
        &'a self,
        positions: Option<&'a Vec<usize>>,
    ) -> impl Iterator<Item = &'a Triple> {
        positions
            .into_iter()
            .flatten()
            .filter_map(|&i| self.triples.get(i))
    }
}

impl<'a> IntoIterator for &'a RdfGraph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::{BlankNode, Literal};

    fn p(local: &str) -> NamedNode {
        NamedNode::new_unchecked(format!("http://example.org/{local}"))
    }

    fn blank(label: &str) -> NamedOrBlankNode {
        BlankNode::new_unchecked(label).into()
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut graph = RdfGraph::new();
        let s = BlankNode::new_unchecked("s");
        assert!(graph.add(s.clone(), p("name"), Literal::new_simple_literal("A")));
        assert!(!graph.add(s, p("name"), Literal::new_simple_literal("A")));
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_pattern_matching() {
        let mut graph = RdfGraph::new();
        let a = blank("a");
        let b = blank("b");
        graph.add(a.clone(), p("knows"), b.clone());
        graph.add(a.clone(), p("name"), Literal::new_simple_literal("A"));
        graph.add(b.clone(), p("name"), Literal::new_simple_literal("B"));

        let b_term = Term::from(b.clone());
        assert_eq!(graph.triples_matching(Some(&a), None, None).len(), 2);
        assert_eq!(graph.triples_matching(None, Some(&p("name")), None).len(), 2);
        assert_eq!(graph.triples_matching(None, None, Some(&b_term)).len(), 1);
        assert_eq!(graph.subjects(&p("knows"), &b_term), vec![&a]);
        assert_eq!(
            graph.objects(&b, &p("name")),
            vec![&Term::from(Literal::new_simple_literal("B"))]
        );
    }

    #[test]
    fn test_subject_terms_first_appearance() {
        let mut graph = RdfGraph::new();
        let a = blank("a");
        let b = blank("b");
        graph.add(b.clone(), p("x"), Literal::from(1));
        graph.add(a.clone(), p("x"), Literal::from(2));
        graph.add(b.clone(), p("y"), Literal::from(3));
        assert_eq!(graph.subject_terms(), vec![&b, &a]);
    }

    #[test]
    fn test_rejected_binding_leaves_graph_unchanged() {
        let mut graph = RdfGraph::new();
        assert!(graph.bind("bad", "http://ex.org/a b>").is_err());
        assert_eq!(graph.namespace("bad"), None);
        assert!(graph.namespaces().is_empty());
    }

    #[test]
    fn test_merge() {
        let mut left = RdfGraph::new();
        left.bind("ex", "http://example.org/").unwrap();
        left.add(blank("a"), p("x"), Literal::from(1));

        let mut right = RdfGraph::new();
        right.bind("other", "http://other.org/").unwrap();
        right.add(blank("a"), p("x"), Literal::from(1));
        right.add(blank("a"), p("x"), Literal::from(2));

        assert_eq!(left.merge(&right), 1);
        assert_eq!(left.len(), 2);
        assert_eq!(left.namespace("other"), Some("http://other.org/"));
    }
}
