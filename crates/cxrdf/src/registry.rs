//! Identifier → entity cache for CX-numbered entities.
//!
//! One store keyed by `(EntityKind, id)` replaces four parallel maps. The same
//! numeric id under two kinds names two different entities.

use crate::cx::CxId;
use crate::vocab::cx;
use cxrdf_graph::BlankNode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Kind of CX entity with its own id space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Entry of `nodes`
    Node,
    /// Entry of `edges`
    Edge,
    /// Entry of `citations`
    Citation,
    /// Entry of `supports`
    Support,
}

impl EntityKind {
    /// Every kind, in walk order.
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Node,
        EntityKind::Edge,
        EntityKind::Citation,
        EntityKind::Support,
    ];

    /// Class the entity is typed with.
    pub fn class(&self) -> &'static str {
        match self {
            EntityKind::Node => cx::NODE,
            EntityKind::Edge => cx::EDGE,
            EntityKind::Citation => cx::CITATION,
            EntityKind::Support => cx::SUPPORT,
        }
    }

    /// Predicate carrying the CX id literal.
    pub fn id_predicate(&self) -> &'static str {
        match self {
            EntityKind::Node => cx::HAS_ID,
            EntityKind::Edge => cx::EDGE_HAS_ID,
            EntityKind::Citation => cx::CITATION_HAS_ID,
            EntityKind::Support => cx::SUPPORT_HAS_ID,
        }
    }

    /// Predicate linking the document to the entity.
    pub fn document_predicate(&self) -> &'static str {
        match self {
            EntityKind::Node => cx::HAS_NODE,
            EntityKind::Edge => cx::HAS_EDGE,
            EntityKind::Citation => cx::HAS_CITATION,
            EntityKind::Support => cx::HAS_SUPPORT,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Node => write!(f, "node"),
            EntityKind::Edge => write!(f, "edge"),
            EntityKind::Citation => write!(f, "citation"),
            EntityKind::Support => write!(f, "support"),
        }
    }
}

/// Insert-only map from `(kind, id)` to the blank node representing it.
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    entities: HashMap<(EntityKind, CxId), BlankNode>,
}

impl EntityRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entity registered for `(kind, id)`.
    pub fn get(&self, kind: EntityKind, id: CxId) -> Option<&BlankNode> {
        self.entities.get(&(kind, id))
    }

    /// Register an entity if `(kind, id)` is still free.
    ///
    /// Returns the entity now registered and whether it was newly inserted;
    /// an existing entry is never replaced.
    pub fn insert(&mut self, kind: EntityKind, id: CxId, entity: BlankNode) -> (BlankNode, bool) {
        match self.entities.get(&(kind, id)) {
            Some(existing) => (existing.clone(), false),
            None => {
                self.entities.insert((kind, id), entity.clone());
                (entity, true)
            }
        }
    }

    /// Check if `(kind, id)` is registered.
    pub fn contains(&self, kind: EntityKind, id: CxId) -> bool {
        self.entities.contains_key(&(kind, id))
    }

    /// Number of entities of one kind.
    pub fn len(&self, kind: EntityKind) -> usize {
        self.entities.keys().filter(|(k, _)| *k == kind).count()
    }

    /// Number of entities across all kinds.
    pub fn total(&self) -> usize {
        self.entities.len()
    }

    /// Check if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entities of one kind, ordered by CX id.
    pub fn iter(&self, kind: EntityKind) -> Vec<(CxId, &BlankNode)> {
        let mut entries: Vec<(CxId, &BlankNode)> = self
            .entities
            .iter()
            .filter(|((k, _), _)| *k == kind)
            .map(|((_, id), entity)| (*id, entity))
            .collect();
        entries.sort_by_key(|(id, _)| *id);
        entries
    }
}
