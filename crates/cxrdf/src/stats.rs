use crate::registry::EntityKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Statistics collected during one export
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportStats {
    /// Policy that produced the graph
    pub policy: String,

    /// Records read per aspect name
    pub records_per_aspect: BTreeMap<String, usize>,

    /// Aspects present in the input but not mapped
    pub skipped_aspects: Vec<String>,

    /// Entities created per kind
    pub entities: BTreeMap<EntityKind, usize>,

    /// Triples in the finished graph
    pub triple_count: usize,

    /// Wall time of the export
    #[serde(with = "duration_millis")]
    pub elapsed: Duration,
}

// Helper module for serializing Duration
mod duration_millis {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        u64::try_from(duration.as_millis())
            .unwrap_or(u64::MAX)
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis: u64 = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

impl ExportStats {
    /// Records read across all aspects
    pub fn total_records(&self) -> usize {
        self.records_per_aspect.values().sum()
    }

    /// Entities of one kind
    pub fn entity_count(&self, kind: EntityKind) -> usize {
        self.entities.get(&kind).copied().unwrap_or(0)
    }

    /// Entities across all kinds
    pub fn total_entities(&self) -> usize {
        self.entities.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals() {
        let mut stats = ExportStats::default();
        stats.records_per_aspect.insert("nodes".into(), 5);
        stats.records_per_aspect.insert("edges".into(), 2);
        stats.entities.insert(EntityKind::Node, 5);

        assert_eq!(stats.total_records(), 7);
        assert_eq!(stats.entity_count(EntityKind::Node), 5);
        assert_eq!(stats.entity_count(EntityKind::Edge), 0);
        assert_eq!(stats.total_entities(), 5);
    }

    #[test]
    fn test_serializes_elapsed_as_millis() {
        let stats = ExportStats {
            elapsed: Duration::from_millis(1500),
            ..Default::default()
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["elapsed"], 1500);
    }

    #[test]
    fn test_elapsed_millis_saturate() {
        let stats = ExportStats {
            elapsed: Duration::MAX,
            ..Default::default()
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["elapsed"], u64::MAX);
    }
}
